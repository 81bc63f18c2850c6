//! Domain Services
//!
//! Pure pipeline stages. None of these perform I/O; the server wires them
//! to repositories and the model backend.

mod admission;
mod audio;
mod catalog_data;
mod context_resolver;
mod industry_catalog;
mod output_schema;
mod prompt_composer;
mod result_normalizer;

pub use admission::*;
pub use audio::*;
pub use context_resolver::*;
pub use industry_catalog::*;
pub use output_schema::*;
pub use prompt_composer::*;
pub use result_normalizer::*;
