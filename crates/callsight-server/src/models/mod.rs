//! Callsight API Data Models
//!
//! - Analysis: submission results and error bodies
//! - Organization: profile and AI settings
//! - Prompt: prompt preview
//! - Industry: catalog listing

mod analysis;
mod industry;
mod organization;
mod prompt;

pub use analysis::*;
pub use industry::*;
pub use organization::*;
pub use prompt::*;
