//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod audio_format;
mod call_type;
mod sentiment;
mod strictness;
mod tone;

pub use audio_format::*;
pub use call_type::*;
pub use sentiment::*;
pub use strictness::*;
pub use tone::*;
