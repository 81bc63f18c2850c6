//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod analysis_repository;
mod organization_repository;
mod rate_limit_repository;

pub use analysis_repository::*;
pub use organization_repository::*;
pub use rate_limit_repository::*;
