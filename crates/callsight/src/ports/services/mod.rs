//! Service Ports
//!
//! Abstract interfaces for external services.

mod audit_log;
mod generative_model;

pub use audit_log::*;
pub use generative_model::*;
