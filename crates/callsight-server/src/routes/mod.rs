//! Callsight API Routes
//!
//! - /callsight/orgs - Organization profiles and AI settings
//! - /callsight/orgs/:id/analyses - Call recording analysis
//! - /callsight/orgs/:id/prompt - Prompt preview
//! - /callsight/industries - Industry catalog

pub mod analysis;
pub mod error;
pub mod industry;
pub mod organization;
pub mod prompt;
pub mod swagger;
