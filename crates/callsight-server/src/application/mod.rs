//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod admission_gate;
mod analysis_service;
mod model_invoker;
mod organization_service;

#[cfg(test)]
pub(crate) mod testing;

pub use admission_gate::{AdmissionGate, ANALYZE_ENDPOINT};
pub use analysis_service::{AnalysisOutcome, AnalysisPipeline, AnalysisRequest, AnalysisService};
pub use model_invoker::{Invocation, ModelInvoker};
pub use organization_service::{OrganizationService, PromptPreview};
