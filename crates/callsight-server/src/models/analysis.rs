//! Analysis - Call analysis submission results

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use callsight::{InvocationAttempt, NormalizedAnalysis};

/// Successful analysis response
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisResponse {
    pub record_id: Uuid,
    /// Normalized report (camelCase fields, every field present)
    #[schema(value_type = Object)]
    pub analysis: NormalizedAnalysis,
    /// Model candidates tried, in order
    pub attempts: Vec<AttemptSummary>,
}

impl AnalysisResponse {
    /// Build the response body. Attempt errors are operator diagnostics and
    /// only included when `expose_diagnostics`.
    pub fn new(
        record_id: Uuid,
        analysis: NormalizedAnalysis,
        attempts: &[InvocationAttempt],
        expose_diagnostics: bool,
    ) -> Self {
        Self {
            record_id,
            analysis,
            attempts: attempts
                .iter()
                .map(|attempt| AttemptSummary::new(attempt, expose_diagnostics))
                .collect(),
        }
    }
}

/// One model candidate tried for a request
#[derive(Debug, Serialize, ToSchema)]
pub struct AttemptSummary {
    pub model_id: String,
    /// "success" or "failure"
    pub outcome: String,
    /// Failure detail, only when diagnostics are enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AttemptSummary {
    pub fn new(attempt: &InvocationAttempt, expose_diagnostics: bool) -> Self {
        Self {
            model_id: attempt.model_id.clone(),
            outcome: if attempt.is_success() {
                "success".to_string()
            } else {
                "failure".to_string()
            },
            error: attempt
                .error_message
                .clone()
                .filter(|_| expose_diagnostics),
        }
    }
}

/// Error body for analysis failures
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Stable error kind (e.g. `admission_rejected`, `timeout`)
    pub error: String,
    /// Message safe to show to end users
    pub message: String,
    /// Operator diagnostics, only when enabled for the deployment
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub diagnostics: Option<serde_json::Value>,
}
