//! Domain Errors
//!
//! Error types for domain operations and the analysis pipeline.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::entities::InvocationAttempt;

/// Domain layer errors
///
/// Raised by ports (repositories, backends) and by input validation.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

/// Terminal failures of the analysis pipeline.
///
/// Every variant has a stable machine-readable [`kind`](Self::kind) and a
/// [`user_message`](Self::user_message) that never includes diagnostic detail.
/// The `Display` output is operator-facing and may include it.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Rate limit exceeded for {identifier} on {endpoint}, retry after {retry_after_secs}s")]
    AdmissionRejected {
        identifier: String,
        endpoint: String,
        retry_after_secs: u64,
    },

    /// `size` is `None` when the upload was cut off before it was fully read
    #[error("Audio exceeds the {limit} byte limit ({})", describe_size(.size))]
    OversizedInput { size: Option<usize>, limit: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("All {} model candidates failed: {}", .attempts.len(), summarize_attempts(.attempts))]
    AllCandidatesFailed { attempts: Vec<InvocationAttempt> },

    #[error("Model {model_id} returned output that is not a JSON object: {raw}")]
    MalformedModelOutput { model_id: String, raw: String },

    #[error("Model invocation exceeded {after_secs}s")]
    Timeout { after_secs: u64 },

    #[error(transparent)]
    Collaborator(#[from] DomainError),
}

impl AnalysisError {
    /// Stable identifier for clients and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AdmissionRejected { .. } => "admission_rejected",
            Self::OversizedInput { .. } => "oversized_input",
            Self::InvalidInput(_) => "invalid_input",
            Self::AllCandidatesFailed { .. } => "all_candidates_failed",
            Self::MalformedModelOutput { .. } => "malformed_model_output",
            Self::Timeout { .. } => "timeout",
            Self::Collaborator(DomainError::NotFound { .. }) => "not_found",
            Self::Collaborator(DomainError::Validation(_)) => "invalid_input",
            Self::Collaborator(_) => "internal",
        }
    }

    /// Message safe to show to end users.
    pub fn user_message(&self) -> String {
        match self {
            Self::AdmissionRejected {
                retry_after_secs, ..
            } => format!(
                "Too many analysis requests. Please try again in {} seconds.",
                retry_after_secs
            ),
            Self::OversizedInput {
                size: Some(size),
                limit,
            } => format!(
                "The recording is too large ({:.1} MB). The maximum size is {:.1} MB.",
                megabytes(*size),
                megabytes(*limit)
            ),
            Self::OversizedInput { size: None, limit } => format!(
                "The recording is too large. The maximum size is {:.1} MB.",
                megabytes(*limit)
            ),
            Self::InvalidInput(reason) => reason.clone(),
            Self::AllCandidatesFailed { .. } => {
                "The analysis service is currently unavailable. Please try again later.".to_string()
            }
            Self::MalformedModelOutput { .. } => {
                "The analysis could not be completed for this recording. Please try again."
                    .to_string()
            }
            Self::Timeout { .. } => {
                "The analysis took too long and was cancelled. Please try again.".to_string()
            }
            Self::Collaborator(DomainError::NotFound { entity_type, .. }) => {
                format!("{} not found.", entity_type)
            }
            Self::Collaborator(DomainError::Validation(reason)) => reason.clone(),
            Self::Collaborator(_) => "An internal error occurred.".to_string(),
        }
    }

    /// True for failures that happen before any external model call.
    pub fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::AdmissionRejected { .. } | Self::OversizedInput { .. } | Self::InvalidInput(_)
        )
    }
}

fn describe_size(size: &Option<usize>) -> String {
    match size {
        Some(bytes) => format!("{} bytes", bytes),
        None => "size unknown".to_string(),
    }
}

fn megabytes(bytes: usize) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

fn summarize_attempts(attempts: &[InvocationAttempt]) -> String {
    attempts
        .iter()
        .map(|a| format!("{}: {}", a.model_id, a.detail()))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_stable() {
        let err = AnalysisError::OversizedInput {
            size: Some(10),
            limit: 5,
        };
        assert_eq!(err.kind(), "oversized_input");
        assert!(err.is_preflight());

        let err = AnalysisError::Collaborator(DomainError::Repository("down".into()));
        assert_eq!(err.kind(), "internal");
        assert!(!err.is_preflight());

        let err = AnalysisError::Collaborator(DomainError::not_found("Organization", Uuid::nil()));
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.user_message(), "Organization not found.");
    }

    #[test]
    fn test_user_message_hides_diagnostics() {
        let err = AnalysisError::AllCandidatesFailed {
            attempts: vec![InvocationAttempt::failure("model-a", "quota exhausted for key sk-123")],
        };
        assert!(err.to_string().contains("quota exhausted"));
        assert!(!err.user_message().contains("quota"));

        let err = AnalysisError::MalformedModelOutput {
            model_id: "model-a".into(),
            raw: "not json at all".into(),
        };
        assert!(!err.user_message().contains("not json"));
    }

    #[test]
    fn test_oversized_without_known_size() {
        let err = AnalysisError::OversizedInput {
            size: None,
            limit: 20 * 1024 * 1024,
        };
        assert_eq!(err.kind(), "oversized_input");
        assert_eq!(
            err.user_message(),
            "The recording is too large. The maximum size is 20.0 MB."
        );
        assert_eq!(
            err.to_string(),
            "Audio exceeds the 20971520 byte limit (size unknown)"
        );
    }
}
