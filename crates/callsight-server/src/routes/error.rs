//! HTTP mapping for analysis failures

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::Level;

use callsight::{AnalysisError, DomainError, InvocationAttempt};

use crate::models::ErrorResponse;

/// Error response with a stable kind, a user-safe message and optional diagnostics
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
    retry_after_secs: Option<u64>,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: kind.to_string(),
                message: message.into(),
                diagnostics: None,
            },
            retry_after_secs: None,
        }
    }

    /// Map a pipeline failure. Diagnostic detail (attempt errors, raw model
    /// output) is logged always and returned only when `expose_diagnostics`.
    pub fn from_analysis(err: AnalysisError, expose_diagnostics: bool) -> Self {
        let status = status_for(&err);
        let verb = if err.is_preflight() { "rejected" } else { "failed" };
        if log_level(&err, status) == Level::WARN {
            tracing::warn!("Analysis {} ({}): {}", verb, err.kind(), err);
        } else {
            tracing::info!("Analysis {} ({}): {}", verb, err.kind(), err);
        }

        let diagnostics = if expose_diagnostics {
            diagnostics_for(&err)
        } else {
            None
        };
        let retry_after_secs = match &err {
            AnalysisError::AdmissionRejected {
                retry_after_secs, ..
            } => Some(*retry_after_secs),
            _ => None,
        };

        Self {
            status,
            body: ErrorResponse {
                error: err.kind().to_string(),
                message: err.user_message(),
                diagnostics,
            },
            retry_after_secs,
        }
    }

    /// Map a repository or validation failure outside the analysis pipeline
    pub fn from_domain(err: DomainError, expose_diagnostics: bool) -> Self {
        Self::from_analysis(AnalysisError::Collaborator(err), expose_diagnostics)
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Rejections before any model call are routine; server-side failures warn.
fn log_level(err: &AnalysisError, status: StatusCode) -> Level {
    if err.is_preflight() {
        Level::INFO
    } else if status.is_server_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.body)).into_response();
        if let Some(secs) = self.retry_after_secs {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        }
        response
    }
}

fn status_for(err: &AnalysisError) -> StatusCode {
    match err {
        AnalysisError::AdmissionRejected { .. } => StatusCode::TOO_MANY_REQUESTS,
        AnalysisError::OversizedInput { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        AnalysisError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        AnalysisError::AllCandidatesFailed { .. } | AnalysisError::MalformedModelOutput { .. } => {
            StatusCode::BAD_GATEWAY
        }
        AnalysisError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        AnalysisError::Collaborator(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
        AnalysisError::Collaborator(DomainError::Validation(_)) => StatusCode::BAD_REQUEST,
        AnalysisError::Collaborator(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn diagnostics_for(err: &AnalysisError) -> Option<serde_json::Value> {
    match err {
        AnalysisError::AllCandidatesFailed { attempts } => Some(json!({
            "attempts": attempts.iter().map(InvocationAttempt::without_body).collect::<Vec<_>>(),
        })),
        AnalysisError::MalformedModelOutput { model_id, raw } => Some(json!({
            "modelId": model_id,
            "raw": raw,
        })),
        AnalysisError::Collaborator(e) => Some(json!({ "detail": e.to_string() })),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AnalysisError::AdmissionRejected {
                    identifier: "u".to_string(),
                    endpoint: "analyze".to_string(),
                    retry_after_secs: 12,
                },
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (
                AnalysisError::OversizedInput {
                    size: Some(2),
                    limit: 1,
                },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                AnalysisError::InvalidInput("empty".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AnalysisError::AllCandidatesFailed { attempts: vec![] },
                StatusCode::BAD_GATEWAY,
            ),
            (AnalysisError::Timeout { after_secs: 120 }, StatusCode::GATEWAY_TIMEOUT),
            (
                AnalysisError::Collaborator(DomainError::Repository("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from_analysis(err, false).status(), expected);
        }
    }

    #[test]
    fn test_retry_after_header() {
        let err = AnalysisError::AdmissionRejected {
            identifier: "u".to_string(),
            endpoint: "analyze".to_string(),
            retry_after_secs: 42,
        };
        let response = ApiError::from_analysis(err, false).into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "42");
    }

    #[test]
    fn test_diagnostics_are_opt_in() {
        let malformed = || AnalysisError::MalformedModelOutput {
            model_id: "m1".to_string(),
            raw: "secret transcript".to_string(),
        };

        let hidden = ApiError::from_analysis(malformed(), false);
        assert!(hidden.body.diagnostics.is_none());
        assert!(!hidden.body.message.contains("secret"));

        let shown = ApiError::from_analysis(malformed(), true);
        let diagnostics = shown.body.diagnostics.unwrap();
        assert_eq!(diagnostics["raw"], "secret transcript");
    }

    #[test]
    fn test_log_level_follows_preflight() {
        let cases = [
            (
                AnalysisError::AdmissionRejected {
                    identifier: "u".to_string(),
                    endpoint: "analyze".to_string(),
                    retry_after_secs: 1,
                },
                Level::INFO,
            ),
            (
                AnalysisError::OversizedInput {
                    size: None,
                    limit: 1,
                },
                Level::INFO,
            ),
            (AnalysisError::InvalidInput("empty".to_string()), Level::INFO),
            (
                AnalysisError::Collaborator(DomainError::not_found(
                    "Organization",
                    uuid::Uuid::nil(),
                )),
                Level::INFO,
            ),
            (AnalysisError::Timeout { after_secs: 5 }, Level::WARN),
            (
                AnalysisError::AllCandidatesFailed { attempts: vec![] },
                Level::WARN,
            ),
            (
                AnalysisError::Collaborator(DomainError::Repository("down".to_string())),
                Level::WARN,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(log_level(&err, status_for(&err)), expected, "{err:?}");
        }
    }
}
