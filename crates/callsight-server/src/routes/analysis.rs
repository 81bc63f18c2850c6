//! Analysis Routes - Call recording submission
//!
//! Accepts a multipart upload and runs it through AnalysisService.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use uuid::Uuid;

use callsight::domain::{ActorContext, AnalysisError, CallType};

use super::error::ApiError;
use crate::application::AnalysisRequest;
use crate::models::{AnalysisResponse, ErrorResponse};
use crate::AppState;

/// Header carrying the authenticated end-user id, set by the calling app
pub const USER_ID_HEADER: &str = "x-user-id";
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Submit a call recording for analysis
#[utoipa::path(
    post,
    path = "/callsight/orgs/{org_id}/analyses",
    params(
        ("org_id" = Uuid, Path, description = "Organization ID")
    ),
    request_body(
        content_type = "multipart/form-data",
        description = "Fields: audio (file, required), call_type, language, instructions"
    ),
    responses(
        (status = 200, description = "Normalized analysis", body = AnalysisResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Organization not found", body = ErrorResponse),
        (status = 413, description = "Recording too large", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 502, description = "Model failure", body = ErrorResponse),
        (status = 504, description = "Model timeout", body = ErrorResponse)
    ),
    tag = "Analysis"
)]
pub async fn analyze_call(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let expose = state.settings.expose_diagnostics;
    let upload = read_upload(multipart, state.settings.max_audio_bytes)
        .await
        .map_err(|e| ApiError::from_analysis(e, expose))?;

    let request = AnalysisRequest {
        organization_id: org_id,
        audio: upload.audio,
        content_type: upload.content_type,
        filename: upload.filename,
        actor: actor_from_headers(&headers),
        call_type: upload.call_type,
        language_hint: upload.language,
        additional_instructions: upload.instructions,
    };

    let outcome = state
        .analysis_service
        .analyze(request)
        .await
        .map_err(|e| ApiError::from_analysis(e, expose))?;

    Ok(Json(AnalysisResponse::new(
        outcome.record_id,
        outcome.analysis,
        &outcome.attempts,
        expose,
    )))
}

/// Actor identity from `X-User-Id` and the first `X-Forwarded-For` hop
pub fn actor_from_headers(headers: &HeaderMap) -> ActorContext {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let user_id = header(USER_ID_HEADER).map(str::to_string);
    let origin = header(FORWARDED_FOR_HEADER)
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    ActorContext::new(user_id, origin)
}

#[derive(Debug, Default)]
struct Upload {
    audio: Vec<u8>,
    content_type: String,
    filename: Option<String>,
    call_type: CallType,
    language: Option<String>,
    instructions: Option<String>,
}

async fn read_upload(
    mut multipart: Multipart,
    max_audio_bytes: usize,
) -> Result<Upload, AnalysisError> {
    let multipart_error =
        |err: MultipartError| upload_error(err.status(), err.body_text(), max_audio_bytes);
    let mut upload = Upload::default();
    let mut has_audio = false;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio" => {
                upload.filename = field.file_name().map(str::to_string);
                upload.content_type = field.content_type().unwrap_or_default().to_string();
                upload.audio = field.bytes().await.map_err(multipart_error)?.to_vec();
                has_audio = true;
            }
            "call_type" => {
                let text = field.text().await.map_err(multipart_error)?;
                upload.call_type = text.parse().map_err(AnalysisError::InvalidInput)?;
            }
            "language" => upload.language = non_blank(field.text().await.map_err(multipart_error)?),
            "instructions" => {
                upload.instructions = non_blank(field.text().await.map_err(multipart_error)?)
            }
            other => tracing::debug!("Ignoring unknown multipart field '{}'", other),
        }
    }

    if !has_audio {
        return Err(AnalysisError::InvalidInput(
            "Missing 'audio' file field".to_string(),
        ));
    }

    Ok(upload)
}

fn upload_error(status: StatusCode, detail: String, max_audio_bytes: usize) -> AnalysisError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::info!("Upload rejected by body limit: {}", detail);
        // The stream was cut off, so only the limit is known
        return AnalysisError::OversizedInput {
            size: None,
            limit: max_audio_bytes,
        };
    }
    AnalysisError::InvalidInput(format!("Could not read upload: {}", detail))
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/callsight/orgs/:org_id/analyses", post(analyze_call))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_actor_prefers_user_id() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("user-7"));
        headers.insert(
            FORWARDED_FOR_HEADER,
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );

        let actor = actor_from_headers(&headers);
        assert_eq!(actor.user_id.as_deref(), Some("user-7"));
        assert_eq!(actor.origin.as_deref(), Some("203.0.113.9"));
        assert_eq!(actor.identifier(), "user-7");
    }

    #[test]
    fn test_actor_falls_back_to_origin_then_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_FOR_HEADER, HeaderValue::from_static(" 198.51.100.4 "));
        assert_eq!(actor_from_headers(&headers).identifier(), "198.51.100.4");

        let empty = HeaderMap::new();
        assert_eq!(actor_from_headers(&empty).identifier(), "anonymous");
    }

    #[test]
    fn test_body_limit_is_reported_as_oversized() {
        let err = upload_error(
            StatusCode::PAYLOAD_TOO_LARGE,
            "length limit exceeded".to_string(),
            1024,
        );
        assert!(matches!(
            err,
            AnalysisError::OversizedInput {
                size: None,
                limit: 1024
            }
        ));
        assert_eq!(err.kind(), "oversized_input");

        let api = ApiError::from_analysis(err, false);
        assert_eq!(api.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_malformed_multipart_is_invalid_input() {
        let err = upload_error(
            StatusCode::BAD_REQUEST,
            "Error parsing `multipart/form-data` request".to_string(),
            1024,
        );
        assert_eq!(err.kind(), "invalid_input");
        assert!(err.user_message().starts_with("Could not read upload"));
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  ".to_string()), None);
        assert_eq!(non_blank(" ja ".to_string()), Some("ja".to_string()));
    }
}
