//! Prompt Routes - Preview the instruction an analysis would send
//!
//! Lets operators inspect how industry templates and organization settings
//! shape the prompt without uploading a recording.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use callsight::CallType;

use super::error::ApiError;
use crate::models::{ErrorResponse, PromptPreviewResponse, PromptQuery};
use crate::AppState;

/// Preview the analysis prompt for an organization
///
/// GET /callsight/orgs/{org_id}/prompt?call_type=sales&language=ja
#[utoipa::path(
    get,
    path = "/callsight/orgs/{org_id}/prompt",
    params(
        ("org_id" = Uuid, Path, description = "Organization ID"),
        PromptQuery
    ),
    responses(
        (status = 200, description = "Composed prompt", body = PromptPreviewResponse),
        (status = 400, description = "Invalid call type", body = ErrorResponse),
        (status = 404, description = "Organization not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Prompt"
)]
pub async fn preview_prompt(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    Query(query): Query<PromptQuery>,
) -> Result<Json<PromptPreviewResponse>, ApiError> {
    // 1. Parse call type
    let call_type: CallType = query
        .call_type
        .as_deref()
        .map(|s| s.parse())
        .transpose()
        .map_err(|e: String| ApiError::new(StatusCode::BAD_REQUEST, "invalid_input", e))?
        .unwrap_or_default();

    // 2. Resolve and compose
    let preview = state
        .organization_service
        .preview_prompt(org_id, call_type, query.language)
        .await
        .map_err(|e| ApiError::from_domain(e, state.settings.expose_diagnostics))?;

    let length = preview.prompt.len();
    Ok(Json(PromptPreviewResponse {
        prompt: preview.prompt.text,
        industry: preview.context.industry.id,
        call_type: preview.call_type.to_string(),
        strictness: preview.context.strictness.to_string(),
        focus_areas: preview.context.focus_areas,
        terminology: preview.context.terminology,
        length,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/callsight/orgs/:org_id/prompt", get(preview_prompt))
}
