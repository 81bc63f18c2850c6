//! Organization Routes - Profile and AI settings management
//!
//! HTTP handlers that delegate to OrganizationService for business logic.

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use callsight::{AiSettings, DomainError};

use super::error::ApiError;
use crate::models::{CreateOrganizationRequest, ErrorResponse, OrganizationResponse};
use crate::AppState;

/// Create organization
#[utoipa::path(
    post,
    path = "/callsight/orgs",
    request_body = CreateOrganizationRequest,
    responses(
        (status = 200, description = "Organization created", body = OrganizationResponse),
        (status = 400, description = "Invalid organization", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Organization"
)]
pub async fn create_organization(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrganizationRequest>,
) -> Result<Json<OrganizationResponse>, ApiError> {
    let organization = state
        .organization_service
        .create(payload.name, payload.industry, payload.ai_settings)
        .await
        .map_err(|e| ApiError::from_domain(e, state.settings.expose_diagnostics))?;

    Ok(Json(organization.into()))
}

/// Get organization by ID
#[utoipa::path(
    get,
    path = "/callsight/orgs/{org_id}",
    params(
        ("org_id" = Uuid, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Organization found", body = OrganizationResponse),
        (status = 404, description = "Organization not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Organization"
)]
pub async fn get_organization(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
) -> Result<Json<OrganizationResponse>, ApiError> {
    let expose = state.settings.expose_diagnostics;
    let organization = state
        .organization_service
        .get_by_id(org_id)
        .await
        .map_err(|e| ApiError::from_domain(e, expose))?
        .ok_or_else(|| ApiError::from_domain(DomainError::not_found("Organization", org_id), expose))?;

    Ok(Json(organization.into()))
}

/// Replace organization AI settings
///
/// Body is the full AI settings object with camelCase keys.
#[utoipa::path(
    put,
    path = "/callsight/orgs/{org_id}/ai-settings",
    params(
        ("org_id" = Uuid, Path, description = "Organization ID")
    ),
    responses(
        (status = 200, description = "Settings updated", body = OrganizationResponse),
        (status = 404, description = "Organization not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Organization"
)]
pub async fn update_ai_settings(
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    Json(settings): Json<AiSettings>,
) -> Result<Json<OrganizationResponse>, ApiError> {
    let organization = state
        .organization_service
        .update_ai_settings(org_id, settings)
        .await
        .map_err(|e| ApiError::from_domain(e, state.settings.expose_diagnostics))?;

    Ok(Json(organization.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/callsight/orgs", post(create_organization))
        .route("/callsight/orgs/:org_id", get(get_organization))
        .route("/callsight/orgs/:org_id/ai-settings", put(update_ai_settings))
}
