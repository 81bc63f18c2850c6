//! Industry Routes - Built-in industry catalog

use axum::{extract::State, routing::get, Json, Router};

use crate::models::IndustrySummary;
use crate::AppState;

/// List industry templates
#[utoipa::path(
    get,
    path = "/callsight/industries",
    responses(
        (status = 200, description = "Industry templates, general first", body = Vec<IndustrySummary>)
    ),
    tag = "Industry"
)]
pub async fn list_industries(State(state): State<AppState>) -> Json<Vec<IndustrySummary>> {
    Json(state.catalog.iter().map(IndustrySummary::from).collect())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/callsight/industries", get(list_industries))
}
