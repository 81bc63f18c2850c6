//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    // Analysis models
    AnalysisResponse,
    AttemptSummary,
    // Organization models
    CreateOrganizationRequest,
    ErrorResponse,
    // Industry models
    IndustrySummary,
    OrganizationResponse,
    // Prompt models
    PromptPreviewResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Analysis endpoints
        super::analysis::analyze_call,
        // Organization endpoints
        super::organization::create_organization,
        super::organization::get_organization,
        super::organization::update_ai_settings,
        // Prompt endpoints
        super::prompt::preview_prompt,
        // Industry endpoints
        super::industry::list_industries,
    ),
    info(
        title = "Callsight API",
        version = "0.1.0",
        description = "Call recording analysis: industry-aware prompts, multimodal model fallback and normalized reports.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Analysis", description = "Analysis - Submit call recordings"),
        (name = "Organization", description = "Organization - Profiles and AI settings"),
        (name = "Prompt", description = "Prompt - Preview composed analysis prompts"),
        (name = "Industry", description = "Industry - Built-in industry templates"),
    ),
    components(
        schemas(
            // Analysis
            AnalysisResponse,
            AttemptSummary,
            ErrorResponse,
            // Organization
            CreateOrganizationRequest,
            OrganizationResponse,
            // Prompt
            PromptPreviewResponse,
            // Industry
            IndustrySummary,
        )
    ),
)]
pub struct ApiDoc;
