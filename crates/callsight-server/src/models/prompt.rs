//! Prompt Preview Models

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for prompt preview
#[derive(Debug, Deserialize, IntoParams)]
pub struct PromptQuery {
    /// sales, support, consultation, follow_up or general (default)
    pub call_type: Option<String>,
    /// Expected spoken language hint
    pub language: Option<String>,
}

/// Composed prompt as an analysis would send it
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptPreviewResponse {
    pub prompt: String,
    /// Resolved industry template id
    pub industry: String,
    pub call_type: String,
    pub strictness: String,
    pub focus_areas: Vec<String>,
    pub terminology: Vec<String>,
    pub length: usize,
}
