//! ResolvedContext - Industry template merged with organization overrides

use serde::Serialize;

use crate::domain::entities::{CustomerContext, IndustryTemplate};
use crate::domain::value_objects::Strictness;

/// Layered context consumed by the prompt composer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedContext {
    pub industry: IndustryTemplate,
    pub organization_name: String,
    pub organization_context: Option<String>,
    pub products: Vec<String>,
    pub competitors: Vec<String>,
    pub guidelines: Option<String>,
    /// Industry requirements first, then organization compliance scripts
    pub compliance: Vec<String>,
    /// Deduplicated and truncated union of industry and organization terms
    pub terminology: Vec<String>,
    pub strictness: Strictness,
    pub focus_areas: Vec<String>,
    pub customer_context: Option<CustomerContext>,
}
