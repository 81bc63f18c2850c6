//! IndustryTemplate - Per-industry analysis template
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Static bundle of narrative context, criteria, compliance rules and
/// terminology for one business domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryTemplate {
    pub id: String,
    pub display_name: String,
    pub context: String,
    pub evaluation_criteria: Vec<String>,
    pub compliance_requirements: Vec<String>,
    pub terminology: Vec<String>,
    pub common_objections: Vec<String>,
    pub red_flag_indicators: Vec<String>,
    pub quality_markers: Vec<String>,
}
