//! Industry catalog listing

use serde::Serialize;
use utoipa::ToSchema;

use callsight::IndustryTemplate;

#[derive(Debug, Serialize, ToSchema)]
pub struct IndustrySummary {
    pub id: String,
    pub display_name: String,
    pub evaluation_criteria: Vec<String>,
}

impl From<&IndustryTemplate> for IndustrySummary {
    fn from(template: &IndustryTemplate) -> Self {
        Self {
            id: template.id.clone(),
            display_name: template.display_name.clone(),
            evaluation_criteria: template.evaluation_criteria.clone(),
        }
    }
}
