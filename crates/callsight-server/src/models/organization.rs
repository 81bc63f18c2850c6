//! Organization - Profile and AI settings DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use callsight::{AiSettings, OrganizationProfile};

/// Create organization request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrganizationRequest {
    pub name: String,
    /// Industry id (e.g. `real_estate`); unknown ids use the general template
    #[serde(default = "default_industry")]
    pub industry: String,
    /// Optional AI settings (camelCase keys)
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub ai_settings: Option<AiSettings>,
}

fn default_industry() -> String {
    "general".to_string()
}

/// Organization response
#[derive(Debug, Serialize, ToSchema)]
pub struct OrganizationResponse {
    pub id: Uuid,
    pub name: String,
    pub industry: String,
    #[schema(value_type = Object)]
    pub ai_settings: AiSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OrganizationProfile> for OrganizationResponse {
    fn from(profile: OrganizationProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            industry: profile.industry,
            ai_settings: profile.ai_settings,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
