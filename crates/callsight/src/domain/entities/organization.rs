//! OrganizationProfile - Organization-specific analysis configuration
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{PreferredTone, Strictness};

/// Organization and its AI settings, edited by organization administrators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationProfile {
    pub id: Uuid,
    pub name: String,
    /// Industry catalog id; unknown ids resolve to the general template
    pub industry: String,
    pub ai_settings: AiSettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Organization overrides layered on top of the industry template.
///
/// Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AiSettings {
    pub context: Option<String>,
    pub products: Vec<String>,
    pub competitors: Vec<String>,
    pub guidelines: Option<String>,
    pub compliance_scripts: Vec<String>,
    pub custom_terminology: Vec<String>,
    pub scoring: Option<ScoringPreference>,
    pub customer_context: Option<CustomerContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringPreference {
    /// `None` means "use the deployment default"
    pub strictness: Option<Strictness>,
    pub focus_areas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomerContext {
    pub typical_profiles: Vec<String>,
    pub common_issues: Vec<String>,
    pub preferred_tone: Option<PreferredTone>,
}

impl OrganizationProfile {
    /// Create a new organization with empty AI settings
    pub fn new(name: String, industry: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            industry,
            ai_settings: AiSettings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_ai_settings(mut self, ai_settings: AiSettings) -> Self {
        self.ai_settings = ai_settings;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_settings_accept_partial_json() {
        let settings: AiSettings = serde_json::from_value(serde_json::json!({
            "products": ["Term Life"],
            "scoring": { "strictness": "moderate" }
        }))
        .unwrap();

        assert_eq!(settings.products, vec!["Term Life".to_string()]);
        assert!(settings.competitors.is_empty());
        let scoring = settings.scoring.unwrap();
        assert_eq!(scoring.strictness, Some(Strictness::Moderate));
        assert!(scoring.focus_areas.is_empty());
    }

    #[test]
    fn test_ai_settings_accept_empty_object() {
        let settings: AiSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AiSettings::default());
    }
}
