//! Industry Catalog
//!
//! Immutable lookup of industry templates. Lookup never fails: unknown or
//! empty ids resolve to the `general` template, which every catalog is
//! required to carry.

use std::collections::BTreeMap;

use crate::domain::entities::IndustryTemplate;

use super::catalog_data::{TemplateDef, BUILTIN_TEMPLATES, GENERAL_TEMPLATE};

/// Id of the mandatory fallback template
pub const GENERAL_INDUSTRY_ID: &str = "general";

#[derive(Debug, Clone)]
pub struct IndustryCatalog {
    general: IndustryTemplate,
    templates: BTreeMap<String, IndustryTemplate>,
}

impl IndustryCatalog {
    /// Build a catalog from a fallback template plus industry entries.
    ///
    /// The fallback is stored under `general` regardless of its own id.
    /// Entries whose id normalizes to `general` are ignored.
    pub fn new(general: IndustryTemplate, templates: Vec<IndustryTemplate>) -> Self {
        let general = IndustryTemplate {
            id: GENERAL_INDUSTRY_ID.to_string(),
            ..general
        };

        let templates = templates
            .into_iter()
            .filter_map(|template| {
                let key = normalize_id(&template.id);
                (key != GENERAL_INDUSTRY_ID).then_some((key, template))
            })
            .collect();

        Self { general, templates }
    }

    /// The built-in catalog of 14 industries plus `general`.
    pub fn builtin() -> Self {
        Self::new(
            GENERAL_TEMPLATE.to_template(),
            BUILTIN_TEMPLATES.iter().map(TemplateDef::to_template).collect(),
        )
    }

    /// Resolve an industry id. Matching is case-insensitive and treats `-`
    /// and spaces as `_`.
    pub fn get(&self, id: &str) -> &IndustryTemplate {
        match self.templates.get(&normalize_id(id)) {
            Some(template) => template,
            None => {
                if !id.trim().is_empty() && normalize_id(id) != GENERAL_INDUSTRY_ID {
                    tracing::debug!("Unknown industry '{}', using general template", id);
                }
                &self.general
            }
        }
    }

    pub fn general(&self) -> &IndustryTemplate {
        &self.general
    }

    pub fn contains(&self, id: &str) -> bool {
        let key = normalize_id(id);
        key == GENERAL_INDUSTRY_ID || self.templates.contains_key(&key)
    }

    /// All templates, `general` first, then by id
    pub fn iter(&self) -> impl Iterator<Item = &IndustryTemplate> {
        std::iter::once(&self.general).chain(self.templates.values())
    }

    /// Number of templates including `general`
    pub fn len(&self) -> usize {
        self.templates.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for IndustryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase().replace(['-', ' '], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(id: &str) -> IndustryTemplate {
        IndustryTemplate {
            id: id.to_string(),
            display_name: id.to_uppercase(),
            context: format!("{id} context"),
            evaluation_criteria: vec![],
            compliance_requirements: vec![],
            terminology: vec![],
            common_objections: vec![],
            red_flag_indicators: vec![],
            quality_markers: vec![],
        }
    }

    #[test]
    fn test_builtin_has_fourteen_industries_plus_general() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.len(), 15);
        assert_eq!(catalog.general().id, GENERAL_INDUSTRY_ID);
    }

    #[test]
    fn test_builtin_templates_are_populated() {
        for template in IndustryCatalog::builtin().iter() {
            assert!(!template.display_name.is_empty(), "{}", template.id);
            assert!(!template.context.is_empty(), "{}", template.id);
            assert!(template.evaluation_criteria.len() >= 5, "{}", template.id);
            assert!(!template.compliance_requirements.is_empty(), "{}", template.id);
            assert!(!template.terminology.is_empty(), "{}", template.id);
            assert!(!template.common_objections.is_empty(), "{}", template.id);
            assert!(!template.red_flag_indicators.is_empty(), "{}", template.id);
            assert!(!template.quality_markers.is_empty(), "{}", template.id);
        }
    }

    #[test]
    fn test_unknown_id_resolves_to_general() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.get("underwater_basket_weaving").id, "general");
        assert_eq!(catalog.get("").id, "general");
        assert!(!catalog.contains("underwater_basket_weaving"));
    }

    #[test]
    fn test_lookup_is_lenient() {
        let catalog = IndustryCatalog::builtin();
        assert_eq!(catalog.get("Real-Estate").id, "real_estate");
        assert_eq!(catalog.get(" insurance ").id, "insurance");
    }

    #[test]
    fn test_substitute_catalog() {
        let catalog = IndustryCatalog::new(
            template("fallback"),
            vec![template("widgets"), template("general")],
        );
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("widgets").context, "widgets context");
        assert_eq!(catalog.get("general").context, "fallback context");
        assert_eq!(catalog.get("gadgets").id, "general");
    }
}
