//! Context Resolver
//!
//! Layers an organization's AI settings onto its industry template.

use crate::domain::entities::{CustomerContext, OrganizationProfile, ResolvedContext};
use crate::domain::value_objects::Strictness;

use super::IndustryCatalog;

/// Upper bound on merged terminology entries
pub const MAX_TERMINOLOGY: usize = 30;

/// Number of template criteria used when the organization sets no focus areas
pub const DEFAULT_FOCUS_AREAS: usize = 5;

pub struct ContextResolver;

impl ContextResolver {
    /// Merge `profile` onto its industry template.
    ///
    /// - compliance: industry requirements, then organization scripts
    /// - terminology: case-insensitive union, first occurrence wins, capped
    ///   at [`MAX_TERMINOLOGY`]
    /// - strictness: organization preference, else `default_strictness`
    /// - focus areas: organization list, else the first
    ///   [`DEFAULT_FOCUS_AREAS`] evaluation criteria
    pub fn resolve(
        catalog: &IndustryCatalog,
        profile: &OrganizationProfile,
        default_strictness: Strictness,
    ) -> ResolvedContext {
        let industry = catalog.get(&profile.industry).clone();
        let settings = &profile.ai_settings;

        let mut compliance = industry.compliance_requirements.clone();
        compliance.extend(clean_list(&settings.compliance_scripts));

        let terminology = merge_terminology(&industry.terminology, &settings.custom_terminology);

        let scoring = settings.scoring.as_ref();
        let strictness = scoring
            .and_then(|s| s.strictness)
            .unwrap_or(default_strictness);

        let focus_areas = scoring
            .map(|s| clean_list(&s.focus_areas))
            .filter(|areas| !areas.is_empty())
            .unwrap_or_else(|| {
                industry
                    .evaluation_criteria
                    .iter()
                    .take(DEFAULT_FOCUS_AREAS)
                    .cloned()
                    .collect()
            });

        let customer_context = settings
            .customer_context
            .as_ref()
            .map(|cc| CustomerContext {
                typical_profiles: clean_list(&cc.typical_profiles),
                common_issues: clean_list(&cc.common_issues),
                preferred_tone: cc.preferred_tone,
            })
            .filter(|cc| {
                !cc.typical_profiles.is_empty()
                    || !cc.common_issues.is_empty()
                    || cc.preferred_tone.is_some()
            });

        ResolvedContext {
            industry,
            organization_name: profile.name.trim().to_string(),
            organization_context: clean_text(settings.context.as_deref()),
            products: clean_list(&settings.products),
            competitors: clean_list(&settings.competitors),
            guidelines: clean_text(settings.guidelines.as_deref()),
            compliance,
            terminology,
            strictness,
            focus_areas,
            customer_context,
        }
    }
}

fn merge_terminology(industry: &[String], custom: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    let mut merged = Vec::new();

    for term in industry.iter().chain(custom.iter()) {
        let term = term.trim();
        if term.is_empty() {
            continue;
        }
        let key = term.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        merged.push(term.to_string());
        if merged.len() == MAX_TERMINOLOGY {
            break;
        }
    }

    merged
}

fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn clean_text(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}
