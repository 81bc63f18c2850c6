//! Organization Application Service (Use Case)
//!
//! Manages organization profiles and previews the prompt they produce.

use std::sync::Arc;
use uuid::Uuid;

use callsight::domain::{
    AiSettings, CallType, ComposedPrompt, ContextResolver, DomainError, IndustryCatalog,
    OrganizationProfile, PromptComposer, PromptConfig, ResolvedContext, Strictness,
};
use callsight::ports::OrganizationRepository;

/// Prompt preview together with the context it was rendered from
#[derive(Debug, Clone)]
pub struct PromptPreview {
    pub prompt: ComposedPrompt,
    pub context: ResolvedContext,
    pub call_type: CallType,
}

/// Application service for organization operations
pub struct OrganizationService<R: OrganizationRepository> {
    repo: Arc<R>,
    catalog: Arc<IndustryCatalog>,
    default_strictness: Strictness,
}

impl<R: OrganizationRepository> OrganizationService<R> {
    pub fn new(repo: Arc<R>, catalog: Arc<IndustryCatalog>, default_strictness: Strictness) -> Self {
        Self {
            repo,
            catalog,
            default_strictness,
        }
    }

    /// Get an organization by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<OrganizationProfile>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new organization
    pub async fn create(
        &self,
        name: String,
        industry: String,
        ai_settings: Option<AiSettings>,
    ) -> Result<OrganizationProfile, DomainError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::Validation(
                "Organization name must not be empty".to_string(),
            ));
        }

        let industry = industry.trim().to_string();
        if !self.catalog.contains(&industry) {
            tracing::info!(
                "Industry '{}' is not in the catalog, analyses will use the general template",
                industry
            );
        }

        let profile =
            OrganizationProfile::new(name, industry).with_ai_settings(ai_settings.unwrap_or_default());
        let saved = self.repo.save(&profile).await?;

        tracing::info!(
            "Created organization: {} ({}) - {}",
            saved.name,
            saved.id,
            saved.industry
        );

        Ok(saved)
    }

    /// Replace an organization's AI settings
    pub async fn update_ai_settings(
        &self,
        id: Uuid,
        ai_settings: AiSettings,
    ) -> Result<OrganizationProfile, DomainError> {
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Organization", id))?;

        let updated = OrganizationProfile {
            ai_settings,
            updated_at: chrono::Utc::now(),
            ..current
        };

        let saved = self.repo.save(&updated).await?;
        tracing::info!("Updated AI settings for organization {}", id);
        Ok(saved)
    }

    /// Render the prompt an analysis for this organization would use
    pub async fn preview_prompt(
        &self,
        id: Uuid,
        call_type: CallType,
        language_hint: Option<String>,
    ) -> Result<PromptPreview, DomainError> {
        let organization = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Organization", id))?;

        let context = ContextResolver::resolve(&self.catalog, &organization, self.default_strictness);
        let config = PromptConfig::new(organization, call_type).with_language_hint(language_hint);
        let prompt = PromptComposer::compose(&context, &config);

        Ok(PromptPreview {
            prompt,
            context,
            call_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryOrganizations;
    use callsight::domain::ScoringPreference;

    fn service(repo: InMemoryOrganizations) -> OrganizationService<InMemoryOrganizations> {
        OrganizationService::new(
            Arc::new(repo),
            Arc::new(IndustryCatalog::builtin()),
            Strictness::Strict,
        )
    }

    #[tokio::test]
    async fn test_create_and_update_settings() {
        let service = service(InMemoryOrganizations::default());
        let created = service
            .create("  Acme  ".to_string(), "saas".to_string(), None)
            .await
            .unwrap();
        assert_eq!(created.name, "Acme");
        assert_eq!(created.ai_settings, AiSettings::default());

        let settings = AiSettings {
            products: vec!["Acme CRM".to_string()],
            ..Default::default()
        };
        let updated = service
            .update_ai_settings(created.id, settings.clone())
            .await
            .unwrap();
        assert_eq!(updated.ai_settings, settings);

        let loaded = service.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(loaded.ai_settings.products, vec!["Acme CRM".to_string()]);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let service = service(InMemoryOrganizations::default());
        let err = service
            .create("   ".to_string(), "saas".to_string(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_unknown_organization() {
        let service = service(InMemoryOrganizations::default());
        let err = service
            .update_ai_settings(Uuid::new_v4(), AiSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_preview_uses_organization_strictness() {
        let profile = OrganizationProfile::new("Acme".to_string(), "telecom".to_string())
            .with_ai_settings(AiSettings {
                scoring: Some(ScoringPreference {
                    strictness: Some(Strictness::Moderate),
                    focus_areas: vec![],
                }),
                ..Default::default()
            });
        let id = profile.id;
        let service = service(InMemoryOrganizations::with(profile));

        let preview = service
            .preview_prompt(id, CallType::Support, None)
            .await
            .unwrap();
        assert_eq!(preview.context.strictness, Strictness::Moderate);
        assert_eq!(preview.context.industry.id, "telecom");
        assert!(preview.prompt.text.contains("## Call Focus: Support"));
    }
}
