//! Organization Repository Port
//!
//! Abstract interface for organization profile persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, OrganizationProfile};

/// Repository interface for organization profiles
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Find an organization by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<OrganizationProfile>, DomainError>;

    /// Save an organization (insert or update)
    async fn save(&self, profile: &OrganizationProfile)
        -> Result<OrganizationProfile, DomainError>;
}
