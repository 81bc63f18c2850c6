//! Rate Limit Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, RateLimitWindow};

/// Persistence for per-(identifier, endpoint) admission windows
#[async_trait]
pub trait RateLimitRepository: Send + Sync {
    /// Most recently started window for the pair, if any
    async fn find_latest(
        &self,
        identifier: &str,
        endpoint: &str,
    ) -> Result<Option<RateLimitWindow>, DomainError>;

    /// Insert a new window or update the count of an existing one
    async fn save(&self, window: &RateLimitWindow) -> Result<(), DomainError>;
}
