//! PostgreSQL Repository Implementations

mod analysis_repository;
mod audit_log;
mod organization_repository;
mod rate_limit_repository;

pub use analysis_repository::PgAnalysisRepository;
pub use audit_log::PgAuditLog;
pub use organization_repository::PgOrganizationRepository;
pub use rate_limit_repository::PgRateLimitRepository;
