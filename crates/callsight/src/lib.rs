//! Callsight Domain Library
//!
//! Core domain types, pipeline stages and interfaces for the Callsight
//! call analysis service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (IndustryTemplate, OrganizationProfile,
//!     ResolvedContext, NormalizedAnalysis, RateLimitWindow)
//!   - `value_objects/`: Immutable value types (AudioFormat, CallType, Strictness)
//!   - `services/`: Pure pipeline stages (AudioNormalizer, IndustryCatalog,
//!     ContextResolver, PromptComposer, RateLimitPolicy, ResultNormalizer)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (model backend, audit log)
//!
//! # Usage
//!
//! ```rust,ignore
//! use callsight::domain::{IndustryCatalog, PromptComposer, PromptConfig};
//! use callsight::ports::{GenerativeModel, RateLimitRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AiSettings, AnalysisError, AnalysisRecord, AudioFormat, AudioNormalizer, AudioPayload,
    AuditEvent, AuditEventKind, CallType, ComposedPrompt, ContextResolver, DecodingParams,
    DomainError, IndustryCatalog, IndustryTemplate, InvocationAttempt, ModelCandidateList,
    NormalizedAnalysis, OrganizationProfile, PromptComposer, PromptConfig, RateLimitPolicy,
    RateLimitWindow, ResolvedContext, ResultNormalizer, Strictness,
};
pub use ports::{
    AnalysisRepository, AuditLog, GenerativeModel, OrganizationRepository, RateLimitRepository,
};
