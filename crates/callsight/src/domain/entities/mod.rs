//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - IndustryTemplate: static per-industry analysis template
//! - OrganizationProfile: organization overrides (AI settings)
//! - ResolvedContext: template + overrides, ready for prompting
//! - PromptConfig / ComposedPrompt: prompt inputs and output
//! - Invocation: model candidates, decoding params, attempt records
//! - NormalizedAnalysis: canonical report
//! - RateLimitWindow, ActorContext, AuditEvent, AnalysisRecord

mod actor;
mod analysis;
mod audio;
mod audit;
mod context;
mod industry;
mod invocation;
mod organization;
mod prompt;
mod rate_limit;
mod record;

pub use actor::*;
pub use analysis::*;
pub use audio::*;
pub use audit::*;
pub use context::*;
pub use industry::*;
pub use invocation::*;
pub use organization::*;
pub use prompt::*;
pub use rate_limit::*;
pub use record::*;
