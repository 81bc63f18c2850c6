//! Deployment settings
//!
//! Loaded once at startup from the secret store and shared read-only.

use std::time::Duration;

use anyhow::{ensure, Context, Result};

use callsight::domain::{ModelCandidateList, RateLimitPolicy, Strictness, DEFAULT_MAX_AUDIO_BYTES};

pub const DEFAULT_MODEL_CANDIDATES: &str = "gemini-2.5-flash,gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_INVOCATION_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 16384;

/// Immutable analysis pipeline settings
#[derive(Debug, Clone)]
pub struct AnalysisSettings {
    pub gemini_base_url: String,
    pub model_candidates: ModelCandidateList,
    pub max_audio_bytes: usize,
    pub rate_limit: RateLimitPolicy,
    pub default_strictness: Strictness,
    pub invocation_timeout: Duration,
    pub max_output_tokens: u32,
    /// Include attempt errors and raw model output in HTTP error bodies
    pub expose_diagnostics: bool,
}

impl AnalysisSettings {
    /// Build settings from a key lookup (the shuttle secret store in
    /// production). Missing keys take their defaults; present but invalid
    /// values are an error.
    pub fn from_lookup<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RateLimitPolicy::default();

        let model_candidates = ModelCandidateList::parse(
            &get("MODEL_CANDIDATES").unwrap_or_else(|| DEFAULT_MODEL_CANDIDATES.to_string()),
        )
        .context("MODEL_CANDIDATES must name at least one model")?;

        let window_secs: i64 =
            parse_positive(&get, "RATE_LIMIT_WINDOW_SECS", defaults.window.num_seconds())?;
        let max_requests: u32 =
            parse_positive(&get, "RATE_LIMIT_MAX_REQUESTS", defaults.max_requests)?;

        let default_strictness = match get("DEFAULT_STRICTNESS") {
            Some(raw) => raw
                .parse::<Strictness>()
                .map_err(anyhow::Error::msg)
                .context("Invalid DEFAULT_STRICTNESS")?,
            None => Strictness::default(),
        };

        Ok(Self {
            gemini_base_url: get("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            model_candidates,
            max_audio_bytes: parse_positive(&get, "MAX_AUDIO_BYTES", DEFAULT_MAX_AUDIO_BYTES)?,
            rate_limit: RateLimitPolicy::new(chrono::Duration::seconds(window_secs), max_requests),
            default_strictness,
            invocation_timeout: Duration::from_secs(parse_positive(
                &get,
                "INVOCATION_TIMEOUT_SECS",
                DEFAULT_INVOCATION_TIMEOUT_SECS,
            )?),
            max_output_tokens: parse_positive(
                &get,
                "MAX_OUTPUT_TOKENS",
                DEFAULT_MAX_OUTPUT_TOKENS,
            )?,
            expose_diagnostics: parse_or(&get, "EXPOSE_DIAGNOSTICS", false)?,
        })
    }
}

fn parse_or<F, T>(get: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid {}: {} ({})", key, raw, e)),
        None => Ok(default),
    }
}

/// Like [`parse_or`], for limits where zero or a negative value would
/// disable or break the pipeline.
fn parse_positive<F, T>(get: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Default + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    let value = parse_or(get, key, default)?;
    ensure!(value > T::default(), "{} must be positive, got {}", key, value);
    Ok(value)
}
