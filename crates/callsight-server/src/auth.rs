//! Simple API Key Authentication (Bearer Token)

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

/// API Key from secrets
static API_KEY: std::sync::OnceLock<String> = std::sync::OnceLock::new();

/// Initialize the API key
pub fn init_api_key(key: String) {
    let _ = API_KEY.set(key);
}

fn get_api_key() -> Option<&'static str> {
    API_KEY.get().map(|s| s.as_str()).filter(|s| !s.is_empty())
}

#[derive(Debug, PartialEq, Eq)]
enum Rejection {
    Missing,
    Malformed,
    Invalid,
}

/// Check an `Authorization` header value against the configured key.
fn check_bearer(header: Option<&str>, api_key: &str) -> Result<(), Rejection> {
    let header = header.ok_or(Rejection::Missing)?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(Rejection::Malformed)?
        .trim();

    if token == api_key {
        Ok(())
    } else {
        Err(Rejection::Invalid)
    }
}

/// Authentication middleware
/// Validates Bearer token against the API key
pub async fn auth_middleware(request: Request, next: Next) -> Result<Response, StatusCode> {
    let Some(api_key) = get_api_key() else {
        // No API key configured = auth disabled (for development)
        tracing::warn!("No API key configured, authentication disabled");
        return Ok(next.run(request).await);
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match check_bearer(auth_header, api_key) {
        Ok(()) => Ok(next.run(request).await),
        Err(rejection) => {
            match rejection {
                Rejection::Missing => tracing::warn!("Missing Authorization header"),
                Rejection::Malformed => tracing::warn!("Invalid Authorization header format"),
                Rejection::Invalid => tracing::warn!("Invalid API key attempted"),
            }
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
