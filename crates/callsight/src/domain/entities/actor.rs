//! ActorContext - Who submitted a request

use serde::{Deserialize, Serialize};

/// Identifier used when neither an identity nor an origin is known
pub const ANONYMOUS_ACTOR: &str = "anonymous";

/// Caller identity as seen by the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    /// Authenticated user id, if the request carried one
    pub user_id: Option<String>,
    /// Network origin (client IP)
    pub origin: Option<String>,
}

impl ActorContext {
    pub fn new(user_id: Option<String>, origin: Option<String>) -> Self {
        Self { user_id, origin }
    }

    /// Rate-limit key: authenticated identity, else network origin, else `anonymous`.
    pub fn identifier(&self) -> String {
        non_blank(self.user_id.as_deref())
            .or_else(|| non_blank(self.origin.as_deref()))
            .unwrap_or(ANONYMOUS_ACTOR)
            .to_string()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_precedence() {
        let actor = ActorContext::new(Some("user-1".into()), Some("10.0.0.1".into()));
        assert_eq!(actor.identifier(), "user-1");

        let actor = ActorContext::new(None, Some("10.0.0.1".into()));
        assert_eq!(actor.identifier(), "10.0.0.1");

        let actor = ActorContext::new(Some("  ".into()), None);
        assert_eq!(actor.identifier(), ANONYMOUS_ACTOR);
    }
}
