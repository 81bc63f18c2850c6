//! PreferredTone - Tone an organization expects agents to use

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTone {
    Formal,
    Friendly,
    #[default]
    Professional,
}

impl std::fmt::Display for PreferredTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferredTone::Formal => write!(f, "formal"),
            PreferredTone::Friendly => write!(f, "friendly"),
            PreferredTone::Professional => write!(f, "professional"),
        }
    }
}

impl std::str::FromStr for PreferredTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "formal" => Ok(PreferredTone::Formal),
            "friendly" => Ok(PreferredTone::Friendly),
            "professional" => Ok(PreferredTone::Professional),
            _ => Err(format!("Unknown tone: {}", s)),
        }
    }
}
