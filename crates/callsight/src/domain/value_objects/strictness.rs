//! Strictness - Scoring strictness tier

use serde::{Deserialize, Serialize};

/// Scoring strictness tier.
///
/// Controls the harshness of the prompt preamble and which score band a
/// typical call is expected to land in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Lenient,
    Moderate,
    #[default]
    Strict,
}

impl Strictness {
    /// Inclusive score range an average call should receive under this tier.
    pub fn typical_band(&self) -> (u8, u8) {
        match self {
            Strictness::Strict => (50, 69),
            Strictness::Moderate => (60, 74),
            Strictness::Lenient => (70, 79),
        }
    }
}

impl std::fmt::Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strictness::Lenient => write!(f, "lenient"),
            Strictness::Moderate => write!(f, "moderate"),
            Strictness::Strict => write!(f, "strict"),
        }
    }
}

impl std::str::FromStr for Strictness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lenient" => Ok(Strictness::Lenient),
            "moderate" => Ok(Strictness::Moderate),
            "strict" => Ok(Strictness::Strict),
            _ => Err(format!("Unknown strictness: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        assert_eq!(Strictness::default(), Strictness::Strict);
    }

    #[test]
    fn test_typical_band_rises_with_leniency() {
        let strict = Strictness::Strict.typical_band();
        let moderate = Strictness::Moderate.typical_band();
        let lenient = Strictness::Lenient.typical_band();
        assert!(strict.1 < lenient.0);
        assert!(strict.0 < moderate.0 && moderate.0 < lenient.0);
    }
}
