//! CallType - Kind of business call being analyzed

use serde::{Deserialize, Serialize};

/// Call type, selecting the focus block of the analysis prompt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    Sales,
    Support,
    Consultation,
    FollowUp,
    #[default]
    General,
}

impl std::fmt::Display for CallType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CallType::Sales => write!(f, "sales"),
            CallType::Support => write!(f, "support"),
            CallType::Consultation => write!(f, "consultation"),
            CallType::FollowUp => write!(f, "follow_up"),
            CallType::General => write!(f, "general"),
        }
    }
}

impl std::str::FromStr for CallType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "sales" => Ok(CallType::Sales),
            "support" => Ok(CallType::Support),
            "consultation" => Ok(CallType::Consultation),
            "follow_up" | "followup" => Ok(CallType::FollowUp),
            "general" | "" => Ok(CallType::General),
            _ => Err(format!("Unknown call type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_call_type() {
        assert_eq!("sales".parse::<CallType>(), Ok(CallType::Sales));
        assert_eq!("Follow-Up".parse::<CallType>(), Ok(CallType::FollowUp));
        assert_eq!("".parse::<CallType>(), Ok(CallType::General));
        assert!("cold_call".parse::<CallType>().is_err());
    }

    #[test]
    fn test_display_matches_serde() {
        for call_type in [
            CallType::Sales,
            CallType::Support,
            CallType::Consultation,
            CallType::FollowUp,
            CallType::General,
        ] {
            let json = serde_json::to_value(call_type).unwrap();
            assert_eq!(json, serde_json::json!(call_type.to_string()));
        }
    }
}
