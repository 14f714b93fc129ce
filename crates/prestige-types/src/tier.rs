//! Prestige tiers and practitioner roles.
//!
//! A profile's tier is assigned upstream from its composite score. Search
//! uses it as a relevance boost and the index pre-sorts on it; honors can
//! raise it to a guaranteed floor.

use serde::{Deserialize, Deserializer, Serialize};

/// Prestige bracket of a profile.
///
/// Ordering is by prestige: `Titan > Elite > Master > Unranked`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrestigeTier {
    /// No tier assigned
    #[default]
    Unranked,
    /// Third bracket
    Master,
    /// Second bracket, and the floor granted by landmark or national honors
    Elite,
    /// Top bracket
    Titan,
}

/// Relevance bonus for a Titan profile.
pub const TITAN_BONUS: f64 = 15.0;
/// Relevance bonus for an Elite profile.
pub const ELITE_BONUS: f64 = 10.0;
/// Relevance bonus for a Master profile.
pub const MASTER_BONUS: f64 = 5.0;

impl PrestigeTier {
    /// Tier that floor-protected profiles can never drop below.
    pub const FLOOR: PrestigeTier = PrestigeTier::Elite;

    /// Relevance bonus added to search results for this tier.
    pub fn search_bonus(self) -> f64 {
        match self {
            PrestigeTier::Titan => TITAN_BONUS,
            PrestigeTier::Elite => ELITE_BONUS,
            PrestigeTier::Master => MASTER_BONUS,
            PrestigeTier::Unranked => 0.0,
        }
    }

    /// Raise the tier to [`PrestigeTier::FLOOR`] when `protected` is set.
    ///
    /// Tiers already above the floor are returned unchanged.
    pub fn with_floor(self, protected: bool) -> Self {
        if protected {
            self.max(Self::FLOOR)
        } else {
            self
        }
    }

    /// Parse a tier label leniently; unknown labels are `Unranked`.
    pub fn parse_lenient(label: &str) -> Self {
        match label.trim().to_ascii_uppercase().as_str() {
            "TITAN" => PrestigeTier::Titan,
            "ELITE" => PrestigeTier::Elite,
            "MASTER" => PrestigeTier::Master,
            _ => PrestigeTier::Unranked,
        }
    }
}

/// Deserialize a tier with [`PrestigeTier::parse_lenient`]; null is `Unranked`.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<PrestigeTier, D::Error>
where
    D: Deserializer<'de>,
{
    let label: Option<String> = Option::deserialize(deserializer)?;
    Ok(label.as_deref().map_or(PrestigeTier::Unranked, PrestigeTier::parse_lenient))
}

impl std::fmt::Display for PrestigeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrestigeTier::Titan => write!(f, "TITAN"),
            PrestigeTier::Elite => write!(f, "ELITE"),
            PrestigeTier::Master => write!(f, "MASTER"),
            PrestigeTier::Unranked => write!(f, "UNRANKED"),
        }
    }
}

/// Practitioner role derived from specialty and affiliation text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Surgical specialty
    Surgeon,
    /// PhD holder or research affiliation
    Researcher,
    /// Neither surgeon nor researcher
    Physician,
}

impl Role {
    /// Parse a role filter value.
    ///
    /// Returns `None` for unrecognized values so callers can treat the
    /// filter as absent rather than failing the query.
    pub fn parse_filter(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "surgeon" => Some(Role::Surgeon),
            "researcher" => Some(Role::Researcher),
            "physician" => Some(Role::Physician),
            _ => None,
        }
    }

    /// Role from the two derived flags; surgeon wins over researcher.
    pub fn from_flags(is_surgeon: bool, is_researcher: bool) -> Self {
        if is_surgeon {
            Role::Surgeon
        } else if is_researcher {
            Role::Researcher
        } else {
            Role::Physician
        }
    }

    /// Display label used in result payloads.
    pub fn label(self) -> &'static str {
        match self {
            Role::Surgeon => "Surgeon",
            Role::Researcher => "Researcher",
            Role::Physician => "Physician",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(PrestigeTier::Titan > PrestigeTier::Elite);
        assert!(PrestigeTier::Elite > PrestigeTier::Master);
        assert!(PrestigeTier::Master > PrestigeTier::Unranked);
    }

    #[test]
    fn test_search_bonus() {
        assert_eq!(PrestigeTier::Titan.search_bonus(), 15.0);
        assert_eq!(PrestigeTier::Elite.search_bonus(), 10.0);
        assert_eq!(PrestigeTier::Master.search_bonus(), 5.0);
        assert_eq!(PrestigeTier::Unranked.search_bonus(), 0.0);
    }

    #[test]
    fn test_with_floor() {
        assert_eq!(PrestigeTier::Unranked.with_floor(true), PrestigeTier::Elite);
        assert_eq!(PrestigeTier::Master.with_floor(true), PrestigeTier::Elite);
        assert_eq!(PrestigeTier::Titan.with_floor(true), PrestigeTier::Titan);
        assert_eq!(PrestigeTier::Master.with_floor(false), PrestigeTier::Master);
    }

    #[test]
    fn test_tier_serde_labels() {
        let json = serde_json::to_string(&PrestigeTier::Titan).unwrap();
        assert_eq!(json, "\"TITAN\"");
        let tier: PrestigeTier = serde_json::from_str("\"UNRANKED\"").unwrap();
        assert_eq!(tier, PrestigeTier::Unranked);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(PrestigeTier::parse_lenient(" elite "), PrestigeTier::Elite);
        assert_eq!(PrestigeTier::parse_lenient("legend"), PrestigeTier::Unranked);
    }

    #[test]
    fn test_role_parse_filter() {
        assert_eq!(Role::parse_filter("Surgeon"), Some(Role::Surgeon));
        assert_eq!(Role::parse_filter("physician"), Some(Role::Physician));
        assert_eq!(Role::parse_filter("astronaut"), None);
    }

    #[test]
    fn test_role_from_flags() {
        assert_eq!(Role::from_flags(true, true), Role::Surgeon);
        assert_eq!(Role::from_flags(false, true), Role::Researcher);
        assert_eq!(Role::from_flags(false, false), Role::Physician);
    }
}
