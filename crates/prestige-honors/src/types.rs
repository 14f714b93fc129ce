//! Honor tiers, catalog entries, and classification results.

use serde::Serialize;

/// Prestige bracket of a single honor.
///
/// Ordering is by prestige, so `max()` over a list yields the highest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HonorTier {
    /// Not in any catalog
    #[default]
    Unclassified,
    /// Peer-recognized professional achievement
    ProfessionalExcellence,
    /// State-level recognition
    NationalHonor,
    /// Paradigm-defining international recognition
    GlobalLandmark,
}

/// Points for a global landmark honor.
pub const GLOBAL_LANDMARK_POINTS: u32 = 100;
/// Points for a national honor.
pub const NATIONAL_HONOR_POINTS: u32 = 75;
/// Points for a professional excellence honor.
pub const PROFESSIONAL_EXCELLENCE_POINTS: u32 = 50;

impl HonorTier {
    /// Numeric rank: 3 for global landmark down to 0 for unclassified.
    pub fn rank(self) -> u8 {
        match self {
            HonorTier::GlobalLandmark => 3,
            HonorTier::NationalHonor => 2,
            HonorTier::ProfessionalExcellence => 1,
            HonorTier::Unclassified => 0,
        }
    }

    /// Fixed bonus points for this tier.
    pub fn points(self) -> u32 {
        match self {
            HonorTier::GlobalLandmark => GLOBAL_LANDMARK_POINTS,
            HonorTier::NationalHonor => NATIONAL_HONOR_POINTS,
            HonorTier::ProfessionalExcellence => PROFESSIONAL_EXCELLENCE_POINTS,
            HonorTier::Unclassified => 0,
        }
    }

    /// Whether holding an honor of this tier protects the holder's
    /// prestige tier from dropping below the floor.
    pub fn grants_floor(self) -> bool {
        matches!(self, HonorTier::GlobalLandmark | HonorTier::NationalHonor)
    }
}

impl std::fmt::Display for HonorTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HonorTier::GlobalLandmark => write!(f, "GLOBAL_LANDMARK"),
            HonorTier::NationalHonor => write!(f, "NATIONAL_HONOR"),
            HonorTier::ProfessionalExcellence => write!(f, "PROFESSIONAL_EXCELLENCE"),
            HonorTier::Unclassified => write!(f, "UNCLASSIFIED"),
        }
    }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Honor {
    /// Canonical award name
    pub name: &'static str,
    /// Prestige bracket
    pub tier: HonorTier,
    /// Dedup key; variants of the same award share a category
    pub category: &'static str,
    /// Awarding country, if national
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<&'static str>,
}

impl Honor {
    /// Points awarded for this honor.
    pub fn points(&self) -> u32 {
        self.tier.points()
    }
}

/// Result of classifying one award name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HonorClassification {
    /// Resolved bracket
    pub tier: HonorTier,
    /// Points for the bracket
    pub points: u32,
    /// Catalog entry, when matched by exact or substring lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_honor: Option<&'static Honor>,
}

impl HonorClassification {
    /// Classification backed by a catalog entry.
    pub fn matched(honor: &'static Honor) -> Self {
        Self {
            tier: honor.tier,
            points: honor.points(),
            matched_honor: Some(honor),
        }
    }

    /// Classification from a keyword hit, with no catalog entry.
    pub fn from_tier(tier: HonorTier) -> Self {
        Self {
            tier,
            points: tier.points(),
            matched_honor: None,
        }
    }

    /// The "not an honor we know" sentinel.
    pub fn unclassified() -> Self {
        Self::from_tier(HonorTier::Unclassified)
    }

    /// Dedup category of the matched entry.
    pub fn category(&self) -> Option<&'static str> {
        self.matched_honor.map(|h| h.category)
    }
}

/// Aggregate over a subject's award list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HonorBonusResult {
    /// Sum of points with each category counted once
    pub total_points: u32,
    /// One classification per input award, in input order
    pub classifications: Vec<HonorClassification>,
    /// Highest tier across all awards
    pub highest_tier: HonorTier,
    /// Whether the holder's prestige tier is floor-protected
    pub floor_protection: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_rank_and_points() {
        assert_eq!(HonorTier::GlobalLandmark.rank(), 3);
        assert_eq!(HonorTier::NationalHonor.rank(), 2);
        assert_eq!(HonorTier::ProfessionalExcellence.rank(), 1);
        assert_eq!(HonorTier::Unclassified.rank(), 0);

        assert_eq!(HonorTier::GlobalLandmark.points(), 100);
        assert_eq!(HonorTier::NationalHonor.points(), 75);
        assert_eq!(HonorTier::ProfessionalExcellence.points(), 50);
        assert_eq!(HonorTier::Unclassified.points(), 0);
    }

    #[test]
    fn test_ord_matches_rank() {
        let tiers = [
            HonorTier::Unclassified,
            HonorTier::ProfessionalExcellence,
            HonorTier::NationalHonor,
            HonorTier::GlobalLandmark,
        ];
        for pair in tiers.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_grants_floor() {
        assert!(HonorTier::GlobalLandmark.grants_floor());
        assert!(HonorTier::NationalHonor.grants_floor());
        assert!(!HonorTier::ProfessionalExcellence.grants_floor());
        assert!(!HonorTier::Unclassified.grants_floor());
    }

    #[test]
    fn test_classification_serializes_camel_case() {
        let json = serde_json::to_value(HonorClassification::from_tier(HonorTier::NationalHonor))
            .unwrap();
        assert_eq!(json["tier"], "NATIONAL_HONOR");
        assert_eq!(json["points"], 75);
        assert!(json.get("matchedHonor").is_none());
    }

    #[test]
    fn test_default_bonus_result() {
        let result = HonorBonusResult::default();
        assert_eq!(result.total_points, 0);
        assert_eq!(result.highest_tier, HonorTier::Unclassified);
        assert!(!result.floor_protection);
    }
}
