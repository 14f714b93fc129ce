//! Relevance scoring for indexed profiles.
//!
//! A result's relevance is a name-match score plus domain boosts:
//!
//! | Component                              | Points                  |
//! |----------------------------------------|-------------------------|
//! | Full name equals query                 | 100                     |
//! | Full name starts with query            | 90                      |
//! | First or last name equals query        | 85                      |
//! | First or last name starts with query   | 75                      |
//! | Full name contains query               | 60                      |
//! | Otherwise, fuzzy name score            | × 0.5                   |
//! | Specialty contains query               | + 20                    |
//! | City or country contains query         | + 15                    |
//! | Tier                                   | + 15 / 10 / 5 / 0       |
//! | Seniority                              | + min(h / 10, 10)       |

use crate::fuzzy::fuzzy_match_tokens;
use crate::index::SearchableRecord;

/// Full name equals the query.
pub const EXACT_NAME_SCORE: f64 = 100.0;
/// Full name starts with the query.
pub const NAME_PREFIX_SCORE: f64 = 90.0;
/// First or last name equals the query.
pub const NAME_PART_EXACT_SCORE: f64 = 85.0;
/// First or last name starts with the query.
pub const NAME_PART_PREFIX_SCORE: f64 = 75.0;
/// Full name contains the query.
pub const NAME_CONTAINS_SCORE: f64 = 60.0;
/// Scale applied to a fuzzy name score.
pub const FUZZY_NAME_SCALE: f64 = 0.5;

/// Specialty contains the query.
pub const SPECIALTY_BONUS: f64 = 20.0;
/// City or country contains the query.
pub const LOCATION_BONUS: f64 = 15.0;
/// Seniority points per bonus point.
pub const SENIORITY_DIVISOR: f64 = 10.0;
/// Seniority bonus cap.
pub const SENIORITY_BONUS_CAP: f64 = 10.0;

/// Minimum name fuzzy score for a non-substring hit.
pub const NAME_FUZZY_MIN_SCORE: f64 = 30.0;
/// Minimum specialty fuzzy score for a non-substring hit.
pub const SPECIALTY_FUZZY_MIN_SCORE: f64 = 40.0;
/// Multiplier for hits accepted through name fuzzy matching.
pub const NAME_FUZZY_PENALTY: f64 = 0.8;
/// Multiplier for hits accepted through specialty fuzzy matching.
pub const SPECIALTY_FUZZY_PENALTY: f64 = 0.6;

/// Capped seniority contribution.
pub fn seniority_bonus(seniority: u32) -> f64 {
    (f64::from(seniority) / SENIORITY_DIVISOR).min(SENIORITY_BONUS_CAP)
}

/// Tier and seniority only; used when there is no query to match.
pub fn browse_score(record: &SearchableRecord) -> f64 {
    record.tier.search_bonus() + seniority_bonus(record.seniority)
}

/// Name component of relevance for a lowercased, trimmed query.
pub fn name_match_score(record: &SearchableRecord, query_lower: &str) -> f64 {
    let first = record.first_name_lower.as_str();
    let last = record.last_name_lower.as_str();

    if record.name_lower == query_lower {
        EXACT_NAME_SCORE
    } else if record.name_lower.starts_with(query_lower) {
        NAME_PREFIX_SCORE
    } else if first == query_lower || last == query_lower {
        NAME_PART_EXACT_SCORE
    } else if first.starts_with(query_lower) || last.starts_with(query_lower) {
        NAME_PART_PREFIX_SCORE
    } else if record.name_lower.contains(query_lower) {
        NAME_CONTAINS_SCORE
    } else {
        let fuzzy = fuzzy_match_tokens(&record.full_name, query_lower);
        if fuzzy.matches {
            fuzzy.score * FUZZY_NAME_SCALE
        } else {
            0.0
        }
    }
}

/// Full relevance of `record` for `query`.
///
/// The query is trimmed and lowercased here; an empty query scores as
/// [`browse_score`].
pub fn relevance_score(record: &SearchableRecord, query: &str) -> f64 {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return browse_score(record);
    }

    let mut score = name_match_score(record, &query_lower);

    if record.specialty_lower.contains(&query_lower) {
        score += SPECIALTY_BONUS;
    }

    let city_hit = record
        .city_lower
        .as_deref()
        .is_some_and(|city| city.contains(&query_lower));
    if city_hit || record.country_lower.contains(&query_lower) {
        score += LOCATION_BONUS;
    }

    score + browse_score(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prestige_types::{PrestigeTier, ProfileRecord};

    fn john() -> SearchableRecord {
        SearchableRecord::from_profile(
            &ProfileRecord::new("john", "John Smith", "Cardiology")
                .with_tier(PrestigeTier::Titan)
                .with_h_index(50)
                .with_location(Some("Boston"), "USA"),
        )
    }

    #[test]
    fn test_name_ladder() {
        let r = john();
        // tier 15 + seniority 5 = 20 on top of every name score
        assert_eq!(relevance_score(&r, "John Smith"), 120.0);
        assert_eq!(relevance_score(&r, "john"), 110.0);
        assert_eq!(relevance_score(&r, "smith"), 105.0);
        assert_eq!(relevance_score(&r, "smi"), 95.0);
        assert_eq!(relevance_score(&r, "n smi"), 80.0);
    }

    #[test]
    fn test_specialty_and_location_bonuses() {
        let r = john();
        assert_eq!(relevance_score(&r, "cardio"), SPECIALTY_BONUS + 20.0);
        assert_eq!(relevance_score(&r, "boston"), LOCATION_BONUS + 20.0);
        assert_eq!(relevance_score(&r, "usa"), LOCATION_BONUS + 20.0);
    }

    #[test]
    fn test_fuzzy_name_is_scaled() {
        let r = SearchableRecord::from_profile(
            &ProfileRecord::new("jon", "Jon Smyth", "Cardiology").with_tier(PrestigeTier::Elite),
        );
        // token fallback scores 45, halved, plus Elite 10
        assert_eq!(relevance_score(&r, "John Smith"), 32.5);
    }

    #[test]
    fn test_browse_score() {
        let r = john();
        assert_eq!(browse_score(&r), 20.0);
        assert_eq!(relevance_score(&r, "   "), 20.0);
    }

    #[test]
    fn test_seniority_bonus_capped() {
        assert_eq!(seniority_bonus(0), 0.0);
        assert_eq!(seniority_bonus(37), 3.7);
        assert_eq!(seniority_bonus(250), SENIORITY_BONUS_CAP);
    }
}
