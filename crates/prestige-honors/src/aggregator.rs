//! Honor bonus aggregation over a subject's award list.

use std::collections::HashSet;

use prestige_types::{AwardEntry, PrestigeTier, ProfileRecord};
use tracing::debug;

use crate::classifier::classify_award;
use crate::types::{HonorBonusResult, HonorTier};

/// Classify every award and total the points, counting each dedup category
/// once.
///
/// The first award in a category contributes its points; later awards in the
/// same category are still listed in `classifications` but add nothing.
/// Awards resolved by keyword or left unclassified have no category and are
/// never deduplicated. `highest_tier` considers every award, including
/// deduplicated ones.
pub fn aggregate_honors(awards: &[AwardEntry]) -> HonorBonusResult {
    let mut classifications = Vec::with_capacity(awards.len());
    let mut seen_categories: HashSet<&'static str> = HashSet::new();
    let mut total_points = 0;
    let mut highest_tier = HonorTier::Unclassified;

    for award in awards {
        let classification = classify_award(&award.name);
        highest_tier = highest_tier.max(classification.tier);

        let counts = match classification.category() {
            Some(category) => seen_categories.insert(category),
            None => true,
        };
        if counts {
            total_points += classification.points;
        } else {
            debug!(award = %award.name, "Duplicate honor category, no extra points");
        }

        classifications.push(classification);
    }

    HonorBonusResult {
        total_points,
        classifications,
        highest_tier,
        floor_protection: highest_tier.grants_floor(),
    }
}

/// Whether an award list grants tier floor protection.
pub fn honor_floor(awards: &[AwardEntry]) -> bool {
    awards
        .iter()
        .any(|award| classify_award(&award.name).tier.grants_floor())
}

/// A profile's stored tier, raised to the floor if its awards grant it.
pub fn effective_tier(record: &ProfileRecord) -> PrestigeTier {
    record.tier.with_floor(honor_floor(&record.awards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HONORS;
    use proptest::prelude::*;

    fn awards(names: &[&str]) -> Vec<AwardEntry> {
        names.iter().map(|n| AwardEntry::new(*n)).collect()
    }

    #[test]
    fn test_empty_awards() {
        let result = aggregate_honors(&[]);
        assert_eq!(result.total_points, 0);
        assert_eq!(result.highest_tier, HonorTier::Unclassified);
        assert!(!result.floor_protection);
        assert!(result.classifications.is_empty());
    }

    #[test]
    fn test_same_category_counted_once() {
        let result = aggregate_honors(&awards(&["Lasker Award", "Lasker-Koshland Award"]));
        assert_eq!(result.total_points, 100);
        assert_eq!(result.classifications.len(), 2);
        assert_eq!(result.classifications[1].points, 100);
    }

    #[test]
    fn test_first_in_category_wins() {
        // Both "Surgery" category, both 50
        let result = aggregate_honors(&awards(&["Bigelow Medal", "Michael E. DeBakey Award"]));
        assert_eq!(result.total_points, 50);

        // "Neuroscience" holds a 50 and a 100 entry; order decides
        let low_first = aggregate_honors(&awards(&["Grass Foundation Award", "Brain Prize"]));
        assert_eq!(low_first.total_points, 50);
        assert_eq!(low_first.highest_tier, HonorTier::GlobalLandmark);
        assert!(low_first.floor_protection);

        let high_first = aggregate_honors(&awards(&["Brain Prize", "Grass Foundation Award"]));
        assert_eq!(high_first.total_points, 100);
    }

    #[test]
    fn test_distinct_categories_sum() {
        let result = aggregate_honors(&awards(&[
            "Nobel Prize",
            "Padma Shri",
            "Karnofsky Memorial Award",
            "Employee of the Month",
        ]));
        assert_eq!(result.total_points, 100 + 75 + 50);
        assert_eq!(result.highest_tier, HonorTier::GlobalLandmark);
        assert!(result.floor_protection);
        assert_eq!(result.classifications[3].tier, HonorTier::Unclassified);
    }

    #[test]
    fn test_keyword_hits_are_not_deduplicated() {
        let result = aggregate_honors(&awards(&[
            "Laureate of the Lasker Foundation",
            "Lasker Foundation Laureate",
        ]));
        assert_eq!(result.total_points, 200);
    }

    #[test]
    fn test_professional_only_has_no_floor() {
        let result = aggregate_honors(&awards(&["Howland Award", "Medawar Prize"]));
        assert_eq!(result.total_points, 100);
        assert_eq!(result.highest_tier, HonorTier::ProfessionalExcellence);
        assert!(!result.floor_protection);
    }

    #[test]
    fn test_effective_tier() {
        let knighted = ProfileRecord::new("a", "A", "Surgery")
            .with_tier(PrestigeTier::Master)
            .with_award(AwardEntry::new("Knight Bachelor"));
        assert_eq!(effective_tier(&knighted), PrestigeTier::Elite);

        let titan = ProfileRecord::new("b", "B", "Surgery")
            .with_tier(PrestigeTier::Titan)
            .with_award(AwardEntry::new("Nobel Prize"));
        assert_eq!(effective_tier(&titan), PrestigeTier::Titan);

        let plain = ProfileRecord::new("c", "C", "Surgery").with_tier(PrestigeTier::Master);
        assert_eq!(effective_tier(&plain), PrestigeTier::Master);
    }

    #[test]
    fn test_honor_floor_matches_aggregate() {
        let list = awards(&["Howland Award", "Order of Canada"]);
        assert_eq!(honor_floor(&list), aggregate_honors(&list).floor_protection);
        assert!(honor_floor(&list));
    }

    fn catalog_name() -> impl Strategy<Value = &'static str> {
        (0..HONORS.len()).prop_map(|i| HONORS[i].name)
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            max_global_rejects: 1 << 20,
            ..ProptestConfig::default()
        })]

        #[test]
        fn prop_same_category_never_double_counted(
            first in 0..HONORS.len(),
            second in 0..HONORS.len(),
        ) {
            let a = &HONORS[first];
            let b = &HONORS[second];
            prop_assume!(a.category == b.category);

            let result = aggregate_honors(&awards(&[a.name, b.name]));
            prop_assert_eq!(result.total_points, classify_award(a.name).points);
            prop_assert_eq!(result.classifications.len(), 2);
        }

        #[test]
        fn prop_floor_when_landmark_or_national_present(
            names in proptest::collection::vec(catalog_name(), 0..6),
            protected in prop::sample::select(
                HONORS
                    .iter()
                    .filter(|h| h.tier.grants_floor())
                    .map(|h| h.name)
                    .collect::<Vec<_>>()
            ),
            position in 0usize..6,
        ) {
            let mut names = names;
            let at = position.min(names.len());
            names.insert(at, protected);

            let result = aggregate_honors(&awards(&names));
            prop_assert!(result.floor_protection);
            prop_assert!(result.highest_tier.grants_floor());
        }

        #[test]
        fn prop_total_bounded_by_distinct_categories(
            names in proptest::collection::vec(catalog_name(), 0..10),
        ) {
            let result = aggregate_honors(&awards(&names));
            let distinct: HashSet<_> = result
                .classifications
                .iter()
                .filter_map(|c| c.category())
                .collect();
            prop_assert!(result.total_points <= distinct.len() as u32 * 100);
        }
    }
}
