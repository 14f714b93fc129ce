//! Award name classification.
//!
//! Resolution order, first hit wins:
//! 1. Exact match against a normalized catalog name
//! 2. Substring match in either direction, in catalog order
//! 3. Keyword fallback for well-known awards missing from the catalog
//! 4. Unclassified, 0 points

use std::sync::OnceLock;

use tracing::debug;

use crate::catalog::HONORS;
use crate::types::{Honor, HonorClassification, HonorTier};

/// Keyword fallback table, evaluated in order.
const KEYWORD_TIERS: &[(&[&str], HonorTier)] = &[
    (&["nobel"], HonorTier::GlobalLandmark),
    (&["lasker"], HonorTier::GlobalLandmark),
    (&["wolf prize"], HonorTier::GlobalLandmark),
    (&["gairdner"], HonorTier::GlobalLandmark),
    (
        &["padma vibhushan", "padma bhushan", "padma shri"],
        HonorTier::NationalHonor,
    ),
    (&["presidential medal"], HonorTier::NationalHonor),
    (&["knighthood", "knight bachelor"], HonorTier::NationalHonor),
    (
        &["legion of honour", "légion d'honneur", "legion d'honneur"],
        HonorTier::NationalHonor,
    ),
    (&["order of merit"], HonorTier::NationalHonor),
];

/// Normalize an award name for comparison.
///
/// Lowercases, maps typographic quotes and backticks to ASCII quotes,
/// collapses whitespace runs to one space, and trims.
pub fn normalize_award_name(name: &str) -> String {
    let unified: String = name
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' | '`' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect();
    unified.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Classifier over a catalog with pre-normalized names.
#[derive(Debug)]
pub struct HonorClassifier {
    entries: Vec<(String, &'static Honor)>,
}

impl Default for HonorClassifier {
    fn default() -> Self {
        Self::new(HONORS)
    }
}

impl HonorClassifier {
    /// Build a classifier over `catalog`, keeping its order.
    pub fn new(catalog: &'static [Honor]) -> Self {
        let entries = catalog
            .iter()
            .map(|honor| (normalize_award_name(honor.name), honor))
            .collect();
        Self { entries }
    }

    /// Shared classifier over the built-in catalog.
    pub fn global() -> &'static HonorClassifier {
        static CLASSIFIER: OnceLock<HonorClassifier> = OnceLock::new();
        CLASSIFIER.get_or_init(HonorClassifier::default)
    }

    /// Classify one award name. Never fails; unknown names are unclassified.
    pub fn classify(&self, award_name: &str) -> HonorClassification {
        let input = normalize_award_name(award_name);
        if input.is_empty() {
            return HonorClassification::unclassified();
        }

        if let Some((_, honor)) = self.entries.iter().find(|(name, _)| *name == input) {
            debug!(award = award_name, matched = honor.name, "Exact honor match");
            return HonorClassification::matched(*honor);
        }

        if let Some((_, honor)) = self
            .entries
            .iter()
            .find(|(name, _)| input.contains(name.as_str()) || name.contains(input.as_str()))
        {
            debug!(award = award_name, matched = honor.name, "Substring honor match");
            return HonorClassification::matched(*honor);
        }

        if let Some((_, tier)) = KEYWORD_TIERS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|kw| input.contains(kw)))
        {
            debug!(award = award_name, tier = %tier, "Keyword honor match");
            return HonorClassification::from_tier(*tier);
        }

        debug!(award = award_name, "Award not classified");
        HonorClassification::unclassified()
    }
}

/// Classify an award name against the built-in catalog.
pub fn classify_award(award_name: &str) -> HonorClassification {
    HonorClassifier::global().classify(award_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_award_name("  Padma   Shri \t"), "padma shri");
        assert_eq!(
            normalize_award_name("Legion d\u{2019}Honneur"),
            "legion d'honneur"
        );
        assert_eq!(
            normalize_award_name("\u{201C}Gold Heart\u{201D} Award"),
            "\"gold heart\" award"
        );
        assert_eq!(normalize_award_name("Dan`s Prize"), "dan's prize");
    }

    #[test]
    fn test_exact_and_substring_paths_agree() {
        let short = classify_award("Nobel Prize");
        let long = classify_award("nobel prize in physiology or medicine");

        assert_eq!(short.tier, HonorTier::GlobalLandmark);
        assert_eq!(short.points, 100);
        assert_eq!(long.tier, HonorTier::GlobalLandmark);
        assert_eq!(long.points, 100);
        assert_eq!(short.category(), Some("Nobel"));
        assert_eq!(long.category(), Some("Nobel"));
    }

    #[test]
    fn test_exact_match_picks_specific_entry() {
        let c = classify_award("Lasker Award for Clinical Medical Research");
        assert_eq!(
            c.matched_honor.map(|h| h.name),
            Some("Lasker Award for Clinical Medical Research")
        );
    }

    #[test]
    fn test_substring_input_contains_catalog_name() {
        let c = classify_award("Nobel Prize in Chemistry (shared)");
        assert_eq!(c.tier, HonorTier::GlobalLandmark);
        assert_eq!(c.matched_honor.map(|h| h.name), Some("Nobel Prize"));
    }

    #[test]
    fn test_substring_catalog_name_contains_input() {
        let c = classify_award("Robert Koch");
        assert_eq!(c.matched_honor.map(|h| h.name), Some("Robert Koch Gold Medal"));
    }

    #[test]
    fn test_whitespace_and_case_insensitive() {
        let c = classify_award("  PADMA   bhushan ");
        assert_eq!(c.tier, HonorTier::NationalHonor);
        assert_eq!(c.points, 75);
        assert_eq!(c.category(), Some("Padma"));
    }

    #[test]
    fn test_keyword_fallback_has_no_catalog_entry() {
        let c = classify_award("Laureate of the Lasker Foundation");
        assert_eq!(c.tier, HonorTier::GlobalLandmark);
        assert_eq!(c.points, 100);
        assert!(c.matched_honor.is_none());

        let legion = classify_award("Legion d\u{2019}honneur");
        assert_eq!(legion.tier, HonorTier::NationalHonor);
        assert!(legion.matched_honor.is_none());
    }

    #[test]
    fn test_professional_excellence() {
        let c = classify_award("Karnofsky Memorial Award");
        assert_eq!(c.tier, HonorTier::ProfessionalExcellence);
        assert_eq!(c.points, 50);
    }

    #[test]
    fn test_unknown_award_is_unclassified() {
        let c = classify_award("Employee of the Month");
        assert_eq!(c, HonorClassification::unclassified());
        assert_eq!(c.points, 0);
    }

    #[test]
    fn test_blank_award_is_unclassified() {
        assert_eq!(classify_award(""), HonorClassification::unclassified());
        assert_eq!(classify_award("   "), HonorClassification::unclassified());
    }

    #[test]
    fn test_custom_catalog() {
        static SMALL: &[Honor] = &[Honor::new(
            "Golden Scalpel",
            HonorTier::ProfessionalExcellence,
            "Scalpel",
            None,
        )];
        let classifier = HonorClassifier::new(SMALL);
        assert_eq!(
            classifier.classify("golden scalpel").tier,
            HonorTier::ProfessionalExcellence
        );
        // Keyword table still applies
        assert_eq!(
            classifier.classify("Nobel Prize").tier,
            HonorTier::GlobalLandmark
        );
        assert!(classifier.classify("Nobel Prize").matched_honor.is_none());
    }
}
