//! Weighted multi-field scoring.

use serde::Serialize;

use crate::fuzzy::{fuzzy_match, fuzzy_match_tokens, FuzzyMatch};

/// Default result cap.
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Default minimum normalized score.
pub const DEFAULT_MIN_SCORE: f64 = 20.0;

/// A field to match, with its weight and accessor.
pub struct WeightedField<T> {
    /// Field name reported in matches
    pub key: &'static str,
    /// Relative weight
    pub weight: f64,
    /// Field value; `None` or empty means the field is absent
    pub extract: fn(&T) -> Option<&str>,
}

impl<T> WeightedField<T> {
    /// Create a weighted field.
    pub const fn new(key: &'static str, weight: f64, extract: fn(&T) -> Option<&str>) -> Self {
        Self {
            key,
            weight,
            extract,
        }
    }
}

impl<T> Clone for WeightedField<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for WeightedField<T> {}

/// A field that matched, for highlighting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMatch {
    /// Field name
    pub field: &'static str,
    /// Field-level fuzzy score
    pub score: f64,
    /// Matched portion of the field value
    pub matched_span: String,
}

/// An item with its relevance score and the fields that matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult<T> {
    /// Scored item
    pub item: T,
    /// Aggregate score
    pub score: f64,
    /// Fields that matched, in field order
    pub matched_fields: Vec<FieldMatch>,
}

impl<T> ScoredResult<T> {
    /// Score of the named field, if it matched.
    pub fn field_score(&self, field: &str) -> Option<f64> {
        self.matched_fields
            .iter()
            .find(|m| m.field == field)
            .map(|m| m.score)
    }
}

/// Scoring options.
#[derive(Debug, Clone, Copy)]
pub struct ScoreOptions {
    /// Result cap after sorting
    pub max_results: usize,
    /// Minimum normalized score to keep an item
    pub min_score: f64,
    /// Fall back to per-token matching for multi-word queries
    pub token_fallback: bool,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_score: DEFAULT_MIN_SCORE,
            token_fallback: false,
        }
    }
}

impl ScoreOptions {
    /// Set the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the minimum score.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Enable per-token fallback.
    pub fn with_token_fallback(mut self, enabled: bool) -> Self {
        self.token_fallback = enabled;
        self
    }
}

/// Normalized score of one item plus its matched fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldScores {
    /// `Σ score·weight / Σ weight` over present fields
    pub score: f64,
    /// Fields that matched
    pub matched_fields: Vec<FieldMatch>,
}

/// Score one item across weighted fields.
///
/// Every present field adds its weight to the denominator; only matching
/// fields add `score × weight` to the numerator. No present field gives 0.
pub fn score_fields<T>(
    item: &T,
    query: &str,
    fields: &[WeightedField<T>],
    options: &ScoreOptions,
) -> FieldScores {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    let mut matched_fields = Vec::new();

    for field in fields {
        let Some(value) = (field.extract)(item).filter(|v| !v.is_empty()) else {
            continue;
        };

        let m: FuzzyMatch = if options.token_fallback {
            fuzzy_match_tokens(value, query)
        } else {
            fuzzy_match(value, query)
        };

        if m.matches {
            numerator += m.score * field.weight;
            matched_fields.push(FieldMatch {
                field: field.key,
                score: m.score,
                matched_span: m.matched_span,
            });
        }
        denominator += field.weight;
    }

    let score = if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    };

    FieldScores {
        score,
        matched_fields,
    }
}

/// Score a batch, keep items at or above `min_score`, sort descending, and
/// truncate to `max_results`.
///
/// The sort is stable, so equal scores keep input order.
pub fn fuzzy_search_multi_field<'a, T>(
    items: &'a [T],
    query: &str,
    fields: &[WeightedField<T>],
    options: &ScoreOptions,
) -> Vec<ScoredResult<&'a T>> {
    let mut results: Vec<ScoredResult<&'a T>> = items
        .iter()
        .filter_map(|item| {
            let scores = score_fields(item, query, fields, options);
            (scores.score >= options.min_score).then(|| ScoredResult {
                item,
                score: scores.score,
                matched_fields: scores.matched_fields,
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(options.max_results);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Person {
        name: &'static str,
        specialty: &'static str,
        city: Option<&'static str>,
    }

    fn name(p: &Person) -> Option<&str> {
        Some(p.name)
    }

    fn specialty(p: &Person) -> Option<&str> {
        Some(p.specialty)
    }

    fn city(p: &Person) -> Option<&str> {
        p.city
    }

    const FIELDS: [WeightedField<Person>; 3] = [
        WeightedField::new("name", 2.0, name),
        WeightedField::new("specialty", 1.0, specialty),
        WeightedField::new("city", 1.0, city),
    ];

    fn people() -> Vec<Person> {
        vec![
            Person {
                name: "John Smith",
                specialty: "Cardiology",
                city: Some("Boston"),
            },
            Person {
                name: "Jane Smithers",
                specialty: "Oncology",
                city: None,
            },
            Person {
                name: "Alice Jones",
                specialty: "Dermatology",
                city: Some("Austin"),
            },
        ]
    }

    #[test]
    fn test_weighted_average_over_present_fields() {
        let people = people();
        // name exact (100 × 2), specialty and city miss: 200 / 4
        let scores = score_fields(&people[0], "john smith", &FIELDS, &ScoreOptions::default());
        assert_eq!(scores.score, 50.0);
        assert_eq!(scores.matched_fields.len(), 1);
        assert_eq!(scores.matched_fields[0].field, "name");
    }

    #[test]
    fn test_absent_field_not_in_denominator() {
        let people = people();
        // city is None: prefix 95 × 2 over weight 3
        let scores = score_fields(&people[1], "jane", &FIELDS, &ScoreOptions::default());
        assert!((scores.score - 190.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_string_counts_as_absent() {
        let p = Person {
            name: "",
            specialty: "",
            city: Some(""),
        };
        let scores = score_fields(&p, "anything", &FIELDS, &ScoreOptions::default());
        assert_eq!(scores.score, 0.0);
        assert!(scores.matched_fields.is_empty());
    }

    #[test]
    fn test_batch_filters_sorts_and_truncates() {
        let people = people();
        let results = fuzzy_search_multi_field(&people, "smith", &FIELDS, &ScoreOptions::default());
        assert_eq!(results.len(), 2);
        // "smith" at offset 5 of both names: 70 × 2 / 4 vs 70 × 2 / 3
        assert_eq!(results[0].item.name, "Jane Smithers");
        assert_eq!(results[1].item.name, "John Smith");

        let capped = fuzzy_search_multi_field(
            &people,
            "smith",
            &FIELDS,
            &ScoreOptions::default().with_max_results(1),
        );
        assert_eq!(capped.len(), 1);
    }

    #[test]
    fn test_min_score_threshold() {
        let people = people();
        let strict = ScoreOptions::default().with_min_score(60.0);
        let results = fuzzy_search_multi_field(&people, "smith", &FIELDS, &strict);
        assert!(results.is_empty());
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let twins = vec![
            Person {
                name: "Sam Lee",
                specialty: "Urology",
                city: None,
            },
            Person {
                name: "Sam Lee",
                specialty: "Urology",
                city: None,
            },
        ];
        let results = fuzzy_search_multi_field(&twins, "sam", &FIELDS, &ScoreOptions::default());
        assert_eq!(results.len(), 2);
        assert!(std::ptr::eq(results[0].item, &twins[0]));
        assert!(std::ptr::eq(results[1].item, &twins[1]));
    }

    #[test]
    fn test_token_fallback_option() {
        let p = Person {
            name: "Jon Smyth",
            specialty: "Cardiology",
            city: None,
        };
        let plain = score_fields(&p, "john smith", &FIELDS, &ScoreOptions::default());
        assert!(plain.matched_fields.is_empty());

        let tokens = score_fields(
            &p,
            "john smith",
            &FIELDS,
            &ScoreOptions::default().with_token_fallback(true),
        );
        assert_eq!(tokens.matched_fields[0].field, "name");
        assert_eq!(tokens.matched_fields[0].score, 45.0);
    }

    #[test]
    fn test_field_score_lookup() {
        let people = people();
        let results =
            fuzzy_search_multi_field(&people, "cardiology", &FIELDS, &ScoreOptions::default());
        assert_eq!(results[0].field_score("specialty"), Some(100.0));
        assert_eq!(results[0].field_score("name"), None);
    }
}
