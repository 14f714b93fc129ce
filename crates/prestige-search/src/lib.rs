//! # prestige-search
//!
//! Typo-tolerant profile search.
//!
//! ## Layers
//! - [`levenshtein`]: unit-cost edit distance
//! - [`fuzzy`]: strategy ladder scoring one text against one query (0-100)
//! - [`scorer`]: weighted multi-field scoring over any record type
//! - [`index`]: denormalized [`SearchableRecord`]s behind an atomically
//!   swapped snapshot
//! - [`relevance`]: name ladder plus specialty, location, tier, and
//!   seniority boosts
//! - [`service`]: the cached, filtered search entry point
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use prestige_search::{JsonProfileSource, SearchFilters, SearchService};
//! use prestige_types::SearchConfig;
//!
//! # async fn run() {
//! let source = Arc::new(JsonProfileSource::new("profiles.json"));
//! let service = SearchService::new(source, &SearchConfig::default());
//! let results = service
//!     .search_default("jane smith", &SearchFilters::default().with_country("USA"))
//!     .await;
//! for hit in results.iter() {
//!     println!("{} {}", hit.item.full_name, hit.item.relevance_score);
//! }
//! # }
//! ```

pub mod error;
pub mod fuzzy;
pub mod index;
pub mod levenshtein;
pub mod relevance;
pub mod scorer;
pub mod service;
pub mod source;
pub mod suggest;

pub use error::{SearchError, SourceError};
pub use fuzzy::{fuzzy_match, fuzzy_match_tokens, highlight_spans, FuzzyMatch, MatchStrategy};
pub use index::{build_index, IndexSnapshot, SearchIndex, SearchableRecord};
pub use levenshtein::levenshtein;
pub use relevance::{browse_score, relevance_score};
pub use scorer::{
    fuzzy_search_multi_field, score_fields, FieldMatch, FieldScores, ScoreOptions, ScoredResult,
    WeightedField,
};
pub use service::{SearchFilters, SearchHit, SearchOptions, SearchResults, SearchService};
pub use source::{JsonProfileSource, ProfileSource, StaticProfileSource};
pub use suggest::search_suggestions;
