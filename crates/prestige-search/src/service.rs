//! Search orchestration.
//!
//! [`SearchService`] owns the index snapshot and the result cache. One
//! `search` call runs:
//!
//! 1. Cache lookup on the normalized query plus every active filter
//! 2. Index freshness check (rebuild when stale; stale data on failure)
//! 3. Filtering by country, category, and role
//! 4. Matching: browse mode for queries under two chars, otherwise the
//!    `searchText` substring screen with a fuzzy name/specialty fallback
//! 5. Relevance sort, truncation, cache store

use std::sync::Arc;
use std::time::{Duration, Instant};

use prestige_cache::{CacheKeys, CacheStats, Clock, TtlCache};
use prestige_types::{PrestigeTier, Role, SearchConfig};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::fuzzy::{fuzzy_match, MatchStrategy};
use crate::index::{SearchIndex, SearchableRecord};
use crate::relevance::{
    browse_score, relevance_score, NAME_FUZZY_MIN_SCORE, NAME_FUZZY_PENALTY,
    SPECIALTY_FUZZY_MIN_SCORE, SPECIALTY_FUZZY_PENALTY,
};
use crate::scorer::{score_fields, FieldMatch, ScoreOptions, ScoredResult, WeightedField};
use crate::source::ProfileSource;

/// Queries shorter than this (in chars) browse instead of matching.
pub const MIN_QUERY_CHARS: usize = 2;

/// Queries shorter than this (in chars) never take the fuzzy path.
pub const MIN_FUZZY_QUERY_CHARS: usize = 3;

const NAME_FIELD: [WeightedField<SearchableRecord>; 1] =
    [WeightedField::new("fullName", 1.0, record_name)];

const SPECIALTY_FIELD: [WeightedField<SearchableRecord>; 1] =
    [WeightedField::new("specialty", 1.0, record_specialty)];

fn record_name(r: &SearchableRecord) -> Option<&str> {
    Some(&r.full_name)
}

fn record_specialty(r: &SearchableRecord) -> Option<&str> {
    Some(&r.specialty)
}

fn record_sub_specialty(r: &SearchableRecord) -> Option<&str> {
    r.sub_specialty.as_deref()
}

fn record_city(r: &SearchableRecord) -> Option<&str> {
    r.city.as_deref()
}

fn record_country(r: &SearchableRecord) -> Option<&str> {
    Some(&r.country)
}

/// Fields reported as matched on a substring hit, in display order.
const HIGHLIGHT_FIELDS: [WeightedField<SearchableRecord>; 5] = [
    WeightedField::new("fullName", 1.0, record_name),
    WeightedField::new("specialty", 1.0, record_specialty),
    WeightedField::new("subSpecialty", 1.0, record_sub_specialty),
    WeightedField::new("city", 1.0, record_city),
    WeightedField::new("country", 1.0, record_country),
];

/// Search filters. Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Exact specialty, case-insensitive
    pub category: Option<String>,
    /// Exact country, case-insensitive
    pub location_country: Option<String>,
    /// `surgeon`, `researcher`, or `physician`; anything else is ignored
    pub role: Option<String>,
}

impl SearchFilters {
    /// Filter by specialty.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.location_country = Some(country.into());
        self
    }

    /// Filter by role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    fn normalized(&self) -> NormalizedFilters {
        NormalizedFilters {
            category: normalize(self.category.as_deref()),
            country: normalize(self.location_country.as_deref()),
            role: self.role.as_deref().and_then(Role::parse_filter),
        }
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

struct NormalizedFilters {
    category: Option<String>,
    country: Option<String>,
    role: Option<Role>,
}

impl NormalizedFilters {
    fn accepts(&self, record: &SearchableRecord) -> bool {
        if let Some(country) = &self.country {
            if &record.country_lower != country {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &record.specialty_lower != category {
                return false;
            }
        }
        self.role.map_or(true, |role| record.has_role(role))
    }

    fn role_label(&self) -> Option<&'static str> {
        self.role.map(|r| match r {
            Role::Surgeon => "surgeon",
            Role::Researcher => "researcher",
            Role::Physician => "physician",
        })
    }
}

/// Per-call search options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Result cap
    pub max_results: usize,
    /// Typo-tolerant fallback for queries without a substring hit
    pub fuzzy_enabled: bool,
    /// Raises the name and specialty fuzzy gates when above them
    pub min_score: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl SearchOptions {
    /// Options from the configured defaults.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            max_results: config.max_results,
            fuzzy_enabled: config.fuzzy_enabled,
            min_score: config.min_score,
        }
    }

    /// Set the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Enable or disable fuzzy matching.
    pub fn with_fuzzy(mut self, enabled: bool) -> Self {
        self.fuzzy_enabled = enabled;
        self
    }

    /// Set the minimum fuzzy score.
    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }
}

/// Result payload for one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Profile id
    pub id: String,
    /// Display name
    pub full_name: String,
    /// Specialty
    pub specialty: String,
    /// Sub-specialty
    pub sub_specialty: Option<String>,
    /// Tier after floor protection
    pub tier: PrestigeTier,
    /// City
    pub city: Option<String>,
    /// Country
    pub country: String,
    /// Role label
    pub role: &'static str,
    /// Seniority metric
    pub h_index: u32,
    /// Portrait URL
    pub portrait_url: Option<String>,
    /// Relevance rounded to an integer
    pub relevance_score: i64,
}

impl SearchHit {
    fn new(record: &SearchableRecord, score: f64) -> Self {
        Self {
            id: record.id.clone(),
            full_name: record.full_name.clone(),
            specialty: record.specialty.clone(),
            sub_specialty: record.sub_specialty.clone(),
            tier: record.tier,
            city: record.city.clone(),
            country: record.country.clone(),
            role: record.role().label(),
            h_index: record.seniority,
            portrait_url: record.portrait_url.clone(),
            relevance_score: score.round() as i64,
        }
    }
}

/// Search results as stored in the cache.
pub type SearchResults = Arc<Vec<ScoredResult<SearchHit>>>;

/// Profile search over a refreshable index.
pub struct SearchService {
    source: Arc<dyn ProfileSource>,
    index: SearchIndex,
    cache: TtlCache<SearchResults>,
    defaults: SearchOptions,
}

impl SearchService {
    /// Create a service over `source` with a cold index.
    pub fn new(source: Arc<dyn ProfileSource>, config: &SearchConfig) -> Self {
        Self {
            source,
            index: SearchIndex::new(Duration::from_secs(config.index_ttl_secs)),
            cache: TtlCache::new(
                config.result_cache_max_entries,
                Duration::from_secs(config.result_cache_ttl_secs),
            ),
            defaults: SearchOptions::from_config(config),
        }
    }

    /// Replace the time source for index age and cache expiry.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.index = self.index.with_clock(Arc::clone(&clock));
        self.cache = self.cache.with_clock(clock);
        self
    }

    /// Options built from the service configuration.
    pub fn default_options(&self) -> SearchOptions {
        self.defaults
    }

    /// Search with the configured default options.
    pub async fn search_default(&self, query: &str, filters: &SearchFilters) -> SearchResults {
        self.search(query, filters, &self.defaults).await
    }

    /// Run a search.
    ///
    /// Never fails: a rebuild failure serves the previous snapshot, and a
    /// blank or one-char query browses the filtered index.
    pub async fn search(
        &self,
        query: &str,
        filters: &SearchFilters,
        options: &SearchOptions,
    ) -> SearchResults {
        let query = query.trim();
        let filters = filters.normalized();
        let key = cache_key(query, &filters, options);

        if let Some(cached) = self.cache.get(&key) {
            debug!(key = %key, results = cached.len(), "Search cache hit");
            return cached;
        }

        let started = Instant::now();
        let snapshot = self.index.ensure_fresh(self.source.as_ref()).await;

        let mut results: Vec<ScoredResult<SearchHit>> = snapshot
            .records()
            .iter()
            .filter(|r| filters.accepts(r))
            .filter_map(|r| score_record(r, query, options))
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(options.max_results);
        let results = Arc::new(results);

        debug!(
            query = %query,
            results = results.len(),
            indexed = snapshot.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Search complete"
        );

        // A failed first build yields an empty list that must not outlive
        // the outage.
        if !snapshot.is_cold() {
            self.cache.set(key, Arc::clone(&results));
        }
        results
    }

    /// Force an index rebuild and drop cached results.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::IndexBuildFailed`] when the source fails; the
    /// previous snapshot and cache stay in place.
    pub async fn rebuild(&self) -> Result<usize, SearchError> {
        let snapshot = self.index.rebuild(self.source.as_ref()).await?;
        self.invalidate_cache();
        Ok(snapshot.len())
    }

    /// Records in the current snapshot.
    pub fn index_len(&self) -> usize {
        self.index.snapshot().len()
    }

    /// Result cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop every cached result list. Returns the number dropped.
    pub fn invalidate_cache(&self) -> usize {
        match self.cache.invalidate_pattern(CacheKeys::SEARCH_PATTERN) {
            Ok(removed) => removed,
            Err(e) => {
                warn!(error = %e, "Search cache invalidation failed, clearing");
                let removed = self.cache.len();
                self.cache.clear();
                removed
            }
        }
    }
}

fn cache_key(query: &str, filters: &NormalizedFilters, options: &SearchOptions) -> String {
    format!(
        "{}:{}:{}",
        CacheKeys::search_key(
            query,
            filters.country.as_deref(),
            filters.role_label(),
            filters.category.as_deref(),
            options.fuzzy_enabled,
        ),
        options.max_results,
        options.min_score
    )
}

fn score_record(
    record: &SearchableRecord,
    query: &str,
    options: &SearchOptions,
) -> Option<ScoredResult<SearchHit>> {
    let query_chars = query.chars().count();

    if query_chars < MIN_QUERY_CHARS {
        return Some(scored(record, browse_score(record), Vec::new()));
    }

    let query_lower = query.to_lowercase();
    if record.search_text.contains(&query_lower) {
        return Some(scored(
            record,
            relevance_score(record, query),
            substring_fields(record, query),
        ));
    }

    if !options.fuzzy_enabled || query_chars < MIN_FUZZY_QUERY_CHARS {
        return None;
    }

    let field_options = ScoreOptions::default().with_token_fallback(true);

    let fuzzy_gates = [
        (&NAME_FIELD, NAME_FUZZY_MIN_SCORE, NAME_FUZZY_PENALTY),
        (&SPECIALTY_FIELD, SPECIALTY_FUZZY_MIN_SCORE, SPECIALTY_FUZZY_PENALTY),
    ];
    for (field, gate, penalty) in fuzzy_gates {
        let scores = score_fields(record, &query_lower, field, &field_options);
        if scores.score >= gate.max(options.min_score) {
            let score = relevance_score(record, query) * penalty;
            return Some(scored(record, score, scores.matched_fields));
        }
    }
    None
}

fn substring_fields(record: &SearchableRecord, query: &str) -> Vec<FieldMatch> {
    HIGHLIGHT_FIELDS
        .iter()
        .filter_map(|field| {
            let value = (field.extract)(record)?;
            let m = fuzzy_match(value, query);
            let literal = matches!(
                m.strategy,
                Some(MatchStrategy::Exact | MatchStrategy::Prefix | MatchStrategy::Substring)
            );
            literal.then(|| FieldMatch {
                field: field.key,
                score: m.score,
                matched_span: m.matched_span,
            })
        })
        .collect()
}

fn scored(
    record: &SearchableRecord,
    score: f64,
    matched_fields: Vec<FieldMatch>,
) -> ScoredResult<SearchHit> {
    ScoredResult {
        item: SearchHit::new(record, score),
        score,
        matched_fields,
    }
}
