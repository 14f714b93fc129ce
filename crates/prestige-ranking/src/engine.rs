//! Per-category ranking.
//!
//! [`rank`] is the pure core: group, stable-sort by score descending, and
//! number each group from 1. [`RankingEngine`] keeps the last loaded profile
//! snapshot and memoizes the table built from it, so the synchronous and the
//! refreshing entry points agree whenever they see the same snapshot.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use prestige_cache::{CacheKeys, CacheTtl, TtlCache};
use prestige_honors::{aggregate_honors, effective_tier};
use prestige_search::ProfileSource;
use prestige_types::{GroupBy, PrestigeTier, ProfileRecord, RankingConfig};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::RankingError;
use crate::specialty_groups::group_name;

/// Default `top` list length.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Rank of one profile within its group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankInfo {
    /// Profile id
    pub id: String,
    /// Display name
    pub full_name: String,
    /// 1-based position within the group
    pub rank: usize,
    /// Group size
    pub total_in_group: usize,
    /// Group key
    pub group: String,
    /// Score the group was sorted by
    pub score: f64,
    /// Tier after the honor floor
    pub tier: PrestigeTier,
    /// Seniority metric
    pub h_index: Option<u32>,
    /// Country
    pub country: String,
    /// City
    pub city: Option<String>,
}

/// Rank lookup keyed by profile id.
pub type RankTable = HashMap<String, RankInfo>;

/// Ranking score: `ranking_score` when set and nonzero, else h-index, else 0.
pub fn default_score(record: &ProfileRecord) -> f64 {
    record
        .ranking_score
        .filter(|s| *s != 0.0 && !s.is_nan())
        .or_else(|| record.h_index.map(f64::from))
        .unwrap_or(0.0)
}

/// [`default_score`] plus the deduplicated honor points.
pub fn score_with_honors(record: &ProfileRecord) -> f64 {
    default_score(record) + f64::from(aggregate_honors(&record.awards).total_points)
}

/// Rank `records` within the groups given by `group_of`.
///
/// Groups are sorted by `score_of` descending; the sort is stable, so equal
/// scores keep input order. A NaN score counts as 0. If an id repeats, the
/// later record's entry wins.
pub fn rank<S, G>(records: &[ProfileRecord], score_of: S, group_of: G) -> RankTable
where
    S: Fn(&ProfileRecord) -> f64,
    G: Fn(&ProfileRecord) -> String,
{
    let mut group_index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<(&ProfileRecord, f64)>)> = Vec::new();

    for record in records {
        let key = group_of(record);
        let slot = match group_index.get(&key) {
            Some(&slot) => slot,
            None => {
                group_index.insert(key.clone(), groups.len());
                groups.push((key, Vec::new()));
                groups.len() - 1
            }
        };
        let score = score_of(record);
        groups[slot]
            .1
            .push((record, if score.is_nan() { 0.0 } else { score }));
    }

    let mut table = RankTable::with_capacity(records.len());
    for (group, mut members) in groups {
        members.sort_by(|a, b| b.1.total_cmp(&a.1));
        let total_in_group = members.len();
        for (position, (record, score)) in members.into_iter().enumerate() {
            table.insert(
                record.id.clone(),
                RankInfo {
                    id: record.id.clone(),
                    full_name: record.full_name.clone(),
                    rank: position + 1,
                    total_in_group,
                    group: group.clone(),
                    score,
                    tier: effective_tier(record),
                    h_index: record.h_index,
                    country: record.geography.country.clone(),
                    city: record.geography.city.clone(),
                },
            );
        }
    }
    table
}

/// Computes group keys per the ranking configuration.
#[derive(Debug, Clone)]
pub struct Grouping {
    by: GroupBy,
    default_category: String,
}

impl Grouping {
    /// Grouping from configuration.
    pub fn from_config(config: &RankingConfig) -> Self {
        Self {
            by: config.group_by,
            default_category: config.default_category.clone(),
        }
    }

    /// Group key of a record. Blank specialties use the default category.
    pub fn key(&self, record: &ProfileRecord) -> String {
        let specialty = record.specialty.trim();
        let specialty = if specialty.is_empty() {
            self.default_category.as_str()
        } else {
            specialty
        };
        match self.by {
            GroupBy::Specialty => specialty.to_string(),
            GroupBy::SpecialtyGroup => group_name(specialty).to_string(),
        }
    }
}

/// Sort ranked entries for display: score descending, then id.
pub fn sort_for_display(entries: &mut [RankInfo]) {
    entries.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
}

#[derive(Clone)]
struct Snapshot {
    generation: u64,
    records: Arc<Vec<ProfileRecord>>,
}

/// Ranking over a refreshable profile snapshot.
pub struct RankingEngine {
    source: Arc<dyn ProfileSource>,
    grouping: Grouping,
    score_of: fn(&ProfileRecord) -> f64,
    snapshot: RwLock<Option<Snapshot>>,
    tables: TtlCache<Arc<RankTable>>,
}

impl RankingEngine {
    /// Create an engine with no snapshot loaded.
    pub fn new(source: Arc<dyn ProfileSource>, config: &RankingConfig) -> Self {
        Self {
            source,
            grouping: Grouping::from_config(config),
            score_of: default_score,
            snapshot: RwLock::new(None),
            tables: TtlCache::new(1, CacheTtl::HOUR),
        }
    }

    /// Replace the score function.
    pub fn with_score_fn(mut self, score_of: fn(&ProfileRecord) -> f64) -> Self {
        self.score_of = score_of;
        self
    }

    /// Install a snapshot without consulting the source.
    pub fn load(&self, records: Vec<ProfileRecord>) {
        let mut snapshot = self.snapshot.write();
        let generation = snapshot.as_ref().map_or(0, |s| s.generation + 1);
        *snapshot = Some(Snapshot {
            generation,
            records: Arc::new(records),
        });
    }

    /// Whether a snapshot has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.snapshot.read().is_some()
    }

    /// Table for the current snapshot. Empty when nothing was ever loaded.
    pub fn rank_cached(&self) -> Arc<RankTable> {
        let Some(snapshot) = self.snapshot.read().clone() else {
            return Arc::new(RankTable::new());
        };

        // Keyed by generation so a table never outlives its snapshot
        let key = format!("{}:{}", CacheKeys::rankings(), snapshot.generation);
        if let Some(table) = self.tables.get(&key) {
            return table;
        }

        let records = &snapshot.records;
        let table = Arc::new(rank(records, self.score_of, |r| self.grouping.key(r)));
        debug!(
            profiles = records.len(),
            generation = snapshot.generation,
            "Ranking table computed"
        );
        self.tables.set(key, Arc::clone(&table));
        table
    }

    /// Reload from the source, then rank.
    ///
    /// On source failure the last snapshot is ranked instead.
    pub async fn rank_refreshed(&self) -> Arc<RankTable> {
        if let Err(e) = self.refresh().await {
            warn!(
                source = self.source.name(),
                error = %e,
                "Ranking refresh failed, using last snapshot"
            );
        }
        self.rank_cached()
    }

    /// Reload the snapshot from the source.
    ///
    /// # Errors
    ///
    /// Returns [`RankingError::Source`] when loading fails; the previous
    /// snapshot stays in place.
    pub async fn refresh(&self) -> Result<usize, RankingError> {
        let records = self.source.load_profiles().await?;
        let count = records.len();
        self.load(records);
        info!(source = self.source.name(), profiles = count, "Ranking snapshot refreshed");
        Ok(count)
    }

    /// Rank of one profile.
    pub fn rank_of(&self, id: &str) -> Option<RankInfo> {
        self.rank_cached().get(id).cloned()
    }

    /// Highest-scored profiles, optionally limited to one group.
    pub fn top(&self, group: Option<&str>, limit: usize) -> Vec<RankInfo> {
        let table = self.rank_cached();
        let mut entries: Vec<RankInfo> = table
            .values()
            .filter(|info| group.map_or(true, |g| info.group == g))
            .cloned()
            .collect();
        sort_for_display(&mut entries);
        entries.truncate(limit);
        entries
    }
}
