//! Denormalized search index and its snapshot lifecycle.
//!
//! [`build_index`] is a pure transform from profile records to
//! [`SearchableRecord`]s. [`SearchIndex`] owns the live snapshot:
//!
//! - Readers clone an `Arc<IndexSnapshot>` under a read lock held only for
//!   the clone, so a query never observes a half-built index.
//! - A rebuild loads and builds the new snapshot without holding the lock,
//!   then swaps the `Arc` in a single write.
//! - A rebuild gate lets one rebuild run at a time. A query that finds a
//!   rebuild already running serves the current snapshot instead of waiting.
//! - A failed rebuild leaves the previous snapshot in place.

use std::cmp::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use prestige_cache::{Clock, SystemClock};
use prestige_honors::effective_tier;
use prestige_types::{PrestigeTier, ProfileRecord, Role};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::SearchError;
use crate::source::ProfileSource;

/// Default index lifetime before a rebuild is due.
pub const DEFAULT_INDEX_TTL: Duration = Duration::from_secs(300);

const SURGEON_KEYWORDS: &[&str] = &["surgery", "surgeon", "transplant"];
const RESEARCHER_ROLE_KEYWORDS: &[&str] = &["research", "scientist"];
const RESEARCHER_TITLE_MARKER: &str = "PhD";

/// One profile projected for matching.
///
/// Every `*_lower` field is lowercased at build time so queries never
/// re-normalize case.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableRecord {
    /// Profile id
    pub id: String,
    /// Display name, original casing
    pub full_name: String,
    /// Specialty, original casing
    pub specialty: String,
    /// Sub-specialty, original casing
    pub sub_specialty: Option<String>,
    /// City, original casing
    pub city: Option<String>,
    /// Country, original casing
    pub country: String,
    /// Portrait URL
    pub portrait_url: Option<String>,

    /// Lowercased full name
    pub name_lower: String,
    /// Lowercased name split on whitespace
    pub name_parts: Vec<String>,
    /// First name part, lowercased
    pub first_name_lower: String,
    /// Last name part, lowercased
    pub last_name_lower: String,
    /// Lowercased specialty
    pub specialty_lower: String,
    /// Lowercased sub-specialty
    pub sub_specialty_lower: Option<String>,
    /// Lowercased city
    pub city_lower: Option<String>,
    /// Lowercased country
    pub country_lower: String,
    /// Name, specialty, sub-specialty, city, and country, lowercased and
    /// space-joined, for the cheap first-pass substring screen
    pub search_text: String,

    /// Tier after honor floor protection
    pub tier: PrestigeTier,
    /// Seniority metric (h-index, 0 when absent)
    pub seniority: u32,
    /// Specialty names a surgical discipline
    pub is_surgeon: bool,
    /// PhD title or research affiliation
    pub is_researcher: bool,
}

impl SearchableRecord {
    /// Project one profile.
    pub fn from_profile(profile: &ProfileRecord) -> Self {
        let name_lower = profile.full_name.to_lowercase();
        let name_parts: Vec<String> = name_lower.split_whitespace().map(str::to_string).collect();
        let first_name_lower = name_parts.first().cloned().unwrap_or_default();
        let last_name_lower = name_parts.last().cloned().unwrap_or_default();

        let specialty_lower = profile.specialty.to_lowercase();
        let sub_specialty_lower = profile.sub_specialty.as_deref().map(str::to_lowercase);
        let city_lower = profile.geography.city.as_deref().map(str::to_lowercase);
        let country_lower = profile.geography.country.to_lowercase();

        let search_text = format!(
            "{} {} {} {} {}",
            name_lower,
            specialty_lower,
            sub_specialty_lower.as_deref().unwrap_or_default(),
            city_lower.as_deref().unwrap_or_default(),
            country_lower
        );

        let is_surgeon = SURGEON_KEYWORDS
            .iter()
            .any(|kw| specialty_lower.contains(kw));
        let is_researcher = profile
            .title
            .as_deref()
            .is_some_and(|t| t.contains(RESEARCHER_TITLE_MARKER))
            || profile.affiliations.iter().any(|a| {
                a.role.as_deref().is_some_and(|role| {
                    let role = role.to_lowercase();
                    RESEARCHER_ROLE_KEYWORDS.iter().any(|kw| role.contains(kw))
                })
            });

        Self {
            id: profile.id.clone(),
            full_name: profile.full_name.clone(),
            specialty: profile.specialty.clone(),
            sub_specialty: profile.sub_specialty.clone(),
            city: profile.geography.city.clone(),
            country: profile.geography.country.clone(),
            portrait_url: profile.portrait_url.clone(),
            name_lower,
            name_parts,
            first_name_lower,
            last_name_lower,
            specialty_lower,
            sub_specialty_lower,
            city_lower,
            country_lower,
            search_text,
            tier: effective_tier(profile),
            seniority: profile.seniority(),
            is_surgeon,
            is_researcher,
        }
    }

    /// Derived role.
    pub fn role(&self) -> Role {
        Role::from_flags(self.is_surgeon, self.is_researcher)
    }

    /// Whether the record satisfies a role filter.
    pub fn has_role(&self, role: Role) -> bool {
        match role {
            Role::Surgeon => self.is_surgeon,
            Role::Researcher => self.is_researcher,
            Role::Physician => !self.is_surgeon && !self.is_researcher,
        }
    }
}

/// Build the index: project every record, then stable-sort by tier
/// descending and seniority descending.
pub fn build_index(records: &[ProfileRecord]) -> Vec<SearchableRecord> {
    let mut index: Vec<SearchableRecord> =
        records.iter().map(SearchableRecord::from_profile).collect();
    index.sort_by(compare_tier_seniority);
    index
}

fn compare_tier_seniority(a: &SearchableRecord, b: &SearchableRecord) -> Ordering {
    b.tier
        .cmp(&a.tier)
        .then_with(|| b.seniority.cmp(&a.seniority))
}

/// Immutable built index.
#[derive(Debug, Clone, Default)]
pub struct IndexSnapshot {
    records: Vec<SearchableRecord>,
    built_at: Option<DateTime<Utc>>,
}

impl IndexSnapshot {
    /// Snapshot of already-built records.
    pub fn new(records: Vec<SearchableRecord>, built_at: DateTime<Utc>) -> Self {
        Self {
            records,
            built_at: Some(built_at),
        }
    }

    /// Records in tier/seniority order.
    pub fn records(&self) -> &[SearchableRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When the snapshot was built; `None` before the first build.
    pub fn built_at(&self) -> Option<DateTime<Utc>> {
        self.built_at
    }

    /// Whether no build has ever succeeded.
    pub fn is_cold(&self) -> bool {
        self.built_at.is_none()
    }

    /// Whether the snapshot is older than `ttl` at `now`. Cold snapshots are
    /// always stale.
    pub fn is_stale(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        match self.built_at {
            None => true,
            Some(built_at) => match now.signed_duration_since(built_at).to_std() {
                Ok(age) => age >= ttl,
                // Clock moved backwards
                Err(_) => false,
            },
        }
    }
}

/// Holder of the live index snapshot.
#[derive(Debug)]
pub struct SearchIndex {
    current: RwLock<Arc<IndexSnapshot>>,
    rebuild_gate: tokio::sync::Mutex<()>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_TTL)
    }
}

impl SearchIndex {
    /// Create a cold index with the given lifetime.
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: RwLock::new(Arc::new(IndexSnapshot::default())),
            rebuild_gate: tokio::sync::Mutex::new(()),
            ttl,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<IndexSnapshot> {
        Arc::clone(&*self.current.read())
    }

    /// Whether the current snapshot is due for a rebuild.
    pub fn is_stale(&self) -> bool {
        self.snapshot().is_stale(self.clock.now(), self.ttl)
    }

    /// Return a fresh snapshot, rebuilding if the current one is stale.
    ///
    /// Never fails. A cold index waits for an in-flight rebuild; a stale one
    /// is served as-is when another task is already rebuilding. Rebuild
    /// failures are logged and the previous snapshot is returned.
    pub async fn ensure_fresh(&self, source: &dyn ProfileSource) -> Arc<IndexSnapshot> {
        let current = self.snapshot();
        if !current.is_stale(self.clock.now(), self.ttl) {
            return current;
        }

        let _gate = if current.is_cold() {
            self.rebuild_gate.lock().await
        } else {
            match self.rebuild_gate.try_lock() {
                Ok(gate) => gate,
                Err(_) => return current,
            }
        };

        // Another task may have finished a rebuild while we waited.
        let current = self.snapshot();
        if !current.is_stale(self.clock.now(), self.ttl) {
            return current;
        }

        match self.rebuild_locked(source).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(
                    source = source.name(),
                    error = %e,
                    stale_records = current.len(),
                    "Index rebuild failed, serving previous snapshot"
                );
                current
            }
        }
    }

    /// Rebuild now, regardless of age.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::IndexBuildFailed`] when the source fails. The
    /// previous snapshot stays live.
    pub async fn rebuild(&self, source: &dyn ProfileSource) -> Result<Arc<IndexSnapshot>, SearchError> {
        let _gate = self.rebuild_gate.lock().await;
        self.rebuild_locked(source).await
    }

    async fn rebuild_locked(
        &self,
        source: &dyn ProfileSource,
    ) -> Result<Arc<IndexSnapshot>, SearchError> {
        info!(source = source.name(), "Rebuilding search index");
        let started = Instant::now();

        let profiles = source.load_profiles().await?;
        let snapshot = Arc::new(IndexSnapshot::new(build_index(&profiles), self.clock.now()));
        *self.current.write() = Arc::clone(&snapshot);

        info!(
            records = snapshot.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Search index rebuilt"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticProfileSource;
    use prestige_cache::ManualClock;
    use prestige_types::AwardEntry;

    fn profiles() -> Vec<ProfileRecord> {
        vec![
            ProfileRecord::new("m", "Mia Park", "Dermatology")
                .with_tier(PrestigeTier::Master)
                .with_h_index(40),
            ProfileRecord::new("t1", "Tom Reyes", "Cardiothoracic Surgery")
                .with_tier(PrestigeTier::Titan)
                .with_h_index(20)
                .with_location(Some("Houston"), "USA"),
            ProfileRecord::new("t2", "Ana Ruiz", "Transplant Hepatology")
                .with_tier(PrestigeTier::Titan)
                .with_h_index(90),
            ProfileRecord::new("e", "Raj Patel", "Neurology")
                .with_tier(PrestigeTier::Elite)
                .with_title("MD, PhD")
                .with_h_index(90),
        ]
    }

    #[test]
    fn test_projection_lowercases_and_splits() {
        let record = SearchableRecord::from_profile(
            &ProfileRecord::new("x", "Maria  Elena LOPEZ", "Pediatric Surgery")
                .with_sub_specialty("Neonatal")
                .with_location(Some("Madrid"), "Spain"),
        );
        assert_eq!(record.name_lower, "maria  elena lopez");
        assert_eq!(record.name_parts, vec!["maria", "elena", "lopez"]);
        assert_eq!(record.first_name_lower, "maria");
        assert_eq!(record.last_name_lower, "lopez");
        assert_eq!(
            record.search_text,
            "maria  elena lopez pediatric surgery neonatal madrid spain"
        );
        assert!(record.is_surgeon);
        assert_eq!(record.role(), Role::Surgeon);
    }

    #[test]
    fn test_search_text_with_missing_optionals() {
        let record = SearchableRecord::from_profile(
            &ProfileRecord::new("x", "Li Wei", "Oncology").with_location(None, "China"),
        );
        assert_eq!(record.search_text, "li wei oncology   china");
    }

    #[test]
    fn test_researcher_detection() {
        let phd = SearchableRecord::from_profile(
            &ProfileRecord::new("a", "A", "Neurology").with_title("MD, PhD"),
        );
        assert!(phd.is_researcher);

        let scientist = SearchableRecord::from_profile(
            &ProfileRecord::new("b", "B", "Neurology")
                .with_affiliation("Broad Institute", Some("Senior Scientist")),
        );
        assert!(scientist.is_researcher);
        assert!(scientist.has_role(Role::Researcher));
        assert!(!scientist.has_role(Role::Physician));

        let clinician = SearchableRecord::from_profile(
            &ProfileRecord::new("c", "C", "Neurology").with_affiliation("Mayo", Some("Chair")),
        );
        assert!(!clinician.is_researcher);
        assert!(clinician.has_role(Role::Physician));
    }

    #[test]
    fn test_build_sorts_by_tier_then_seniority() {
        let index = build_index(&profiles());
        let ids: Vec<_> = index.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t1", "e", "m"]);
    }

    #[test]
    fn test_build_applies_honor_floor() {
        let records = vec![ProfileRecord::new("k", "Sir K", "Surgery")
            .with_tier(PrestigeTier::Master)
            .with_award(AwardEntry::new("Knight Bachelor"))];
        let index = build_index(&records);
        assert_eq!(index[0].tier, PrestigeTier::Elite);
    }

    #[test]
    fn test_build_is_idempotent() {
        let records = profiles();
        assert_eq!(build_index(&records), build_index(&records));
    }

    #[test]
    fn test_snapshot_staleness() {
        let now = Utc::now();
        assert!(IndexSnapshot::default().is_stale(now, DEFAULT_INDEX_TTL));

        let snapshot = IndexSnapshot::new(vec![], now);
        assert!(!snapshot.is_stale(now + chrono::Duration::seconds(299), DEFAULT_INDEX_TTL));
        assert!(snapshot.is_stale(now + chrono::Duration::seconds(300), DEFAULT_INDEX_TTL));
    }

    #[tokio::test]
    async fn test_ensure_fresh_builds_cold_index() {
        let source = StaticProfileSource::new(profiles());
        let index = SearchIndex::default();
        assert!(index.snapshot().is_cold());

        let snapshot = index.ensure_fresh(&source).await;
        assert_eq!(snapshot.len(), 4);
        assert_eq!(source.load_count(), 1);

        // Fresh: no reload
        index.ensure_fresh(&source).await;
        assert_eq!(source.load_count(), 1);
    }

    #[tokio::test]
    async fn test_ensure_fresh_rebuilds_after_ttl() {
        let clock = Arc::new(ManualClock::starting_now());
        let source = StaticProfileSource::new(profiles());
        let index = SearchIndex::new(Duration::from_secs(300)).with_clock(clock.clone());

        index.ensure_fresh(&source).await;
        source.replace(profiles().into_iter().take(1).collect());

        clock.advance(Duration::from_secs(299));
        assert_eq!(index.ensure_fresh(&source).await.len(), 4);

        clock.advance(Duration::from_secs(1));
        assert_eq!(index.ensure_fresh(&source).await.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_rebuild_keeps_previous_snapshot() {
        let clock = Arc::new(ManualClock::starting_now());
        let source = StaticProfileSource::new(profiles());
        let index = SearchIndex::new(Duration::from_secs(60)).with_clock(clock.clone());
        index.ensure_fresh(&source).await;

        source.set_failing(true);
        clock.advance(Duration::from_secs(120));

        let snapshot = index.ensure_fresh(&source).await;
        assert_eq!(snapshot.len(), 4);
        assert!(index.is_stale());

        let err = index.rebuild(&source).await.unwrap_err();
        assert!(matches!(err, SearchError::IndexBuildFailed(_)));
        assert_eq!(index.snapshot().len(), 4);
    }

    #[tokio::test]
    async fn test_cold_failure_serves_empty() {
        let source = StaticProfileSource::new(profiles());
        source.set_failing(true);
        let index = SearchIndex::default();

        let snapshot = index.ensure_fresh(&source).await;
        assert!(snapshot.is_empty());
        assert!(snapshot.is_cold());
    }

    #[tokio::test]
    async fn test_stale_index_served_while_rebuild_in_flight() {
        let clock = Arc::new(ManualClock::starting_now());
        let source = StaticProfileSource::new(profiles());
        let index = SearchIndex::new(Duration::from_secs(60)).with_clock(clock.clone());
        index.ensure_fresh(&source).await;
        clock.advance(Duration::from_secs(61));

        // Hold the gate as an in-flight rebuild would
        let _gate = index.rebuild_gate.lock().await;
        let snapshot = index.ensure_fresh(&source).await;
        assert_eq!(snapshot.len(), 4);
        assert_eq!(source.load_count(), 1);
    }
}
