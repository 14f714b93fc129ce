//! End-to-end test infrastructure for the prestige workspace.
//!
//! Provides a shared TestHarness and profile fixtures for tests covering
//! the load-index-search and load-rank pipelines.

use std::path::PathBuf;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use prestige_search::{JsonProfileSource, SearchService, StaticProfileSource};
use prestige_types::{AwardEntry, PrestigeTier, ProfileRecord, SearchConfig};

/// Shared test harness for E2E tests.
///
/// Owns a temp directory holding profile JSON so file-backed sources can be
/// exercised end to end.
pub struct TestHarness {
    /// Keeps temp dir alive for the lifetime of the harness
    pub _temp_dir: tempfile::TempDir,
    /// Single-file profile collection
    pub profiles_file: PathBuf,
    /// Directory of per-profile files
    pub profiles_dir: PathBuf,
}

impl TestHarness {
    /// Create a new harness with empty profile locations.
    pub fn new() -> Self {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let profiles_file = temp_dir.path().join("profiles.json");
        let profiles_dir = temp_dir.path().join("profiles");
        std::fs::create_dir_all(&profiles_dir).expect("Failed to create profiles dir");

        Self {
            _temp_dir: temp_dir,
            profiles_file,
            profiles_dir,
        }
    }

    /// Write `records` as one JSON array file.
    pub fn write_profiles_file(&self, records: &[ProfileRecord]) {
        let json = serde_json::to_string_pretty(records).expect("Failed to serialize profiles");
        std::fs::write(&self.profiles_file, json).expect("Failed to write profiles file");
    }

    /// Write each record to `<id>.json` in the profiles directory.
    pub fn write_profiles_dir(&self, records: &[ProfileRecord]) {
        for record in records {
            let json = serde_json::to_string(record).expect("Failed to serialize profile");
            std::fs::write(self.profiles_dir.join(format!("{}.json", record.id)), json)
                .expect("Failed to write profile");
        }
    }

    /// Source over the single profiles file.
    pub fn file_source(&self) -> Arc<JsonProfileSource> {
        Arc::new(JsonProfileSource::new(&self.profiles_file))
    }

    /// Source over the profiles directory.
    pub fn dir_source(&self) -> Arc<JsonProfileSource> {
        Arc::new(JsonProfileSource::new(&self.profiles_dir))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// The three-profile set used by the search scenarios:
/// John Smith (Cardiology, Titan), Jon Smyth (Cardiology, Elite),
/// Alice Jones (Oncology, Master).
pub fn scenario_profiles() -> Vec<ProfileRecord> {
    vec![
        ProfileRecord::new("john-smith", "John Smith", "Cardiology")
            .with_tier(PrestigeTier::Titan),
        ProfileRecord::new("jon-smyth", "Jon Smyth", "Cardiology").with_tier(PrestigeTier::Elite),
        ProfileRecord::new("alice-jones", "Alice Jones", "Oncology")
            .with_tier(PrestigeTier::Master),
    ]
}

/// A richer directory: locations, roles, seniority, and honors.
pub fn sample_profiles() -> Vec<ProfileRecord> {
    vec![
        ProfileRecord::new("maria-lopez", "Maria Lopez", "Cardiothoracic Surgery")
            .with_tier(PrestigeTier::Titan)
            .with_h_index(92)
            .with_ranking_score(97.5)
            .with_location(Some("Houston"), "USA")
            .with_affiliation("Texas Heart Institute", Some("Chief of Surgery"))
            .with_award(AwardEntry::new("Lasker Award").with_year(2019)),
        ProfileRecord::new("raj-patel", "Raj Patel", "Neurology")
            .with_tier(PrestigeTier::Elite)
            .with_title("MD, PhD")
            .with_h_index(71)
            .with_location(Some("Mumbai"), "India")
            .with_award(AwardEntry::new("Padma Shri")),
        ProfileRecord::new("chen-wei", "Chen Wei", "Medical Oncology")
            .with_tier(PrestigeTier::Master)
            .with_h_index(55)
            .with_location(Some("Shanghai"), "China")
            .with_affiliation("Fudan University", Some("Research Scientist")),
        ProfileRecord::new("emma-brown", "Emma Brown", "Dermatology")
            .with_tier(PrestigeTier::Master)
            .with_h_index(30)
            .with_location(Some("London"), "UK")
            .with_award(AwardEntry::new("Knight Bachelor")),
        ProfileRecord::new("tom-nguyen", "Tom Nguyen", "Interventional Cardiology")
            .with_tier(PrestigeTier::Elite)
            .with_h_index(48)
            .with_location(Some("Boston"), "USA"),
        ProfileRecord::new("sara-cohen", "Sara Cohen", "Pediatric Surgery")
            .with_tier(PrestigeTier::Unranked)
            .with_h_index(12)
            .with_location(Some("Tel Aviv"), "Israel"),
    ]
}

/// Search service over an in-memory copy of `records`.
pub fn static_service(records: Vec<ProfileRecord>) -> (Arc<StaticProfileSource>, SearchService) {
    let source = Arc::new(StaticProfileSource::new(records));
    let service = SearchService::new(source.clone(), &SearchConfig::default());
    (source, service)
}

const FIRST_NAMES: &[&str] = &[
    "Ana", "Ben", "Chloe", "David", "Elena", "Farid", "Grace", "Hiro", "Ines", "Jonas", "Kavya",
    "Liam", "Mei", "Noah", "Olga", "Pedro",
];
const LAST_NAMES: &[&str] = &[
    "Abbott", "Bianchi", "Castro", "Dubois", "Eriksen", "Fischer", "Garcia", "Haddad", "Ito",
    "Jensen", "Kowalski", "Larsen", "Moreau", "Novak", "Okafor", "Petrov",
];
const SPECIALTIES: &[&str] = &[
    "Cardiology",
    "Neurosurgery",
    "Medical Oncology",
    "Dermatology",
    "Pediatrics",
    "Radiology",
    "Transplant Surgery",
    "Psychiatry",
];
const COUNTRIES: &[(&str, &str)] = &[
    ("Boston", "USA"),
    ("Toronto", "Canada"),
    ("Berlin", "Germany"),
    ("Tokyo", "Japan"),
    ("Sydney", "Australia"),
    ("Madrid", "Spain"),
];
const AWARDS: &[&str] = &[
    "Nobel Prize",
    "Gairdner Foundation International Award",
    "Padma Bhushan",
    "Presidential Medal of Freedom",
    "Fellow of the Royal Society",
    "Regional Teaching Award",
];

/// Deterministic synthetic profiles for volume tests and benchmarks.
pub fn synthetic_profiles(count: usize, seed: u64) -> Vec<ProfileRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let tiers = [
        PrestigeTier::Unranked,
        PrestigeTier::Master,
        PrestigeTier::Elite,
        PrestigeTier::Titan,
    ];

    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
            let specialty = SPECIALTIES[rng.random_range(0..SPECIALTIES.len())];
            let (city, country) = COUNTRIES[rng.random_range(0..COUNTRIES.len())];

            let mut record = ProfileRecord::new(
                format!("{}-{}-{}", first.to_lowercase(), last.to_lowercase(), i),
                format!("{} {}", first, last),
                specialty,
            )
            .with_tier(tiers[rng.random_range(0..tiers.len())])
            .with_h_index(rng.random_range(0..120))
            .with_location(Some(city), country);

            if rng.random_bool(0.2) {
                record = record.with_award(AwardEntry::new(
                    AWARDS[rng.random_range(0..AWARDS.len())],
                ));
            }
            record
        })
        .collect()
}
