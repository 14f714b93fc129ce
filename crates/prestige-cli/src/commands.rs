//! Command implementations.
//!
//! Every command returns a JSON value; `main` prints it to stdout. Logs go
//! to stderr so output stays machine-readable.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use prestige_honors::{aggregate_honors, classify_award, HonorClassification};
use prestige_ranking::RankingEngine;
use prestige_search::{JsonProfileSource, ProfileSource, SearchFilters, SearchService};
use prestige_types::{PrestigeError, Settings};

use crate::cli::Commands;

/// Load settings and apply CLI overrides (highest precedence).
pub fn load_settings(
    config_path: Option<&str>,
    profiles_override: Option<&str>,
    log_level_override: Option<&str>,
) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;
    if let Some(profiles) = profiles_override {
        settings.profiles_path = profiles.to_string();
    }
    if let Some(log_level) = log_level_override {
        settings.log_level = log_level.to_string();
    }
    Ok(settings)
}

/// Install the global subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

fn profile_source(settings: &Settings) -> Arc<dyn ProfileSource> {
    Arc::new(JsonProfileSource::new(settings.expanded_profiles_path()))
}

/// Run one command.
pub async fn execute(settings: &Settings, command: Commands) -> Result<Value> {
    match command {
        Commands::Search {
            query,
            category,
            country,
            role,
            limit,
            no_fuzzy,
        } => {
            let filters = SearchFilters {
                category,
                location_country: country,
                role,
            };
            handle_search(settings, &query, &filters, limit, !no_fuzzy).await
        }
        Commands::Rank { id } => handle_rank(settings, &id).await,
        Commands::Top { category, limit } => handle_top(settings, category.as_deref(), limit).await,
        Commands::Classify { awards } => handle_classify(&awards),
        Commands::Honors { awards } => handle_honors(&awards),
    }
}

/// Search profiles.
pub async fn handle_search(
    settings: &Settings,
    query: &str,
    filters: &SearchFilters,
    limit: Option<usize>,
    fuzzy: bool,
) -> Result<Value> {
    let service = SearchService::new(profile_source(settings), &settings.search);
    let indexed = service
        .rebuild()
        .await
        .with_context(|| format!("Failed to load profiles from {}", settings.profiles_path))?;
    info!(profiles = indexed, "Profiles indexed");

    let mut options = service.default_options().with_fuzzy(fuzzy);
    if let Some(limit) = limit {
        options = options.with_max_results(limit);
    }

    let results = service.search(query, filters, &options).await;
    let hits: Vec<_> = results.iter().map(|r| &r.item).collect();
    Ok(serde_json::to_value(hits)?)
}

async fn ranking_engine(settings: &Settings) -> Result<RankingEngine> {
    let engine = RankingEngine::new(profile_source(settings), &settings.ranking);
    engine
        .refresh()
        .await
        .with_context(|| format!("Failed to load profiles from {}", settings.profiles_path))?;
    Ok(engine)
}

/// Rank of one profile.
pub async fn handle_rank(settings: &Settings, id: &str) -> Result<Value> {
    let engine = ranking_engine(settings).await?;
    let info = engine
        .rank_of(id)
        .ok_or_else(|| PrestigeError::NotFound(id.to_string()))?;
    Ok(serde_json::to_value(info)?)
}

/// Highest-ranked profiles.
pub async fn handle_top(settings: &Settings, group: Option<&str>, limit: usize) -> Result<Value> {
    if limit == 0 {
        return Err(PrestigeError::InvalidInput("limit must be at least 1".to_string()).into());
    }
    let engine = ranking_engine(settings).await?;
    Ok(serde_json::to_value(engine.top(group, limit))?)
}

#[derive(Serialize)]
struct ClassifiedAward<'a> {
    award: &'a str,
    #[serde(flatten)]
    classification: HonorClassification,
}

/// Classify each award name.
pub fn handle_classify(awards: &[String]) -> Result<Value> {
    let classified: Vec<_> = awards
        .iter()
        .map(|award| ClassifiedAward {
            award,
            classification: classify_award(award),
        })
        .collect();
    Ok(serde_json::to_value(classified)?)
}

/// Aggregate honor points.
pub fn handle_honors(awards: &[String]) -> Result<Value> {
    let entries: Vec<_> = awards
        .iter()
        .map(prestige_types::AwardEntry::new)
        .collect();
    Ok(serde_json::to_value(aggregate_honors(&entries))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    const PROFILES: &str = r#"[
        {"id": "john-smith", "fullName": "John Smith", "specialty": "Cardiology", "tier": "TITAN", "hIndex": 80,
         "geography": {"country": "USA", "city": "Boston"}},
        {"id": "jon-smyth", "fullName": "Jon Smyth", "specialty": "Cardiology", "tier": "ELITE", "hIndex": 40,
         "geography": {"country": "UK"}},
        {"id": "alice-jones", "fullName": "Alice Jones", "specialty": "Oncology", "tier": "MASTER", "hIndex": 20,
         "geography": {"country": "USA"}}
    ]"#;

    fn settings_for(path: &Path) -> Settings {
        Settings {
            profiles_path: path.to_string_lossy().to_string(),
            ..Settings::default()
        }
    }

    fn write_profiles(dir: &TempDir) -> Settings {
        let path = dir.path().join("profiles.json");
        std::fs::write(&path, PROFILES).unwrap();
        settings_for(&path)
    }

    #[tokio::test]
    async fn test_search_command() {
        let dir = TempDir::new().unwrap();
        let settings = write_profiles(&dir);

        let value = execute(
            &settings,
            Commands::Search {
                query: "john smith".to_string(),
                category: None,
                country: None,
                role: None,
                limit: None,
                no_fuzzy: false,
            },
        )
        .await
        .unwrap();

        let hits = value.as_array().unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0]["id"], "john-smith");
        assert_eq!(hits[1]["id"], "jon-smyth");
    }

    #[tokio::test]
    async fn test_search_country_filter() {
        let dir = TempDir::new().unwrap();
        let settings = write_profiles(&dir);
        let filters = SearchFilters::default().with_country("usa");

        let value = handle_search(&settings, "", &filters, Some(1), true).await.unwrap();
        let hits = value.as_array().unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["id"], "john-smith");
    }

    #[tokio::test]
    async fn test_search_missing_profiles_fails() {
        let dir = TempDir::new().unwrap();
        let settings = settings_for(&dir.path().join("missing.json"));
        let err = handle_search(&settings, "x", &SearchFilters::default(), None, true)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load profiles"));
    }

    #[tokio::test]
    async fn test_rank_and_top() {
        let dir = TempDir::new().unwrap();
        let settings = write_profiles(&dir);

        let rank = handle_rank(&settings, "jon-smyth").await.unwrap();
        assert_eq!(rank["rank"], 2);
        assert_eq!(rank["totalInGroup"], 2);
        assert_eq!(rank["group"], "Cardiology");

        let err = handle_rank(&settings, "nobody").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PrestigeError>(),
            Some(PrestigeError::NotFound(id)) if id == "nobody"
        ));
        assert_eq!(err.to_string(), "Not found: nobody");

        let top = handle_top(&settings, Some("Cardiology"), 10).await.unwrap();
        let ids: Vec<_> = top.as_array().unwrap().iter().map(|v| v["id"].clone()).collect();
        assert_eq!(ids, vec!["john-smith", "jon-smyth"]);

        let err = handle_top(&settings, None, 0).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PrestigeError>(),
            Some(PrestigeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_classify_command() {
        let value = handle_classify(&["Nobel Prize".to_string(), "Bake-off Winner".to_string()])
            .unwrap();
        assert_eq!(value[0]["award"], "Nobel Prize");
        assert_eq!(value[0]["tier"], "GLOBAL_LANDMARK");
        assert_eq!(value[0]["points"], 100);
        assert_eq!(value[1]["tier"], "UNCLASSIFIED");
        assert_eq!(value[1]["points"], 0);
    }

    #[test]
    fn test_honors_command() {
        let value = handle_honors(&[
            "Nobel Prize".to_string(),
            "Nobel Prize in Physiology or Medicine".to_string(),
            "Padma Shri".to_string(),
        ])
        .unwrap();
        assert_eq!(value["totalPoints"], 175);
        assert_eq!(value["highestTier"], "GLOBAL_LANDMARK");
        assert_eq!(value["floorProtection"], true);
    }
}
