//! Configuration loading for the prestige workspace.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at `~/.config/prestige/config.toml`.

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::PrestigeError;

/// Search service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Age after which the search index is rebuilt (seconds).
    #[serde(default = "default_index_ttl_secs")]
    pub index_ttl_secs: u64,

    /// Lifetime of a cached result list (seconds).
    #[serde(default = "default_result_cache_ttl_secs")]
    pub result_cache_ttl_secs: u64,

    /// Maximum cached result lists before insertion-order eviction.
    #[serde(default = "default_result_cache_max_entries")]
    pub result_cache_max_entries: usize,

    /// Default result limit.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Typo-tolerant matching on by default.
    #[serde(default = "default_true")]
    pub fuzzy_enabled: bool,

    /// Default minimum multi-field score (0-100).
    #[serde(default = "default_min_score")]
    pub min_score: f64,
}

fn default_index_ttl_secs() -> u64 {
    300
}

fn default_result_cache_ttl_secs() -> u64 {
    60
}

fn default_result_cache_max_entries() -> usize {
    1000
}

fn default_max_results() -> usize {
    50
}

fn default_true() -> bool {
    true
}

fn default_min_score() -> f64 {
    20.0
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_ttl_secs: default_index_ttl_secs(),
            result_cache_ttl_secs: default_result_cache_ttl_secs(),
            result_cache_max_entries: default_result_cache_max_entries(),
            max_results: default_max_results(),
            fuzzy_enabled: true,
            min_score: default_min_score(),
        }
    }
}

impl SearchConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.index_ttl_secs == 0 {
            return Err("index_ttl_secs must be > 0".to_string());
        }
        if self.result_cache_max_entries == 0 {
            return Err("result_cache_max_entries must be > 0".to_string());
        }
        if self.max_results == 0 {
            return Err("max_results must be > 0".to_string());
        }
        if !(0.0..=100.0).contains(&self.min_score) {
            return Err(format!("min_score must be 0-100, got {}", self.min_score));
        }
        Ok(())
    }
}

/// How profiles are grouped for "#N in category" ranks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GroupBy {
    /// Group by the literal specialty string
    #[default]
    Specialty,
    /// Group by the broader specialty group
    SpecialtyGroup,
}

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Category used for profiles with a blank specialty.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Grouping key.
    #[serde(default)]
    pub group_by: GroupBy,
}

fn default_category() -> String {
    "General Practice".to_string()
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            group_by: GroupBy::default(),
        }
    }
}

impl RankingConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_category.trim().is_empty() {
            return Err("default_category must not be blank".to_string());
        }
        Ok(())
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Path to a JSON array file or a directory of per-profile JSON files
    #[serde(default = "default_profiles_path")]
    pub profiles_path: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Search configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Ranking configuration
    #[serde(default)]
    pub ranking: RankingConfig,
}

fn default_profiles_path() -> String {
    ProjectDirs::from("", "", "prestige")
        .map(|p| p.data_local_dir().join("profiles"))
        .unwrap_or_else(|| PathBuf::from("./profiles"))
        .to_string_lossy()
        .to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profiles_path: default_profiles_path(),
            log_level: default_log_level(),
            search: SearchConfig::default(),
            ranking: RankingConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/prestige/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (PRESTIGE_*)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, PrestigeError> {
        let config_dir = ProjectDirs::from("", "", "prestige")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            .set_default("profiles_path", default_profiles_path())
            .map_err(|e| PrestigeError::Config(e.to_string()))?
            .set_default("log_level", default_log_level())
            .map_err(|e| PrestigeError::Config(e.to_string()))?
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Format: PRESTIGE_LOG_LEVEL, PRESTIGE_SEARCH__MAX_RESULTS, etc.
        builder = builder.add_source(
            Environment::with_prefix("PRESTIGE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| PrestigeError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| PrestigeError::Config(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate all nested sections.
    pub fn validate(&self) -> Result<(), PrestigeError> {
        self.search.validate().map_err(PrestigeError::Config)?;
        self.ranking.validate().map_err(PrestigeError::Config)?;
        Ok(())
    }

    /// Expand a leading `~/` in the profiles path.
    pub fn expanded_profiles_path(&self) -> PathBuf {
        if let Some(rest) = self.profiles_path.strip_prefix("~/") {
            if let Some(home) = std::env::var_os("HOME") {
                return PathBuf::from(home).join(rest);
            }
        }
        PathBuf::from(&self.profiles_path)
    }
}
