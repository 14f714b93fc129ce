//! Profile record sources.
//!
//! The search index and the ranking engine both refresh from a
//! [`ProfileSource`]. Loading is the only suspension point in the core;
//! everything downstream of it is synchronous.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use prestige_types::ProfileRecord;
use tracing::{debug, warn};

use crate::error::SourceError;

/// Supplies the full profile collection.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Human-readable source name for logs.
    fn name(&self) -> &str;

    /// Load every profile record.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] when the collection cannot be read. Callers
    /// holding a previous snapshot keep serving it.
    async fn load_profiles(&self) -> Result<Vec<ProfileRecord>, SourceError>;
}

/// In-memory source, replaceable at runtime.
///
/// Can be switched into a failing mode to exercise degraded paths.
#[derive(Debug, Default)]
pub struct StaticProfileSource {
    records: RwLock<Vec<ProfileRecord>>,
    failing: AtomicBool,
    loads: AtomicUsize,
}

impl StaticProfileSource {
    /// Create a source serving `records`.
    pub fn new(records: Vec<ProfileRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            failing: AtomicBool::new(false),
            loads: AtomicUsize::new(0),
        }
    }

    /// Replace the served records.
    pub fn replace(&self, records: Vec<ProfileRecord>) {
        *self.records.write() = records;
    }

    /// Make subsequent loads fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of load attempts so far, including failed ones.
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for StaticProfileSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load_profiles(&self) -> Result<Vec<ProfileRecord>, SourceError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable(
                "static source set to fail".to_string(),
            ));
        }
        Ok(self.records.read().clone())
    }
}

/// JSON-backed source.
///
/// `path` is either a single file holding a JSON array of profiles, or a
/// directory of per-profile `.json` files. In directory mode, files that
/// cannot be read or parsed are skipped with a warning; in single-file mode
/// any error fails the load.
#[derive(Debug, Clone)]
pub struct JsonProfileSource {
    path: PathBuf,
    name: String,
}

impl JsonProfileSource {
    /// Create a source over `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = format!("json:{}", path.display());
        Self { path, name }
    }

    /// Configured path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load_file(&self, path: &Path) -> Result<Vec<ProfileRecord>, SourceError> {
        let text = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&text).map_err(|e| SourceError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    async fn load_dir(&self, dir: &Path) -> Result<Vec<ProfileRecord>, SourceError> {
        let mut paths = Vec::new();
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        // Directory iteration order is platform-dependent
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let parsed = match tokio::fs::read_to_string(&path).await {
                Ok(text) => serde_json::from_str::<ProfileRecord>(&text).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match parsed {
                Ok(record) => records.push(record),
                Err(error) => {
                    warn!(path = %path.display(), error = %error, "Skipping unreadable profile");
                }
            }
        }
        Ok(records)
    }
}

#[async_trait]
impl ProfileSource for JsonProfileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load_profiles(&self) -> Result<Vec<ProfileRecord>, SourceError> {
        let metadata = tokio::fs::metadata(&self.path).await?;
        let records = if metadata.is_dir() {
            self.load_dir(&self.path).await?
        } else {
            self.load_file(&self.path).await?
        };
        debug!(source = %self.name, records = records.len(), "Loaded profiles");
        Ok(records)
    }
}
