//! update::cache
//!
//! The last known registry version, persisted between runs.
//!
//! # Format
//!
//! ```json
//! { "last_checked": "2026-10-19T08:00:00Z", "latest": "0.4.0" }
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;

use super::UpdateError;

/// Cached result of the last registry query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCache {
    /// When the registry was last queried
    pub last_checked: DateTime<Utc>,
    /// Newest published version at that time
    pub latest: String,
}

impl UpdateCache {
    /// Read the cache. A missing or unreadable cache is simply absent.
    pub fn load(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Whether the registry should be queried again.
    pub fn is_stale(&self, now: DateTime<Utc>, interval: Duration) -> bool {
        now.signed_duration_since(self.last_checked) >= interval
    }

    /// Write the cache atomically (temp file, then rename).
    pub fn store(&self, path: &Path) -> Result<(), UpdateError> {
        let io_err = |source: std::io::Error| UpdateError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("json.tmp");
        let mut file = fs::File::create(&temp_path).map_err(io_err)?;
        file.write_all(contents.as_bytes()).map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        fs::rename(&temp_path, path).map_err(io_err)?;
        Ok(())
    }
}
