//! update
//!
//! Best-effort notice when a newer stylegate is published.
//!
//! # Design
//!
//! The notifier never blocks the verb and never influences the exit code:
//!
//! 1. The notice is printed from the on-disk cache written by an earlier
//!    run, which costs one small file read.
//! 2. When the cache is missing or older than the check interval, a
//!    detached task queries the crates.io API and rewrites the cache. The
//!    dispatcher never awaits it; if the process exits first, the check
//!    simply happens on a later run.
//!
//! Every failure (offline, registry error, unwritable cache) is swallowed
//! and reported only at debug verbosity.
//!
//! Set `NO_UPDATE_NOTIFIER` (or run under `CI`) to disable the check.

mod cache;
pub mod version;

pub use cache::UpdateCache;

use chrono::{Duration, Utc};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;

use crate::ui::output::{self, Logger, Verbosity};

/// Name queried on the registry.
pub const PACKAGE: &str = env!("CARGO_PKG_NAME");

/// Version of the running binary.
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Registry base URL.
pub const DEFAULT_REGISTRY: &str = "https://crates.io";

/// Environment variable disabling the check.
pub const DISABLE_ENV: &str = "NO_UPDATE_NOTIFIER";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

/// Errors from the update check. Never shown outside debug output.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("registry request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to write update cache '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode update cache: {0}")]
    Json(#[from] serde_json::Error),

    #[error("registry response has no version")]
    MissingVersion,
}

/// `GET /api/v1/crates/{name}` response, reduced to what we read.
#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    max_stable_version: Option<String>,
    max_version: Option<String>,
}

/// Update notifier configuration.
#[derive(Debug, Clone)]
pub struct UpdateNotifier {
    package: String,
    current: String,
    registry: String,
    cache_path: PathBuf,
    interval: Duration,
}

impl UpdateNotifier {
    /// Notifier for this binary, caching at `cache_path`.
    pub fn new(cache_path: PathBuf) -> Self {
        Self {
            package: PACKAGE.to_string(),
            current: CURRENT_VERSION.to_string(),
            registry: DEFAULT_REGISTRY.to_string(),
            cache_path,
            interval: Duration::hours(24),
        }
    }

    /// Notifier using the user cache directory, or `None` when disabled.
    pub fn from_env() -> Option<Self> {
        if std::env::var_os(DISABLE_ENV).is_some() || std::env::var_os("CI").is_some() {
            return None;
        }
        let dir = dirs::cache_dir()?;
        Some(Self::new(dir.join(PACKAGE).join("update-check.json")))
    }

    pub fn with_registry(mut self, registry: impl Into<String>) -> Self {
        self.registry = registry.into();
        self
    }

    pub fn with_current_version(mut self, current: impl Into<String>) -> Self {
        self.current = current.into();
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// The notice to show for `cache`, if it names a newer version.
    pub fn notice_for(&self, cache: &UpdateCache) -> Option<String> {
        version::is_newer(&cache.latest, &self.current).then(|| {
            format!(
                "Update available {} → {}\nRun `cargo install {}` to update.",
                self.current, cache.latest, self.package
            )
        })
    }

    /// Show a pending notice and start a background refresh if due.
    ///
    /// Must be called inside a tokio runtime. The returned handle exists for
    /// tests; callers are free to drop it.
    pub fn notify(&self, logger: Arc<dyn Logger>, verbosity: Verbosity) -> Option<JoinHandle<()>> {
        let cache = UpdateCache::load(&self.cache_path);
        if let Some(notice) = cache.as_ref().and_then(|c| self.notice_for(c)) {
            logger.error(&notice);
        }

        let due = cache.map_or(true, |c| c.is_stale(Utc::now(), self.interval));
        if !due {
            return None;
        }

        let notifier = self.clone();
        Some(tokio::spawn(async move {
            match notifier.refresh().await {
                Ok(cache) => output::debug(
                    logger.as_ref(),
                    format!("update check: latest is {}", cache.latest),
                    verbosity,
                ),
                Err(e) => output::debug(
                    logger.as_ref(),
                    format!("update check failed: {}", e),
                    verbosity,
                ),
            }
        }))
    }

    /// Query the registry and rewrite the cache.
    pub async fn refresh(&self) -> Result<UpdateCache, UpdateError> {
        let latest = self.fetch_latest().await?;
        let cache = UpdateCache {
            last_checked: Utc::now(),
            latest,
        };
        cache.store(&self.cache_path)?;
        Ok(cache)
    }

    async fn fetch_latest(&self) -> Result<String, UpdateError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("{}/{}", self.package, self.current))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let url = format!(
            "{}/api/v1/crates/{}",
            self.registry.trim_end_matches('/'),
            self.package
        );

        let response: CrateResponse = client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .krate
            .max_stable_version
            .or(response.krate.max_version)
            .filter(|v| !v.is_empty())
            .ok_or(UpdateError::MissingVersion)
    }
}
