//! collab::clean
//!
//! Removes build output listed in `[clean].paths`.

use anyhow::{bail, Context as _, Result};
use async_trait::async_trait;
use std::io;
use std::path::PathBuf;

use super::traits::VerbFunction;
use crate::core::config::is_inside_root;
use crate::core::options::Options;
use crate::ui::output::format_list;

/// Clean collaborator.
#[derive(Debug, Clone)]
pub struct CleanVerb {
    /// Paths relative to the project root
    paths: Vec<PathBuf>,
}

impl CleanVerb {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl VerbFunction for CleanVerb {
    fn name(&self) -> &'static str {
        "clean"
    }

    async fn run(&self, options: &Options, _fix: bool) -> Result<bool> {
        let root = options.target_root_dir();
        let mut doomed = Vec::new();

        for rel in &self.paths {
            if !is_inside_root(rel) {
                bail!(
                    "refusing to clean '{}': not an entry inside {}",
                    rel.display(),
                    root.display()
                );
            }
            let path = root.join(rel);
            match tokio::fs::symlink_metadata(&path).await {
                Ok(meta) => doomed.push((rel, path, meta.is_dir())),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    options.debug(format!("clean: {} does not exist", rel.display()));
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("failed to inspect {}", path.display()))
                }
            }
        }

        if options.dry_run() {
            if !doomed.is_empty() {
                let names: Vec<_> = doomed.iter().map(|(rel, ..)| rel.display()).collect();
                options
                    .logger()
                    .log(&format!("Would remove:\n{}", format_list(&names, "  - ")));
            }
            return Ok(true);
        }

        for (rel, path, is_dir) in doomed {
            options.logger().log(&format!("Removing {}", rel.display()));
            let removed = if is_dir {
                tokio::fs::remove_dir_all(&path).await
            } else {
                tokio::fs::remove_file(&path).await
            };
            removed.with_context(|| format!("failed to remove {}", path.display()))?;
        }

        Ok(true)
    }
}
