//! core::config::schema
//!
//! Configuration schema types for `stylegate.toml`.
//!
//! # Validation
//!
//! Values are validated after parsing: tool programs must be non-empty and
//! clean paths must stay inside the project root.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use super::ConfigError;

/// Project configuration.
///
/// # Example
///
/// ```toml
/// [lint]
/// program = "cargo"
/// check_args = ["clippy", "--all-targets", "--", "-D", "warnings"]
/// fix_args = ["clippy", "--fix", "--allow-dirty", "--allow-staged", "--all-targets"]
///
/// [format]
/// program = "cargo"
/// check_args = ["fmt", "--all", "--", "--check"]
/// fix_args = ["fmt", "--all"]
///
/// [clean]
/// paths = ["target"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Lint tool invocation
    pub lint: Option<ToolConfig>,

    /// Format tool invocation
    pub format: Option<ToolConfig>,

    /// Build output removal
    pub clean: Option<CleanConfig>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(lint) = &self.lint {
            lint.validate("lint")?;
        }
        if let Some(format) = &self.format {
            format.validate("format")?;
        }
        if let Some(clean) = &self.clean {
            clean.validate()?;
        }
        Ok(())
    }
}

/// External tool settings for lint or format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Executable name or path
    pub program: Option<String>,

    /// Arguments for report-only mode
    pub check_args: Option<Vec<String>>,

    /// Arguments for in-place fix mode
    pub fix_args: Option<Vec<String>>,
}

impl ToolConfig {
    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        if let Some(program) = &self.program {
            if program.trim().is_empty() {
                return Err(ConfigError::InvalidValue(format!(
                    "[{}].program cannot be empty",
                    section
                )));
            }
        }
        Ok(())
    }
}

/// Clean settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CleanConfig {
    /// Paths removed by `clean`, relative to the project root
    pub paths: Option<Vec<PathBuf>>,
}

impl CleanConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for path in self.paths.iter().flatten() {
            if !is_inside_root(path) {
                return Err(ConfigError::InvalidValue(format!(
                    "clean path '{}' must name an entry inside the project root",
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

/// Whether `path` names an entry strictly below the root it is joined to.
///
/// `.` and `./` name the root itself and are rejected.
pub fn is_inside_root(path: &Path) -> bool {
    let mut named = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => named = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    named
}
