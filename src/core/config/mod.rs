//! core::config
//!
//! Project configuration schema and loading.
//!
//! # Location
//!
//! Configuration lives in `stylegate.toml` at the project root. The file is
//! optional: a missing file means every setting takes its default.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults (cargo clippy / cargo fmt / `target`)
//! 2. `stylegate.toml`
//! 3. CLI flags (not handled here)
//!
//! # Example
//!
//! ```no_run
//! use stylegate::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("/path/to/project")).unwrap();
//! let lint = config.lint_tool();
//! println!("lint with: {} {}", lint.program, lint.args(false).join(" "));
//! ```

pub mod schema;

pub use schema::{is_inside_root, CleanConfig, ProjectConfig, ToolConfig};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "stylegate.toml";

const DEFAULT_LINT_PROGRAM: &str = "cargo";
const DEFAULT_LINT_CHECK: &[&str] = &["clippy", "--all-targets", "--", "-D", "warnings"];
const DEFAULT_LINT_FIX: &[&str] = &[
    "clippy",
    "--fix",
    "--allow-dirty",
    "--allow-staged",
    "--all-targets",
];

const DEFAULT_FORMAT_PROGRAM: &str = "cargo";
const DEFAULT_FORMAT_CHECK: &[&str] = &["fmt", "--all", "--", "--check"];
const DEFAULT_FORMAT_FIX: &[&str] = &["fmt", "--all"];

const DEFAULT_CLEAN_PATHS: &[&str] = &["target"];

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError { path: PathBuf, source: io::Error },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// A fully resolved external tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    pub program: String,
    pub check_args: Vec<String>,
    pub fix_args: Vec<String>,
}

impl ToolSpec {
    /// Arguments for the requested mode.
    pub fn args(&self, fix: bool) -> &[String] {
        if fix {
            &self.fix_args
        } else {
            &self.check_args
        }
    }

    fn resolve(config: Option<&ToolConfig>, program: &str, check: &[&str], fix: &[&str]) -> Self {
        let owned = |args: &[&str]| args.iter().map(|a| a.to_string()).collect::<Vec<_>>();
        ToolSpec {
            program: config
                .and_then(|c| c.program.clone())
                .unwrap_or_else(|| program.to_string()),
            check_args: config
                .and_then(|c| c.check_args.clone())
                .unwrap_or_else(|| owned(check)),
            fix_args: config
                .and_then(|c| c.fix_args.clone())
                .unwrap_or_else(|| owned(fix)),
        }
    }
}

/// Project configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents (empty when no file exists)
    pub project: ProjectConfig,
    /// Path the configuration was loaded from
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration for the project rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed or
    /// validated. A missing file is not an error.
    pub fn load(root: &Path) -> Result<Config, ConfigError> {
        let path = root.join(CONFIG_FILE);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(ConfigError::ReadError { path, source: e }),
        };

        let project = Self::parse(&contents).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.clone(),
                message,
            },
            other => other,
        })?;

        Ok(Config {
            project,
            path: Some(path),
        })
    }

    /// Parse and validate configuration text.
    pub fn parse(contents: &str) -> Result<ProjectConfig, ConfigError> {
        let project: ProjectConfig =
            toml::from_str(contents).map_err(|e| ConfigError::ParseError {
                path: PathBuf::from(CONFIG_FILE),
                message: e.to_string(),
            })?;
        project.validate()?;
        Ok(project)
    }

    /// Fully populated configuration equal to the built-in defaults.
    pub fn defaults() -> ProjectConfig {
        let config = Config::default();
        let tool = |spec: ToolSpec| ToolConfig {
            program: Some(spec.program),
            check_args: Some(spec.check_args),
            fix_args: Some(spec.fix_args),
        };
        ProjectConfig {
            lint: Some(tool(config.lint_tool())),
            format: Some(tool(config.format_tool())),
            clean: Some(CleanConfig {
                paths: Some(config.clean_paths()),
            }),
        }
    }

    /// Render the default configuration as TOML.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::defaults())
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Lint tool invocation.
    ///
    /// Defaults to `cargo clippy`.
    pub fn lint_tool(&self) -> ToolSpec {
        ToolSpec::resolve(
            self.project.lint.as_ref(),
            DEFAULT_LINT_PROGRAM,
            DEFAULT_LINT_CHECK,
            DEFAULT_LINT_FIX,
        )
    }

    /// Format tool invocation.
    ///
    /// Defaults to `cargo fmt`.
    pub fn format_tool(&self) -> ToolSpec {
        ToolSpec::resolve(
            self.project.format.as_ref(),
            DEFAULT_FORMAT_PROGRAM,
            DEFAULT_FORMAT_CHECK,
            DEFAULT_FORMAT_FIX,
        )
    }

    /// Paths removed by `clean`, relative to the project root.
    ///
    /// Defaults to `target`.
    pub fn clean_paths(&self) -> Vec<PathBuf> {
        self.project
            .clean
            .as_ref()
            .and_then(|c| c.paths.clone())
            .unwrap_or_else(|| DEFAULT_CLEAN_PATHS.iter().map(PathBuf::from).collect())
    }

    /// Get the path the configuration was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load(temp.path()).unwrap();

        assert!(config.loaded_from().is_none());
        assert_eq!(config.lint_tool().program, "cargo");
        assert_eq!(config.lint_tool().args(false)[0], "clippy");
        assert_eq!(config.format_tool().args(true), ["fmt", "--all"]);
        assert_eq!(config.clean_paths(), vec![PathBuf::from("target")]);
    }

    #[test]
    fn file_overrides_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            r#"
            [format]
            program = "dprint"
            check_args = ["check"]

            [clean]
            paths = ["build", "coverage"]
            "#,
        )
        .unwrap();

        let config = Config::load(temp.path()).unwrap();

        assert_eq!(config.loaded_from(), Some(temp.path().join(CONFIG_FILE).as_path()));
        let format = config.format_tool();
        assert_eq!(format.program, "dprint");
        assert_eq!(format.args(false), ["check"]);
        // unset fields keep their defaults
        assert_eq!(format.args(true), ["fmt", "--all"]);
        assert_eq!(config.lint_tool().program, "cargo");
        assert_eq!(
            config.clean_paths(),
            vec![PathBuf::from("build"), PathBuf::from("coverage")]
        );
    }

    #[test]
    fn parse_error_names_the_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "[lint\nprogram = 1").unwrap();

        let err = Config::load(temp.path()).unwrap_err();
        match err {
            ConfigError::ParseError { path, .. } => {
                assert_eq!(path, temp.path().join(CONFIG_FILE))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_clean_path_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "[clean]\npaths = [\"../elsewhere\"]\n",
        )
        .unwrap();

        assert!(matches!(
            Config::load(temp.path()),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn default_toml_parses_back_to_defaults() {
        let rendered = Config::default_toml().unwrap();
        let parsed = Config::parse(&rendered).unwrap();
        assert_eq!(parsed, Config::defaults());
    }
}
