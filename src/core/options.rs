//! core::options
//!
//! The immutable options value handed to every collaborator.
//!
//! # Design
//!
//! [`Options::build`] is a pure function of the parsed flags, the current
//! directory and the install directory. Reading the process environment is
//! left to the caller so the builder stays trivially testable.

use std::ffi::OsString;
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::ui::output::{self, Logger, Verbosity};

/// Directory, relative to the current directory, holding bundled templates.
pub const INSTALL_DIR: &str = ".stylegate";

/// Environment variable overriding [`INSTALL_DIR`].
pub const ROOT_ENV: &str = "STYLEGATE_ROOT";

/// Flags relevant to option construction, as parsed from the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub dry_run: bool,
    pub yes: bool,
    pub debug: bool,
    pub cwd: Option<PathBuf>,
}

/// Per-invocation configuration shared by the dispatcher and collaborators.
///
/// Fields are private; once built, an `Options` value cannot change.
#[derive(Clone)]
pub struct Options {
    dry_run: bool,
    root_dir: PathBuf,
    target_root_dir: PathBuf,
    assume_yes: bool,
    verbosity: Verbosity,
    logger: Arc<dyn Logger>,
}

impl Options {
    /// Build options from parsed flags.
    ///
    /// `cwd` is the process working directory; a `--cwd` flag is resolved
    /// against it. `install_dir` becomes [`Options::root_dir`].
    pub fn build(
        flags: &Flags,
        cwd: &Path,
        install_dir: PathBuf,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let target_root_dir = match &flags.cwd {
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        };
        Options {
            dry_run: flags.dry_run,
            root_dir: install_dir,
            target_root_dir,
            assume_yes: flags.yes,
            verbosity: Verbosity::from_flags(flags.debug),
            logger,
        }
    }

    /// Whether mutating effects are suppressed.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// The tool's own installation directory (bundled templates).
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// The project being operated on.
    pub fn target_root_dir(&self) -> &Path {
        &self.target_root_dir
    }

    /// Whether prompts are answered "yes" automatically.
    pub fn assume_yes(&self) -> bool {
        self.assume_yes
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    /// Print a debug line through the logger (only with `--debug`).
    pub fn debug(&self, message: impl Display) {
        output::debug(self.logger(), message, self.verbosity);
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("dry_run", &self.dry_run)
            .field("root_dir", &self.root_dir)
            .field("target_root_dir", &self.target_root_dir)
            .field("assume_yes", &self.assume_yes)
            .field("verbosity", &self.verbosity)
            .finish_non_exhaustive()
    }
}

/// Resolve the install directory from the working directory and an
/// optional [`ROOT_ENV`] override.
pub fn resolve_root_dir(cwd: &Path, env_override: Option<OsString>) -> PathBuf {
    match env_override {
        Some(dir) if !dir.is_empty() => cwd.join(dir),
        _ => cwd.join(INSTALL_DIR),
    }
}
