//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--help`: Show usage (exits 1, no verb runs)
//! - `--version`: Show version
//! - `-y` / `--yes`: Assume "yes" for every prompt
//! - `--dry-run`: Report instead of changing anything
//! - `--cwd <path>`: Run as if stylegate was started in that directory
//! - `--debug`: Enable debug logging
//!
//! Exactly one positional argument, the verb, is expected. clap's own help
//! and version handling is disabled so that every usage path exits 1 with
//! the same text on stderr.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::options::Flags;
use crate::ui::output::Logger;

/// Usage text shown for `--help` and every usage error.
pub const USAGE: &str = "\
Usage
  $ stylegate <verb> [options]

Verb can be:
  init        Adds default style configuration to your project.
  check       Checks code for formatting and lint issues.
  fix         Fixes formatting and linting issues (if possible).
  clean       Removes all files generated by the build.

Options
  --help        Prints this help message.
  -y, --yes     Assume a yes answer for every prompt.
  --dry-run     Don't make any actual changes.
  --cwd <path>  Run as if started in <path>.
  --debug       Print debug output.
  --version     Prints the version.

Examples
  $ stylegate init -y
  $ stylegate check
  $ stylegate fix
  $ stylegate clean";

/// Why the command line could not be turned into a single verb.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// clap rejected the arguments (unknown flag, missing value, ...)
    #[error("{0}")]
    Invalid(String),

    #[error("help requested")]
    HelpRequested,

    #[error("missing verb")]
    MissingVerb,

    #[error("expected exactly one verb, got {}: {}", .0.len(), .0.join(" "))]
    TooManyVerbs(Vec<String>),
}

impl UsageError {
    /// Message printed above the usage text, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            UsageError::HelpRequested | UsageError::MissingVerb => None,
            other => Some(other.to_string()),
        }
    }
}

/// stylegate - lint, format and scaffolding gate for Rust projects
#[derive(Parser, Debug, Default)]
#[command(name = "stylegate")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// The verb: init, check, fix or clean
    #[arg(value_name = "VERB")]
    pub verbs: Vec<String>,

    /// Assume a yes answer for every prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// Don't make any actual changes
    #[arg(long)]
    pub dry_run: bool,

    /// Run as if stylegate was started in this directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Print usage
    #[arg(long)]
    pub help: bool,

    /// Print version
    #[arg(long)]
    pub version: bool,
}

impl Cli {
    /// Parse an argument list (including the program name).
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map_err(|e| UsageError::Invalid(first_line(&e.to_string())))
    }

    /// The single verb, unless help was requested or the count is wrong.
    pub fn verb(&self) -> Result<&str, UsageError> {
        if self.help {
            return Err(UsageError::HelpRequested);
        }
        match self.verbs.as_slice() {
            [] => Err(UsageError::MissingVerb),
            [verb] => Ok(verb.as_str()),
            many => Err(UsageError::TooManyVerbs(many.to_vec())),
        }
    }

    /// Flags consumed by the options builder.
    pub fn flags(&self) -> Flags {
        Flags {
            dry_run: self.dry_run,
            yes: self.yes,
            debug: self.debug,
            cwd: self.cwd.clone(),
        }
    }
}

/// First line of a clap error without the `error: ` prefix.
fn first_line(rendered: &str) -> String {
    let line = rendered.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Print an optional message followed by the usage text on stderr.
pub fn usage(logger: &dyn Logger, message: Option<&str>) {
    if let Some(message) = message {
        logger.error(message);
        logger.error("");
    }
    logger.error(USAGE);
}
