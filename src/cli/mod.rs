//! cli
//!
//! Command-line interface layer for stylegate.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and flags
//! - Build the [`Options`] value
//! - Kick off the update notifier
//! - Dispatch the verb and map its outcome to an exit status
//!
//! # Architecture
//!
//! The CLI layer is thin. It does no linting, formatting or scaffolding of
//! its own; all substantive work and diagnostics belong to the
//! collaborators in [`crate::collab`].

pub mod args;
pub mod dispatch;

pub use args::{Cli, UsageError, USAGE};
pub use dispatch::dispatch;

use anyhow::{Context as _, Result};
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use crate::collab::{Collaborators, DefaultCollaborators};
use crate::core::options::{self, Options};
use crate::ui::output::{ConsoleLogger, Logger, Verbosity};
use crate::update::{UpdateNotifier, CURRENT_VERSION};

/// Final outcome of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    /// Numeric process exit code.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

impl From<bool> for ExitStatus {
    fn from(ok: bool) -> Self {
        if ok {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. It drives the async
/// dispatcher on a single-threaded tokio runtime.
pub fn run() -> Result<ExitStatus> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let env = Environment {
        cwd: &cwd,
        root_override: std::env::var_os(options::ROOT_ENV),
        notifier: UpdateNotifier::from_env(),
    };

    let status = rt.block_on(run_with(
        std::env::args_os(),
        env,
        Arc::new(ConsoleLogger),
        &DefaultCollaborators,
    ));

    // a pending update refresh is abandoned, including blocking DNS lookups
    rt.shutdown_background();
    status
}

/// Process environment consumed by [`run_with`].
#[derive(Debug)]
pub struct Environment<'a> {
    /// Process working directory
    pub cwd: &'a Path,
    /// Value of `STYLEGATE_ROOT`, if set
    pub root_override: Option<OsString>,
    /// Update notifier, `None` when disabled
    pub notifier: Option<UpdateNotifier>,
}

/// Parse `args`, dispatch the verb and report the exit status.
///
/// Usage errors become [`ExitStatus::Failure`]; collaborator errors are
/// returned as `Err`.
pub async fn run_with<I, T>(
    args: I,
    env: Environment<'_>,
    logger: Arc<dyn Logger>,
    collaborators: &dyn Collaborators,
) -> Result<ExitStatus>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_args(args) {
        Ok(cli) => cli,
        Err(e) => return Ok(usage_failure(logger.as_ref(), &e)),
    };

    // --help takes precedence and is reported through `verb()`
    if cli.version && !cli.help {
        logger.log(&format!("stylegate {}", CURRENT_VERSION));
        return Ok(ExitStatus::Success);
    }

    if let Some(notifier) = &env.notifier {
        // fire and forget: the refresh task is never awaited
        let _ = notifier.notify(logger.clone(), Verbosity::from_flags(cli.debug));
    }

    let verb = match cli.verb() {
        Ok(verb) => verb,
        Err(e) => return Ok(usage_failure(logger.as_ref(), &e)),
    };

    let root_dir = options::resolve_root_dir(env.cwd, env.root_override);
    let options = Options::build(&cli.flags(), env.cwd, root_dir, logger);
    options.debug(format!("{:?}", options));

    let ok = dispatch(verb, &options, collaborators).await?;
    Ok(ExitStatus::from(ok))
}

fn usage_failure(logger: &dyn Logger, error: &UsageError) -> ExitStatus {
    args::usage(logger, error.message().as_deref());
    ExitStatus::Failure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_status_codes() {
        assert_eq!(ExitStatus::from(true).code(), 0);
        assert_eq!(ExitStatus::from(false).code(), 1);
    }
}
