//! collab::external
//!
//! Lint and format collaborators backed by external programs.
//!
//! # Design
//!
//! The tool runs in the project root with inherited stdio, so its own
//! diagnostics reach the user unchanged. Success is the tool's exit status.
//! In dry-run mode a fix request is downgraded to the check arguments:
//! the user still sees what is wrong, but nothing is rewritten.

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use super::traits::VerbFunction;
use crate::core::config::ToolSpec;
use crate::core::options::Options;

/// An external tool resolved on `PATH`.
#[derive(Debug, Clone)]
pub struct ExternalVerb {
    name: &'static str,
    program: PathBuf,
    spec: ToolSpec,
}

impl ExternalVerb {
    /// Resolve `spec.program` for use as the `name` collaborator.
    ///
    /// Relative program paths are resolved against `project_root`.
    ///
    /// # Errors
    ///
    /// Fails when the program cannot be found.
    pub fn resolve(name: &'static str, spec: ToolSpec, project_root: &Path) -> Result<Self> {
        let program = which::which_in(&spec.program, std::env::var_os("PATH"), project_root)
            .with_context(|| {
                format!(
                    "{} tool `{}` not found; install it or set [{}].program in stylegate.toml",
                    name, spec.program, name
                )
            })?;
        Ok(ExternalVerb {
            name,
            program,
            spec,
        })
    }

    /// Resolved executable path.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl VerbFunction for ExternalVerb {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn run(&self, options: &Options, fix: bool) -> Result<bool> {
        let apply_fixes = fix && !options.dry_run();
        if fix && options.dry_run() {
            options
                .logger()
                .log(&format!("{}: dry run, reporting without applying fixes", self.name));
        }

        let args = self.spec.args(apply_fixes);
        options.debug(format!(
            "{}: {} {}",
            self.name,
            self.program.display(),
            args.join(" ")
        ));

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(options.target_root_dir())
            .status()
            .await
            .with_context(|| format!("failed to run {} tool `{}`", self.name, self.spec.program))?;

        if !status.success() {
            options
                .logger()
                .error(&format!("{} failed ({})", self.name, status));
        }
        Ok(status.success())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::core::options::Flags;
    use crate::ui::output::MemoryLogger;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn sh(check: &str, fix: &str) -> ToolSpec {
        ToolSpec {
            program: "sh".to_string(),
            check_args: vec!["-c".to_string(), check.to_string()],
            fix_args: vec!["-c".to_string(), fix.to_string()],
        }
    }

    fn options(dir: &Path, dry_run: bool) -> (Options, Arc<MemoryLogger>) {
        let logger = Arc::new(MemoryLogger::new());
        let options = Options::build(
            &Flags {
                dry_run,
                ..Default::default()
            },
            dir,
            dir.join(".stylegate"),
            logger.clone(),
        );
        (options, logger)
    }

    #[tokio::test]
    async fn exit_status_decides_outcome() {
        let temp = TempDir::new().unwrap();
        let (options, logger) = options(temp.path(), false);
        let verb = ExternalVerb::resolve("lint", sh("exit 0", "exit 3"), temp.path()).unwrap();

        assert!(verb.run(&options, false).await.unwrap());
        assert!(!verb.run(&options, true).await.unwrap());
        assert!(logger.stderr().contains("lint failed"));
    }

    #[tokio::test]
    async fn runs_in_project_root() {
        let temp = TempDir::new().unwrap();
        let (options, _) = options(temp.path(), false);
        let verb =
            ExternalVerb::resolve("format", sh("exit 0", "touch fixed"), temp.path()).unwrap();

        assert!(verb.run(&options, true).await.unwrap());
        assert!(temp.path().join("fixed").exists());
    }

    #[tokio::test]
    async fn dry_run_downgrades_fix_to_check() {
        let temp = TempDir::new().unwrap();
        let (options, logger) = options(temp.path(), true);
        let verb =
            ExternalVerb::resolve("format", sh("exit 0", "touch fixed"), temp.path()).unwrap();

        assert!(verb.run(&options, true).await.unwrap());
        assert!(!temp.path().join("fixed").exists());
        assert!(logger.stdout().contains("dry run"));
    }

    #[test]
    fn missing_program_is_a_load_error() {
        let temp = TempDir::new().unwrap();
        let spec = ToolSpec {
            program: "stylegate-no-such-tool".to_string(),
            check_args: vec![],
            fix_args: vec![],
        };

        let err = ExternalVerb::resolve("lint", spec, temp.path()).unwrap_err();
        assert!(err.to_string().contains("[lint].program"));
    }
}
