//! collab::init
//!
//! Scaffolds the style configuration files into a project.
//!
//! # Algorithm
//!
//! 1. Require a `Cargo.toml` in the project root
//! 2. For each template, prefer `<root_dir>/templates/<name>` over the
//!    built-in contents
//! 3. Skip files that already match; ask before overwriting files that
//!    differ (`--yes` answers for the user)
//! 4. In dry-run mode, report instead of writing

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use std::io;
use std::path::Path;

use super::traits::VerbFunction;
use crate::core::config::{Config, CONFIG_FILE};
use crate::core::options::Options;
use crate::ui::prompts::{self, PromptError, Prompter, TerminalPrompter};

const RUSTFMT_TOML: &str = "\
edition = \"2021\"
max_width = 100
use_field_init_shorthand = true
";

const CLIPPY_TOML: &str = "\
too-many-arguments-threshold = 8
";

/// A file written by `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Template {
    Config,
    Rustfmt,
    Clippy,
}

impl Template {
    const ALL: [Template; 3] = [Template::Config, Template::Rustfmt, Template::Clippy];

    fn file_name(self) -> &'static str {
        match self {
            Template::Config => CONFIG_FILE,
            Template::Rustfmt => "rustfmt.toml",
            Template::Clippy => "clippy.toml",
        }
    }

    fn builtin(self) -> Result<String> {
        Ok(match self {
            Template::Config => Config::default_toml()?,
            Template::Rustfmt => RUSTFMT_TOML.to_string(),
            Template::Clippy => CLIPPY_TOML.to_string(),
        })
    }

    /// Contents from the install directory, falling back to the built-in.
    async fn load(self, root_dir: &Path) -> Result<String> {
        let bundled = root_dir.join("templates").join(self.file_name());
        match tokio::fs::read_to_string(&bundled).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => self.builtin(),
            Err(e) => Err(e).with_context(|| format!("failed to read {}", bundled.display())),
        }
    }
}

/// Init collaborator.
pub struct InitVerb {
    prompter: Box<dyn Prompter>,
}

impl InitVerb {
    /// Init that asks on the terminal before overwriting.
    pub fn new() -> Self {
        Self::with_prompter(Box::new(TerminalPrompter))
    }

    pub fn with_prompter(prompter: Box<dyn Prompter>) -> Self {
        Self { prompter }
    }

    fn may_overwrite(&self, options: &Options, name: &str) -> Result<bool> {
        let message = format!("{} already exists. Overwrite?", name);
        match prompts::confirm(self.prompter.as_ref(), &message, false, options.assume_yes()) {
            Ok(answer) => Ok(answer),
            Err(PromptError::NotInteractive) => {
                options.logger().log(&format!(
                    "{} differs from the template; pass --yes to overwrite it",
                    name
                ));
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for InitVerb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerbFunction for InitVerb {
    fn name(&self) -> &'static str {
        "init"
    }

    async fn run(&self, options: &Options, _fix: bool) -> Result<bool> {
        let root = options.target_root_dir();
        if !root.join("Cargo.toml").exists() {
            options.logger().error(&format!(
                "No Cargo.toml found in {}. Run `cargo init` first.",
                root.display()
            ));
            return Ok(false);
        }

        for template in Template::ALL {
            let name = template.file_name();
            let contents = template.load(options.root_dir()).await?;
            let dest = root.join(name);

            let exists = match tokio::fs::read_to_string(&dest).await {
                Ok(existing) if existing == contents => {
                    options.debug(format!("init: {} is up to date", name));
                    continue;
                }
                Ok(_) => true,
                Err(e) if e.kind() == io::ErrorKind::NotFound => false,
                Err(e) => {
                    return Err(e).with_context(|| format!("failed to read {}", dest.display()))
                }
            };

            if options.dry_run() {
                let action = if exists { "overwrite" } else { "write" };
                options.logger().log(&format!("Would {} {}", action, name));
                continue;
            }

            if exists && !self.may_overwrite(options, name)? {
                options.logger().log(&format!("Skipping {}", name));
                continue;
            }

            tokio::fs::write(&dest, contents)
                .await
                .with_context(|| format!("failed to write {}", dest.display()))?;
            options.logger().log(&format!("Wrote {}", name));
        }

        Ok(true)
    }
}
