//! collab::registry
//!
//! Default collaborator lookup.
//!
//! # Design
//!
//! The dispatcher asks this registry for a collaborator only after the verb
//! is known. `init` is cheap to load. `lint` and `format` read
//! `stylegate.toml` and resolve their external tool on `PATH`; right after
//! installation that tool may not exist yet, which is exactly why `init`
//! never goes through those loaders.

use anyhow::{Context as _, Result};

use super::clean::CleanVerb;
use super::external::ExternalVerb;
use super::init::InitVerb;
use super::traits::{Collaborators, VerbFunction};
use crate::core::config::Config;
use crate::core::options::Options;
use crate::ui::output::Verbosity;

/// The shipped collaborators.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCollaborators;

impl DefaultCollaborators {
    fn config(options: &Options) -> Result<Config> {
        let config = Config::load(options.target_root_dir())
            .context("failed to load project configuration")?;
        if let Some(path) = config.loaded_from() {
            options.debug(format!("config: {}", path.display()));
        }
        if options.verbosity() == Verbosity::Debug {
            let project = serde_json::to_value(&config.project)
                .context("failed to encode project configuration")?;
            options.logger().dir(&project);
        }
        Ok(config)
    }
}

impl Collaborators for DefaultCollaborators {
    fn init(&self, _options: &Options) -> Result<Box<dyn VerbFunction>> {
        Ok(Box::new(InitVerb::new()))
    }

    fn lint(&self, options: &Options) -> Result<Box<dyn VerbFunction>> {
        let spec = Self::config(options)?.lint_tool();
        let verb = ExternalVerb::resolve("lint", spec, options.target_root_dir())?;
        Ok(Box::new(verb))
    }

    fn format(&self, options: &Options) -> Result<Box<dyn VerbFunction>> {
        let spec = Self::config(options)?.format_tool();
        let verb = ExternalVerb::resolve("format", spec, options.target_root_dir())?;
        Ok(Box::new(verb))
    }

    fn clean(&self, options: &Options) -> Result<Box<dyn VerbFunction>> {
        let paths = Self::config(options)?.clean_paths();
        Ok(Box::new(CleanVerb::new(paths)))
    }
}
