//! cli::dispatch
//!
//! Maps the verb to its collaborator sequence.
//!
//! | Verb    | Sequence                                   |
//! |---------|--------------------------------------------|
//! | `init`  | `init`                                     |
//! | `check` | `lint(fix=false)`, then `format(fix=false)` |
//! | `fix`   | `lint(fix=true)`, then `format(fix=true)`   |
//! | `clean` | `clean`                                    |
//!
//! `format` only runs after `lint` succeeded. Collaborators are loaded one
//! at a time, right before they run, so `init` never loads lint or format.
//! Collaborator errors are not caught here.

use anyhow::Result;

use super::args::usage;
use crate::collab::Collaborators;
use crate::core::options::Options;
use crate::core::verb::Verb;

/// Run `verb` and report whether it succeeded.
///
/// An unknown verb prints usage and yields `Ok(false)` without loading any
/// collaborator.
pub async fn dispatch(
    verb: &str,
    options: &Options,
    collaborators: &dyn Collaborators,
) -> Result<bool> {
    let Some(verb) = Verb::parse(verb) else {
        usage(options.logger(), Some(&format!("Unknown verb: {}", verb)));
        return Ok(false);
    };
    options.debug(format!("verb: {}", verb));

    match verb {
        Verb::Init => collaborators.init(options)?.run(options, false).await,
        Verb::Check | Verb::Fix => {
            lint_then_format(options, collaborators, verb.fix_mode()).await
        }
        Verb::Clean => collaborators.clean(options)?.run(options, false).await,
    }
}

async fn lint_then_format(
    options: &Options,
    collaborators: &dyn Collaborators,
    fix: bool,
) -> Result<bool> {
    let lint = collaborators.lint(options)?;
    if !lint.run(options, fix).await? {
        options.debug("lint failed; skipping format");
        return Ok(false);
    }

    let format = collaborators.format(options)?;
    format.run(options, fix).await
}
