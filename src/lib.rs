//! Stylegate - lint, format and scaffolding gate for Rust projects
//!
//! Stylegate is a single binary wrapping the style tooling of a Rust
//! project behind four verbs: `init` scaffolds configuration, `check` and
//! `fix` run the linter then the formatter, and `clean` removes build output.
//!
//! # Architecture
//!
//! - [`cli`] - Parses arguments, builds options, dispatches the verb
//! - [`collab`] - The collaborators doing the actual work, behind traits
//! - [`core`] - Verbs, options and project configuration
//! - [`update`] - Background check for newer releases
//! - [`ui`] - Logging and prompts
//!
//! # Guarantees
//!
//! 1. A collaborator is loaded only when its verb needs it
//! 2. The formatter never runs after a failed lint
//! 3. `--dry-run` never modifies the target project

pub mod cli;
pub mod collab;
pub mod core;
pub mod ui;
pub mod update;
