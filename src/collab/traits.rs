//! collab::traits
//!
//! Collaborator contracts.
//!
//! # Design
//!
//! [`VerbFunction`] is async because collaborators spawn external tools and
//! touch the filesystem. A result of `Ok(false)` is an ordinary verb failure
//! (the collaborator has already reported why); `Err` is an unrecoverable
//! fault that the dispatcher does not catch.
//!
//! [`Collaborators`] is a lookup, not a container: each method *loads* one
//! collaborator on demand. Loading lint or format may read project
//! configuration and resolve tools on `PATH`, so the dispatcher calls a
//! loader only once it knows the verb needs it.

use anyhow::Result;
use async_trait::async_trait;

use crate::core::options::Options;

/// A single verb implementation.
///
/// # Example
///
/// ```ignore
/// use stylegate::collab::VerbFunction;
///
/// async fn gate(lint: &dyn VerbFunction, options: &Options) -> anyhow::Result<bool> {
///     lint.run(options, false).await
/// }
/// ```
#[async_trait]
pub trait VerbFunction: Send + Sync {
    /// Collaborator name ("init", "lint", "format", "clean").
    fn name(&self) -> &'static str;

    /// Run against the project in `options`.
    ///
    /// `fix` requests in-place correction; collaborators without a fix mode
    /// ignore it.
    async fn run(&self, options: &Options, fix: bool) -> Result<bool>;
}

/// Lazily resolves the four collaborators.
pub trait Collaborators: Send + Sync {
    /// Load the scaffolding collaborator.
    fn init(&self, options: &Options) -> Result<Box<dyn VerbFunction>>;

    /// Load the lint collaborator.
    fn lint(&self, options: &Options) -> Result<Box<dyn VerbFunction>>;

    /// Load the format collaborator.
    fn format(&self, options: &Options) -> Result<Box<dyn VerbFunction>>;

    /// Load the clean collaborator.
    fn clean(&self, options: &Options) -> Result<Box<dyn VerbFunction>>;
}
