//! collab::mock
//!
//! Recording collaborators for deterministic testing.
//!
//! # Design
//!
//! Each collaborator's outcome is scripted up front. Every load and every
//! run is recorded in order, so tests can assert on call counts, on the
//! `fix` flag and on the options a collaborator received.
//!
//! # Example
//!
//! ```
//! use stylegate::collab::mock::{MockCollaborators, MockOutcome};
//! use stylegate::collab::Collaborators;
//! # use stylegate::core::options::{Flags, Options};
//! # use stylegate::ui::output::MemoryLogger;
//! # use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! # let options = Options::build(&Flags::default(), "/p".as_ref(), "/p/.stylegate".into(), Arc::new(MemoryLogger::new()));
//! let mock = MockCollaborators::new().with_outcome("lint", MockOutcome::Return(false));
//!
//! let lint = mock.lint(&options).unwrap();
//! assert!(!lint.run(&options, false).await.unwrap());
//! assert_eq!(mock.run_count("lint"), 1);
//! # });
//! ```

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::traits::{Collaborators, VerbFunction};
use crate::core::options::Options;

/// Scripted result of a mock collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOutcome {
    /// Resolve with this boolean.
    Return(bool),
    /// Fail with this error message.
    Fail(String),
}

/// Recorded interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Load {
        name: &'static str,
    },
    Run {
        name: &'static str,
        fix: bool,
        dry_run: bool,
        assume_yes: bool,
        target_root_dir: PathBuf,
    },
}

impl MockCall {
    fn name(&self) -> &'static str {
        match self {
            MockCall::Load { name } | MockCall::Run { name, .. } => *name,
        }
    }
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockInner {
    outcomes: HashMap<&'static str, MockOutcome>,
    load_failures: HashMap<&'static str, String>,
    calls: Vec<MockCall>,
}

/// Mock collaborator lookup.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct MockCollaborators {
    inner: Arc<Mutex<MockInner>>,
}

impl MockCollaborators {
    /// Every collaborator loads and returns `true`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the outcome of `name` ("init", "lint", "format", "clean").
    pub fn with_outcome(self, name: &'static str, outcome: MockOutcome) -> Self {
        self.lock().outcomes.insert(name, outcome);
        self
    }

    /// Make loading `name` fail, as if its dependency were missing.
    pub fn fail_load(self, name: &'static str, message: impl Into<String>) -> Self {
        self.lock().load_failures.insert(name, message.into());
        self
    }

    /// All recorded calls in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.lock().calls.clone()
    }

    /// Names of loaded collaborators in load order.
    pub fn loads(&self) -> Vec<&'static str> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, MockCall::Load { .. }))
            .map(|c| c.name())
            .collect()
    }

    /// Recorded runs only.
    pub fn runs(&self) -> Vec<MockCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, MockCall::Run { .. }))
            .collect()
    }

    /// Number of times `name` was run.
    pub fn run_count(&self, name: &str) -> usize {
        self.runs().iter().filter(|c| c.name() == name).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockInner> {
        // poisoned only by a panicking test; the recorded calls stay valid
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn load(&self, name: &'static str) -> Result<Box<dyn VerbFunction>> {
        let mut inner = self.lock();
        inner.calls.push(MockCall::Load { name });
        if let Some(message) = inner.load_failures.get(name) {
            return Err(anyhow!("{}", message));
        }
        let outcome = inner
            .outcomes
            .get(name)
            .cloned()
            .unwrap_or(MockOutcome::Return(true));
        Ok(Box::new(MockVerb {
            name,
            outcome,
            owner: self.clone(),
        }))
    }
}

impl Collaborators for MockCollaborators {
    fn init(&self, _options: &Options) -> Result<Box<dyn VerbFunction>> {
        self.load("init")
    }

    fn lint(&self, _options: &Options) -> Result<Box<dyn VerbFunction>> {
        self.load("lint")
    }

    fn format(&self, _options: &Options) -> Result<Box<dyn VerbFunction>> {
        self.load("format")
    }

    fn clean(&self, _options: &Options) -> Result<Box<dyn VerbFunction>> {
        self.load("clean")
    }
}

/// A loaded mock collaborator.
struct MockVerb {
    name: &'static str,
    outcome: MockOutcome,
    owner: MockCollaborators,
}

#[async_trait]
impl VerbFunction for MockVerb {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn run(&self, options: &Options, fix: bool) -> Result<bool> {
        self.owner.lock().calls.push(MockCall::Run {
            name: self.name,
            fix,
            dry_run: options.dry_run(),
            assume_yes: options.assume_yes(),
            target_root_dir: options.target_root_dir().to_path_buf(),
        });
        match &self.outcome {
            MockOutcome::Return(ok) => Ok(*ok),
            MockOutcome::Fail(message) => Err(anyhow!("{}", message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::Flags;
    use crate::ui::output::MemoryLogger;
    use std::path::Path;

    fn options() -> Options {
        Options::build(
            &Flags {
                dry_run: true,
                ..Default::default()
            },
            Path::new("/project"),
            PathBuf::from("/project/.stylegate"),
            Arc::new(MemoryLogger::new()),
        )
    }

    #[tokio::test]
    async fn defaults_to_success() {
        let mock = MockCollaborators::new();
        let clean = mock.clean(&options()).unwrap();

        assert!(clean.run(&options(), false).await.unwrap());
        assert_eq!(mock.loads(), vec!["clean"]);
        assert_eq!(mock.run_count("clean"), 1);
    }

    #[tokio::test]
    async fn records_options_and_fix_flag() {
        let mock = MockCollaborators::new();
        mock.format(&options())
            .unwrap()
            .run(&options(), true)
            .await
            .unwrap();

        assert_eq!(
            mock.runs(),
            vec![MockCall::Run {
                name: "format",
                fix: true,
                dry_run: true,
                assume_yes: false,
                target_root_dir: PathBuf::from("/project"),
            }]
        );
    }

    #[tokio::test]
    async fn scripted_failure_is_an_error() {
        let mock = MockCollaborators::new().with_outcome("init", MockOutcome::Fail("boom".into()));
        let err = mock
            .init(&options())
            .unwrap()
            .run(&options(), false)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn load_failure_is_recorded() {
        let mock = MockCollaborators::new().fail_load("lint", "clippy is not installed");

        assert!(mock.lint(&options()).is_err());
        assert_eq!(mock.loads(), vec!["lint"]);
        assert!(mock.runs().is_empty());
    }

    #[test]
    fn clones_share_recordings() {
        let mock = MockCollaborators::new();
        let clone = mock.clone();
        let _ = clone.init(&options());

        assert_eq!(mock.loads(), vec!["init"]);
    }
}
