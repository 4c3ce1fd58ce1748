//! core::verb
//!
//! The closed set of verbs the CLI understands.

use std::fmt;

/// A CLI verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Scaffold style configuration into the project
    Init,
    /// Lint, then format, in report-only mode
    Check,
    /// Lint, then format, correcting in place
    Fix,
    /// Remove build output
    Clean,
}

impl Verb {
    /// Every verb, in usage order.
    pub const ALL: [Verb; 4] = [Verb::Init, Verb::Check, Verb::Fix, Verb::Clean];

    /// Parse a verb name. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "init" => Some(Verb::Init),
            "check" => Some(Verb::Check),
            "fix" => Some(Verb::Fix),
            "clean" => Some(Verb::Clean),
            _ => None,
        }
    }

    /// The verb name as typed on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Init => "init",
            Verb::Check => "check",
            Verb::Fix => "fix",
            Verb::Clean => "clean",
        }
    }

    /// Whether lint/format run in fix mode for this verb.
    pub fn fix_mode(&self) -> bool {
        matches!(self, Verb::Fix)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
