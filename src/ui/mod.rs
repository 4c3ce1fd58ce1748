//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Interactive prompts and confirmations
//! - [`output`] - Logger capability and output helpers
//!
//! # Design
//!
//! All output and prompts go through this module so that collaborators can
//! be exercised against captured output in tests.

pub mod output;
pub mod prompts;
