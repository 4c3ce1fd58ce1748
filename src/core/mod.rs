//! core
//!
//! Core domain types and configuration for stylegate.
//!
//! # Modules
//!
//! - [`verb`] - The closed set of CLI verbs
//! - [`options`] - Immutable per-invocation options and their builder
//! - [`config`] - `stylegate.toml` schema and loading
//!
//! # Design Principles
//!
//! - Options are built once and never mutated
//! - Schemas are strict and self-describing

pub mod config;
pub mod options;
pub mod verb;
