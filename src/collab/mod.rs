//! collab
//!
//! The collaborators the dispatcher delegates to.
//!
//! # Architecture
//!
//! The dispatcher only knows the [`VerbFunction`] and [`Collaborators`]
//! traits. Concrete collaborators are materialized through a lookup after
//! the verb is known, so a verb never pays for (or fails on) a
//! collaborator it does not use.
//!
//! # Modules
//!
//! - `traits`: `VerbFunction` and `Collaborators`
//! - `registry`: the shipped lookup, [`DefaultCollaborators`]
//! - `init`: scaffolds `stylegate.toml`, `rustfmt.toml`, `clippy.toml`
//! - `external`: lint and format via external tools
//! - `clean`: removes build output
//! - [`mock`]: recording implementation for deterministic testing

mod clean;
mod external;
mod init;
pub mod mock;
mod registry;
mod traits;

pub use clean::CleanVerb;
pub use external::ExternalVerb;
pub use init::InitVerb;
pub use registry::DefaultCollaborators;
pub use traits::{Collaborators, VerbFunction};
