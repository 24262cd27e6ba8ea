//! # tar-core
//!
//! Foundation crate for the TAR review engine.
//! Defines all types, traits, errors, config, and defaults.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::TarConfig;
pub use errors::{TarError, TarResult};
pub use models::{ReviewPhase, SparseVector};
