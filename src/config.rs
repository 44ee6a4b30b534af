//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive a manifest build and the
//! helpers that load them from disk and the environment.

mod load;
mod schema;

pub use load::resolve_config_path;
pub use schema::*;
