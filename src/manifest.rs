//! Manifest generation.
//!
//! Scans the library, renders the sorted track records as pretty JSON and
//! atomically replaces the manifest file.

mod build;
mod error;
mod render;
mod write;

pub use build::{build_manifest, build_manifest_with};
pub use error::ManifestError;
pub use render::render;
pub use write::write_atomic;
