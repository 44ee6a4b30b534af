//! Regenerates a JSON manifest of the audio files in a directory.
//!
//! Each audio file becomes a [`TrackRecord`] (display name, filename, public
//! URL); records are sorted by name and written over the previous manifest.

pub mod config;
pub mod library;
pub mod manifest;
pub mod runtime;

pub use library::TrackRecord;
pub use manifest::{ManifestError, build_manifest, build_manifest_with};

#[cfg(test)]
mod testing;
