//! Audio library scanning.
//!
//! Lists the audio files sitting directly in a directory and turns each one
//! into a [`TrackRecord`] ready for the manifest.

mod model;
mod naming;
mod scan;

pub use model::TrackRecord;
pub use scan::{list_audio_files, scan};

#[cfg(test)]
mod tests;
