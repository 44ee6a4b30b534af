use serde::Serialize;

use super::naming::{display_name, track_url};

/// One manifest entry. Field order here is the key order in the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackRecord {
    pub name: String,
    pub file: String,
    pub url: String,
}

impl TrackRecord {
    /// Build a record for `file`, whose name without the audio extension is `stem`.
    pub fn new(file: &str, stem: &str, base_url: &str) -> Self {
        Self {
            name: display_name(stem),
            file: file.to_string(),
            url: track_url(base_url, file),
        }
    }
}
