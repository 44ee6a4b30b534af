use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings for a manifest build.
///
/// File format: TOML
/// Lookup order: `TRACKLIST_CONFIG_PATH`, `./tracklist.toml`, then
/// `$XDG_CONFIG_HOME/tracklist/config.toml` or `~/.config/tracklist/config.toml`.
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub manifest: ManifestSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory holding the audio files. Only its direct children are scanned.
    pub directory: PathBuf,
    /// File extensions to treat as audio (case-insensitive, leading dot optional).
    pub extensions: Vec<String>,
    /// Whether a symlink pointing at a regular file counts as a track.
    pub follow_links: bool,
    /// Whether to include dotfiles.
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("tracks"),
            extensions: vec!["mp3".into()],
            follow_links: true,
            include_hidden: true,
        }
    }
}

impl LibrarySettings {
    /// Configured extensions, lowercased and without the leading dot.
    pub fn normalized_extensions(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|e| !e.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ManifestSettings {
    /// Where the manifest is written. Any existing file is replaced.
    pub output: PathBuf,
    /// Prefix for every track URL. Used verbatim, no `/` is inserted.
    pub base_url: String,
    /// Spaces per indentation level in the JSON output.
    pub indent: usize,
}

impl Default for ManifestSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("tracks.json"),
            base_url: "https://modplayer.s3.us-east-1.amazonaws.com/tracks/".to_string(),
            indent: 4,
        }
    }
}
