use std::path::Path;

use crate::config::LibrarySettings;
use crate::library;

use super::{ManifestError, render, write_atomic};

const DEFAULT_INDENT: usize = 4;

/// Regenerate the manifest at `output` from the audio files in `directory`.
///
/// Uses the default library settings (`.mp3` only, symlinks followed, dotfiles
/// included) and a four-space indent. Returns the number of records written.
pub fn build_manifest(
    directory: &Path,
    output: &Path,
    base_url: &str,
) -> Result<usize, ManifestError> {
    build_manifest_with(
        directory,
        output,
        base_url,
        &LibrarySettings::default(),
        DEFAULT_INDENT,
    )
}

/// Like [`build_manifest`], with explicit scan settings and JSON indent.
///
/// `library.directory` is ignored in favor of `directory`.
pub fn build_manifest_with(
    directory: &Path,
    output: &Path,
    base_url: &str,
    library: &LibrarySettings,
    indent: usize,
) -> Result<usize, ManifestError> {
    let tracks = library::scan(directory, library, base_url)?;
    let contents = render(&tracks, indent)?;
    write_atomic(output, &contents)?;

    tracing::info!(
        output = %output.display(),
        count = tracks.len(),
        "manifest written"
    );
    Ok(tracks.len())
}
