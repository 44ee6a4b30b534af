use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::manifest::ManifestError;

use super::model::TrackRecord;
use super::naming::strip_audio_extension;

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// List the audio files sitting directly in `dir`.
///
/// Returns `(file, stem)` pairs in directory order. Entries that cannot be
/// inspected and names that are not valid UTF-8 are skipped with a warning.
pub fn list_audio_files(
    dir: &Path,
    settings: &LibrarySettings,
) -> Result<Vec<(String, String)>, ManifestError> {
    // Fails on a missing path, a plain file or an unreadable directory.
    fs::read_dir(dir).map_err(|source| ManifestError::DirectoryNotFound {
        path: dir.to_path_buf(),
        source,
    })?;

    let exts = settings.normalized_extensions();
    let mut files = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!(
                path = %entry.path().display(),
                "skipping file whose name is not valid UTF-8"
            );
            continue;
        };
        if !settings.include_hidden && is_hidden(name) {
            continue;
        }
        if let Some(stem) = strip_audio_extension(name, &exts) {
            files.push((name.to_string(), stem.to_string()));
        }
    }

    Ok(files)
}

/// Scan `dir` and build one sorted [`TrackRecord`] per audio file.
///
/// Records are ordered by `name` (code-point order), then by `file`.
pub fn scan(
    dir: &Path,
    settings: &LibrarySettings,
    base_url: &str,
) -> Result<Vec<TrackRecord>, ManifestError> {
    let mut tracks: Vec<TrackRecord> = list_audio_files(dir, settings)?
        .iter()
        .map(|(file, stem)| TrackRecord::new(file, stem, base_url))
        .collect();

    tracks.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.file.cmp(&b.file)));
    tracing::debug!(dir = %dir.display(), count = tracks.len(), "scanned library");
    Ok(tracks)
}
