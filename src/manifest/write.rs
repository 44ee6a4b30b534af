use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::ManifestError;

/// Replace `path` with `contents` via a sibling temp file and a rename.
///
/// On failure the temp file is dropped (and removed) and any previous file at
/// `path` is left as it was.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ManifestError> {
    let fail = |source: io::Error| ManifestError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(fail)?;
    tmp.write_all(contents).map_err(fail)?;
    tmp.as_file().sync_all().map_err(fail)?;
    match_permissions(tmp.as_file(), path).map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "manifest replaced");
    Ok(())
}

/// Temp files are created owner-only; give the manifest the mode of the file
/// it replaces, or a world-readable one when it is new.
fn match_permissions(file: &fs::File, path: &Path) -> io::Result<()> {
    if let Ok(meta) = fs::metadata(path) {
        return file.set_permissions(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o644))?;
    }
    Ok(())
}
