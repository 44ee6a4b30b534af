use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::library::TrackRecord;

use super::ManifestError;

/// Render `tracks` as a pretty-printed JSON array, `indent` spaces per level.
pub fn render(tracks: &[TrackRecord], indent: usize) -> Result<Vec<u8>, ManifestError> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    tracks.serialize(&mut ser)?;
    Ok(buf)
}
