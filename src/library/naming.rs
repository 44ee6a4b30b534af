/// Strip one trailing `.<ext>` from `file`, matching `extensions` case-insensitively.
///
/// `extensions` must already be normalized (lowercase, no leading dot).
/// Returns `None` when the file does not carry any of the extensions.
pub fn strip_audio_extension<'a>(file: &'a str, extensions: &[String]) -> Option<&'a str> {
    extensions.iter().find_map(|ext| {
        let suffix_len = ext.len() + 1;
        let split = file.len().checked_sub(suffix_len)?;
        if !file.is_char_boundary(split) {
            return None;
        }
        let (stem, suffix) = file.split_at(split);
        let matches = suffix.starts_with('.') && suffix[1..].eq_ignore_ascii_case(ext);
        matches.then_some(stem)
    })
}

/// Human-readable track name: underscores become spaces.
pub fn display_name(stem: &str) -> String {
    stem.replace('_', " ")
}

/// Public URL for `file`: `base_url` followed by the percent-encoded filename.
///
/// Everything outside `A-Z a-z 0-9 - _ . ~` is escaped, so a space becomes `%20`.
pub fn track_url(base_url: &str, file: &str) -> String {
    format!("{base_url}{}", urlencoding::encode(file))
}
