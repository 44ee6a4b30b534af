use crate::config::Settings;
use crate::manifest::ManifestError;

/// Resolve the settings for this run.
///
/// A missing config file means defaults. A file that fails to parse or
/// validate aborts the run before anything is scanned or written.
pub fn load_settings() -> Result<Settings, ManifestError> {
    let settings = Settings::load()?;
    settings.validate().map_err(ManifestError::InvalidConfig)?;
    Ok(settings)
}
