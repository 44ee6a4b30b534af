use std::path::PathBuf;

use crate::config::Settings;
use crate::manifest::{self, ManifestError};

mod logging;
mod settings;

pub use logging::init_logging;

/// Outcome of a successful run, for the summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub count: usize,
}

/// Load settings and regenerate the manifest once.
pub fn run() -> Result<Summary, ManifestError> {
    let settings = settings::load_settings()?;
    tracing::debug!(?settings, "resolved settings");
    run_with(&settings)
}

/// Log a failed run and print the one-line error for the terminal.
pub fn report_failure(err: &ManifestError) {
    tracing::error!(error = %err, "manifest build failed");
    eprintln!("tracklist: {err}");
}

pub fn run_with(settings: &Settings) -> Result<Summary, ManifestError> {
    let count = manifest::build_manifest_with(
        &settings.library.directory,
        &settings.manifest.output,
        &settings.manifest.base_url,
        &settings.library,
        settings.manifest.indent,
    )?;

    Ok(Summary {
        output: settings.manifest.output.clone(),
        count,
    })
}
