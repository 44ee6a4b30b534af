use std::io;
use std::path::PathBuf;

/// Errors that abort a manifest build.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("directory not found or unreadable: {}: {source}", path.display())]
    DirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write manifest {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to load config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}
