use std::path::PathBuf;

/// Errors raised while reading or writing the news file.
#[derive(Debug, thiserror::Error)]
pub enum NewsError {
    #[error("failed to read news file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write news file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
