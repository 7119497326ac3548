use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read proxy file '{path}': {source}")]
    ReadProxyFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid target URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to read operator confirmation: {source}")]
    ReadConfirmation {
        #[source]
        source: std::io::Error,
    },
}
