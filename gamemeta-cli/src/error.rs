use thiserror::Error;

use gamemeta_core::MetadataError;
use gamemeta_xml::GamelistError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Gamelist could not be read or written
    #[error("{0}")]
    Gamelist(#[from] GamelistError),

    /// Metadata field access failed
    #[error("{0}")]
    Metadata(#[from] MetadataError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Requested entry does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
