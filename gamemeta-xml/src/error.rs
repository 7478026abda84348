use gamemeta_core::MetadataError;

/// Errors that can occur while reading or writing a gamelist.
#[derive(Debug, thiserror::Error)]
pub enum GamelistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("Invalid gamelist: {0}")]
    InvalidGamelist(String),

    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

impl GamelistError {
    pub fn invalid_gamelist(msg: impl Into<String>) -> Self {
        Self::InvalidGamelist(msg.into())
    }
}
