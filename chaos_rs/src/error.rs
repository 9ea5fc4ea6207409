use std::path::PathBuf;

/// Errors raised while parsing user-facing identifiers or loading configuration.
///
/// Filtering and pagination never fail; an empty listing is a normal result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A blog category label that is not part of [`crate::content::Category`].
    #[error("unknown blog category: {0:?}")]
    UnknownCategory(String),

    /// A destination category id that is not part of
    /// [`crate::destinations::DestinationCategory`].
    #[error("unknown destination category: {0:?}")]
    UnknownDestinationCategory(String),

    /// A contact subject value that is not part of [`crate::contact::ContactSubject`].
    #[error("unknown contact subject: {0:?}")]
    UnknownSubject(String),

    /// The config file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ConfigRead {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::SiteConfig`].
    #[error("failed to parse site config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
