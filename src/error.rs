use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EntityError>;

#[derive(Debug, Error)]
pub enum EntityError {
    /// An entity needs a title to derive its slug from.
    #[error("entity title must not be empty")]
    EmptyTitle,

    /// A stored slug holds characters a derived slug never contains.
    #[error("invalid slug '{0}': expected lowercase letters, digits and hyphens")]
    InvalidSlug(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The config file could not be read.
    #[error("could not read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::Config`].
    #[error("could not parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A global tracing subscriber is already installed.
    #[error("could not install tracing subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

impl EntityError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
