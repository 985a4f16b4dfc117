use thiserror::Error;

/// Library error type for start page generation.
#[derive(Debug, Error)]
pub enum Error {
    /// The navigation catalog is missing required content.
    #[error("invalid navigation catalog: {0}")]
    BadCatalog(String),

    /// The search engine registry is empty or malformed.
    #[error("invalid search engine registry: {0}")]
    BadRegistry(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    BadConfig(String),

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON data error.
    #[error(transparent)]
    Data(#[from] serde_json::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}
