use thiserror::Error;

/// Failures raised by the native stores and config parsing.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialise config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}
