//! Error types for the logger factory

pub type Result<T> = std::result::Result<T, FactoryError>;

#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// Missing, invalid or unsupported configuration. The message names the
    /// exact key or value at fault and is part of the observable contract.
    #[error("{0}")]
    Configuration(String),

    /// IO error while opening or writing to a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    Writer(String),
}

impl FactoryError {
    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        FactoryError::Configuration(msg.into())
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        FactoryError::Writer(msg.into())
    }
}
