use thiserror::Error;

/// Result for value construction and configuration loading.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid query configuration: {0}")]
    Config(String),

    // Raised while turning external data (JSON text) into values; operator
    // failures are `OpError` in the operators crate.
    #[error("cannot build value: {0}")]
    Value(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Value(e.to_string())
    }
}
