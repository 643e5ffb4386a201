//! Infrastructure error types and mapping into the domain error

use goalfuel_domain::GoalFuelError;
use thiserror::Error;

/// Errors raised by infrastructure adapters.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("encode error for key '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("timer error: {0}")]
    Timer(String),
}

impl From<InfraError> for GoalFuelError {
    fn from(err: InfraError) -> Self {
        match err {
            InfraError::Io { .. } => GoalFuelError::Storage(err.to_string()),
            InfraError::Encode { .. } => GoalFuelError::Serialization(err.to_string()),
            InfraError::Config(msg) => GoalFuelError::Config(msg),
            InfraError::Timer(msg) => GoalFuelError::Internal(msg),
        }
    }
}
