//! Error handling for kobench

use thiserror::Error;

/// Main error type for benchmark operations
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Non-deterministic total in run {run}: expected {expected}, got {actual}")]
    NonDeterministic { expected: i64, actual: i64, run: usize },
}

impl From<serde_json::Error> for BenchError {
    fn from(err: serde_json::Error) -> Self {
        BenchError::Serialization(err.to_string())
    }
}

/// Result type alias for benchmark operations
pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// Macro for creating configuration errors
#[macro_export]
macro_rules! config_err {
    ($msg:expr) => {
        $crate::common::error::BenchError::InvalidConfig($msg.to_string())
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::common::error::BenchError::InvalidConfig(format!($fmt, $($arg)*))
    };
}
