use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting a guard up. Evaluation itself never fails.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("failed to read guard config from {}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse guard config from {origin}")]
    ParseConfig {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid guard config: `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, GuardError>;
