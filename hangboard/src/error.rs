use std::path::PathBuf;

use thiserror::Error;

/// Errors raised when a protocol would violate its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("protocol name must not be empty")]
    EmptyName,
    #[error("{field} must be at least 1")]
    MustBePositive { field: &'static str },
    #[error("{field} is not a whole number of seconds: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Errors that can occur while reading or writing persisted collections.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed data in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize data for {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("protocol not found: {0}")]
    ProtocolNotFound(String),
    #[error("protocol already exists: {0}")]
    DuplicateProtocol(String),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn serialize(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Serialize {
            path: path.into(),
            source,
        }
    }
}
