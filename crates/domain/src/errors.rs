use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Cluster connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Failed to list {kind}: {reason}")]
    ListingFailed { kind: String, reason: String },

    #[error("Could not delete {kind} {name}: {reason}")]
    DeletionFailed {
        kind: String,
        name: String,
        reason: String,
    },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict on resource {0}")]
    Conflict(String),

    #[error("Permission denied: {0}")]
    Forbidden(String),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Interval must be a positive number of seconds, got {0}")]
    InvalidInterval(u64),

    #[error("Unknown log format: {0}")]
    UnknownLogFormat(String),
}
