//! TrainingPortal Janitor Domain Layer
pub mod config;
pub mod errors;
pub mod expiry;
pub mod managed_resource;
pub mod run_summary;

pub use config::{LogFormat, RunConfig, DEFAULT_INTERVAL_SECS};
pub use errors::{ConfigError, DomainError};
pub use expiry::{
    evaluate, parse_expiry, ExpiryDecision, ExpiryFormat, EXPIRY_ANNOTATION, EXPIRY_FORMATS,
};
pub use managed_resource::{Annotations, ManagedResource, ResourceHandle, ResourceKind};
pub use run_summary::{
    RunSummary, RESOURCES_DELETED, RESOURCES_DELETE_FAILED, RESOURCES_WITH_EXPIRY,
};
