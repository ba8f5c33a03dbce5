use async_trait::async_trait;
use std::sync::Arc;
use trainingportal_janitor_domain::DomainError;

use super::{ResourceDeleter, ResourceLister};

/// Lister and deleter bound to one freshly built cluster connection.
#[derive(Clone)]
pub struct ClusterSession {
    pub lister: Arc<dyn ResourceLister>,
    pub deleter: Arc<dyn ResourceDeleter>,
}

impl ClusterSession {
    pub fn new(lister: Arc<dyn ResourceLister>, deleter: Arc<dyn ResourceDeleter>) -> Self {
        Self { lister, deleter }
    }
}

/// Builds a new cluster session. Called once per sweep; sessions are never reused.
#[async_trait]
pub trait ClusterConnector: Send + Sync {
    async fn connect(&self) -> Result<ClusterSession, DomainError>;
}
