use async_trait::async_trait;
use trainingportal_janitor_domain::{DomainError, ManagedResource, ResourceKind};

#[async_trait]
pub trait ResourceLister: Send + Sync {
    async fn list(&self, kind: &ResourceKind) -> Result<Vec<ManagedResource>, DomainError>;
}
