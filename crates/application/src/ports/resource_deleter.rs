use async_trait::async_trait;
use trainingportal_janitor_domain::{DomainError, ResourceHandle};

#[async_trait]
pub trait ResourceDeleter: Send + Sync {
    async fn delete(&self, handle: &ResourceHandle) -> Result<(), DomainError>;
}
