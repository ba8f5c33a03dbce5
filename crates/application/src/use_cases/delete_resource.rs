use crate::ports::ResourceDeleter;
use std::sync::Arc;
use tracing::{error, info};
use trainingportal_janitor_domain::{DomainError, ManagedResource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    Simulated,
}

/// Use case: delete one expired resource, or only announce it in dry-run mode.
pub struct DeleteResourceUseCase {
    deleter: Arc<dyn ResourceDeleter>,
}

impl DeleteResourceUseCase {
    pub fn new(deleter: Arc<dyn ResourceDeleter>) -> Self {
        Self { deleter }
    }

    pub async fn execute(
        &self,
        resource: &ManagedResource,
        dry_run: bool,
    ) -> Result<DeletionOutcome, DomainError> {
        if dry_run {
            info!(
                kind = resource.kind(),
                name = %resource.name,
                "**DRY-RUN**: would delete resource"
            );
            return Ok(DeletionOutcome::Simulated);
        }

        info!(kind = resource.kind(), name = %resource.name, "Deleting resource..");

        match self.deleter.delete(&resource.handle).await {
            Ok(()) => Ok(DeletionOutcome::Deleted),
            Err(e) => {
                error!(
                    kind = resource.kind(),
                    name = %resource.name,
                    error = %e,
                    "Could not delete resource"
                );
                Err(into_deletion_failed(resource, e))
            }
        }
    }
}

fn into_deletion_failed(resource: &ManagedResource, e: DomainError) -> DomainError {
    match e {
        DomainError::DeletionFailed { .. } => e,
        other => DomainError::DeletionFailed {
            kind: resource.kind().to_string(),
            name: resource.name.clone(),
            reason: other.to_string(),
        },
    }
}
