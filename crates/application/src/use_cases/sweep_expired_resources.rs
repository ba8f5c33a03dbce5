use crate::ports::ResourceLister;
use crate::use_cases::DeleteResourceUseCase;
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::{debug, info, warn};
use trainingportal_janitor_domain::{
    evaluate, DomainError, ExpiryDecision, ManagedResource, ResourceKind, RunSummary,
    EXPIRY_ANNOTATION, RESOURCES_DELETED, RESOURCES_DELETE_FAILED, RESOURCES_WITH_EXPIRY,
};

/// Use case: one pass over every resource of a kind, deleting the expired ones.
///
/// Listing failures abort the sweep. Everything after that is contained per
/// resource, so a bad annotation or a rejected delete only affects that resource.
pub struct SweepExpiredResourcesUseCase {
    lister: Arc<dyn ResourceLister>,
    delete: DeleteResourceUseCase,
    kind: ResourceKind,
}

impl SweepExpiredResourcesUseCase {
    pub fn new(
        lister: Arc<dyn ResourceLister>,
        delete: DeleteResourceUseCase,
        kind: ResourceKind,
    ) -> Self {
        Self {
            lister,
            delete,
            kind,
        }
    }

    pub async fn execute(
        &self,
        now: NaiveDateTime,
        dry_run: bool,
    ) -> Result<RunSummary, DomainError> {
        debug!(api_version = %self.kind.api_version(), kind = %self.kind.kind, "Listing resources");
        let resources = self.lister.list(&self.kind).await?;
        debug!(count = resources.len(), "Resources listed");

        let mut summary = RunSummary::new();
        for resource in &resources {
            summary.merge(self.handle_resource(resource, now, dry_run).await);
        }

        Ok(summary)
    }

    async fn handle_resource(
        &self,
        resource: &ManagedResource,
        now: NaiveDateTime,
        dry_run: bool,
    ) -> RunSummary {
        let mut summary = RunSummary::new();

        let decision = evaluate(resource.annotations.as_ref(), now);
        match &decision {
            ExpiryDecision::NoExpiry => {}
            ExpiryDecision::Invalid(reason) => {
                warn!(
                    kind = resource.kind(),
                    name = %resource.name,
                    reason = %reason,
                    "Ignoring invalid expiry date"
                );
            }
            ExpiryDecision::Pending(_) => {
                debug!(
                    kind = resource.kind(),
                    name = %resource.name,
                    decision = %decision,
                    "Resource will expire later"
                );
            }
            ExpiryDecision::Expired(_) => {
                info!(
                    kind = resource.kind(),
                    name = %resource.name,
                    expires = resource.annotation(EXPIRY_ANNOTATION).unwrap_or_default(),
                    decision = %decision,
                    "Resource expired and will be deleted (annotation {} is set)",
                    EXPIRY_ANNOTATION
                );
                summary.increment(RESOURCES_WITH_EXPIRY);
                match self.delete.execute(resource, dry_run).await {
                    Ok(_) => summary.increment(RESOURCES_DELETED),
                    Err(_) => summary.increment(RESOURCES_DELETE_FAILED),
                }
            }
        }

        summary
    }
}
