use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use trainingportal_janitor_application::ports::{ResourceDeleter, ResourceLister};
use trainingportal_janitor_domain::{
    Annotations, DomainError, ManagedResource, ResourceHandle, ResourceKind, EXPIRY_ANNOTATION,
};

pub fn make_portal(name: &str) -> ManagedResource {
    ManagedResource::new(ResourceKind::training_portal(), name, None)
}

pub fn make_expiring_portal(name: &str, expires: &str) -> ManagedResource {
    let mut annotations = Annotations::new();
    annotations.insert(EXPIRY_ANNOTATION.to_string(), expires.to_string());
    ManagedResource::new(ResourceKind::training_portal(), name, Some(annotations))
}

/// In-memory stand-in for the cluster: lists what it holds, deletes by name.
pub struct MockResourceClient {
    resources: Arc<RwLock<Vec<ManagedResource>>>,
    deleted: Arc<RwLock<Vec<String>>>,
    failing_deletes: Arc<RwLock<HashSet<String>>>,
    list_should_fail: Arc<RwLock<bool>>,
    list_calls: Arc<AtomicU64>,
    delete_calls: Arc<AtomicU64>,
}

impl MockResourceClient {
    pub fn new() -> Self {
        Self::with_resources(Vec::new())
    }

    pub fn with_resources(resources: Vec<ManagedResource>) -> Self {
        Self {
            resources: Arc::new(RwLock::new(resources)),
            deleted: Arc::new(RwLock::new(Vec::new())),
            failing_deletes: Arc::new(RwLock::new(HashSet::new())),
            list_should_fail: Arc::new(RwLock::new(false)),
            list_calls: Arc::new(AtomicU64::new(0)),
            delete_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_list_should_fail(&self, fail: bool) {
        *self.list_should_fail.write().await = fail;
    }

    pub async fn fail_delete_of(&self, name: &str) {
        self.failing_deletes.write().await.insert(name.to_string());
    }

    pub async fn deleted(&self) -> Vec<String> {
        self.deleted.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.resources.read().await.len()
    }

    pub fn list_calls(&self) -> u64 {
        self.list_calls.load(Ordering::Relaxed)
    }

    pub fn delete_calls(&self) -> u64 {
        self.delete_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ResourceLister for MockResourceClient {
    async fn list(&self, kind: &ResourceKind) -> Result<Vec<ManagedResource>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::Relaxed);
        if *self.list_should_fail.read().await {
            return Err(DomainError::ListingFailed {
                kind: kind.kind.clone(),
                reason: "connection refused".to_string(),
            });
        }
        Ok(self
            .resources
            .read()
            .await
            .iter()
            .filter(|r| &r.handle.kind == kind)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ResourceDeleter for MockResourceClient {
    async fn delete(&self, handle: &ResourceHandle) -> Result<(), DomainError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        if self.failing_deletes.read().await.contains(&handle.name) {
            return Err(DomainError::Forbidden(format!(
                "cannot delete {}",
                handle.name
            )));
        }

        let mut resources = self.resources.write().await;
        let before = resources.len();
        resources.retain(|r| r.handle.name != handle.name);
        if resources.len() == before {
            return Err(DomainError::NotFound(handle.name.clone()));
        }

        self.deleted.write().await.push(handle.name.clone());
        Ok(())
    }
}
