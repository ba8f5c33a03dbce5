use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use trainingportal_janitor_application::ports::{
    ClusterConnector, ClusterSession, ResourceDeleter, ResourceLister,
};
use trainingportal_janitor_domain::{
    Annotations, DomainError, ManagedResource, ResourceHandle, ResourceKind, EXPIRY_ANNOTATION,
};

pub fn make_expiring_portal(name: &str, expires: &str) -> ManagedResource {
    let mut annotations = Annotations::new();
    annotations.insert(EXPIRY_ANNOTATION.to_string(), expires.to_string());
    ManagedResource::new(ResourceKind::training_portal(), name, Some(annotations))
}

pub struct MockResourceClient {
    resources: Arc<RwLock<Vec<ManagedResource>>>,
    list_should_fail: Arc<RwLock<bool>>,
    delete_calls: Arc<AtomicU64>,
}

impl MockResourceClient {
    pub fn with_resources(resources: Vec<ManagedResource>) -> Self {
        Self {
            resources: Arc::new(RwLock::new(resources)),
            list_should_fail: Arc::new(RwLock::new(false)),
            delete_calls: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_list_should_fail(&self, fail: bool) {
        *self.list_should_fail.write().await = fail;
    }

    pub async fn names(&self) -> Vec<String> {
        self.resources
            .read()
            .await
            .iter()
            .map(|r| r.name.clone())
            .collect()
    }

    pub fn delete_calls(&self) -> u64 {
        self.delete_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ResourceLister for MockResourceClient {
    async fn list(&self, kind: &ResourceKind) -> Result<Vec<ManagedResource>, DomainError> {
        if *self.list_should_fail.read().await {
            return Err(DomainError::ListingFailed {
                kind: kind.kind.clone(),
                reason: "the server could not find the requested resource".to_string(),
            });
        }
        Ok(self.resources.read().await.clone())
    }
}

#[async_trait]
impl ResourceDeleter for MockResourceClient {
    async fn delete(&self, handle: &ResourceHandle) -> Result<(), DomainError> {
        self.delete_calls.fetch_add(1, Ordering::Relaxed);
        self.resources
            .write()
            .await
            .retain(|r| r.handle.name != handle.name);
        Ok(())
    }
}

/// Hands out sessions over a shared mock client and counts how often it was asked.
pub struct MockClusterConnector {
    client: Arc<MockResourceClient>,
    connect_calls: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockClusterConnector {
    pub fn new(client: Arc<MockResourceClient>) -> Self {
        Self {
            client,
            connect_calls: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub fn connect_calls(&self) -> u64 {
        self.connect_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ClusterConnector for MockClusterConnector {
    async fn connect(&self) -> Result<ClusterSession, DomainError> {
        self.connect_calls.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::ConnectionFailed(
                "no in-cluster or kubeconfig credentials".to_string(),
            ));
        }
        Ok(ClusterSession::new(self.client.clone(), self.client.clone()))
    }
}
