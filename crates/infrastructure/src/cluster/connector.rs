use async_trait::async_trait;
use kube::Client;
use std::sync::Arc;
use trainingportal_janitor_application::ports::{ClusterConnector, ClusterSession};
use trainingportal_janitor_domain::DomainError;

use super::credentials::load_in_cluster_with_fallback;
use super::KubeResourceClient;

/// Loads credentials and builds a new `kube::Client` on every call.
#[derive(Default)]
pub struct KubeClusterConnector;

impl KubeClusterConnector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClusterConnector for KubeClusterConnector {
    async fn connect(&self) -> Result<ClusterSession, DomainError> {
        let config = load_in_cluster_with_fallback().await?;
        let client = Client::try_from(config).map_err(|e| {
            DomainError::ConnectionFailed(format!("Failed to build cluster client: {}", e))
        })?;

        let resources = Arc::new(KubeResourceClient::new(client));
        Ok(ClusterSession::new(resources.clone(), resources))
    }
}
