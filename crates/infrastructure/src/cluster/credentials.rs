use kube::config::KubeConfigOptions;
use kube::Config;
use tracing::debug;
use trainingportal_janitor_domain::DomainError;

/// Service-account credentials when running in a pod, otherwise the local kubeconfig.
pub async fn load_in_cluster_with_fallback() -> Result<Config, DomainError> {
    debug!("Attempting to load in cluster config");
    match Config::incluster() {
        Ok(config) => Ok(config),
        Err(e) => {
            debug!(error = %e, "Couldn't load in cluster config");
            debug!("Attempting to load local client config");
            Config::from_kubeconfig(&KubeConfigOptions::default())
                .await
                .map_err(|e| {
                    DomainError::ConnectionFailed(format!("Failed to load kubeconfig: {}", e))
                })
        }
    }
}
