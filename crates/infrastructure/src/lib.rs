//! Kubernetes adapters for the janitor ports.
pub mod cluster;

pub use cluster::{KubeClusterConnector, KubeResourceClient};
