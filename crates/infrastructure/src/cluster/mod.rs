pub mod connector;
pub mod credentials;
pub mod errors;
pub mod resource_client;

pub use connector::KubeClusterConnector;
pub use credentials::load_in_cluster_with_fallback;
pub use resource_client::KubeResourceClient;
