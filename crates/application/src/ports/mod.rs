mod cluster_connector;
mod resource_deleter;
mod resource_lister;

pub use cluster_connector::{ClusterConnector, ClusterSession};
pub use resource_deleter::ResourceDeleter;
pub use resource_lister::ResourceLister;
