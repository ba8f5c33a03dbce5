pub mod delete_resource;
pub mod sweep_expired_resources;

pub use delete_resource::{DeleteResourceUseCase, DeletionOutcome};
pub use sweep_expired_resources::SweepExpiredResourcesUseCase;
