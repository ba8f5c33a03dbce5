pub mod janitor;

pub use janitor::{JanitorJob, JobExit};
