use chrono::Utc;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use trainingportal_janitor_application::ports::ClusterConnector;
use trainingportal_janitor_application::use_cases::{
    DeleteResourceUseCase, SweepExpiredResourcesUseCase,
};
use trainingportal_janitor_domain::{DomainError, ResourceKind, RunConfig, RunSummary};

/// Why [`JanitorJob::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobExit {
    /// Run-once mode finished its single sweep.
    Completed,
    /// The shutdown token was cancelled.
    Shutdown,
}

/// Background job that sweeps expired training portals on a fixed interval.
///
///   - A new cluster session is built at the top of every iteration
///   - A failed sweep is logged and the loop carries on
///   - Shutdown is checked after each sweep and interrupts the sleep between sweeps
pub struct JanitorJob {
    connector: Arc<dyn ClusterConnector>,
    config: RunConfig,
    kind: ResourceKind,
    shutdown: CancellationToken,
}

impl JanitorJob {
    pub fn new(connector: Arc<dyn ClusterConnector>, config: RunConfig) -> Self {
        Self {
            connector,
            config,
            kind: ResourceKind::training_portal(),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self) -> tokio::task::JoinHandle<JobExit> {
        tokio::spawn(async move { self.run().await })
    }

    pub async fn run(&self) -> JobExit {
        info!(
            interval_secs = self.config.interval_secs(),
            dry_run = self.config.dry_run,
            once = self.config.once,
            "Starting janitor job"
        );

        let mut iteration: u64 = 0;
        loop {
            iteration += 1;

            match self.sweep().await {
                Ok(summary) => {
                    info!(iteration, stats = %summary, "Clean up run completed");
                }
                Err(e) => {
                    error!(iteration, error = %e, "Failed while running clean up loop");
                }
            }

            if self.config.once {
                info!("JanitorJob: single run finished");
                return JobExit::Completed;
            }
            if self.shutdown.is_cancelled() {
                info!("JanitorJob: shutting down");
                return JobExit::Shutdown;
            }

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("JanitorJob: shutting down");
                    return JobExit::Shutdown;
                }
                _ = tokio::time::sleep(self.config.interval()) => {}
            }
        }
    }

    /// One sweep against a freshly connected cluster session.
    pub async fn sweep(&self) -> Result<RunSummary, DomainError> {
        let session = self.connector.connect().await?;
        let sweep = SweepExpiredResourcesUseCase::new(
            session.lister,
            DeleteResourceUseCase::new(session.deleter),
            self.kind.clone(),
        );
        sweep
            .execute(Utc::now().naive_utc(), self.config.dry_run)
            .await
    }
}
