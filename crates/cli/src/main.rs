use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use trainingportal_janitor_domain::{LogFormat, RunConfig, DEFAULT_INTERVAL_SECS};
use trainingportal_janitor_infrastructure::KubeClusterConnector;
use trainingportal_janitor_jobs::JanitorJob;

mod bootstrap;

#[derive(Parser, Debug)]
#[command(name = "trainingportal-janitor")]
#[command(version)]
#[command(about = "Deletes TrainingPortal resources once their janitor/expires annotation has passed")]
struct Cli {
    /// Dry run mode: do everything but actually delete
    #[arg(long, env = "JANITOR_DRY_RUN")]
    dry_run: bool,

    /// Verbose logging
    #[arg(short, long, env = "JANITOR_VERBOSE")]
    verbose: bool,

    /// Run loop only once and exit
    #[arg(long, env = "JANITOR_ONCE")]
    once: bool,

    /// Loop interval in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        env = "JANITOR_INTERVAL",
        default_value_t = DEFAULT_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval: u64,

    /// Log output format (pretty, json)
    #[arg(long, env = "JANITOR_LOG_FORMAT", default_value = "pretty")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    bootstrap::init_logging(cli.verbose, cli.log_format);

    let config = RunConfig::new(cli.dry_run, cli.verbose, cli.once, cli.interval)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        log_format = cli.log_format.to_str(),
        "TrainingPortal Janitor started with {}",
        config
    );

    if config.dry_run {
        info!("**DRY-RUN**: no deletions will be performed!");
    }

    let shutdown = CancellationToken::new();
    bootstrap::listen_for_shutdown(shutdown.clone())?;

    let connector = Arc::new(KubeClusterConnector::new());
    let exit = JanitorJob::new(connector, config)
        .with_cancellation(shutdown)
        .run()
        .await;

    info!(?exit, "TrainingPortal Janitor stopped");
    Ok(())
}
