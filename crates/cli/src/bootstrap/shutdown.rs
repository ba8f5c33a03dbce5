use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Cancels `token` on the first termination signal. Registered once at startup.
#[cfg(unix)]
pub fn listen_for_shutdown(token: CancellationToken) -> anyhow::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm =
        signal(SignalKind::terminate()).context("Failed to create SIGTERM handler")?;
    let mut sigint = signal(SignalKind::interrupt()).context("Failed to create SIGINT handler")?;
    let mut sighup = signal(SignalKind::hangup()).context("Failed to create SIGHUP handler")?;

    tokio::spawn(async move {
        tokio::select! {
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down gracefully"),
            _ = sigint.recv() => info!("Received SIGINT, shutting down gracefully"),
            _ = sighup.recv() => info!("Received SIGHUP, shutting down gracefully"),
        }
        token.cancel();
    });

    Ok(())
}

#[cfg(not(unix))]
pub fn listen_for_shutdown(token: CancellationToken) -> anyhow::Result<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl-C, shutting down gracefully");
                token.cancel();
            }
            Err(e) => tracing::warn!(error = %e, "Ctrl-C handler unavailable"),
        }
    });

    Ok(())
}
