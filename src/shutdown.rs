//! Graceful shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install interrupt handler: {0}")]
    Interrupt(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),

    #[cfg(windows)]
    #[error("failed to install Ctrl+Break handler: {0}")]
    CtrlBreak(#[source] io::Error),
}

/// Stop the server gracefully once an interrupt or terminate signal arrives.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let interrupt = async {
        // Ctrl+C on every platform
        signal::ctrl_c().await.map_err(ShutdownSignalError::Interrupt)
    };

    #[cfg(unix)]
    let terminate = async {
        // SIGTERM is what process managers send first
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;

        Ok::<(), ShutdownSignalError>(())
    };

    #[cfg(windows)]
    let terminate = async {
        signal::windows::ctrl_break()
            .map_err(ShutdownSignalError::CtrlBreak)?
            .recv()
            .await;

        Ok::<(), ShutdownSignalError>(())
    };

    tokio::select! {
        result = interrupt => {
            result?;
            tracing::info!("interrupt signal received");
        }
        result = terminate => {
            result?;
            tracing::info!("terminate signal received");
        }
    };

    // Stop accepting connections, let in-flight requests drain
    handle.stop_graceful(None);

    Ok(())
}
