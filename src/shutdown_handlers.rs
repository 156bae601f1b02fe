use crate::shutdown::{ShutdownSender, ShutdownSignal};

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

#[must_use]
pub fn shutdown_channel() -> (ShutdownSender, ShutdownSignal) {
    ShutdownSignal::channel()
}

/// Fires the shutdown signal on Ctrl+C (and SIGTERM on unix).
///
/// The returned task runs until a signal arrives; callers abort it once the
/// run has finished.
pub fn setup_signal_shutdown_handler(shutdown_tx: &ShutdownSender) -> tokio::task::JoinHandle<()> {
    let shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        #[cfg(unix)]
        let mut term_signal = match signal(SignalKind::terminate()) {
            Ok(signal) => Some(signal),
            Err(err) => {
                tracing::warn!("Failed to register SIGTERM handler: {}", err);
                None
            }
        };

        #[cfg(unix)]
        {
            tokio::select! {
                result = tokio::signal::ctrl_c() => {
                    if let Err(err) = result {
                        tracing::warn!("Failed to listen for Ctrl+C: {}", err);
                        return;
                    }
                }
                () = async {
                    if let Some(signal) = term_signal.as_mut() {
                        signal.recv().await;
                    } else {
                        std::future::pending::<()>().await;
                    }
                } => {}
            }
        }

        #[cfg(not(unix))]
        {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for Ctrl+C: {}", err);
                return;
            }
        }

        tracing::warn!("Interrupt received; cancelling in-flight requests.");
        drop(shutdown_tx.send(true));
    })
}
