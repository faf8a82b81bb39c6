//! Shutdown on SIGINT/SIGTERM (Ctrl+C on Windows)
//!
//! The listener runs as a tokio task and turns the first termination signal
//! into a [`Message::Quit`] on the runner's channel. The runner aborts the
//! task once its loop exits.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::Message;
use aether_core::prelude::*;

/// Termination signal that ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    pub fn name(self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
        }
    }
}

/// Spawn the signal listener. Abort the returned handle to stop listening.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = match next_shutdown_signal().await {
            Ok(signal) => forward_shutdown(signal, &tx).await,
            Err(e) => Err(e),
        };

        if let Err(e) = outcome {
            error!("Signal handler stopped: {}", e);
        }
    })
}

/// Queue a quit for `signal`.
///
/// Fails with [`Error::ChannelClosed`] when the runner already dropped its
/// receiver.
async fn forward_shutdown(signal: ShutdownSignal, tx: &mpsc::Sender<Message>) -> Result<()> {
    info!("Received {}, shutting down", signal.name());
    tx.send(Message::Quit)
        .await
        .map_err(|_| Error::ChannelClosed)
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("SIGINT listener: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("SIGTERM listener: {}", e)))?;

    let received = tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
    };
    Ok(received)
}

#[cfg(windows)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C listener: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
