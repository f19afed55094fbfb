//! OS shutdown signals, delivered to the update loop as [`Message::Quit`]

use std::fmt;

use mealdeck_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Signal that ends a mealdeck session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT, or Ctrl+C outside unix
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// Listen for a shutdown signal and quit the session when one arrives
///
/// Crossterm raw mode swallows Ctrl+C as a key press, so in the TUI this only
/// fires for signals sent from outside (`kill`, a closing terminal). Headless
/// runs rely on it for Ctrl+C too.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let signal = match next_shutdown_signal().await {
            Ok(signal) => signal,
            Err(e) => {
                warn!("Shutdown signals unavailable, quit with 'q': {}", e);
                return;
            }
        };

        info!("{} received, ending mealdeck session", signal);
        if tx.send(Message::Quit).await.is_err() {
            debug!("Update loop already gone when {} arrived", signal);
        }
    });
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, signal_name: ShutdownSignal| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {signal_name}: {e}")))
    };
    let mut interrupt = listen(SignalKind::interrupt(), ShutdownSignal::Interrupt)?;
    let mut terminate = listen(SignalKind::terminate(), ShutdownSignal::Terminate)?;

    let signal = tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    };
    Ok(signal)
}

#[cfg(not(unix))]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {e}")))?;
    Ok(ShutdownSignal::Interrupt)
}
