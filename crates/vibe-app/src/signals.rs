//! Process signals that end a workbench session
//!
//! A signal is turned into [`Message::Quit`] on the same channel that carries
//! assistant replies, so the runner leaves its loop through the normal path:
//! pending reply timers are cancelled and the terminal is restored.

use std::fmt;

use tokio::sync::mpsc;
use vibe_core::prelude::*;

use crate::message::Message;

/// Which outside request ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
    /// The controlling terminal went away (window closed, ssh dropped)
    Hangup,
    CtrlC,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
            ShutdownSignal::Hangup => "SIGHUP",
            ShutdownSignal::CtrlC => "Ctrl+C",
        };
        f.write_str(name)
    }
}

/// Listen in the background and post [`Message::Quit`] on the first signal
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let signal = match next_signal().await {
            Ok(signal) => signal,
            Err(e) => {
                error!("Signal listener unavailable: {}", e);
                return;
            }
        };

        info!("{} received; closing the workbench", signal);
        if tx.send(Message::Quit).await.is_err() {
            debug!("Event loop already gone; quit not delivered");
        }
    });
}

async fn next_signal() -> Result<ShutdownSignal> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let listen = |kind: SignalKind, name: &str| {
            signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {}: {}", name, e)))
        };
        let mut sigint = listen(SignalKind::interrupt(), "SIGINT")?;
        let mut sigterm = listen(SignalKind::terminate(), "SIGTERM")?;
        let mut sighup = listen(SignalKind::hangup(), "SIGHUP")?;

        let received = tokio::select! {
            _ = sigint.recv() => ShutdownSignal::Interrupt,
            _ = sigterm.recv() => ShutdownSignal::Terminate,
            _ = sighup.recv() => ShutdownSignal::Hangup,
        };
        Ok(received)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
        Ok(ShutdownSignal::CtrlC)
    }
}
