//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;
use vibe_app::process::process_message;
use vibe_app::signals;
use vibe_app::{AppState, Message, TaskRegistry};
use vibe_core::prelude::*;

use crate::{event, render, terminal};

/// Run the workbench until the user quits or a signal arrives
pub async fn run(mut state: AppState) -> Result<()> {
    let mut term = terminal::init();

    // Unified channel for the signal handler and delayed assistant replies
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    let mut tasks = TaskRegistry::new();
    info!("Vibe Workbench started");

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &mut tasks);

    // Nothing may touch the state once the loop is gone
    tasks.cancel_all();
    terminal::restore();

    if let Err(ref e) = result {
        error!("Event loop failed: {}", e);
    }
    info!("Vibe Workbench exiting");
    result
}

/// Main event loop: drain background messages, draw, poll the terminal
fn run_loop(
    term: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    tasks: &mut TaskRegistry,
) -> Result<()> {
    while !state.should_quit() {
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, tasks);
        }

        term.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, tasks);
        }
    }

    Ok(())
}
