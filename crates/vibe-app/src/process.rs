//! Message processing: run update() to a fixed point and dispatch actions

use tokio::sync::mpsc;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;
use crate::tasks::TaskRegistry;

/// Process a message through the TEA update function
///
/// Follow-up messages are processed immediately; actions are dispatched as
/// they are produced.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    tasks: &mut TaskRegistry,
) {
    tasks.prune_finished();

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), tasks);
        }
        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::input_key::InputKey;
    use crate::message::InputEdit;
    use crate::storage::MemoryStore;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_assistant_round_trip_through_event_loop() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut tasks = TaskRegistry::new();
        let mut state = AppState::new(Settings::default(), Box::new(MemoryStore::new()));

        process_message(
            &mut state,
            Message::Login {
                email: "a@b.com".into(),
                password: "x".into(),
            },
            &tx,
            &mut tasks,
        );
        for c in "create a file".chars() {
            process_message(
                &mut state,
                Message::AssistantInput(InputEdit::Char(c)),
                &tx,
                &mut tasks,
            );
        }
        process_message(&mut state, Message::AssistantSubmit, &tx, &mut tasks);
        assert_eq!(tasks.len(), 1);

        tokio::time::sleep(Duration::from_millis(2500)).await;
        let reply = rx.recv().await.unwrap();
        process_message(&mut state, reply, &tx, &mut tasks);

        let assistant = &state.workspace.as_ref().unwrap().assistant;
        assert!(!assistant.is_awaiting());
        assert!(assistant.messages.last().unwrap().is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sign_out_cancels_in_flight_reply() {
        let (tx, mut rx) = mpsc::channel(16);
        let mut tasks = TaskRegistry::new();
        let mut state = AppState::new(Settings::default(), Box::new(MemoryStore::new()));

        process_message(
            &mut state,
            Message::Login {
                email: "a@b.com".into(),
                password: "x".into(),
            },
            &tx,
            &mut tasks,
        );
        process_message(
            &mut state,
            Message::AssistantInput(InputEdit::Char('?')),
            &tx,
            &mut tasks,
        );
        process_message(&mut state, Message::AssistantSubmit, &tx, &mut tasks);
        process_message(&mut state, Message::Key(InputKey::F(10)), &tx, &mut tasks);
        assert!(tasks.is_empty());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.try_recv().is_err());
    }
}
