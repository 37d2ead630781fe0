//! Action handlers: UpdateAction dispatch and background task spawning

use tokio::sync::mpsc;
use vibe_core::prelude::*;

use crate::config::save_settings;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::tasks::{DelayedTask, TaskRegistry};

/// Execute an action returned by `update()`
///
/// Must be called from within a tokio runtime.
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, tasks: &mut TaskRegistry) {
    match action {
        UpdateAction::ScheduleAssistantReply {
            request_id,
            reply,
            delay,
        } => {
            let task = DelayedTask::start(delay, async move {
                if msg_tx
                    .send(Message::AssistantReplyReady { request_id, reply })
                    .await
                    .is_err()
                {
                    debug!("Assistant reply {} dropped: event loop closed", request_id);
                }
            });
            tasks.insert(request_id, task);
        }

        UpdateAction::CancelPendingTasks => tasks.cancel_all(),

        UpdateAction::PersistSettings { path, settings } => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = save_settings(&path, &settings) {
                    warn!("Failed to save settings: {}", e);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::respond;
    use crate::config::{load_settings, Settings};
    use std::time::Duration;
    use tempfile::tempdir;
    use vibe_core::Theme;

    #[tokio::test(start_paused = true)]
    async fn test_scheduled_reply_arrives_after_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut tasks = TaskRegistry::new();
        handle_action(
            UpdateAction::ScheduleAssistantReply {
                request_id: 3,
                reply: respond("hello"),
                delay: Duration::from_millis(2000),
            },
            tx,
            &mut tasks,
        );
        assert_eq!(tasks.len(), 1);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(rx.try_recv().is_err());

        match rx.recv().await {
            Some(Message::AssistantReplyReady { request_id, .. }) => assert_eq!(request_id, 3),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending_tasks_suppresses_reply() {
        let (tx, mut rx) = mpsc::channel(4);
        let mut tasks = TaskRegistry::new();
        handle_action(
            UpdateAction::ScheduleAssistantReply {
                request_id: 1,
                reply: respond("hello"),
                delay: Duration::from_millis(2000),
            },
            tx.clone(),
            &mut tasks,
        );
        handle_action(UpdateAction::CancelPendingTasks, tx, &mut tasks);
        assert!(tasks.is_empty());

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_persist_settings_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut settings = Settings::default();
        settings.ui.theme = Theme::Light;

        let (tx, _rx) = mpsc::channel(1);
        let mut tasks = TaskRegistry::new();
        handle_action(
            UpdateAction::PersistSettings {
                path: path.clone(),
                settings: Box::new(settings),
            },
            tx,
            &mut tasks,
        );

        for _ in 0..100 {
            if path.exists() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(load_settings(&path).ui.theme, Theme::Light);
    }
}
