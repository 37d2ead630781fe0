//! Cancellable delayed tasks
//!
//! A [`DelayedTask`] owns the tokio task it spawned: cancelling or dropping
//! the handle aborts the task, so a timer can never fire after whatever
//! scheduled it has been torn down.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use vibe_core::prelude::*;

/// Handle to a future that runs after a delay
#[derive(Debug)]
pub struct DelayedTask {
    handle: Option<JoinHandle<()>>,
}

impl DelayedTask {
    /// Spawn `work` to run once `delay` has elapsed
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(delay: Duration, work: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Abort the task if it has not completed yet
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Live delayed tasks keyed by request id
#[derive(Debug, Default)]
pub struct TaskRegistry {
    tasks: HashMap<u64, DelayedTask>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a task; an existing task under the same key is cancelled
    pub fn insert(&mut self, key: u64, task: DelayedTask) {
        if let Some(mut previous) = self.tasks.insert(key, task) {
            previous.cancel();
        }
    }

    /// Forget tasks that already ran
    pub fn prune_finished(&mut self) {
        self.tasks.retain(|_, task| !task.is_finished());
    }

    pub fn cancel_all(&mut self) {
        let count = self.tasks.len();
        for (_, mut task) in self.tasks.drain() {
            task.cancel();
        }
        if count > 0 {
            debug!("Cancelled {} pending task(s)", count);
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_task_runs_after_delay() {
        let (tx, mut rx) = mpsc::channel(1);
        let task = DelayedTask::start(Duration::from_millis(2000), async move {
            let _ = tx.send(7u32).await;
        });

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(7));
        drop(task);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::channel::<u32>(1);
        let mut task = DelayedTask::start(Duration::from_millis(100), async move {
            let _ = tx.send(1).await;
        });
        task.cancel();
        assert!(task.is_finished());

        tokio::time::sleep(Duration::from_millis(500)).await;
        // Sender was dropped with the aborted task
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::channel::<u32>(1);
        {
            let _task = DelayedTask::start(Duration::from_millis(100), async move {
                let _ = tx.send(1).await;
            });
        }
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_registry_cancel_all() {
        let (tx, mut rx) = mpsc::channel::<u64>(4);
        let mut registry = TaskRegistry::new();
        for id in 0..3 {
            let tx = tx.clone();
            registry.insert(
                id,
                DelayedTask::start(Duration::from_millis(50), async move {
                    let _ = tx.send(id).await;
                }),
            );
        }
        drop(tx);
        assert_eq!(registry.len(), 3);

        registry.cancel_all();
        assert!(registry.is_empty());
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_registry_prunes_finished() {
        let mut registry = TaskRegistry::new();
        registry.insert(1, DelayedTask::start(Duration::from_millis(10), async {}));
        tokio::time::sleep(Duration::from_millis(20)).await;
        tokio::task::yield_now().await;
        registry.prune_finished();
        assert!(registry.is_empty());
    }
}
