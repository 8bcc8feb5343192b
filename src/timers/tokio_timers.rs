//! Wall-clock scheduler backed by tokio tasks

use super::{Scheduler, TimerEvent, TimerHandle};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Scheduler that sleeps on the tokio timer wheel.
///
/// Each scheduled event is a spawned task that sends the event back once its
/// delay elapsed; [`TokioTimers::next_fired`] yields them. Must be used from
/// within a tokio runtime.
pub struct TokioTimers {
    next_id: u64,
    tasks: HashMap<u64, AbortHandle>,
    tx: mpsc::UnboundedSender<(u64, TimerEvent)>,
    rx: mpsc::UnboundedReceiver<(u64, TimerEvent)>,
}

impl TokioTimers {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            next_id: 0,
            tasks: HashMap::new(),
            tx,
            rx,
        }
    }

    /// Number of scheduled events not yet delivered
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Wait for the next event to fire.
    ///
    /// Returns `None` immediately when nothing is pending. Events whose
    /// handle was cancelled after the sleep finished are dropped here.
    pub async fn next_fired(&mut self) -> Option<TimerEvent> {
        while !self.tasks.is_empty() {
            let (id, event) = self.rx.recv().await?;
            if self.tasks.remove(&id).is_some() {
                return Some(event);
            }
            tracing::trace!(id, "dropping cancelled timer event");
        }
        None
    }
}

impl Default for TokioTimers {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for task in self.tasks.values() {
            task.abort();
        }
    }
}

impl Scheduler for TokioTimers {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;

        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver lives as long as the scheduler; a send error means it
            // was dropped and nobody is listening anymore.
            let _ = tx.send((id, event));
        });
        self.tasks.insert(id, task.abort_handle());
        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.tasks.remove(&handle.0) {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }
}
