//! Deterministic scheduler driven by explicit time advancement

use super::{Scheduler, TimerEvent, TimerHandle};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Virtual clock with an ordered queue of pending events.
///
/// Events become due in (due time, schedule order). Time only moves when the
/// owner pops due events or settles the clock.
#[derive(Debug, Default)]
pub struct VirtualClock {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, u64), TimerEvent>,
    due_by_id: HashMap<u64, Duration>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the clock was created
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of events still waiting to fire
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the next pending event
    pub fn next_due(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Pop the earliest event due at or before `until`, moving the clock to
    /// its due time.
    ///
    /// Callers handle the event (which may schedule more) before popping the
    /// next one, so chained events inside the window fire in order.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerEvent> {
        let key = *self.queue.keys().next()?;
        if key.0 > until {
            return None;
        }
        let event = self.queue.remove(&key)?;
        self.due_by_id.remove(&key.1);
        self.now = self.now.max(key.0);
        Some(event)
    }

    /// Move the clock forward to `until` without firing anything
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for VirtualClock {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let due = self.now + delay;
        self.queue.insert((due, id), event);
        self.due_by_id.insert(id, due);
        TimerHandle(id)
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.due_by_id.remove(&handle.0) {
            Some(due) => self.queue.remove(&(due, handle.0)).is_some(),
            None => false,
        }
    }
}
