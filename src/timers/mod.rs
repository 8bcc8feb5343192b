//! Scheduled-task abstraction
//!
//! Components never wait. They schedule a [`TimerEvent`] and get it handed
//! back through `Page::on_timer` once the delay elapsed. [`VirtualClock`]
//! drives this deterministically, [`TokioTimers`] against wall-clock time.

mod tokio_timers;
mod virtual_clock;

use serde::Serialize;
use std::time::Duration;

pub use tokio_timers::TokioTimers;
pub use virtual_clock::VirtualClock;

/// Work deferred by a page component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimerEvent {
    /// The simulated submission finished processing
    SubmissionProcessed,
    /// The success notice has been shown long enough
    HideSuccessNotice,
    /// A pressed element should spring back
    ReleasePress { target: String },
}

/// Handle to a scheduled event, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub(crate) u64);

/// Schedules events to be delivered after a delay
pub trait Scheduler {
    /// Schedule `event` to fire once `delay` has elapsed
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerHandle;

    /// Cancel a pending event. Returns false if it was already delivered or
    /// cancelled before.
    fn cancel(&mut self, handle: TimerHandle) -> bool;
}
