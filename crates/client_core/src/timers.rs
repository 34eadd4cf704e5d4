//! Timer and background-task plumbing. Every task reports back through the
//! controller's event queue; nothing touches view state off the owning thread.

use std::{future::Future, time::Duration};

use tokio::{runtime::Handle, sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::debug;

use crate::events::KioskEvent;

/// Owned handle to a pending task. Dropping it cancels the task.
#[derive(Debug)]
pub struct TimerGuard(JoinHandle<()>);

impl TimerGuard {
    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

#[derive(Clone)]
pub struct Scheduler {
    runtime: Handle,
    events: UnboundedSender<KioskEvent>,
}

impl Scheduler {
    pub fn new(runtime: Handle, events: UnboundedSender<KioskEvent>) -> Self {
        Self { runtime, events }
    }

    /// Delivers `event` after `delay` unless the returned guard is dropped first.
    pub fn after(&self, delay: Duration, event: KioskEvent) -> TimerGuard {
        TimerGuard(self.runtime.spawn(deliver_after(self.events.clone(), delay, event)))
    }

    /// Delivers `event` after `delay`; the caller cannot cancel it.
    pub fn after_detached(&self, delay: Duration, event: KioskEvent) {
        drop(self.runtime.spawn(deliver_after(self.events.clone(), delay, event)));
    }

    /// Runs a request to completion and queues whatever event it resolves to.
    pub fn request<F>(&self, request: F)
    where
        F: Future<Output = KioskEvent> + Send + 'static,
    {
        let events = self.events.clone();
        drop(self.runtime.spawn(async move {
            let event = request.await;
            if events.send(event).is_err() {
                debug!("controller dropped before request completed");
            }
        }));
    }

    /// Spawns a long-running task whose lifetime is tied to the returned guard.
    pub fn scoped<F>(&self, task: F) -> TimerGuard
    where
        F: Future<Output = ()> + Send + 'static,
    {
        TimerGuard(self.runtime.spawn(task))
    }

    pub fn events(&self) -> UnboundedSender<KioskEvent> {
        self.events.clone()
    }
}

async fn deliver_after(events: UnboundedSender<KioskEvent>, delay: Duration, event: KioskEvent) {
    tokio::time::sleep(delay).await;
    let name = event.name();
    if events.send(event).is_err() {
        debug!(event = name, "controller dropped before timer fired");
    }
}
