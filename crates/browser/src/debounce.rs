//! Coalescing timer for rapid input.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Delays a callback until calls stop arriving for `delay`.
///
/// Holds at most one scheduled invocation. Each [`Debouncer::call`] aborts
/// the pending one (if it has not fired yet) and schedules a fresh one with
/// the new arguments, so a burst of calls runs the callback once, with the
/// arguments of the last call.
///
/// Scheduling uses `tokio::spawn`; calls must happen inside a tokio runtime.
pub struct Debouncer<A> {
    delay: Duration,
    callback: Arc<dyn Fn(A) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<A> Debouncer<A>
where
    A: Send + 'static,
{
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    /// Schedule the callback with `args`, superseding any pending call.
    pub fn call(&mut self, args: A) {
        self.cancel();

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(args);
        }));
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether an invocation is scheduled but has not finished.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<A> core::fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}
