// Coalesces bursts of requests (keystrokes) into one action after a quiet
// window. Every new ticket supersedes the ones issued before it; a ticket
// only "settles" if no newer ticket was issued while it slept.
//
// Runtime-agnostic in the sense that nothing is spawned here: the caller
// awaits `settle()` on whatever task it likes (a Dioxus `spawn`, a tokio
// task, a test). Timers come from `tokio::time`.
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_window: Duration,
    latest: Arc<AtomicU64>,
}

#[derive(Debug)]
pub struct Ticket {
    id: u64,
    quiet_window: Duration,
    latest: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(quiet_window: Duration) -> Self {
        Self {
            quiet_window,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn quiet_window(&self) -> Duration {
        self.quiet_window
    }

    /// Registers a new request, superseding every earlier ticket.
    pub fn ticket(&self) -> Ticket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket {
            id,
            quiet_window: self.quiet_window,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Waits out the quiet window and runs `action` only if no newer request
    /// arrived meanwhile. Returns `None` when superseded.
    pub async fn run<F, Fut, T>(&self, action: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let ticket = self.ticket();
        if ticket.settle().await {
            Some(action().await)
        } else {
            tracing::trace!(ticket = ticket.id, "Debounced call superseded");
            None
        }
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }

    /// Sleeps for the quiet window, then reports whether this is still the
    /// latest request.
    pub async fn settle(&self) -> bool {
        tokio::time::sleep(self.quiet_window).await;
        self.is_current()
    }
}
