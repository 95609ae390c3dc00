//! Single-slot debounce timer.
//!
//! At most one timer is armed at a time. Arming a new one aborts the previous task,
//! so a burst of keystrokes produces exactly one [`Event::DebounceElapsed`].

use crate::app::Event;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

#[derive(Debug, Default)]
pub struct Debouncer {
    pending: Option<(u64, JoinHandle<()>)>,
}

impl Debouncer {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Arms a timer that sends `DebounceElapsed { ticket }` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&mut self, ticket: u64, delay: Duration, events: UnboundedSender<Event>) {
        self.cancel();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session was dropped.
            let _ = events.send(Event::DebounceElapsed { ticket });
        });

        tracing::trace!(ticket, delay_ms = delay.as_millis(), "debounce armed");
        self.pending = Some((ticket, handle));
    }

    pub fn cancel(&mut self) {
        if let Some((ticket, handle)) = self.pending.take() {
            handle.abort();
            tracing::trace!(ticket, "debounce cancelled");
        }
    }

    /// Disarms the slot once the timer for `ticket` has delivered its event.
    pub fn fired(&mut self, ticket: u64) {
        if matches!(self.pending, Some((armed, _)) if armed == ticket) {
            self.pending = None;
        }
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn rearming_replaces_pending_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new();

        debouncer.schedule(1, Duration::from_millis(500), tx.clone());
        debouncer.schedule(2, Duration::from_millis(500), tx);
        assert!(debouncer.is_armed());

        assert_eq!(rx.recv().await, Some(Event::DebounceElapsed { ticket: 2 }));
        debouncer.fired(2);
        assert!(!debouncer.is_armed());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new();

        debouncer.schedule(1, Duration::from_millis(500), tx);
        debouncer.cancel();
        assert!(!debouncer.is_armed());

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_fire_keeps_newer_timer_armed() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new();

        debouncer.schedule(3, Duration::from_millis(500), tx);
        debouncer.fired(2);
        assert!(debouncer.is_armed());
    }
}
