//! Cancellable single-threaded deadline queue
//!
//! The only asynchronous primitive in the crate. Entries are armed with an
//! explicit `now` and fire when the host event loop pumps `fire_due`.
//! Cancelling a handle strictly before its deadline removes the entry, so
//! a cancelled timer can never deliver its payload — there is no race
//! window on the single UI thread.

use std::time::{Duration, Instant};

/// Opaque handle identifying one scheduled entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

struct Entry<T> {
    handle: TimerHandle,
    deadline: Instant,
    payload: T,
}

/// Deadline queue with cancellation
pub struct TimerQueue<T> {
    next_handle: u64,
    entries: Vec<Entry<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            entries: Vec::new(),
        }
    }

    /// Arm a timer that becomes due `delay` after `now`
    pub fn schedule(&mut self, delay: Duration, now: Instant, payload: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            deadline: now + delay,
            payload,
        });
        handle
    }

    /// Remove a pending entry. Returns whether anything was cancelled;
    /// cancelling an already-fired or unknown handle is a no-op.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    /// Whether the handle still refers to a pending entry
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.entries.iter().any(|entry| entry.handle == handle)
    }

    /// Earliest deadline among pending entries
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Remove and return the payloads of all entries due at `now`,
    /// ordered by deadline.
    pub fn fire_due(&mut self, now: Instant) -> Vec<T> {
        let mut due: Vec<Entry<T>> = Vec::new();
        let mut remaining: Vec<Entry<T>> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.deadline <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;
        due.sort_by_key(|entry| entry.deadline);
        due.into_iter().map(|entry| entry.payload).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_after_deadline() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::from_millis(100), now, "a");

        assert!(queue.fire_due(now).is_empty());
        assert!(queue
            .fire_due(now + Duration::from_millis(99))
            .is_empty());
        assert_eq!(queue.fire_due(now + Duration::from_millis(100)), vec!["a"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel_before_expiry_prevents_firing() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(Duration::from_millis(50), now, "a");

        assert!(queue.cancel(handle));
        // Pumping well past the deadline delivers nothing.
        assert!(queue.fire_due(now + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(Duration::from_millis(50), now, "a");

        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
    }

    #[test]
    fn test_due_entries_fire_in_deadline_order() {
        let now = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(Duration::from_millis(30), now, "late");
        queue.schedule(Duration::from_millis(10), now, "early");

        assert_eq!(
            queue.fire_due(now + Duration::from_millis(40)),
            vec!["early", "late"]
        );
    }

    #[test]
    fn test_next_deadline_tracks_earliest() {
        let now = Instant::now();
        let mut queue: TimerQueue<()> = TimerQueue::new();
        assert_eq!(queue.next_deadline(), None);

        queue.schedule(Duration::from_millis(30), now, ());
        let early = queue.schedule(Duration::from_millis(10), now, ());
        assert_eq!(queue.next_deadline(), Some(now + Duration::from_millis(10)));

        queue.cancel(early);
        assert_eq!(queue.next_deadline(), Some(now + Duration::from_millis(30)));
    }
}
