// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtual-clock timer queue.

use alloc::vec::Vec;
use core::time::Duration;

use crate::host::{TimerHost, TimerId};

/// Smallest period a repeating timer may have.
///
/// Shorter periods (including zero) are clamped to this value so that a single
/// repeating timer can never keep [`TimerQueue::pop_due`] busy forever.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A timer that elapsed during [`TimerQueue::pop_due`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Fired {
    /// The timer that fired.
    pub id: TimerId,
    /// Clock time at which it fired.
    pub at: Duration,
}

#[derive(Copy, Clone, Debug)]
struct Entry {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
}

/// A deterministic timer queue driven by an explicit virtual clock.
///
/// The clock starts at zero and only moves when the host calls
/// [`pop_due`](Self::pop_due) or [`advance_to`](Self::advance_to).
/// Timers due at the same instant fire in the order they were armed.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
}

impl TimerQueue {
    /// Creates an empty queue with the clock at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current clock time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no timer is armed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `id` is still armed.
    #[must_use]
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Earliest time at which some timer is due, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Fires the earliest timer due at or before `deadline`.
    ///
    /// The clock moves to the fired timer's due time. Repeating timers are
    /// re-armed one period later; one-shot timers are released. Returns `None`
    /// once nothing is due by `deadline`, leaving the clock where the last
    /// timer fired; call [`advance_to`](Self::advance_to) to settle it.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Fired> {
        let slot = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= deadline)
            .min_by_key(|(_, e)| (e.due, e.id))
            .map(|(slot, _)| slot)?;

        let entry = self.entries[slot];
        self.now = self.now.max(entry.due);
        match entry.period {
            Some(period) => self.entries[slot].due = entry.due.saturating_add(period),
            None => {
                self.entries.remove(slot);
            }
        }
        Some(Fired {
            id: entry.id,
            at: entry.due,
        })
    }

    /// Moves the clock forward to `deadline` without firing anything.
    ///
    /// The clock never moves backward. Timers that became due in between stay
    /// pending and fire on the next [`pop_due`](Self::pop_due).
    pub fn advance_to(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    fn arm(&mut self, delay: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId::from_raw(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now.saturating_add(delay),
            period,
        });
        id
    }
}

impl TimerHost for TimerQueue {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.arm(period, Some(period))
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.arm(delay, None)
    }

    fn clear(&mut self, id: TimerId) {
        self.entries.retain(|e| e.id != id);
    }
}
