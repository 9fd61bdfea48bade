// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay timer lifecycle.
//!
//! [`Autoplay`] owns at most one repeating timer on a [`TimerHost`]. It is
//! either stopped (no handle) or running (exactly one armed handle); starting
//! twice never stacks a second timer, and stopping always releases the handle.

use core::time::Duration;

use understory_timing::{TimerHost, TimerId};

/// Two-state autoplay timer: stopped or running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Autoplay {
    interval: Duration,
    handle: Option<TimerId>,
}

impl Autoplay {
    /// Creates a stopped timer that will tick every `interval` once started.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            handle: None,
        }
    }

    /// Tick period.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` while a timer is armed.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// The armed timer, if running.
    #[must_use]
    pub const fn handle(&self) -> Option<TimerId> {
        self.handle
    }

    /// Returns `true` if `id` is this autoplay's live timer.
    #[must_use]
    pub fn owns(&self, id: TimerId) -> bool {
        self.handle == Some(id)
    }

    /// Arms the repeating timer.
    ///
    /// Nothing happens unless `playing` is set and there is more than one
    /// slide to advance to, or if the timer is already running.
    /// Returns `true` if a timer was armed by this call.
    pub fn start(&mut self, host: &mut impl TimerHost, playing: bool, slide_count: usize) -> bool {
        if !playing || slide_count <= 1 || self.handle.is_some() {
            return false;
        }
        let id = host.set_interval(self.interval);
        tracing::trace!(%id, interval = ?self.interval, "autoplay armed");
        self.handle = Some(id);
        true
    }

    /// Releases the timer.
    ///
    /// Stopping a stopped timer is a no-op. Returns `true` if a timer was
    /// released by this call.
    pub fn stop(&mut self, host: &mut impl TimerHost) -> bool {
        let Some(id) = self.handle.take() else {
            return false;
        };
        host.clear(id);
        tracing::trace!(%id, "autoplay released");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use understory_timing::TimerQueue;

    const INTERVAL: Duration = Duration::from_millis(2000);

    #[test]
    fn start_arms_one_repeating_timer() {
        let mut q = TimerQueue::new();
        let mut a = Autoplay::new(INTERVAL);

        assert!(a.start(&mut q, true, 3));
        assert!(a.is_running());
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_deadline(), Some(INTERVAL));
    }

    #[test]
    fn start_is_idempotent() {
        let mut q = TimerQueue::new();
        let mut a = Autoplay::new(INTERVAL);
        a.start(&mut q, true, 3);
        let first = a.handle();

        assert!(!a.start(&mut q, true, 3));
        assert_eq!(a.handle(), first);
        assert_eq!(q.len(), 1, "timers must not stack");
    }

    #[test]
    fn start_requires_playing() {
        let mut q = TimerQueue::new();
        let mut a = Autoplay::new(INTERVAL);
        assert!(!a.start(&mut q, false, 3));
        assert!(q.is_empty());
    }

    #[test]
    fn single_slide_never_arms() {
        let mut q = TimerQueue::new();
        let mut a = Autoplay::new(INTERVAL);
        assert!(!a.start(&mut q, true, 1));
        assert!(!a.is_running());
        assert!(q.is_empty());
    }

    #[test]
    fn stop_releases_and_is_idempotent() {
        let mut q = TimerQueue::new();
        let mut a = Autoplay::new(INTERVAL);
        a.start(&mut q, true, 2);
        let id = a.handle().unwrap();

        assert!(a.stop(&mut q));
        assert!(!q.is_armed(id));
        assert!(!a.owns(id));

        assert!(!a.stop(&mut q));
        assert!(q.is_empty());
    }

    #[test]
    fn restart_uses_a_fresh_handle() {
        let mut q = TimerQueue::new();
        let mut a = Autoplay::new(INTERVAL);
        a.start(&mut q, true, 2);
        let old = a.handle().unwrap();
        a.stop(&mut q);
        a.start(&mut q, true, 2);

        assert!(!a.owns(old));
        assert_eq!(q.len(), 1);
    }
}
