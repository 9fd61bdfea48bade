// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget-facing timer seam.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;
use core::time::Duration;

/// Opaque handle for an armed timer.
///
/// Identifiers are never reused by a single host, so a stale handle held by a
/// widget can never alias a newer timer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Wraps a raw identifier.
    ///
    /// Hosts that manage their own timer tables can use this to mint handles.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// A runtime that can arm and release timers on behalf of a widget.
///
/// Firing is out of band: the host learns which timer elapsed and forwards the
/// [`TimerId`] to the widget that armed it.
pub trait TimerHost {
    /// Arms a timer that fires every `period` until cleared.
    fn set_interval(&mut self, period: Duration) -> TimerId;

    /// Arms a timer that fires once after `delay`.
    fn set_timeout(&mut self, delay: Duration) -> TimerId;

    /// Releases a timer.
    ///
    /// Clearing an unknown or already-cleared timer is a no-op.
    fn clear(&mut self, id: TimerId);
}

impl<H: TimerHost + ?Sized> TimerHost for &mut H {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        (**self).set_interval(period)
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        (**self).set_timeout(delay)
    }

    fn clear(&mut self, id: TimerId) {
        (**self).clear(id);
    }
}

impl<H: TimerHost + ?Sized> TimerHost for Rc<RefCell<H>> {
    fn set_interval(&mut self, period: Duration) -> TimerId {
        self.borrow_mut().set_interval(period)
    }

    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        self.borrow_mut().set_timeout(delay)
    }

    fn clear(&mut self, id: TimerId) {
        self.borrow_mut().clear(id);
    }
}
