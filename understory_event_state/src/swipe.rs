// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognition: turn a press/release pair into a horizontal navigation intent.
//!
//! ## Usage
//!
//! 1) Open a session with [`SwipeState::start`] on pointer down or touch start.
//! 2) Close it with [`SwipeState::end`] on pointer up or touch end; it returns a
//!    [`SwipeIntent`] and clears the session.
//! 3) Call [`SwipeState::cancel`] if the pointer leaves the swipe surface mid-gesture.
//!
//! Only the horizontal coordinate participates. Dragging right past the
//! threshold means "show the previous item", dragging left means "show the
//! next item", mirroring how content follows the finger.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::swipe::{SwipeIntent, SwipeState};
//!
//! let mut swipe = SwipeState::new(100.0);
//!
//! swipe.start(Point::new(300.0, 40.0));
//! assert!(swipe.is_tracking());
//!
//! // 200px to the left: past the threshold.
//! assert_eq!(swipe.end(Point::new(100.0, 42.0)), SwipeIntent::Next);
//! assert!(!swipe.is_tracking());
//!
//! // A release with no press recorded yields nothing.
//! assert_eq!(swipe.end(Point::new(0.0, 0.0)), SwipeIntent::None);
//! ```

use kurbo::Point;

/// Navigation intent recognized from a completed swipe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeIntent {
    /// Dragged rightward past the threshold.
    Prev,
    /// Dragged leftward past the threshold.
    Next,
    /// Too short, or no complete gesture.
    None,
}

/// Classifies a horizontal drag from `start_x` to `end_x`.
///
/// The comparison is strict: a travel of exactly `threshold` is not a swipe.
///
/// ```
/// use understory_event_state::swipe::{classify, SwipeIntent};
///
/// assert_eq!(classify(100.0, 201.0, 100.0), SwipeIntent::Prev);
/// assert_eq!(classify(100.0, 200.0, 100.0), SwipeIntent::None);
/// assert_eq!(classify(300.0, 100.0, 100.0), SwipeIntent::Next);
/// ```
#[must_use]
pub fn classify(start_x: f64, end_x: f64, threshold: f64) -> SwipeIntent {
    let delta = end_x - start_x;
    if delta > threshold {
        SwipeIntent::Prev
    } else if delta < -threshold {
        SwipeIntent::Next
    } else {
        SwipeIntent::None
    }
}

/// Tracks one in-flight swipe gesture.
///
/// At most one gesture is tracked at a time; starting again replaces the
/// previous start position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeState {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeState {
    /// Creates an idle tracker that requires more than `threshold` units of
    /// horizontal travel to recognize a swipe.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    /// Minimum horizontal travel, exclusive.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Horizontal start position of the open session, if any.
    #[must_use]
    pub fn start_x(&self) -> Option<f64> {
        self.start_x
    }

    /// Returns `true` while a session is open.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Opens a session at `pos`.
    pub fn start(&mut self, pos: Point) {
        self.start_x = Some(pos.x);
    }

    /// Closes the session at `pos` and classifies it.
    ///
    /// The session is cleared whatever the outcome, so a stale start position
    /// never leaks into the next gesture. Without an open session this yields
    /// [`SwipeIntent::None`].
    pub fn end(&mut self, pos: Point) -> SwipeIntent {
        match self.start_x.take() {
            Some(start_x) => classify(start_x, pos.x, self.threshold),
            None => SwipeIntent::None,
        }
    }

    /// Drops the open session without classifying it.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}
