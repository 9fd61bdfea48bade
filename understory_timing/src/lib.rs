// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic timer queue primitives for UI runtimes.
//!
//! UI widgets frequently need "call me again in N milliseconds" services:
//! autoplay in a carousel, caret blinking, tooltip delays. This crate keeps the
//! widget side of that contract independent of whichever runtime actually owns
//! the clock (a browser event loop, a winit app, a test harness).
//!
//! - [`TimerHost`] is the seam widgets talk to. It arms repeating or one-shot
//!   timers and hands back an opaque [`TimerId`]; clearing releases the timer.
//! - [`TimerQueue`] is a deterministic, virtual-clock implementation of
//!   [`TimerHost`]. Hosts (and tests) advance it explicitly and deliver each
//!   fired [`TimerId`] to whichever widget armed it.
//!
//! ## Delivery model
//!
//! The queue never calls back into widgets. Instead the host pulls fired
//! timers one at a time with [`TimerQueue::pop_due`], so the queue is not
//! borrowed while a widget reacts to a tick. This lets a tick handler arm or
//! clear timers on the same queue, including the one that just fired.
//!
//! ```rust
//! use core::time::Duration;
//! use understory_timing::{TimerHost, TimerQueue};
//!
//! let mut queue = TimerQueue::new();
//! let autoplay = queue.set_interval(Duration::from_millis(2000));
//!
//! let deadline = queue.now() + Duration::from_millis(4500);
//! let mut ticks = 0;
//! while let Some(fired) = queue.pop_due(deadline) {
//!     assert_eq!(fired.id, autoplay);
//!     ticks += 1;
//! }
//! queue.advance_to(deadline);
//!
//! assert_eq!(ticks, 2);
//! assert_eq!(queue.now(), Duration::from_millis(4500));
//!
//! queue.clear(autoplay);
//! assert!(queue.is_empty());
//! ```
//!
//! ## Sharing a queue
//!
//! A page usually owns a single queue that several widgets arm timers on.
//! [`TimerHost`] is implemented for `Rc<RefCell<H>>` and `&mut H`, so a widget
//! can own its handle to the shared queue while the host keeps another one for
//! pumping.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod host;
mod queue;

pub use host::{TimerHost, TimerId};
pub use queue::{Fired, MIN_PERIOD, TimerQueue};
