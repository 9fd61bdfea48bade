// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_carousel --heading-base-level=0

//! Understory Carousel: a slideshow state machine for UI.
//!
//! A [`Carousel`] cycles an "active" marker over a fixed, ordered set of
//! slides, automatically on a timer and in response to controls, indicators,
//! keys, and swipe gestures. It owns the hard parts (wraparound index
//! arithmetic, timer coordination, gesture thresholding, malformed input)
//! and leaves every visual concern to a [`CarouselView`].
//!
//! ## Pieces
//!
//! - [`index`]: the wraparound slide index. Forward, backward and direct
//!   jumps all fold through one Euclidean remainder.
//! - [`autoplay`]: a stopped/running repeating timer on a
//!   [`TimerHost`](understory_timing::TimerHost). Starting twice never stacks
//!   timers; a single slide never autoplays.
//! - Swipe classification comes from
//!   [`understory_event_state::swipe`].
//! - [`render`]: the [`CarouselView`] seam the carousel drives.
//! - [`input`] and [`keyboard`]: host events, their [`Disposition`], and the
//!   page-level [`KeyboardHub`](keyboard::KeyboardHub).
//! - [`headless`]: an in-memory [`CarouselView`] used by tests and demos.
//!
//! ## Interaction policy
//!
//! Any manual navigation pauses autoplay before moving and leaves it paused
//! until [`Carousel::play`] is called again. Hover-to-pause is opt-in; when it
//! is off, hovering never affects playback.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_carousel::headless::HeadlessView;
//! use understory_carousel::keyboard::KeyboardHub;
//! use understory_carousel::{Carousel, CarouselConfig};
//! use understory_timing::TimerQueue;
//!
//! let config = CarouselConfig::default().with_interval_ms(2000);
//! let view = HeadlessView::with_slides("#carousel", ".slide", 3);
//! let mut carousel = Carousel::new(&config, view, TimerQueue::new())?;
//! carousel.init(&mut KeyboardHub::new());
//! assert!(carousel.is_playing());
//!
//! carousel.next();
//! assert!(!carousel.is_playing());
//! assert_eq!(carousel.view().active_slides(), vec![1]);
//!
//! carousel.prev();
//! carousel.prev();
//! assert_eq!(carousel.view().active_slides(), vec![2]);
//! # Ok::<(), understory_carousel::CarouselError>(())
//! ```
//!
//! ## Driving time
//!
//! The carousel never reads a clock. The host pumps its timer queue and
//! forwards each fired [`TimerId`](understory_timing::TimerId) to
//! [`Carousel::on_timer`]; see `understory_timing` for the delivery model.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod autoplay;
mod carousel;
pub mod config;
pub mod error;
pub mod headless;
pub mod index;
pub mod input;
pub mod keyboard;
pub mod render;

pub use carousel::{Carousel, ErrorHandler, Lifecycle, Listeners};
pub use config::CarouselConfig;
pub use error::{CarouselError, ErrorReport, Result};
pub use input::{Disposition, Input};
pub use render::CarouselView;
