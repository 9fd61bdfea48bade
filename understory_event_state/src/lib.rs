// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for UI interactions that
//! require stateful tracking across multiple events:
//!
//! - [`swipe`]: Recognize horizontal swipe gestures from a press/release pair
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or spatial query system
//!
//! The crate does not assume any particular UI framework or event system.
//! Managers accept raw pointer positions and produce intents that
//! applications interpret.
//!
//! ## Swipe Recognition
//!
//! Use [`swipe::SwipeState`] to turn touch or mouse press/release pairs into
//! previous/next intents:
//!
//! ```rust
//! # #[cfg(feature = "swipe")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::swipe::{SwipeIntent, SwipeState};
//!
//! let mut swipe = SwipeState::new(100.0);
//!
//! swipe.start(Point::new(100.0, 0.0));
//! assert_eq!(swipe.end(Point::new(300.0, 0.0)), SwipeIntent::Prev);
//! # }
//! ```
//!
//! ## Features
//!
//! - `swipe`: Enable swipe recognition (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

#[cfg(feature = "swipe")]
pub mod swipe;
