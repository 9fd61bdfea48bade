// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-level keyboard routing for carousels.
//!
//! A page has one keyboard but may host several carousels. Instead of each
//! carousel installing its own document-wide listener (which can never be
//! removed and double-fires if installed twice), carousels register with a
//! [`KeyboardHub`] owned by the host. The hub only computes who should receive
//! a key; the host delivers it.
//!
//! ```
//! use understory_carousel::keyboard::{Key, KeyboardHub};
//!
//! let mut hub = KeyboardHub::new();
//! let a = hub.register();
//! let b = hub.register();
//! assert_eq!(hub.listeners(), &[a, b]);
//!
//! // Teardown of `a`.
//! assert!(hub.unregister(a));
//! assert_eq!(hub.listeners(), &[b]);
//! assert!(!hub.unregister(a));
//!
//! assert_eq!(Key::from_code("ArrowLeft"), Key::ArrowLeft);
//! assert_eq!(Key::from_code("KeyA"), Key::Other);
//! ```

use alloc::vec::Vec;

/// Keys a carousel reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Show the previous slide.
    ArrowLeft,
    /// Show the next slide.
    ArrowRight,
    /// Toggle autoplay.
    Space,
    /// Anything else; always passed through untouched.
    Other,
}

impl Key {
    /// Maps a physical key code (`KeyboardEvent.code` naming) to a [`Key`].
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            "Space" => Self::Space,
            _ => Self::Other,
        }
    }
}

/// Handle for one registration with a [`KeyboardHub`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u32);

/// Registry of keyboard listeners for one page.
///
/// Each registration appears exactly once in [`listeners`](Self::listeners),
/// in registration order, until it is unregistered.
#[derive(Clone, Debug, Default)]
pub struct KeyboardHub {
    next: u32,
    listeners: Vec<ListenerId>,
}

impl KeyboardHub {
    /// Creates an empty hub.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: 0,
            listeners: Vec::new(),
        }
    }

    /// Adds a listener and returns its handle.
    pub fn register(&mut self) -> ListenerId {
        let id = ListenerId(self.next);
        self.next = self.next.wrapping_add(1);
        self.listeners.push(id);
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unregister(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| *l != id);
        self.listeners.len() != before
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.contains(&id)
    }

    /// Listeners that should receive the next key event.
    #[must_use]
    pub fn listeners(&self) -> &[ListenerId] {
        &self.listeners
    }

    /// Returns `true` if nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_outside_the_carousel_set_are_other() {
        for code in ["ArrowUp", "Enter", "space", "", "Tab"] {
            assert_eq!(Key::from_code(code), Key::Other, "{code:?}");
        }
        assert_eq!(Key::from_code("Space"), Key::Space);
        assert_eq!(Key::from_code("ArrowRight"), Key::ArrowRight);
    }

    #[test]
    fn handles_are_unique() {
        let mut hub = KeyboardHub::new();
        let a = hub.register();
        hub.unregister(a);
        let b = hub.register();
        assert_ne!(a, b);
        assert_eq!(hub.listeners(), &[b]);
    }

    #[test]
    fn unregister_leaves_other_listeners() {
        let mut hub = KeyboardHub::new();
        let a = hub.register();
        let b = hub.register();
        let c = hub.register();
        assert!(hub.unregister(b));
        assert_eq!(hub.listeners(), &[a, c]);
        assert!(hub.is_registered(c));
        assert!(!hub.is_registered(b));
    }

    #[test]
    fn empty_after_all_teardowns() {
        let mut hub = KeyboardHub::new();
        let a = hub.register();
        hub.unregister(a);
        assert!(hub.is_empty());
    }
}
