// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wraparound slide index.

use core::num::NonZeroUsize;

/// A move from one slide to another.
///
/// `from == to` is a valid transition (for example a jump to the current slide,
/// or any step in a single-slide carousel).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// Slide that was current before the move.
    pub from: usize,
    /// Slide that is current after the move.
    pub to: usize,
}

/// The current position within a fixed number of slides.
///
/// The index is always in `0..count`. Any integer target is folded into that
/// range with Euclidean remainder, so stepping forward from the last slide
/// lands on the first, stepping back from the first lands on the last, and a
/// direct jump uses the very same arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IndexModel {
    count: NonZeroUsize,
    current: usize,
}

impl IndexModel {
    /// Starts at slide `0` of `count`.
    #[must_use]
    pub const fn new(count: NonZeroUsize) -> Self {
        Self { count, current: 0 }
    }

    /// Number of slides.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count.get()
    }

    /// Current slide.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Target for a single step forward.
    #[must_use]
    pub fn next_target(&self) -> isize {
        self.current_signed().saturating_add(1)
    }

    /// Target for a single step back.
    #[must_use]
    pub fn prev_target(&self) -> isize {
        self.current_signed().saturating_sub(1)
    }

    /// Moves to `n` folded into `0..count`.
    ///
    /// ```
    /// use core::num::NonZeroUsize;
    /// use understory_carousel::index::IndexModel;
    ///
    /// let mut index = IndexModel::new(NonZeroUsize::new(3).unwrap());
    /// assert_eq!(index.advance_to(index.prev_target()).to, 2);
    /// assert_eq!(index.advance_to(index.next_target()).to, 0);
    /// assert_eq!(index.advance_to(7).to, 1);
    /// ```
    pub fn advance_to(&mut self, n: isize) -> Transition {
        let from = self.current;
        self.current = Self::fold(n, self.count);
        Transition {
            from,
            to: self.current,
        }
    }

    /// Folds any integer into `0..count`.
    #[must_use]
    pub fn fold(n: isize, count: NonZeroUsize) -> usize {
        // Slide counts beyond `isize::MAX` cannot exist in memory.
        let count = isize::try_from(count.get()).unwrap_or(isize::MAX);
        n.rem_euclid(count).unsigned_abs()
    }

    fn current_signed(&self) -> isize {
        isize::try_from(self.current).unwrap_or(isize::MAX)
    }
}
