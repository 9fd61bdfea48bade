// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering seam.
//!
//! A [`CarouselView`] owns the visual elements (slides, indicators, controls)
//! and reflects state it is told about. The carousel calls it; it never calls
//! back. Element creation, styling, class names and icon markup live entirely
//! behind this trait.

use alloc::vec::Vec;

/// Visual collaborator for a [`Carousel`](crate::Carousel).
///
/// Slide `i` and indicator `i` always change together, so every method that
/// marks a slide active or inactive applies to the matching indicator too.
pub trait CarouselView {
    /// Handle to one resolved slide element.
    type Slide;

    /// Resolves the container and the ordered slides inside it.
    ///
    /// Returns `None` if the container locator matches nothing, and an empty
    /// list if the container holds no matching slides.
    fn resolve(&mut self, container: &str, slides: &str) -> Option<Vec<Self::Slide>>;

    /// Creates the pause/play, previous and next controls.
    fn mount_controls(&mut self, is_playing: bool);

    /// Creates `count` indicators; indicator `i` carries `i` as its slide target.
    fn mount_indicators(&mut self, count: usize);

    /// Marks exactly slide `index` (and its indicator) active, clearing any
    /// other active marker.
    fn show_only(&mut self, index: usize);

    /// Flips the active marker of slide `index` and its indicator.
    fn toggle_active(&mut self, index: usize);

    /// Shows the "playing" affordance when `true`, "paused" otherwise.
    fn show_playing(&mut self, is_playing: bool);
}
