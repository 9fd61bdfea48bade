// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory reference [`CarouselView`].
//!
//! [`HeadlessView`] models the part of a page a carousel touches: one
//! container, its slides, the indicators and the pause/play affordance. It
//! keeps indicator slide targets as raw text, exactly as a page attribute
//! would, so hosts and tests can feed malformed targets through the real
//! parsing path.
//!
//! ```
//! use understory_carousel::headless::HeadlessView;
//! use understory_carousel::keyboard::KeyboardHub;
//! use understory_carousel::{Carousel, CarouselConfig};
//! use understory_timing::TimerQueue;
//!
//! let view = HeadlessView::with_slides("#carousel", ".slide", 3);
//! let mut carousel = Carousel::new(&CarouselConfig::default(), view, TimerQueue::new())?;
//! carousel.init(&mut KeyboardHub::new());
//!
//! let click = carousel.view().indicator_input(2).unwrap();
//! carousel.handle(&click)?;
//! assert_eq!(carousel.view().active_slides(), vec![2]);
//! assert_eq!(carousel.view().active_indicators(), vec![2]);
//! # Ok::<(), understory_carousel::CarouselError>(())
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::input::Input;
use crate::render::CarouselView;

/// Handle to a slide resolved by a [`HeadlessView`]: its position in the container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideHandle(pub usize);

/// A call the carousel made on a [`HeadlessView`], in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewCall {
    /// [`CarouselView::resolve`].
    Resolve,
    /// [`CarouselView::mount_controls`].
    MountControls {
        /// Initial affordance.
        is_playing: bool,
    },
    /// [`CarouselView::mount_indicators`].
    MountIndicators {
        /// Indicator count.
        count: usize,
    },
    /// [`CarouselView::show_only`].
    ShowOnly(usize),
    /// [`CarouselView::toggle_active`].
    Toggle(usize),
    /// [`CarouselView::show_playing`].
    ShowPlaying(bool),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Indicator {
    slide_to: Option<String>,
    active: bool,
}

/// A page with one carousel container, held in memory.
#[derive(Clone, Debug, Default)]
pub struct HeadlessView {
    container: String,
    slide_locator: String,
    slides: Vec<bool>,
    indicators: Vec<Indicator>,
    controls: bool,
    playing: Option<bool>,
    calls: Vec<ViewCall>,
}

impl HeadlessView {
    /// A page whose `container` holds `count` slides matching `slide_locator`.
    ///
    /// As in typical page markup, the first slide starts out active.
    #[must_use]
    pub fn with_slides(container: &str, slide_locator: &str, count: usize) -> Self {
        let mut slides = alloc::vec![false; count];
        if let Some(first) = slides.first_mut() {
            *first = true;
        }
        Self {
            container: container.to_string(),
            slide_locator: slide_locator.to_string(),
            slides,
            ..Self::default()
        }
    }

    /// Slides carrying the active marker.
    #[must_use]
    pub fn active_slides(&self) -> Vec<usize> {
        positions(self.slides.iter().copied())
    }

    /// Indicators carrying the active marker.
    #[must_use]
    pub fn active_indicators(&self) -> Vec<usize> {
        positions(self.indicators.iter().map(|i| i.active))
    }

    /// Returns `true` if slide `index` carries the active marker.
    #[must_use]
    pub fn is_slide_active(&self, index: usize) -> bool {
        self.slides.get(index).copied().unwrap_or(false)
    }

    /// Number of mounted indicators.
    #[must_use]
    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    /// Raw slide target attribute of indicator `index`.
    #[must_use]
    pub fn indicator_target(&self, index: usize) -> Option<&str> {
        self.indicators.get(index)?.slide_to.as_deref()
    }

    /// Overwrites (or removes, with `None`) the slide target attribute of
    /// indicator `index`. Out-of-range indices are ignored.
    pub fn set_indicator_target(&mut self, index: usize, slide_to: Option<&str>) {
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.slide_to = slide_to.map(String::from);
        }
    }

    /// The input a click on indicator `index` produces, or `None` if there is
    /// no such indicator.
    #[must_use]
    pub fn indicator_input(&self, index: usize) -> Option<Input> {
        let indicator = self.indicators.get(index)?;
        Some(Input::Indicator {
            slide_to: indicator.slide_to.clone(),
        })
    }

    /// Returns `true` once controls are mounted.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.controls
    }

    /// The affordance currently shown: `Some(true)` for "playing",
    /// `Some(false)` for "paused", `None` before controls are mounted.
    #[must_use]
    pub fn shows_playing(&self) -> Option<bool> {
        self.playing
    }

    /// Every call received so far.
    #[must_use]
    pub fn calls(&self) -> &[ViewCall] {
        &self.calls
    }
}

impl CarouselView for HeadlessView {
    type Slide = SlideHandle;

    fn resolve(&mut self, container: &str, slides: &str) -> Option<Vec<SlideHandle>> {
        self.calls.push(ViewCall::Resolve);
        if container != self.container {
            return None;
        }
        if slides != self.slide_locator {
            return Some(Vec::new());
        }
        Some((0..self.slides.len()).map(SlideHandle).collect())
    }

    fn mount_controls(&mut self, is_playing: bool) {
        self.calls.push(ViewCall::MountControls { is_playing });
        self.controls = true;
        self.playing = Some(is_playing);
    }

    fn mount_indicators(&mut self, count: usize) {
        self.calls.push(ViewCall::MountIndicators { count });
        self.indicators = (0..count)
            .map(|i| Indicator {
                slide_to: Some(i.to_string()),
                active: false,
            })
            .collect();
    }

    fn show_only(&mut self, index: usize) {
        self.calls.push(ViewCall::ShowOnly(index));
        for (i, slide) in self.slides.iter_mut().enumerate() {
            *slide = i == index;
        }
        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            indicator.active = i == index;
        }
    }

    fn toggle_active(&mut self, index: usize) {
        self.calls.push(ViewCall::Toggle(index));
        if let Some(slide) = self.slides.get_mut(index) {
            *slide = !*slide;
        }
        if let Some(indicator) = self.indicators.get_mut(index) {
            indicator.active = !indicator.active;
        }
    }

    fn show_playing(&mut self, is_playing: bool) {
        self.calls.push(ViewCall::ShowPlaying(is_playing));
        self.playing = Some(is_playing);
    }
}

fn positions(flags: impl Iterator<Item = bool>) -> Vec<usize> {
    flags
        .enumerate()
        .filter_map(|(i, on)| on.then_some(i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn resolve_distinguishes_missing_container_from_empty() {
        let mut view = HeadlessView::with_slides("#carousel", ".slide", 2);
        assert_eq!(view.resolve("#other", ".slide"), None);
        assert_eq!(view.resolve("#carousel", ".other"), Some(vec![]));
        assert_eq!(
            view.resolve("#carousel", ".slide"),
            Some(vec![SlideHandle(0), SlideHandle(1)])
        );
    }

    #[test]
    fn indicators_carry_their_index_as_text() {
        let mut view = HeadlessView::with_slides("#carousel", ".slide", 3);
        view.mount_indicators(3);
        assert_eq!(view.indicator_target(0), Some("0"));
        assert_eq!(view.indicator_target(2), Some("2"));
        assert_eq!(
            view.indicator_input(1),
            Some(Input::Indicator {
                slide_to: Some("1".into())
            })
        );
        assert_eq!(view.indicator_input(3), None);
    }

    #[test]
    fn toggle_is_symmetric() {
        let mut view = HeadlessView::with_slides("#carousel", ".slide", 3);
        view.mount_indicators(3);
        view.show_only(0);
        view.toggle_active(0);
        view.toggle_active(0);
        assert_eq!(view.active_slides(), vec![0]);
        assert_eq!(view.active_indicators(), vec![0]);
    }

    #[test]
    fn show_only_clears_stray_markers() {
        let mut view = HeadlessView::with_slides("#carousel", ".slide", 3);
        view.mount_indicators(3);
        view.toggle_active(2);
        assert_eq!(view.active_slides(), vec![0, 2]);
        view.show_only(1);
        assert_eq!(view.active_slides(), vec![1]);
        assert_eq!(view.active_indicators(), vec![1]);
    }
}
