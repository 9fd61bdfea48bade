// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction options.
//!
//! Every field has a default, so callers only spell out what differs:
//!
//! ```
//! use understory_carousel::CarouselConfig;
//!
//! let config = CarouselConfig::default()
//!     .with_interval_ms(3000)
//!     .with_pause_on_hover(true);
//! assert_eq!(config.container, "#carousel");
//! assert_eq!(config.interval_ms, 3000);
//! assert!(config.is_playing);
//! ```
//!
//! With the `serde` feature the same defaults apply when deserializing, and
//! field names follow the `camelCase` spelling used by page configuration
//! (`containerId`, `slideId`, `interval`, `isPlaying`, `pauseOnHover`,
//! `swipeThreshold`, `swipe`).

use alloc::string::{String, ToString};
use core::time::Duration;

use crate::error::{CarouselError, Result};

/// Default container locator.
pub const DEFAULT_CONTAINER: &str = "#carousel";
/// Default slide locator.
pub const DEFAULT_SLIDES: &str = ".slide";
/// Default autoplay period in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 5000;
/// Default minimum swipe travel.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 100.0;

/// Options for building a [`Carousel`](crate::Carousel).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default, rename_all = "camelCase")
)]
pub struct CarouselConfig {
    /// Locator for the root element.
    #[cfg_attr(feature = "serde", serde(rename = "containerId"))]
    pub container: String,
    /// Locator for the ordered slides inside the container.
    #[cfg_attr(feature = "serde", serde(rename = "slideId"))]
    pub slides: String,
    /// Autoplay period in milliseconds. Must be non-zero.
    #[cfg_attr(feature = "serde", serde(rename = "interval"))]
    pub interval_ms: u64,
    /// Whether autoplay starts armed.
    pub is_playing: bool,
    /// Pause while the pointer hovers the container.
    pub pause_on_hover: bool,
    /// Horizontal travel a swipe must exceed. Must be finite and non-negative.
    pub swipe_threshold: f64,
    /// Attach touch and mouse swipe listeners.
    pub swipe: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            slides: DEFAULT_SLIDES.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            is_playing: true,
            pause_on_hover: false,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            swipe: true,
        }
    }
}

impl CarouselConfig {
    /// Sets the container locator.
    #[must_use]
    pub fn with_container(mut self, locator: impl Into<String>) -> Self {
        self.container = locator.into();
        self
    }

    /// Sets the slide locator.
    #[must_use]
    pub fn with_slides(mut self, locator: impl Into<String>) -> Self {
        self.slides = locator.into();
        self
    }

    /// Sets the autoplay period.
    #[must_use]
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Sets whether autoplay starts armed.
    #[must_use]
    pub fn with_playing(mut self, is_playing: bool) -> Self {
        self.is_playing = is_playing;
        self
    }

    /// Enables or disables pause-on-hover.
    #[must_use]
    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    /// Sets the minimum swipe travel.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Enables or disables swipe gestures.
    #[must_use]
    pub fn with_swipe(mut self, swipe: bool) -> Self {
        self.swipe = swipe;
        self
    }

    /// Autoplay period.
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Rejects out-of-range values.
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(CarouselError::InvalidConfig("interval must be non-zero"));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(CarouselError::InvalidConfig(
                "swipe threshold must be finite and non-negative",
            ));
        }
        Ok(())
    }
}
