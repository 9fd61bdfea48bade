// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for carousel construction and navigation.

use alloc::string::String;

use thiserror::Error;

use crate::input::Input;

/// Result type alias using [`CarouselError`].
pub type Result<T, E = CarouselError> = core::result::Result<T, E>;

/// Errors raised by a [`Carousel`](crate::Carousel).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The container locator matched nothing.
    #[error("carousel container `{locator}` not found")]
    ContainerNotFound {
        /// Locator that failed to resolve.
        locator: String,
    },

    /// The container holds no slides matching the slide locator.
    #[error("no slides matching `{locator}` in the carousel container")]
    NoSlides {
        /// Slide locator that matched nothing.
        locator: String,
    },

    /// A configuration value is out of range.
    #[error("invalid carousel configuration: {0}")]
    InvalidConfig(&'static str),

    /// An indicator carried a missing or non-integer slide target.
    #[error("indicator slide target {raw:?} is not a base-10 integer")]
    InvalidSlideTarget {
        /// Raw attribute text, or `None` if the attribute was absent.
        raw: Option<String>,
    },
}

/// What an error handler receives when a navigation is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    /// Why the navigation was rejected.
    pub error: CarouselError,
    /// The input that triggered it.
    pub input: Input,
}
