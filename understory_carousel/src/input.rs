// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events a host forwards to a carousel, and how they were handled.

use alloc::string::String;

use kurbo::Point;

use crate::error::{CarouselError, Result};
use crate::keyboard::Key;

/// One input event, already resolved to the carousel surface it hit.
///
/// Hosts translate their native events into these. Pointer positions are
/// in whatever horizontal coordinate space the host uses consistently for a
/// gesture (page or client space); only differences are observed.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// The "next" control was activated.
    Next,
    /// The "previous" control was activated.
    Prev,
    /// The pause/play control was activated.
    PausePlay,
    /// An indicator was activated.
    Indicator {
        /// The indicator's slide target attribute as text, `None` if absent.
        slide_to: Option<String>,
    },
    /// A key was pressed while the carousel's keyboard listener is registered.
    Key(Key),
    /// Mouse button pressed on the slide area.
    PointerDown(Point),
    /// Mouse button released on the slide area.
    PointerUp(Point),
    /// The mouse left the slide area.
    PointerCancel,
    /// A touch began inside the container.
    TouchStart(Point),
    /// A touch ended inside the container.
    TouchEnd(Point),
    /// The pointer entered the container.
    HoverEnter,
    /// The pointer left the container.
    HoverLeave,
    /// The platform is about to start a native drag of slide content.
    DragStart,
}

impl Input {
    /// Convenience constructor for an indicator carrying `slide_to`.
    #[must_use]
    pub fn indicator(slide_to: impl Into<String>) -> Self {
        Self::Indicator {
            slide_to: Some(slide_to.into()),
        }
    }
}

/// How a carousel handled an [`Input`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Disposition {
    /// No listener for this input is attached; let it pass through.
    Ignored,
    /// The carousel acted on the input.
    Handled,
    /// The carousel acted on the input and the host must suppress the
    /// platform's default action (scrolling, native drag).
    DefaultPrevented,
}

impl Disposition {
    /// Returns `true` unless the input was ignored.
    #[must_use]
    pub fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Returns `true` if the host should suppress the default action.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::DefaultPrevented)
    }
}

/// Parses an indicator's slide target attribute.
///
/// The attribute is a base-10 integer. Surrounding ASCII whitespace and a sign
/// are accepted; anything else, including an absent attribute, a fractional
/// value, or an empty string, is rejected.
///
/// ```
/// use understory_carousel::input::parse_slide_target;
///
/// assert_eq!(parse_slide_target(Some("2")), Ok(2));
/// assert_eq!(parse_slide_target(Some(" -1 ")), Ok(-1));
/// assert!(parse_slide_target(Some("invalid")).is_err());
/// assert!(parse_slide_target(None).is_err());
/// ```
pub fn parse_slide_target(raw: Option<&str>) -> Result<isize> {
    raw.and_then(|text| text.trim_ascii().parse::<isize>().ok())
        .ok_or_else(|| CarouselError::InvalidSlideTarget {
            raw: raw.map(String::from),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_integers() {
        assert_eq!(parse_slide_target(Some("0")), Ok(0));
        assert_eq!(parse_slide_target(Some("12")), Ok(12));
        assert_eq!(parse_slide_target(Some("+3")), Ok(3));
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["", " ", "invalid", "1.5", "1e2", "NaN", "0x1", "1 2"] {
            let err = parse_slide_target(Some(raw)).unwrap_err();
            assert_eq!(
                err,
                CarouselError::InvalidSlideTarget {
                    raw: Some(raw.into())
                },
                "{raw:?} must be rejected"
            );
        }
    }

    #[test]
    fn rejects_missing_attribute() {
        assert_eq!(
            parse_slide_target(None),
            Err(CarouselError::InvalidSlideTarget { raw: None })
        );
    }

    #[test]
    fn disposition_queries() {
        assert!(!Disposition::Ignored.is_handled());
        assert!(Disposition::Handled.is_handled());
        assert!(!Disposition::Handled.prevents_default());
        assert!(Disposition::DefaultPrevented.prevents_default());
    }
}
