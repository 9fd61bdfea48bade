// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel controller: binds inputs to the index, autoplay and swipe state.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;

use bitflags::bitflags;
use understory_event_state::swipe::{SwipeIntent, SwipeState};
use understory_timing::{TimerHost, TimerId};

use crate::autoplay::Autoplay;
use crate::config::CarouselConfig;
use crate::error::{CarouselError, ErrorReport, Result};
use crate::index::IndexModel;
use crate::input::{Disposition, Input, parse_slide_target};
use crate::keyboard::{Key, KeyboardHub, ListenerId};
use crate::render::CarouselView;

bitflags! {
    /// Listener groups a carousel has attached.
    ///
    /// Inputs belonging to a group that is not attached are ignored.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Listeners: u8 {
        /// Next, previous and pause/play controls.
        const CONTROLS = 1 << 0;
        /// Indicator activation.
        const INDICATORS = 1 << 1;
        /// Arrow keys and space.
        const KEYBOARD = 1 << 2;
        /// Touch and mouse swipes, plus native drag suppression.
        const SWIPE = 1 << 3;
        /// Pause while hovered.
        const HOVER = 1 << 4;
    }
}

/// Where a carousel is in its lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// State is established; nothing is rendered, attached or armed.
    Constructed,
    /// Controls are rendered, listeners attached, autoplay armed if playing.
    Live,
    /// Timer released and listeners detached.
    TornDown,
}

/// Callback receiving rejected navigations instead of an `Err` from
/// [`Carousel::handle`].
pub type ErrorHandler = Box<dyn FnMut(ErrorReport)>;

/// A slideshow over a fixed, ordered set of slides.
///
/// The carousel owns its state exclusively: the current index and the
/// autoplay timer handle can only change through the operations below.
/// Any manual navigation (controls, indicators, keys, swipes) pauses autoplay
/// before moving, and autoplay stays paused until [`play`](Self::play).
pub struct Carousel<V: CarouselView, T: TimerHost> {
    view: V,
    timers: T,
    slides: Vec<V::Slide>,
    index: IndexModel,
    autoplay: Autoplay,
    is_playing: bool,
    pause_on_hover: bool,
    swipe: Option<SwipeState>,
    listeners: Listeners,
    keyboard: Option<ListenerId>,
    lifecycle: Lifecycle,
    on_error: Option<ErrorHandler>,
}

impl<V: CarouselView, T: TimerHost> Carousel<V, T> {
    /// Resolves the slides and establishes state.
    ///
    /// Fails if the configuration is out of range, the container is missing,
    /// or it holds no slides. Nothing is rendered and no timer is armed until
    /// [`init`](Self::init).
    pub fn new(config: &CarouselConfig, mut view: V, timers: T) -> Result<Self> {
        config.validate()?;
        let slides = view.resolve(&config.container, &config.slides).ok_or_else(|| {
            CarouselError::ContainerNotFound {
                locator: config.container.clone(),
            }
        })?;
        let count = NonZeroUsize::new(slides.len()).ok_or_else(|| CarouselError::NoSlides {
            locator: config.slides.clone(),
        })?;

        Ok(Self {
            view,
            timers,
            slides,
            index: IndexModel::new(count),
            autoplay: Autoplay::new(config.interval()),
            is_playing: config.is_playing,
            pause_on_hover: config.pause_on_hover,
            swipe: config.swipe.then(|| SwipeState::new(config.swipe_threshold)),
            listeners: Listeners::empty(),
            keyboard: None,
            lifecycle: Lifecycle::Constructed,
            on_error: None,
        })
    }

    /// Routes rejected navigations to `handler` instead of returning them.
    #[must_use]
    pub fn with_error_handler(mut self, handler: impl FnMut(ErrorReport) + 'static) -> Self {
        self.on_error = Some(Box::new(handler));
        self
    }

    /// Renders controls and indicators, attaches listeners, registers with
    /// `keyboard`, and arms autoplay, in that order.
    ///
    /// Only the first call has an effect.
    pub fn init(&mut self, keyboard: &mut KeyboardHub) {
        if self.lifecycle != Lifecycle::Constructed {
            tracing::warn!(lifecycle = ?self.lifecycle, "carousel init called more than once");
            return;
        }

        self.view.mount_controls(self.is_playing);
        self.view.mount_indicators(self.index.count());
        self.view.show_only(self.index.current());

        let mut listeners = Listeners::CONTROLS | Listeners::INDICATORS | Listeners::KEYBOARD;
        listeners.set(Listeners::SWIPE, self.swipe.is_some());
        listeners.set(Listeners::HOVER, self.pause_on_hover);
        self.listeners = listeners;
        self.keyboard = Some(keyboard.register());
        self.lifecycle = Lifecycle::Live;

        self.autoplay
            .start(&mut self.timers, self.is_playing, self.index.count());

        tracing::debug!(
            slides = self.index.count(),
            playing = self.is_playing,
            listeners = ?self.listeners,
            "carousel initialized"
        );
    }

    /// Releases the autoplay timer, deregisters from `keyboard`, and detaches
    /// every listener.
    pub fn teardown(&mut self, keyboard: &mut KeyboardHub) {
        if self.lifecycle != Lifecycle::Live {
            return;
        }
        self.autoplay.stop(&mut self.timers);
        if let Some(id) = self.keyboard.take() {
            keyboard.unregister(id);
        }
        if let Some(swipe) = &mut self.swipe {
            swipe.cancel();
        }
        self.listeners = Listeners::empty();
        self.lifecycle = Lifecycle::TornDown;
        tracing::debug!("carousel torn down");
    }

    /// Whether autoplay is (or will be, once live) armed.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// The resolved slides, in order.
    #[must_use]
    pub fn slides(&self) -> &[V::Slide] {
        &self.slides
    }

    /// Number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.index.count()
    }

    /// Current lifecycle stage.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Attached listener groups.
    #[must_use]
    pub fn listeners(&self) -> Listeners {
        self.listeners
    }

    /// This carousel's keyboard registration, while live.
    #[must_use]
    pub fn listener_id(&self) -> Option<ListenerId> {
        self.keyboard
    }

    /// The rendering collaborator.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the rendering collaborator, for hosts that restyle
    /// or re-attribute elements after mount.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Resumes autoplay. No-op if already playing.
    pub fn play(&mut self) {
        if self.is_playing || !self.is_live() {
            return;
        }
        self.view.show_playing(true);
        self.is_playing = true;
        self.autoplay
            .start(&mut self.timers, self.is_playing, self.index.count());
        tracing::debug!("autoplay resumed");
    }

    /// Pauses autoplay. No-op if already paused.
    pub fn pause(&mut self) {
        if !self.is_playing || !self.is_live() {
            return;
        }
        self.view.show_playing(false);
        self.is_playing = false;
        self.autoplay.stop(&mut self.timers);
        tracing::debug!("autoplay paused");
    }

    /// Toggles between [`play`](Self::play) and [`pause`](Self::pause).
    pub fn pause_play(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Pauses autoplay and shows the next slide, wrapping to the first.
    pub fn next(&mut self) {
        if !self.is_live() {
            return;
        }
        self.pause();
        self.goto(self.index.next_target());
    }

    /// Pauses autoplay and shows the previous slide, wrapping to the last.
    pub fn prev(&mut self) {
        if !self.is_live() {
            return;
        }
        self.pause();
        self.goto(self.index.prev_target());
    }

    /// Delivers a fired timer.
    ///
    /// Advances one slide if `id` is this carousel's autoplay timer; stale or
    /// foreign timers are ignored. Returns `true` if the carousel advanced.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.is_live() || !self.autoplay.owns(id) {
            return false;
        }
        tracing::trace!(%id, "autoplay tick");
        self.goto(self.index.next_target());
        true
    }

    /// Dispatches one input event.
    ///
    /// Returns [`Disposition::Ignored`] for inputs whose listener group is not
    /// attached. A malformed indicator target leaves the current slide in
    /// place and is reported to the error handler if one is set; otherwise it
    /// is returned as an error.
    pub fn handle(&mut self, input: &Input) -> Result<Disposition> {
        let Some(group) = Self::group_of(input) else {
            return Ok(Disposition::Ignored);
        };
        if !self.listeners.contains(group) {
            return Ok(Disposition::Ignored);
        }

        let disposition = match input {
            Input::Next => {
                self.next();
                Disposition::Handled
            }
            Input::Prev => {
                self.prev();
                Disposition::Handled
            }
            Input::PausePlay => {
                self.pause_play();
                Disposition::Handled
            }
            Input::Indicator { slide_to } => match parse_slide_target(slide_to.as_deref()) {
                Ok(target) => {
                    self.pause();
                    self.goto(target);
                    Disposition::Handled
                }
                Err(error) => return self.reject(error, input),
            },
            Input::Key(key) => match key {
                Key::ArrowLeft => {
                    self.prev();
                    Disposition::DefaultPrevented
                }
                Key::ArrowRight => {
                    self.next();
                    Disposition::DefaultPrevented
                }
                Key::Space => {
                    self.pause_play();
                    Disposition::DefaultPrevented
                }
                Key::Other => Disposition::Ignored,
            },
            Input::PointerDown(pos) | Input::TouchStart(pos) => {
                if let Some(swipe) = &mut self.swipe {
                    swipe.start(*pos);
                }
                Disposition::Handled
            }
            Input::PointerUp(pos) | Input::TouchEnd(pos) => {
                let intent = self
                    .swipe
                    .as_mut()
                    .map_or(SwipeIntent::None, |swipe| swipe.end(*pos));
                tracing::debug!(?intent, "swipe classified");
                match intent {
                    SwipeIntent::Prev => self.prev(),
                    SwipeIntent::Next => self.next(),
                    SwipeIntent::None => {}
                }
                Disposition::Handled
            }
            Input::PointerCancel => {
                if let Some(swipe) = &mut self.swipe {
                    swipe.cancel();
                }
                Disposition::Handled
            }
            Input::DragStart => Disposition::DefaultPrevented,
            Input::HoverEnter => {
                self.pause();
                Disposition::Handled
            }
            Input::HoverLeave => {
                self.play();
                Disposition::Handled
            }
        };
        Ok(disposition)
    }

    fn group_of(input: &Input) -> Option<Listeners> {
        let group = match input {
            Input::Next | Input::Prev | Input::PausePlay => Listeners::CONTROLS,
            Input::Indicator { .. } => Listeners::INDICATORS,
            Input::Key(Key::Other) => return None,
            Input::Key(_) => Listeners::KEYBOARD,
            Input::PointerDown(_)
            | Input::PointerUp(_)
            | Input::PointerCancel
            | Input::TouchStart(_)
            | Input::TouchEnd(_)
            | Input::DragStart => Listeners::SWIPE,
            Input::HoverEnter | Input::HoverLeave => Listeners::HOVER,
        };
        Some(group)
    }

    fn reject(&mut self, error: CarouselError, input: &Input) -> Result<Disposition> {
        tracing::warn!(%error, "rejected carousel navigation");
        match &mut self.on_error {
            Some(handler) => {
                handler(ErrorReport {
                    error,
                    input: input.clone(),
                });
                Ok(Disposition::Handled)
            }
            None => Err(error),
        }
    }

    fn goto(&mut self, target: isize) {
        let t = self.index.advance_to(target);
        self.view.toggle_active(t.from);
        self.view.toggle_active(t.to);
        tracing::trace!(from = t.from, to = t.to, "slide transition");
    }

    fn is_live(&self) -> bool {
        self.lifecycle == Lifecycle::Live
    }
}

impl<V: CarouselView, T: TimerHost> Drop for Carousel<V, T> {
    fn drop(&mut self) {
        self.autoplay.stop(&mut self.timers);
    }
}

impl<V: CarouselView, T: TimerHost> fmt::Debug for Carousel<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("slides", &self.index.count())
            .field("current", &self.index.current())
            .field("is_playing", &self.is_playing)
            .field("autoplay", &self.autoplay)
            .field("swipe", &self.swipe)
            .field("listeners", &self.listeners)
            .field("lifecycle", &self.lifecycle)
            .finish_non_exhaustive()
    }
}
