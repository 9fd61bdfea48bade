// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel basics.
//!
//! Drive a headless carousel through autoplay, keys, swipes and a malformed
//! indicator, using a virtual timer queue as the page clock.
//!
//! Run:
//! - `cargo run -p understory_demos --example carousel_basics`
//! - `RUST_LOG=understory_carousel=trace cargo run -p understory_demos --example carousel_basics`

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_carousel::headless::HeadlessView;
use understory_carousel::keyboard::{Key, KeyboardHub};
use understory_carousel::{Carousel, CarouselConfig, Input};
use understory_timing::TimerQueue;

type Page = Carousel<HeadlessView, Rc<RefCell<TimerQueue>>>;

const PAGE_CONFIG: &str = r##"{
    "containerId": "#carousel",
    "slideId": ".slide",
    "interval": 3000,
    "isPlaying": true
}"##;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_target(true)
        .init();

    let config: CarouselConfig = serde_json::from_str(PAGE_CONFIG)?;
    let queue = Rc::new(RefCell::new(TimerQueue::new()));
    let mut keyboard = KeyboardHub::new();

    let view = HeadlessView::with_slides(&config.container, &config.slides, 4);
    let mut carousel = Carousel::new(&config, view, Rc::clone(&queue))?.with_error_handler(
        |report| tracing::error!(error = %report.error, input = ?report.input, "navigation rejected"),
    );
    carousel.init(&mut keyboard);
    show(&carousel, "after init");

    pump(&queue, &mut carousel, Duration::from_millis(7000));
    show(&carousel, "after 7s of autoplay");

    for listener in keyboard.listeners().to_vec() {
        if carousel.listener_id() == Some(listener) {
            let disposition = carousel.handle(&Input::Key(Key::from_code("ArrowRight")))?;
            tracing::info!(?disposition, "ArrowRight delivered");
        }
    }
    show(&carousel, "after ArrowRight");

    carousel.handle(&Input::TouchStart(Point::new(120.0, 0.0)))?;
    carousel.handle(&Input::TouchEnd(Point::new(320.0, 0.0)))?;
    show(&carousel, "after swiping right");

    carousel
        .view_mut()
        .set_indicator_target(1, Some("invalid"));
    if let Some(click) = carousel.view().indicator_input(1) {
        carousel.handle(&click)?;
    }
    show(&carousel, "after clicking a malformed indicator");

    carousel.handle(&Input::Key(Key::Space))?;
    pump(&queue, &mut carousel, Duration::from_millis(3000));
    show(&carousel, "after resuming for 3s");

    carousel.teardown(&mut keyboard);
    tracing::info!(
        timers = queue.borrow().len(),
        listeners = keyboard.listeners().len(),
        "torn down"
    );
    Ok(())
}

/// Runs the page clock forward by `span`, delivering fired timers.
fn pump(queue: &Rc<RefCell<TimerQueue>>, carousel: &mut Page, span: Duration) {
    let deadline = queue.borrow().now() + span;
    loop {
        let fired = queue.borrow_mut().pop_due(deadline);
        let Some(fired) = fired else { break };
        carousel.on_timer(fired.id);
    }
    queue.borrow_mut().advance_to(deadline);
}

fn show(carousel: &Page, label: &str) {
    tracing::info!(
        active = ?carousel.view().active_slides(),
        playing = carousel.is_playing(),
        "{label}"
    );
}
