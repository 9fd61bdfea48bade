// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests: index folding and the one-active-slide invariant.

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::rc::Rc;
use std::time::Duration;

use kurbo::Point;
use proptest::prelude::*;
use understory_carousel::headless::HeadlessView;
use understory_carousel::index::IndexModel;
use understory_carousel::keyboard::{Key, KeyboardHub};
use understory_carousel::{Carousel, CarouselConfig, Input};
use understory_timing::TimerQueue;

/// One step a user or the clock can take.
#[derive(Clone, Debug)]
enum Step {
    Send(Input),
    Wait(u64),
    Play,
    Pause,
}

fn step() -> impl Strategy<Value = Step> {
    let x = -500.0_f64..500.0;
    prop_oneof![
        Just(Step::Send(Input::Next)),
        Just(Step::Send(Input::Prev)),
        Just(Step::Send(Input::PausePlay)),
        (-10_isize..10).prop_map(|i| Step::Send(Input::indicator(i.to_string()))),
        Just(Step::Send(Input::indicator("invalid"))),
        Just(Step::Send(Input::Indicator { slide_to: None })),
        Just(Step::Send(Input::Key(Key::ArrowLeft))),
        Just(Step::Send(Input::Key(Key::ArrowRight))),
        Just(Step::Send(Input::Key(Key::Space))),
        x.clone()
            .prop_map(|x| Step::Send(Input::TouchStart(Point::new(x, 0.0)))),
        x.prop_map(|x| Step::Send(Input::TouchEnd(Point::new(x, 0.0)))),
        Just(Step::Send(Input::PointerCancel)),
        Just(Step::Send(Input::HoverEnter)),
        Just(Step::Send(Input::HoverLeave)),
        (0_u64..5_000).prop_map(Step::Wait),
        Just(Step::Play),
        Just(Step::Pause),
    ]
}

proptest! {
    #[test]
    fn fold_lands_in_range(n in any::<isize>(), count in 1_usize..64) {
        let count = NonZeroUsize::new(count).unwrap();
        let mut model = IndexModel::new(count);
        let t = model.advance_to(n);
        prop_assert!(t.to < count.get());
        prop_assert_eq!(model.current(), t.to);
    }

    #[test]
    fn current_is_a_fixed_point(n in any::<isize>(), count in 1_usize..64) {
        let mut model = IndexModel::new(NonZeroUsize::new(count).unwrap());
        model.advance_to(n);
        let here = model.current();
        let back = model.advance_to(isize::try_from(here).unwrap());
        prop_assert_eq!(back.to, here);
    }

    #[test]
    fn next_then_prev_returns_home(start in 0_isize..100, count in 1_usize..16) {
        let mut model = IndexModel::new(NonZeroUsize::new(count).unwrap());
        model.advance_to(start);
        let home = model.current();
        model.advance_to(model.next_target());
        model.advance_to(model.prev_target());
        prop_assert_eq!(model.current(), home);
    }

    #[test]
    fn exactly_one_slide_is_ever_active(
        slides in 1_usize..6,
        hover in any::<bool>(),
        steps in proptest::collection::vec(step(), 0..40),
    ) {
        let queue = Rc::new(RefCell::new(TimerQueue::new()));
        let config = CarouselConfig::default()
            .with_interval_ms(1000)
            .with_pause_on_hover(hover);
        let view = HeadlessView::with_slides("#carousel", ".slide", slides);
        let mut carousel = Carousel::new(&config, view, Rc::clone(&queue))
            .unwrap()
            .with_error_handler(|_| {});
        carousel.init(&mut KeyboardHub::new());

        for step in steps {
            match step {
                Step::Send(input) => {
                    carousel.handle(&input).unwrap();
                }
                Step::Wait(ms) => {
                    let deadline = queue.borrow().now() + Duration::from_millis(ms);
                    loop {
                        let fired = queue.borrow_mut().pop_due(deadline);
                        let Some(fired) = fired else { break };
                        carousel.on_timer(fired.id);
                    }
                    queue.borrow_mut().advance_to(deadline);
                }
                Step::Play => carousel.play(),
                Step::Pause => carousel.pause(),
            }

            let active = carousel.view().active_slides();
            prop_assert_eq!(active.len(), 1);
            prop_assert_eq!(carousel.view().active_indicators(), active);

            // The timer is armed only while playing, and never for one slide.
            let armed = !queue.borrow().is_empty();
            prop_assert_eq!(armed, carousel.is_playing() && slides > 1);
        }
    }
}
