// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for sharing one `TimerQueue` between a host and its widgets.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use understory_timing::{TimerHost, TimerId, TimerQueue};

/// A widget that re-arms itself as a one-shot on every tick.
struct Blinker<H> {
    host: H,
    armed: Option<TimerId>,
    ticks: u32,
}

impl<H: TimerHost> Blinker<H> {
    fn start(&mut self) {
        self.armed = Some(self.host.set_timeout(Duration::from_millis(100)));
    }

    fn on_timer(&mut self, id: TimerId) {
        if self.armed != Some(id) {
            return;
        }
        self.ticks += 1;
        self.start();
    }
}

#[test]
fn tick_handler_can_rearm_on_the_shared_queue() {
    let queue = Rc::new(RefCell::new(TimerQueue::new()));
    let mut blinker = Blinker {
        host: Rc::clone(&queue),
        armed: None,
        ticks: 0,
    };
    blinker.start();

    let deadline = Duration::from_millis(450);
    loop {
        let fired = queue.borrow_mut().pop_due(deadline);
        let Some(fired) = fired else { break };
        blinker.on_timer(fired.id);
    }
    queue.borrow_mut().advance_to(deadline);

    assert_eq!(blinker.ticks, 4, "one tick per 100ms up to 450ms");
    assert_eq!(queue.borrow().len(), 1, "exactly one pending re-arm");
}

#[test]
fn mutable_reference_is_a_host() {
    fn arm_and_release<H: TimerHost>(mut host: H) {
        let id = host.set_interval(Duration::from_millis(5));
        host.clear(id);
    }

    let mut queue = TimerQueue::new();
    arm_and_release(&mut queue);
    assert!(queue.is_empty(), "the interval was released through the borrow");
}
