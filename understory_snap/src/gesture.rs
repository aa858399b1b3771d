// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture adapters: turn wheel and touch input into jump requests.
//!
//! ## Overview
//!
//! Each adapter reads the zone flag and the active section from a [`GestureContext`], decides whether
//! the platform should keep its native scroll ([`Outcome::Pass`]) or suppress it
//! ([`Outcome::Consume`]), and forwards accepted gestures to the [`JumpEngine`].
//!
//! ## Escape hatch
//!
//! A gesture pointing out of the run from its terminal section (down at the last section, up at the
//! first) always passes, so the user can leave the zone by scrolling natively.
//!
//! ## Wheel
//!
//! Outside the zone every event passes. While a jump is in flight every event is consumed so the
//! page does not drift during the animation. Otherwise the sign of the vertical delta picks the
//! direction; a zero delta carries no vertical intent and passes.
//!
//! ## Touch
//!
//! [`TouchTracker`] records where a touch started (only inside the zone) and waits until the finger
//! has travelled past the swipe threshold. It then requests one jump and forgets the origin, so the
//! rest of the same swipe cannot fire a second one.

use core::time::Duration;

use crate::jump::{JumpEngine, ScrollTo};
use crate::types::{Direction, Outcome};

/// A wheel event, reduced to its vertical delta (positive scrolls down).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelInput {
    /// Vertical delta.
    pub delta_y: f64,
}

/// A touch event, reduced to the vertical coordinate of the primary touch point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchInput {
    /// Vertical client coordinate.
    pub y: f64,
}

/// Read-only view of the region state the adapters consult.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GestureContext {
    /// Current zone flag.
    pub in_zone: bool,
    /// Current active section.
    pub active: Option<usize>,
    /// Number of sections in the run.
    pub count: usize,
}

/// True if a gesture in `direction` from `active` points out of the run.
pub fn escapes(direction: Direction, active: usize, count: usize) -> bool {
    direction.terminal(count) == Some(active)
}

/// Handle one wheel event.
pub fn wheel<S: ScrollTo + ?Sized>(
    input: WheelInput,
    ctx: GestureContext,
    engine: &mut JumpEngine,
    now: Duration,
    scroller: &mut S,
) -> Outcome {
    if !ctx.in_zone {
        return Outcome::Pass;
    }
    if engine.is_in_flight() {
        log::trace!("wheel absorbed during jump");
        return Outcome::Consume;
    }
    let Some(active) = ctx.active else {
        return Outcome::Pass;
    };
    let Some(direction) = Direction::from_wheel_delta(input.delta_y) else {
        return Outcome::Pass;
    };
    if escapes(direction, active, ctx.count) {
        log::trace!("wheel {direction:?} escapes at section {active}");
        return Outcome::Pass;
    }
    let _ = engine.request_jump(direction, Some(active), ctx.count, now, scroller);
    Outcome::Consume
}

/// Touch swipe recogniser; owner of the gesture origin.
#[derive(Clone, Debug)]
pub struct TouchTracker {
    threshold: f64,
    origin: Option<f64>,
}

impl TouchTracker {
    /// Create a tracker that fires once a swipe exceeds `threshold` pixels.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            origin: None,
        }
    }

    /// Swipe threshold in pixels.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Vertical coordinate where the current swipe started, if one is being tracked.
    pub fn origin(&self) -> Option<f64> {
        self.origin
    }

    /// A touch began. The origin is only recorded inside the zone.
    ///
    /// Outside the zone any stale origin is kept as is; the next move outside the zone ignores it
    /// and the next touch end clears it.
    pub fn start(&mut self, input: TouchInput, in_zone: bool) {
        if in_zone {
            self.origin = Some(input.y);
        }
    }

    /// The primary touch point moved.
    pub fn moved<S: ScrollTo + ?Sized>(
        &mut self,
        input: TouchInput,
        ctx: GestureContext,
        engine: &mut JumpEngine,
        now: Duration,
        scroller: &mut S,
    ) -> Outcome {
        if !ctx.in_zone || engine.is_in_flight() {
            return Outcome::Pass;
        }
        let Some(origin) = self.origin else {
            return Outcome::Pass;
        };
        let delta = origin - input.y;
        let past_threshold = delta > self.threshold || delta < -self.threshold;
        if !past_threshold {
            return Outcome::Pass;
        }
        let Some(active) = ctx.active else {
            // Nothing to jump from; hand the rest of this swipe to native scrolling.
            self.origin = None;
            return Outcome::Pass;
        };
        let direction = Direction::from_swipe_delta(delta);
        if escapes(direction, active, ctx.count) {
            log::trace!("swipe {direction:?} escapes at section {active}");
            return Outcome::Pass;
        }
        let _ = engine.request_jump(direction, Some(active), ctx.count, now, scroller);
        self.origin = None;
        Outcome::Consume
    }

    /// The touch ended or was cancelled.
    pub fn end(&mut self) {
        self.origin = None;
    }
}
