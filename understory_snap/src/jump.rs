// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Jump engine: cooldown-gated dispatch of animated scrolls to a neighbouring section.
//!
//! ## Overview
//!
//! [`JumpEngine::request_jump`] turns a [`Direction`] and the current active section into a call on a
//! [`ScrollTo`] capability. At most one jump is in flight at a time: a successful dispatch arms a
//! cooldown deadline, and every further request is dropped until [`JumpEngine::expire`] observes that
//! the deadline has passed.
//!
//! ## Guards
//!
//! Checked in order; each failure is a silent no-op that returns `None` and leaves the state alone:
//! 1) a jump is already in flight;
//! 2) no section is active;
//! 3) the neighbouring index in the requested direction lies outside the run.
//!
//! The engine does not decide whether a gesture escapes the run; the [gesture adapters](crate::gesture)
//! do that before calling in. The bounds check here only keeps the engine safe on its own.
//!
//! ## Completion
//!
//! Animated scrolls report no completion, so the cooldown stands in for it. A request that arrives
//! after the animation has visibly ended but before the deadline is dropped. See
//! [`ScrollTiming`](crate::config::ScrollTiming).

use core::time::Duration;

use crate::config::ScrollTiming;
use crate::types::Direction;

/// Where the target section should land in the viewport.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Align {
    /// Top edge of the section at the top edge of the viewport.
    #[default]
    Start,
}

/// Parameters passed along with a scroll request.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ScrollHint {
    /// Block alignment of the target.
    pub align: Align,
    /// Requested animation duration. Platforms without a duration control may ignore it.
    pub duration: Duration,
}

/// The external "animate scroll to element" capability.
///
/// There is no completion signal; the engine relies on its cooldown instead.
/// Closures `FnMut(usize, ScrollHint)` implement this trait.
pub trait ScrollTo {
    /// Start scrolling so that section `index` is aligned per `hint`.
    fn scroll_to(&mut self, index: usize, hint: ScrollHint);
}

impl<F: FnMut(usize, ScrollHint)> ScrollTo for F {
    #[inline]
    fn scroll_to(&mut self, index: usize, hint: ScrollHint) {
        self(index, hint);
    }
}

/// A dispatched jump.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Jump {
    /// Active section when the jump was requested.
    pub from: usize,
    /// Section the scroll was requested to.
    pub to: usize,
    /// Requested direction.
    pub direction: Direction,
    /// When the cooldown ends.
    pub deadline: Duration,
}

/// Snapshot of the in-flight state.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct JumpState {
    /// True from dispatch until the cooldown has expired.
    pub in_flight: bool,
    /// End of the current cooldown, if a jump is in flight.
    pub cooldown_deadline: Option<Duration>,
}

/// Cooldown-gated jump dispatcher.
#[derive(Clone, Debug)]
pub struct JumpEngine {
    timing: ScrollTiming,
    deadline: Option<Duration>,
}

impl JumpEngine {
    /// Create an idle engine.
    pub fn new(timing: ScrollTiming) -> Self {
        Self {
            timing,
            deadline: None,
        }
    }

    /// Timing used for dispatches.
    pub fn timing(&self) -> ScrollTiming {
        self.timing
    }

    /// True while a dispatched jump is cooling down.
    #[inline]
    pub fn is_in_flight(&self) -> bool {
        self.deadline.is_some()
    }

    /// End of the current cooldown. Hosts arm their timer for this instant and call [`Self::expire`].
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Snapshot of the in-flight state.
    pub fn state(&self) -> JumpState {
        JumpState {
            in_flight: self.is_in_flight(),
            cooldown_deadline: self.deadline,
        }
    }

    /// Request a jump from the `active` section in `direction` within a run of `count` sections.
    ///
    /// On success the scroll is requested exactly once, the engine enters the in-flight state and
    /// the dispatched [`Jump`] is returned. Every guard failure returns `None` without side effects.
    pub fn request_jump<S: ScrollTo + ?Sized>(
        &mut self,
        direction: Direction,
        active: Option<usize>,
        count: usize,
        now: Duration,
        scroller: &mut S,
    ) -> Option<Jump> {
        if let Some(deadline) = self.deadline {
            log::trace!("jump {direction:?} dropped: in flight until {deadline:?}");
            return None;
        }
        let from = active?;
        let Some(to) = direction.step(from, count) else {
            log::trace!("jump {direction:?} from {from} dropped: no neighbour");
            return None;
        };

        let deadline = now.saturating_add(self.timing.cooldown());
        self.deadline = Some(deadline);
        scroller.scroll_to(
            to,
            ScrollHint {
                align: Align::Start,
                duration: self.timing.duration(),
            },
        );
        log::debug!("jump {direction:?}: section {from} -> {to}");
        Some(Jump {
            from,
            to,
            direction,
            deadline,
        })
    }

    /// Cooldown timer callback: leave the in-flight state once `now` has reached the deadline.
    ///
    /// Returns true if the in-flight state was cleared by this call.
    pub fn expire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                log::debug!("jump cooldown expired");
                true
            }
            _ => false,
        }
    }
}
