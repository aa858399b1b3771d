// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types shared by the snapping components: directions, gesture outcomes, and change sets.
//!
//! ## Overview
//!
//! These types describe what flows between the [gesture adapters](crate::gesture), the
//! [jump engine](crate::jump), and the host.
//! They are returned by [`SnapRegion`](crate::region::SnapRegion) and consumed by presentation layers.

/// Direction of a requested jump along the run of sections.
///
/// `Down` moves towards higher section indices (further into the document),
/// `Up` towards lower ones.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Towards the previous section (index − 1).
    Up,
    /// Towards the next section (index + 1).
    Down,
}

impl Direction {
    /// Classify a wheel event by the sign of its vertical delta.
    ///
    /// Positive deltas scroll down. A zero (or NaN) delta carries no vertical intent and yields `None`.
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::Down)
        } else if delta_y < 0.0 {
            Some(Self::Up)
        } else {
            None
        }
    }

    /// Classify a swipe by `origin_y - current_y`.
    ///
    /// A finger moving up (positive delta) means the user wants to see content further down.
    pub fn from_swipe_delta(delta: f64) -> Self {
        if delta > 0.0 { Self::Down } else { Self::Up }
    }

    /// The neighbouring index of `from` in this direction, if it lies inside `0..count`.
    pub fn step(self, from: usize, count: usize) -> Option<usize> {
        let target = match self {
            Self::Up => from.checked_sub(1)?,
            Self::Down => from.checked_add(1)?,
        };
        (target < count).then_some(target)
    }

    /// The terminal section index in this direction for a run of `count` sections.
    ///
    /// Returns `None` for an empty run.
    pub fn terminal(self, count: usize) -> Option<usize> {
        match self {
            Self::Up => (count > 0).then_some(0),
            Self::Down => count.checked_sub(1),
        }
    }
}

/// What the host should do with the native scroll behavior of an input event.
///
/// Returned by the wheel and touch handlers of [`SnapRegion`](crate::region::SnapRegion).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Let the platform scroll natively (do not prevent the default action).
    Pass,
    /// The gesture was absorbed; the host must prevent the default scroll.
    Consume,
}

impl Outcome {
    /// True if the host should suppress the default scroll action.
    #[inline]
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consume)
    }
}

bitflags::bitflags! {
    /// Observable state that changed during one step of a [`SnapRegion`](crate::region::SnapRegion).
    ///
    /// Presentation layers use this to re-toggle only the flags that moved.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// The document-level "in snap zone" flag flipped.
        const ZONE   = 0b0000_0001;
        /// A section gained or lost the active designation.
        const ACTIVE = 0b0000_0010;
        /// A jump was dispatched or its cooldown expired.
        const JUMP   = 0b0000_0100;
    }
}
