// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time errors.
//!
//! Runtime conditions (no active section, a jump racing a cooldown, an out-of-bounds target,
//! gestures outside the zone) are expected states and never surface as errors.

/// Why a [`SnapRegion`](crate::region::SnapRegion) could not be set up.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SetupError {
    /// The region was built over an empty run of sections; snapping stays disabled.
    #[error("snap region has no sections")]
    NoSections,
    /// The swipe threshold must be finite and non-negative.
    #[error("invalid swipe threshold: {0}")]
    InvalidSwipeThreshold(f64),
    /// The intersection threshold must be finite and inside `[0, 1)`.
    #[error("invalid intersection threshold: {0}")]
    InvalidIntersectionThreshold(f64),
    /// Zone margins must be finite.
    #[error("zone margins must be finite")]
    InvalidMargin,
    /// A zero cooldown would let jumps overlap.
    #[error("cooldown must be longer than zero")]
    ZeroCooldown,
}
