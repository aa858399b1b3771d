// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region configuration: zone margins, active-section policy, swipe threshold, and scroll timing.
//!
//! ## Presets
//!
//! - [`SnapConfig::default`]: strict zone edges and midline polling.
//! - [`SnapConfig::lenient`]: zone edges pulled 50 px inward and intersection-ratio tracking.
//!
//! With the `serde` feature every type here derives `Serialize`/`Deserialize`, and missing
//! fields fall back to the defaults.

use core::time::Duration;

use crate::error::SetupError;

/// Default cooldown after a jump, in milliseconds.
pub const DEFAULT_COOLDOWN_MS: u32 = 800;
/// Default minimum vertical travel of a swipe before it counts, in pixels.
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 60.0;
/// Default visible fraction for the intersection policy.
pub const DEFAULT_INTERSECTION_THRESHOLD: f64 = 0.5;
/// Zone inset used by [`ZoneMargin::LENIENT`], in pixels.
pub const LENIENT_ZONE_MARGIN: f64 = 50.0;

/// Inset applied to the zone edges.
///
/// The zone is engaged while `first_top + top <= 0` and `last_bottom - bottom >= viewport_height`,
/// so positive values shrink it at both ends: the run must be scrolled `top` pixels past its first
/// edge before the zone engages, and the zone disengages `bottom` pixels before the last edge
/// reaches the viewport bottom. With a positive margin, a first or last section aligned exactly
/// with the viewport is outside the zone.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoneMargin {
    /// Inset added to the first section's top edge.
    pub top: f64,
    /// Inset subtracted from the last section's bottom edge.
    pub bottom: f64,
}

impl ZoneMargin {
    /// No inset: the zone follows the section edges exactly.
    pub const STRICT: Self = Self::uniform(0.0);
    /// Both edges pulled 50 px inward.
    pub const LENIENT: Self = Self::uniform(LENIENT_ZONE_MARGIN);

    /// The same inset on both edges.
    pub const fn uniform(margin: f64) -> Self {
        Self {
            top: margin,
            bottom: margin,
        }
    }
}

/// How the active section is chosen.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActivePolicy {
    /// Poll on every refresh: the section spanning the viewport midline is active.
    #[default]
    Midline,
    /// Driven by visibility entries: a section becomes active when more than `threshold`
    /// of its height is visible.
    Intersection {
        /// Visible fraction in `[0, 1)`.
        threshold: f64,
    },
}

/// Timing handed to the scroll-to capability together with the cooldown that approximates it.
///
/// The platform gives no completion signal for an animated scroll, so the cooldown stands in
/// for "animation finished". The two values are tuned as a pair: a cooldown shorter than the
/// animation lets a second jump start mid-flight, a longer one drops gestures after the page
/// has visibly settled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollTiming {
    /// Requested animation duration, in milliseconds.
    pub duration_ms: u32,
    /// How long jumps stay blocked after a dispatch, in milliseconds.
    pub cooldown_ms: u32,
}

impl ScrollTiming {
    /// Animation hint and cooldown set to the same value.
    pub const fn matched(ms: u32) -> Self {
        Self {
            duration_ms: ms,
            cooldown_ms: ms,
        }
    }

    /// Requested animation duration.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    /// Cooldown after a dispatched jump.
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(u64::from(self.cooldown_ms))
    }
}

impl Default for ScrollTiming {
    fn default() -> Self {
        Self::matched(DEFAULT_COOLDOWN_MS)
    }
}

/// Configuration of one [`SnapRegion`](crate::region::SnapRegion).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SnapConfig {
    /// Inset applied to the zone edges.
    pub zone_margin: ZoneMargin,
    /// Active-section tracking strategy.
    pub active: ActivePolicy,
    /// Vertical travel (px) a swipe must exceed before it requests a jump.
    pub swipe_threshold: f64,
    /// Animation hint and cooldown.
    pub timing: ScrollTiming,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            zone_margin: ZoneMargin::STRICT,
            active: ActivePolicy::Midline,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            timing: ScrollTiming::default(),
        }
    }
}

impl SnapConfig {
    /// Inset zone edges with intersection-ratio tracking.
    pub fn lenient() -> Self {
        Self {
            zone_margin: ZoneMargin::LENIENT,
            active: ActivePolicy::Intersection {
                threshold: DEFAULT_INTERSECTION_THRESHOLD,
            },
            ..Self::default()
        }
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), SetupError> {
        if !self.zone_margin.top.is_finite() || !self.zone_margin.bottom.is_finite() {
            return Err(SetupError::InvalidMargin);
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold < 0.0 {
            return Err(SetupError::InvalidSwipeThreshold(self.swipe_threshold));
        }
        if let ActivePolicy::Intersection { threshold } = self.active
            && (!threshold.is_finite() || threshold < 0.0 || threshold >= 1.0)
        {
            return Err(SetupError::InvalidIntersectionThreshold(threshold));
        }
        if self.timing.cooldown_ms == 0 {
            return Err(SetupError::ZeroCooldown);
        }
        Ok(())
    }
}
