// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A snap region: one run of sections with its zone flag, active section, jump engine and touch state.
//!
//! ## Wiring
//!
//! A host typically forwards its events like this:
//!
//! | platform event | call |
//! |---|---|
//! | load, scroll, resize | [`SnapRegion::refresh`] (and [`SnapRegion::sample_intersections`] with the intersection policy) |
//! | visibility observer callback | [`SnapRegion::observe`] |
//! | wheel | [`SnapRegion::on_wheel`] |
//! | touchstart / touchmove / touchend | [`SnapRegion::on_touch_start`] / [`SnapRegion::on_touch_move`] / [`SnapRegion::on_touch_end`] |
//! | cooldown timer (armed for [`SnapRegion::cooldown_deadline`]) | [`SnapRegion::tick`] |
//!
//! Wheel and touch-move handlers return an [`Outcome`]; on [`Outcome::Consume`] the host prevents
//! the default scroll. Refreshes return an [`Update`] describing which observable flags moved.
//!
//! Every handler runs to completion before the next one, so the region is driven through `&mut self`
//! and needs no locking. Several regions on one page are independent values.

use core::time::Duration;

use crate::active::{ActiveChange, ActiveTracker, IntersectionEntry, IntersectionSampler};
use crate::config::{ActivePolicy, SnapConfig};
use crate::error::SetupError;
use crate::geometry::ViewportProbe;
use crate::gesture::{self, GestureContext, TouchInput, TouchTracker, WheelInput};
use crate::jump::{JumpEngine, ScrollTo};
use crate::types::{Changes, Outcome};
use crate::zone::ZoneDetector;

/// What changed during one step of a region.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Update {
    /// Observable flags that moved.
    pub changes: Changes,
    /// Transition of the active designation.
    pub active: ActiveChange,
}

impl Update {
    /// True if nothing observable changed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    fn record_active(&mut self, change: ActiveChange) {
        if change.is_empty() {
            return;
        }
        // Fold successive transitions into one from the first old to the last new section.
        let deactivated = if self.active.is_empty() {
            change.deactivated
        } else {
            self.active.deactivated
        };
        self.active = ActiveChange {
            deactivated,
            activated: change.activated,
        };
        if self.active.deactivated == self.active.activated {
            self.active = ActiveChange::default();
            self.changes.remove(Changes::ACTIVE);
        } else {
            self.changes |= Changes::ACTIVE;
        }
    }
}

/// Snapping state for one run of sections.
///
/// ```
/// use core::time::Duration;
/// use understory_snap::config::SnapConfig;
/// use understory_snap::geometry::StackedLayout;
/// use understory_snap::gesture::WheelInput;
/// use understory_snap::region::SnapRegion;
/// use understory_snap::types::Outcome;
///
/// let mut layout = StackedLayout::stacked(3, 800.0, 800.0);
/// let (mut region, _) = SnapRegion::attach(SnapConfig::default(), &layout, Duration::ZERO).unwrap();
/// assert!(region.in_zone());
/// assert_eq!(region.active(), Some(0));
///
/// let outcome = region.on_wheel(WheelInput { delta_y: 120.0 }, Duration::ZERO, &mut layout);
/// assert_eq!(outcome, Outcome::Consume);
/// assert_eq!(layout.scroll_offset(), 800.0);
/// ```
#[derive(Clone, Debug)]
pub struct SnapRegion {
    config: SnapConfig,
    count: usize,
    zone: ZoneDetector,
    tracker: ActiveTracker,
    sampler: Option<IntersectionSampler>,
    jump: JumpEngine,
    touch: TouchTracker,
}

impl SnapRegion {
    /// Create a region for `section_count` sections.
    ///
    /// Nothing is evaluated yet; call [`Self::refresh`] (or use [`Self::attach`]) to seed the zone
    /// and active section.
    pub fn new(config: SnapConfig, section_count: usize) -> Result<Self, SetupError> {
        if section_count == 0 {
            log::warn!("snap region has no sections; snapping disabled");
            return Err(SetupError::NoSections);
        }
        config.validate()?;
        let sampler = match config.active {
            ActivePolicy::Midline => None,
            ActivePolicy::Intersection { threshold } => {
                Some(IntersectionSampler::new(section_count, threshold))
            }
        };
        Ok(Self {
            config,
            count: section_count,
            zone: ZoneDetector::new(config.zone_margin),
            tracker: ActiveTracker::new(section_count),
            sampler,
            jump: JumpEngine::new(config.timing),
            touch: TouchTracker::new(config.swipe_threshold),
        })
    }

    /// Create a region over `probe`'s sections and evaluate it once.
    ///
    /// This seeds the correct state when the page loads already scrolled into the zone.
    /// With the intersection policy the built-in sampler provides the initial entries.
    pub fn attach<P: ViewportProbe + ?Sized>(
        config: SnapConfig,
        probe: &P,
        now: Duration,
    ) -> Result<(Self, Update), SetupError> {
        let mut region = Self::new(config, probe.section_count())?;
        let mut update = region.refresh(probe, now);
        if region.sampler.is_some() {
            let sampled = region.sample_intersections(probe, now);
            update.changes |= sampled.changes.difference(Changes::ACTIVE);
            update.record_active(sampled.active);
        }
        Ok((region, update))
    }

    /// Configuration the region was built with.
    pub fn config(&self) -> &SnapConfig {
        &self.config
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.count
    }

    /// Document-level "in snap zone" flag.
    #[inline]
    pub fn in_zone(&self) -> bool {
        self.zone.in_zone()
    }

    /// The active section, if any.
    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.tracker.active()
    }

    /// Per-section "is active" flag.
    pub fn is_active(&self, index: usize) -> bool {
        self.tracker.is_active(index)
    }

    /// True while a jump is cooling down.
    pub fn is_jumping(&self) -> bool {
        self.jump.is_in_flight()
    }

    /// When the current cooldown ends. Arm a timer for this instant and call [`Self::tick`].
    pub fn cooldown_deadline(&self) -> Option<Duration> {
        self.jump.deadline()
    }

    /// Origin of the touch swipe being tracked, if any.
    pub fn gesture_origin(&self) -> Option<f64> {
        self.touch.origin()
    }

    /// Load, scroll and resize handler.
    ///
    /// Expires the cooldown if due, re-evaluates the zone, and with the midline policy re-polls
    /// the active section.
    pub fn refresh<P: ViewportProbe + ?Sized>(&mut self, probe: &P, now: Duration) -> Update {
        let mut update = self.tick(now);
        if self.zone.recompute(probe) {
            update.changes |= Changes::ZONE;
        }
        if self.sampler.is_none() {
            update.record_active(self.tracker.recompute_midline(probe));
        }
        update
    }

    /// Visibility observer callback: apply entries from the platform's observer.
    ///
    /// Meant for the intersection policy; with the midline policy the next refresh re-polls.
    pub fn observe(&mut self, entries: &[IntersectionEntry]) -> Update {
        let mut update = Update::default();
        update.record_active(self.tracker.apply_intersections(entries));
        update
    }

    /// Derive visibility entries from geometry with the built-in sampler and apply them.
    ///
    /// With the midline policy there is no sampler and this only expires the cooldown.
    pub fn sample_intersections<P: ViewportProbe + ?Sized>(
        &mut self,
        probe: &P,
        now: Duration,
    ) -> Update {
        let mut update = self.tick(now);
        if let Some(sampler) = &mut self.sampler {
            let entries = sampler.sample(probe);
            update.record_active(self.tracker.apply_intersections(&entries));
        }
        update
    }

    /// Cooldown timer callback.
    pub fn tick(&mut self, now: Duration) -> Update {
        let mut update = Update::default();
        if self.jump.expire(now) {
            update.changes |= Changes::JUMP;
        }
        update
    }

    /// Wheel handler. On [`Outcome::Consume`] the host must prevent the default scroll.
    pub fn on_wheel<S: ScrollTo + ?Sized>(
        &mut self,
        input: WheelInput,
        now: Duration,
        scroller: &mut S,
    ) -> Outcome {
        let _ = self.jump.expire(now);
        let ctx = self.context();
        gesture::wheel(input, ctx, &mut self.jump, now, scroller)
    }

    /// Touch start handler.
    pub fn on_touch_start(&mut self, input: TouchInput) {
        self.touch.start(input, self.zone.in_zone());
    }

    /// Touch move handler. On [`Outcome::Consume`] the host must prevent the default scroll.
    pub fn on_touch_move<S: ScrollTo + ?Sized>(
        &mut self,
        input: TouchInput,
        now: Duration,
        scroller: &mut S,
    ) -> Outcome {
        let _ = self.jump.expire(now);
        let ctx = self.context();
        self.touch.moved(input, ctx, &mut self.jump, now, scroller)
    }

    /// Touch end (or cancel) handler.
    pub fn on_touch_end(&mut self) {
        self.touch.end();
    }

    fn context(&self) -> GestureContext {
        GestureContext {
            in_zone: self.zone.in_zone(),
            active: self.tracker.active(),
            count: self.count,
        }
    }
}
