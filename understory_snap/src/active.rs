// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active section tracking: which single section is currently in focus.
//!
//! ## Strategies
//!
//! - Midline polling ([`ActiveTracker::recompute_midline`]): on every refresh, the section whose
//!   vertical extent contains the viewport midline becomes active.
//! - Intersection entries ([`ActiveTracker::apply_intersections`]): driven by a visibility observer.
//!   An entry above the threshold clears every section and activates its target.
//!   [`IntersectionSampler`] derives such entries from geometry when the platform has no observer.
//!
//! Both strategies keep at most one section active. Each update returns an [`ActiveChange`] with the
//! minimal transition (old section deactivated, new section activated) so presentation layers can
//! toggle only what moved.
//!
//! ## Ties
//!
//! With touching sections the midline can sit exactly on a shared edge, so two sections qualify.
//! The one with the higher index wins. For intersection entries, the last intersecting entry in a
//! batch wins.
//!
//! ## Minimal example
//!
//! ```
//! use understory_snap::active::ActiveTracker;
//! use understory_snap::geometry::StackedLayout;
//!
//! let mut layout = StackedLayout::stacked(3, 800.0, 800.0);
//! let mut tracker = ActiveTracker::new(3);
//!
//! let change = tracker.recompute_midline(&layout);
//! assert_eq!(change.activated, Some(0));
//!
//! layout.set_scroll_offset(900.0);
//! let change = tracker.recompute_midline(&layout);
//! assert_eq!((change.deactivated, change.activated), (Some(0), Some(1)));
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::geometry::{ViewportProbe, midline, visible_fraction};

/// Transition of the active designation produced by one update.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ActiveChange {
    /// Section that lost the designation.
    pub deactivated: Option<usize>,
    /// Section that gained it.
    pub activated: Option<usize>,
}

impl ActiveChange {
    /// True if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.deactivated.is_none() && self.activated.is_none()
    }
}

/// A visibility report for one section.
///
/// Either produced by the host's own observer or by [`IntersectionSampler`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntersectionEntry {
    /// Section index.
    pub index: usize,
    /// Visible fraction of the section's height.
    pub ratio: f64,
    /// True if `ratio` exceeds the observation threshold.
    ///
    /// A section exactly at the threshold is not intersecting, so at a 50/50 split with the
    /// default threshold neither section qualifies and the previous one stays active.
    pub is_intersecting: bool,
}

/// Owner of the per-section "active" designation.
#[derive(Clone, Debug)]
pub struct ActiveTracker {
    count: usize,
    active: Option<usize>,
}

impl ActiveTracker {
    /// Create a tracker for `count` sections with nothing active.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            active: None,
        }
    }

    /// Number of tracked sections.
    pub fn section_count(&self) -> usize {
        self.count
    }

    /// The active section, if any.
    #[inline]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// True if `index` carries the active designation.
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Drop the designation from every section.
    pub fn clear(&mut self) -> ActiveChange {
        self.set(None)
    }

    /// Poll: activate the section spanning the viewport midline.
    ///
    /// A section qualifies when `top <= viewport_height / 2 <= bottom`. If none qualifies, no
    /// section is active afterwards.
    pub fn recompute_midline<P: ViewportProbe + ?Sized>(&mut self, probe: &P) -> ActiveChange {
        let mid = midline(probe.viewport_height());
        let count = self.count.min(probe.section_count());
        let next = (0..count).rev().find(|&i| {
            let r = probe.section_rect(i);
            r.y0 <= mid && mid <= r.y1
        });
        self.set(next)
    }

    /// Apply a batch of visibility entries in order.
    ///
    /// Each intersecting entry makes its target the only active section. Entries below the
    /// threshold, and entries for unknown sections, are ignored.
    pub fn apply_intersections(&mut self, entries: &[IntersectionEntry]) -> ActiveChange {
        let next = entries
            .iter()
            .rev()
            .find(|e| e.is_intersecting && e.index < self.count)
            .map(|e| e.index);
        match next {
            Some(index) => self.set(Some(index)),
            None => ActiveChange::default(),
        }
    }

    fn set(&mut self, next: Option<usize>) -> ActiveChange {
        if next == self.active {
            return ActiveChange::default();
        }
        let change = ActiveChange {
            deactivated: self.active,
            activated: next,
        };
        self.active = next;
        match next {
            Some(i) => log::debug!("section {i} active"),
            None => log::debug!("no active section"),
        }
        change
    }
}

/// Geometry-driven stand-in for a platform visibility observer.
///
/// The first [`sample`](Self::sample) reports every section, as an observer does when it starts
/// observing. Later samples report only sections whose visible fraction crossed the threshold.
#[derive(Clone, Debug)]
pub struct IntersectionSampler {
    threshold: f64,
    above: Vec<Option<bool>>,
}

impl IntersectionSampler {
    /// Observe `count` sections against `threshold` (a visible fraction in `[0, 1)`).
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            threshold,
            above: vec![None; count],
        }
    }

    /// Observation threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Read the geometry and return entries for every section whose threshold side changed,
    /// in index order.
    pub fn sample<P: ViewportProbe + ?Sized>(&mut self, probe: &P) -> Vec<IntersectionEntry> {
        let vh = probe.viewport_height();
        let count = self.above.len().min(probe.section_count());
        let mut out = Vec::new();
        for (index, above) in self.above.iter_mut().enumerate().take(count) {
            let ratio = visible_fraction(probe.section_rect(index), vh);
            let is_intersecting = ratio > self.threshold;
            if *above != Some(is_intersecting) {
                *above = Some(is_intersecting);
                out.push(IntersectionEntry {
                    index,
                    ratio,
                    is_intersecting,
                });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::StackedLayout;

    fn entry(index: usize, ratio: f64) -> IntersectionEntry {
        IntersectionEntry {
            index,
            ratio,
            is_intersecting: ratio > 0.5,
        }
    }

    #[test]
    fn midline_picks_section_spanning_the_middle() {
        let mut layout = StackedLayout::stacked(3, 800.0, 800.0);
        let mut t = ActiveTracker::new(3);
        assert_eq!(
            t.recompute_midline(&layout),
            ActiveChange {
                deactivated: None,
                activated: Some(0),
            }
        );
        assert!(t.is_active(0));

        layout.set_scroll_offset(1500.0);
        assert_eq!(
            t.recompute_midline(&layout),
            ActiveChange {
                deactivated: Some(0),
                activated: Some(2),
            }
        );
        assert_eq!(t.active(), Some(2));
        assert!(!t.is_active(0));
    }

    #[test]
    fn unchanged_midline_reports_nothing() {
        let layout = StackedLayout::stacked(3, 800.0, 800.0);
        let mut t = ActiveTracker::new(3);
        let _ = t.recompute_midline(&layout);
        assert!(t.recompute_midline(&layout).is_empty());
    }

    #[test]
    fn shared_edge_on_midline_prefers_higher_index() {
        // Offset 400: section 0 spans [-400, 400], section 1 spans [400, 1200]; midline is 400.
        let mut layout = StackedLayout::stacked(3, 800.0, 800.0);
        layout.set_scroll_offset(400.0);
        let mut t = ActiveTracker::new(3);
        let _ = t.recompute_midline(&layout);
        assert_eq!(t.active(), Some(1));
    }

    #[test]
    fn midline_outside_every_section_clears_active() {
        let mut layout = StackedLayout::stacked(2, 800.0, 800.0).with_leading(1000.0);
        let mut t = ActiveTracker::new(2);
        assert!(t.recompute_midline(&layout).is_empty());
        assert_eq!(t.active(), None);

        layout.set_scroll_offset(1000.0);
        let _ = t.recompute_midline(&layout);
        assert_eq!(t.active(), Some(0));

        layout.set_scroll_offset(0.0);
        assert_eq!(
            t.recompute_midline(&layout),
            ActiveChange {
                deactivated: Some(0),
                activated: None,
            }
        );
    }

    #[test]
    fn intersecting_entry_becomes_sole_active() {
        let mut t = ActiveTracker::new(3);
        let c = t.apply_intersections(&[entry(0, 1.0)]);
        assert_eq!(c.activated, Some(0));

        let c = t.apply_intersections(&[entry(0, 0.4), entry(1, 0.6)]);
        assert_eq!(
            c,
            ActiveChange {
                deactivated: Some(0),
                activated: Some(1),
            }
        );
        assert!((0..3).filter(|&i| t.is_active(i)).eq([1]));
    }

    #[test]
    fn last_intersecting_entry_wins() {
        let mut t = ActiveTracker::new(3);
        let _ = t.apply_intersections(&[entry(0, 0.9), entry(2, 0.7), entry(1, 0.1)]);
        assert_eq!(t.active(), Some(2));
    }

    #[test]
    fn entries_below_threshold_or_unknown_are_ignored() {
        let mut t = ActiveTracker::new(2);
        let _ = t.apply_intersections(&[entry(1, 1.0)]);
        assert!(t.apply_intersections(&[entry(1, 0.2)]).is_empty());
        assert!(t.apply_intersections(&[entry(5, 1.0)]).is_empty());
        assert_eq!(t.active(), Some(1));
    }

    #[test]
    fn sampler_reports_everything_first_then_crossings() {
        let mut layout = StackedLayout::stacked(3, 800.0, 800.0);
        let mut s = IntersectionSampler::new(3, 0.5);

        let first = s.sample(&layout);
        assert_eq!(first.len(), 3);
        assert!(first[0].is_intersecting);
        assert!(!first[1].is_intersecting);
        assert!(!first[2].is_intersecting);

        // Section 1 is 25% visible: no crossing yet.
        layout.set_scroll_offset(200.0);
        assert!(s.sample(&layout).is_empty());

        // Section 0 drops to 37.5%, section 1 rises to 62.5%.
        layout.set_scroll_offset(500.0);
        let crossed = s.sample(&layout);
        assert_eq!(
            crossed,
            [
                IntersectionEntry {
                    index: 0,
                    ratio: 0.375,
                    is_intersecting: false,
                },
                IntersectionEntry {
                    index: 1,
                    ratio: 0.625,
                    is_intersecting: true,
                },
            ]
        );

        let mut t = ActiveTracker::new(3);
        let _ = t.apply_intersections(&first);
        let _ = t.apply_intersections(&crossed);
        assert_eq!(t.active(), Some(1));
    }

    #[test]
    fn even_split_is_not_intersecting() {
        let mut layout = StackedLayout::stacked(3, 800.0, 800.0);
        let mut s = IntersectionSampler::new(3, 0.5);
        let mut t = ActiveTracker::new(3);
        let _ = t.apply_intersections(&s.sample(&layout));
        assert_eq!(t.active(), Some(0));

        // Sections 0 and 1 are exactly half visible.
        layout.set_scroll_offset(400.0);
        let entries = s.sample(&layout);
        assert_eq!(
            entries,
            [IntersectionEntry {
                index: 0,
                ratio: 0.5,
                is_intersecting: false,
            }]
        );
        assert!(t.apply_intersections(&entries).is_empty());
        assert_eq!(t.active(), Some(0));

        layout.set_scroll_offset(401.0);
        let _ = t.apply_intersections(&s.sample(&layout));
        assert_eq!(t.active(), Some(1));
    }
}
