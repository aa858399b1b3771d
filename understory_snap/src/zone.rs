// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone detection: is the viewport inside the bounded run of sections?
//!
//! The zone is engaged while the first section's top edge has reached the viewport top and the
//! last section's bottom edge has not yet risen above the viewport bottom:
//!
//! ```text
//! (first_top + margin.top) <= 0  &&  (last_bottom - margin.bottom) >= viewport_height
//! ```
//!
//! A positive [`ZoneMargin`] pulls both edges inward: the zone engages only once the run is
//! scrolled that far past its first edge, and disengages that far before the last edge.
//!
//! ```
//! use understory_snap::config::ZoneMargin;
//! use understory_snap::geometry::StackedLayout;
//! use understory_snap::zone::ZoneDetector;
//!
//! let layout = StackedLayout::stacked(3, 800.0, 800.0).with_leading(400.0);
//! let mut zone = ZoneDetector::new(ZoneMargin::STRICT);
//! assert!(!zone.recompute(&layout));
//! assert!(!zone.in_zone());
//! ```

use crate::config::ZoneMargin;
use crate::geometry::ViewportProbe;

/// Sole writer of the "in snap zone" flag.
#[derive(Clone, Debug)]
pub struct ZoneDetector {
    margin: ZoneMargin,
    in_zone: bool,
}

impl ZoneDetector {
    /// Create a detector that starts outside the zone.
    pub fn new(margin: ZoneMargin) -> Self {
        Self {
            margin,
            in_zone: false,
        }
    }

    /// Margin applied to the edges.
    pub fn margin(&self) -> ZoneMargin {
        self.margin
    }

    /// Current zone flag.
    #[inline]
    pub fn in_zone(&self) -> bool {
        self.in_zone
    }

    /// Evaluate the zone rule against the current geometry.
    ///
    /// Returns true if the flag flipped. With no sections the zone is never engaged.
    pub fn recompute<P: ViewportProbe + ?Sized>(&mut self, probe: &P) -> bool {
        let next = self.evaluate(probe);
        if next == self.in_zone {
            return false;
        }
        self.in_zone = next;
        if next {
            log::debug!("entered snap zone");
        } else {
            log::debug!("left snap zone");
        }
        true
    }

    fn evaluate<P: ViewportProbe + ?Sized>(&self, probe: &P) -> bool {
        let Some(last) = probe.section_count().checked_sub(1) else {
            return false;
        };
        let first_top = probe.section_rect(0).y0;
        let last_bottom = probe.section_rect(last).y1;
        first_top + self.margin.top <= 0.0
            && last_bottom - self.margin.bottom >= probe.viewport_height()
    }
}
