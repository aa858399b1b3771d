// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lenient zone with intersection-driven active tracking.
//!
//! Content above and below the run, zone edges pulled 50 px inward, and the active section chosen by
//! visible fraction (at least half of the section in view). The page is scrolled natively in
//! small steps and every change of the observable flags is printed.
//!
//! Run:
//! - `cargo run -p understory_snap_demos --example snap_intersection`

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use understory_snap::config::SnapConfig;
use understory_snap::geometry::StackedLayout;
use understory_snap::region::SnapRegion;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut layout = StackedLayout::stacked(4, 700.0, 700.0)
        .with_leading(500.0)
        .with_trailing(500.0);
    let (mut region, _) =
        SnapRegion::attach(SnapConfig::lenient(), &layout, Duration::ZERO).unwrap();

    let mut now = Duration::ZERO;
    let mut zone_flips = 0;
    while layout.scroll_offset() < layout.max_scroll() {
        layout.scroll_by(100.0);
        now += Duration::from_millis(16);
        let mut update = region.refresh(&layout, now);
        let sampled = region.sample_intersections(&layout, now);
        update.changes |= sampled.changes;
        if !update.is_empty() {
            println!(
                "offset={:>5} in_zone={:<5} active={:?} ({:?})",
                layout.scroll_offset(),
                region.in_zone(),
                region.active(),
                sampled.active
            );
        }
        if update.changes.contains(understory_snap::types::Changes::ZONE) {
            zone_flips += 1;
        }
        let active = (0..region.section_count())
            .filter(|&i| region.is_active(i))
            .count();
        assert!(active <= 1);
    }
    assert_eq!(zone_flips, 2, "entered once and left once");
    assert_eq!(region.active(), Some(3));
}
