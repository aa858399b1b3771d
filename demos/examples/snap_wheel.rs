// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel jumps, cooldown, and the escape hatch.
//!
//! Three 800 px sections in an 800 px viewport. A wheel notch jumps one section, a second notch
//! during the cooldown is absorbed, and scrolling down from the last section is left to the
//! platform.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_snap_demos --example snap_wheel`

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use understory_snap::config::SnapConfig;
use understory_snap::geometry::StackedLayout;
use understory_snap::gesture::WheelInput;
use understory_snap::region::SnapRegion;
use understory_snap::types::Outcome;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut layout = StackedLayout::stacked(3, 800.0, 800.0);
    let (mut region, seeded) =
        SnapRegion::attach(SnapConfig::default(), &layout, Duration::ZERO).unwrap();
    println!(
        "== Load ==\n  in_zone={} active={:?} changes={:?}",
        region.in_zone(),
        region.active(),
        seeded.changes
    );

    let notch = WheelInput { delta_y: 120.0 };
    let mut now = Duration::ZERO;

    let first = region.on_wheel(notch, now, &mut layout);
    let _ = region.refresh(&layout, now);
    println!(
        "== Wheel @0ms ==\n  outcome={first:?} offset={} jumping={}",
        layout.scroll_offset(),
        region.is_jumping()
    );
    assert_eq!(first, Outcome::Consume);
    assert_eq!(region.active(), Some(1));

    now += Duration::from_millis(100);
    let second = region.on_wheel(notch, now, &mut layout);
    println!(
        "== Wheel @100ms ==\n  outcome={second:?} offset={}",
        layout.scroll_offset()
    );
    assert_eq!(second, Outcome::Consume);
    assert_eq!(layout.scroll_offset(), 800.0, "no second jump during cooldown");

    now = region.cooldown_deadline().unwrap();
    let tick = region.tick(now);
    println!("== Timer @{}ms ==\n  changes={:?}", now.as_millis(), tick.changes);
    assert!(!region.is_jumping());

    let third = region.on_wheel(notch, now, &mut layout);
    let _ = region.refresh(&layout, now);
    assert_eq!(third, Outcome::Consume);
    assert_eq!(region.active(), Some(2));
    let _ = region.tick(region.cooldown_deadline().unwrap());

    let escape = region.on_wheel(notch, now + Duration::from_secs(1), &mut layout);
    println!(
        "== Wheel at last section ==\n  outcome={escape:?} jumping={}",
        region.is_jumping()
    );
    assert_eq!(escape, Outcome::Pass, "leaving the run is never blocked");
}
