// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One swipe, one jump.
//!
//! A finger travels from y=500 well past the 60 px threshold before lifting. Only the first
//! crossing requests a jump; the rest of the swipe is ignored.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p understory_snap_demos --example snap_touch`

use std::time::Duration;

use tracing_subscriber::EnvFilter;
use understory_snap::config::SnapConfig;
use understory_snap::geometry::StackedLayout;
use understory_snap::gesture::TouchInput;
use understory_snap::jump::ScrollHint;
use understory_snap::region::SnapRegion;
use understory_snap::types::Outcome;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let layout = StackedLayout::stacked(3, 800.0, 800.0);
    let (mut region, _) =
        SnapRegion::attach(SnapConfig::default(), &layout, Duration::ZERO).unwrap();

    let mut requested = Vec::new();
    let mut scroll = |index: usize, hint: ScrollHint| requested.push((index, hint.duration));

    region.on_touch_start(TouchInput { y: 500.0 });
    let mut outcomes = Vec::new();
    for (step, y) in [480.0, 430.0, 380.0, 250.0, 120.0].into_iter().enumerate() {
        let now = Duration::from_millis(16 * step as u64);
        let outcome = region.on_touch_move(TouchInput { y }, now, &mut scroll);
        println!("  move y={y:>5} -> {outcome:?}");
        outcomes.push(outcome);
    }
    region.on_touch_end();

    println!("== Requested scrolls ==\n  {requested:?}");
    assert_eq!(
        outcomes,
        [
            Outcome::Pass,
            Outcome::Consume,
            Outcome::Pass,
            Outcome::Pass,
            Outcome::Pass
        ]
    );
    assert_eq!(requested.len(), 1);
    assert_eq!(requested[0].0, 1);
}
