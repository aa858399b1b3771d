// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_snap --heading-base-level=0

//! Understory Snap: deterministic, `no_std` section snapping for scroll regions.
//!
//! ## Overview
//!
//! A page holds a run of full-viewport sections. While the viewport is inside that run (the
//! *snap zone*), wheel and swipe gestures jump to the neighbouring section with an animated scroll
//! instead of free-scrolling. At the first and last section, gestures pointing out of the run are
//! left alone so the user can leave the zone natively.
//!
//! This crate owns the decisions, not the platform:
//! it reads section geometry through a [`ViewportProbe`](crate::geometry::ViewportProbe), requests
//! scrolls through a [`ScrollTo`](crate::jump::ScrollTo) capability, and tells the host whether to
//! suppress each input event's default scroll via [`Outcome`](crate::types::Outcome).
//!
//! ## Components
//!
//! - [`zone`]: the zone detector, sole writer of the "in snap zone" flag.
//! - [`active`]: the active section tracker (midline polling or intersection entries).
//! - [`jump`]: the jump engine with its at-most-one-in-flight cooldown.
//! - [`gesture`]: wheel and touch adapters with the escape hatch.
//! - [`region`]: [`SnapRegion`](crate::region::SnapRegion), which owns one of each for a run of sections.
//! - [`geometry`]: the probe trait and [`StackedLayout`](crate::geometry::StackedLayout).
//! - [`config`]: [`SnapConfig`](crate::config::SnapConfig) with strict and lenient presets.
//!
//! ## Time
//!
//! Timestamps are [`Duration`](core::time::Duration)s since any fixed epoch the host chooses
//! (for example `performance.now()`). The cooldown is a deadline: hosts arm a timer for
//! [`SnapRegion::cooldown_deadline`](crate::region::SnapRegion::cooldown_deadline) and call
//! [`SnapRegion::tick`](crate::region::SnapRegion::tick). Gesture handlers also expire a due cooldown
//! before acting, so a late timer never blocks a gesture past its deadline.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_snap::config::SnapConfig;
//! use understory_snap::geometry::StackedLayout;
//! use understory_snap::gesture::{TouchInput, WheelInput};
//! use understory_snap::region::SnapRegion;
//! use understory_snap::types::Outcome;
//!
//! // Three 800 px sections in an 800 px viewport, scrolled to the top.
//! let mut layout = StackedLayout::stacked(3, 800.0, 800.0);
//! let (mut region, _) = SnapRegion::attach(SnapConfig::default(), &layout, Duration::ZERO).unwrap();
//!
//! // A wheel notch down jumps to section 1 and starts the cooldown.
//! let t0 = Duration::ZERO;
//! assert_eq!(region.on_wheel(WheelInput { delta_y: 120.0 }, t0, &mut layout), Outcome::Consume);
//! let _ = region.refresh(&layout, t0);
//! assert_eq!(region.active(), Some(1));
//!
//! // 100 ms later the wheel is absorbed without a second jump.
//! let t1 = Duration::from_millis(100);
//! assert_eq!(region.on_wheel(WheelInput { delta_y: 120.0 }, t1, &mut layout), Outcome::Consume);
//! assert_eq!(layout.scroll_offset(), 800.0);
//!
//! // After the cooldown, a 70 px swipe up jumps once more.
//! let _ = region.tick(Duration::from_millis(800));
//! region.on_touch_start(TouchInput { y: 500.0 });
//! let t2 = Duration::from_millis(900);
//! assert_eq!(region.on_touch_move(TouchInput { y: 430.0 }, t2, &mut layout), Outcome::Consume);
//! let _ = region.refresh(&layout, t2);
//! assert_eq!(region.active(), Some(2));
//!
//! // At the last section, scrolling down is left to the platform.
//! let _ = region.tick(Duration::from_millis(1_700));
//! assert_eq!(region.on_wheel(WheelInput { delta_y: 120.0 }, Duration::from_millis(1_700), &mut layout), Outcome::Pass);
//! ```
//!
//! ## Logging
//!
//! Records go through the [`log`] facade: a warning when a region is built without sections,
//! debug records for zone, active-section and jump transitions, and trace records for absorbed
//! gestures.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod active;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod jump;
pub mod region;
pub mod types;
pub mod zone;
