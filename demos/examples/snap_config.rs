// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load a region configuration from TOML.
//!
//! Missing fields fall back to the defaults; invalid values are rejected when the region is built.
//!
//! Run:
//! - `cargo run -p understory_snap_demos --example snap_config`

use understory_snap::config::{ActivePolicy, ScrollTiming, SnapConfig, ZoneMargin};
use understory_snap::error::SetupError;
use understory_snap::region::SnapRegion;

const CONFIG: &str = r#"
swipe_threshold = 48.0

[zone_margin]
top = 50.0
bottom = 50.0

[active.intersection]
threshold = 0.6

[timing]
duration_ms = 600
cooldown_ms = 700
"#;

fn main() {
    let config: SnapConfig = toml::from_str(CONFIG).unwrap();
    println!("== Loaded ==\n  {config:#?}");
    assert_eq!(config.zone_margin, ZoneMargin::LENIENT);
    assert_eq!(config.active, ActivePolicy::Intersection { threshold: 0.6 });
    assert_eq!(
        config.timing,
        ScrollTiming {
            duration_ms: 600,
            cooldown_ms: 700,
        }
    );
    assert!(SnapRegion::new(config, 3).is_ok());

    let defaults: SnapConfig = toml::from_str("").unwrap();
    assert_eq!(defaults, SnapConfig::default());

    let broken: SnapConfig = toml::from_str("swipe_threshold = -5.0").unwrap();
    let err = SnapRegion::new(broken, 3).unwrap_err();
    println!("== Rejected ==\n  {err}");
    assert_eq!(err, SetupError::InvalidSwipeThreshold(-5.0));
}
