//! Build script for the alarm clock firmware.
//!
//! 1. Passes the cortex-m-rt and defmt linker scripts when building for a
//!    bare-metal target (host unit tests link normally).
//! 2. Exports the build time as `ALARM_CLOCK_BUILD_UNIX`, which seeds the RTC
//!    after it reports a power loss. `SOURCE_DATE_EPOCH` overrides it.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("thumb") {
        println!("cargo:rustc-link-arg-bins=--nmagic");
        println!("cargo:rustc-link-arg-bins=-Tlink.x");
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    let build_unix = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    println!("cargo:rustc-env=ALARM_CLOCK_BUILD_UNIX={build_unix}");
}
