// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn interpolation_ranges_match_the_stock_look() {
    // depth runs from -140 px (one frame away) to 80 px (centred)
    assert_eq!(DEPTH_OFFSET_PX, -140.0);
    assert_eq!(DEPTH_SPAN_PX + DEPTH_OFFSET_PX, 80.0);

    assert!((SCALE_MIN + SCALE_SPAN - 1.02).abs() < 1e-6);
    assert!(SCALE_MIN > 0.0 && SCALE_SPAN > 0.0);

    // glow is an alpha channel
    assert!(GLOW_BASE >= 0.0 && GLOW_BASE + GLOW_SPAN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn epsilon_and_tilt_are_small() {
    assert!(PROGRESS_EPSILON > 0.0 && PROGRESS_EPSILON < 0.01);
    assert!(TILT_MAX_DEG > 0.0 && TILT_MAX_DEG <= 15.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn gallery_pacing_is_at_least_the_floor_per_two_frames() {
    assert!(GALLERY_MIN_VH >= 100);
    assert!(2 * GALLERY_VH_PER_FRAME >= GALLERY_MIN_VH);
    assert!(INLINE_FRAMES >= 3);
}

#[test]
fn element_ids_are_distinct_and_non_empty() {
    let ids = [STAGE_ID, GALLERY_ID, PRODUCT_NAME_ID, PRODUCT_DESC_ID, YEAR_ID];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(HUE_PROPERTY.starts_with("--"));
    assert!(FRAME_INDEX_ATTR.starts_with("data-"));
}
