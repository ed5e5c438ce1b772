// Host-side tests for CSS serialization, artwork markup and the line-up.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod artwork {
        include!("../src/core/artwork.rs");
    }
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod stage {
        include!("../src/core/stage.rs");
    }
    pub mod style {
        include!("../src/core/style.rs");
    }
}

use crate::core::artwork::{sneaker_svg, upper_hue};
use crate::core::catalog::default_frames;
use crate::core::stage::{active_index, frame_visual, StageParams};
use crate::core::style::*;
use glam::Vec2;

#[test]
fn fixed_formats_like_to_fixed_without_negative_zero() {
    assert_eq!(fixed(80.0, 2), "80.00");
    assert_eq!(fixed(-1.5, 2), "-1.50");
    assert_eq!(fixed(2.0 / 3.0, 3), "0.667");
    assert_eq!(fixed(-0.0, 2), "0.00");
    assert_eq!(fixed(-0.001, 2), "0.00");
}

#[test]
fn centred_frame_serializes_to_resting_transform() {
    let params = StageParams::default();
    let v = frame_visual(1, active_index(0.5, 3), Vec2::ZERO, &params);
    assert_eq!(opacity_css(&v), "1");
    assert_eq!(
        transform_css(&v),
        "translate3d(0, 0.00px, 80.00px) rotateZ(0.00deg) rotateX(0.00deg) rotateY(0.00deg) scale(1.020)"
    );
    assert_eq!(
        filter_css(&v),
        "drop-shadow(0 40px 70px rgba(0,0,0,0.65)) drop-shadow(0 0 24px rgba(255,255,255,0.600))"
    );
}

#[test]
fn past_frame_serializes_pushed_back_and_rolled() {
    let params = StageParams::default();
    let v = frame_visual(0, 1.0, Vec2::new(5.0, 5.0), &params);
    assert_eq!(opacity_css(&v), "0");
    assert_eq!(
        transform_css(&v),
        "translate3d(0, -46.00px, -140.00px) rotateZ(10.00deg) rotateX(0.00deg) rotateY(0.00deg) scale(0.860)"
    );
    assert!(filter_css(&v).ends_with("rgba(255,255,255,0.250))"));
}

#[test]
fn half_faded_frame_keeps_fractional_opacity() {
    let params = StageParams::default();
    let v = frame_visual(1, 0.5, Vec2::ZERO, &params);
    assert_eq!(opacity_css(&v), "0.5");
}

#[test]
fn hue_is_written_in_whole_degrees() {
    assert_eq!(hue_css(229.6), "230");
    assert_eq!(hue_css(110.0), "110");
    assert_eq!(hue_css(349.5), "350");
}

#[test]
fn gallery_height_is_in_viewport_units() {
    assert_eq!(gallery_height_css(420), "420vh");
}

#[test]
fn upper_hue_is_offset_and_wrapped() {
    assert_eq!(upper_hue(205), 225);
    assert_eq!(upper_hue(350), 10);
    assert_eq!(upper_hue(700), 0);
}

#[test]
fn artwork_uses_frame_scoped_ids_and_model_colors() {
    let svg = sneaker_svg(2, 350, "#FF416C");
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"id="soleGrad-2""#));
    assert!(svg.contains("url(#soleGrad-2)"));
    assert!(svg.contains("url(#upperGrad-2)"));
    assert!(svg.contains("url(#soft-2)"));
    assert!(svg.contains("hsl(350 70% 92%)"));
    assert!(svg.contains("hsl(10 90% 60%)"));
    assert!(svg.contains(r##"fill="#FF416C""##));
    assert!(!svg.contains("soleGrad-0"));
}

#[test]
fn default_lineup_is_ordered_and_indexed() {
    let frames = default_frames();
    let titles: Vec<&str> = frames.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, vec!["Velocity X", "Aero Knit", "Phantom Pro"]);
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.index, i);
        assert!(f.artwork.contains(&format!("soleGrad-{i}")));
        assert!(f.artwork.contains(&f.accent));
    }
    let hues: Vec<f32> = frames.iter().map(|f| f.primary_hue).collect();
    assert_eq!(hues, vec![350.0, 205.0, 110.0]);
}
