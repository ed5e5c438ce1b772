use super::stage::FrameVisual;

// CSS serialization of frame visuals.

/// Fixed-point number with `digits` decimals; negative zero prints as zero.
#[inline]
pub fn fixed(value: f32, digits: usize) -> String {
    let s = format!("{:.*}", digits, value + 0.0);
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

#[inline]
pub fn opacity_css(visual: &FrameVisual) -> String {
    format!("{}", visual.opacity + 0.0)
}

pub fn transform_css(visual: &FrameVisual) -> String {
    format!(
        "translate3d(0, {}px, {}px) rotateZ({}deg) rotateX({}deg) rotateY({}deg) scale({})",
        fixed(visual.translate_y, 2),
        fixed(visual.translate_z, 2),
        fixed(visual.rotation_z, 2),
        fixed(visual.tilt_x, 2),
        fixed(visual.tilt_y, 2),
        fixed(visual.scale, 3),
    )
}

pub fn filter_css(visual: &FrameVisual) -> String {
    format!(
        "drop-shadow(0 40px 70px rgba(0,0,0,0.65)) drop-shadow(0 0 24px rgba(255,255,255,{}))",
        fixed(visual.glow_strength, 3)
    )
}

/// Ambient hue as written to the custom property: whole degrees.
#[inline]
pub fn hue_css(hue: f32) -> String {
    format!("{}", hue.round() as i32)
}

#[inline]
pub fn gallery_height_css(vh: u32) -> String {
    format!("{}vh", vh)
}
