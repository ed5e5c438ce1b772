use super::artwork;

/// One product slide in the scrubbed sequence.
///
/// Fields:
/// - `index`: fixed position in the line-up, `0..N`
/// - `title` / `description`: copy shown while the frame is nearest to center
/// - `primary_hue`: base hue in degrees, drives artwork colors and ambiance
/// - `accent`: hex color of the accent mark on the artwork
/// - `artwork`: inline SVG markup rendered into the frame
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub primary_hue: f32,
    pub accent: String,
    pub artwork: String,
}

/// Static description of a product before it is placed in a line-up.
#[derive(Clone, Copy, Debug)]
pub struct SneakerModel {
    pub title: &'static str,
    pub description: &'static str,
    pub primary_hue: u16,
    pub accent: &'static str,
}

pub const VELOCITY_X: SneakerModel = SneakerModel {
    title: "Velocity X",
    description: "Featherweight runner with spring-loaded rebound.",
    primary_hue: 350, // red-magenta
    accent: "#FF416C",
};

pub const AERO_KNIT: SneakerModel = SneakerModel {
    title: "Aero Knit",
    description: "Ultra-breathable knit with precise lockdown.",
    primary_hue: 205, // blue-cyan
    accent: "#3DB8FF",
};

pub const PHANTOM_PRO: SneakerModel = SneakerModel {
    title: "Phantom Pro",
    description: "Responsive cushioning for explosive multidirectional moves.",
    primary_hue: 110, // lime-green
    accent: "#A6FF3D",
};

pub const DEFAULT_LINEUP: &[SneakerModel] = &[VELOCITY_X, AERO_KNIT, PHANTOM_PRO];

impl Frame {
    pub fn from_model(index: usize, model: &SneakerModel) -> Self {
        Self {
            index,
            title: model.title.to_string(),
            description: model.description.to_string(),
            primary_hue: model.primary_hue as f32,
            accent: model.accent.to_string(),
            artwork: artwork::sneaker_svg(index, model.primary_hue, model.accent),
        }
    }
}

/// Build indexed frames for a line-up, in order.
pub fn build_frames(models: &[SneakerModel]) -> Vec<Frame> {
    models
        .iter()
        .enumerate()
        .map(|(i, m)| Frame::from_model(i, m))
        .collect()
}

#[inline]
pub fn default_frames() -> Vec<Frame> {
    build_frames(DEFAULT_LINEUP)
}
