use super::catalog::Frame;
use super::constants::*;
use glam::Vec2;
use smallvec::SmallVec;
use thiserror::Error;

/// Bounding rect of the animated section relative to the viewport, in CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionGeometry {
    pub top: f32,
    pub bottom: f32,
    pub viewport_height: f32,
}

/// Ephemeral per-tick input shared by every frame.
///
/// - `progress`: position through the section in \[0, 1\]
/// - `tilt`: pointer parallax in degrees (`x` rotates about X, `y` about Y)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub progress: f32,
    pub tilt: Vec2,
}

/// Visual tuple for one frame on one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameVisual {
    pub opacity: f32,
    pub translate_z: f32,
    pub translate_y: f32,
    pub rotation_z: f32,
    pub scale: f32,
    pub tilt_x: f32,
    pub tilt_y: f32,
    pub glow_strength: f32,
}

/// Interpolation tuning carried by an animator instance.
///
/// Defaults reproduce the stock look: depth -140..80 px, 46 px drift and
/// -10 deg roll per frame of distance, scale 0.86..1.02, glow 0.25..0.60.
#[derive(Clone, Debug, PartialEq)]
pub struct StageParams {
    pub epsilon: f32,
    pub depth_span: f32,
    pub depth_offset: f32,
    pub drift_per_frame: f32,
    pub roll_per_frame: f32,
    pub scale_min: f32,
    pub scale_span: f32,
    pub glow_base: f32,
    pub glow_span: f32,
    pub tilt_max: f32,
}

impl Default for StageParams {
    fn default() -> Self {
        Self {
            epsilon: PROGRESS_EPSILON,
            depth_span: DEPTH_SPAN_PX,
            depth_offset: DEPTH_OFFSET_PX,
            drift_per_frame: DRIFT_PER_FRAME_PX,
            roll_per_frame: ROLL_PER_FRAME_DEG,
            scale_min: SCALE_MIN,
            scale_span: SCALE_SPAN,
            glow_base: GLOW_BASE,
            glow_span: GLOW_SPAN,
            tilt_max: TILT_MAX_DEG,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StageError {
    #[error("stage needs at least one frame")]
    NoFrames,
}

/// Something that accepts the animator's output and puts it on screen.
pub trait RenderTarget {
    fn apply_frame(&mut self, index: usize, visual: &FrameVisual);
    fn set_ambient_hue(&mut self, hue: f32);
    fn show_copy(&mut self, frame: &Frame);
}

/// Outcome of one recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    Skipped,
    Rendered { progress: f32, active: f32 },
}

/// Normalized position through the section: 0 before it reaches the top of
/// the viewport, 1 once its bottom edge has scrolled up to the viewport's.
#[inline]
pub fn scroll_progress(geometry: SectionGeometry) -> f32 {
    let start = geometry.top;
    let end = geometry.bottom - geometry.viewport_height;
    let raw = (0.0 - start) / (end - start).max(1.0);
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 1.0)
}

/// Fractional frame index under the playhead. A single frame never moves.
#[inline]
pub fn active_index(progress: f32, frame_count: usize) -> f32 {
    if frame_count <= 1 {
        return 0.0;
    }
    progress * (frame_count - 1) as f32
}

/// Nearest whole frame to `active`, rounding halves up.
#[inline]
pub fn nearest_index(active: f32, frame_count: usize) -> usize {
    let last = frame_count.saturating_sub(1);
    ((active.max(0.0) + 0.5).floor() as usize).min(last)
}

/// Map a pointer position to parallax tilt in degrees.
///
/// The pointer is clamped to the viewport and normalized to \[-1, 1\] per
/// axis; vertical motion tilts about X (inverted), horizontal about Y.
#[inline]
pub fn pointer_tilt(pointer: Vec2, viewport: Vec2, max_deg: f32) -> Vec2 {
    if !(viewport.x > 0.0 && viewport.y > 0.0) || !pointer.is_finite() {
        return Vec2::ZERO;
    }
    let p = pointer.clamp(Vec2::ZERO, viewport);
    let n = p / viewport * 2.0 - Vec2::ONE;
    Vec2::new(n.y * -max_deg, n.x * max_deg)
}

/// Scroll length of the gallery section in viewport heights.
#[inline]
pub fn gallery_height_vh(frame_count: usize) -> u32 {
    (frame_count as u32)
        .saturating_mul(GALLERY_VH_PER_FRAME)
        .max(GALLERY_MIN_VH)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn ambient_hue(first_hue: f32, last_hue: f32, progress: f32) -> f32 {
    lerp(first_hue, last_hue, progress)
}

pub fn frame_visual(index: usize, active: f32, tilt: Vec2, params: &StageParams) -> FrameVisual {
    // negative: already scrolled past, positive: upcoming
    let distance = index as f32 - active;
    let abs_distance = distance.abs();
    let weight = 1.0 - abs_distance.clamp(0.0, 1.0);
    FrameVisual {
        opacity: weight,
        translate_z: (1.0 - abs_distance) * params.depth_span + params.depth_offset,
        translate_y: distance * params.drift_per_frame,
        rotation_z: distance * params.roll_per_frame,
        scale: params.scale_min + weight * params.scale_span,
        tilt_x: tilt.x * weight,
        tilt_y: tilt.y * weight,
        glow_strength: params.glow_base + weight * params.glow_span,
    }
}

/// Scroll-scrubbed filmstrip of frames with pointer parallax on top.
///
/// Holds the only state that survives a tick: the last rendered progress and
/// tilt, and which frame's copy is on display.
#[derive(Clone, Debug)]
pub struct StageAnimator {
    frames: Vec<Frame>,
    params: StageParams,
    tilt: Vec2,
    last_progress: Option<f32>,
    last_tilt: Option<Vec2>,
    displayed: Option<usize>,
}

impl StageAnimator {
    pub fn new(frames: Vec<Frame>, params: StageParams) -> Result<Self, StageError> {
        if frames.is_empty() {
            return Err(StageError::NoFrames);
        }
        Ok(Self {
            frames,
            params,
            tilt: Vec2::ZERO,
            last_progress: None,
            last_tilt: None,
            displayed: None,
        })
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn params(&self) -> &StageParams {
        &self.params
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Index of the frame whose copy is currently shown, if any tick rendered.
    pub fn displayed(&self) -> Option<usize> {
        self.displayed
    }

    pub fn tilt(&self) -> Vec2 {
        self.tilt
    }

    pub fn set_pointer(&mut self, pointer: Vec2, viewport: Vec2) {
        self.tilt = pointer_tilt(pointer, viewport, self.params.tilt_max);
    }

    /// Forget the memoized progress so the next recompute always renders.
    pub fn invalidate(&mut self) {
        self.last_progress = None;
        self.last_tilt = None;
    }

    pub fn scroll_state(&self, geometry: SectionGeometry) -> ScrollState {
        ScrollState {
            progress: scroll_progress(geometry),
            tilt: self.tilt,
        }
    }

    /// Evaluate every frame at `progress` with the current tilt.
    pub fn visuals(&self, progress: f32) -> SmallVec<[FrameVisual; INLINE_FRAMES]> {
        let active = active_index(progress.clamp(0.0, 1.0), self.frames.len());
        (0..self.frames.len())
            .map(|i| frame_visual(i, active, self.tilt, &self.params))
            .collect()
    }

    /// Recompute the whole stage for the given geometry and push it to `target`.
    pub fn recompute<R: RenderTarget + ?Sized>(
        &mut self,
        geometry: SectionGeometry,
        target: &mut R,
    ) -> Tick {
        let state = self.scroll_state(geometry);
        if let Some(last) = self.last_progress {
            let tilt_unchanged = self.last_tilt == Some(state.tilt);
            if tilt_unchanged && (state.progress - last).abs() < self.params.epsilon {
                return Tick::Skipped;
            }
        }
        self.last_progress = Some(state.progress);
        self.last_tilt = Some(state.tilt);

        let n = self.frames.len();
        let first_hue = self.frames[0].primary_hue;
        let last_hue = self.frames[n - 1].primary_hue;
        target.set_ambient_hue(ambient_hue(first_hue, last_hue, state.progress));

        let active = active_index(state.progress, n);
        let nearest = nearest_index(active, n);
        if self.displayed != Some(nearest) {
            target.show_copy(&self.frames[nearest]);
            self.displayed = Some(nearest);
        }

        for i in 0..n {
            let visual = frame_visual(i, active, state.tilt, &self.params);
            target.apply_frame(i, &visual);
        }

        Tick::Rendered {
            progress: state.progress,
            active,
        }
    }
}
