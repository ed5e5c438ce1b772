/// Stage interpolation and pacing constants.
///
/// These constants express the intended look of the scrubbed filmstrip
/// (depth range, drift, roll, glow) and keep magic numbers out of the math.
// Skip a recompute when progress moved less than this
pub const PROGRESS_EPSILON: f32 = 0.0005;

// Depth: translateZ = (1 - |d|) * DEPTH_SPAN + DEPTH_OFFSET  (-140..80 px)
pub const DEPTH_SPAN_PX: f32 = 220.0;
pub const DEPTH_OFFSET_PX: f32 = -140.0;

// Vertical drift per unit of distance from the active frame (px)
pub const DRIFT_PER_FRAME_PX: f32 = 46.0;

// Roll per unit of distance from the active frame (deg)
pub const ROLL_PER_FRAME_DEG: f32 = -10.0;

// Scale range 0.86..1.02
pub const SCALE_MIN: f32 = 0.86;
pub const SCALE_SPAN: f32 = 0.16;

// Accent glow alpha range 0.25..0.60
pub const GLOW_BASE: f32 = 0.25;
pub const GLOW_SPAN: f32 = 0.35;

// Pointer parallax, each axis in [-TILT_MAX_DEG, TILT_MAX_DEG]
pub const TILT_MAX_DEG: f32 = 6.0;

// Gallery pacing: viewport heights of scroll per frame, with a floor
pub const GALLERY_VH_PER_FRAME: u32 = 140;
pub const GALLERY_MIN_VH: u32 = 260;

// Small-vector capacity for per-tick visuals (line-ups are a handful of frames)
pub const INLINE_FRAMES: usize = 8;
