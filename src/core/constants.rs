// Physics and animation tuning shared by the pure engines.
//
// All distances are logical (CSS) pixels unless noted; all rates are per
// animation frame.

// Marquee
pub const MARQUEE_DAMPING: f32 = 0.92;
pub const MARQUEE_SCROLL_GAIN: f32 = 0.8;
pub const MARQUEE_MAX_IMPULSE: f32 = 3.0;
pub const MARQUEE_DEAD_ZONE: f32 = 0.1;
pub const MARQUEE_BOTTOM_RATIO: f32 = -0.9; // bottom row runs against the top row
pub const MARQUEE_DRIFT_TOP: f32 = 0.5;
pub const MARQUEE_DRIFT_BOTTOM: f32 = -0.45;
pub const MARQUEE_DUPLICATES: usize = 12;

// Globe mesh
pub const GLOBE_RINGS: usize = 12;
pub const GLOBE_SEGMENTS: usize = 24;
pub const GLOBE_GLOW_COUNT: usize = 35;
pub const GLOW_INTENSITY_MIN: f32 = 0.3;
pub const GLOW_INTENSITY_SPAN: f32 = 0.4;

// Globe motion
pub const GLOBE_AUTO_YAW: f32 = 0.002;
pub const GLOBE_BASE_PITCH: f32 = 0.3;
pub const GLOBE_DRAG_SENSITIVITY: f32 = 0.005;
pub const GLOBE_DRAG_EASING: f32 = 0.95;
pub const GLOBE_DRAG_SNAP: f32 = 0.001;
pub const GLOBE_PITCH_LIMIT: f32 = 0.5;

// Globe projection
pub const GLOBE_VIEW_DISTANCE: f32 = 800.0;
pub const GLOBE_RADIUS: f32 = 250.0; // at the reference display size
pub const GLOBE_MAX_DISPLAY: f32 = 700.0;
pub const GLOBE_EDGE_CULL_Z: f32 = -150.0;
pub const GLOBE_GLOW_CULL_Z: f32 = -100.0;
pub const GLOBE_DEPTH_FALLOFF: f32 = 400.0;
pub const GLOW_BASE_RADIUS: f32 = 3.0;
pub const GLOW_BASE_ALPHA: f32 = 0.4;

// Particle text phases
pub const ASSEMBLE_RATE: f32 = 0.015;
pub const HOLD_RATE: f32 = 0.005;
pub const HOLD_SPAN: f32 = 2.0;
pub const DISSOLVE_RATE: f32 = 0.018;
pub const PHASE_EPSILON: f32 = 1e-4; // absorbs float drift in progress sums

// Particle text forces
pub const ASSEMBLE_SPRING: f32 = 0.08;
pub const ASSEMBLE_DAMPING: f32 = 0.90;
pub const ASSEMBLE_FADE_IN: f32 = 0.03;
pub const HOLD_PULL: f32 = 0.1;
pub const HOLD_DAMPING: f32 = 0.95;
pub const REPEL_RADIUS: f32 = 150.0;
pub const REPEL_STRENGTH: f32 = 0.3;
pub const REPEL_IMPULSE: f32 = 0.001;
pub const DISSOLVE_JITTER: f32 = 0.8;
pub const DISSOLVE_JITTER_SCALE: f32 = 0.5;
pub const DISSOLVE_DAMPING: f32 = 0.97;
pub const DISSOLVE_FADE_OUT: f32 = 0.025;
pub const SCATTER_SPEED: f32 = 1.25;

// Glyph sampling
pub const GLYPH_STEP: usize = 4;
pub const GLYPH_ALPHA_THRESHOLD: u8 = 128;

pub const DEFAULT_WORDS: [&str; 5] = [
    "BLOCKCHAIN",
    "DECENTRALIZED",
    "SECURE",
    "TRANSPARENT",
    "FUTURE",
];
