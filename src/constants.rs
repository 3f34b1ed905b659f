// DOM hooks, canvas sizes and timings for the page glue.
//
// Physics tuning lives in `core::constants`; this file only describes how the
// engines are attached to the document.

// Element lookups
pub const PRELOADER_ID: &str = "preloader";
pub const PRELOADER_WORD_ID: &str = "preloader-word";
pub const NAV_LINKS_SELECTOR: &str = ".nav-links a";
pub const MARQUEE_SECTION_SELECTOR: &str = ".scrolling-text-section";
pub const MARQUEE_TOP_SELECTOR: &str = ".scrolling-row-top .scrolling-content";
pub const MARQUEE_BOTTOM_SELECTOR: &str = ".scrolling-row-bottom .scrolling-content";
pub const GLOBE_CANVAS_ID: &str = "globe-canvas";
pub const PARTICLE_CANVAS_ID: &str = "particle-text-canvas";
pub const ABOUT_SECTION_ID: &str = "about";
pub const NARRATIVE_SELECTOR: &str = ".narrative-content";
pub const HYPER_TEXT_SELECTOR: &str = ".hyper-text";

// Class names toggled on elements
pub const CLASS_PRELOADER_ACTIVE: &str = "preloader-active";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_EXITING: &str = "exiting";
pub const CLASS_DRAGGING: &str = "dragging";
pub const CLASS_HERO_WORD: &str = "hero-word";
pub const CLASS_SCRAMBLING: &str = "scrambling";
pub const CLASS_RESOLVED: &str = "resolved";

// Timing (milliseconds)
pub const RESIZE_DEBOUNCE_MS: i32 = 150;
pub const MARQUEE_START_DELAY_MS: i32 = 100;
pub const INIT_RETRY_DELAY_MS: i32 = 100;
pub const INIT_RETRY_LIMIT: u32 = 20;
pub const HYPER_TEXT_INIT_DELAY_MS: i32 = 100;

// Particle text canvas (logical pixels)
pub const PARTICLE_CANVAS_WIDTH: f64 = 1200.0;
pub const PARTICLE_CANVAS_HEIGHT: f64 = 500.0;
pub const GLYPH_RASTER_WIDTH: u32 = 2000;
pub const GLYPH_RASTER_HEIGHT: u32 = 400;
pub const GLYPH_FONT: &str = "bold 120px Inter, sans-serif";
pub const GLYPH_FIT_MARGIN: f32 = 0.8;
pub const PARTICLE_VISIBILITY_THRESHOLD: f64 = 0.2;
pub const PARTICLE_ACCENT_EVERY: usize = 7;
pub const PARTICLE_WORDS_ATTR: &str = "data-words";

// Narrative reveal
pub const ABOUT_VISIBILITY_THRESHOLD: f64 = 0.3;
pub const ABOUT_ROOT_MARGIN: &str = "50px";

// Colors
pub const GLOBE_STROKE: &str = "rgba(255, 255, 255, 0.25)";
pub const GLOW_RGB: (u8, u8, u8) = (102, 252, 241);
pub const GLOW_SHADOW: &str = "rgba(102, 252, 241, 0.5)";
pub const GLOW_SHADOW_BLUR: f64 = 8.0;
pub const PARTICLE_ACCENT_ALPHA: f32 = 0.4;
pub const PARTICLE_BASE_ALPHA: f32 = 0.3;
pub const PARTICLE_ACCENT_SIZE: f64 = 2.5;
pub const PARTICLE_BASE_SIZE: f64 = 1.5;
