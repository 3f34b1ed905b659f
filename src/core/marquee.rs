use super::constants::*;
use super::integrator::{wrap_toroidal, DampedAxis};

/// One horizontally scrolling row of duplicated content.
///
/// `motion.velocity` carries scroll impulses and decays each frame; `drift` is
/// a constant ambient speed so the row never comes fully to rest.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarqueeTrack {
    pub motion: DampedAxis,
    pub drift: f32,
    pub content_width: f32,
}

impl MarqueeTrack {
    pub fn new(drift: f32) -> Self {
        Self {
            motion: DampedAxis::default(),
            drift,
            content_width: 0.0,
        }
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.motion.position
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.motion.velocity
    }

    pub fn tick(&mut self) {
        self.motion.step(MARQUEE_DAMPING);
        self.motion.position += self.drift;
        self.motion.position = wrap_toroidal(self.motion.position, self.content_width);
    }

    /// CSS transform value for the row's current offset.
    pub fn transform(&self) -> String {
        format!("translateX({:.3}px)", -self.motion.position)
    }
}

/// Scroll-velocity driven pair of marquee rows moving in opposite directions.
#[derive(Clone, Debug)]
pub struct Marquee {
    pub top: MarqueeTrack,
    pub bottom: MarqueeTrack,
    last_scroll_y: Option<f32>,
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new()
    }
}

impl Marquee {
    pub fn new() -> Self {
        Self {
            top: MarqueeTrack::new(MARQUEE_DRIFT_TOP),
            bottom: MarqueeTrack::new(MARQUEE_DRIFT_BOTTOM),
            last_scroll_y: None,
        }
    }

    /// Record the wraparound widths once content has been duplicated. Each
    /// argument is the full scroll width of a row; content is doubled for a
    /// seamless seam, so one period is half of it.
    pub fn on_content_ready(&mut self, top_scroll_width: f32, bottom_scroll_width: f32) {
        self.top.content_width = (top_scroll_width / 2.0).max(0.0);
        self.bottom.content_width = (bottom_scroll_width / 2.0).max(0.0);
        self.top.motion.position = wrap_toroidal(self.top.motion.position, self.top.content_width);
        self.bottom.motion.position =
            wrap_toroidal(self.bottom.motion.position, self.bottom.content_width);
    }

    /// Re-measured widths after a (debounced) resize.
    pub fn resize(&mut self, top_scroll_width: f32, bottom_scroll_width: f32) {
        self.on_content_ready(top_scroll_width, bottom_scroll_width);
    }

    /// Turn a scroll position delta into opposing impulses on both rows.
    /// Returns false when the delta falls inside the dead zone.
    pub fn on_scroll_delta(&mut self, delta: f32) -> bool {
        if !delta.is_finite() || delta.abs() <= MARQUEE_DEAD_ZONE {
            return false;
        }
        let direction = if delta > 0.0 { 1.0 } else { -1.0 };
        let speed = (delta.abs() * MARQUEE_SCROLL_GAIN).min(MARQUEE_MAX_IMPULSE);
        self.top.motion.velocity = direction * speed;
        self.bottom.motion.velocity = MARQUEE_BOTTOM_RATIO * self.top.motion.velocity;
        true
    }

    /// Feed an absolute scroll offset; the first call only primes the baseline.
    pub fn on_scroll_position(&mut self, scroll_y: f32) -> bool {
        let applied = match self.last_scroll_y {
            Some(prev) => self.on_scroll_delta(scroll_y - prev),
            None => false,
        };
        self.last_scroll_y = Some(scroll_y);
        applied
    }

    pub fn tick(&mut self) {
        self.top.tick();
        self.bottom.tick();
    }
}
