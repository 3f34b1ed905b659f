use super::constants::{GLYPH_ALPHA_THRESHOLD, GLYPH_STEP};
use glam::Vec2;

/// Row-major RGBA8 pixels read back from an off-screen text render.
#[derive(Clone, Debug)]
pub struct AlphaRaster {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

impl AlphaRaster {
    pub fn new(width: usize, height: usize, rgba: Vec<u8>) -> Option<Self> {
        (width > 0 && height > 0 && rgba.len() >= width * height * 4).then_some(Self {
            width,
            height,
            rgba,
        })
    }

    #[inline]
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        self.rgba[(y * self.width + x) * 4 + 3]
    }
}

/// How a raster is turned into particle targets.
#[derive(Clone, Copy, Debug)]
pub struct GlyphSampling {
    pub step: usize,
    pub alpha_threshold: u8,
    /// Multiplier from raster pixels to canvas pixels.
    pub scale: f32,
}

impl Default for GlyphSampling {
    fn default() -> Self {
        Self {
            step: GLYPH_STEP,
            alpha_threshold: GLYPH_ALPHA_THRESHOLD,
            scale: 1.0,
        }
    }
}

impl GlyphSampling {
    /// Scale that fits a `raster` box into `canvas` with `margin` (0..1).
    pub fn fit(raster: Vec2, canvas: Vec2, margin: f32) -> Self {
        let scale = if raster.x > 0.0 && raster.y > 0.0 {
            (canvas.x / raster.x).min(canvas.y / raster.y) * margin
        } else {
            1.0
        };
        Self {
            scale,
            ..Self::default()
        }
    }
}

/// Targets relative to the raster's center, one per opaque sample.
pub fn sample_targets(raster: &AlphaRaster, sampling: &GlyphSampling) -> Vec<Vec2> {
    let step = sampling.step.max(1);
    let half = Vec2::new(raster.width as f32 / 2.0, raster.height as f32 / 2.0);
    let mut targets = Vec::new();
    for y in (0..raster.height).step_by(step) {
        for x in (0..raster.width).step_by(step) {
            if raster.alpha(x, y) > sampling.alpha_threshold {
                targets.push((Vec2::new(x as f32, y as f32) - half) * sampling.scale);
            }
        }
    }
    targets
}

/// Axis-aligned bounds of a target set, `None` when empty.
pub fn bounds(targets: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let first = *targets.first()?;
    Some(
        targets
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.min(*p), hi.max(*p))),
    )
}

/// Source of particle targets for a word; the web build rasterizes text on an
/// off-screen canvas, tests supply synthetic shapes.
pub trait GlyphSource {
    fn targets_for(&mut self, word: &str) -> Vec<Vec2>;
}
