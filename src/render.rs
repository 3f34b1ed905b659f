use crate::constants::*;
use crate::core::glyphs::{sample_targets, AlphaRaster, GlyphSampling, GlyphSource};
use crate::core::{GlobeFrame, TextParticle};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn glow_rgba(alpha: f32) -> String {
    let (r, g, b) = GLOW_RGB;
    format!("rgba({}, {}, {}, {:.3})", r, g, b, alpha.clamp(0.0, 1.0))
}

/// Wireframe edges first, then glow dots with a soft shadow pass.
pub fn draw_globe(ctx: &web::CanvasRenderingContext2d, size: f64, frame: &GlobeFrame) {
    ctx.clear_rect(0.0, 0.0, size, size);

    ctx.set_stroke_style_str(GLOBE_STROKE);
    ctx.set_line_width(1.0);
    for (a, b) in &frame.edges {
        ctx.begin_path();
        ctx.move_to(a.x as f64, a.y as f64);
        ctx.line_to(b.x as f64, b.y as f64);
        ctx.stroke();
    }

    for g in &frame.glows {
        ctx.set_fill_style_str(&glow_rgba(g.alpha));
        ctx.begin_path();
        if ctx
            .arc(g.x as f64, g.y as f64, g.radius as f64, 0.0, TAU)
            .is_err()
        {
            continue;
        }
        ctx.fill();
        ctx.set_shadow_blur(GLOW_SHADOW_BLUR);
        ctx.set_shadow_color(GLOW_SHADOW);
        ctx.fill();
        ctx.set_shadow_blur(0.0);
    }
}

pub fn draw_particles(
    ctx: &web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    particles: &[TextParticle],
) {
    ctx.clear_rect(0.0, 0.0, width, height);
    for (i, p) in particles.iter().enumerate() {
        if p.opacity <= 0.0 {
            continue;
        }
        let accent = i % PARTICLE_ACCENT_EVERY == 0;
        let (style, size) = if accent {
            (glow_rgba(PARTICLE_ACCENT_ALPHA * p.opacity), PARTICLE_ACCENT_SIZE)
        } else {
            (
                format!("rgba(255, 255, 255, {:.3})", PARTICLE_BASE_ALPHA * p.opacity),
                PARTICLE_BASE_SIZE,
            )
        };
        ctx.set_fill_style_str(&style);
        ctx.begin_path();
        if ctx.arc(p.pos.x as f64, p.pos.y as f64, size, 0.0, TAU).is_ok() {
            ctx.fill();
        }
    }
}

/// Off-screen canvas that renders a word and samples its opaque pixels.
pub struct CanvasGlyphs {
    ctx: web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
    sampling: GlyphSampling,
}

impl CanvasGlyphs {
    pub fn new(document: &web::Document, target_size: Vec2) -> anyhow::Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas.set_width(GLYPH_RASTER_WIDTH);
        canvas.set_height(GLYPH_RASTER_HEIGHT);
        let ctx = crate::dom::context_2d(&canvas)?;
        let raster = Vec2::new(GLYPH_RASTER_WIDTH as f32, GLYPH_RASTER_HEIGHT as f32);
        Ok(Self {
            ctx,
            width: GLYPH_RASTER_WIDTH,
            height: GLYPH_RASTER_HEIGHT,
            sampling: GlyphSampling::fit(raster, target_size, GLYPH_FIT_MARGIN),
        })
    }

    fn rasterize(&self, word: &str) -> anyhow::Result<AlphaRaster> {
        let (w, h) = (self.width as f64, self.height as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str("white");
        self.ctx.set_font(GLYPH_FONT);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx
            .fill_text(word, w / 2.0, h / 2.0)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let image = self
            .ctx
            .get_image_data(0.0, 0.0, w, h)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        AlphaRaster::new(self.width as usize, self.height as usize, image.data().0)
            .ok_or_else(|| anyhow::anyhow!("short pixel buffer for {:?}", word))
    }
}

impl GlyphSource for CanvasGlyphs {
    fn targets_for(&mut self, word: &str) -> Vec<Vec2> {
        match self.rasterize(word) {
            Ok(raster) => {
                let targets = sample_targets(&raster, &self.sampling);
                log::info!("[particles] '{}' -> {} targets", word, targets.len());
                targets
            }
            Err(e) => {
                log::warn!("[particles] rasterize '{}' failed: {:?}", word, e);
                Vec::new()
            }
        }
    }
}
