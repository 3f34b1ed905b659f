use crate::constants::*;
use crate::core::{in_view, ParticleParams, ParticleText};
use crate::dom;
use crate::events;
use crate::frame::{FrameLoop, FrameTask, LoopControl};
use crate::render::{self, CanvasGlyphs};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct ParticleTask {
    engine: Rc<RefCell<ParticleText>>,
    glyphs: CanvasGlyphs,
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl FrameTask for ParticleTask {
    fn frame(&mut self) -> LoopControl {
        if !self.canvas.is_connected() {
            return LoopControl::Stop;
        }
        let mut engine = self.engine.borrow_mut();
        if let Some(i) = engine.tick(&mut self.glyphs) {
            log::info!("[particles] next word #{} '{}'", i, engine.current_word());
        }
        let bounds = engine.bounds();
        render::draw_particles(
            &self.ctx,
            bounds.x as f64,
            bounds.y as f64,
            &engine.particles,
        );
        LoopControl::Continue
    }
}

/// Comma-separated word list from the canvas' `data-words`, if any.
pub fn parse_words(attr: Option<String>) -> Vec<String> {
    attr.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let canvas = dom::canvas_by_id(document, PARTICLE_CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;
    dom::size_canvas(&canvas, &ctx, PARTICLE_CANVAS_WIDTH, PARTICLE_CANVAS_HEIGHT);
    let style = canvas.style();
    _ = style.set_property("position", "relative");
    _ = style.set_property("z-index", "1");

    let bounds = Vec2::new(PARTICLE_CANVAS_WIDTH as f32, PARTICLE_CANVAS_HEIGHT as f32);
    let mut glyphs = CanvasGlyphs::new(document, bounds)?;
    let words = parse_words(canvas.get_attribute(PARTICLE_WORDS_ATTR));
    let mut text = ParticleText::new(words, bounds, ParticleParams::default(), rand::random());
    text.start(&mut glyphs);
    if text.particles.is_empty() {
        anyhow::bail!("'{}' produced no particles", text.current_word());
    }
    log::info!(
        "[particles] {} words, first '{}' with {} particles",
        text.words().len(),
        text.current_word(),
        text.particles.len()
    );

    let engine = Rc::new(RefCell::new(text));
    events::pointer::wire_particle_hover(&canvas, engine.clone());

    let container = canvas.parent_element().unwrap_or_else(|| canvas.clone().into());
    let frame_loop = FrameLoop::new(
        "particles",
        ParticleTask {
            engine,
            glyphs,
            canvas,
            ctx,
        },
    );
    // Only animate while the section is on screen; leaving cancels the frame.
    dom::observe_visibility(
        &container,
        PARTICLE_VISIBILITY_THRESHOLD,
        None,
        move |visible, ratio| {
            if in_view(visible, ratio, PARTICLE_VISIBILITY_THRESHOLD) {
                frame_loop.start();
            } else {
                frame_loop.stop();
            }
        },
    )?;
    Ok(())
}
