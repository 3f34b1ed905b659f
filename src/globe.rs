use crate::constants::*;
use crate::core::{Globe, GlobeFrame, GlobeViewport};
use crate::dom;
use crate::events;
use crate::frame::{FrameLoop, FrameTask, LoopControl};
use crate::render;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct GlobeSurface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub viewport: GlobeViewport,
}

impl GlobeSurface {
    /// Fit the canvas to its container. Returns false while the layout has
    /// no area yet.
    fn resize(&mut self) -> bool {
        if !self.canvas.is_connected() {
            return false;
        }
        let rect = match self.canvas.parent_element() {
            Some(parent) => parent.get_bounding_client_rect(),
            None => self.canvas.get_bounding_client_rect(),
        };
        let viewport = GlobeViewport::fit(rect.width() as f32, rect.height() as f32);
        if viewport.is_empty() {
            return false;
        }
        let size = viewport.size as f64;
        dom::size_canvas(&self.canvas, &self.ctx, size, size);
        self.viewport = viewport;
        true
    }
}

struct GlobeTask {
    globe: Rc<RefCell<Globe>>,
    surface: Rc<RefCell<GlobeSurface>>,
    frame: GlobeFrame,
}

impl FrameTask for GlobeTask {
    fn frame(&mut self) -> LoopControl {
        let surface = self.surface.borrow();
        if !surface.canvas.is_connected() {
            return LoopControl::Stop;
        }
        let mut globe = self.globe.borrow_mut();
        globe.tick();
        if surface.viewport.is_empty() {
            return LoopControl::Continue;
        }
        globe.build_frame(&surface.viewport, &mut self.frame);
        render::draw_globe(&surface.ctx, surface.viewport.size as f64, &self.frame);
        LoopControl::Continue
    }
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let canvas = dom::canvas_by_id(document, GLOBE_CANVAS_ID)?;
    let ctx = dom::context_2d(&canvas)?;
    let surface = Rc::new(RefCell::new(GlobeSurface {
        canvas,
        ctx,
        viewport: GlobeViewport::fit(0.0, 0.0),
    }));
    start_when_sized(surface, 0);
    Ok(())
}

fn start_when_sized(surface: Rc<RefCell<GlobeSurface>>, attempt: u32) {
    if !surface.borrow_mut().resize() {
        if attempt >= INIT_RETRY_LIMIT || !surface.borrow().canvas.is_connected() {
            log::warn!("[globe] canvas never got a size; skipping");
            return;
        }
        dom::set_timeout(INIT_RETRY_DELAY_MS, move || {
            start_when_sized(surface, attempt + 1)
        });
        return;
    }

    let globe = Rc::new(RefCell::new(Globe::new(&mut StdRng::from_entropy())));
    log::info!(
        "[globe] {} mesh points, {} glow points, {:.0}px",
        globe.borrow().mesh().point_count(),
        globe.borrow().glow_points().len(),
        surface.borrow().viewport.size
    );

    {
        let surface = surface.clone();
        dom::on_resize_debounced(RESIZE_DEBOUNCE_MS, move || {
            surface.borrow_mut().resize();
        });
    }

    let canvas = surface.borrow().canvas.clone();
    events::pointer::wire_globe_drag(&canvas, globe.clone());

    FrameLoop::new(
        "globe",
        GlobeTask {
            globe,
            surface,
            frame: GlobeFrame::default(),
        },
    )
    .start();
}
