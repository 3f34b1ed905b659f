use crate::constants::*;
use crate::core::{Marquee, MARQUEE_DUPLICATES};
use crate::dom;
use crate::events;
use crate::frame::{FrameLoop, FrameTask, LoopControl};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct MarqueeTask {
    engine: Rc<RefCell<Marquee>>,
    top: web::HtmlElement,
    bottom: web::HtmlElement,
}

impl FrameTask for MarqueeTask {
    fn frame(&mut self) -> LoopControl {
        if !self.top.is_connected() || !self.bottom.is_connected() {
            return LoopControl::Stop;
        }
        let mut engine = self.engine.borrow_mut();
        engine.tick();
        _ = self
            .top
            .style()
            .set_property("transform", &engine.top.transform());
        _ = self
            .bottom
            .style()
            .set_property("transform", &engine.bottom.transform());
        LoopControl::Continue
    }
}

fn row(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    dom::query(document, selector)
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Repeat a row's markup so one period is always wider than the viewport.
fn duplicate_content(el: &web::Element, times: usize) {
    let original = el.inner_html();
    let mut html = String::with_capacity(original.len() * (times + 1));
    for _ in 0..=times {
        html.push_str(&original);
    }
    el.set_inner_html(&html);
}

fn measure(engine: &RefCell<Marquee>, top: &web::Element, bottom: &web::Element) {
    let (tw, bw) = (top.scroll_width() as f32, bottom.scroll_width() as f32);
    engine.borrow_mut().resize(tw, bw);
    log::info!("[marquee] content widths {:.0}/{:.0}", tw / 2.0, bw / 2.0);
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    if dom::query(document, MARQUEE_SECTION_SELECTOR).is_none() {
        anyhow::bail!("no marquee section");
    }
    let top = row(document, MARQUEE_TOP_SELECTOR)?;
    let bottom = row(document, MARQUEE_BOTTOM_SELECTOR)?;

    duplicate_content(&top, MARQUEE_DUPLICATES);
    duplicate_content(&bottom, MARQUEE_DUPLICATES);

    let engine = Rc::new(RefCell::new(Marquee::new()));
    measure(&engine, &top, &bottom);

    {
        let (engine, top, bottom) = (engine.clone(), top.clone(), bottom.clone());
        dom::on_resize_debounced(RESIZE_DEBOUNCE_MS, move || {
            if top.is_connected() && bottom.is_connected() {
                measure(&engine, &top, &bottom);
            }
        });
    }

    events::scroll::wire_marquee_scroll(engine.clone());

    // Fonts and layout settle shortly after load; measure again before moving.
    let task = MarqueeTask {
        engine: engine.clone(),
        top: top.clone(),
        bottom: bottom.clone(),
    };
    let frame_loop = FrameLoop::new("marquee", task);
    dom::set_timeout(MARQUEE_START_DELAY_MS, move || {
        measure(&engine, &top, &bottom);
        frame_loop.start();
    });
    Ok(())
}
