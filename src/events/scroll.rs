use crate::core::Marquee;
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn scroll_y() -> Option<f32> {
    web::window()?.scroll_y().ok().map(|y| y as f32)
}

/// Feed window scroll offsets into the marquee, at most once per frame.
pub fn wire_marquee_scroll(engine: Rc<RefCell<Marquee>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(y) = scroll_y() {
        engine.borrow_mut().on_scroll_position(y);
    }
    let pending = Rc::new(Cell::new(false));
    dom::add_listener(&window, "scroll", move |_: web::Event| {
        if pending.replace(true) {
            return;
        }
        let engine = engine.clone();
        let pending_sample = pending.clone();
        let sample = Closure::once_into_js(move || {
            if let Some(y) = scroll_y() {
                engine.borrow_mut().on_scroll_position(y);
            }
            pending_sample.set(false);
        });
        if let Some(w) = web::window() {
            if w.request_animation_frame(sample.unchecked_ref()).is_err() {
                pending.set(false);
            }
        }
    });
}
