use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .filter(|r| *r > 0.0)
        .unwrap_or(1.0)
}

/// Size the backing store to `css_w x css_h` logical pixels at the current
/// pixel density and reset the context transform to match.
pub fn size_canvas(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    css_w: f64,
    css_h: f64,
) {
    let dpr = device_pixel_ratio();
    canvas.set_width(((css_w * dpr) as u32).max(1));
    canvas.set_height(((css_h * dpr) as u32).max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_w));
    _ = style.set_property("height", &format!("{}px", css_h));
    // Assigning width/height resets the context, so set (not multiply) scale.
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

pub fn body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        set_class(&body, class, on);
    }
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `delay_ms`. Returns the timer handle.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        .ok()
}

/// Run `f` every `period_ms` until it returns false.
pub fn set_interval(period_ms: i32, mut f: impl FnMut() -> bool + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let handle_tick = handle.clone();
    let closure = Closure::wrap(Box::new(move || {
        if !f() {
            if let (Some(id), Some(w)) = (handle_tick.take(), web::window()) {
                w.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        period_ms,
    ) {
        Ok(id) => handle.set(Some(id)),
        Err(e) => log::error!("setInterval failed: {:?}", e),
    }
    closure.forget();
}

/// Coalesces bursts of calls into one `f` call `delay_ms` after the last.
#[derive(Clone)]
pub struct Debouncer {
    delay_ms: i32,
    pending: Rc<Cell<Option<i32>>>,
    action: Rc<dyn Fn()>,
}

impl Debouncer {
    pub fn new(delay_ms: i32, action: impl Fn() + 'static) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(Cell::new(None)),
            action: Rc::new(action),
        }
    }

    pub fn trigger(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            w.clear_timeout_with_handle(id);
        }
        let pending = self.pending.clone();
        let action = self.action.clone();
        let id = set_timeout(self.delay_ms, move || {
            pending.set(None);
            action();
        });
        self.pending.set(id);
    }
}

/// Call `action` once the window has stopped resizing for `delay_ms`.
pub fn on_resize_debounced(delay_ms: i32, action: impl Fn() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let debouncer = Debouncer::new(delay_ms, action);
    add_listener(&window, "resize", move |_: web::Event| debouncer.trigger());
}

/// Boolean flags scoped to the browsing session (`sessionStorage`).
pub struct SessionFlags {
    storage: Option<web::Storage>,
}

impl SessionFlags {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.session_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("sessionStorage unavailable; session flags disabled");
        }
        Self { storage }
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        let value = self.storage.as_ref()?.get_item(key).ok().flatten()?;
        Some(value == "true")
    }

    pub fn set(&self, key: &str, value: bool) {
        if let Some(s) = &self.storage {
            if let Err(e) = s.set_item(key, if value { "true" } else { "false" }) {
                log::warn!("sessionStorage write failed: {:?}", e);
            }
        }
    }
}

/// Report viewport intersection changes for `el` as `(is_intersecting, ratio)`.
pub fn observe_visibility(
    el: &web::Element,
    threshold: f64,
    root_margin: Option<&str>,
    mut handler: impl FnMut(bool, f64) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                handler(entry.is_intersecting(), entry.intersection_ratio());
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    observer.observe(el);
    callback.forget();
    Ok(observer)
}
