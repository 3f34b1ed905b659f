use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a frame task wants after running one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Work done once per display refresh. Tasks check their own surface at
/// entry and return `Stop` once it is gone.
pub trait FrameTask {
    fn frame(&mut self) -> LoopControl;
}

struct LoopInner {
    label: &'static str,
    task: RefCell<Box<dyn FrameTask>>,
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// `requestAnimationFrame` loop around a single task.
///
/// The loop reschedules itself after every `Continue`; `stop` cancels the
/// pending frame so a suspended loop costs nothing. The callback is built
/// once and reused across restarts.
#[derive(Clone)]
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn new(label: &'static str, task: impl FrameTask + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            label,
            task: RefCell::new(Box::new(task)),
            raf_id: Cell::new(None),
            tick: RefCell::new(None),
        });
        let inner_tick = inner.clone();
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner_tick.raf_id.set(None);
            let control = inner_tick.task.borrow_mut().frame();
            match control {
                LoopControl::Continue => request_frame(&inner_tick),
                LoopControl::Stop => log::info!("[{}] loop stopped", inner_tick.label),
            }
        }) as Box<dyn FnMut()>));
        Self { inner }
    }

    pub fn is_running(&self) -> bool {
        self.inner.raf_id.get().is_some()
    }

    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        log::info!("[{}] loop started", self.inner.label);
        request_frame(&self.inner);
    }

    pub fn stop(&self) {
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::info!("[{}] loop suspended", self.inner.label);
        }
    }
}

fn request_frame(inner: &Rc<LoopInner>) {
    let Some(w) = web::window() else {
        return;
    };
    let tick = inner.tick.borrow();
    let Some(cb) = tick.as_ref() else {
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => inner.raf_id.set(Some(id)),
        Err(e) => log::error!("[{}] requestAnimationFrame failed: {:?}", inner.label, e),
    }
}
