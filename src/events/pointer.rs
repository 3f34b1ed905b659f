use crate::constants::CLASS_DRAGGING;
use crate::core::{Globe, ParticleText};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer position relative to the element's top-left, in CSS pixels.
#[inline]
pub fn local_pos(ev: &web::MouseEvent, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (ev.client_x() as f64 - rect.left()) as f32,
        (ev.client_y() as f64 - rect.top()) as f32,
    )
}

/// Pointer position mapped into a canvas whose logical size is `logical`,
/// for canvases that CSS may stretch or shrink.
pub fn logical_pos(ev: &web::MouseEvent, el: &web::Element, logical: Vec2) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    let local = local_pos(ev, el);
    if rect.width() > 0.0 && rect.height() > 0.0 {
        local * logical / Vec2::new(rect.width() as f32, rect.height() as f32)
    } else {
        local
    }
}

pub fn wire_globe_drag(canvas: &web::HtmlCanvasElement, globe: Rc<RefCell<Globe>>) {
    {
        let (el, globe) = (canvas.clone(), globe.clone());
        dom::add_listener(canvas, "pointerdown", move |ev: web::PointerEvent| {
            globe.borrow_mut().rotation.pointer_down(local_pos(&ev, &el));
            dom::set_class(&el, CLASS_DRAGGING, true);
        });
    }
    {
        let (el, globe) = (canvas.clone(), globe.clone());
        dom::add_listener(canvas, "pointermove", move |ev: web::PointerEvent| {
            let mut g = globe.borrow_mut();
            if g.rotation.dragging {
                g.rotation.pointer_move(local_pos(&ev, &el));
            }
        });
    }
    {
        let (el, globe) = (canvas.clone(), globe.clone());
        dom::add_listener(canvas, "pointerup", move |_: web::PointerEvent| {
            globe.borrow_mut().rotation.pointer_up();
            dom::set_class(&el, CLASS_DRAGGING, false);
        });
    }
    let el = canvas.clone();
    dom::add_listener(canvas, "pointerleave", move |_: web::PointerEvent| {
        globe.borrow_mut().rotation.pointer_leave();
        dom::set_class(&el, CLASS_DRAGGING, false);
    });
}

/// Track the pointer over the particle canvas for hold-phase repulsion.
pub fn wire_particle_hover(canvas: &web::HtmlCanvasElement, engine: Rc<RefCell<ParticleText>>) {
    {
        let (el, engine) = (canvas.clone(), engine.clone());
        dom::add_listener(canvas, "pointermove", move |ev: web::PointerEvent| {
            let mut engine = engine.borrow_mut();
            let pos = logical_pos(&ev, &el, engine.bounds());
            engine.set_pointer(Some(pos));
        });
    }
    dom::add_listener(canvas, "pointerleave", move |_: web::PointerEvent| {
        engine.borrow_mut().set_pointer(None);
    });
}
