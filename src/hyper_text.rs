use crate::constants::*;
use crate::core::scramble::{self, Scrambler};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const ANIMATING_ATTR: &str = "data-animating";
const TEXT_ATTR: &str = "data-text";

fn paint(spans: &[web::Element], scrambler: &Scrambler) {
    let mut buf = [0u8; 4];
    for (span, c) in spans.iter().zip(scrambler.display()) {
        span.set_text_content(Some(&*c.encode_utf8(&mut buf)));
    }
}

fn animate(el: &web::Element, rng: &Rc<RefCell<StdRng>>) {
    let original = el
        .get_attribute(TEXT_ATTR)
        .or_else(|| el.text_content().map(|t| t.trim().to_string()))
        .unwrap_or_default();
    if original.is_empty() || el.get_attribute(ANIMATING_ATTR).as_deref() == Some("true") {
        return;
    }
    let Some(document) = el.owner_document() else {
        return;
    };
    _ = el.set_attribute(ANIMATING_ATTR, "true");
    dom::set_class(el, CLASS_SCRAMBLING, true);

    let scrambler = Rc::new(RefCell::new(Scrambler::new(
        &original,
        &mut *rng.borrow_mut(),
    )));
    el.set_inner_html("");
    let spans: Rc<Vec<web::Element>> = Rc::new(
        original
            .chars()
            .filter_map(|_| {
                let span = document.create_element("span").ok()?;
                span.set_class_name("char");
                _ = el.append_child(&span);
                Some(span)
            })
            .collect(),
    );
    paint(&spans, &scrambler.borrow());

    {
        let (scrambler, spans, rng) = (scrambler.clone(), spans.clone(), rng.clone());
        dom::set_interval(scramble::SCRAMBLE_INTERVAL_MS as i32, move || {
            let mut s = scrambler.borrow_mut();
            if !s.scramble(&mut *rng.borrow_mut()) {
                return false;
            }
            paint(&spans, &s);
            true
        });
    }

    let el = el.clone();
    dom::set_interval(scramble::RESOLVE_INTERVAL_MS as i32, move || {
        let mut s = scrambler.borrow_mut();
        if s.resolve_next() {
            paint(&spans, &s);
            return true;
        }
        let el = el.clone();
        let original = s.original();
        dom::set_timeout(scramble::SETTLE_DELAY_MS as i32, move || {
            dom::set_class(&el, CLASS_SCRAMBLING, false);
            dom::set_class(&el, CLASS_RESOLVED, true);
            dom::set_timeout(scramble::RESTORE_DELAY_MS as i32, move || {
                el.set_text_content(Some(original.as_str()));
                dom::set_class(&el, CLASS_RESOLVED, false);
                _ = el.set_attribute(ANIMATING_ATTR, "false");
            });
        });
        false
    });
}

/// Staggered intro scramble for every `.hyper-text`, replayed on hover.
pub fn init(document: &web::Document) {
    let elements = dom::query_all(document, HYPER_TEXT_SELECTOR);
    if elements.is_empty() {
        return;
    }
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    for (index, el) in elements.into_iter().enumerate() {
        let hero = el.class_list().contains(CLASS_HERO_WORD);
        {
            let (el, rng) = (el.clone(), rng.clone());
            dom::set_timeout(
                scramble::start_delay_ms(index, hero) as i32,
                move || animate(&el, &rng),
            );
        }
        let hover = {
            let (el, rng) = (el.clone(), rng.clone());
            dom::Debouncer::new(scramble::HOVER_DELAY_MS as i32, move || animate(&el, &rng))
        };
        dom::add_listener(&el, "mouseenter", move |_: web::MouseEvent| hover.trigger());
    }
}
