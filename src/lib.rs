#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod globe;
mod hyper_text;
mod marquee;
mod nav;
mod particle_text;
mod preloader;
mod render;

/// Each decoration is optional: a missing node or context only disables that
/// one effect.
fn init_feature(name: &str, result: anyhow::Result<()>) {
    match result {
        Ok(()) => log::info!("[{}] ready", name),
        Err(e) => log::warn!("[{}] disabled: {:?}", name, e),
    }
}

fn init_page(document: &web::Document) {
    nav::wire_smooth_links(document);
    init_feature("marquee", marquee::init(document));
    init_feature("globe", globe::init(document));
    init_feature("particles", particle_text::init(document));
    init_feature("narrative", nav::wire_narrative_reveal(document));

    let document = document.clone();
    dom::set_timeout(constants::HYPER_TEXT_INIT_DELAY_MS, move || {
        hyper_text::init(&document)
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-fx starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    // The splash runs as early as possible; the rest waits for the DOM.
    preloader::init(&document);

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let ready = Closure::once_into_js(move || init_page(&doc));
        document
            .add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    } else {
        init_page(&document);
    }
    Ok(())
}
