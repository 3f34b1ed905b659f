use crate::constants::*;
use crate::core::in_view;
use crate::dom;
use web_sys as web;

/// In-page anchors (`#id`) scroll smoothly instead of jumping.
pub fn wire_smooth_links(document: &web::Document) {
    let links = dom::query_all(document, NAV_LINKS_SELECTOR);
    log::info!("[nav] {} links", links.len());
    for link in links {
        let Some(target_id) = link
            .get_attribute("href")
            .and_then(|href| href.strip_prefix('#').map(str::to_string))
        else {
            continue;
        };
        let document = document.clone();
        dom::add_listener(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let Some(section) = document.get_element_by_id(&target_id) else {
                return;
            };
            let options = web::ScrollIntoViewOptions::new();
            options.set_behavior(web::ScrollBehavior::Smooth);
            options.set_block(web::ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}

/// Reveal the narrative copy the first time the about section is in view.
pub fn wire_narrative_reveal(document: &web::Document) -> anyhow::Result<()> {
    let (Some(about), Some(narrative)) = (
        document.get_element_by_id(ABOUT_SECTION_ID),
        dom::query(document, NARRATIVE_SELECTOR),
    ) else {
        anyhow::bail!("no about section");
    };
    dom::observe_visibility(
        &about,
        ABOUT_VISIBILITY_THRESHOLD,
        Some(ABOUT_ROOT_MARGIN),
        move |visible, ratio| {
            if in_view(visible, ratio, ABOUT_VISIBILITY_THRESHOLD)
                && !narrative.class_list().contains(CLASS_VISIBLE)
            {
                dom::set_class(&narrative, CLASS_VISIBLE, true);
            }
        },
    )?;
    Ok(())
}
