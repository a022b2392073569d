//! Cosmetic page behavior: anchor smooth-scroll with header offset,
//! footer year stamp, and the initial fade-in pass.

use folio_core::config::Timings;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, MountError};
use crate::schedule::Timeout;

/// In-page anchors scroll smoothly, offset by the header height so the
/// target section is not hidden under the fixed header.
pub fn init_smooth_scroll(doc: &Document) -> Result<(), MountError> {
    let anchors = dom::query_all(doc, dom::ANCHOR_SELECTOR)?;
    for anchor in &anchors {
        let doc = doc.clone();
        let anchor_el = anchor.clone();
        dom::listen(anchor, "click", move |event| {
            let Some(href) = anchor_el.get_attribute("href") else {
                return;
            };
            if href == "#" {
                return;
            }
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            event.prevent_default();

            let header_height = doc
                .get_element_by_id(dom::HEADER_ID)
                .and_then(|h| h.dyn_into::<HtmlElement>().ok())
                .map_or(0.0, |h| f64::from(h.offset_height()));

            let Ok(window) = dom::window() else {
                return;
            };
            let page_offset = window.scroll_y().unwrap_or(0.0);
            let top = target.get_bounding_client_rect().top() + page_offset - header_height;

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }
    Ok(())
}

/// Stamp the current year into the footer.
pub fn set_current_year(doc: &Document) -> Result<(), MountError> {
    let el = dom::by_id(doc, dom::CURRENT_YEAR_ID)?;
    let year = js_sys::Date::new_0().get_full_year();
    el.set_text_content(Some(&year.to_string()));
    Ok(())
}

/// Show the initial `.fade-in` elements after a brief delay.
pub fn init_fade_in(doc: &Document, timings: &Timings) -> Result<(), MountError> {
    let elements = dom::query_all(doc, dom::FADE_IN_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }
    let timeout = Timeout::schedule(timings.fade_in_ms, move || {
        for el in &elements {
            dom::set_class(el, dom::VISIBLE_CLASS, true);
        }
    })?;
    // Fire-once startup work; nothing ever cancels it.
    timeout.forget();
    Ok(())
}
