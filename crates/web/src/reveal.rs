//! Scroll-reveal and skill-bar observers.
//!
//! Both ride one mechanism: watch a fixed element set, fire once per
//! element on first intersection, unobserve. `RevealSet` guarantees the
//! once-only transition even if the host delivers a late second entry
//! for an element already unobserved.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::Thresholds;
use folio_core::reveal::{RevealSet, clamp_progress};
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom::{self, MountError};

pub const ANIMATE_CLASS: &str = "animate";

/// Float-in reveals for the page's animated regions.
pub fn init_reveals(doc: &Document, thresholds: &Thresholds) -> Result<(), MountError> {
    let elements = dom::query_all(doc, dom::REVEAL_SELECTOR)?;
    observe_once(
        elements,
        thresholds.reveal_ratio,
        Some(thresholds.reveal_root_margin),
        |el| dom::set_class(el, dom::VISIBLE_CLASS, true),
    )
}

/// Skill bars grow to their marked percentage on first visibility.
pub fn init_skill_bars(doc: &Document, thresholds: &Thresholds) -> Result<(), MountError> {
    let bars = dom::query_all(doc, dom::SKILL_BAR_SELECTOR)?;
    observe_once(bars, thresholds.skill_ratio, None, |el| {
        let progress = el
            .get_attribute(dom::DATA_PROGRESS)
            .as_deref()
            .and_then(clamp_progress);
        if let Some(pct) = progress {
            if let Some(html) = el.dyn_ref::<HtmlElement>() {
                let _ = html.style().set_property("width", &format!("{pct}%"));
            }
        }
        dom::set_class(el, ANIMATE_CLASS, true);
    })
}

/// Watch `elements` and call `on_first_visible` exactly once per element
/// when it first satisfies the threshold, then unobserve it. No elements
/// are added after this call.
fn observe_once<F>(
    elements: Vec<Element>,
    ratio: f64,
    root_margin: Option<&str>,
    mut on_first_visible: F,
) -> Result<(), MountError>
where
    F: FnMut(&Element) + 'static,
{
    if elements.is_empty() {
        return Ok(());
    }

    let pending = Rc::new(RefCell::new(RevealSet::new(elements.len())));
    let elements = Rc::new(elements);

    let pending_cb = Rc::clone(&pending);
    let elements_cb = Rc::clone(&elements);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Some(key) = elements_cb.iter().position(|el| *el == target) else {
                    continue;
                };
                if pending_cb.borrow_mut().mark_visible(key) {
                    on_first_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ));

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ratio));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom::js)?;
    for el in elements.iter() {
        observer.observe(el);
    }
    // Observer and callback live for the page.
    callback.forget();
    Ok(())
}
