//! DOM access helpers and the page structure contract.
//!
//! All fixed identifiers and selectors the behavior layer depends on
//! live here. Controllers receive resolved elements at construction;
//! nothing outside this module queries by global id.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, EventTarget, Window};

pub const HEADER_ID: &str = "header";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav__link";
pub const SECTION_SELECTOR: &str = "section[id]";

pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const CARD_SELECTOR: &str = ".portfolio__card";
pub const DATA_FILTER: &str = "data-filter";
pub const DATA_CATEGORY: &str = "data-category";

pub const SKILL_BAR_SELECTOR: &str = ".skill__progress";
pub const DATA_PROGRESS: &str = "data-progress";

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const DATA_ENDPOINT: &str = "data-endpoint";

pub const MODAL_ID: &str = "project-modal";
pub const MODAL_BODY_ID: &str = "modal-body";
pub const MODAL_CLOSE_SELECTOR: &str = ".modal__close";
pub const MODAL_OVERLAY_SELECTOR: &str = ".modal__overlay";
pub const PROJECT_TRIGGER_SELECTOR: &str = "[data-project]";
pub const DATA_PROJECT: &str = "data-project";

pub const CURRENT_YEAR_ID: &str = "current-year";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const FADE_IN_SELECTOR: &str = ".fade-in";

/// Everything that floats in on first viewport entry.
pub const REVEAL_SELECTOR: &str = "\
.section__header, .portfolio__filters, .portfolio__card, \
.about__text, .about__recognition, .about__timeline, .about__skills, \
.about__credentials, .timeline__item, .skills__category, .credential, \
.contact__info, .contact__form, .contact__item, .form__group, \
.float-in, .float-in-left, .float-in-right, .float-in-scale";

pub const VISIBLE_CLASS: &str = "visible";
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Error)]
pub enum MountError {
    #[error("expected element missing: {0}")]
    MissingElement(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

/// Flatten a JS exception into a loggable error. `JsValue` is neither
/// `Send` nor `Sync`, so the payload is stringified at the boundary.
pub fn js(value: JsValue) -> MountError {
    MountError::Js(format!("{value:?}"))
}

pub fn window() -> Result<Window, MountError> {
    web_sys::window().ok_or(MountError::MissingElement("window"))
}

pub fn document() -> Result<Document, MountError> {
    window()?
        .document()
        .ok_or(MountError::MissingElement("document"))
}

pub fn by_id(doc: &Document, id: &'static str) -> Result<Element, MountError> {
    doc.get_element_by_id(id)
        .ok_or(MountError::MissingElement(id))
}

/// All elements matching `selector`, in document order.
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>, MountError> {
    let list = doc.query_selector_all(selector).map_err(js)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    Ok(out)
}

/// First match under `root`, required.
pub fn query_under(
    root: &Element,
    selector: &str,
    missing: &'static str,
) -> Result<Element, MountError> {
    root.query_selector(selector)
        .map_err(js)?
        .ok_or(MountError::MissingElement(missing))
}

/// Add or remove a class, whichever `on` asks for.
pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
}

/// Attach a page-lifetime event listener. The closure is intentionally
/// leaked — these listeners live as long as the document.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), MountError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handler));
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(js)?;
    cb.forget();
    Ok(())
}

/// Inject a one-time stylesheet, guarded by element id so repeat calls
/// never duplicate it.
pub fn inject_stylesheet(doc: &Document, id: &str, css: &str) -> Result<(), MountError> {
    if doc.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let style = doc.create_element("style").map_err(js)?;
    style.set_id(id);
    style.set_text_content(Some(css));
    let head = doc.head().ok_or(MountError::MissingElement("head"))?;
    head.append_child(&style).map_err(js)?;
    Ok(())
}
