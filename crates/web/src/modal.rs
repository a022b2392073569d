//! Project dialog.
//!
//! One dialog region serves every project trigger. Opening renders the
//! catalog entry into the dialog body, locks background scroll, and
//! moves focus to the close control; the close control, the overlay,
//! and Escape all close it, idempotently.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::catalog::Catalog;
use folio_core::modal::ModalController;
use folio_core::views::project_detail;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::dom::{self, MountError};
use crate::render;

const STYLE_ID: &str = "modal-dynamic-styles";

/// Styling for the dialog's rendered content. Registered once, on the
/// first open.
const MODAL_CSS: &str = "\
.modal__project { display: flex; flex-direction: column; gap: 2rem; }
.modal__project-image { width: 100%; border-radius: 12px; overflow: hidden; }
.modal__project-image img { width: 100%; height: auto; }
.modal__project-category { display: inline-block; font-size: 0.875rem; \
font-weight: 500; color: var(--color-primary); text-transform: uppercase; \
letter-spacing: 0.05em; margin-bottom: 0.5rem; }
.modal__project-title { font-family: var(--font-heading); font-size: 2rem; \
color: var(--color-text); margin-bottom: 1.5rem; }
.modal__project-description { color: var(--color-text-light); line-height: 1.7; }
.modal__project-description h3 { font-size: 1.1rem; color: var(--color-text); \
margin: 1.5rem 0 0.75rem; }
.modal__project-description h3:first-child { margin-top: 0; }
.modal__project-description p { margin-bottom: 1rem; }
.modal__project-description ul { margin-bottom: 1rem; padding-left: 1.5rem; }
.modal__project-description li { margin-bottom: 0.5rem; list-style-type: disc; }
.modal__project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; \
margin-top: 1.5rem; padding-top: 1.5rem; border-top: 1px solid var(--color-border); }
";

pub fn init(doc: &Document, catalog: Catalog) -> Result<(), MountError> {
    let modal = dom::by_id(doc, dom::MODAL_ID)?;
    let modal_body = dom::by_id(doc, dom::MODAL_BODY_ID)?;
    let close_button = dom::query_under(&modal, dom::MODAL_CLOSE_SELECTOR, "modal close control")?;
    let overlay = dom::query_under(&modal, dom::MODAL_OVERLAY_SELECTOR, "modal overlay")?;
    let triggers = dom::query_all(doc, dom::PROJECT_TRIGGER_SELECTOR)?;

    let controller = Rc::new(RefCell::new(ModalController::new(catalog)));

    for trigger in &triggers {
        let controller = Rc::clone(&controller);
        let doc = doc.clone();
        let modal = modal.clone();
        let modal_body = modal_body.clone();
        let close_button = close_button.clone();
        let clicked = trigger.clone();
        dom::listen(trigger, "click", move |event| {
            event.prevent_default();
            let id = clicked
                .get_attribute(dom::DATA_PROJECT)
                .and_then(|v| v.parse::<u32>().ok());
            let Some(id) = id else {
                return;
            };
            let opened = open(&doc, &controller, &modal, &modal_body, &close_button, id);
            if let Err(e) = opened {
                web_sys::console::warn_1(&format!("folio: modal open failed: {e}").into());
            }
        })?;
    }

    let close_action: Rc<dyn Fn()> = {
        let doc = doc.clone();
        let controller = Rc::clone(&controller);
        let modal = modal.clone();
        Rc::new(move || close(&doc, &controller, &modal))
    };

    for target in [&close_button, &overlay] {
        let close_action = Rc::clone(&close_action);
        dom::listen(target, "click", move |_event| close_action())?;
    }

    let close_on_escape = Rc::clone(&close_action);
    dom::listen(doc, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if key.key() == "Escape" && controller.borrow().is_open() {
            close_on_escape();
        }
    })?;

    Ok(())
}

fn open(
    doc: &Document,
    controller: &Rc<RefCell<ModalController>>,
    modal: &Element,
    modal_body: &Element,
    close_button: &Element,
    id: u32,
) -> Result<(), MountError> {
    let view = {
        let mut ctl = controller.borrow_mut();
        // Unknown id: no dialog, state untouched.
        let Some(entry) = ctl.open(id) else {
            return Ok(());
        };
        project_detail::render(entry)
    };

    let body = render::materialize(doc, &view)?;
    modal_body.set_text_content(None);
    modal_body.append_child(&body).map_err(dom::js)?;

    dom::inject_stylesheet(doc, STYLE_ID, MODAL_CSS)?;
    dom::set_class(modal, dom::ACTIVE_CLASS, true);
    set_scroll_lock(doc, true);
    if let Some(button) = close_button.dyn_ref::<HtmlElement>() {
        let _ = button.focus();
    }
    Ok(())
}

fn close(doc: &Document, controller: &Rc<RefCell<ModalController>>, modal: &Element) {
    if controller.borrow_mut().close() {
        dom::set_class(modal, dom::ACTIVE_CLASS, false);
        set_scroll_lock(doc, false);
    }
}

fn set_scroll_lock(doc: &Document, locked: bool) {
    if let Some(body) = doc.body() {
        let _ = if locked {
            body.style().set_property("overflow", "hidden")
        } else {
            body.style().remove_property("overflow").map(|_| ())
        };
    }
}
