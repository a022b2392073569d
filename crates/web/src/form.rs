//! Contact form submission.
//!
//! Submission is simulated unless the form carries a `data-endpoint`
//! attribute, in which case the form data is POSTed there with JSON
//! accept semantics and any non-2xx response counts as failure. Either
//! way the submit control is disabled for the duration, exactly one
//! result message is shown, and the message auto-dismisses on tracked
//! timers.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::Timings;
use folio_core::form::{FormMessage, FormState, SENDING_LABEL, SubmitOutcome};
use folio_core::views::form_message;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, FormData, Headers, HtmlButtonElement, HtmlElement, HtmlFormElement, RequestInit, Response};

use crate::dom::{self, MountError};
use crate::render;
use crate::schedule::{self, TimerSlot};

const MESSAGE_STYLE_ID: &str = "form-message-styles";

const MESSAGE_CSS: &str = "\
.form-message { padding: 1rem; margin-top: 1rem; border-radius: 8px; \
text-align: center; font-size: 0.9rem; animation: fadeIn 0.3s ease; }
.form-message--success { background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }
.form-message--error { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }
";

pub fn init(doc: &Document, timings: &Timings) -> Result<(), MountError> {
    let form: HtmlFormElement = dom::by_id(doc, dom::CONTACT_FORM_ID)?
        .dyn_into()
        .map_err(|_| MountError::MissingElement("contact form element"))?;
    let button: HtmlButtonElement =
        dom::query_under(&form, dom::SUBMIT_BUTTON_SELECTOR, "form submit control")?
            .dyn_into()
            .map_err(|_| MountError::MissingElement("form submit control"))?;

    let endpoint = form.get_attribute(dom::DATA_ENDPOINT);
    let state = Rc::new(RefCell::new(FormState::new()));
    let dismiss = TimerSlot::new();
    let remove = TimerSlot::new();
    let timings = *timings;

    let doc = doc.clone();
    dom::listen(&form.clone(), "submit", move |event| {
        event.prevent_default();
        if !state.borrow_mut().begin() {
            return;
        }

        let saved_label = button.inner_html();
        if let Err(e) = show_sending(&doc, &button) {
            web_sys::console::warn_1(&format!("folio: submit indicator failed: {e}").into());
        }
        button.set_disabled(true);

        let payload = FormData::new_with_form(&form).ok();

        let doc = doc.clone();
        let form = form.clone();
        let button = button.clone();
        let state = Rc::clone(&state);
        let endpoint = endpoint.clone();
        let dismiss = dismiss.clone();
        let remove = remove.clone();
        spawn_local(async move {
            let outcome = submit(endpoint, payload, timings.submit_simulate_ms).await;
            let message = state.borrow_mut().finish(outcome);
            if outcome == SubmitOutcome::Delivered {
                form.reset();
            }
            let shown = show_message(&doc, &form, &message, &timings, &dismiss, &remove);
            if let Err(e) = shown {
                web_sys::console::warn_1(&format!("folio: form message failed: {e}").into());
            }
            // Control always comes back, success or failure.
            button.set_inner_html(&saved_label);
            button.set_disabled(false);
        });
    })?;

    Ok(())
}

/// Swap the submit control's label for a spinner and "Sending...".
fn show_sending(doc: &Document, button: &HtmlButtonElement) -> Result<(), MountError> {
    button.set_text_content(None);
    let spinner = doc.create_element("span").map_err(dom::js)?;
    spinner.set_class_name("spinner");
    button.append_child(&spinner).map_err(dom::js)?;
    button
        .append_child(&doc.create_text_node(&format!(" {SENDING_LABEL}")))
        .map_err(dom::js)?;
    Ok(())
}

async fn submit(endpoint: Option<String>, payload: Option<FormData>, simulate_ms: u32) -> SubmitOutcome {
    match endpoint {
        None => {
            schedule::sleep(simulate_ms).await;
            SubmitOutcome::Delivered
        }
        Some(url) => match post_form(&url, payload).await {
            Ok(true) => SubmitOutcome::Delivered,
            Ok(false) | Err(_) => SubmitOutcome::Failed,
        },
    }
}

async fn post_form(url: &str, payload: Option<FormData>) -> Result<bool, MountError> {
    let init = RequestInit::new();
    init.set_method("POST");
    if let Some(data) = &payload {
        init.set_body(data.as_ref());
    }
    let headers = Headers::new().map_err(dom::js)?;
    headers.append("Accept", "application/json").map_err(dom::js)?;
    init.set_headers(headers.as_ref());

    let window = dom::window()?;
    let response = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(dom::js)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| MountError::Js("fetch returned a non-Response".to_string()))?;
    Ok(response.ok())
}

/// Insert the result message after the form, replacing any prior one,
/// and schedule its fade-out and removal.
fn show_message(
    doc: &Document,
    form: &HtmlFormElement,
    message: &FormMessage,
    timings: &Timings,
    dismiss: &TimerSlot,
    remove: &TimerSlot,
) -> Result<(), MountError> {
    dismiss.clear();
    remove.clear();
    let selector = format!(".{}", form_message::MESSAGE_CLASS);
    if let Some(prior) = doc.query_selector(&selector).map_err(dom::js)? {
        prior.remove();
    }

    dom::inject_stylesheet(doc, MESSAGE_STYLE_ID, MESSAGE_CSS)?;

    let node = render::materialize(doc, &form_message::render(message))?;
    let parent = form
        .parent_node()
        .ok_or(MountError::MissingElement("form parent"))?;
    parent
        .insert_before(&node, form.next_sibling().as_ref())
        .map_err(dom::js)?;

    let Ok(el) = node.dyn_into::<HtmlElement>() else {
        return Ok(());
    };
    let fade_ms = timings.message_fade_ms;
    let remove = remove.clone();
    dismiss.replace(timings.message_dismiss_ms, move || {
        let _ = el.style().set_property("transition", "opacity 0.3s ease");
        let _ = el.style().set_property("opacity", "0");
        let el = el.clone();
        let scheduled = remove.replace(fade_ms, move || el.remove());
        if let Err(e) = scheduled {
            web_sys::console::warn_1(&format!("folio: message removal failed: {e}").into());
        }
    })?;
    Ok(())
}
