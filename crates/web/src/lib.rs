//! DOM wiring for the folio behavior layer.
//!
//! Each page feature has its own initializer. They share no state and
//! fail independently: a missing collaborator disables that feature
//! with a console warning while the rest of the page keeps working.

mod dom;
mod filter;
mod form;
mod modal;
mod nav;
mod page;
mod render;
mod reveal;
mod schedule;

use anyhow::Context as _;
use folio_core::catalog::Catalog;
use folio_core::config::{Thresholds, Timings};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    mount();
}

/// Wire every feature against the current document.
pub fn mount() {
    let doc = match dom::document() {
        Ok(doc) => doc,
        Err(e) => {
            web_sys::console::error_1(&format!("folio: no document: {e}").into());
            return;
        }
    };

    let timings = Timings::default();
    let thresholds = Thresholds::default();

    report("navigation", nav::init(&doc, &timings, &thresholds));
    report("scroll reveal", reveal::init_reveals(&doc, &thresholds));
    report("portfolio filter", filter::init(&doc, &timings));
    report("skill bars", reveal::init_skill_bars(&doc, &thresholds));
    report("contact form", form::init(&doc, &timings));
    report("project modal", modal::init(&doc, Catalog::builtin()));
    report("smooth scroll", page::init_smooth_scroll(&doc));
    report("footer year", page::set_current_year(&doc));
    report("fade-in", page::init_fade_in(&doc, &timings));
}

fn report(feature: &'static str, outcome: Result<(), dom::MountError>) {
    let outcome = outcome.with_context(|| format!("mounting {feature}"));
    if let Err(e) = outcome {
        web_sys::console::warn_1(&format!("folio: {feature} disabled: {e:#}").into());
    }
}
