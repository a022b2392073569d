//! Portfolio category filter.
//!
//! Buttons carry `data-filter`, cards carry `data-category`. Selection
//! marks every card `filtering` immediately and commits show/hide after
//! the configured delay through a tracked timer, so a quick second
//! selection cancels the first commit instead of racing it.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::Timings;
use folio_core::filter::{FILTER_ALL, FilterController};
use folio_protocol::CardPhase;
use web_sys::{Document, Element};

use crate::dom::{self, MountError};
use crate::schedule::TimerSlot;

const FILTERING_CLASS: &str = "filtering";
const HIDDEN_CLASS: &str = "hidden";

pub fn init(doc: &Document, timings: &Timings) -> Result<(), MountError> {
    let buttons = dom::query_all(doc, dom::FILTER_BUTTON_SELECTOR)?;
    let cards = dom::query_all(doc, dom::CARD_SELECTOR)?;
    if buttons.is_empty() || cards.is_empty() {
        return Ok(());
    }

    let categories = cards
        .iter()
        .map(|card| card.get_attribute(dom::DATA_CATEGORY).unwrap_or_default())
        .collect();
    let controller = Rc::new(RefCell::new(FilterController::new(categories)));
    let buttons = Rc::new(buttons);
    let cards = Rc::new(cards);
    let commit = TimerSlot::new();
    let commit_ms = timings.filter_commit_ms;

    for button in buttons.iter() {
        let controller = Rc::clone(&controller);
        let buttons = Rc::clone(&buttons);
        let cards = Rc::clone(&cards);
        let commit = commit.clone();
        let clicked = button.clone();
        dom::listen(button, "click", move |_event| {
            let selected = clicked
                .get_attribute(dom::DATA_FILTER)
                .unwrap_or_else(|| FILTER_ALL.to_string());

            // Exactly one button stays marked selected.
            for b in buttons.iter() {
                let is_active = *b == clicked;
                dom::set_class(b, dom::ACTIVE_CLASS, is_active);
                let _ = b.set_attribute("aria-selected", if is_active { "true" } else { "false" });
            }

            let transition = controller.borrow_mut().select(&selected);

            for card in cards.iter() {
                apply_phase(card, CardPhase::Filtering);
            }

            let cards = Rc::clone(&cards);
            let phases = transition.settled_phases();
            let scheduled = commit.replace(commit_ms, move || {
                for (card, phase) in cards.iter().zip(phases) {
                    apply_phase(card, phase);
                }
            });
            if let Err(e) = scheduled {
                web_sys::console::warn_1(&format!("folio: filter commit failed: {e}").into());
            }
        })?;
    }
    Ok(())
}

/// Project a card phase onto the card's classes. A `Filtering` mark is
/// additive — the card keeps its current hidden state until the commit.
fn apply_phase(card: &Element, phase: CardPhase) {
    if matches!(phase, CardPhase::Settled { .. }) {
        dom::set_class(card, FILTERING_CLASS, false);
        dom::set_class(card, HIDDEN_CLASS, false);
    }
    for class in phase.css_classes() {
        dom::set_class(card, class, true);
    }
}
