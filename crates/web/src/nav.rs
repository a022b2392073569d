//! Header and navigation behavior: mobile menu toggle, scrolled-header
//! styling, and active-link highlighting by section position.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::{Thresholds, Timings};
use folio_core::nav::{MenuState, SectionSpan, active_section, is_scrolled};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node};

use crate::dom::{self, MountError};
use crate::schedule;

const SCROLLED_CLASS: &str = "scrolled";

pub fn init(doc: &Document, timings: &Timings, thresholds: &Thresholds) -> Result<(), MountError> {
    let header = dom::by_id(doc, dom::HEADER_ID)?;
    let nav_links = Rc::new(dom::query_all(doc, dom::NAV_LINK_SELECTOR)?);

    init_menu(doc, &nav_links)?;

    // Section geometry is measured once and re-measured on resize;
    // scroll handling only reads the cache.
    let sections = Rc::new(RefCell::new(measure_sections(doc)?));
    let window = dom::window()?;
    let thresholds = *thresholds;

    let update_links = {
        let window = window.clone();
        let header = header.clone();
        let nav_links = Rc::clone(&nav_links);
        let sections = Rc::clone(&sections);
        move || {
            let y = window.scroll_y().unwrap_or(0.0);
            dom::set_class(&header, SCROLLED_CLASS, is_scrolled(y, &thresholds));
            let spans = sections.borrow();
            let active = active_section(y, &spans, &thresholds);
            for link in nav_links.iter() {
                let href = link.get_attribute("href").unwrap_or_default();
                let is_active = active.is_some_and(|id| href == format!("#{id}"));
                dom::set_class(link, dom::ACTIVE_CLASS, is_active);
            }
        }
    };
    update_links();

    let debounced = schedule::debounce(timings.scroll_debounce_ms, update_links);
    dom::listen(&window, "scroll", move |_event| debounced())?;

    let remeasure = {
        let doc = doc.clone();
        let sections = Rc::clone(&sections);
        schedule::throttle(timings.resize_throttle_ms, move || {
            match measure_sections(&doc) {
                Ok(spans) => *sections.borrow_mut() = spans,
                Err(e) => {
                    web_sys::console::warn_1(&format!("folio: section measure failed: {e}").into());
                }
            }
        })
    };
    dom::listen(&window, "resize", move |_event| remeasure())?;

    Ok(())
}

/// Mobile menu: toggle control flips it, activating a link or clicking
/// outside the menu region closes it.
fn init_menu(doc: &Document, nav_links: &Rc<Vec<Element>>) -> Result<(), MountError> {
    let (Some(toggle), Some(menu_el)) = (
        doc.get_element_by_id(dom::NAV_TOGGLE_ID),
        doc.get_element_by_id(dom::NAV_MENU_ID),
    ) else {
        // Pages without a mobile menu skip this wiring only.
        return Ok(());
    };

    let menu = Rc::new(RefCell::new(MenuState::default()));

    {
        let menu = Rc::clone(&menu);
        let toggle_cb = toggle.clone();
        let menu_el_cb = menu_el.clone();
        dom::listen(&toggle, "click", move |_event| {
            let open = menu.borrow_mut().toggle();
            apply_menu(&toggle_cb, &menu_el_cb, open);
        })?;
    }

    for link in nav_links.iter() {
        let menu = Rc::clone(&menu);
        let toggle = toggle.clone();
        let menu_el = menu_el.clone();
        dom::listen(link, "click", move |_event| {
            menu.borrow_mut().close();
            apply_menu(&toggle, &menu_el, false);
        })?;
    }

    {
        let menu = Rc::clone(&menu);
        let toggle = toggle.clone();
        let menu_el = menu_el.clone();
        dom::listen(doc, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let Some(target) = target else {
                return;
            };
            let inside = menu_el.contains(Some(&target)) || toggle.contains(Some(&target));
            if !inside {
                menu.borrow_mut().close();
                apply_menu(&toggle, &menu_el, false);
            }
        })?;
    }

    Ok(())
}

fn apply_menu(toggle: &Element, menu_el: &Element, open: bool) {
    dom::set_class(toggle, dom::ACTIVE_CLASS, open);
    dom::set_class(menu_el, dom::ACTIVE_CLASS, open);
    let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
}

fn measure_sections(doc: &Document) -> Result<Vec<SectionSpan>, MountError> {
    let sections = dom::query_all(doc, dom::SECTION_SELECTOR)?;
    Ok(sections
        .iter()
        .filter_map(|section| {
            let html = section.dyn_ref::<HtmlElement>()?;
            Some(SectionSpan {
                id: section.id(),
                top: f64::from(html.offset_top()),
                height: f64::from(html.offset_height()),
            })
        })
        .collect())
}
