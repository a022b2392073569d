//! Category filter state.
//!
//! The controller owns the active filter and knows each card's fixed
//! category slug. Selecting a filter yields a transition the renderer
//! applies in two phases: mark every card `filtering` now, commit the
//! per-card visibility after the configured delay.

use folio_protocol::CardPhase;

pub const FILTER_ALL: &str = "all";

/// Outcome of a filter selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTransition {
    /// The filter now active.
    pub active: String,
    /// Target visibility per card, in card order.
    pub visible: Vec<bool>,
}

impl FilterTransition {
    /// Phases to apply once the commit delay elapses.
    pub fn settled_phases(&self) -> Vec<CardPhase> {
        self.visible
            .iter()
            .map(|&v| CardPhase::Settled { visible: v })
            .collect()
    }
}

/// Tracks the active category for a fixed set of cards.
#[derive(Debug, Clone)]
pub struct FilterController {
    card_categories: Vec<String>,
    active: String,
}

impl FilterController {
    /// `card_categories` is each card's category slug, in display order.
    pub fn new(card_categories: Vec<String>) -> Self {
        Self {
            card_categories,
            active: FILTER_ALL.to_string(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn card_count(&self) -> usize {
        self.card_categories.len()
    }

    /// Select a filter. Unknown categories are accepted and simply match
    /// zero cards. Idempotent: reselecting the active filter produces the
    /// same transition.
    pub fn select(&mut self, category: &str) -> FilterTransition {
        self.active = category.to_string();
        FilterTransition {
            active: self.active.clone(),
            visible: self
                .card_categories
                .iter()
                .map(|c| card_matches(&self.active, c))
                .collect(),
        }
    }
}

/// Whether a card with `card_category` is visible under `active`.
pub fn card_matches(active: &str, card_category: &str) -> bool {
    active == FILTER_ALL || active == card_category
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<String> {
        ["ux-design", "instructional-design", "instructional-design", "ux-design", "tech-ethics", "ux-design"]
            .iter()
            .map(|s| (*s).to_string())
            .collect()
    }

    #[test]
    fn starts_on_all() {
        let ctl = FilterController::new(cards());
        assert_eq!(ctl.active(), FILTER_ALL);
    }

    #[test]
    fn category_selects_exactly_matching_cards() {
        let mut ctl = FilterController::new(cards());
        let t = ctl.select("ux-design");
        assert_eq!(t.visible, [true, false, false, true, false, true]);
        assert_eq!(t.active, "ux-design");
    }

    #[test]
    fn all_restores_every_card() {
        let mut ctl = FilterController::new(cards());
        ctl.select("tech-ethics");
        let t = ctl.select(FILTER_ALL);
        assert!(t.visible.iter().all(|&v| v));
    }

    #[test]
    fn unknown_category_matches_zero_cards() {
        let mut ctl = FilterController::new(cards());
        let t = ctl.select("sculpture");
        assert!(t.visible.iter().all(|&v| !v));
        assert_eq!(ctl.active(), "sculpture");
    }

    #[test]
    fn reselect_is_idempotent() {
        let mut ctl = FilterController::new(cards());
        let first = ctl.select("instructional-design");
        let second = ctl.select("instructional-design");
        assert_eq!(first, second);
    }

    #[test]
    fn settled_phases_mirror_visibility() {
        let mut ctl = FilterController::new(cards());
        let t = ctl.select("tech-ethics");
        let phases = t.settled_phases();
        assert_eq!(phases[4], folio_protocol::CardPhase::Settled { visible: true });
        assert_eq!(phases[0], folio_protocol::CardPhase::Settled { visible: false });
    }
}
