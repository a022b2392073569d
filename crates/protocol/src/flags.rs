use serde::{Deserialize, Serialize};

/// Per-card presentation phase during filtering.
///
/// Filtering is two-phase: every card is marked `Filtering` the moment a
/// filter is selected (exit animation hook), then settles to its target
/// visibility after the commit delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardPhase {
    Settled { visible: bool },
    Filtering,
}

impl CardPhase {
    /// CSS classes a renderer must hold on the card for this phase.
    pub fn css_classes(self) -> &'static [&'static str] {
        match self {
            CardPhase::Filtering => &["filtering"],
            CardPhase::Settled { visible: true } => &[],
            CardPhase::Settled { visible: false } => &["hidden"],
        }
    }
}

/// Styling family for a form result message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            MessageKind::Success => "form-message--success",
            MessageKind::Error => "form-message--error",
        }
    }
}

/// Header/menu presentation flags, projected from navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavFlags {
    /// Mobile menu is expanded (toggle + menu carry `active`).
    pub menu_open: bool,
    /// Page is scrolled past the header threshold (header carries `scrolled`).
    pub scrolled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_phase_classes() {
        assert_eq!(CardPhase::Filtering.css_classes(), ["filtering"]);
        assert_eq!(CardPhase::Settled { visible: false }.css_classes(), ["hidden"]);
        assert!(CardPhase::Settled { visible: true }.css_classes().is_empty());
    }

    #[test]
    fn message_modifiers() {
        assert_eq!(MessageKind::Success.css_modifier(), "form-message--success");
        assert_eq!(MessageKind::Error.css_modifier(), "form-message--error");
    }
}
