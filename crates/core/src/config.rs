//! Presentation timing and threshold knobs.
//!
//! Every delay and cutoff the behavior layer uses lives here. The values
//! are presentation choices, not correctness requirements — the filter
//! commit delay may be set to 0 without changing which cards end up
//! visible.

use serde::Serialize;

/// Delays in milliseconds for timer-driven transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Timings {
    /// Gap between marking cards `filtering` and committing show/hide.
    pub filter_commit_ms: u32,
    /// How long a form result message stays before it starts fading.
    pub message_dismiss_ms: u32,
    /// Fade-out duration before the message node is removed.
    pub message_fade_ms: u32,
    /// Simulated contact-form round trip.
    pub submit_simulate_ms: u32,
    /// Delay before the initial `.fade-in` elements are shown.
    pub fade_in_ms: u32,
    /// Debounce window for scroll-driven nav updates.
    pub scroll_debounce_ms: u32,
    /// Throttle window for resize handlers.
    pub resize_throttle_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            filter_commit_ms: 200,
            message_dismiss_ms: 5000,
            message_fade_ms: 300,
            submit_simulate_ms: 1500,
            fade_in_ms: 100,
            scroll_debounce_ms: 10,
            resize_throttle_ms: 100,
        }
    }
}

/// Geometric cutoffs for scroll and intersection observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    /// Fraction of a reveal element that must be visible to fire.
    pub reveal_ratio: f64,
    /// Root margin applied to the reveal observer (shrinks the bottom edge
    /// so elements fire slightly before fully entering).
    pub reveal_root_margin: &'static str,
    /// Fraction of a skill bar that must be visible to animate. Stricter
    /// than the general reveal ratio — a partially visible bar animating
    /// looks broken.
    pub skill_ratio: f64,
    /// Scroll offset in px past which the header is styled as scrolled.
    pub header_scroll_px: f64,
    /// Reference line below the viewport top used to pick the active
    /// navigation section.
    pub section_probe_px: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            reveal_ratio: 0.1,
            reveal_root_margin: "0px 0px -50px 0px",
            skill_ratio: 0.5,
            header_scroll_px: 50.0,
            section_probe_px: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_source_behavior() {
        let t = Timings::default();
        assert_eq!(t.filter_commit_ms, 200);
        assert_eq!(t.message_dismiss_ms, 5000);
        assert_eq!(t.submit_simulate_ms, 1500);

        let th = Thresholds::default();
        assert!(th.skill_ratio > th.reveal_ratio);
        assert_eq!(th.header_scroll_px, 50.0);
    }
}
