//! Navigation state and scroll projections.

use folio_protocol::NavFlags;

use crate::config::Thresholds;

/// Mobile menu open/closed toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Geometry of one page section, measured by the DOM layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Whether the header gets its scrolled styling at `scroll_y`.
pub fn is_scrolled(scroll_y: f64, thresholds: &Thresholds) -> bool {
    scroll_y > thresholds.header_scroll_px
}

/// The section whose span contains the probe line, if any.
///
/// A section is active while `scroll_y` sits in
/// `(top - probe, top - probe + height]`. When spans overlap the last
/// match wins, so the section further down the page takes precedence.
pub fn active_section<'a>(
    scroll_y: f64,
    sections: &'a [SectionSpan],
    thresholds: &Thresholds,
) -> Option<&'a str> {
    let probe = thresholds.section_probe_px;
    sections
        .iter()
        .filter(|s| {
            let start = s.top - probe;
            scroll_y > start && scroll_y <= start + s.height
        })
        .next_back()
        .map(|s| s.id.as_str())
}

/// Header/menu flags as a pure projection of scroll position and menu
/// state.
pub fn nav_flags(menu: MenuState, scroll_y: f64, thresholds: &Thresholds) -> NavFlags {
    NavFlags {
        menu_open: menu.is_open(),
        scrolled: is_scrolled(scroll_y, thresholds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        vec![
            SectionSpan { id: "home".into(), top: 0.0, height: 600.0 },
            SectionSpan { id: "portfolio".into(), top: 600.0, height: 900.0 },
            SectionSpan { id: "about".into(), top: 1500.0, height: 700.0 },
        ]
    }

    #[test]
    fn scrolled_threshold_is_strict() {
        let th = Thresholds::default();
        assert!(!is_scrolled(50.0, &th));
        assert!(is_scrolled(50.1, &th));
    }

    #[test]
    fn active_section_tracks_probe_line() {
        let th = Thresholds::default();
        let spans = spans();
        assert_eq!(active_section(10.0, &spans, &th), Some("home"));
        assert_eq!(active_section(500.1, &spans, &th), Some("home"));
        assert_eq!(active_section(600.0, &spans, &th), Some("portfolio"));
        assert_eq!(active_section(1500.0, &spans, &th), Some("about"));
    }

    #[test]
    fn no_section_above_the_first() {
        let th = Thresholds::default();
        let spans = vec![SectionSpan { id: "about".into(), top: 900.0, height: 300.0 }];
        assert_eq!(active_section(100.0, &spans, &th), None);
    }

    #[test]
    fn overlapping_spans_prefer_the_later_section() {
        let th = Thresholds::default();
        let spans = vec![
            SectionSpan { id: "a".into(), top: 0.0, height: 1000.0 },
            SectionSpan { id: "b".into(), top: 400.0, height: 400.0 },
        ];
        assert_eq!(active_section(500.0, &spans, &th), Some("b"));
    }

    #[test]
    fn menu_toggle_round_trip() {
        let mut menu = MenuState::default();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn flags_project_both_axes() {
        let th = Thresholds::default();
        let mut menu = MenuState::default();
        menu.toggle();
        let flags = nav_flags(menu, 120.0, &th);
        assert!(flags.menu_open);
        assert!(flags.scrolled);
    }
}
