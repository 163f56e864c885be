use log::{debug, warn};
use web_sys::window;

/// Navbar background turns opaque past this scroll offset.
pub const SCROLLED_THRESHOLD: f64 = 10.0;

/// A section is active once its top edge is within this many pixels of the viewport top.
pub const ACTIVE_WINDOW: f64 = 300.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Inicio,
    Servicios,
    Equipo,
    Faq,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Inicio, Section::Servicios, Section::Equipo, Section::Faq];

    /// Element id, used as `#anchor`.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Inicio => "inicio",
            Section::Servicios => "servicios",
            Section::Equipo => "equipo",
            Section::Faq => "faq",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Inicio => "Inicio",
            Section::Servicios => "Servicios",
            Section::Equipo => "Nuestro equipo",
            Section::Faq => "FAQ",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// First section, in page order, whose top edge sits inside the active window.
/// `None` means keep whatever was active before.
pub fn active_section(tops: &[(Section, f64)]) -> Option<Section> {
    tops.iter()
        .find(|(_, top)| (0.0..=ACTIVE_WINDOW).contains(top))
        .map(|(section, _)| *section)
}

/// Current viewport-relative top of every section present in the page.
pub fn section_tops() -> Vec<(Section, f64)> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    Section::ALL
        .into_iter()
        .filter_map(|section| {
            document
                .get_element_by_id(section.anchor())
                .map(|element| (section, element.get_bounding_client_rect().top()))
        })
        .collect()
}

/// Smooth scrolling comes from `scroll-behavior: smooth` on the root element.
pub fn scroll_to_section(section: Section) {
    match window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()))
    {
        Some(element) => {
            debug!("Scrolling to #{}", section.anchor());
            element.scroll_into_view();
        }
        None => warn!("Section #{} not found", section.anchor()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_match_page_ids() {
        let anchors: Vec<_> = Section::ALL.into_iter().map(Section::anchor).collect();
        assert_eq!(anchors, vec!["inicio", "servicios", "equipo", "faq"]);
        assert_eq!(Section::Faq.href(), "#faq");
    }

    #[test]
    fn scrolled_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn picks_first_section_inside_window() {
        let tops = [
            (Section::Inicio, -900.0),
            (Section::Servicios, 120.0),
            (Section::Equipo, 280.0),
            (Section::Faq, 1400.0),
        ];
        assert_eq!(active_section(&tops), Some(Section::Servicios));
    }

    #[test]
    fn window_edges_are_inclusive() {
        assert_eq!(active_section(&[(Section::Faq, 0.0)]), Some(Section::Faq));
        assert_eq!(active_section(&[(Section::Faq, 300.0)]), Some(Section::Faq));
        assert_eq!(active_section(&[(Section::Faq, 300.1)]), None);
    }

    #[test]
    fn nothing_in_window_keeps_previous() {
        let tops = [(Section::Inicio, -50.0), (Section::Servicios, 700.0)];
        assert_eq!(active_section(&tops), None);
    }
}
