//! Marks the navigation link of whichever sections are on screen
use std::collections::BTreeSet;

/// Instruction to set or clear the active marker on one section's link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMark {
    pub section_id: String,
    pub active: bool,
}

impl LinkMark {
    /// Selector for the menu link pointing at this section, scoped to `menu`.
    #[must_use]
    pub fn link_selector(&self, menu: &str) -> String {
        link_selector(menu, &self.section_id)
    }
}

#[must_use]
pub fn link_selector(menu: &str, section_id: &str) -> String {
    let escaped = section_id.replace('\\', "\\\\").replace('"', "\\\"");
    format!("{menu} a[href=\"#{escaped}\"]")
}

/// Tracks which sections are currently intersecting. Several may be active
/// at once while scrolling between them.
#[derive(Debug, Clone, Default)]
pub struct SectionHighlighter {
    active: BTreeSet<String>,
}

impl SectionHighlighter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visibility change. Sections without an id have no link.
    pub fn observe(&mut self, section_id: &str, intersecting: bool) -> Option<LinkMark> {
        if section_id.is_empty() {
            return None;
        }
        if intersecting {
            self.active.insert(section_id.to_string());
        } else {
            self.active.remove(section_id);
        }
        Some(LinkMark {
            section_id: section_id.to_string(),
            active: intersecting,
        })
    }

    #[must_use]
    pub fn is_active(&self, section_id: &str) -> bool {
        self.active.contains(section_id)
    }

    pub fn active_sections(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_follow_visibility() {
        let mut hl = SectionHighlighter::new();
        let mark = hl.observe("sobre", true).unwrap();
        assert!(mark.active);
        assert!(hl.is_active("sobre"));

        let mark = hl.observe("sobre", false).unwrap();
        assert!(!mark.active);
        assert!(!hl.is_active("sobre"));
    }

    #[test]
    fn overlapping_sections_may_both_be_active() {
        let mut hl = SectionHighlighter::new();
        hl.observe("sobre", true);
        hl.observe("contato", true);
        assert_eq!(hl.active_sections().collect::<Vec<_>>(), ["contato", "sobre"]);
    }

    #[test]
    fn anonymous_sections_are_skipped() {
        let mut hl = SectionHighlighter::new();
        assert!(hl.observe("", true).is_none());
        assert_eq!(hl.active_sections().count(), 0);
    }

    #[test]
    fn selector_targets_fragment_link() {
        let mark = LinkMark {
            section_id: "contato".into(),
            active: true,
        };
        assert_eq!(mark.link_selector(".menu"), ".menu a[href=\"#contato\"]");
        assert_eq!(link_selector(".menu", "a\"b"), ".menu a[href=\"#a\\\"b\"]");
    }
}
