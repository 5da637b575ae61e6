//! Maps the scroll position to the section in view and keeps the nav icons in
//! sync with it.

use crate::config::NavConfig;
use crate::dom::{NavLink, SectionGeometry, Viewport};

/// Outcome of one band scan.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A section's band contains the scroll position. `None` when that section has no id.
    Matched(Option<String>),
    /// Above the first section.
    Home,
    /// Between bands or past the last one.
    NoMatch,
}

/// Scans `sections` in document order. A section owns `[top - offset, top - offset + height)`;
/// when bands overlap the later section wins.
pub fn resolve_section<S: SectionGeometry>(sections: &[S], scroll_y: f64, offset: f64) -> Resolution {
    let mut matched = None;
    for section in sections {
        let top = section.offset_top() - offset;
        if scroll_y >= top && scroll_y < top + section.offset_height() {
            matched = Some(section.section_id());
        }
    }

    match (matched, sections.first()) {
        (Some(id), _) => Resolution::Matched(id),
        (None, Some(first)) if scroll_y < first.offset_top() - offset => Resolution::Home,
        _ => Resolution::NoMatch,
    }
}

/// The tracker's only state: the id of the section last judged in view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurrentSection(Option<String>);

impl CurrentSection {
    pub fn get(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// `NoMatch` keeps the previous value. Returns true when the value changed.
    pub fn apply(&mut self, resolution: Resolution, home_id: &str) -> bool {
        let next = match resolution {
            Resolution::Matched(id) => id,
            Resolution::Home => Some(home_id.to_string()),
            Resolution::NoMatch => return false,
        };
        let changed = next != self.0;
        self.0 = next;
        changed
    }
}

/// Sections and icons collected at attach time, plus the current section.
pub struct ScrollSpy<S, I> {
    sections: Vec<S>,
    icons: Vec<I>,
    current: CurrentSection,
    config: NavConfig,
}

impl<S: SectionGeometry, I: NavLink> ScrollSpy<S, I> {
    pub fn new(sections: Vec<S>, icons: Vec<I>, config: NavConfig) -> Self {
        Self {
            sections,
            icons,
            current: CurrentSection::default(),
            config,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.get()
    }

    pub fn icons(&self) -> &[I] {
        &self.icons
    }

    /// Recomputes the current section and repaints the icons. Without any
    /// sections nothing is touched.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<&str> {
        if self.sections.is_empty() {
            return self.current.get();
        }
        let resolution = resolve_section(&self.sections, scroll_y, self.config.scroll_offset);
        self.current.apply(resolution, &self.config.home_id);

        let class = self.config.active_class.as_str();
        for icon in &self.icons {
            icon.set_class(class, false);
        }
        if let Some(id) = self.current.get() {
            for icon in self.icons.iter().filter(|icon| icon.links_to(id)) {
                icon.set_class(class, true);
            }
        }
        self.current.get()
    }

    /// Marks the clicked icon active and, for `#fragment` links, scrolls to the
    /// section. The current section is left for the next scroll event to recompute.
    pub fn on_click<V: Viewport>(&self, index: usize, viewport: &V) -> Click {
        let Some(clicked) = self.icons.get(index) else {
            return Click::Ignored;
        };
        let class = self.config.active_class.as_str();
        for icon in &self.icons {
            icon.set_class(class, false);
        }
        clicked.set_class(class, true);

        match clicked.target_id() {
            Some(target) if viewport.scroll_to_section(&target, self.config.smooth_scroll) => {
                Click::Scrolled(target)
            }
            Some(target) => Click::MissingSection(target),
            None => Click::External,
        }
    }
}

/// What a nav icon click did.
#[derive(Debug, Clone, PartialEq)]
pub enum Click {
    /// No icon at that index.
    Ignored,
    Scrolled(String),
    /// In-page link to a section that does not exist.
    MissingSection(String),
    /// Not a `#fragment` link; navigation is the browser's.
    External,
}

impl Click {
    /// Whether the browser's own link navigation should be suppressed.
    pub fn handled_in_page(&self) -> bool {
        matches!(self, Click::Scrolled(_) | Click::MissingSection(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeElement, FakeSection, FakeViewport};

    fn page() -> ScrollSpy<FakeSection, FakeElement> {
        // Bands after the 100px offset: home [0, 500), about [500, 1000).
        let sections = vec![
            FakeSection::new("home", 100.0, 500.0),
            FakeSection::new("about", 600.0, 500.0),
        ];
        let icons = vec![FakeElement::link("#home"), FakeElement::link("#about")];
        ScrollSpy::new(sections, icons, NavConfig::default())
    }

    fn active(spy: &ScrollSpy<FakeSection, FakeElement>) -> Vec<String> {
        spy.icons()
            .iter()
            .filter(|icon| icon.has("active"))
            .filter_map(|icon| icon.href.clone())
            .collect()
    }

    #[test]
    fn scroll_marks_section_in_band() {
        let mut spy = page();
        assert_eq!(spy.on_scroll(0.0), Some("home"));
        assert_eq!(active(&spy), vec!["#home"]);

        assert_eq!(spy.on_scroll(600.0), Some("about"));
        assert_eq!(active(&spy), vec!["#about"]);
    }

    #[test]
    fn band_end_is_exclusive() {
        let mut spy = page();
        assert_eq!(spy.on_scroll(499.0), Some("home"));
        assert_eq!(spy.on_scroll(500.0), Some("about"));
    }

    #[test]
    fn above_first_section_falls_back_to_home() {
        let mut spy = page();
        spy.on_scroll(600.0);
        assert_eq!(spy.on_scroll(-50.0), Some("home"));
        assert_eq!(active(&spy), vec!["#home"]);
    }

    #[test]
    fn home_fallback_without_home_icon_clears_all() {
        let sections = vec![FakeSection::new("intro", 300.0, 200.0)];
        let icons = vec![FakeElement::link("#intro")];
        let mut spy = ScrollSpy::new(sections, icons, NavConfig::default());
        spy.on_scroll(250.0);
        assert_eq!(active(&spy), vec!["#intro"]);

        assert_eq!(spy.on_scroll(0.0), Some("home"));
        assert!(active(&spy).is_empty());
    }

    #[test]
    fn overlapping_bands_prefer_later_section() {
        let sections = vec![
            FakeSection::new("a", 100.0, 800.0),
            FakeSection::new("b", 400.0, 300.0),
        ];
        let icons = vec![FakeElement::link("#a"), FakeElement::link("#b")];
        let mut spy = ScrollSpy::new(sections, icons, NavConfig::default());
        assert_eq!(spy.on_scroll(350.0), Some("b"));
        assert_eq!(active(&spy), vec!["#b"]);
        assert_eq!(spy.on_scroll(650.0), Some("a"));
    }

    #[test]
    fn gap_between_bands_keeps_previous_section() {
        let sections = vec![
            FakeSection::new("home", 100.0, 200.0),
            FakeSection::new("work", 800.0, 200.0),
        ];
        let icons = vec![FakeElement::link("#home"), FakeElement::link("#work")];
        let mut spy = ScrollSpy::new(sections, icons, NavConfig::default());
        spy.on_scroll(50.0);
        assert_eq!(spy.on_scroll(400.0), Some("home"));
        assert_eq!(active(&spy), vec!["#home"]);

        spy.on_scroll(750.0);
        assert_eq!(spy.on_scroll(5000.0), Some("work"));
        assert_eq!(active(&spy), vec!["#work"]);
    }

    #[test]
    fn no_sections_never_activates_anything() {
        let icons = vec![FakeElement::link("#home")];
        let mut spy = ScrollSpy::<FakeSection, _>::new(Vec::new(), icons, NavConfig::default());
        assert_eq!(spy.on_scroll(0.0), None);
        assert!(active(&spy).is_empty());
    }

    #[test]
    fn matched_section_without_id_clears_icons() {
        let sections = vec![
            FakeSection::new("home", 100.0, 400.0),
            FakeSection { id: None, top: 500.0, height: 400.0 },
        ];
        let icons = vec![FakeElement::link("#home")];
        let mut spy = ScrollSpy::new(sections, icons, NavConfig::default());
        spy.on_scroll(0.0);
        assert_eq!(spy.on_scroll(450.0), None);
        assert!(active(&spy).is_empty());
    }

    #[test]
    fn click_activates_icon_and_scrolls_smoothly() {
        let mut spy = page();
        spy.on_scroll(0.0);
        let viewport = FakeViewport {
            sections: vec!["home".into(), "about".into()],
            ..Default::default()
        };

        assert_eq!(spy.on_click(1, &viewport), Click::Scrolled("about".into()));
        assert_eq!(active(&spy), vec!["#about"]);
        assert_eq!(*viewport.scrolled_to.borrow(), vec![("about".to_string(), true)]);
        // Scroll state is untouched until the next scroll event.
        assert_eq!(spy.current(), Some("home"));
    }

    #[test]
    fn click_on_missing_section_still_activates() {
        let sections = vec![FakeSection::new("home", 100.0, 500.0)];
        let icons = vec![FakeElement::link("#home"), FakeElement::link("#contact")];
        let spy = ScrollSpy::new(sections, icons, NavConfig::default());
        let viewport = FakeViewport {
            sections: vec!["home".into()],
            ..Default::default()
        };

        let click = spy.on_click(1, &viewport);
        assert_eq!(click, Click::MissingSection("contact".into()));
        assert!(click.handled_in_page());
        assert_eq!(active(&spy), vec!["#contact"]);
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn click_out_of_range_is_ignored() {
        let spy = page();
        assert_eq!(spy.on_click(9, &FakeViewport::default()), Click::Ignored);
        assert!(active(&spy).is_empty());
    }

    #[test]
    fn click_on_off_page_link_leaves_navigation_to_browser() {
        let sections = vec![FakeSection::new("home", 100.0, 500.0)];
        let icons = vec![FakeElement::link("#home"), FakeElement::link("/blog")];
        let spy = ScrollSpy::new(sections, icons, NavConfig::default());
        let viewport = FakeViewport {
            sections: vec!["home".into(), "blog".into()],
            ..Default::default()
        };

        let click = spy.on_click(1, &viewport);
        assert_eq!(click, Click::External);
        assert!(!click.handled_in_page());
        assert_eq!(active(&spy), vec!["/blog"]);
        assert!(viewport.scrolled_to.borrow().is_empty());
    }

    #[test]
    fn scroll_without_sections_keeps_clicked_icon() {
        let icons = vec![FakeElement::link("#home"), FakeElement::link("#about")];
        let mut spy = ScrollSpy::<FakeSection, _>::new(Vec::new(), icons, NavConfig::default());
        spy.on_click(1, &FakeViewport::default());

        assert_eq!(spy.on_scroll(10.0), None);
        assert!(spy.icons()[1].has("active"));
        assert_eq!(active(&spy), vec!["#about"]);
    }

    #[test]
    fn custom_offset_and_home_id() {
        let config = NavConfig {
            scroll_offset: 0.0,
            home_id: "top".into(),
            ..NavConfig::default()
        };
        let sections = vec![FakeSection::new("intro", 200.0, 100.0)];
        let icons = vec![FakeElement::link("#top"), FakeElement::link("#intro")];
        let mut spy = ScrollSpy::new(sections, icons, config);
        assert_eq!(spy.on_scroll(150.0), Some("top"));
        assert_eq!(spy.on_scroll(200.0), Some("intro"));
    }

    #[test]
    fn current_section_reports_changes() {
        let mut current = CurrentSection::default();
        assert!(current.apply(Resolution::Home, "home"));
        assert!(!current.apply(Resolution::Home, "home"));
        assert!(!current.apply(Resolution::NoMatch, "home"));
        assert_eq!(current.get(), Some("home"));
        assert!(current.apply(Resolution::Matched(Some("about".into())), "home"));
    }
}
