//! The page elements the tracker reads and writes, as traits, plus their
//! `web_sys` implementations.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::error::{NavError, NavResult};

/// A content region the viewport can be "in".
pub trait SectionGeometry {
    fn section_id(&self) -> Option<String>;
    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;
}

/// A nav icon: a link to a section plus a presentational class.
pub trait NavLink {
    fn href(&self) -> Option<String>;
    fn set_class(&self, class: &str, on: bool);

    /// The section id the link points at, without the leading `#`.
    fn target_id(&self) -> Option<String> {
        self.href()
            .and_then(|href| href.strip_prefix('#').map(str::to_string))
            .filter(|id| !id.is_empty())
    }

    fn links_to(&self, section_id: &str) -> bool {
        self.href()
            .and_then(|href| href.strip_prefix('#').map(|id| id == section_id))
            .unwrap_or(false)
    }
}

pub trait ClassToggle {
    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&self, class: &str) -> bool;
}

pub trait Viewport {
    fn scroll_y(&self) -> f64;

    /// Brings the section into view. Returns false when no such section exists.
    fn scroll_to_section(&self, section_id: &str, smooth: bool) -> bool;
}

impl SectionGeometry for HtmlElement {
    fn section_id(&self) -> Option<String> {
        self.get_attribute("id")
    }

    fn offset_top(&self) -> f64 {
        HtmlElement::offset_top(self) as f64
    }

    fn offset_height(&self) -> f64 {
        HtmlElement::offset_height(self) as f64
    }
}

impl NavLink for Element {
    fn href(&self) -> Option<String> {
        self.get_attribute("href")
    }

    fn set_class(&self, class: &str, on: bool) {
        let list = self.class_list();
        let _ = if on { list.add_1(class) } else { list.remove_1(class) };
    }
}

impl ClassToggle for Element {
    fn toggle_class(&self, class: &str) -> bool {
        self.class_list().toggle(class).unwrap_or(false)
    }
}

/// The browser window and its document.
#[derive(Clone)]
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    pub fn current() -> NavResult<Self> {
        let window = web_sys::window().ok_or(NavError::NoWindow)?;
        let document = window.document().ok_or(NavError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    /// All matching elements, in document order.
    pub fn query_all(&self, selector: &str) -> NavResult<Vec<Element>> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|e| NavError::selector(selector, e))?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    /// Sections are measured through `HtmlElement`; anything else is skipped.
    pub fn sections(&self, selector: &str) -> NavResult<Vec<HtmlElement>> {
        Ok(self
            .query_all(selector)?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .collect())
    }

    pub fn query_one(&self, selector: &str) -> NavResult<Option<Element>> {
        self.document
            .query_selector(selector)
            .map_err(|e| NavError::selector(selector, e))
    }
}

impl Viewport for Page {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to_section(&self, section_id: &str, smooth: bool) -> bool {
        match self.document.get_element_by_id(section_id) {
            Some(section) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Instant });
                section.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}
