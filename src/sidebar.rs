use crate::dom::{ClassToggle, Page};
use crate::logging;

/// Flips the visibility class on the sidebar. Returns the new state, or `None`
/// when there is no sidebar to flip.
pub fn toggle<T: ClassToggle>(sidebar: Option<&T>, class: &str) -> Option<bool> {
    sidebar.map(|el| el.toggle_class(class))
}

/// Toggles the first element matching `selector` on the live page.
pub fn toggle_on_page(selector: &str, class: &str) -> Option<bool> {
    let page = Page::current().ok()?;
    let sidebar = match page.query_one(selector) {
        Ok(found) => found,
        Err(err) => {
            logging::warn(&err.to_string());
            None
        }
    };
    let visible = toggle(sidebar.as_ref(), class);
    logging::debug(|| format!("sidebar toggled: {:?}", visible));
    visible
}
