use gloo::events::EventListener;
use yew::prelude::*;

use crate::config::NavConfig;
use crate::dom::{Page, Viewport};
use crate::tracker::{resolve_section, CurrentSection};

/// Id of the section in view, updated on window scroll.
///
/// Sections are looked up on every event, so sections rendered after mount are
/// picked up. Between bands the previous id is kept. Setting the handle marks a
/// section active until the next scroll event.
#[hook]
pub fn use_active_section(config: NavConfig) -> UseStateHandle<Option<String>> {
    let active = use_state_eq(|| None::<String>);
    let current = use_mut_ref(CurrentSection::default);

    {
        let active = active.clone();
        use_effect_with(config, move |config| {
            let config = config.clone();
            let listener = Page::current().ok().map(|page| {
                let window = page.window().clone();
                EventListener::new(&window, "scroll", move |_| {
                    let Ok(sections) = page.sections(&config.section_selector) else {
                        return;
                    };
                    let resolution = resolve_section(&sections, page.scroll_y(), config.scroll_offset);
                    let mut current = current.borrow_mut();
                    current.apply(resolution, &config.home_id);
                    active.set(current.get().map(str::to_string));
                })
            });

            move || drop(listener)
        });
    }

    active
}
