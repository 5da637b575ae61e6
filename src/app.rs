//! Wires the sidebar toggle and the scroll tracker onto an already rendered page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement};

use crate::config::NavConfig;
use crate::dom::{Page, Viewport};
use crate::error::{NavError, NavResult};
use crate::logging;
use crate::sidebar;
use crate::tracker::ScrollSpy;

type DomSpy = ScrollSpy<HtmlElement, Element>;

/// Listeners registered by one [`attach`]. Dropping the handle removes them
/// and cancels a pending throttled repaint.
pub struct NavHandle {
    _scroll: EventListener,
    _clicks: Vec<EventListener>,
    _throttled: Rc<RefCell<Option<Timeout>>>,
}

thread_local! {
    static CONFIG: RefCell<NavConfig> = RefCell::new(NavConfig::default());
    static ATTACHED: RefCell<Option<NavHandle>> = const { RefCell::new(None) };
}

/// Collects sections and nav icons once and starts tracking them.
pub fn attach(config: NavConfig) -> NavResult<NavHandle> {
    let page = Page::current()?;
    let sections = page.sections(&config.section_selector)?;
    let icons = page.query_all(&config.icon_selector)?;
    logging::debug(|| format!("tracking {} sections and {} nav icons", sections.len(), icons.len()));

    let throttle_ms = config.throttle_ms;
    let spy = Rc::new(RefCell::new(ScrollSpy::new(sections, icons.clone(), config)));

    // The fired timeout stays in the slot until the next one replaces it, so it
    // is never dropped from inside its own callback.
    let throttled: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let scroll = {
        let spy = spy.clone();
        let page = page.clone();
        let window = page.window().clone();
        let throttled = throttled.clone();
        let pending = Rc::new(Cell::new(false));
        EventListener::new(&window, "scroll", move |_| match throttle_ms {
            None => sync_to_scroll(&spy, &page),
            Some(ms) => {
                if pending.replace(true) {
                    return;
                }
                let spy = spy.clone();
                let page = page.clone();
                let pending = pending.clone();
                let timeout = Timeout::new(ms, move || {
                    pending.set(false);
                    sync_to_scroll(&spy, &page);
                });
                *throttled.borrow_mut() = Some(timeout);
            }
        })
    };

    let clicks = icons
        .iter()
        .enumerate()
        .map(|(index, icon)| {
            let spy = spy.clone();
            let page = page.clone();
            EventListener::new(icon, "click", move |event| {
                let Ok(spy) = spy.try_borrow() else {
                    return;
                };
                let click = spy.on_click(index, &page);
                if click.handled_in_page() {
                    event.prevent_default();
                }
                logging::debug(|| format!("nav icon {} clicked: {:?}", index, click));
            })
        })
        .collect();

    Ok(NavHandle {
        _scroll: scroll,
        _clicks: clicks,
        _throttled: throttled,
    })
}

fn sync_to_scroll(spy: &RefCell<DomSpy>, page: &Page) {
    // Scroll events never fire re-entrantly; a busy borrow just skips this frame.
    if let Ok(mut spy) = spy.try_borrow_mut() {
        let scroll_y = page.scroll_y();
        let current = spy.on_scroll(scroll_y);
        logging::debug(|| format!("scrollY={} current={:?}", scroll_y, current));
    }
}

/// Attaches with `config`, replacing whatever an earlier call attached.
/// On failure the earlier attach and config stay in effect.
pub fn install(config: NavConfig) -> NavResult<()> {
    let handle = attach(config.clone())?;
    logging::set_debug(config.debug_logs);
    CONFIG.with(|slot| *slot.borrow_mut() = config);
    ATTACHED.with(|slot| slot.replace(Some(handle)));
    Ok(())
}

/// Removes the listeners of the current attach, if any.
pub fn detach() {
    ATTACHED.with(|slot| slot.borrow_mut().take());
}

/// Runs [`install`] once the document has finished parsing.
pub fn on_page_ready(config: NavConfig) -> NavResult<()> {
    let page = Page::current()?;
    if page.is_loading() {
        EventListener::once(page.document(), "DOMContentLoaded", move |_| {
            if let Err(err) = install(config) {
                logging::warn(&format!("navigation not attached: {}", err));
            }
        })
        .forget();
        Ok(())
    } else {
        install(config)
    }
}

/// Toggles the sidebar named by the installed config.
pub fn toggle_sidebar() -> Option<bool> {
    let (selector, class) = CONFIG.with(|slot| {
        let config = slot.borrow();
        (config.sidebar_selector.clone(), config.active_class.clone())
    });
    sidebar::toggle_on_page(&selector, &class)
}

/// Exposes `window.toggleSidebar` for inline `onclick` handlers in the page markup.
pub fn install_global_toggle() -> NavResult<()> {
    let page = Page::current()?;
    let closure = Closure::wrap(Box::new(move || {
        toggle_sidebar();
    }) as Box<dyn Fn()>);

    js_sys::Reflect::set(
        page.window(),
        &JsValue::from_str("toggleSidebar"),
        closure.as_ref(),
    )
    .map_err(|e| NavError::Global {
        name: "toggleSidebar".to_string(),
        message: format!("{:?}", e),
    })?;

    // Lives as long as the page.
    closure.forget();
    Ok(())
}
