//! Console output. `debug` is silent unless the active config enables it.

use std::cell::Cell;

thread_local! {
    static DEBUG_ENABLED: Cell<bool> = const { Cell::new(false) };
}

pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.with(|flag| flag.set(enabled));
}

pub fn info(message: &str) {
    web_sys::console::log_1(&message.into());
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

pub fn debug(message: impl FnOnce() -> String) {
    if DEBUG_ENABLED.with(Cell::get) {
        web_sys::console::debug_1(&message().into());
    }
}
