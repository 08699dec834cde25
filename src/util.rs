// Utility helpers shared across hooks and components

use once_cell::sync::OnceCell;
use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Whether the user has asked the OS to suppress animation effects.
/// The media query is read once and cached for the lifetime of the page;
/// a missing window or matchMedia counts as "motion allowed".
pub fn prefers_reduced_motion() -> bool {
    static REDUCED: OnceCell<bool> = OnceCell::new();
    *REDUCED.get_or_init(|| {
        let reduced = web_sys::window()
            .and_then(|win| win.match_media("(prefers-reduced-motion: reduce)").ok())
            .flatten()
            .map(|query| query.matches())
            .unwrap_or(false);
        if reduced {
            clog("reduced motion preference active; parallax disabled");
        }
        reduced
    })
}
