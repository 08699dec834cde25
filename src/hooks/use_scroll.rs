use crate::model::SCROLL_SAMPLE_MS;
use crate::throttle::Throttle;
use crate::util;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::AddEventListenerOptions;
use yew::prelude::*;

/// Shared scroll signal: each caller gets its own throttled sample of the
/// window's vertical scroll offset. The signal stays at 0 when the user
/// prefers reduced motion, since no listener is ever attached.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with((), move |_| {
            let cleanup: Box<dyn FnOnce()> = if util::prefers_reduced_motion() {
                Box::new(|| ())
            } else {
                let window = web_sys::window().expect("no global `window` exists");

                // A page restored mid-scroll should not start from 0
                scroll_y.set(window.scroll_y().unwrap_or(0.0));

                let throttle = Rc::new(Throttle::new(SCROLL_SAMPLE_MS, {
                    let scroll_y = scroll_y.clone();
                    let window = window.clone();
                    move || {
                        scroll_y.set(window.scroll_y().unwrap_or(0.0));
                    }
                }));
                let scroll_cb = {
                    let throttle = throttle.clone();
                    Closure::wrap(Box::new(move || throttle.call()) as Box<dyn FnMut()>)
                };
                let opts = AddEventListenerOptions::new();
                opts.set_passive(true);
                window
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        scroll_cb.as_ref().unchecked_ref(),
                        &opts,
                    )
                    .unwrap();

                let window_cleanup = window.clone();
                Box::new(move || {
                    let _ = window_cleanup.remove_event_listener_with_callback(
                        "scroll",
                        scroll_cb.as_ref().unchecked_ref(),
                    );
                    // Dropping the throttle cancels any pending trailing run
                    drop(throttle);
                    drop(scroll_cb);
                })
            };
            move || cleanup()
        });
    }

    *scroll_y
}
