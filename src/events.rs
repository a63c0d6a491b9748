use serde::Serialize;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{window, CustomEvent, CustomEventInit};

pub const COMMAND_EXECUTE: &str = "command:execute";
pub const TURTLE_DRAW: &str = "turtle:draw";
pub const RESET: &str = "reset";

// page can register window.__turtleCallback(type, detail) instead of listening for DOM events
const CALLBACK_PROP: &str = "__turtleCallback";

/// Tells the page something happened in the console.
///
/// Uses the registered callback when there is one, else dispatches a
/// bubbling `CustomEvent` on `window` with `detail` attached.
pub fn emit_console_event<T: Serialize + ?Sized>(event_type: &str, detail: &T) {
    let Some(win) = window() else {
        warn!(event_type, "no window object, event dropped");
        return;
    };

    let detail_js = crate::to_js(detail);

    if let Ok(callback) = js_sys::Reflect::get(win.as_ref(), &CALLBACK_PROP.into()) {
        if let Ok(callback) = callback.dyn_into::<js_sys::Function>() {
            match callback.call2(&JsValue::NULL, &event_type.into(), &detail_js) {
                Ok(_) => {
                    debug!(event_type, "delivered through callback");
                    return;
                }
                Err(e) => warn!(event_type, error = ?e, "callback failed, falling back to DOM event"),
            }
        }
    }

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_detail(&detail_js);

    match CustomEvent::new_with_event_init_dict(event_type, &init) {
        Ok(event) => {
            if let Err(e) = win.dispatch_event(&event) {
                warn!(event_type, error = ?e, "window dispatch failed");
            } else {
                debug!(event_type, "dispatched on window");
            }
        }
        Err(e) => warn!(event_type, error = ?e, "could not create event"),
    }
}
