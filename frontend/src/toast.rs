//! Transient notifications at the bottom of the screen.
//!
//! Used for every non-fatal notice: validation refusals, storage problems,
//! record-service failures and confirmations.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Milliseconds a toast stays on screen.
const TOAST_MS: u32 = 3000;

/// Displays `message` in a toast that removes itself after `TOAST_MS`.
///
/// The text is set with `set_text_content`, so messages that echo user
/// input (campaign names, tags) are never interpreted as HTML.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        toast.set_class_name("toast");
        let html_toast: HtmlElement = toast.unchecked_into();
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "10px 20px").ok();
        style.set_property("border-radius", "4px").ok();
        style.set_property("z-index", "10000").ok();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}
