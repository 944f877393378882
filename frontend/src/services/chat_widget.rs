//! DOM loader for the third-party chat widget.

use common::ports::WidgetLoader;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use super::config::{CHAT_WIDGET_ELEMENT_ID, CHAT_WIDGET_URL};

/// Injects the chat `<script>` into `<head>`, tagged with
/// `CHAT_WIDGET_ELEMENT_ID` so later calls can see it is already there.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomWidgetLoader;

impl WidgetLoader for DomWidgetLoader {
    fn is_loaded(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CHAT_WIDGET_ELEMENT_ID))
            .is_some()
    }

    fn load(&self) -> bool {
        let Some(src) = CHAT_WIDGET_URL else {
            warn!("CHAT_WIDGET_URL not set at build time, chat disabled");
            return false;
        };
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Some(head) = document.head() else {
            return false;
        };
        let script = match document
            .create_element("script")
            .ok()
            .and_then(|e| e.dyn_into::<HtmlScriptElement>().ok())
        {
            Some(script) => script,
            None => return false,
        };
        script.set_id(CHAT_WIDGET_ELEMENT_ID);
        script.set_src(src);
        script.set_async(true);
        head.append_child(&script).is_ok()
    }
}
