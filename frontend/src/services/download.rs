//! Hands a generated file to the browser as a download.

use common::submission::DownloadFile;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Milliseconds the object URL outlives the click. Some browsers start
/// fetching it asynchronously and abort if it is revoked at once.
const REVOKE_AFTER_MS: u32 = 1000;

/// Wraps `file` in a `Blob`, points a temporary `<a download>` at its object
/// URL and clicks it. The object URL is revoked after `REVOKE_AFTER_MS`.
pub fn trigger_download(file: &DownloadFile) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&file.contents));
    let options = BlobPropertyBag::new();
    options.set_type(file.mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(&file.filename);
    anchor.click();

    Timeout::new(REVOKE_AFTER_MS, move || {
        Url::revoke_object_url(&url).ok();
    })
    .forget();
    Ok(())
}
