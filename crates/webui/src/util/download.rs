//! Offers an in-memory binary payload as a browser download.

use gloo::file::{Blob, ObjectUrl};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// Synthesizes a transient anchor pointing at an object URL for `bytes`,
/// clicks it, then removes the node. The object URL is revoked when the
/// [`ObjectUrl`] guard drops, so no reference outlives this call.
pub fn save_bytes(bytes: &[u8], file_name: &str) -> Result<(), JsValue> {
    let blob = Blob::new(bytes);
    let url = ObjectUrl::from(blob);

    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
