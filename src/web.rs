//! Browser implementation of the download host, backed by `web-sys`.
//!
//! Mirrors the classic DOM download idiom: build a `Blob`, take an object
//! URL, synthesize a hidden anchor with a `download` attribute, append it to
//! `document.body`, click it, remove it, revoke the URL.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::host::DownloadHost;

/// Download host for browser environments.
///
/// The capability probe checks that a window, document, and `document.body`
/// are all reachable; outside a browsing context (workers, SSR prerender)
/// the probe fails and the trigger declines without touching the DOM.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl DownloadHost for BrowserHost {
    fn is_available(&self) -> bool {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .is_some()
    }

    fn create_resource(&mut self, content: &str, mime_type: &str) -> Option<String> {
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = Blob::new_with_str_sequence_and_options(&JsValue::from(parts), &options).ok()?;
        Url::create_object_url_with_blob(&blob).ok()
    }

    fn revoke_resource(&mut self, url: &str) {
        let _ = Url::revoke_object_url(url);
    }

    fn activate_anchor(&mut self, url: &str, file_name: &str) {
        // Probed by is_available; bail quietly if the DOM vanished since.
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };
        let Some(body) = document.body() else {
            return;
        };
        let Ok(anchor) = document
            .create_element("a")
            .map(|element| element.unchecked_into::<HtmlAnchorElement>())
        else {
            return;
        };

        anchor.set_href(url);
        anchor.set_download(file_name);
        let _ = anchor.style().set_property("display", "none");

        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
}
