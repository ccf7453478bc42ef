//! Client-side file download.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::error::DownloadError;

/// Somewhere a generated file can be handed to the user.
pub trait DownloadSink {
    fn save(&self, filename: &str, mime: &str, contents: &str) -> Result<(), DownloadError>;
}

/// Saves through a transient `<a download>` pointing at an object URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDownload;

impl DownloadSink for BrowserDownload {
    fn save(&self, filename: &str, mime: &str, contents: &str) -> Result<(), DownloadError> {
        let js_err = |e: wasm_bindgen::JsValue| DownloadError(format!("{:?}", e));

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| DownloadError("No document available".to_string()))?;

        let options = BlobPropertyBag::new();
        options.set_type(mime);
        let parts = js_sys::Array::of1(&contents.into());
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;

        let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;
        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| DownloadError("Element is not an anchor".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        Url::revoke_object_url(&url).map_err(js_err)
    }
}
