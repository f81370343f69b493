//! Blob object URLs that are revoked when dropped.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

/// Owns a `blob:` URL. Dropping it revokes the URL.
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectUrl(String);

impl ObjectUrl {
    fn from_parts(parts: &Array, mime: &str) -> Option<Self> {
        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(parts, &opts).ok()?;
        Url::create_object_url_with_blob(&blob).ok().map(Self)
    }

    pub fn from_bytes(bytes: &[u8], mime: &str) -> Option<Self> {
        let array = Uint8Array::from(bytes);
        Self::from_parts(&Array::of1(&array), mime)
    }

    pub fn from_text(text: &str, mime: &str) -> Option<Self> {
        Self::from_parts(&Array::of1(&JsValue::from_str(text)), mime)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_drop_revokes_url() {
        let url = ObjectUrl::from_text("hello", "text/plain").unwrap();
        let href = url.as_str().to_string();
        assert!(href.starts_with("blob:"));

        let window = web_sys::window().unwrap();
        assert!(JsFuture::from(window.fetch_with_str(&href)).await.is_ok());
        drop(url);
        assert!(JsFuture::from(window.fetch_with_str(&href)).await.is_err());
    }

    #[wasm_bindgen_test]
    fn test_bytes_url_is_distinct() {
        let first = ObjectUrl::from_bytes(b"%PDF-1.4", "application/pdf").unwrap();
        let second = ObjectUrl::from_bytes(b"%PDF-1.4", "application/pdf").unwrap();
        assert_ne!(first.as_str(), second.as_str());
    }
}
