//! Browser prefetch primitive.

use js_sys::JSON;
use wasm_bindgen::JsValue;

use super::dom;
use crate::core::Prefetcher;
use crate::core::error::PrefetchError;

/// Prefetches by appending `<link rel="prefetch" href=...>` to `<head>`.
///
/// An existing link for the same href is left alone.
///
/// The site is a single-page build served from one `index.html`, so a
/// route href only warms the shared shell and its assets. Standalone files
/// such as the resume PDF are fetched in full.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkPrefetcher;

impl Prefetcher for LinkPrefetcher {
    fn prefetch(&self, path: &str) -> Result<(), PrefetchError> {
        let failed = |reason: &str| PrefetchError::Failed {
            path: path.to_string(),
            reason: reason.to_string(),
        };
        let document = dom::document().ok_or(PrefetchError::NoDocument)?;
        let head = document.head().ok_or(PrefetchError::NoDocument)?;

        let selector = format!(r#"link[rel="prefetch"][href="{}"]"#, path);
        if let Ok(Some(_)) = head.query_selector(&selector) {
            return Ok(());
        }

        let link = document
            .create_element("link")
            .map_err(|_| failed("cannot create link element"))?;
        link.set_attribute("rel", "prefetch")
            .and_then(|_| link.set_attribute("href", path))
            .map_err(|_| failed("cannot set link attributes"))?;
        if path.ends_with(".pdf") {
            let _ = link.set_attribute("as", "document");
        }
        head.append_child(&link)
            .map_err(|_| failed("cannot append link"))?;
        Ok(())
    }
}

/// Converts a JS route descriptor into JSON for validation.
///
/// Strings pass through as-is. Other values go through `JSON.stringify`, so
/// an options object reaches the route guard as an object and is rejected
/// there; values with no JSON form become `null`.
pub fn descriptor_from_js(value: &JsValue) -> serde_json::Value {
    if let Some(path) = value.as_string() {
        return serde_json::Value::String(path);
    }
    JSON::stringify(value)
        .ok()
        .and_then(|json| json.as_string())
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}
