//! Network utilities for the visit beacon.

use gloo_net::http::Request;
use js_sys::{Array, Intl, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use super::dom;
use crate::core::error::BeaconError;
use crate::core::{BeaconTransport, VisitPayload};

/// Fire-and-forget JSON POST through the Fetch API.
#[derive(Debug, Default, Clone, Copy)]
pub struct FetchBeacon;

impl BeaconTransport for FetchBeacon {
    fn send(&self, endpoint: &str, body: String) {
        let endpoint = endpoint.to_string();
        spawn_local(async move {
            if let Err(e) = post_json(&endpoint, body).await {
                log::debug!("{}", e);
            }
        });
    }
}

async fn post_json(endpoint: &str, body: String) -> Result<(), BeaconError> {
    Request::post(endpoint)
        .header("Content-Type", "application/json")
        .body(body)
        .map_err(|e| BeaconError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| BeaconError::Network(e.to_string()))?;
    Ok(())
}

/// Collects the visit payload for `path` from the browser environment.
pub fn visit_payload(path: &str) -> VisitPayload {
    VisitPayload {
        path: path.to_string(),
        tz: time_zone().unwrap_or_default(),
        lang: dom::window()
            .and_then(|w| w.navigator().language())
            .unwrap_or_default(),
    }
}

/// `Intl.DateTimeFormat().resolvedOptions().timeZone`
fn time_zone() -> Option<String> {
    let format = Intl::DateTimeFormat::new(&Array::new(), &Object::new());
    Reflect::get(&format.resolved_options(), &JsValue::from_str("timeZone"))
        .ok()?
        .as_string()
}
