//! One-shot visit notification.
//!
//! The beacon is posted once per page load and never awaited. Whatever the
//! endpoint does with it (the site owner's email notifier) is invisible here.

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;

use crate::core::error::BeaconError;

/// Body of the visit notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitPayload {
    /// Landing path.
    pub path: String,
    /// IANA time zone of the visitor, e.g. `America/Edmonton`.
    pub tz: String,
    /// Preferred language, e.g. `en-CA`.
    pub lang: String,
}

/// Non-blocking transport. Must return without waiting for a response.
pub trait BeaconTransport {
    fn send(&self, endpoint: &str, body: String);
}

pub struct VisitBeacon {
    endpoint: String,
    transport: Rc<dyn BeaconTransport>,
    sent: Cell<bool>,
}

impl VisitBeacon {
    pub fn new(endpoint: impl Into<String>, transport: Rc<dyn BeaconTransport>) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            sent: Cell::new(false),
        }
    }

    /// Sends the payload unless this beacon already fired.
    ///
    /// Returns `Ok(true)` when a request was handed to the transport.
    pub fn emit(&self, payload: &VisitPayload) -> Result<bool, BeaconError> {
        if self.sent.get() {
            return Ok(false);
        }
        let body = serde_json::to_string(payload).map_err(|e| BeaconError::Encode(e.to_string()))?;
        self.sent.set(true);
        self.transport.send(&self.endpoint, body);
        log::debug!("visit beacon sent for {}", payload.path);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct Outbox {
        sent: RefCell<Vec<(String, String)>>,
    }

    impl BeaconTransport for Outbox {
        fn send(&self, endpoint: &str, body: String) {
            self.sent.borrow_mut().push((endpoint.to_string(), body));
        }
    }

    fn payload() -> VisitPayload {
        VisitPayload {
            path: "/projects".into(),
            tz: "America/Edmonton".into(),
            lang: "en-CA".into(),
        }
    }

    #[test]
    fn test_emits_once() {
        let outbox = Rc::new(Outbox::default());
        let beacon = VisitBeacon::new("/api/notify-visit", outbox.clone());

        assert_eq!(beacon.emit(&payload()), Ok(true));
        assert_eq!(beacon.emit(&payload()), Ok(false));
        assert_eq!(outbox.sent.borrow().len(), 1);
    }

    #[test]
    fn test_body_shape() {
        let outbox = Rc::new(Outbox::default());
        let beacon = VisitBeacon::new("/api/notify-visit", outbox.clone());
        beacon.emit(&payload()).unwrap();

        let sent = outbox.sent.borrow();
        let (endpoint, body) = &sent[0];
        assert_eq!(endpoint, "/api/notify-visit");
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "path": "/projects",
                "tz": "America/Edmonton",
                "lang": "en-CA",
            })
        );
    }
}
