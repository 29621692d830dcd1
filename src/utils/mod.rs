//! Browser bindings for the navigation core.
//!
//! Provides:
//! - [`BodyScrollLock`], [`WindowViewport`] - Scroll lock and viewport over `window`
//! - [`EventListenerHandle`] - Listener that detaches on drop
//! - [`IdleCallbackScheduler`] - `requestIdleCallback` deferral
//! - [`LinkPrefetcher`], [`descriptor_from_js`] - `<link rel="prefetch">` primitive and descriptor intake
//! - [`FetchBeacon`], [`visit_payload`] - Visit notification transport
//! - [`logger`] - Console backend for `log`

pub mod dom;
mod fetch;
mod idle;
mod listener;
pub mod logger;
mod prefetch;

pub use dom::{BodyScrollLock, WindowViewport};
pub use fetch::{FetchBeacon, visit_payload};
pub use idle::IdleCallbackScheduler;
pub use listener::EventListenerHandle;
pub use prefetch::{LinkPrefetcher, descriptor_from_js};
