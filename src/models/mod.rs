//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`OverlayId`] - Dismissible layers (mobile nav, contact sheet, loading bar)
//! - [`RoutePath`], [`RouteSet`] - Validated route paths and the known route list
//! - [`NavigationEvent`], [`NavSeq`] - Router lifecycle events
//! - [`Theme`] - Color theme selection

mod overlay;
mod route;
mod theme;

pub use overlay::OverlayId;
pub use route::{NavSeq, NavigationEvent, RoutePath, RouteSet};
pub use theme::Theme;
