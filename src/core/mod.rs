//! Navigation and overlay logic, free of DOM types.
//!
//! This module provides:
//! - [`VisibilityStore`] overlay state with scroll-lock bracketing
//! - [`DismissDetector`] outside-pointer and Escape dismissal
//! - [`RouteObserver`] sequence-checked navigation lifecycle
//! - [`PrefetchScheduler`] idle, deduplicated route prefetching
//! - [`VisitBeacon`] one-shot visit notification
//! - [`ScrollDirectionTracker`] hide-on-scroll bottom navigation

pub mod beacon;
pub mod dismiss;
pub mod error;
pub mod navigation;
pub mod prefetch;
pub mod scroll;
pub mod visibility;

pub use beacon::{BeaconTransport, VisitBeacon, VisitPayload};
pub use dismiss::{ArmChange, DismissDetector, Interaction, Region};
pub use navigation::{NavOutcome, NavPhase, RouteObserver, Viewport};
pub use prefetch::{IdleScheduler, PrefetchScheduler, Prefetcher};
pub use scroll::ScrollDirectionTracker;
pub use visibility::{ScrollLock, VisibilityStore};
