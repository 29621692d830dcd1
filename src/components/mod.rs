//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point) and [`router::NavLink`]
//! - [`navbar`] - Top bar with theme switch and the mobile navigation panel
//! - [`contact`] - Contact trigger and sheet/modal
//! - [`loading`] - Route-change loading bar
//! - [`bottom_nav`] - Mobile bottom navigation
//! - [`footer`] - Copyright footer
//! - [`pages`] - Page bodies
//! - [`hooks`] - Outside-interaction dismissal
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod bottom_nav;
pub mod contact;
pub mod footer;
pub mod hooks;
pub mod icons;
pub mod loading;
pub mod navbar;
pub mod pages;
pub mod router;

pub use router::AppRouter;
