//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling,
//! plus the browser implementations of the scroll lock and viewport seams.

use std::cell::Cell;

use web_sys::{Document, HtmlElement, Storage, Window};

use crate::core::{ScrollLock, Viewport};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get the document body.
#[inline]
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Add or remove a class on the root `<html>` element.
pub fn set_root_class(class: &str, on: bool) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.class_list().toggle_with_force(class, on);
    }
}

/// Current vertical scroll offset in CSS pixels.
pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or_default()
}

// =============================================================================
// Scroll lock
// =============================================================================

/// Disables page scrolling by setting `overflow: hidden` on `<body>`.
///
/// Nested locks are counted; scrolling is restored when the last one is
/// released.
#[derive(Debug, Default)]
pub struct BodyScrollLock {
    depth: Cell<u32>,
}

impl BodyScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> u32 {
        self.depth.get()
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        let depth = self.depth.get() + 1;
        self.depth.set(depth);
        if depth == 1
            && let Some(body) = body()
        {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }

    fn unlock(&self) {
        let depth = self.depth.get().saturating_sub(1);
        self.depth.set(depth);
        if depth == 0
            && let Some(body) = body()
        {
            let _ = body.style().remove_property("overflow");
        }
    }
}

// =============================================================================
// Viewport
// =============================================================================

/// The browser window as a [`Viewport`].
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_to_top(&self) {
        if let Some(window) = window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
