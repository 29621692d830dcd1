//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use log::LevelFilter;

// =============================================================================
// Application Metadata
// =============================================================================

/// Site owner shown in the navigation bar and page titles.
pub const APP_NAME: &str = "Muhammad Zain";

/// Short tagline under the name on the home page.
pub const APP_TAGLINE: &str = "Software Engineer";

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Warn
};

// =============================================================================
// Routes
// =============================================================================

/// Known routes and navigation labels.
pub mod routes {
    /// Route paths in navigation order. The first entry is the landing page.
    pub const KNOWN: &[&str] = &["/", "/about", "/projects", "/resume", "/leetcode"];

    /// Navigation labels, index-aligned with [`KNOWN`].
    pub const LABELS: &[&str] = &["Home", "About", "Projects", "Resume", "LeetCode"];

    /// Resume document preloaded when the Resume link is hovered.
    pub const RESUME_PDF: &str = "/Muhammad-Zain-Resume.pdf";
}

// =============================================================================
// Visit Beacon
// =============================================================================

/// Visit notification endpoint.
pub mod beacon {
    /// Serverless endpoint receiving the one-shot visit notification.
    pub const ENDPOINT: &str = "/api/notify-visit";
}

// =============================================================================
// Contact
// =============================================================================

/// Contact details listed in the contact sheet.
pub mod contact {
    pub const EMAIL: &str = "muhammad.zain1@ucalgary.ca";
    pub const LINKEDIN: &str = "https://www.linkedin.com/in/muhammad-zain03/";
    pub const GITHUB: &str = "https://github.com/muhammadzain03";
}

// =============================================================================
// Layout
// =============================================================================

/// Responsive layout thresholds.
pub mod layout {
    /// Viewports narrower than this use the mobile nav panel and bottom sheet.
    pub const MOBILE_QUERY: &str = "(max-width: 767px)";

    /// Scroll offset (px) past which scrolling down hides the bottom navigation.
    pub const BOTTOM_NAV_HIDE_OFFSET: f64 = 100.0;
}

// =============================================================================
// Theme
// =============================================================================

/// Theme configuration.
pub mod theme {
    /// Media query used to resolve the `System` theme.
    pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

    /// Class toggled on `<html>` when the dark theme is active.
    pub const DARK_CLASS: &str = "dark";
}

// =============================================================================
// Storage
// =============================================================================

/// Browser storage keys.
pub mod storage {
    /// localStorage key for the persisted theme choice.
    pub const THEME_KEY: &str = "theme";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
