//! Overlay identifiers.

/// Dismissible layers shown above the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayId {
    /// Slide-in navigation panel on narrow viewports.
    MobileNav,
    /// Contact modal (desktop) or bottom sheet (mobile).
    ContactSheet,
    /// Thin progress bar shown while a navigation is in flight.
    LoadingIndicator,
}

impl OverlayId {
    /// All overlays, in a fixed order.
    pub const ALL: [OverlayId; 3] = [Self::MobileNav, Self::ContactSheet, Self::LoadingIndicator];

    /// Whether the page behind must stop scrolling while this overlay is open.
    pub fn locks_scroll(self) -> bool {
        matches!(self, Self::MobileNav | Self::ContactSheet)
    }

    /// Whether pointer-down outside or Escape dismisses this overlay.
    pub fn dismiss_on_outside(self) -> bool {
        matches!(self, Self::MobileNav | Self::ContactSheet)
    }

    /// Whether a completed navigation should close this overlay.
    pub fn closes_on_navigation(self) -> bool {
        matches!(self, Self::MobileNav)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::MobileNav => 0,
            Self::ContactSheet => 1,
            Self::LoadingIndicator => 2,
        }
    }
}
