//! Hide-on-scroll tracking for the bottom navigation bar.

/// Shows the bar on upward scrolls and near the top, hides it when scrolling
/// down past a threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollDirectionTracker {
    last_y: f64,
    visible: bool,
    hide_offset: f64,
}

impl ScrollDirectionTracker {
    pub fn new(hide_offset: f64) -> Self {
        Self {
            last_y: 0.0,
            visible: true,
            hide_offset,
        }
    }

    /// Feeds a new scroll position. Returns the resulting visibility.
    pub fn update(&mut self, y: f64) -> bool {
        self.visible = !(y > self.last_y && y > self.hide_offset);
        self.last_y = y;
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_until_threshold() {
        let mut t = ScrollDirectionTracker::new(100.0);
        assert!(t.is_visible());
        assert!(t.update(50.0));
        assert!(t.update(100.0));
        assert!(!t.update(101.0));
    }

    #[test]
    fn test_scroll_up_shows() {
        let mut t = ScrollDirectionTracker::new(100.0);
        t.update(400.0);
        assert!(!t.is_visible());
        assert!(t.update(390.0));
        assert!(!t.update(395.0));
    }

    #[test]
    fn test_unchanged_position_shows() {
        let mut t = ScrollDirectionTracker::new(100.0);
        t.update(500.0);
        assert!(t.update(500.0));
    }
}
