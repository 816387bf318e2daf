//! Navbar, mobile menu, and scroll-to-top state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset past which the navbar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD: f64 = 40.0;
/// Scroll offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 400.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub show_scroll_top: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Recompute scroll-derived flags for the window offset `scroll_y`.
    pub fn apply_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > NAV_SCROLL_THRESHOLD;
        self.show_scroll_top = scroll_y > SCROLL_TOP_THRESHOLD;
    }

    /// Flip the mobile menu and return the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Handle a click on the in-page link `href`.
    ///
    /// `scroll_to` receives the target selector and reports whether it found
    /// an element to scroll to. The menu collapses only when it did. Returns
    /// whether the click was handled.
    pub fn follow_anchor(&mut self, href: &str, scroll_to: impl FnOnce(&str) -> bool) -> bool {
        let Some(target) = anchor_target(href) else {
            return false;
        };
        if !scroll_to(target) {
            return false;
        }
        self.close_menu();
        true
    }

    pub fn menu_toggle_label(&self) -> &'static str {
        if self.menu_open { "Close menu" } else { "Open menu" }
    }
}

/// Selector for an in-page anchor `href`, or `None` for bare `#` and
/// non-fragment links.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') { Some(href) } else { None }
}
