//! Sticky header state.

/// Scroll offset in pixels past which the header switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll styling and mobile menu toggle for the page header.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeaderState {
    scrolled: bool,
    menu_open: bool,
}

impl HeaderState {
    /// Create a header at the top of the page with the menu closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scrolled: false,
            menu_open: false,
        }
    }

    /// Whether the page is scrolled past [`SCROLL_THRESHOLD`].
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Whether the mobile menu is open.
    #[must_use]
    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Record the vertical scroll offset.
    pub fn on_scroll(&mut self, offset_y: f64) {
        self.scrolled = offset_y > SCROLL_THRESHOLD;
    }

    /// Open or close the mobile menu.
    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Follow a navigation link, closing the mobile menu.
    pub const fn navigate(&mut self) {
        self.menu_open = false;
    }
}
