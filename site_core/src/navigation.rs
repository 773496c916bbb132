//! Mobile menu and section scrolling.

/// Open/closed state of the collapsible mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileNav {
    open: bool,
}

/// How the menu state shows up on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPresentation {
    /// `data-visible` on the primary nav.
    pub data_visible: bool,
    /// `aria-expanded` on the toggle button.
    pub aria_expanded: bool,
    pub show_bars_icon: bool,
    pub show_close_icon: bool,
    /// Body scrolling is locked while the menu covers the page.
    pub lock_body_scroll: bool,
}

impl MobileNav {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Returns whether the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn presentation(&self) -> MenuPresentation {
        MenuPresentation {
            data_visible: self.open,
            aria_expanded: self.open,
            show_bars_icon: !self.open,
            show_close_icon: self.open,
            lock_body_scroll: self.open,
        }
    }
}

/// Scroll offset that puts a section's top edge just below the fixed header.
pub fn scroll_target(section_top: f64, header_height: f64) -> f64 {
    section_top - header_height
}
