//! Header backdrop that firms up once the page scrolls.

/// Which look the header currently has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    #[default]
    Resting,
    Scrolled,
}

impl HeaderState {
    /// Scrolled strictly past `threshold` switches the look.
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            Self::Scrolled
        } else {
            Self::Resting
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Resting => "var(--white)",
            Self::Scrolled => "rgba(255, 255, 255, 0.95)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Resting => "var(--shadow-sm)",
            Self::Scrolled => "var(--shadow-md)",
        }
    }
}
