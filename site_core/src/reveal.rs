//! Reveal-on-scroll bookkeeping.
//!
//! Each observed element fades in once, the first time it enters the
//! viewport. The tracker only remembers which elements already fired; the
//! observer itself lives in the browser.

use std::time::Duration;

use crate::config::RevealConfig;

/// Inline style values applied around a reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealMotion {
    pub offset_px: f64,
    pub delay: Duration,
}

impl RevealMotion {
    pub fn from_config(config: &RevealConfig) -> Self {
        Self {
            offset_px: config.offset_px,
            delay: config.delay(),
        }
    }

    /// Opacity before the element enters the viewport.
    pub const HIDDEN_OPACITY: &'static str = "0";
    pub const VISIBLE_OPACITY: &'static str = "1";
    pub const TRANSITION: &'static str = "opacity 0.5s ease, transform 0.5s ease";
    pub const SETTLED_TRANSFORM: &'static str = "translateY(0)";

    /// Transform applied at the moment of intersection.
    pub fn start_transform(&self) -> String {
        format!("translateY({}px)", self.offset_px)
    }
}

impl Default for RevealMotion {
    fn default() -> Self {
        Self::from_config(&RevealConfig::default())
    }
}

/// Which observed elements have already been revealed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RevealTracker {
    fired: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            fired: vec![false; count],
        }
    }

    pub fn len(&self) -> usize {
        self.fired.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fired.is_empty()
    }

    /// Record an intersection. True only the first time for each element;
    /// unknown indices never fire.
    pub fn intersect(&mut self, index: usize) -> bool {
        match self.fired.get_mut(index) {
            Some(fired) if !*fired => {
                *fired = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.fired.get(index).copied().unwrap_or(false)
    }

    /// Start tracking elements mounted after the page was built.
    pub fn resize(&mut self, count: usize) {
        self.fired.resize(count, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_element() {
        let mut t = RevealTracker::new(3);
        assert!(t.intersect(1));
        assert!(!t.intersect(1));
        assert!(t.is_revealed(1));
        assert!(!t.is_revealed(0));
        assert!(t.intersect(0));
    }

    #[test]
    fn unknown_index_never_fires() {
        let mut t = RevealTracker::new(2);
        assert!(!t.intersect(5));
        t.resize(6);
        assert!(t.intersect(5));
    }

    #[test]
    fn default_motion() {
        let m = RevealMotion::default();
        assert_eq!(m.start_transform(), "translateY(20px)");
        assert_eq!(m.delay, Duration::from_millis(100));
    }
}
