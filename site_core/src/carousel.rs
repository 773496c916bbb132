//! Testimonial carousel.
//!
//! The carousel owns the active index and mirrors it onto two marker sets,
//! the cards and the selector dots. Both sets always agree on which entry
//! is active.

use crate::error::{Result, SiteError};

/// Page visibility as reported by the host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Active-index controller over `len` testimonials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    cards: Vec<bool>,
    dots: Vec<bool>,
}

impl Carousel {
    /// Build a carousel with the first entry active.
    ///
    /// Returns `None` for an empty set: no testimonials means nothing to wire.
    pub fn new(len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        let mut carousel = Self {
            current: 0,
            cards: vec![false; len],
            dots: vec![false; len],
        };
        carousel.mark(0);
        Some(carousel)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false; an empty carousel is never constructed.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_card_active(&self, index: usize) -> bool {
        self.cards.get(index).copied().unwrap_or(false)
    }

    pub fn is_dot_active(&self, index: usize) -> bool {
        self.dots.get(index).copied().unwrap_or(false)
    }

    /// Card marker states in document order.
    pub fn cards(&self) -> &[bool] {
        &self.cards
    }

    /// Dot marker states in document order.
    pub fn dots(&self) -> &[bool] {
        &self.dots
    }

    /// Make `index` the active testimonial.
    pub fn show(&mut self, index: usize) -> Result<()> {
        if index >= self.len() {
            return Err(SiteError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        self.mark(index);
        Ok(())
    }

    pub fn next(&mut self) {
        let len = self.len();
        self.mark((self.current + 1) % len);
    }

    pub fn prev(&mut self) {
        let len = self.len();
        self.mark((self.current + len - 1) % len);
    }

    /// A dot was selected directly.
    pub fn goto_indicator(&mut self, index: usize) -> Result<()> {
        self.show(index)
    }

    /// Auto-advance tick. Hidden pages skip the tick; missed ticks are not
    /// replayed when the page becomes visible again.
    ///
    /// Returns whether the carousel moved.
    pub fn tick(&mut self, visibility: Visibility) -> bool {
        match visibility {
            Visibility::Visible => {
                self.next();
                true
            }
            Visibility::Hidden => false,
        }
    }

    fn mark(&mut self, index: usize) {
        self.cards.iter_mut().for_each(|c| *c = false);
        self.dots.iter_mut().for_each(|d| *d = false);
        self.cards[index] = true;
        self.dots[index] = true;
        self.current = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn active(markers: &[bool]) -> Vec<usize> {
        markers
            .iter()
            .enumerate()
            .filter_map(|(i, on)| on.then_some(i))
            .collect()
    }

    #[test]
    fn empty_set_is_not_wired() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn starts_on_first_entry() {
        let c = Carousel::new(3).expect("carousel");
        assert_eq!(c.current(), 0);
        assert_eq!(active(c.cards()), vec![0]);
        assert_eq!(active(c.dots()), vec![0]);
    }

    #[test]
    fn show_marks_exactly_one_card_and_dot() {
        let mut c = Carousel::new(5).expect("carousel");
        for i in 0..5 {
            c.show(i).expect("in range");
            assert_eq!(c.current(), i);
            assert_eq!(active(c.cards()), vec![i]);
            assert_eq!(active(c.dots()), vec![i]);
        }
    }

    #[test]
    fn show_out_of_range_leaves_state() {
        let mut c = Carousel::new(3).expect("carousel");
        c.show(1).expect("in range");
        let before = c.clone();
        assert_eq!(
            c.show(3),
            Err(SiteError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(c, before);
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut c = Carousel::new(4).expect("carousel");
        c.prev();
        assert_eq!(c.current(), 3);
        c.next();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn next_then_prev_is_identity() {
        for len in 1..6 {
            let mut c = Carousel::new(len).expect("carousel");
            for start in 0..len {
                c.show(start).expect("in range");
                c.next();
                c.prev();
                assert_eq!(c.current(), start);
            }
        }
    }

    #[test]
    fn single_entry_stays_put() {
        let mut c = Carousel::new(1).expect("carousel");
        c.next();
        assert_eq!(c.current(), 0);
        c.prev();
        assert_eq!(c.current(), 0);
        assert_eq!(active(c.cards()), vec![0]);
    }

    #[test]
    fn visible_ticks_advance_hidden_ticks_skip() {
        let mut c = Carousel::new(5).expect("carousel");
        for _ in 0..3 {
            assert!(c.tick(Visibility::Visible));
        }
        assert_eq!(c.current(), 3);

        assert!(!c.tick(Visibility::Hidden));
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn goto_indicator_matches_show() {
        let mut a = Carousel::new(4).expect("carousel");
        let mut b = a.clone();
        a.goto_indicator(2).expect("in range");
        b.show(2).expect("in range");
        assert_eq!(a, b);
        assert!(a.is_card_active(2));
        assert!(a.is_dot_active(2));
        assert!(!a.is_card_active(7));
    }
}
