//! Category carousel position.
//!
//! Cards per view is fixed from the viewport width when the page loads and
//! does not follow later resizes.

/// Category cards in the carousel.
pub const TOTAL_CARDS: usize = 10;
/// Card width in pixels.
pub const CARD_WIDTH_PX: i64 = 280;
/// Gap between cards in pixels.
pub const CARD_GAP_PX: i64 = 32;

/// Cards visible at once for a viewport width.
#[must_use]
pub const fn cards_per_view(viewport_width: u32) -> usize {
    if viewport_width <= 768 {
        1
    } else if viewport_width <= 1024 {
        2
    } else {
        4
    }
}

/// Slide index over the category cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    per_view: usize,
    max_slide: usize,
}

impl Carousel {
    /// Carousel over [`TOTAL_CARDS`] cards for a viewport width.
    #[must_use]
    pub fn new(viewport_width: u32) -> Self {
        Self::with_cards(TOTAL_CARDS, cards_per_view(viewport_width))
    }

    /// Carousel over `total` cards showing `per_view` at a time.
    #[must_use]
    pub fn with_cards(total: usize, per_view: usize) -> Self {
        let per_view = per_view.max(1);
        Self {
            current: 0,
            per_view,
            max_slide: total.div_ceil(per_view).saturating_sub(1),
        }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn per_view(&self) -> usize {
        self.per_view
    }

    /// Number of slides (and dots).
    #[must_use]
    pub const fn slide_count(&self) -> usize {
        self.max_slide + 1
    }

    /// Advance one slide, wrapping from the last to the first.
    pub fn next(&mut self) {
        self.current = if self.current >= self.max_slide {
            0
        } else {
            self.current + 1
        };
    }

    /// Go back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        self.current = if self.current == 0 {
            self.max_slide
        } else {
            self.current - 1
        };
    }

    /// Jump to a slide (clamped to the last one).
    pub fn go_to(&mut self, index: usize) {
        self.current = index.min(self.max_slide);
    }

    /// Horizontal translation of the card track in pixels.
    #[must_use]
    pub fn offset_px(&self) -> i64 {
        let slide = i64::try_from(self.current).unwrap_or(i64::MAX);
        let per_view = i64::try_from(self.per_view).unwrap_or(i64::MAX);
        -slide.saturating_mul(CARD_WIDTH_PX + CARD_GAP_PX).saturating_mul(per_view)
    }

    /// Active flag per dot.
    #[must_use]
    pub fn dots(&self) -> Vec<bool> {
        (0..self.slide_count())
            .map(|index| index == self.current)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_per_view_breakpoints() {
        assert_eq!(cards_per_view(375), 1);
        assert_eq!(cards_per_view(768), 1);
        assert_eq!(cards_per_view(769), 2);
        assert_eq!(cards_per_view(1024), 2);
        assert_eq!(cards_per_view(1440), 4);
    }

    #[test]
    fn test_slide_count() {
        assert_eq!(Carousel::new(1440).slide_count(), 3);
        assert_eq!(Carousel::new(900).slide_count(), 5);
        assert_eq!(Carousel::new(400).slide_count(), 10);
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut carousel = Carousel::new(1440);
        carousel.previous();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_go_to_and_offset() {
        let mut carousel = Carousel::new(1440);
        carousel.go_to(1);
        assert_eq!(carousel.offset_px(), -1248);
        assert_eq!(carousel.dots(), vec![false, true, false]);

        carousel.go_to(40);
        assert_eq!(carousel.current(), 2);
    }
}
