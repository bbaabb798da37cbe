/// Number of coffee varieties shown in the carousel.
pub const PANEL_COUNT: usize = 3;

/// Manual carousel over a fixed set of panels.
///
/// Exactly one panel is visible at any time and it is always the one at
/// `index`. There is no auto-advance.
#[derive(Debug, Clone)]
pub struct Carousel {
    index: usize,
    visible: Vec<bool>,
}

impl Carousel {
    /// Creates a carousel showing panel 0. A zero panel count is treated as one.
    pub fn new(panel_count: usize) -> Self {
        let mut carousel = Self {
            index: 0,
            visible: vec![false; panel_count.max(1)],
        };
        carousel.show(0);
        carousel
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_visible(&self, panel: usize) -> bool {
        self.visible.get(panel).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|shown| **shown).count()
    }

    pub fn next(&mut self) {
        let len = self.len();
        self.show((self.index + 1) % len);
    }

    pub fn prev(&mut self) {
        let len = self.len();
        self.show((self.index + len - 1) % len);
    }

    /// Shows the panel at `index` (taken modulo the panel count) and hides the rest.
    pub fn show(&mut self, index: usize) {
        self.index = index % self.len();
        for (panel, shown) in self.visible.iter_mut().enumerate() {
            *shown = panel == self.index;
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(PANEL_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_panel() {
        let carousel = Carousel::default();
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_visible(0));
        assert_eq!(carousel.visible_count(), 1);
    }

    #[test]
    fn next_then_prev_returns_to_start_from_every_index() {
        for start in 0..PANEL_COUNT {
            let mut carousel = Carousel::default();
            carousel.show(start);

            carousel.next();
            assert_eq!(carousel.visible_count(), 1);
            carousel.prev();
            assert_eq!(carousel.index(), start);

            carousel.prev();
            assert_eq!(carousel.visible_count(), 1);
            carousel.next();
            assert_eq!(carousel.index(), start);
            assert!(carousel.is_visible(start));
        }
    }

    #[test]
    fn wraps_around_in_both_directions() {
        let mut carousel = Carousel::default();
        carousel.prev();
        assert_eq!(carousel.index(), PANEL_COUNT - 1);
        carousel.next();
        assert_eq!(carousel.index(), 0);

        for _ in 0..PANEL_COUNT {
            carousel.next();
            assert_eq!(carousel.visible_count(), 1);
            assert!(carousel.is_visible(carousel.index()));
        }
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_carousel_still_has_one_panel() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.len(), 1);
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_visible(3));
    }
}
