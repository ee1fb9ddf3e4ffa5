//! Index state for the testimonial carousel and the gallery lightbox.

use std::time::Duration;

/// Interval between automatic testimonial advances.
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(5);

/// Cyclic slide selector.
///
/// An empty carousel stays at index zero and ignores navigation.
///
/// # Examples
/// ```
/// use lead_form::Carousel;
///
/// let mut carousel = Carousel::new(3);
/// carousel.advance();
/// carousel.advance();
/// carousel.advance();
/// assert_eq!(carousel.current(), 0);
/// carousel.retreat();
/// assert_eq!(carousel.current(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    /// Create a carousel over `len` slides showing the first one.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    /// Number of slides.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slides.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the visible slide.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Move to the next slide, wrapping to the first. Called on each timer
    /// tick.
    pub const fn advance(&mut self) {
        if self.len > 0 {
            self.current = if self.current + 1 >= self.len {
                0
            } else {
                self.current + 1
            };
        }
    }

    /// Move to the previous slide, wrapping to the last.
    pub const fn retreat(&mut self) {
        if self.len > 0 {
            self.current = if self.current == 0 {
                self.len - 1
            } else {
                self.current - 1
            };
        }
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub const fn select(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}

/// Gallery viewer that is either closed or showing one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    items: Carousel,
    open: bool,
}

impl Lightbox {
    /// Create a closed lightbox over `len` images.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self {
            items: Carousel::new(len),
            open: false,
        }
    }

    /// Index of the displayed image, or `None` while closed.
    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        if self.open {
            Some(self.items.current())
        } else {
            None
        }
    }

    /// Open on image `index`. Out-of-range indices leave it closed.
    pub const fn open(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.select(index);
            self.open = true;
        }
    }

    /// Close the viewer.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Show the next image, wrapping to the first. No-op while closed.
    pub const fn next(&mut self) {
        if self.open {
            self.items.advance();
        }
    }

    /// Show the previous image, wrapping to the last. No-op while closed.
    pub const fn previous(&mut self) {
        if self.open {
            self.items.retreat();
        }
    }
}
