//! Size of the map container.

/// One dimension of the map container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Fixed size in logical pixels.
    Pixels(f32),
    /// Percentage of the space offered by the parent element.
    Percent(f32),
    /// Percentage of the window height.
    ViewportHeight(f32),
}

impl Length {
    fn resolve(self, parent: f32, window_height: f32) -> f32 {
        match self {
            Length::Pixels(px) => px,
            Length::Percent(p) => parent * p / 100.0,
            Length::ViewportHeight(p) => window_height * p / 100.0,
        }
    }
}

/// Declared width and height of the map container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    /// Container width.
    pub width: Length,
    /// Container height.
    pub height: Length,
}

impl ViewportSize {
    /// Full parent width, full window height.
    pub const FULL_PAGE: Self = Self {
        width: Length::Percent(100.0),
        height: Length::ViewportHeight(100.0),
    };

    /// Resolves the declared size to logical pixels.
    ///
    /// `parent` is the `(width, height)` available to the container, `window_height`
    /// the height of the whole window.
    pub fn resolve(&self, parent: (f32, f32), window_height: f32) -> (f32, f32) {
        (
            self.width.resolve(parent.0, window_height),
            self.height.resolve(parent.1, window_height),
        )
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::FULL_PAGE
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn full_page_takes_parent_width_and_window_height() {
        let (w, h) = ViewportSize::FULL_PAGE.resolve((800.0, 500.0), 600.0);
        assert_relative_eq!(w, 800.0);
        assert_relative_eq!(h, 600.0);
    }

    #[test]
    fn mixed_lengths() {
        let size = ViewportSize {
            width: Length::Pixels(320.0),
            height: Length::Percent(50.0),
        };
        let (w, h) = size.resolve((1024.0, 700.0), 768.0);
        assert_relative_eq!(w, 320.0);
        assert_relative_eq!(h, 350.0);
    }
}
