//! Viewport state: scroll offsets and visible pixel size.

/// Visible area of the roll, in control pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// Horizontal scroll offset
    pub scroll_x: i32,
    /// Vertical scroll offset
    pub scroll_y: i32,
    /// Drawable width
    pub width: i32,
    /// Drawable height
    pub height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a new viewport with default values
    pub fn new() -> Self {
        Self {
            scroll_x: 0,
            scroll_y: 0,
            width: 800,
            height: 600,
        }
    }

    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::new()
        }
    }

    /// Nothing can be drawn into a viewport without area.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Set absolute scroll position; negative offsets clamp to zero.
    pub fn set_scroll(&mut self, x: i32, y: i32) {
        self.scroll_x = x.max(0);
        self.scroll_y = y.max(0);
    }

    /// Scroll by delta amounts
    pub fn scroll_by(&mut self, delta_x: i32, delta_y: i32) {
        self.set_scroll(self.scroll_x + delta_x, self.scroll_y + delta_y);
    }

    /// Clamp scroll position so content of the given size still fills the view.
    pub fn clamp_scroll(&mut self, content_width: i32, content_height: i32) {
        let max_x = (content_width - self.width).max(0);
        let max_y = (content_height - self.height).max(0);
        self.scroll_x = self.scroll_x.clamp(0, max_x);
        self.scroll_y = self.scroll_y.clamp(0, max_y);
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_never_negative() {
        let mut viewport = Viewport::new();
        viewport.scroll_by(-10, 25);
        assert_eq!((viewport.scroll_x, viewport.scroll_y), (0, 25));
    }

    #[test]
    fn test_clamp_scroll() {
        let mut viewport = Viewport::with_size(100, 100);
        viewport.set_scroll(500, 500);
        viewport.clamp_scroll(300, 50);
        assert_eq!((viewport.scroll_x, viewport.scroll_y), (200, 0));
    }

    #[test]
    fn test_degenerate() {
        assert!(Viewport::with_size(0, 10).is_degenerate());
        assert!(!Viewport::new().is_degenerate());
    }
}
