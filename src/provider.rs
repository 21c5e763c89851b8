//! Lazy content provider.
//!
//! The roll stores no cell data. Every paint pulls text, icons and colors
//! for the visible cells from the host through [`ContentProvider`]; nothing
//! is cached between paints. Each method defaults to "no content", so a host
//! implements only what it needs.

use std::rc::Rc;

use crate::render::colors::Argb;
use crate::types::{Bitmap, Point, RollColumn};

/// Text for one data cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemText {
    pub text: String,
    /// Nudge applied to this cell's glyph origin
    pub offset: Point,
}

impl ItemText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            offset: Point::default(),
        }
    }

    #[must_use]
    pub fn with_offset(mut self, x: i32, y: i32) -> Self {
        self.offset = Point::new(x, y);
        self
    }
}

/// Icon drawn before a cell's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemIcon {
    pub bitmap: Bitmap,
    pub offset: Point,
}

/// Pull queries answered by the host for each visible cell.
pub trait ContentProvider {
    /// Text of a data cell.
    fn item_text(&self, _row: usize, _column: &RollColumn) -> Option<ItemText> {
        None
    }

    /// Icon of a data cell.
    fn item_icon(&self, _row: usize, _column: &RollColumn) -> Option<ItemIcon> {
        None
    }

    /// Per-cell background override. `None` and opaque white both mean
    /// "no override".
    fn item_background(&self, _row: usize, _column: &RollColumn) -> Option<Argb> {
        None
    }

    /// Whole-row base color; white when `None`.
    fn row_background(&self, _row: usize) -> Option<Argb> {
        None
    }

    /// Whether an absolute row is a lag frame that may be hidden.
    fn is_lag_frame(&self, _row: usize) -> bool {
        false
    }
}

/// Provider with no content at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoContent;

impl ContentProvider for NoContent {}

impl<P: ContentProvider + ?Sized> ContentProvider for &P {
    fn item_text(&self, row: usize, column: &RollColumn) -> Option<ItemText> {
        (**self).item_text(row, column)
    }

    fn item_icon(&self, row: usize, column: &RollColumn) -> Option<ItemIcon> {
        (**self).item_icon(row, column)
    }

    fn item_background(&self, row: usize, column: &RollColumn) -> Option<Argb> {
        (**self).item_background(row, column)
    }

    fn row_background(&self, row: usize) -> Option<Argb> {
        (**self).row_background(row)
    }

    fn is_lag_frame(&self, row: usize) -> bool {
        (**self).is_lag_frame(row)
    }
}

impl<P: ContentProvider + ?Sized> ContentProvider for Box<P> {
    fn item_text(&self, row: usize, column: &RollColumn) -> Option<ItemText> {
        (**self).item_text(row, column)
    }

    fn item_icon(&self, row: usize, column: &RollColumn) -> Option<ItemIcon> {
        (**self).item_icon(row, column)
    }

    fn item_background(&self, row: usize, column: &RollColumn) -> Option<Argb> {
        (**self).item_background(row, column)
    }

    fn row_background(&self, row: usize) -> Option<Argb> {
        (**self).row_background(row)
    }

    fn is_lag_frame(&self, row: usize) -> bool {
        (**self).is_lag_frame(row)
    }
}

impl<P: ContentProvider + ?Sized> ContentProvider for Rc<P> {
    fn item_text(&self, row: usize, column: &RollColumn) -> Option<ItemText> {
        (**self).item_text(row, column)
    }

    fn item_icon(&self, row: usize, column: &RollColumn) -> Option<ItemIcon> {
        (**self).item_icon(row, column)
    }

    fn item_background(&self, row: usize, column: &RollColumn) -> Option<Argb> {
        (**self).item_background(row, column)
    }

    fn row_background(&self, row: usize) -> Option<Argb> {
        (**self).row_background(row)
    }

    fn is_lag_frame(&self, row: usize) -> bool {
        (**self).is_lag_frame(row)
    }
}
