//! One layout pass: column spans and row-axis geometry for the current
//! orientation, scroll offsets and viewport.

use crate::config::RollConfig;
use crate::types::{RollColumn, MAX_COLUMN_EXTENT};

use super::axis::{AxisStrategy, Orientation};
use super::{CellSize, Viewport};

/// A column's extent along the column axis, in unscrolled content pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub offset: i32,
    pub extent: i32,
}

impl ColumnSpan {
    pub const fn end(self) -> i32 {
        self.offset.saturating_add(self.extent)
    }

    /// Start of the span on screen for a column-axis scroll.
    pub const fn start_at(self, scroll: i32) -> i32 {
        self.offset.saturating_sub(scroll)
    }
}

/// Layout of the roll for one paint.
///
/// Produced fresh by [`Frame::compute`]; never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub orientation: Orientation,
    pub cell: CellSize,
    /// One span per visible column, in display order
    pub spans: Vec<ColumnSpan>,
    /// Size of the header band along the row axis
    pub header_extent: i32,
    pub viewport: Viewport,
    pub pad_x: i32,
    pub pad_y: i32,
    /// Absolute row at the top (or left) edge, before lag rows are hidden
    pub first_visible_row: usize,
    /// Whole rows that fit in the data area
    pub visible_rows: usize,
    /// Inclusive range of visible-column indices intersecting the viewport
    pub visible_columns: Option<(usize, usize)>,
}

impl Frame {
    /// Lay out `columns` for the given orientation.
    ///
    /// `measure_label` returns the pixel width of a rotatable column's
    /// representative label; it is only called in horizontal orientation.
    pub fn compute(
        orientation: Orientation,
        columns: &[&RollColumn],
        cell: CellSize,
        viewport: &Viewport,
        config: &RollConfig,
        mut measure_label: impl FnMut(&RollColumn) -> i32,
    ) -> Self {
        let strategy = orientation.strategy();
        let default_width = config
            .default_column_width
            .unwrap_or(cell.cell_width)
            .clamp(0, MAX_COLUMN_EXTENT);

        let mut spans = Vec::with_capacity(columns.len());
        let mut offset: i32 = 0;
        for column in columns {
            let extent = strategy
                .axis_span_of(column, &cell, config, default_width, &mut measure_label)
                .clamp(0, MAX_COLUMN_EXTENT);
            let Some(next) = offset.checked_add(extent) else {
                tracing::debug!(
                    column = %column.name,
                    skipped = columns.len() - spans.len(),
                    "column axis overflows, dropping remaining columns"
                );
                break;
            };
            spans.push(ColumnSpan { offset, extent });
            offset = next;
        }

        let mut frame = Self {
            orientation,
            cell,
            header_extent: strategy
                .header_extent(columns, &cell, default_width)
                .clamp(0, MAX_COLUMN_EXTENT),
            spans,
            viewport: viewport.clone(),
            pad_x: config.cell_width_padding,
            pad_y: config.cell_height_padding,
            first_visible_row: 0,
            visible_rows: 0,
            visible_columns: None,
        };

        frame.first_visible_row = Self::first_row_at(orientation, &cell, viewport);
        if frame.row_extent() > 0 {
            frame.visible_rows = to_index(strategy.visible_rows(&frame));
        }
        frame.visible_columns = frame.compute_visible_columns();
        frame
    }

    /// Absolute row at the leading edge for a scroll position.
    pub fn first_row_at(orientation: Orientation, cell: &CellSize, viewport: &Viewport) -> usize {
        let strategy = orientation.strategy();
        let row_extent = strategy.row_extent(cell);
        if row_extent <= 0 {
            return 0;
        }
        to_index(strategy.row_scroll(viewport) / row_extent)
    }

    pub fn strategy(&self) -> &'static dyn AxisStrategy {
        self.orientation.strategy()
    }

    /// Size of one row along the row axis.
    pub fn row_extent(&self) -> i32 {
        self.strategy().row_extent(&self.cell)
    }

    /// Scroll offset along the row axis.
    pub fn row_scroll(&self) -> i32 {
        self.strategy().row_scroll(&self.viewport)
    }

    /// Scroll offset along the column axis.
    pub fn column_scroll(&self) -> i32 {
        self.strategy().column_scroll(&self.viewport)
    }

    /// Display rows to lay out: every whole row plus the partial one at the edge.
    pub fn display_rows(&self) -> usize {
        if self.spans.is_empty() || self.row_extent() <= 0 {
            0
        } else {
            self.visible_rows + 1
        }
    }

    /// Pixel start of a display row along the row axis.
    pub fn axis_offset_of(&self, display: usize) -> i32 {
        let display = i32::try_from(display).unwrap_or(i32::MAX);
        display
            .saturating_mul(self.row_extent())
            .saturating_add(self.header_extent)
    }

    /// Display row at a row-axis pixel; None inside the header band.
    pub fn pixels_to_row(&self, pixels: i32) -> Option<usize> {
        let row_extent = self.row_extent();
        if row_extent <= 0 || pixels < self.header_extent {
            return None;
        }
        usize::try_from((pixels - self.header_extent) / row_extent).ok()
    }

    pub fn span(&self, index: usize) -> Option<ColumnSpan> {
        self.spans.get(index).copied()
    }

    /// Sum of all column spans.
    pub fn total_column_extent(&self) -> i32 {
        self.spans.last().map_or(0, |s| s.end())
    }

    /// Offset one past the last column (the closing header/grid line).
    pub fn column_end(&self, index: usize) -> i32 {
        self.span(index).map_or_else(|| self.total_column_extent(), |s| s.offset)
    }

    /// Visible-column index at a column-axis pixel (binary search).
    pub fn column_at(&self, pixels: i32) -> Option<usize> {
        let content = pixels.saturating_add(self.column_scroll());
        if content < 0 || content >= self.total_column_extent() {
            return None;
        }
        match self.spans.binary_search_by(|s| s.offset.cmp(&content)) {
            Ok(i) => Some(i),
            Err(i) => i.checked_sub(1),
        }
    }

    /// Whether a column intersects the viewport along the column axis.
    pub fn column_on_screen(&self, index: usize) -> bool {
        self.visible_columns
            .is_some_and(|(first, last)| (first..=last).contains(&index))
    }

    fn compute_visible_columns(&self) -> Option<(usize, usize)> {
        let scroll = self.column_scroll();
        let extent = self.strategy().column_viewport_extent(&self.viewport);
        let first = self.spans.iter().position(|s| s.end().saturating_sub(scroll) > 0)?;
        let last = self.spans.iter().rposition(|s| s.start_at(scroll) <= extent)?;
        (first <= last).then_some((first, last))
    }
}

fn to_index(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn cell() -> CellSize {
        CellSize::from_char_size(8, 14, &RollConfig::default())
    }

    fn columns() -> Vec<RollColumn> {
        vec![
            RollColumn::new("Frame", "Frame").with_width(60),
            RollColumn::new("A", "A"),
            RollColumn::new("B", "B").with_width(30).rotatable(),
        ]
    }

    #[test]
    fn test_vertical_spans_use_default_width() {
        let columns = columns();
        let refs: Vec<_> = columns.iter().collect();
        let frame = Frame::compute(
            Orientation::Vertical,
            &refs,
            cell(),
            &Viewport::with_size(400, 300),
            &RollConfig::default(),
            |_| 0,
        );
        let expected_default = cell().cell_width;
        assert_eq!(frame.spans[1], ColumnSpan { offset: 60, extent: expected_default });
        assert_eq!(frame.total_column_extent(), 60 + expected_default + 30);
        assert_eq!(frame.header_extent, 15);
        // (300 - 15 - 3) / 14
        assert_eq!(frame.visible_rows, 20);
    }

    #[test]
    fn test_pixels_to_row_round_trip() {
        let columns = columns();
        let refs: Vec<_> = columns.iter().collect();
        let frame = Frame::compute(
            Orientation::Vertical,
            &refs,
            cell(),
            &Viewport::with_size(400, 300),
            &RollConfig::default(),
            |_| 0,
        );
        assert_eq!(frame.pixels_to_row(0), None);
        for row in 0..10 {
            let top = frame.axis_offset_of(row);
            assert_eq!(frame.pixels_to_row(top), Some(row));
            assert_eq!(frame.pixels_to_row(top + 13), Some(row));
        }
    }

    #[test]
    fn test_first_visible_row_follows_scroll() {
        let columns = columns();
        let refs: Vec<_> = columns.iter().collect();
        let mut viewport = Viewport::with_size(400, 300);
        viewport.set_scroll(0, 14 * 1000 + 5);
        let frame = Frame::compute(
            Orientation::Vertical,
            &refs,
            cell(),
            &viewport,
            &RollConfig::default(),
            |_| 0,
        );
        assert_eq!(frame.first_visible_row, 1000);
    }

    #[test]
    fn test_column_at_and_visible_range() {
        let columns = columns();
        let refs: Vec<_> = columns.iter().collect();
        let mut viewport = Viewport::with_size(50, 300);
        viewport.set_scroll(40, 0);
        let frame = Frame::compute(
            Orientation::Vertical,
            &refs,
            cell(),
            &viewport,
            &RollConfig::default(),
            |_| 0,
        );
        assert_eq!(frame.column_at(0), Some(0));
        assert_eq!(frame.column_at(20), Some(1));
        assert_eq!(frame.column_at(1000), None);
        // Frame spans 0..60 (on screen -40..20), A 60..80, B 80..110 (on screen 40..70)
        assert_eq!(frame.visible_columns, Some((0, 2)));
    }

    #[test]
    fn test_empty_columns_short_circuit() {
        let frame = Frame::compute(
            Orientation::Horizontal,
            &[],
            cell(),
            &Viewport::new(),
            &RollConfig::default(),
            |_| 0,
        );
        assert!(frame.spans.is_empty());
        assert_eq!(frame.visible_columns, None);
        assert_eq!(frame.display_rows(), 0);
    }
}
