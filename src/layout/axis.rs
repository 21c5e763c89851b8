//! Orientation strategies.
//!
//! Both orientations share one cell model: rows advance along the *row axis*
//! (down in vertical mode, right in horizontal mode) and columns stack along
//! the *column axis*. Everything that differs between the two lives behind
//! [`AxisStrategy`], so the painter never branches on orientation.

use serde::{Deserialize, Serialize};

use crate::config::RollConfig;
use crate::types::{Line, Point, Rect, RollColumn};

use super::{CellSize, Frame, Viewport};

/// Which axis rows advance along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Rows go down, columns go across
    #[default]
    Vertical,
    /// Rows go across, columns go down (transposed)
    Horizontal,
}

impl Orientation {
    pub fn strategy(self) -> &'static dyn AxisStrategy {
        match self {
            Self::Vertical => &VerticalAxis,
            Self::Horizontal => &HorizontalAxis,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }
}

/// Where and how to draw a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPlacement {
    pub origin: Point,
    /// Pixel width the text is truncated to, if any
    pub clip: Option<i32>,
    pub rotated: bool,
}

/// Size of a drag ghost and the label's offset inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost {
    pub width: i32,
    pub height: i32,
    pub text_dy: i32,
}

/// Orientation-specific geometry.
///
/// Offsets returned here are in control pixels with scrolling applied.
pub trait AxisStrategy {
    fn orientation(&self) -> Orientation;

    /// Extent of `column` along the column axis.
    fn axis_span_of(
        &self,
        column: &RollColumn,
        cell: &CellSize,
        config: &RollConfig,
        default_width: i32,
        measure_label: &mut dyn FnMut(&RollColumn) -> i32,
    ) -> i32;

    /// Size of the header band along the row axis.
    fn header_extent(&self, columns: &[&RollColumn], cell: &CellSize, default_width: i32) -> i32;

    fn row_extent(&self, cell: &CellSize) -> i32;
    fn row_scroll(&self, viewport: &Viewport) -> i32;
    fn column_scroll(&self, viewport: &Viewport) -> i32;
    fn column_viewport_extent(&self, viewport: &Viewport) -> i32;

    /// Whole rows that fit; only called with a positive row extent.
    fn visible_rows(&self, frame: &Frame) -> i32;

    /// Paint data cells row by row (true) or column by column (false).
    fn row_major(&self) -> bool;

    /// Area cleared to the header color.
    fn header_band(&self, frame: &Frame) -> Rect;
    /// Header border and separator lines.
    fn header_lines(&self, frame: &Frame) -> Vec<Line>;
    /// Inner area of one header cell (emphasis and hover fills).
    fn header_cell(&self, frame: &Frame, index: usize) -> Option<Rect>;
    /// Packed ARGB added to the hover highlight over an emphasized header.
    fn hover_tint(&self) -> u32;
    fn header_text(&self, frame: &Frame, index: usize, text_height: i32) -> Option<TextPlacement>;

    /// Background fill of a data cell; None if it falls outside the data area.
    fn cell_fill(&self, frame: &Frame, display: usize, index: usize) -> Option<Rect>;
    fn grid_lines(&self, frame: &Frame) -> Vec<Line>;

    /// Whether [`AxisStrategy::cell_text`] needs the measured text width.
    fn measures_cell_text(&self) -> bool;
    fn cell_text(
        &self,
        frame: &Frame,
        display: usize,
        index: usize,
        column: &RollColumn,
        text_width: i32,
        offset: Point,
    ) -> Option<TextPlacement>;
    fn cell_icon(
        &self,
        frame: &Frame,
        display: usize,
        index: usize,
        column: &RollColumn,
        offset: Point,
    ) -> Option<Point>;

    fn column_ghost(&self, frame: &Frame, index: usize, width: i32, text_height: i32)
        -> Option<Ghost>;
    /// Size of a dragged cell; `index` is None when its column is hidden.
    fn cell_ghost(&self, frame: &Frame, index: Option<usize>, width: i32) -> Option<(i32, i32)>;
}

/// Rows down, columns across.
pub struct VerticalAxis;

impl AxisStrategy for VerticalAxis {
    fn orientation(&self) -> Orientation {
        Orientation::Vertical
    }

    fn axis_span_of(
        &self,
        column: &RollColumn,
        _cell: &CellSize,
        _config: &RollConfig,
        default_width: i32,
        _measure_label: &mut dyn FnMut(&RollColumn) -> i32,
    ) -> i32 {
        column.width.unwrap_or(default_width)
    }

    fn header_extent(&self, _columns: &[&RollColumn], cell: &CellSize, _default_width: i32) -> i32 {
        cell.cell_height + 1
    }

    fn row_extent(&self, cell: &CellSize) -> i32 {
        cell.cell_height
    }

    fn row_scroll(&self, viewport: &Viewport) -> i32 {
        viewport.scroll_y
    }

    fn column_scroll(&self, viewport: &Viewport) -> i32 {
        viewport.scroll_x
    }

    fn column_viewport_extent(&self, viewport: &Viewport) -> i32 {
        viewport.width
    }

    fn visible_rows(&self, frame: &Frame) -> i32 {
        (frame.viewport.height.saturating_sub(frame.header_extent + 3) / frame.cell.cell_height).max(0)
    }

    fn row_major(&self) -> bool {
        true
    }

    fn header_band(&self, frame: &Frame) -> Rect {
        Rect::new(0, 0, frame.viewport.width.saturating_add(1), frame.header_extent + 1)
    }

    fn header_lines(&self, frame: &Frame) -> Vec<Line> {
        let total = frame.total_column_extent();
        let bottom = frame.header_extent;
        let scroll = frame.column_scroll();

        let mut lines = vec![
            Line::new(0, 0, total.saturating_add(1), 0),
            Line::new(0, bottom, total.saturating_add(1), bottom),
        ];
        for span in &frame.spans {
            let x = span.start_at(scroll);
            lines.push(Line::new(x, 0, x, bottom));
        }
        if !frame.spans.is_empty() {
            let x = total.saturating_sub(scroll);
            lines.push(Line::new(x, 0, x, bottom));
        }
        lines
    }

    fn header_cell(&self, frame: &Frame, index: usize) -> Option<Rect> {
        let span = frame.span(index)?;
        let rect = Rect::new(
            span.start_at(frame.column_scroll()),
            0,
            span.extent,
            frame.header_extent,
        );
        Some(rect.inset())
    }

    fn hover_tint(&self) -> u32 {
        0x0055_0000
    }

    fn header_text(&self, frame: &Frame, index: usize, _text_height: i32) -> Option<TextPlacement> {
        let span = frame.span(index)?;
        Some(TextPlacement {
            origin: Point::new(
                span.start_at(frame.column_scroll()).saturating_add(2 * frame.pad_x),
                frame.pad_y,
            ),
            clip: Some(span.extent),
            rotated: false,
        })
    }

    fn cell_fill(&self, frame: &Frame, display: usize, index: usize) -> Option<Rect> {
        let span = frame.span(index)?;
        let rect = Rect::new(
            span.start_at(frame.column_scroll()),
            frame.axis_offset_of(display),
            span.extent,
            frame.cell.cell_height,
        )
        .inset();
        if rect.y < frame.header_extent
            || rect.x > frame.viewport.width
            || rect.y > frame.viewport.height
        {
            return None;
        }
        Some(rect)
    }

    fn grid_lines(&self, frame: &Frame) -> Vec<Line> {
        let top = frame.header_extent + 1;
        let bottom = frame.viewport.height.saturating_sub(1);
        let scroll = frame.column_scroll();

        let mut lines: Vec<Line> = frame
            .spans
            .iter()
            .map(|span| {
                let x = span.start_at(scroll);
                Line::new(x, top, x, bottom)
            })
            .collect();
        if !frame.spans.is_empty() {
            let x = frame.total_column_extent().saturating_sub(scroll);
            lines.push(Line::new(x, top, x, bottom));
        }
        for row in 1..=frame.visible_rows {
            let y = frame.axis_offset_of(row);
            lines.push(Line::new(0, y, frame.viewport.width.saturating_add(1), y));
        }
        lines
    }

    fn measures_cell_text(&self) -> bool {
        false
    }

    fn cell_text(
        &self,
        frame: &Frame,
        display: usize,
        index: usize,
        _column: &RollColumn,
        _text_width: i32,
        offset: Point,
    ) -> Option<TextPlacement> {
        let span = frame.span(index)?;
        let origin = Point::new(
            span.start_at(frame.column_scroll()).saturating_add(frame.pad_x + 1),
            frame.axis_offset_of(display).saturating_add(frame.pad_y),
        );
        Some(TextPlacement {
            origin: origin.offset(offset.x, offset.y),
            clip: Some(span.extent),
            rotated: false,
        })
    }

    fn cell_icon(
        &self,
        frame: &Frame,
        display: usize,
        index: usize,
        _column: &RollColumn,
        offset: Point,
    ) -> Option<Point> {
        let span = frame.span(index)?;
        let origin = Point::new(
            span.start_at(frame.column_scroll()).saturating_add(frame.pad_x + 1),
            frame.axis_offset_of(display).saturating_add(2 * frame.pad_y),
        );
        Some(origin.offset(offset.x, offset.y))
    }

    fn column_ghost(
        &self,
        frame: &Frame,
        _index: usize,
        width: i32,
        _text_height: i32,
    ) -> Option<Ghost> {
        Some(Ghost {
            width,
            height: frame.cell.cell_height,
            text_dy: frame.pad_y,
        })
    }

    fn cell_ghost(&self, frame: &Frame, _index: Option<usize>, width: i32) -> Option<(i32, i32)> {
        Some((width, frame.cell.cell_height))
    }
}

/// Rows across, columns down.
pub struct HorizontalAxis;

impl AxisStrategy for HorizontalAxis {
    fn orientation(&self) -> Orientation {
        Orientation::Horizontal
    }

    fn axis_span_of(
        &self,
        column: &RollColumn,
        cell: &CellSize,
        config: &RollConfig,
        _default_width: i32,
        measure_label: &mut dyn FnMut(&RollColumn) -> i32,
    ) -> i32 {
        let baseline = cell.cell_height;
        if !column.rotatable {
            return baseline;
        }
        match column.rotated_height {
            Some(height) => baseline.max(height),
            None => baseline.max(measure_label(column).saturating_add(config.cell_width_padding * 2)),
        }
    }

    fn header_extent(&self, columns: &[&RollColumn], _cell: &CellSize, default_width: i32) -> i32 {
        columns
            .iter()
            .map(|c| c.width.unwrap_or(default_width))
            .max()
            .unwrap_or(0)
    }

    fn row_extent(&self, cell: &CellSize) -> i32 {
        cell.cell_width
    }

    fn row_scroll(&self, viewport: &Viewport) -> i32 {
        viewport.scroll_x
    }

    fn column_scroll(&self, viewport: &Viewport) -> i32 {
        viewport.scroll_y
    }

    fn column_viewport_extent(&self, viewport: &Viewport) -> i32 {
        viewport.height
    }

    fn visible_rows(&self, frame: &Frame) -> i32 {
        (frame.viewport.width.saturating_sub(frame.header_extent) / frame.cell.cell_width).max(0)
    }

    fn row_major(&self) -> bool {
        false
    }

    fn header_band(&self, frame: &Frame) -> Rect {
        Rect::new(0, 0, frame.header_extent + 1, frame.viewport.height.saturating_add(1))
    }

    fn header_lines(&self, frame: &Frame) -> Vec<Line> {
        let right = frame.header_extent;
        let scroll = frame.column_scroll();

        let mut lines: Vec<Line> = frame
            .spans
            .iter()
            .map(|span| {
                let y = span.start_at(scroll);
                Line::new(1, y, right, y)
            })
            .collect();
        let end = frame.total_column_extent().saturating_sub(scroll);
        if !frame.spans.is_empty() {
            lines.push(Line::new(1, end, right, end));
        }
        lines.push(Line::new(0, 0, 0, end.saturating_add(1)));
        lines.push(Line::new(right, 0, right, end.saturating_add(1)));
        lines
    }

    fn header_cell(&self, frame: &Frame, index: usize) -> Option<Rect> {
        let span = frame.span(index)?;
        let rect = Rect::new(
            0,
            span.start_at(frame.column_scroll()),
            frame.header_extent,
            span.extent,
        );
        Some(rect.inset())
    }

    fn hover_tint(&self) -> u32 {
        0x0022_2222
    }

    fn header_text(&self, frame: &Frame, index: usize, text_height: i32) -> Option<TextPlacement> {
        let span = frame.span(index)?;
        Some(TextPlacement {
            origin: Point::new(
                frame.pad_x,
                span.start_at(frame.column_scroll())
                    .saturating_add(span.extent.saturating_sub(text_height) / 2),
            ),
            clip: Some(frame.header_extent),
            rotated: false,
        })
    }

    fn cell_fill(&self, frame: &Frame, display: usize, index: usize) -> Option<Rect> {
        let span = frame.span(index)?;
        let rect = Rect::new(
            frame.axis_offset_of(display),
            span.start_at(frame.column_scroll()),
            frame.cell.cell_width,
            span.extent,
        )
        .inset();
        if rect.x < frame.header_extent
            || rect.x > frame.viewport.width
            || rect.y > frame.viewport.height
        {
            return None;
        }
        Some(rect)
    }

    fn grid_lines(&self, frame: &Frame) -> Vec<Line> {
        let scroll = frame.column_scroll();
        let mut lines: Vec<Line> = (1..=frame.visible_rows)
            .map(|row| {
                let x = frame.axis_offset_of(row);
                Line::new(x, 1, x, frame.viewport.height)
            })
            .collect();
        let left = frame.axis_offset_of(0).saturating_add(1);
        for index in 0..=frame.spans.len() {
            let y = frame.column_end(index).saturating_sub(scroll);
            lines.push(Line::new(left, y, frame.viewport.width, y));
        }
        lines
    }

    fn measures_cell_text(&self) -> bool {
        true
    }

    /// Rotatable columns get rotated text centered along the column span.
    ///
    /// Non-rotatable cells are centered across the cell width too (never
    /// closer than `pad_x` to the leading edge) rather than left-aligned, so
    /// single-glyph button cells sit in the middle of their narrow rows.
    fn cell_text(
        &self,
        frame: &Frame,
        display: usize,
        index: usize,
        column: &RollColumn,
        text_width: i32,
        offset: Point,
    ) -> Option<TextPlacement> {
        let span = frame.span(index)?;
        let row_x = frame.axis_offset_of(display);
        let top = span.start_at(frame.column_scroll());

        if column.rotatable {
            // Drawn rotated a quarter turn: the run goes down the column span
            let base_x = row_x.saturating_add(frame.cell.cell_width);
            let along = (span.extent.saturating_sub(text_width) / 2)
                .max(frame.pad_x)
                .saturating_add(offset.x);
            let across = frame.pad_x + offset.y;
            return Some(TextPlacement {
                origin: Point::new(base_x.saturating_sub(across), top.saturating_add(along)),
                clip: None,
                rotated: true,
            });
        }

        let text_x = (frame.cell.cell_width.saturating_sub(text_width) / 2)
            .max(frame.pad_x)
            .saturating_add(offset.x);
        let text_y = frame.pad_y + offset.y;
        Some(TextPlacement {
            origin: Point::new(row_x.saturating_add(text_x), top.saturating_add(text_y)),
            clip: Some(frame.cell.cell_width),
            rotated: false,
        })
    }

    fn cell_icon(
        &self,
        frame: &Frame,
        display: usize,
        index: usize,
        column: &RollColumn,
        offset: Point,
    ) -> Option<Point> {
        if column.rotatable {
            return None;
        }
        let span = frame.span(index)?;
        let origin = Point::new(
            frame.axis_offset_of(display).saturating_add(frame.pad_x),
            span.start_at(frame.column_scroll()).saturating_add(frame.pad_y),
        );
        Some(origin.offset(offset.x, offset.y))
    }

    fn column_ghost(
        &self,
        frame: &Frame,
        index: usize,
        _width: i32,
        text_height: i32,
    ) -> Option<Ghost> {
        let span = frame.span(index)?;
        Some(Ghost {
            width: frame.header_extent,
            height: span.extent,
            text_dy: span.extent.saturating_sub(text_height) / 2,
        })
    }

    fn cell_ghost(&self, frame: &Frame, index: Option<usize>, width: i32) -> Option<(i32, i32)> {
        let span = frame.span(index?)?;
        Some((width, span.extent))
    }
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
    use crate::layout::ColumnSpan;

    fn horizontal_frame(columns: &[RollColumn], label_width: i32) -> Frame {
        let config = RollConfig::default();
        let refs: Vec<_> = columns.iter().collect();
        Frame::compute(
            Orientation::Horizontal,
            &refs,
            CellSize::from_char_size(8, 14, &config),
            &Viewport::with_size(400, 300),
            &config,
            |_| label_width,
        )
    }

    #[test]
    fn test_horizontal_rotatable_spans() {
        let columns = vec![
            RollColumn::new("Frame", "Frame").with_width(60),
            RollColumn::new("Short", "S").rotatable(),
            RollColumn::new("Long", "L").rotatable(),
            RollColumn::new("Fixed", "F").with_rotated_height(50),
            RollColumn::new("Tiny", "T").with_rotated_height(2),
        ];
        // Measured label of 40px + 2 * 3px padding
        let frame = horizontal_frame(&columns, 40);
        let extents: Vec<_> = frame.spans.iter().map(|s| s.extent).collect();
        assert_eq!(extents, [14, 46, 46, 50, 14]);
        assert_eq!(frame.spans[1], ColumnSpan { offset: 14, extent: 46 });
        assert_eq!(frame.header_extent, 60);
    }

    #[test]
    fn test_horizontal_row_axis_runs_across() {
        let columns = vec![RollColumn::new("A", "A").with_width(30)];
        let frame = horizontal_frame(&columns, 0);
        // cell width = 8 + 4 * 3
        assert_eq!(frame.row_extent(), 20);
        assert_eq!(frame.axis_offset_of(2), 30 + 40);
        // (400 - 30) / 20
        assert_eq!(frame.visible_rows, 18);
    }

    #[test]
    fn test_horizontal_cell_fill_skips_header() {
        let columns = vec![RollColumn::new("A", "A").with_width(30)];
        let frame = horizontal_frame(&columns, 0);
        let fill = HorizontalAxis.cell_fill(&frame, 0, 0).unwrap();
        assert_eq!(fill, Rect::new(31, 1, 19, 13));
        assert!(HorizontalAxis.cell_fill(&frame, 1000, 0).is_none());
    }

    #[test]
    fn test_rotated_text_is_centered_in_span() {
        let columns = vec![RollColumn::new("A", "A").with_rotated_height(60)];
        let frame = horizontal_frame(&columns, 0);
        let placement = HorizontalAxis
            .cell_text(&frame, 0, 0, &columns[0], 20, Point::default())
            .unwrap();
        assert!(placement.rotated);
        assert_eq!(placement.clip, None);
        // x: row start + cell width - padding, y: (60 - 20) / 2
        let header = frame.header_extent;
        assert_eq!(placement.origin, Point::new(header + 20 - 3, 20));
        assert!(HorizontalAxis
            .cell_icon(&frame, 0, 0, &columns[0], Point::default())
            .is_none());
    }

    #[test]
    fn test_flipped() {
        assert_eq!(Orientation::Vertical.flipped(), Orientation::Horizontal);
        assert_eq!(
            Orientation::Horizontal.strategy().orientation(),
            Orientation::Horizontal
        );
    }
}
