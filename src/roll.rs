//! The input roll engine.
//!
//! [`InputRoll`] owns the columns, selection, viewport and pointer state
//! between paints and borrows them into a [`Scene`] for each paint. Cell
//! data is never stored; it is pulled from the [`ContentProvider`].

use crate::config::RollConfig;
use crate::error::Result;
use crate::layout::{CellSize, Frame, Orientation, Viewport, MEASURE_GLYPH};
use crate::provider::ContentProvider;
use crate::render::backend::Renderer;
use crate::render::paint::{self, PaintSummary, Scene};
use crate::types::{ColumnList, Font, PointerState, RollColumn, SelectionSet};

/// Virtualized grid over a host-supplied row source.
pub struct InputRoll<P: ContentProvider> {
    columns: ColumnList,
    provider: P,
    config: RollConfig,
    viewport: Viewport,
    selection: SelectionSet,
    pointer: PointerState,
    row_count: usize,
    /// Measured lazily from the roll font; reset when the font changes
    cell: Option<CellSize>,
}

impl<P: ContentProvider> InputRoll<P> {
    pub fn new(columns: ColumnList, provider: P, config: RollConfig) -> Self {
        Self {
            columns,
            provider,
            config,
            viewport: Viewport::new(),
            selection: SelectionSet::new(),
            pointer: PointerState::default(),
            row_count: 0,
            cell: None,
        }
    }

    /// Measure the roll font and derive cell dimensions.
    pub fn measure_cell_size<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> CellSize {
        let glyph = renderer.measure_text(MEASURE_GLYPH, &self.config.font);
        let cell = CellSize::from_char_size(glyph.width, glyph.height, &self.config);
        tracing::debug!(
            char_width = cell.char_width,
            char_height = cell.char_height,
            cell_width = cell.cell_width,
            cell_height = cell.cell_height,
            "measured cell size"
        );
        self.cell = Some(cell);
        cell
    }

    pub fn cell_size(&self) -> Option<CellSize> {
        self.cell
    }

    fn ensure_cell_size<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> CellSize {
        match self.cell {
            Some(cell) => cell,
            None => self.measure_cell_size(renderer),
        }
    }

    // Columns

    pub fn columns(&self) -> &ColumnList {
        &self.columns
    }

    /// Replace every column.
    pub fn set_columns(&mut self, columns: ColumnList) {
        tracing::debug!(count = columns.len(), "columns replaced");
        self.columns = columns;
    }

    pub fn add_column(&mut self, column: RollColumn) -> Result<()> {
        tracing::debug!(column = %column.name, "adding column");
        self.columns.add(column)
    }

    pub fn insert_column(&mut self, index: usize, column: RollColumn) -> Result<()> {
        tracing::debug!(column = %column.name, index, "inserting column");
        self.columns.insert(index, column)
    }

    /// Remove a column and drop it from the selection.
    pub fn remove_column(&mut self, name: &str) -> Result<RollColumn> {
        let column = self.columns.remove(name)?;
        self.selection.remove_column(name);
        tracing::debug!(column = %name, "removed column");
        Ok(column)
    }

    pub fn resize_column(&mut self, name: &str, width: Option<i32>) -> Result<()> {
        tracing::debug!(column = %name, ?width, "resizing column");
        self.columns.resize(name, width)
    }

    pub fn set_column_visible(&mut self, name: &str, visible: bool) -> Result<()> {
        tracing::debug!(column = %name, visible, "changing column visibility");
        self.columns.set_visible(name, visible)
    }

    pub fn move_column(&mut self, name: &str, to: usize) -> Result<()> {
        tracing::debug!(column = %name, to, "moving column");
        self.columns.move_to(name, to)
    }

    // Host state

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    /// Replace the configuration; cell size is re-measured on the next paint.
    pub fn set_config(&mut self, config: RollConfig) {
        self.config = config;
        self.cell = None;
    }

    pub fn set_font(&mut self, font: Font) {
        self.config.font = font;
        self.cell = None;
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
    }

    pub fn set_grid_lines(&mut self, enabled: bool) {
        self.config.grid_lines = enabled;
    }

    pub fn set_hide_lag_frames(&mut self, hide: bool) {
        self.config.hide_lag_frames = hide;
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_size(&mut self, width: i32, height: i32) {
        self.viewport.resize(width, height);
    }

    pub fn set_scroll(&mut self, x: i32, y: i32) {
        self.viewport.set_scroll(x, y);
    }

    pub fn scroll_by(&mut self, delta_x: i32, delta_y: i32) {
        self.viewport.scroll_by(delta_x, delta_y);
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionSet {
        &mut self.selection
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
    }

    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    // Layout and paint

    /// Lay out the current state without painting.
    pub fn layout<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Frame {
        let cell = self.ensure_cell_size(renderer);
        let columns = self.columns.visible();
        let start = Frame::first_row_at(self.config.orientation, &cell, &self.viewport);
        let provider = &self.provider;
        let row_count = self.row_count;
        let font = &self.config.font;
        Frame::compute(
            self.config.orientation,
            &columns,
            cell,
            &self.viewport,
            &self.config,
            |column| {
                let text = (start < row_count)
                    .then(|| provider.item_text(start, column))
                    .flatten();
                renderer
                    .measure_text(text.as_ref().map_or("", |t| t.text.as_str()), font)
                    .width
            },
        )
    }

    /// Content size in pixels along x and y for scrollbar ranges.
    pub fn content_size<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> (i32, i32) {
        let frame = self.layout(renderer);
        let rows = i32::try_from(self.row_count).unwrap_or(i32::MAX);
        let along_rows = rows
            .saturating_mul(frame.row_extent())
            .saturating_add(frame.header_extent);
        let along_columns = frame.total_column_extent();
        match self.config.orientation {
            Orientation::Vertical => (along_columns, along_rows),
            Orientation::Horizontal => (along_rows, along_columns),
        }
    }

    /// Paint one frame.
    pub fn paint<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> PaintSummary {
        let cell = self.ensure_cell_size(renderer);
        let scene = Scene {
            columns: &self.columns,
            provider: &self.provider,
            config: &self.config,
            viewport: &self.viewport,
            cell,
            selection: &self.selection,
            pointer: &self.pointer,
            row_count: self.row_count,
        };
        paint::paint(renderer, &scene)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::provider::NoContent;
    use crate::render::recorder::RecordingRenderer;
    use crate::types::Cell;

    fn roll() -> InputRoll<NoContent> {
        let columns = ColumnList::new(vec![
            RollColumn::new("Frame", "Frame").with_width(60),
            RollColumn::new("A", "A").with_width(20),
        ])
        .unwrap();
        let mut roll = InputRoll::new(columns, NoContent, RollConfig::default());
        roll.set_size(200, 100);
        roll.set_row_count(1000);
        roll
    }

    #[test]
    fn test_cell_size_is_measured_lazily() {
        let mut roll = roll();
        let mut renderer = RecordingRenderer::monospace(8, 14);
        assert!(roll.cell_size().is_none());
        roll.paint(&mut renderer);
        let cell = roll.cell_size().unwrap();
        assert_eq!((cell.cell_width, cell.cell_height), (20, 14));

        roll.set_font(Font::default());
        assert!(roll.cell_size().is_none());
    }

    #[test]
    fn test_remove_column_drops_selection() {
        let mut roll = roll();
        roll.selection_mut().insert(Cell::new(3, "A"));
        roll.selection_mut().insert(Cell::new(3, "Frame"));
        roll.remove_column("A").unwrap();
        assert!(!roll.selection().contains(Some(3), "A"));
        assert!(roll.selection().contains(Some(3), "Frame"));
        assert!(roll.remove_column("A").is_err());
    }

    #[test]
    fn test_content_size_transposes() {
        let mut roll = roll();
        let mut renderer = RecordingRenderer::monospace(8, 14);
        // 1000 rows * 14 + header 15
        assert_eq!(roll.content_size(&mut renderer), (80, 14_015));
        roll.set_orientation(Orientation::Horizontal);
        // 1000 rows * 20 + widest column 60; columns 14 each
        assert_eq!(roll.content_size(&mut renderer), (20_060, 28));
    }
}
