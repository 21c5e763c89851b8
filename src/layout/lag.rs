//! Lag-frame row mapping.
//!
//! Maps display rows (what the grid shows) to absolute rows (what the
//! provider stores) while collapsing rows the provider reports as lag.
//! Rebuilt from scratch on every paint.

/// Display-row to absolute-row mapping for one paint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LagFrameMap {
    start: usize,
    /// Rows skipped immediately before each display row
    skips: Vec<usize>,
    /// Absolute row shown at each display row, strictly increasing
    rows: Vec<usize>,
}

impl LagFrameMap {
    /// Map without any hidden rows.
    pub fn identity(start: usize, display_rows: usize, row_count: usize) -> Self {
        let end = start.saturating_add(display_rows).min(row_count).max(start);
        let rows: Vec<usize> = (start..end).collect();
        Self {
            start,
            skips: vec![0; rows.len()],
            rows,
        }
    }

    /// Walk `display_rows` rows from `start`, skipping runs of lag rows.
    ///
    /// At most `max_hidden` consecutive lag rows are collapsed; the row after
    /// a capped run is shown even if it is lag. Stops at `row_count`.
    pub fn compute(
        start: usize,
        display_rows: usize,
        row_count: usize,
        max_hidden: Option<usize>,
        mut is_lag: impl FnMut(usize) -> bool,
    ) -> Self {
        let mut skips = Vec::with_capacity(display_rows);
        let mut rows = Vec::with_capacity(display_rows);
        let mut row = start;

        while rows.len() < display_rows && row < row_count {
            let mut skip = 0;
            while row < row_count && max_hidden.map_or(true, |max| skip < max) && is_lag(row) {
                skip += 1;
                row += 1;
            }
            if row >= row_count {
                break;
            }
            skips.push(skip);
            rows.push(row);
            row += 1;
        }

        Self { start, skips, rows }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of display rows produced.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn skips(&self) -> &[usize] {
        &self.skips
    }

    /// Total rows hidden in this window.
    pub fn hidden(&self) -> usize {
        self.skips.iter().sum()
    }

    pub fn absolute_row(&self, display: usize) -> Option<usize> {
        self.rows.get(display).copied()
    }

    /// Display index of an absolute row; None if it is hidden or outside the window.
    pub fn display_index_of(&self, row: usize) -> Option<usize> {
        self.rows.binary_search(&row).ok()
    }

    pub fn first_row(&self) -> Option<usize> {
        self.rows.first().copied()
    }

    pub fn last_row(&self) -> Option<usize> {
        self.rows.last().copied()
    }
}
