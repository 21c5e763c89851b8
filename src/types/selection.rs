use std::collections::{BTreeMap, BTreeSet};

use super::Cell;

/// Set of selected cells.
///
/// Stored per row so the painter can test membership with a borrowed column
/// name. Iteration is ordered by row, then column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    rows: BTreeMap<Option<usize>, BTreeSet<String>>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the cell was already selected.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.rows.entry(cell.row_index).or_default().insert(cell.column)
    }

    pub fn remove(&mut self, cell: &Cell) -> bool {
        let Some(columns) = self.rows.get_mut(&cell.row_index) else {
            return false;
        };
        let removed = columns.remove(&cell.column);
        if columns.is_empty() {
            self.rows.remove(&cell.row_index);
        }
        removed
    }

    /// Drop every selected cell of a column.
    pub fn remove_column(&mut self, column: &str) {
        self.rows.retain(|_, columns| {
            columns.remove(column);
            !columns.is_empty()
        });
    }

    /// Select every column of a data row.
    pub fn select_row<'a>(&mut self, row: usize, columns: impl IntoIterator<Item = &'a str>) {
        let entry = self.rows.entry(Some(row)).or_default();
        entry.extend(columns.into_iter().map(str::to_string));
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeSet::len).sum()
    }

    pub fn contains(&self, row_index: Option<usize>, column: &str) -> bool {
        self.rows
            .get(&row_index)
            .is_some_and(|columns| columns.contains(column))
    }

    /// Selected data cells as `(row, column)` pairs, header cells excluded.
    pub fn data_cells(&self) -> impl Iterator<Item = (usize, &str)> {
        self.rows.iter().filter_map(|(row, columns)| row.map(|r| (r, columns))).flat_map(
            |(row, columns)| columns.iter().map(move |c| (row, c.as_str())),
        )
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().flat_map(|(row, columns)| {
            columns.iter().map(move |c| Cell {
                row_index: *row,
                column: c.clone(),
            })
        })
    }
}

impl FromIterator<Cell> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}
