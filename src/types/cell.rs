use serde::{Deserialize, Serialize};

/// A (row, column) reference. Header cells have no row index.
///
/// Cells are value objects: equal iff row index and column name match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub row_index: Option<usize>,
    pub column: String,
}

impl Cell {
    pub fn new(row_index: usize, column: impl Into<String>) -> Self {
        Self {
            row_index: Some(row_index),
            column: column.into(),
        }
    }

    /// A header cell of `column`.
    pub fn header(column: impl Into<String>) -> Self {
        Self {
            row_index: None,
            column: column.into(),
        }
    }

    pub fn is_header(&self) -> bool {
        self.row_index.is_none()
    }
}
