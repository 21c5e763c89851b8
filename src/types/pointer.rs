use super::{Cell, Point};

/// An in-progress column header drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDrag {
    pub column: String,
    /// The pointer moved since the drag started
    pub moved: bool,
}

/// Pointer and drag state reported by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointerState {
    /// Pointer position in control pixels, if the pointer is over the control
    pub position: Option<Point>,
    /// Cell under the pointer; a header cell while hovering the header row
    pub current_cell: Option<Cell>,
    pub column_drag: Option<ColumnDrag>,
    pub cell_drag: Option<Cell>,
}

impl PointerState {
    /// Column whose header the pointer is over.
    pub fn hovered_header(&self) -> Option<&str> {
        self.current_cell
            .as_ref()
            .filter(|cell| cell.is_header())
            .map(|cell| cell.column.as_str())
    }
}
