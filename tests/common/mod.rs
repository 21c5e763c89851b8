//! Common test utilities: a configurable fake provider and roll builders.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use inputroll::{
    Argb, Bitmap, ColumnList, ContentProvider, DrawCommand, InputRoll, ItemIcon, ItemText,
    RecordingRenderer, RollColumn, RollConfig,
};

/// Monospace metrics used by every integration test: 8x14 glyphs.
pub const CHAR_WIDTH: i32 = 8;
pub const CHAR_HEIGHT: i32 = 14;

/// Provider with per-row and per-cell overrides and a query log.
#[derive(Default)]
pub struct FakeProvider {
    /// Text for every cell not listed in `texts`: "<column><row>"
    pub default_text: bool,
    pub texts: HashMap<(usize, String), ItemText>,
    pub icons: HashMap<(usize, String), ItemIcon>,
    pub row_colors: HashMap<usize, Argb>,
    pub cell_colors: HashMap<(usize, String), Argb>,
    pub lag: BTreeSet<usize>,
    /// Rows passed to any cell query, in call order
    pub queried_rows: RefCell<Vec<usize>>,
}

impl FakeProvider {
    pub fn with_default_text() -> Self {
        Self {
            default_text: true,
            ..Self::default()
        }
    }

    pub fn text(mut self, row: usize, column: &str, text: &str) -> Self {
        self.texts
            .insert((row, column.to_string()), ItemText::new(text));
        self
    }

    pub fn icon(mut self, row: usize, column: &str, id: &str) -> Self {
        self.icons.insert(
            (row, column.to_string()),
            ItemIcon {
                bitmap: Bitmap::new(id, 8, 8),
                offset: Default::default(),
            },
        );
        self
    }

    pub fn row_color(mut self, row: usize, color: Argb) -> Self {
        self.row_colors.insert(row, color);
        self
    }

    pub fn cell_color(mut self, row: usize, column: &str, color: Argb) -> Self {
        self.cell_colors.insert((row, column.to_string()), color);
        self
    }

    pub fn lag_rows(mut self, rows: impl IntoIterator<Item = usize>) -> Self {
        self.lag.extend(rows);
        self
    }

    fn log(&self, row: usize) {
        self.queried_rows.borrow_mut().push(row);
    }
}

impl ContentProvider for FakeProvider {
    fn item_text(&self, row: usize, column: &RollColumn) -> Option<ItemText> {
        self.log(row);
        if let Some(text) = self.texts.get(&(row, column.name.clone())) {
            return Some(text.clone());
        }
        self.default_text
            .then(|| ItemText::new(format!("{}{}", column.name, row)))
    }

    fn item_icon(&self, row: usize, column: &RollColumn) -> Option<ItemIcon> {
        self.log(row);
        self.icons.get(&(row, column.name.clone())).cloned()
    }

    fn item_background(&self, row: usize, column: &RollColumn) -> Option<Argb> {
        self.log(row);
        self.cell_colors.get(&(row, column.name.clone())).copied()
    }

    fn row_background(&self, row: usize) -> Option<Argb> {
        self.row_colors.get(&row).copied()
    }

    fn is_lag_frame(&self, row: usize) -> bool {
        self.lag.contains(&row)
    }
}

/// Frame column (60px) followed by two 20px button columns.
pub fn columns() -> ColumnList {
    ColumnList::new(vec![
        RollColumn::new("Frame", "Frame").with_width(60),
        RollColumn::new("A", "A").with_width(20),
        RollColumn::new("B", "B").with_width(20),
    ])
    .unwrap()
}

/// A 200x100 roll over 1000 rows.
pub fn roll(provider: FakeProvider) -> InputRoll<FakeProvider> {
    roll_with(columns(), provider, RollConfig::default())
}

pub fn roll_with(
    columns: ColumnList,
    provider: FakeProvider,
    config: RollConfig,
) -> InputRoll<FakeProvider> {
    let mut roll = InputRoll::new(columns, provider, config);
    roll.set_size(200, 100);
    roll.set_row_count(1000);
    roll
}

pub fn renderer() -> RecordingRenderer {
    RecordingRenderer::monospace(CHAR_WIDTH, CHAR_HEIGHT)
}

/// Paint once and return the display list.
pub fn paint(roll: &mut InputRoll<FakeProvider>) -> Vec<DrawCommand> {
    let mut renderer = renderer();
    roll.paint(&mut renderer);
    assert!(renderer.is_released(), "draw scope left open");
    renderer.take_commands()
}

/// Fill rectangles drawn with `color`.
pub fn fills_with(commands: &[DrawCommand], color: Argb) -> Vec<(i32, i32, i32, i32)> {
    let mut current = None;
    let mut fills = Vec::new();
    for command in commands {
        match command {
            DrawCommand::FillColor { color } => current = Some(*color),
            DrawCommand::FillRect {
                x,
                y,
                width,
                height,
            } if current == Some(color) => fills.push((*x, *y, *width, *height)),
            _ => {}
        }
    }
    fills
}

/// Text drawn along with the color and rotation it was prepared with.
pub fn texts(commands: &[DrawCommand]) -> Vec<(String, i32, i32, Argb, bool)> {
    let mut style = (Argb::BLACK, false);
    let mut out = Vec::new();
    for command in commands {
        match command {
            DrawCommand::PrepareText { color, rotated, .. } => style = (*color, *rotated),
            DrawCommand::Text { text, x, y } => out.push((text.clone(), *x, *y, style.0, style.1)),
            _ => {}
        }
    }
    out
}
