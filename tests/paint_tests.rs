//! Paint pipeline tests
//!
//! Paints into the recording renderer and checks the display list: pass
//! order, clipping, selection, hover and drag overlays in both orientations.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;

use common::*;
use inputroll::render::palette;
use inputroll::{
    Argb, Cell, ColumnDrag, ColumnList, DrawCommand, InputRoll, NoContent, Orientation, Point,
    PointerState, RollColumn, RollConfig,
};

const SELECTED_WHITE: Argb = Argb::rgb(171, 211, 242);

#[test]
fn paint_is_idempotent() {
    let provider = FakeProvider::with_default_text()
        .row_color(2, Argb::rgb(255, 220, 220))
        .cell_color(3, "A", Argb::new(51, 0, 200, 50))
        .icon(1, "B", "pad");
    let mut roll = roll(provider);
    roll.selection_mut().insert(Cell::new(4, "Frame"));
    roll.set_pointer(PointerState {
        position: Some(Point::new(70, 5)),
        current_cell: Some(Cell::header("A")),
        ..PointerState::default()
    });

    let first = paint(&mut roll);
    let second = paint(&mut roll);
    assert_eq!(first, second);
}

#[test]
fn pass_is_bracketed_and_starts_with_clear() {
    let mut roll = roll(FakeProvider::default());
    let commands = paint(&mut roll);
    assert_eq!(
        commands[..4],
        [
            DrawCommand::Begin {
                width: 200,
                height: 100
            },
            DrawCommand::FillColor { color: Argb::WHITE },
            DrawCommand::StrokeColor { color: Argb::WHITE },
            DrawCommand::FillRect {
                x: 0,
                y: 0,
                width: 200,
                height: 100
            },
        ]
    );
    assert_eq!(commands.last(), Some(&DrawCommand::End));
}

#[test]
fn no_visible_columns_only_clears() {
    let mut roll = roll(FakeProvider::with_default_text());
    for name in ["Frame", "A", "B"] {
        roll.set_column_visible(name, false).unwrap();
    }
    let commands = paint(&mut roll);
    assert_eq!(commands.len(), 5);
    assert_eq!(commands.last(), Some(&DrawCommand::End));
    assert!(roll.provider().queried_rows.borrow().is_empty());
}

#[test]
fn degenerate_viewport_only_clears() {
    let mut roll = roll(FakeProvider::with_default_text());
    roll.set_size(0, 100);
    let commands = paint(&mut roll);
    assert_eq!(commands.len(), 5);
    assert_eq!(commands.last(), Some(&DrawCommand::End));
}

#[test]
fn missing_callbacks_paint_headers_only() {
    let mut roll = InputRoll::new(columns(), NoContent, RollConfig::default());
    roll.set_size(200, 100);
    roll.set_row_count(1000);
    let mut renderer = renderer();
    roll.paint(&mut renderer);
    assert_eq!(renderer.texts(), ["Frame", "A", "B"]);
    assert!(renderer.is_released());
}

#[test]
fn vertical_text_positions() {
    let mut roll = roll(FakeProvider::with_default_text());
    let commands = paint(&mut roll);
    let texts = texts(&commands);

    let frame0 = texts.iter().find(|t| t.0 == "Frame0").unwrap();
    assert_eq!((frame0.1, frame0.2), (4, 15));
    let frame1 = texts.iter().find(|t| t.0 == "Frame1").unwrap();
    assert_eq!((frame1.1, frame1.2), (4, 29));
    // Header label: span offset + 2 * padding
    let header_a = texts.iter().find(|t| t.0 == "A").unwrap();
    assert_eq!((header_a.1, header_a.2), (66, 0));
}

#[test]
fn vertical_cells_are_painted_row_major() {
    let mut roll = roll(FakeProvider::with_default_text());
    let commands = paint(&mut roll);
    let order: Vec<String> = texts(&commands)
        .into_iter()
        .map(|t| t.0)
        .skip(3)
        .take(6)
        .collect();
    assert_eq!(order, ["Frame0", "A0", "B0", "Frame1", "A1", "B1"]);
}

#[test]
fn header_text_is_truncated_to_span() {
    let columns = ColumnList::new(vec![
        RollColumn::new("Frame", "Frame").with_width(60),
        RollColumn::new("Long", "LongHeader").with_width(20),
    ])
    .unwrap();
    let mut roll = roll_with(columns, FakeProvider::default(), RollConfig::default());
    let mut renderer = renderer();
    roll.paint(&mut renderer);
    // (20 - 3) / 8 = 2 characters
    assert_eq!(renderer.texts(), ["Frame", "Lo"]);
}

#[test]
fn data_stops_at_row_count() {
    let mut roll = roll(FakeProvider::with_default_text());
    roll.set_row_count(3);
    let commands = paint(&mut roll);
    let frames: Vec<String> = texts(&commands)
        .into_iter()
        .map(|t| t.0)
        .filter(|t| t.starts_with("Frame") && t != "Frame")
        .collect();
    assert_eq!(frames, ["Frame0", "Frame1", "Frame2"]);
}

#[test]
fn icon_is_drawn_before_text() {
    let provider = FakeProvider::with_default_text().icon(0, "A", "pad");
    let mut roll = roll(provider);
    let commands = paint(&mut roll);

    let icon = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Bitmap { id, .. } if id == "pad"))
        .unwrap();
    let text = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Text { text, .. } if text == "A0"))
        .unwrap();
    assert!(icon < text);
    assert_eq!(
        commands[icon],
        DrawCommand::Bitmap {
            id: "pad".to_string(),
            x: 64,
            y: 15
        }
    );
}

#[test]
fn selection_tints_visible_cells() {
    let mut roll = roll(FakeProvider::with_default_text());
    roll.selection_mut().insert(Cell::new(2, "A"));
    let commands = paint(&mut roll);

    assert_eq!(fills_with(&commands, SELECTED_WHITE), [(61, 44, 19, 13)]);
    let a2 = texts(&commands).into_iter().find(|t| t.0 == "A2").unwrap();
    assert_eq!(a2.3, palette::HIGHLIGHT_TEXT);
    let a1 = texts(&commands).into_iter().find(|t| t.0 == "A1").unwrap();
    assert_eq!(a1.3, Argb::BLACK);
}

#[test]
fn selection_outside_window_is_not_queried() {
    let mut roll = roll(FakeProvider::with_default_text());
    roll.selection_mut().insert(Cell::new(500, "A"));
    roll.selection_mut().insert(Cell::header("B"));
    let commands = paint(&mut roll);

    assert!(fills_with(&commands, SELECTED_WHITE).is_empty());
    assert!(!roll.provider().queried_rows.borrow().contains(&500));
}

#[test]
fn selection_over_row_color() {
    let provider = FakeProvider::default().row_color(1, Argb::rgb(200, 200, 200));
    let mut roll = roll(provider);
    roll.selection_mut().insert(Cell::new(1, "Frame"));
    let commands = paint(&mut roll);
    assert_eq!(
        fills_with(&commands, Argb::rgb(134, 174, 204)),
        [(1, 30, 59, 13)]
    );
}

#[test]
fn custom_row_background() {
    let red = Argb::rgb(255, 0, 0);
    let mut roll = roll(FakeProvider::default().row_color(1, red));
    let commands = paint(&mut roll);
    assert_eq!(
        fills_with(&commands, red),
        [(1, 30, 59, 13), (61, 30, 19, 13), (81, 30, 19, 13)]
    );

    let mut config = roll.config().clone();
    config.use_custom_background = false;
    roll.set_config(config);
    let commands = paint(&mut roll);
    assert!(fills_with(&commands, red).is_empty());
}

#[test]
fn white_cell_override_keeps_row_color() {
    let green = Argb::rgb(0, 200, 0);
    let provider = FakeProvider::default()
        .row_color(0, green)
        .cell_color(0, "A", Argb::WHITE)
        .cell_color(0, "B", Argb::new(51, 0, 0, 0));
    let mut roll = roll(provider);
    let commands = paint(&mut roll);
    assert_eq!(fills_with(&commands, green), [(1, 16, 59, 13), (61, 16, 19, 13)]);
    // 200 - trunc(200 * .2)
    assert_eq!(fills_with(&commands, Argb::rgb(0, 160, 0)), [(81, 16, 19, 13)]);
}

#[test]
fn grid_lines_toggle() {
    let mut roll = roll(FakeProvider::default());
    let grid_pen = DrawCommand::StrokeColor {
        color: palette::CONTROL_LIGHT,
    };
    assert!(paint(&mut roll).contains(&grid_pen));

    roll.set_grid_lines(false);
    assert!(!paint(&mut roll).contains(&grid_pen));
}

#[test]
fn emphasis_and_hover_header_fills() {
    let columns = ColumnList::new(vec![
        RollColumn::new("Frame", "Frame").with_width(60),
        RollColumn::new("A", "A").with_width(20).emphasized(),
        RollColumn::new("B", "B").with_width(20),
    ])
    .unwrap();
    let mut roll = roll_with(columns, FakeProvider::default(), RollConfig::default());
    let commands = paint(&mut roll);
    assert_eq!(fills_with(&commands, palette::ACTIVE_BORDER), [(61, 1, 19, 14)]);

    roll.pointer_mut().current_cell = Some(Cell::header("A"));
    let commands = paint(&mut roll);
    // Highlight + 0x00550000
    assert_eq!(fills_with(&commands, Argb::rgb(85, 120, 215)), [(61, 1, 19, 14)]);
    let label = texts(&commands).into_iter().find(|t| t.0 == "A").unwrap();
    assert_eq!(label.3, palette::HIGHLIGHT_TEXT);

    roll.pointer_mut().current_cell = Some(Cell::header("B"));
    let commands = paint(&mut roll);
    assert_eq!(fills_with(&commands, palette::HIGHLIGHT), [(81, 1, 19, 14)]);
}

#[test]
fn column_drag_ghost() {
    let mut roll = roll(FakeProvider::default());
    roll.set_pointer(PointerState {
        position: Some(Point::new(100, 50)),
        current_cell: Some(Cell::header("B")),
        column_drag: Some(ColumnDrag {
            column: "A".to_string(),
            moved: true,
        }),
        cell_drag: None,
    });
    let commands = paint(&mut roll);
    let ghost_edge = DrawCommand::Line {
        x1: 90,
        y1: 43,
        x2: 110,
        y2: 43,
    };
    assert!(commands.contains(&ghost_edge));
    let label = texts(&commands).into_iter().last().unwrap();
    assert_eq!((label.0.as_str(), label.1, label.2), ("A", 93, 43));

    roll.pointer_mut().column_drag = Some(ColumnDrag {
        column: "A".to_string(),
        moved: false,
    });
    assert!(!paint(&mut roll).contains(&ghost_edge));

    roll.pointer_mut().column_drag = Some(ColumnDrag {
        column: "A".to_string(),
        moved: true,
    });
    roll.pointer_mut().current_cell = Some(Cell::new(3, "B"));
    assert!(!paint(&mut roll).contains(&ghost_edge));
}

#[test]
fn column_drag_needs_sized_column() {
    let columns = ColumnList::new(vec![
        RollColumn::new("Frame", "Frame").with_width(60),
        RollColumn::new("Free", "F"),
    ])
    .unwrap();
    let mut roll = roll_with(columns, FakeProvider::default(), RollConfig::default());
    roll.set_pointer(PointerState {
        position: Some(Point::new(100, 50)),
        current_cell: Some(Cell::header("Frame")),
        column_drag: Some(ColumnDrag {
            column: "Free".to_string(),
            moved: true,
        }),
        cell_drag: None,
    });
    let commands = paint(&mut roll);
    // Only the clear sets a white pen; the ghost would set another
    let white_pens = commands
        .iter()
        .filter(|c| **c == DrawCommand::StrokeColor { color: Argb::WHITE })
        .count();
    assert_eq!(white_pens, 1);
}

#[test]
fn cell_drag_ghost() {
    let provider = FakeProvider::with_default_text().row_color(3, Argb::rgb(10, 20, 30));
    let mut roll = roll(provider);
    roll.set_pointer(PointerState {
        position: Some(Point::new(100, 50)),
        cell_drag: Some(Cell::new(3, "A")),
        ..PointerState::default()
    });
    let commands = paint(&mut roll);
    assert!(fills_with(&commands, Argb::rgb(10, 20, 30)).contains(&(90, 43, 20, 14)));
    let label = texts(&commands).into_iter().last().unwrap();
    assert_eq!((label.0.as_str(), label.1, label.2), ("A3", 93, 43));

    // Header cells cannot be dragged
    roll.pointer_mut().cell_drag = Some(Cell::header("A"));
    let commands = paint(&mut roll);
    assert!(!fills_with(&commands, Argb::rgb(10, 20, 30)).contains(&(90, 43, 20, 14)));
}

#[test]
fn horizontal_rotated_text() {
    let columns = ColumnList::new(vec![
        RollColumn::new("Frame", "Frame").with_width(60),
        RollColumn::new("A", "A").with_width(20).rotatable(),
    ])
    .unwrap();
    let config = RollConfig {
        orientation: Orientation::Horizontal,
        ..RollConfig::default()
    };
    let mut roll = roll_with(columns, FakeProvider::with_default_text(), config);
    let commands = paint(&mut roll);
    let texts = texts(&commands);

    let data: Vec<_> = texts.iter().filter(|t| t.0.len() > 1 && t.0 != "Frame").collect();
    let first_rotated = data.iter().position(|t| t.4).unwrap();
    // Column-major: every Frame cell comes before any A cell
    assert!(data[..first_rotated].iter().all(|t| !t.4));
    assert!(data[first_rotated..].iter().all(|t| t.4 && t.0.starts_with('A')));

    // Span of A: measured "A0" (16px) + 6 = 22; centered at max((22 - 16) / 2, 3)
    let a0 = data[first_rotated];
    assert_eq!((a0.0.as_str(), a0.1, a0.2), ("A0", 77, 17));
}

#[test]
fn horizontal_hover_tint() {
    let columns = ColumnList::new(vec![
        RollColumn::new("Frame", "Frame").with_width(60).emphasized(),
        RollColumn::new("A", "A").with_width(20),
    ])
    .unwrap();
    let config = RollConfig {
        orientation: Orientation::Horizontal,
        ..RollConfig::default()
    };
    let mut roll = roll_with(columns, FakeProvider::default(), config);
    roll.pointer_mut().current_cell = Some(Cell::header("Frame"));
    let commands = paint(&mut roll);
    // Highlight + 0x00222222, inside the 60px header band
    assert_eq!(fills_with(&commands, Argb::rgb(34, 154, 249)), [(1, 1, 59, 13)]);
}

#[test]
fn horizontal_selection_over_row_color_with_lag_hidden() {
    let blue = Argb::rgb(0, 0, 255);
    let provider = FakeProvider::default().row_color(2, blue).lag_rows([3]);
    let config = RollConfig {
        orientation: Orientation::Horizontal,
        hide_lag_frames: true,
        ..RollConfig::default()
    };
    let mut roll = roll_with(columns(), provider, config);
    for (row, column) in [(1, "A"), (2, "B"), (3, "A"), (4, "Frame")] {
        roll.selection_mut().insert(Cell::new(row, column));
    }
    let commands = paint(&mut roll);

    // Rows run across from the 60px header, 20px each; columns stack 14px down.
    // Row 2 is display 2 and keeps its color in every column.
    assert_eq!(
        fills_with(&commands, blue),
        [(101, 1, 19, 13), (101, 15, 19, 13), (101, 29, 19, 13)]
    );
    // Selected over the row color: 0 - trunc(-120 * .33), 255 - trunc(40 * .33)
    assert_eq!(fills_with(&commands, Argb::rgb(0, 39, 242)), [(101, 29, 19, 13)]);
    // Row 3 is hidden, so row 4 moves up to display 3
    assert_eq!(
        fills_with(&commands, SELECTED_WHITE),
        [(81, 15, 19, 13), (121, 1, 19, 13)]
    );
    assert!(!roll.provider().queried_rows.borrow().contains(&3));

    let summary = roll.paint(&mut renderer());
    assert_eq!(summary.hidden_rows, 1);
}
