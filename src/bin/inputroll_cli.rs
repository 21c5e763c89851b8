//! CLI tool for inputroll - paints a synthetic input log headlessly and
//! outputs the draw list as JSON
//!
//! Usage:
//!   inputroll_cli [rows]                          # Draw list to stdout
//!   inputroll_cli [rows] --horizontal             # Transposed layout
//!   inputroll_cli [rows] --scroll 1400 -o out.json
//!   inputroll_cli [rows] --hide-lag -v            # Collapse lag rows, log to stderr

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use inputroll::{
    Argb, Cell, ColumnList, ContentProvider, InputRoll, ItemText, Orientation, RecordingRenderer,
    RollColumn, RollConfig,
};

const BUTTONS: [&str; 8] = ["Up", "Down", "Left", "Right", "Start", "Select", "B", "A"];

/// Deterministic fake input log: every seventh frame lags, buttons toggle
/// in a fixed pattern.
struct SyntheticLog;

impl SyntheticLog {
    fn pressed(row: usize, button: usize) -> bool {
        (row / (button + 1)) % 3 == 0
    }
}

impl ContentProvider for SyntheticLog {
    fn item_text(&self, row: usize, column: &RollColumn) -> Option<ItemText> {
        if column.name == "Frame" {
            return Some(ItemText::new(row.to_string()));
        }
        let button = BUTTONS.iter().position(|b| *b == column.name)?;
        Self::pressed(row, button).then(|| ItemText::new(&column.text[..1]))
    }

    fn row_background(&self, row: usize) -> Option<Argb> {
        self.is_lag_frame(row).then_some(Argb::rgb(255, 220, 220))
    }

    fn item_background(&self, row: usize, column: &RollColumn) -> Option<Argb> {
        let button = BUTTONS.iter().position(|b| *b == column.name)?;
        Self::pressed(row, button).then_some(Argb::new(128, 120, 200, 120))
    }

    fn is_lag_frame(&self, row: usize) -> bool {
        row % 7 == 6
    }
}

fn usage() -> ! {
    eprintln!("Usage: inputroll_cli [rows] [--horizontal] [--hide-lag] [--scroll PX] [-v] [-o output.json]");
    std::process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut rows = 1000;
    let mut horizontal = false;
    let mut hide_lag = false;
    let mut scroll = 0;
    let mut verbose = false;
    let mut output_path = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--horizontal" => horizontal = true,
            "--hide-lag" => hide_lag = true,
            "-v" => verbose = true,
            "--scroll" => {
                scroll = iter
                    .next()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| usage());
            }
            "-o" => output_path = Some(iter.next().unwrap_or_else(|| usage()).clone()),
            other => rows = other.parse().unwrap_or_else(|_| usage()),
        }
    }

    if verbose {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_max_level(tracing::Level::TRACE)
            .init();
    }

    let mut columns = vec![RollColumn::new("Frame", "Frame").with_width(60)];
    columns.extend(
        BUTTONS
            .iter()
            .map(|b| RollColumn::new(*b, *b).with_width(24).rotatable()),
    );
    let columns = match ColumnList::new(columns) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error building columns: {}", e);
            std::process::exit(1);
        }
    };

    let config = RollConfig {
        orientation: if horizontal {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        },
        hide_lag_frames: hide_lag,
        ..RollConfig::default()
    };

    let mut roll = InputRoll::new(columns, SyntheticLog, config);
    roll.set_row_count(rows);
    roll.set_size(480, 320);
    if horizontal {
        roll.set_scroll(scroll, 0);
    } else {
        roll.set_scroll(0, scroll);
    }
    roll.selection_mut().select_row(3, ["Frame", "A", "B"]);
    roll.selection_mut().insert(Cell::new(5, "Up"));

    let mut renderer = RecordingRenderer::monospace(8, 14);
    let summary = roll.paint(&mut renderer);
    eprintln!(
        "Painted rows {}..{} ({} hidden), {} commands",
        summary.first_row,
        summary.first_row + summary.display_rows + summary.hidden_rows,
        summary.hidden_rows,
        renderer.commands().len()
    );

    let json = match renderer.to_json() {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
