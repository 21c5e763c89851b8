//! inputroll - virtualized grid renderer for frame-indexed input logs
//!
//! Paints a window onto millions of rows without storing any of them:
//! - Vertical (rows down) and horizontal (rows across, transposed) layouts
//! - Cell text, icons and colors pulled per visible cell from a provider
//! - Row and cell color layering with selection tint
//! - Lag-frame rows collapsed out of the visible grid
//! - Column and cell drag ghosts
//!
//! # Usage
//!
//! ```
//! use inputroll::{ColumnList, InputRoll, ItemText, RecordingRenderer, RollColumn, RollConfig};
//! use inputroll::ContentProvider;
//!
//! struct Frames;
//!
//! impl ContentProvider for Frames {
//!     fn item_text(&self, row: usize, _column: &RollColumn) -> Option<ItemText> {
//!         Some(ItemText::new(row.to_string()))
//!     }
//! }
//!
//! let columns = ColumnList::new(vec![RollColumn::new("Frame", "Frame").with_width(60)])?;
//! let mut roll = InputRoll::new(columns, Frames, RollConfig::default());
//! roll.set_row_count(1_000_000);
//!
//! let mut renderer = RecordingRenderer::monospace(8, 14);
//! let summary = roll.paint(&mut renderer);
//! assert_eq!(summary.first_row, 0);
//! # Ok::<(), inputroll::RollError>(())
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod provider;
pub mod render;
pub mod roll;
pub mod types;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::RollConfig;
pub use error::{Result, RollError};
pub use layout::{CellSize, Frame, LagFrameMap, Orientation, Viewport};
pub use provider::{ContentProvider, ItemIcon, ItemText, NoContent};
pub use render::{
    Argb, DrawCommand, PaintSummary, RecordingRenderer, Renderer, RollStyle, TextSize,
};
pub use roll::InputRoll;
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use web::WebInputRoll;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
