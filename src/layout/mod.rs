//! Layout engine: turns (row, column) positions into pixel rectangles.
//!
//! This module handles:
//! - Cell metrics measured from the roll font
//! - Column spans for either orientation
//! - Viewport state (scroll offsets, visible size)
//! - Display-row to absolute-row mapping with lag rows collapsed

mod axis;
mod frame;
mod lag;
mod metrics;
mod viewport;

pub use axis::{AxisStrategy, Ghost, HorizontalAxis, Orientation, TextPlacement, VerticalAxis};
pub use frame::{ColumnSpan, Frame};
pub use lag::LagFrameMap;
pub use metrics::{CellSize, MEASURE_GLYPH};
pub use viewport::Viewport;
