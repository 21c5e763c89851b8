//! Rendering engine with pluggable backends.
//!
//! This module provides:
//! - The [`Renderer`] capability and its scoped [`DrawScope`]
//! - The paint orchestrator that drives a renderer through one frame
//! - Cell color composition and the `Argb` color type
//! - A headless recording backend and a Canvas 2D backend (wasm32)

pub mod backend;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod colors;
pub mod compositor;
pub mod paint;
pub mod recorder;

pub use backend::{DrawScope, Renderer, TextSize};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use colors::{palette, Argb};
pub use compositor::{composite_cell, layer_cell_color, selection_tint, CellFill, RollStyle};
pub use paint::{paint, truncate_to_fit, PaintSummary, Scene};
pub use recorder::{DrawCommand, RecordingRenderer};
