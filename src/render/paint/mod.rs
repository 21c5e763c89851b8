//! Paint orchestrator.
//!
//! One paint is a fixed pipeline over a [`Renderer`]:
//!
//! 1. Acquire the drawing scope and clear to the base background
//! 2. Lay out the visible columns ([`Frame`]) and build the lag-frame map
//! 3. Header background and header text
//! 4. Data background: custom cell colors, grid lines, selection
//! 5. Data foreground: icons then text
//! 6. Column drag and cell drag ghosts
//!
//! The scope is released on every exit path. Nothing here returns an error:
//! degenerate geometry skips the affected region and the next paint
//! supersedes this one.

mod background;
mod data;
mod drag;
mod headers;

use serde::Serialize;

use crate::config::RollConfig;
use crate::layout::{AxisStrategy, CellSize, Frame, LagFrameMap, Viewport};
use crate::provider::ContentProvider;
use crate::types::{ColumnList, Point, PointerState, Rect, RollColumn, SelectionSet};

use super::backend::{DrawScope, Renderer};
use super::colors::Argb;
use super::compositor::RollStyle;

/// Everything one paint reads. Borrowed for the duration of the pass.
pub struct Scene<'a, P: ContentProvider + ?Sized> {
    pub columns: &'a ColumnList,
    pub provider: &'a P,
    pub config: &'a RollConfig,
    pub viewport: &'a Viewport,
    pub cell: CellSize,
    pub selection: &'a SelectionSet,
    pub pointer: &'a PointerState,
    /// Number of rows the host has
    pub row_count: usize,
}

/// What a paint laid out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaintSummary {
    /// Absolute row at the leading edge
    pub first_row: usize,
    /// Display rows produced by the lag-frame map
    pub display_rows: usize,
    /// Lag rows collapsed out of the window
    pub hidden_rows: usize,
    /// Inclusive range of visible-column indices on screen
    pub visible_columns: Option<(usize, usize)>,
}

/// Per-paint state shared by the pipeline steps.
struct Pass<'s, 'a, P: ContentProvider + ?Sized> {
    scene: &'s Scene<'a, P>,
    frame: Frame,
    columns: Vec<&'a RollColumn>,
    lag: LagFrameMap,
}

impl<'a, P: ContentProvider + ?Sized> Pass<'_, 'a, P> {
    fn config(&self) -> &RollConfig {
        self.scene.config
    }

    fn style(&self) -> &RollStyle {
        &self.scene.config.style
    }

    fn strategy(&self) -> &'static dyn AxisStrategy {
        self.frame.strategy()
    }

    fn column(&self, index: usize) -> Option<&'a RollColumn> {
        self.columns.get(index).copied()
    }

    /// Index of a column among the visible columns.
    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Whether the column at `index` has a usable span.
    fn has_extent(&self, index: usize) -> bool {
        self.frame.span(index).is_some_and(|s| s.extent > 0)
    }
}

/// Paint one frame of the roll.
pub fn paint<R, P>(renderer: &mut R, scene: &Scene<'_, P>) -> PaintSummary
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    let viewport = scene.viewport;
    let mut scope = DrawScope::lock(renderer, viewport.width, viewport.height);
    if !scope.acquired() {
        return PaintSummary::default();
    }
    let r = &mut *scope;
    let config = scene.config;

    r.set_fill_color(config.style.base_background);
    r.set_stroke_color(config.style.base_background);
    r.fill_rect(0, 0, viewport.width, viewport.height);

    let columns = scene.columns.visible();
    let frame = layout_frame(r, scene, &columns);

    let display_rows = frame.display_rows();
    let lag = if config.hide_lag_frames {
        LagFrameMap::compute(
            frame.first_visible_row,
            display_rows,
            scene.row_count,
            config.lag_frames_to_hide,
            |row| scene.provider.is_lag_frame(row),
        )
    } else {
        LagFrameMap::identity(frame.first_visible_row, display_rows, scene.row_count)
    };

    let summary = PaintSummary {
        first_row: frame.first_visible_row,
        display_rows: lag.len(),
        hidden_rows: lag.hidden(),
        visible_columns: frame.visible_columns,
    };

    if columns.is_empty() || viewport.is_degenerate() {
        tracing::trace!(
            columns = columns.len(),
            width = viewport.width,
            height = viewport.height,
            "nothing to paint"
        );
        return summary;
    }

    let pass = Pass {
        scene,
        frame,
        columns,
        lag,
    };

    headers::paint_background(r, &pass);
    headers::paint_text(r, &pass);
    background::paint(r, &pass);
    data::paint(r, &pass);
    drag::paint_column_drag(r, &pass);
    drag::paint_cell_drag(r, &pass);

    tracing::trace!(
        first_row = summary.first_row,
        display_rows = summary.display_rows,
        hidden_rows = summary.hidden_rows,
        visible_columns = ?summary.visible_columns,
        "painted"
    );
    summary
}

/// Lay out the visible columns, measuring rotatable labels from the first
/// visible row's text.
fn layout_frame<R, P>(r: &mut R, scene: &Scene<'_, P>, columns: &[&RollColumn]) -> Frame
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    let config = scene.config;
    let start = Frame::first_row_at(config.orientation, &scene.cell, scene.viewport);
    Frame::compute(
        config.orientation,
        columns,
        scene.cell,
        scene.viewport,
        config,
        |column| {
            let text = if start < scene.row_count {
                scene.provider.item_text(start, column).map(|t| t.text)
            } else {
                None
            };
            r.measure_text(text.as_deref().unwrap_or(""), &config.font).width
        },
    )
}

/// Cut `text` to the characters that fit in `width`.
///
/// Fits `(width - padding) / char_width` characters; text of that length or
/// longer is cut to exactly that many. No ellipsis. Without a width, or with
/// an unusable character width, the text is returned whole.
pub fn truncate_to_fit(text: &str, width: Option<i32>, padding: i32, char_width: i32) -> &str {
    let Some(width) = width else {
        return text;
    };
    if char_width <= 0 {
        return text;
    }
    let max = usize::try_from(width.saturating_sub(padding) / char_width).unwrap_or(0);
    match text.char_indices().nth(max) {
        Some((end, _)) => text.get(..end).unwrap_or(text),
        None => text,
    }
}

/// Draw text clipped to `clip` pixels; blank text draws nothing.
fn draw_clipped<R, P>(r: &mut R, pass: &Pass<'_, '_, P>, text: &str, clip: Option<i32>, at: Point)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    if text.trim().is_empty() {
        return;
    }
    let text = truncate_to_fit(
        text,
        clip,
        pass.config().cell_width_padding,
        pass.scene.cell.char_width,
    );
    if text.is_empty() {
        return;
    }
    r.draw_text(text, at);
}

/// Fill a rectangle, skipping empty ones.
fn fill<R: Renderer + ?Sized>(r: &mut R, rect: Rect, color: Argb) {
    if rect.width <= 0 || rect.height <= 0 {
        return;
    }
    r.set_fill_color(color);
    r.fill_rect(rect.x, rect.y, rect.width, rect.height);
}
