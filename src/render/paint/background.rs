//! Data-area background: custom cell colors, grid lines, selection tint.

use crate::provider::ContentProvider;
use crate::render::backend::Renderer;
use crate::render::colors::Argb;
use crate::render::compositor::{composite_cell, CellFill};

use super::{fill, Pass};

pub(super) fn paint<R, P>(r: &mut R, pass: &Pass<'_, '_, P>)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    if pass.config().use_custom_background {
        paint_cell_colors(r, pass);
    }
    if pass.config().grid_lines {
        paint_grid(r, pass);
    }
    if !pass.scene.selection.is_empty() {
        paint_selection(r, pass);
    }
}

/// Fill every on-screen cell whose composed color is not plain white.
fn paint_cell_colors<R, P>(r: &mut R, pass: &Pass<'_, '_, P>)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    let Some((first, last)) = pass.frame.visible_columns else {
        return;
    };
    let provider = pass.scene.provider;

    for (display, &row) in pass.lag.rows().iter().enumerate() {
        let row_color = provider.row_background(row);
        for index in first..=last {
            let Some(column) = pass.column(index) else {
                continue;
            };
            let cell_color = provider.item_background(row, column);
            if let CellFill::Paint(color) = composite_cell(row_color, cell_color, false, pass.style())
            {
                fill_cell(r, pass, display, index, color);
            }
        }
    }
}

fn paint_grid<R, P>(r: &mut R, pass: &Pass<'_, '_, P>)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    r.set_stroke_color(pass.style().grid_line_color);
    for line in pass.strategy().grid_lines(&pass.frame) {
        r.stroke_line(line.x1, line.y1, line.x2, line.y2);
    }
}

/// Tint selected cells inside the visible window. Cells outside it are
/// skipped before any color is queried.
fn paint_selection<R, P>(r: &mut R, pass: &Pass<'_, '_, P>)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    let (Some(first_row), Some(last_row)) = (pass.lag.first_row(), pass.lag.last_row()) else {
        return;
    };
    let Some((first_column, last_column)) = pass.frame.visible_columns else {
        return;
    };
    let provider = pass.scene.provider;

    let mut row_color: Option<(usize, Option<Argb>)> = None;
    for (row, name) in pass.scene.selection.data_cells() {
        if row < first_row || row > last_row {
            continue;
        }
        let Some(index) = pass.column_index(name) else {
            continue;
        };
        if index < first_column || index > last_column {
            continue;
        }
        // Hidden lag rows have no display row
        let Some(display) = pass.lag.display_index_of(row) else {
            continue;
        };
        let Some(column) = pass.column(index) else {
            continue;
        };

        let base = match row_color {
            Some((cached, color)) if cached == row => color,
            _ => {
                let color = provider.row_background(row);
                row_color = Some((row, color));
                color
            }
        };
        let cell_color = provider.item_background(row, column);
        if let Some(color) = composite_cell(base, cell_color, true, pass.style()).color() {
            fill_cell(r, pass, display, index, color);
        }
    }
}

fn fill_cell<R, P>(r: &mut R, pass: &Pass<'_, '_, P>, display: usize, index: usize, color: Argb)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    if !pass.has_extent(index) {
        tracing::trace!(index, "skipping cell of zero-extent column");
        return;
    }
    if let Some(rect) = pass.strategy().cell_fill(&pass.frame, display, index) {
        fill(r, rect, color);
    }
}
