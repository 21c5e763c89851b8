//! Transient drag ghosts that follow the pointer.

use crate::provider::ContentProvider;
use crate::render::backend::Renderer;
use crate::render::compositor::layer_cell_color;
use crate::types::Point;

use super::{draw_clipped, Pass};

/// Outline and label of a header being dragged to a new position.
///
/// Drawn only once the drag has moved and while the pointer is over the
/// header row. The column must have a fixed width.
pub(super) fn paint_column_drag<R, P>(r: &mut R, pass: &Pass<'_, '_, P>)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    let pointer = pass.scene.pointer;
    let Some(drag) = pointer.column_drag.as_ref().filter(|d| d.moved) else {
        return;
    };
    let Some(at) = pointer.position else {
        return;
    };
    if pointer.hovered_header().is_none() {
        return;
    }
    let Some(index) = pass.column_index(&drag.column) else {
        return;
    };
    let Some(column) = pass.column(index) else {
        return;
    };
    let Some(width) = column.width.filter(|w| *w > 0) else {
        tracing::debug!(column = %column.name, "dragged column has no width");
        return;
    };

    let config = pass.config();
    let text_height = r.measure_text(&column.text, &config.font).height;
    let Some(ghost) = pass
        .strategy()
        .column_ghost(&pass.frame, index, width, text_height)
    else {
        return;
    };

    let x1 = at.x.saturating_sub(ghost.width / 2);
    let y1 = at.y.saturating_sub(ghost.height / 2);
    r.set_stroke_color(pass.style().base_background);
    r.stroke_rect(
        x1,
        y1,
        x1.saturating_add(ghost.width),
        y1.saturating_add(ghost.height),
    );
    r.prepare_text(&config.font, pass.style().fore_color, false);
    draw_clipped(
        r,
        pass,
        &column.text,
        None,
        Point::new(
            x1.saturating_add(config.cell_width_padding),
            y1.saturating_add(ghost.text_dy),
        ),
    );
}

/// Filled copy of a cell being dragged across the grid.
///
/// Requires a data row and a column with a fixed width.
pub(super) fn paint_cell_drag<R, P>(r: &mut R, pass: &Pass<'_, '_, P>)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    let pointer = pass.scene.pointer;
    let Some(cell) = pointer.cell_drag.as_ref() else {
        return;
    };
    let Some(row) = cell.row_index else {
        return;
    };
    let Some(at) = pointer.position else {
        return;
    };
    let Some(column) = pass.scene.columns.get(&cell.column) else {
        return;
    };
    let Some(width) = column.width.filter(|w| *w > 0) else {
        tracing::debug!(column = %column.name, "dragged cell's column has no width");
        return;
    };
    let index = pass.column_index(&column.name);
    let Some((width, height)) = pass.strategy().cell_ghost(&pass.frame, index, width) else {
        return;
    };

    let config = pass.config();
    let style = pass.style();
    let provider = pass.scene.provider;

    let base = provider.row_background(row).unwrap_or(style.base_background);
    let color = layer_cell_color(base, provider.item_background(row, column));

    let x1 = at.x.saturating_sub(width / 2);
    let y1 = at.y.saturating_sub(height / 2);
    let origin = Point::new(
        x1.saturating_add(config.cell_width_padding),
        y1.saturating_add(config.cell_height_padding),
    );
    r.set_fill_color(color);
    r.fill_rect(x1, y1, width, height);

    if let Some(icon) = provider.item_icon(row, column) {
        r.draw_bitmap(&icon.bitmap, origin.offset(icon.offset.x, icon.offset.y));
    }
    if let Some(item) = provider.item_text(row, column) {
        r.prepare_text(&config.font, style.fore_color, false);
        draw_clipped(
            r,
            pass,
            &item.text,
            None,
            origin.offset(item.offset.x, item.offset.y),
        );
    }
}
