//! Data-area foreground: per-cell icon and text.

use crate::provider::ContentProvider;
use crate::render::backend::Renderer;

use super::{draw_clipped, Pass};

pub(super) fn paint<R, P>(r: &mut R, pass: &Pass<'_, '_, P>)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    let Some((first, last)) = pass.frame.visible_columns else {
        return;
    };
    r.prepare_text(&pass.config().font, pass.style().fore_color, false);

    let rows = pass.lag.rows();
    if pass.strategy().row_major() {
        for (display, &row) in rows.iter().enumerate() {
            for index in first..=last {
                paint_cell(r, pass, display, row, index);
            }
        }
    } else {
        for index in first..=last {
            for (display, &row) in rows.iter().enumerate() {
                paint_cell(r, pass, display, row, index);
            }
        }
    }
}

fn paint_cell<R, P>(r: &mut R, pass: &Pass<'_, '_, P>, display: usize, row: usize, index: usize)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    let Some(column) = pass.column(index) else {
        return;
    };
    if !pass.has_extent(index) {
        return;
    }
    let provider = pass.scene.provider;
    let strategy = pass.strategy();
    let frame = &pass.frame;
    let font = &pass.config().font;
    let style = pass.style();

    if let Some(icon) = provider.item_icon(row, column) {
        if let Some(at) = strategy.cell_icon(frame, display, index, column, icon.offset) {
            r.draw_bitmap(&icon.bitmap, at);
        }
    }

    let Some(item) = provider.item_text(row, column) else {
        return;
    };
    let text_width = if strategy.measures_cell_text() {
        r.measure_text(&item.text, font).width
    } else {
        0
    };
    let Some(placement) =
        strategy.cell_text(frame, display, index, column, text_width, item.offset)
    else {
        return;
    };

    let selected = pass.scene.selection.contains(Some(row), &column.name);
    let restyle = selected || placement.rotated;
    if restyle {
        let color = if selected {
            style.highlight_text_color
        } else {
            style.fore_color
        };
        r.prepare_text(font, color, placement.rotated);
    }
    draw_clipped(r, pass, &item.text, placement.clip, placement.origin);
    if restyle {
        r.prepare_text(font, style.fore_color, false);
    }
}
