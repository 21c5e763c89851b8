//! Column header band: background, emphasis, hover highlight and labels.

use crate::provider::ContentProvider;
use crate::render::backend::Renderer;

use super::{draw_clipped, fill, Pass};

pub(super) fn paint_background<R, P>(r: &mut R, pass: &Pass<'_, '_, P>)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    let style = pass.style();
    let strategy = pass.strategy();
    let frame = &pass.frame;

    let band = strategy.header_band(frame);
    r.set_fill_color(style.header_background);
    r.set_stroke_color(style.header_border);
    r.fill_rect(band.x, band.y, band.width, band.height);
    for line in strategy.header_lines(frame) {
        r.stroke_line(line.x1, line.y1, line.x2, line.y2);
    }

    for (index, _) in pass.columns.iter().enumerate().filter(|(_, c)| c.emphasis) {
        if let Some(rect) = strategy.header_cell(frame, index) {
            fill(r, rect, style.emphasis_background);
        }
    }

    let Some(hovered) = pass.scene.pointer.hovered_header() else {
        return;
    };
    let Some(index) = pass.column_index(hovered) else {
        return;
    };
    if !frame.column_on_screen(index) {
        return;
    }
    let Some(column) = pass.column(index) else {
        return;
    };
    let color = if column.emphasis {
        style.highlight_color.add(strategy.hover_tint())
    } else {
        style.highlight_color
    };
    if let Some(rect) = strategy.header_cell(frame, index) {
        fill(r, rect, color);
    }
}

pub(super) fn paint_text<R, P>(r: &mut R, pass: &Pass<'_, '_, P>)
where
    R: Renderer + ?Sized,
    P: ContentProvider + ?Sized,
{
    let style = pass.style();
    let font = &pass.config().font;
    let strategy = pass.strategy();
    let hovered = pass.scene.pointer.hovered_header();

    r.prepare_text(font, style.fore_color, false);
    for (index, column) in pass.columns.iter().enumerate() {
        let text_height = r.measure_text(&column.text, font).height;
        let Some(placement) = strategy.header_text(&pass.frame, index, text_height) else {
            continue;
        };
        if hovered == Some(column.name.as_str()) {
            r.prepare_text(font, style.highlight_text_color, false);
            draw_clipped(r, pass, &column.text, placement.clip, placement.origin);
            r.prepare_text(font, style.fore_color, false);
        } else {
            draw_clipped(r, pass, &column.text, placement.clip, placement.origin);
        }
    }
}
