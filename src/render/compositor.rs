//! Per-cell color composition.
//!
//! A cell's fill is built from three layers: the row's base color, the
//! cell's own override (alpha-blended over the row), and the selection tint.
//! The blend uses [`Argb::blend_toward`], which truncates per channel.

use serde::{Deserialize, Serialize};

use super::colors::{palette, Argb};

/// Colors and blend factors used by the painter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RollStyle {
    /// Canvas clear color
    pub base_background: Argb,
    /// Text color
    pub fore_color: Argb,
    pub header_background: Argb,
    pub header_border: Argb,
    /// Header fill for columns flagged with emphasis
    pub emphasis_background: Argb,
    pub grid_line_color: Argb,
    /// Selection tint and hovered header fill
    pub highlight_color: Argb,
    /// Text over the highlight (hovered header, selected cells)
    pub highlight_text_color: Argb,
    pub selection_blend_factor: f32,
}

impl Default for RollStyle {
    fn default() -> Self {
        Self {
            base_background: palette::WHITE,
            fore_color: palette::BLACK,
            header_background: palette::CONTROL_LIGHT,
            header_border: palette::BLACK,
            emphasis_background: palette::ACTIVE_BORDER,
            grid_line_color: palette::CONTROL_LIGHT,
            highlight_color: palette::HIGHLIGHT,
            highlight_text_color: palette::HIGHLIGHT_TEXT,
            selection_blend_factor: 0.33,
        }
    }
}

/// Outcome of compositing one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFill {
    /// Nothing to draw: the cell would be white on the white canvas
    Skip,
    Paint(Argb),
}

impl CellFill {
    pub fn color(self) -> Option<Argb> {
        match self {
            Self::Skip => None,
            Self::Paint(color) => Some(color),
        }
    }
}

/// Layer a cell override over its row color.
///
/// White (the "no override" sentinel) and fully transparent overrides keep
/// the row color; opaque overrides replace it; anything in between is
/// blended by its alpha.
pub fn layer_cell_color(row: Argb, cell: Option<Argb>) -> Argb {
    match cell {
        None => row,
        Some(cell) if cell == Argb::WHITE || cell.is_transparent() => row,
        Some(cell) if cell.is_opaque() => cell,
        Some(cell) => row.blend_toward(cell, f32::from(cell.a) / 255.0),
    }
}

/// Tint a color toward the selection highlight.
pub fn selection_tint(color: Argb, style: &RollStyle) -> Argb {
    color.blend_toward(style.highlight_color, style.selection_blend_factor)
}

/// Final fill of a data cell.
///
/// Unselected cells that resolve to pure white are skipped; selected cells
/// are always painted. White is only a sentinel on the unselected path: a
/// selected cell with an explicit white override is tinted from white, not
/// from its row color.
pub fn composite_cell(
    row: Option<Argb>,
    cell: Option<Argb>,
    selected: bool,
    style: &RollStyle,
) -> CellFill {
    let row = row.unwrap_or(Argb::WHITE);
    if selected {
        let layered = match cell {
            Some(Argb::WHITE) => Argb::WHITE,
            _ => layer_cell_color(row, cell),
        };
        return CellFill::Paint(selection_tint(layered, style));
    }
    let layered = layer_cell_color(row, cell);
    if layered == Argb::WHITE {
        CellFill::Skip
    } else {
        CellFill::Paint(layered)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_white_on_white_is_skipped() {
        let style = RollStyle::default();
        assert_eq!(
            composite_cell(Some(Argb::WHITE), Some(Argb::WHITE), false, &style),
            CellFill::Skip
        );
        assert_eq!(composite_cell(None, None, false, &style), CellFill::Skip);
    }

    #[test]
    fn test_selected_white_is_painted() {
        let style = RollStyle::default();
        let fill = composite_cell(None, None, true, &style).color().unwrap();
        // 255 - trunc(255 * .33), 255 - trunc(135 * .33), 255 - trunc(40 * .33)
        assert_eq!(fill, Argb::rgb(171, 211, 242));
    }

    #[test]
    fn test_opaque_override_replaces_row() {
        let red = Argb::rgb(255, 0, 0);
        assert_eq!(layer_cell_color(Argb::rgb(1, 2, 3), Some(red)), red);
    }

    #[test]
    fn test_transparent_override_keeps_row() {
        let row = Argb::rgb(10, 20, 30);
        assert_eq!(layer_cell_color(row, Some(Argb::new(0, 255, 0, 0))), row);
        assert_eq!(layer_cell_color(row, Some(Argb::TRANSPARENT)), row);
    }

    #[test]
    fn test_default_blend_factor() {
        assert_eq!(RollStyle::default().selection_blend_factor, 0.33);
    }
}
