//! Cell metrics derived from the measured glyph size.

use crate::config::RollConfig;

/// Representative glyph measured to size cells.
pub const MEASURE_GLYPH: &str = "A";

/// Cell dimensions shared by every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    /// Width of one character of the roll font
    pub char_width: i32,
    /// Height of one line of the roll font
    pub char_height: i32,
    /// Row-axis extent of a row in horizontal orientation
    pub cell_width: i32,
    /// Row height in vertical orientation, column baseline in horizontal
    pub cell_height: i32,
}

impl CellSize {
    /// Derive cell dimensions from a measured character size.
    pub fn from_char_size(char_width: i32, char_height: i32, config: &RollConfig) -> Self {
        Self {
            char_width,
            char_height,
            cell_width: char_width * config.max_characters_in_horizontal
                + config.cell_width_padding * 4,
            cell_height: char_height + config.cell_height_padding * 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_from_glyph() {
        let config = RollConfig::default();
        let cell = CellSize::from_char_size(8, 13, &config);
        assert_eq!(cell.cell_width, 8 + 12);
        assert_eq!(cell.cell_height, 13);
    }
}
