//! Roll configuration.
//!
//! Everything the host can tune without touching code: metrics, feature
//! toggles and the color style. Loadable from JSON with every field optional.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::Orientation;
use crate::render::compositor::RollStyle;
use crate::types::Font;

/// Input roll configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RollConfig {
    pub font: Font,
    /// Horizontal padding inside a cell, in pixels
    pub cell_width_padding: i32,
    /// Vertical padding inside a cell, in pixels
    pub cell_height_padding: i32,
    /// Characters a cell must fit in horizontal orientation
    pub max_characters_in_horizontal: i32,
    /// Width for columns without a fixed width (defaults to the cell width)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_column_width: Option<i32>,
    pub grid_lines: bool,
    /// Query per-cell background colors
    pub use_custom_background: bool,
    /// Collapse rows the provider reports as lag frames
    pub hide_lag_frames: bool,
    /// Cap on consecutive lag rows collapsed before one is shown anyway
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lag_frames_to_hide: Option<usize>,
    pub orientation: Orientation,
    pub style: RollStyle,
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            font: Font::default(),
            cell_width_padding: 3,
            cell_height_padding: 0,
            max_characters_in_horizontal: 1,
            default_column_width: None,
            grid_lines: true,
            use_custom_background: true,
            hide_lag_frames: false,
            lag_frames_to_hide: None,
            orientation: Orientation::Vertical,
            style: RollStyle::default(),
        }
    }
}

impl RollConfig {
    /// Parse a JSON configuration; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::render::colors::Argb;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(RollConfig::from_json("{}").unwrap(), RollConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = RollConfig::from_json(
            r##"{
                "orientation": "horizontal",
                "cellWidthPadding": 4,
                "hideLagFrames": true,
                "style": { "highlightColor": "#FF0000" }
            }"##,
        )
        .unwrap();
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.cell_width_padding, 4);
        assert!(config.hide_lag_frames);
        assert_eq!(config.style.highlight_color, Argb::rgb(255, 0, 0));
        assert_eq!(config.style.selection_blend_factor, 0.33);
        assert!(config.grid_lines);
    }

    #[test]
    fn test_bad_color_is_config_error() {
        let err = RollConfig::from_json(r##"{"style":{"gridLineColor":"#XYZ"}}"##).unwrap_err();
        assert!(matches!(err, crate::error::RollError::Config(_)));
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut config = RollConfig::default();
        config.lag_frames_to_hide = Some(3);
        let json = config.to_json().unwrap();
        assert_eq!(RollConfig::from_json(&json).unwrap(), config);
    }
}
