//! Color type and palette for roll rendering.
//!
//! Colors are packed ARGB like the host toolkits that drive the roll. The
//! blending helpers truncate toward zero per channel so composited fills
//! match existing visual baselines bit for bit.

use serde::{Deserialize, Serialize};

use crate::error::RollError;

/// 8-bit ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Argb {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Argb {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::new(0, 255, 255, 255);

    /// Create a color from all four channels.
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 255, r, g, b }
    }

    /// Unpack from `0xAARRGGBB`.
    pub const fn from_u32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Self { a, r, g, b }
    }

    /// Pack into `0xAARRGGBB`.
    pub const fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Add a packed ARGB offset to this color, carrying between channels
    /// the same way integer color arithmetic does.
    #[must_use]
    pub const fn add(self, argb: u32) -> Self {
        Self::from_u32(self.to_u32().wrapping_add(argb))
    }

    /// Move each RGB channel toward `target` by `factor`.
    ///
    /// `channel - trunc((channel - target) * factor)`; the result is opaque.
    #[must_use]
    pub fn blend_toward(self, target: Self, factor: f32) -> Self {
        Self::rgb(
            blend_component(self.r, target.r, factor),
            blend_component(self.g, target.g, factor),
            blend_component(self.b, target.b, factor),
        )
    }

    /// Parse from a hex string (`#RRGGBB` or `#AARRGGBB`, `#` optional).
    /// Returns None if the format is invalid.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        let channel = |range: std::ops::Range<usize>| -> Option<u8> {
            u8::from_str_radix(hex.get(range)?, 16).ok()
        };
        match hex.len() {
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => None,
        }
    }

    /// Hex form: `#RRGGBB` when opaque, `#AARRGGBB` otherwise.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.a, self.r, self.g, self.b
            )
        }
    }

    /// CSS color string for Canvas 2D.
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            self.to_hex()
        } else {
            let alpha = f64::from(self.a) / 255.0;
            format!("rgba({}, {}, {}, {:.2})", self.r, self.g, self.b, alpha)
        }
    }
}

impl Default for Argb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl TryFrom<String> for Argb {
    type Error = RollError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or(RollError::Color(value))
    }
}

impl From<Argb> for String {
    fn from(color: Argb) -> Self {
        color.to_hex()
    }
}

/// The `as i32` cast truncates toward zero; composited colors depend on
/// that rounding. Clamped before narrowing.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend_component(from: u8, to: u8, factor: f32) -> u8 {
    let delta = (f32::from(from) - f32::from(to)) * factor;
    (i32::from(from) - delta as i32).clamp(0, 255) as u8
}

/// System-style colors used by the default roll style.
pub mod palette {
    use super::Argb;

    pub const WHITE: Argb = Argb::WHITE;
    pub const BLACK: Argb = Argb::BLACK;

    /// Selection / hover highlight (blue)
    pub const HIGHLIGHT: Argb = Argb::rgb(0, 120, 215);

    /// Text drawn on top of the highlight
    pub const HIGHLIGHT_TEXT: Argb = Argb::WHITE;

    /// Header background and grid lines (light gray)
    pub const CONTROL_LIGHT: Argb = Argb::rgb(227, 227, 227);

    /// Emphasized header background
    pub const ACTIVE_BORDER: Argb = Argb::rgb(180, 180, 180);
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        let color = Argb::from_hex("#FF8040").unwrap();
        assert_eq!(color, Argb::rgb(255, 128, 64));
    }

    #[test]
    fn test_parse_hex_8() {
        let color = Argb::from_hex("#80FF0000").unwrap();
        assert_eq!(color, Argb::new(0x80, 255, 0, 0));
        assert_eq!(color.to_hex(), "#80FF0000");
    }

    #[test]
    fn test_parse_without_hash() {
        assert_eq!(Argb::from_hex("0078D7"), Some(palette::HIGHLIGHT));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Argb::from_hex("#12345"), None);
        assert_eq!(Argb::from_hex("#GG0000"), None);
    }

    #[test]
    fn test_add_carries_like_packed_arithmetic() {
        assert_eq!(palette::HIGHLIGHT.add(0x0022_2222), Argb::rgb(0x22, 0x9A, 0xF9));
        assert_eq!(palette::HIGHLIGHT.add(0x0055_0000), Argb::rgb(0x55, 0x78, 0xD7));
    }

    #[test]
    fn test_blend_truncates_toward_zero() {
        let gray = Argb::rgb(200, 200, 200);
        let blended = gray.blend_toward(palette::HIGHLIGHT, 0.33);
        // 200 - trunc(66.0), 200 - trunc(26.4), 200 - trunc(-4.95)
        assert_eq!(blended, Argb::rgb(134, 174, 204));
    }

    #[test]
    fn test_css_output() {
        assert_eq!(Argb::rgb(1, 2, 3).to_css(), "#010203");
        assert!(Argb::new(128, 255, 0, 0).to_css().starts_with("rgba(255, 0, 0,"));
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&palette::HIGHLIGHT).unwrap();
        assert_eq!(json, "\"#0078D7\"");
        let back: Argb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette::HIGHLIGHT);
        assert!(serde_json::from_str::<Argb>("\"nope\"").is_err());
    }
}
