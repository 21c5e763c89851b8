//! Headless renderer that records a display list.
//!
//! Used by tests, the CLI and the benchmark. Text is measured as monospace
//! so layouts are deterministic without a font stack.

use serde::Serialize;

use super::backend::{Renderer, TextSize};
use super::colors::Argb;
use crate::types::{Bitmap, Font, Point};

/// One recorded primitive call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Begin { width: i32, height: i32 },
    End,
    FillColor { color: Argb },
    StrokeColor { color: Argb },
    FillRect { x: i32, y: i32, width: i32, height: i32 },
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
    PrepareText { font: String, color: Argb, rotated: bool },
    Text { text: String, x: i32, y: i32 },
    Bitmap { id: String, x: i32, y: i32 },
}

/// Display-list renderer with monospace text metrics.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    char_width: i32,
    char_height: i32,
    open_scopes: usize,
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::monospace(8, 14)
    }
}

impl RecordingRenderer {
    /// Measure every character as `char_width` x `char_height`.
    pub fn monospace(char_width: i32, char_height: i32) -> Self {
        Self {
            commands: Vec::new(),
            char_width,
            char_height,
            open_scopes: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Whether every `begin` has been matched by an `end`.
    pub fn is_released(&self) -> bool {
        self.open_scopes == 0
    }

    /// Strings drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Display list as JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.commands)
    }
}

impl Renderer for RecordingRenderer {
    fn begin(&mut self, width: i32, height: i32) -> bool {
        self.open_scopes += 1;
        self.commands.push(DrawCommand::Begin { width, height });
        true
    }

    fn end(&mut self) {
        self.open_scopes = self.open_scopes.saturating_sub(1);
        self.commands.push(DrawCommand::End);
    }

    fn set_fill_color(&mut self, color: Argb) {
        self.commands.push(DrawCommand::FillColor { color });
    }

    fn set_stroke_color(&mut self, color: Argb) {
        self.commands.push(DrawCommand::StrokeColor { color });
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }

    fn prepare_text(&mut self, font: &Font, color: Argb, rotated: bool) {
        self.commands.push(DrawCommand::PrepareText {
            font: font.css(),
            color,
            rotated,
        });
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x: at.x,
            y: at.y,
        });
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, at: Point) {
        self.commands.push(DrawCommand::Bitmap {
            id: bitmap.id.to_string(),
            x: at.x,
            y: at.y,
        });
    }

    fn measure_text(&mut self, text: &str, _font: &Font) -> TextSize {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        TextSize {
            width: chars.saturating_mul(self.char_width),
            height: self.char_height,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::render::backend::DrawScope;

    #[test]
    fn test_scope_releases_on_drop() {
        let mut renderer = RecordingRenderer::default();
        {
            let mut scope = DrawScope::lock(&mut renderer, 10, 10);
            scope.fill_rect(0, 0, 1, 1);
            assert!(!scope.is_released());
        }
        assert!(renderer.is_released());
        assert_eq!(renderer.commands().last(), Some(&DrawCommand::End));
    }

    #[test]
    fn test_monospace_measure() {
        let mut renderer = RecordingRenderer::monospace(10, 12);
        let size = renderer.measure_text("héllo", &Font::default());
        assert_eq!(size, TextSize { width: 50, height: 12 });
    }

    #[test]
    fn test_stroke_rect_is_four_lines() {
        let mut renderer = RecordingRenderer::default();
        renderer.stroke_rect(0, 0, 4, 2);
        assert_eq!(renderer.commands().len(), 4);
        assert_eq!(renderer.commands()[1], DrawCommand::Line { x1: 4, y1: 0, x2: 4, y2: 2 });
    }

    #[test]
    fn test_json_tags() {
        let mut renderer = RecordingRenderer::default();
        renderer.set_fill_color(Argb::BLACK);
        let json = renderer.to_json().unwrap();
        assert!(json.contains("\"op\": \"fill_color\""));
        assert!(json.contains("#000000"));
    }
}
