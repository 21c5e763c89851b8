//! Renderer capability.
//!
//! The painter only ever talks to a [`Renderer`]: a handful of drawing
//! primitives plus text measurement, supplied by the host graphics backend.
//! Drawing happens inside a [`DrawScope`], which brackets the pass with
//! `begin`/`end` and releases on every exit path.

use std::ops::{Deref, DerefMut};

use super::colors::Argb;
use crate::types::{Bitmap, Font, Point};

/// Measured text extent in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextSize {
    pub width: i32,
    pub height: i32,
}

/// Drawing primitives the painter needs from a backend.
pub trait Renderer {
    /// Acquire the drawing surface for a pass of the given size.
    ///
    /// Returns false if the surface could not be acquired; `end` is then
    /// not called for this pass.
    fn begin(&mut self, width: i32, height: i32) -> bool;

    /// Release a surface acquired by `begin`.
    fn end(&mut self);

    fn set_fill_color(&mut self, color: Argb);

    fn set_stroke_color(&mut self, color: Argb);

    /// Fill a rectangle with the fill color.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Stroke a line with the stroke color.
    fn stroke_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Outline the rectangle between two corners.
    fn stroke_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.stroke_line(x1, y1, x2, y1);
        self.stroke_line(x2, y1, x2, y2);
        self.stroke_line(x2, y2, x1, y2);
        self.stroke_line(x1, y2, x1, y1);
    }

    /// Select font, color and direction for following [`Renderer::draw_text`] calls.
    fn prepare_text(&mut self, font: &Font, color: Argb, rotated: bool);

    fn draw_text(&mut self, text: &str, at: Point);

    fn draw_bitmap(&mut self, bitmap: &Bitmap, at: Point);

    fn measure_text(&mut self, text: &str, font: &Font) -> TextSize;
}

/// Scoped drawing pass: `begin` on construction, `end` on drop if the
/// surface was acquired.
pub struct DrawScope<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
    acquired: bool,
}

impl<'a, R: Renderer + ?Sized> DrawScope<'a, R> {
    pub fn lock(renderer: &'a mut R, width: i32, height: i32) -> Self {
        let acquired = renderer.begin(width, height);
        Self { renderer, acquired }
    }

    pub fn acquired(&self) -> bool {
        self.acquired
    }
}

impl<R: Renderer + ?Sized> Deref for DrawScope<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> DerefMut for DrawScope<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.renderer
    }
}

impl<R: Renderer + ?Sized> Drop for DrawScope<'_, R> {
    fn drop(&mut self) {
        if self.acquired {
            self.renderer.end();
        }
    }
}
