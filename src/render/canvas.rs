//! Canvas 2D backend.
//!
//! Implements [`Renderer`] over an HTML canvas via web-sys. Bitmaps are
//! looked up by id in an image registry filled by the host; text widths are
//! cached per font.

use std::collections::{HashMap, VecDeque};
use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::backend::{Renderer, TextSize};
use super::colors::Argb;
use crate::error::{Result, RollError};
use crate::types::{Bitmap, Font, Point};

const TEXT_MEASURE_CACHE_CAP: usize = 4096;

/// FIFO-bounded cache of measured text widths keyed by font and text.
struct TextMeasureCache {
    entries: HashMap<Rc<str>, f64>,
    order: VecDeque<Rc<str>>,
    max_entries: usize,
    scratch: String,
}

impl TextMeasureCache {
    fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            max_entries,
            scratch: String::new(),
        }
    }

    fn get(&mut self, font: &str, text: &str) -> Option<f64> {
        let key = Self::build_key(&mut self.scratch, font, text);
        self.entries.get(key).copied()
    }

    fn insert(&mut self, font: &str, text: &str, width: f64) {
        if self.max_entries == 0 {
            return;
        }
        let key: Rc<str> = Self::build_key(&mut self.scratch, font, text).into();
        if self.entries.contains_key(&key) {
            return;
        }
        self.entries.insert(Rc::clone(&key), width);
        self.order.push_back(key);
        while self.entries.len() > self.max_entries {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
        }
    }

    fn build_key<'a>(scratch: &'a mut String, font: &str, text: &str) -> &'a str {
        scratch.clear();
        scratch.push_str(font);
        scratch.push('\n');
        scratch.push_str(text);
        scratch.as_str()
    }
}

/// Text state set by [`Renderer::prepare_text`].
struct TextState {
    font: String,
    color: String,
    rotated: bool,
}

/// Renderer drawing into a Canvas 2D context.
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    images: HashMap<Rc<str>, HtmlImageElement>,
    text_measure_cache: TextMeasureCache,
    fill_color: String,
    stroke_color: String,
    text: TextState,
}

impl CanvasRenderer {
    /// Create a renderer from a canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| RollError::Canvas("failed to get 2d context".into()))?
            .ok_or_else(|| RollError::Canvas("no 2d context available".into()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RollError::Canvas("failed to cast to CanvasRenderingContext2d".into()))?;

        Ok(Self {
            canvas,
            ctx,
            images: HashMap::new(),
            text_measure_cache: TextMeasureCache::new(TEXT_MEASURE_CACHE_CAP),
            fill_color: Argb::BLACK.to_css(),
            stroke_color: Argb::BLACK.to_css(),
            text: TextState {
                font: Font::default().css(),
                color: Argb::BLACK.to_css(),
                rotated: false,
            },
        })
    }

    /// Register the image behind a bitmap id.
    pub fn register_image(&mut self, id: &str, image: HtmlImageElement) {
        self.images.insert(Rc::from(id), image);
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    fn crisp(v: i32) -> f64 {
        f64::from(v) + 0.5
    }
}

impl Renderer for CanvasRenderer {
    fn begin(&mut self, width: i32, height: i32) -> bool {
        let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) else {
            tracing::debug!(width, height, "negative canvas size, pass not started");
            return false;
        };
        if self.canvas.width() != width || self.canvas.height() != height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        self.ctx.save();
        self.ctx.set_text_baseline("top");
        self.ctx.set_line_width(1.0);
        true
    }

    fn end(&mut self) {
        self.ctx.restore();
    }

    fn set_fill_color(&mut self, color: Argb) {
        self.fill_color = color.to_css();
    }

    fn set_stroke_color(&mut self, color: Argb) {
        self.stroke_color = color.to_css();
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.ctx.set_fill_style_str(&self.fill_color);
        self.ctx.fill_rect(
            f64::from(x),
            f64::from(y),
            f64::from(width),
            f64::from(height),
        );
    }

    fn stroke_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&self.stroke_color);
        self.ctx.move_to(Self::crisp(x1), Self::crisp(y1));
        self.ctx.line_to(Self::crisp(x2), Self::crisp(y2));
        self.ctx.stroke();
    }

    fn prepare_text(&mut self, font: &Font, color: Argb, rotated: bool) {
        self.text = TextState {
            font: font.css(),
            color: color.to_css(),
            rotated,
        };
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        self.ctx.set_font(&self.text.font);
        self.ctx.set_fill_style_str(&self.text.color);
        let (x, y) = (f64::from(at.x), f64::from(at.y));
        if self.text.rotated {
            self.ctx.save();
            let _ = self.ctx.translate(x, y);
            let _ = self.ctx.rotate(FRAC_PI_2);
            let _ = self.ctx.fill_text(text, 0.0, 0.0);
            self.ctx.restore();
        } else {
            let _ = self.ctx.fill_text(text, x, y);
        }
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, at: Point) {
        let Some(image) = self.images.get(&bitmap.id) else {
            tracing::trace!(id = %bitmap.id, "bitmap not registered");
            return;
        };
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            f64::from(at.x),
            f64::from(at.y),
            f64::from(bitmap.width),
            f64::from(bitmap.height),
        );
    }

    #[allow(clippy::cast_possible_truncation)]
    fn measure_text(&mut self, text: &str, font: &Font) -> TextSize {
        let css = font.css();
        let width = match self.text_measure_cache.get(&css, text) {
            Some(width) => width,
            None => {
                self.ctx.set_font(&css);
                let width = self
                    .ctx
                    .measure_text(text)
                    .map(|m| m.width())
                    .unwrap_or(0.0);
                self.text_measure_cache.insert(&css, text, width);
                width
            }
        };
        TextSize {
            width: width.ceil() as i32,
            height: font.size.ceil() as i32,
        }
    }
}
