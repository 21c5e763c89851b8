//! Browser bindings.
//!
//! Exposes an input roll painting into an HTML canvas, with content pulled
//! from optional JavaScript callbacks:
//!
//! ```javascript
//! const roll = new WebInputRoll(canvas, JSON.stringify(columns), "{}");
//! roll.setItemText((row, column) => column === "Frame" ? String(row) : undefined);
//! roll.setIsLagFrame((row) => lagFrames.has(row));
//! roll.setRowCount(movie.length);
//! roll.render();
//! ```

use js_sys::Function;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use crate::config::RollConfig;
use crate::error::RollError;
use crate::provider::{ContentProvider, ItemIcon, ItemText};
use crate::render::canvas::CanvasRenderer;
use crate::render::colors::Argb;
use crate::roll::InputRoll;
use crate::types::{Bitmap, Cell, ColumnDrag, ColumnList, Point, PointerState, RollColumn};

/// Icon description returned by the `itemIcon` callback.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsIcon {
    id: String,
    width: u32,
    height: u32,
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
}

/// Content provider backed by optional JS callbacks.
#[derive(Default)]
struct JsProvider {
    item_text: Option<Function>,
    item_icon: Option<Function>,
    item_background: Option<Function>,
    row_background: Option<Function>,
    is_lag_frame: Option<Function>,
}

// Row counts stay far below 2^53
#[allow(clippy::cast_precision_loss)]
fn row_value(row: usize) -> JsValue {
    JsValue::from_f64(row as f64)
}

fn call_row(callback: Option<&Function>, row: usize) -> Option<JsValue> {
    let value = callback?.call1(&JsValue::NULL, &row_value(row)).ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

fn call_cell(callback: Option<&Function>, row: usize, column: &RollColumn) -> Option<JsValue> {
    let value = callback?
        .call2(&JsValue::NULL, &row_value(row), &JsValue::from_str(&column.name))
        .ok()?;
    (!value.is_undefined() && !value.is_null()).then_some(value)
}

fn parse_color(value: &JsValue) -> Option<Argb> {
    Argb::from_hex(&value.as_string()?)
}

impl ContentProvider for JsProvider {
    fn item_text(&self, row: usize, column: &RollColumn) -> Option<ItemText> {
        call_cell(self.item_text.as_ref(), row, column)?
            .as_string()
            .map(ItemText::new)
    }

    fn item_icon(&self, row: usize, column: &RollColumn) -> Option<ItemIcon> {
        let value = call_cell(self.item_icon.as_ref(), row, column)?;
        let icon: JsIcon = serde_wasm_bindgen::from_value(value).ok()?;
        Some(ItemIcon {
            bitmap: Bitmap::new(&icon.id, icon.width, icon.height),
            offset: Point::new(icon.x, icon.y),
        })
    }

    fn item_background(&self, row: usize, column: &RollColumn) -> Option<Argb> {
        parse_color(&call_cell(self.item_background.as_ref(), row, column)?)
    }

    fn row_background(&self, row: usize) -> Option<Argb> {
        parse_color(&call_row(self.row_background.as_ref(), row)?)
    }

    fn is_lag_frame(&self, row: usize) -> bool {
        call_row(self.is_lag_frame.as_ref(), row).is_some_and(|v| v.is_truthy())
    }
}

/// Input roll bound to a canvas element.
#[wasm_bindgen]
pub struct WebInputRoll {
    roll: InputRoll<JsProvider>,
    renderer: CanvasRenderer,
}

#[wasm_bindgen]
impl WebInputRoll {
    /// Create a roll from column and configuration JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        columns_json: &str,
        config_json: &str,
    ) -> Result<WebInputRoll, JsValue> {
        console_error_panic_hook::set_once();

        let columns: Vec<RollColumn> =
            serde_json::from_str(columns_json).map_err(RollError::from)?;
        let columns = ColumnList::new(columns)?;
        let config = RollConfig::from_json(config_json)?;

        let (width, height) = (canvas.width(), canvas.height());
        let renderer = CanvasRenderer::new(canvas)?;
        let mut roll = InputRoll::new(columns, JsProvider::default(), config);
        roll.set_size(
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        );
        Ok(Self { roll, renderer })
    }

    #[wasm_bindgen(js_name = "setItemText")]
    pub fn set_item_text(&mut self, callback: Option<Function>) {
        self.roll.provider_mut().item_text = callback;
    }

    #[wasm_bindgen(js_name = "setItemIcon")]
    pub fn set_item_icon(&mut self, callback: Option<Function>) {
        self.roll.provider_mut().item_icon = callback;
    }

    #[wasm_bindgen(js_name = "setItemBackground")]
    pub fn set_item_background(&mut self, callback: Option<Function>) {
        self.roll.provider_mut().item_background = callback;
    }

    #[wasm_bindgen(js_name = "setRowBackground")]
    pub fn set_row_background(&mut self, callback: Option<Function>) {
        self.roll.provider_mut().row_background = callback;
    }

    #[wasm_bindgen(js_name = "setIsLagFrame")]
    pub fn set_is_lag_frame(&mut self, callback: Option<Function>) {
        self.roll.provider_mut().is_lag_frame = callback;
    }

    /// Make an image available to icons returned with this id.
    #[wasm_bindgen(js_name = "registerImage")]
    pub fn register_image(&mut self, id: &str, image: HtmlImageElement) {
        self.renderer.register_image(id, image);
    }

    #[wasm_bindgen(js_name = "setRowCount")]
    pub fn set_row_count(&mut self, rows: usize) {
        self.roll.set_row_count(rows);
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.roll.set_size(width, height);
    }

    #[wasm_bindgen(js_name = "setScroll")]
    pub fn set_scroll(&mut self, x: i32, y: i32) {
        self.roll.set_scroll(x, y);
    }

    #[wasm_bindgen(js_name = "setConfig")]
    pub fn set_config(&mut self, config_json: &str) -> Result<(), JsValue> {
        self.roll.set_config(RollConfig::from_json(config_json)?);
        Ok(())
    }

    #[wasm_bindgen(js_name = "resizeColumn")]
    pub fn resize_column(&mut self, name: &str, width: Option<i32>) -> Result<(), JsValue> {
        Ok(self.roll.resize_column(name, width)?)
    }

    #[wasm_bindgen(js_name = "setColumnVisible")]
    pub fn set_column_visible(&mut self, name: &str, visible: bool) -> Result<(), JsValue> {
        Ok(self.roll.set_column_visible(name, visible)?)
    }

    #[wasm_bindgen(js_name = "moveColumn")]
    pub fn move_column(&mut self, name: &str, to: usize) -> Result<(), JsValue> {
        Ok(self.roll.move_column(name, to)?)
    }

    pub fn select(&mut self, row: usize, column: &str) {
        self.roll.selection_mut().insert(Cell::new(row, column));
    }

    #[wasm_bindgen(js_name = "clearSelection")]
    pub fn clear_selection(&mut self) {
        self.roll.selection_mut().clear();
    }

    /// Report the pointer position and the cell under it.
    ///
    /// `row` is undefined while the pointer is over the header row.
    #[wasm_bindgen(js_name = "setPointer")]
    pub fn set_pointer(&mut self, x: i32, y: i32, column: Option<String>, row: Option<usize>) {
        let pointer = self.roll.pointer_mut();
        pointer.position = Some(Point::new(x, y));
        pointer.current_cell = column.map(|column| Cell {
            row_index: row,
            column,
        });
    }

    #[wasm_bindgen(js_name = "clearPointer")]
    pub fn clear_pointer(&mut self) {
        let drag = self.roll.pointer().column_drag.clone();
        self.roll.set_pointer(PointerState {
            column_drag: drag,
            ..PointerState::default()
        });
    }

    #[wasm_bindgen(js_name = "setColumnDrag")]
    pub fn set_column_drag(&mut self, column: Option<String>, moved: bool) {
        self.roll.pointer_mut().column_drag = column.map(|column| ColumnDrag { column, moved });
    }

    #[wasm_bindgen(js_name = "setCellDrag")]
    pub fn set_cell_drag(&mut self, column: Option<String>, row: Option<usize>) {
        self.roll.pointer_mut().cell_drag = column.map(|column| Cell {
            row_index: row,
            column,
        });
    }

    /// Paint and return the paint summary.
    pub fn render(&mut self) -> Result<JsValue, JsValue> {
        let summary = self.roll.paint(&mut self.renderer);
        serde_wasm_bindgen::to_value(&summary)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}
