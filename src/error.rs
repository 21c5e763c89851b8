//! Structured error types for inputroll.
//!
//! Only reconfiguration, configuration loading and backend construction can
//! fail. Painting never returns an error: a bad cell is skipped instead.

/// All errors that can occur while configuring an input roll.
#[derive(Debug, thiserror::Error)]
pub enum RollError {
    /// Configuration JSON could not be decoded.
    #[error("Config: {0}")]
    Config(#[from] serde_json::Error),

    /// A column name that is not part of the column list.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// A column name that is already part of the column list.
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// A column width or rotated height outside `1..=MAX_COLUMN_EXTENT`.
    #[error("Invalid width {width} for column {column}")]
    InvalidWidth { column: String, width: i32 },

    /// Invalid color literal.
    #[error("Invalid color: {0}")]
    Color(String),

    /// Canvas backend failure.
    #[error("Canvas error: {0}")]
    Canvas(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RollError>;

#[cfg(target_arch = "wasm32")]
impl From<RollError> for wasm_bindgen::JsValue {
    fn from(e: RollError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
