use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Font description handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Font {
    pub family: String,
    /// Size in pixels
    pub size: f32,
    pub bold: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "Courier New".to_string(),
            size: 13.0,
            bold: false,
        }
    }
}

impl Font {
    /// CSS font shorthand.
    pub fn css(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        format!("{weight}{}px {}", self.size, self.family)
    }
}

/// Host-owned image, referenced by id.
///
/// The pixels live with the renderer backend; the engine only passes the
/// handle through.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    pub id: Rc<str>,
    pub width: u32,
    pub height: u32,
}

impl Bitmap {
    pub fn new(id: &str, width: u32, height: u32) -> Self {
        Self {
            id: Rc::from(id),
            width,
            height,
        }
    }
}
