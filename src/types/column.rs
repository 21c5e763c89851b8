use serde::{Deserialize, Serialize};

use crate::error::{Result, RollError};

/// A single roll column.
///
/// Pixel bounds are not stored here; they are produced by every layout pass
/// (see [`crate::layout::Frame`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollColumn {
    /// Identity, unique within a [`ColumnList`]
    pub name: String,
    /// Header text
    pub text: String,
    /// Fixed width in pixels; unsized columns use the shared default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Sized by its label and drawn rotated in horizontal orientation
    #[serde(default)]
    pub rotatable: bool,
    /// Explicit span for a rotatable column in horizontal orientation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotated_height: Option<i32>,
    /// Tinted header
    #[serde(default)]
    pub emphasis: bool,
}

fn default_visible() -> bool {
    true
}

impl RollColumn {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            width: None,
            visible: true,
            rotatable: false,
            rotated_height: None,
            emphasis: false,
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn rotatable(mut self) -> Self {
        self.rotatable = true;
        self
    }

    #[must_use]
    pub fn with_rotated_height(mut self, height: i32) -> Self {
        self.rotatable = true;
        self.rotated_height = Some(height);
        self
    }

    #[must_use]
    pub fn emphasized(mut self) -> Self {
        self.emphasis = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Largest accepted column width or rotated height, in pixels.
pub const MAX_COLUMN_EXTENT: i32 = 1 << 20;

/// Ordered column sequence. Visibility is a derived subset.
///
/// Deserialization goes through [`ColumnList::new`], so JSON input gets the
/// same name and width checks as host reconfiguration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<RollColumn>", into = "Vec<RollColumn>")]
pub struct ColumnList {
    columns: Vec<RollColumn>,
}

impl ColumnList {
    /// Build a list, rejecting duplicate names and out-of-range widths.
    pub fn new(columns: Vec<RollColumn>) -> Result<Self> {
        let mut list = Self::default();
        for column in columns {
            list.add(column)?;
        }
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RollColumn> {
        self.columns.iter()
    }

    pub fn get(&self, name: &str) -> Option<&RollColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Visible columns in display order.
    pub fn visible(&self) -> Vec<&RollColumn> {
        self.columns.iter().filter(|c| c.visible).collect()
    }

    /// Append a column.
    pub fn add(&mut self, column: RollColumn) -> Result<()> {
        let index = self.columns.len();
        self.insert(index, column)
    }

    /// Insert a column at `index` (clamped to the end of the list).
    pub fn insert(&mut self, index: usize, column: RollColumn) -> Result<()> {
        if self.position(&column.name).is_some() {
            return Err(RollError::DuplicateColumn(column.name));
        }
        check_width(&column.name, column.width)?;
        check_width(&column.name, column.rotated_height)?;
        let index = index.min(self.columns.len());
        self.columns.insert(index, column);
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<RollColumn> {
        let index = self.require(name)?;
        Ok(self.columns.remove(index))
    }

    /// Change a column's width; `None` makes it use the shared default.
    pub fn resize(&mut self, name: &str, width: Option<i32>) -> Result<()> {
        check_width(name, width)?;
        let index = self.require(name)?;
        if let Some(column) = self.columns.get_mut(index) {
            column.width = width;
        }
        Ok(())
    }

    pub fn set_visible(&mut self, name: &str, visible: bool) -> Result<()> {
        let index = self.require(name)?;
        if let Some(column) = self.columns.get_mut(index) {
            column.visible = visible;
        }
        Ok(())
    }

    /// Move a column so that it ends up at `to` (clamped).
    pub fn move_to(&mut self, name: &str, to: usize) -> Result<()> {
        let from = self.require(name)?;
        let column = self.columns.remove(from);
        let to = to.min(self.columns.len());
        self.columns.insert(to, column);
        Ok(())
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| RollError::UnknownColumn(name.to_string()))
    }
}

impl TryFrom<Vec<RollColumn>> for ColumnList {
    type Error = RollError;

    fn try_from(columns: Vec<RollColumn>) -> Result<Self> {
        Self::new(columns)
    }
}

impl From<ColumnList> for Vec<RollColumn> {
    fn from(list: ColumnList) -> Self {
        list.columns
    }
}

impl<'a> IntoIterator for &'a ColumnList {
    type Item = &'a RollColumn;
    type IntoIter = std::slice::Iter<'a, RollColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

fn check_width(name: &str, width: Option<i32>) -> Result<()> {
    match width {
        Some(width) if !(1..=MAX_COLUMN_EXTENT).contains(&width) => {
            Err(RollError::InvalidWidth {
                column: name.to_string(),
                width,
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn list() -> ColumnList {
        ColumnList::new(vec![
            RollColumn::new("Frame", "Frame#").with_width(60),
            RollColumn::new("A", "A").with_width(20),
            RollColumn::new("B", "B").hidden(),
        ])
        .unwrap()
    }

    #[test]
    fn test_visible_subset_keeps_order() {
        let list = list();
        let names: Vec<_> = list.visible().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Frame", "A"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut list = list();
        let err = list.add(RollColumn::new("A", "again")).unwrap_err();
        assert!(matches!(err, RollError::DuplicateColumn(name) if name == "A"));
    }

    #[test]
    fn test_invalid_width_rejected() {
        let mut list = list();
        assert!(matches!(
            list.resize("A", Some(0)),
            Err(RollError::InvalidWidth { width: 0, .. })
        ));
        assert!(list.add(RollColumn::new("C", "C").with_width(-4)).is_err());
        assert_eq!(list.get("A").unwrap().width, Some(20));
    }

    #[test]
    fn test_move_and_remove() {
        let mut list = list();
        list.move_to("B", 0).unwrap();
        assert_eq!(list.position("B"), Some(0));
        let removed = list.remove("Frame").unwrap();
        assert_eq!(removed.text, "Frame#");
        assert!(matches!(list.remove("Frame"), Err(RollError::UnknownColumn(_))));
    }

    #[test]
    fn test_deserialize_defaults() {
        let list: ColumnList =
            serde_json::from_str(r#"[{"name":"P1 A","text":"A","rotatable":true}]"#).unwrap();
        let column = list.get("P1 A").unwrap();
        assert!(column.visible);
        assert!(column.rotatable);
        assert_eq!(column.width, None);
    }

    #[test]
    fn test_deserialize_validates() {
        let duplicate = r#"[{"name":"A","text":"A","width":20},{"name":"A","text":"A"}]"#;
        assert!(serde_json::from_str::<ColumnList>(duplicate).is_err());
        let zero = r#"[{"name":"Z","text":"Z","width":0}]"#;
        assert!(serde_json::from_str::<ColumnList>(zero).is_err());
    }

    #[test]
    fn test_oversized_extents_rejected() {
        let mut list = list();
        assert!(list.resize("A", Some(MAX_COLUMN_EXTENT + 1)).is_err());
        let tall = RollColumn::new("T", "T").with_rotated_height(i32::MAX);
        assert!(matches!(
            list.add(tall),
            Err(RollError::InvalidWidth { width: i32::MAX, .. })
        ));
        assert!(list.resize("A", Some(MAX_COLUMN_EXTENT)).is_ok());
    }
}
