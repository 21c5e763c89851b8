//! Engine tests: column reconfiguration and configuration loading
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

mod common;

use common::*;
use inputroll::{ColumnList, Orientation, RollColumn, RollConfig, RollError, MAX_COLUMN_EXTENT};

#[test]
fn columns_load_from_json() {
    let columns: ColumnList = serde_json::from_str(
        r#"[
            { "name": "Frame", "text": "Frame", "width": 60 },
            { "name": "P1 A", "text": "A", "rotatable": true, "rotatedHeight": 40 },
            { "name": "Marker", "text": "M", "emphasis": true, "visible": false }
        ]"#,
    )
    .unwrap();
    assert_eq!(columns.len(), 3);
    assert_eq!(columns.get("P1 A").unwrap().rotated_height, Some(40));
    assert!(columns.get("Marker").unwrap().emphasis);
    let visible: Vec<&str> = columns.visible().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(visible, ["Frame", "P1 A"]);
}

#[test]
fn invalid_column_json_is_rejected() {
    let duplicate = r#"[
        { "name": "A", "text": "A", "width": 20 },
        { "name": "A", "text": "A", "width": 30 }
    ]"#;
    assert!(serde_json::from_str::<ColumnList>(duplicate).is_err());

    let zero_width = r#"[{ "name": "Z", "text": "Z", "width": 0 }]"#;
    assert!(serde_json::from_str::<ColumnList>(zero_width).is_err());

    let negative_height = r#"[{ "name": "R", "text": "R", "rotatedHeight": -7 }]"#;
    assert!(serde_json::from_str::<ColumnList>(negative_height).is_err());
}

#[test]
fn huge_widths_are_rejected() {
    let columns = vec![
        RollColumn::new("A", "A").with_width(1_500_000_000),
        RollColumn::new("B", "B").with_width(1_500_000_000),
    ];
    assert!(matches!(
        ColumnList::new(columns),
        Err(RollError::InvalidWidth { width: 1_500_000_000, .. })
    ));
}

#[test]
fn widest_columns_paint_without_overflow() {
    let columns = ColumnList::new(
        (0..3000)
            .map(|i| RollColumn::new(format!("C{i}"), "C").with_width(MAX_COLUMN_EXTENT))
            .collect(),
    )
    .unwrap();
    let config = RollConfig {
        default_column_width: Some(i32::MAX),
        ..RollConfig::default()
    };
    for orientation in [Orientation::Vertical, Orientation::Horizontal] {
        let mut roll = roll_with(columns.clone(), FakeProvider::with_default_text(), config.clone());
        roll.set_orientation(orientation);
        roll.set_scroll(i32::MAX, i32::MAX);

        let commands = paint(&mut roll);
        assert!(!commands.is_empty());
        let (width, height) = roll.content_size(&mut renderer());
        assert!(width > 0 && height > 0);
    }
}

#[test]
fn reconfiguration_errors() {
    let mut roll = roll(FakeProvider::default());
    assert!(matches!(
        roll.add_column(RollColumn::new("A", "dup")),
        Err(RollError::DuplicateColumn(name)) if name == "A"
    ));
    assert!(matches!(
        roll.resize_column("A", Some(0)),
        Err(RollError::InvalidWidth { width: 0, .. })
    ));
    assert!(matches!(
        roll.move_column("Nope", 0),
        Err(RollError::UnknownColumn(_))
    ));
    assert!(ColumnList::new(vec![RollColumn::new("X", "X").with_width(-5)]).is_err());
}

#[test]
fn reorder_and_resize_change_layout() {
    let mut roll = roll(FakeProvider::default());
    let mut renderer = renderer();

    roll.move_column("B", 0).unwrap();
    roll.resize_column("Frame", Some(100)).unwrap();
    roll.insert_column(1, RollColumn::new("C", "C").with_width(10)).unwrap();

    let names: Vec<&str> = roll.columns().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["B", "C", "Frame", "A"]);

    let frame = roll.layout(&mut renderer);
    let extents: Vec<i32> = frame.spans.iter().map(|s| s.extent).collect();
    assert_eq!(extents, [20, 10, 100, 20]);
}

#[test]
fn hidden_columns_are_skipped_by_layout() {
    let mut roll = roll(FakeProvider::with_default_text());
    roll.set_column_visible("A", false).unwrap();
    let frame = roll.layout(&mut renderer());
    assert_eq!(frame.spans.len(), 2);

    let commands = paint(&mut roll);
    assert!(!texts(&commands).iter().any(|t| t.0.starts_with('A')));
}

#[test]
fn config_json_drives_paint() {
    let config = RollConfig::from_json(
        r##"{
            "orientation": "horizontal",
            "gridLines": false,
            "style": { "baseBackground": "#101010" }
        }"##,
    )
    .unwrap();
    let mut roll = roll_with(columns(), FakeProvider::default(), config);
    assert_eq!(roll.orientation(), Orientation::Horizontal);

    let commands = paint(&mut roll);
    assert_eq!(
        commands[1],
        inputroll::DrawCommand::FillColor {
            color: inputroll::Argb::rgb(16, 16, 16)
        }
    );
}

#[test]
fn invalid_config_is_reported() {
    assert!(matches!(
        RollConfig::from_json("{ not json"),
        Err(RollError::Config(_))
    ));
}

#[test]
fn scrolling_moves_first_row() {
    let mut roll = roll(FakeProvider::with_default_text());
    let mut renderer = renderer();
    roll.set_scroll(0, 14 * 250 + 3);
    let summary = roll.paint(&mut renderer);
    assert_eq!(summary.first_row, 250);
    let queried = roll.provider().queried_rows.borrow().clone();
    assert_eq!(queried.iter().min(), Some(&250));

    roll.scroll_by(0, -14 * 1000);
    assert_eq!(roll.viewport().scroll_y, 0);
}
