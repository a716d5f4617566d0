use chart_table::style::{CellAlign, HorizontalAlign, VerticalAlign};
use chart_table::{Cell, Color, Column, Row, Table, TablePosition, TableStyle};

#[test]
fn appends_return_the_new_node_for_in_place_edits() {
    let mut table = Table::new(TablePosition::BottomCenter);

    let column = table.add_column(Column::new());
    column.width = Some(8);

    let row = table.add_row(Row::new());
    row.height = Some(2);
    let cell = row.add_cell(Cell::new("first"));
    cell.tooltip = Some("edited".to_owned());
    row.add_cell(Cell::new("second"));

    assert_eq!(table.columns[0].width, Some(8));
    assert_eq!(table.rows[0].height, Some(2));
    assert_eq!(table.rows[0].cells.len(), 2);
    assert_eq!(table.rows[0].cells[0].tooltip.as_deref(), Some("edited"));
}

#[test]
fn builder_accepts_ragged_and_partially_declared_shapes() {
    let mut table = Table::new(TablePosition::TopLeft);
    table.add_column(Column::new());
    table.add_row_with_cells([Cell::new("a"), Cell::new("b"), Cell::new("c")]);
    table.add_row(Row::new());

    assert_eq!(table.rendered_column_count(), 3);
    assert_eq!(table.rendered_row_count(), 2);
    assert!(table.rows[1].cell(0).is_none());
    assert!(table.column(2).is_none());
}

#[test]
fn empty_table_has_no_grid() {
    let table = Table::new(TablePosition::default());
    assert_eq!(table.position, TablePosition::TopRight);
    assert_eq!(table.rendered_column_count(), 0);
    assert_eq!(table.rendered_row_count(), 0);
    assert_eq!(table.background_color(), None);
}

#[test]
fn nested_align_form_matches_flat_fields() {
    let align = CellAlign::new(Some(HorizontalAlign::Center), Some(VerticalAlign::Top));
    let nested = TableStyle::new()
        .with_background_color(Color::WHITE)
        .with_align(align);
    let flat = TableStyle::new()
        .with_background_color(Color::WHITE)
        .with_horizontal_align(HorizontalAlign::Center)
        .with_vertical_align(VerticalAlign::Top);

    assert_eq!(nested, flat);
    assert_eq!(flat.align(), align);
}

#[test]
fn table_document_loads_from_json() {
    let input = r#"{
        "position": "bottom_left",
        "style": { "background_color": { "red": 0, "green": 0, "blue": 255 } },
        "columns": [ { "width": 4 } ],
        "rows": [
            { "cells": [ { "contents": "a", "style": { "horizontal_align": "right" } } ] },
            { "height": 3 }
        ]
    }"#;

    let table = Table::from_json_str(input).expect("parse table");
    assert_eq!(table.position, TablePosition::BottomLeft);
    assert_eq!(table.background_color(), Some(Color::rgb(0, 0, 255)));
    assert_eq!(table.rows.len(), 2);
    assert!(table.rows[1].cells.is_empty());
    let style = table.rows[0].cells[0].style.as_ref().expect("cell style");
    assert_eq!(style.horizontal_align, Some(HorizontalAlign::Right));
    assert_eq!(style.background_color, None);

    let reparsed = Table::from_json_str(&table.to_json_pretty().expect("serialize"))
        .expect("reparse");
    assert_eq!(reparsed, table);
}
