use std::sync::Arc;

use approx::assert_abs_diff_eq;
use chart_table::resolve::effective_style;
use chart_table::style::{HorizontalAlign, TextSize, TextStyle, VerticalAlign};
use chart_table::{
    Cell, Color, Column, ContrastPalette, ResolveConfig, Row, Table, TablePosition, TableStyle,
    resolve_table,
};

fn bg(color: Color) -> TableStyle {
    TableStyle::new().with_background_color(color)
}

fn precedence_table() -> Table {
    let mut table = Table::new(TablePosition::TopRight).with_style(bg(Color::BLUE));
    table.add_column(Column::new().with_style(bg(Color::RED)));
    table.add_row_with_cells([Cell::new("plain")]);
    table
}

#[test]
fn column_style_beats_table_style() {
    let table = precedence_table();

    let style = effective_style(&table, 0, 0).expect("resolved style");
    assert_eq!(style.background_color, Some(Color::RED));

    let frame = resolve_table(&table, &ResolveConfig::default());
    assert_eq!(frame.cells[0].background_color, Some(Color::RED));
}

#[test]
fn cell_style_beats_every_other_scope() {
    let mut table = precedence_table();
    table.rows[0] = Row::new()
        .with_style(bg(Color::WHITE))
        .with_height(3);
    table.rows[0].add_cell(Cell::new("styled").with_style(bg(Color::GREEN)));

    let frame = resolve_table(&table, &ResolveConfig::default());
    assert_eq!(frame.cells[0].background_color, Some(Color::GREEN));
}

#[test]
fn row_style_beats_column_style() {
    let mut table = precedence_table();
    table
        .add_row(Row::new().with_style(bg(Color::WHITE)))
        .add_cell(Cell::new("row wins"));

    let frame = resolve_table(&table, &ResolveConfig::default());
    let cell = frame.cell(1, 0).expect("second row cell");
    assert_eq!(cell.background_color, Some(Color::WHITE));
}

#[test]
fn fields_cascade_independently() {
    let mut table = Table::new(TablePosition::BottomLeft).with_style(
        TableStyle::new()
            .with_vertical_align(VerticalAlign::Bottom)
            .with_font(TextStyle::new().with_size(TextSize::Small).with_family("monospace")),
    );
    table.add_column(
        Column::new().with_style(TableStyle::new().with_horizontal_align(HorizontalAlign::Right)),
    );
    table.add_row_with_cells([Cell::new("x").with_style(
        TableStyle::new().with_font(TextStyle::new().with_size(TextSize::Huge)),
    )]);

    let frame = resolve_table(&table, &ResolveConfig::default());
    let cell = &frame.cells[0];
    assert_eq!(cell.font_size, Some(TextSize::Huge));
    assert_eq!(cell.font_family.as_deref(), Some("monospace"));
    assert_eq!(cell.horizontal_align, Some(HorizontalAlign::Right));
    assert_eq!(cell.vertical_align, Some(VerticalAlign::Bottom));
}

#[test]
fn unset_fields_stay_unset_when_no_scope_sets_them() {
    let mut table = Table::new(TablePosition::TopLeft);
    table.add_row_with_cells([Cell::new("bare")]);

    let frame = resolve_table(&table, &ResolveConfig::default());
    let cell = &frame.cells[0];
    assert_eq!(cell.background_color, None);
    assert_eq!(cell.font_size, None);
    assert_eq!(cell.horizontal_align, None);
    assert_eq!(cell.vertical_align, None);
    assert!(effective_style(&table, 0, 0).is_none());
}

#[test]
fn foreground_falls_back_to_contrast_with_background() {
    let near_white = Color::rgb(230, 230, 230);
    let near_black = Color::rgb(25, 25, 25);
    assert_abs_diff_eq!(near_white.luminosity(), 0.9, epsilon = 0.01);
    assert_abs_diff_eq!(near_black.luminosity(), 0.1, epsilon = 0.01);

    let mut table = Table::new(TablePosition::TopRight);
    table.add_row_with_cells([
        Cell::new("light").with_style(bg(near_white)),
        Cell::new("dark").with_style(bg(near_black)),
        Cell::new("unset"),
    ]);

    let palette = ContrastPalette::default();
    let frame = resolve_table(&table, &ResolveConfig::default());
    assert_eq!(frame.cells[0].foreground_color, palette.dark);
    assert_eq!(frame.cells[1].foreground_color, palette.light);
    assert_eq!(frame.cells[2].foreground_color, palette.neutral);
}

#[test]
fn contrast_uses_background_even_when_its_assignment_is_suppressed() {
    let mut table = Table::new(TablePosition::TopRight).with_style(bg(Color::WHITE));
    table.add_row_with_cells([Cell::new("on white")]);

    let frame = resolve_table(&table, &ResolveConfig::default());
    assert_eq!(frame.cells[0].background_color, None);
    assert_eq!(frame.cells[0].foreground_color, Color::BLACK);
}

#[test]
fn backgrounds_equal_to_table_background_are_not_assigned() {
    let mut table = Table::new(TablePosition::TopRight).with_style(bg(Color::BLUE));
    table.add_row_with_cells([
        Cell::new("inherits"),
        Cell::new("same").with_style(bg(Color::BLUE)),
        Cell::new("differs").with_style(bg(Color::RED)),
    ]);

    let frame = resolve_table(&table, &ResolveConfig::default());
    assert_eq!(frame.background_assignment_count(), 1);
    assert_eq!(frame.cells[2].background_color, Some(Color::RED));

    let keep_all = ResolveConfig::default().with_suppress_inherited_background(false);
    let frame = resolve_table(&table, &keep_all);
    assert_eq!(frame.background_assignment_count(), 3);
}

#[test]
fn ragged_rows_widen_the_grid_and_skip_missing_slots() {
    let mut table = Table::new(TablePosition::MiddleCenter);
    table.add_row_with_cells([Cell::new("a"), Cell::new("b")]);
    table.add_row_with_cells([Cell::new("c"), Cell::new("d"), Cell::new("e")]);
    table.add_row_with_cells([Cell::new("f")]);

    let frame = resolve_table(&table, &ResolveConfig::default());
    assert_eq!(frame.layout.column_count, 3);
    assert_eq!(frame.layout.row_count, 3);
    assert_eq!(frame.cells.len(), 6);
    assert!(frame.cell(0, 2).is_none());
    assert!(frame.cell(2, 1).is_none());
    assert!(frame.validate().is_ok());

    let slots: Vec<(usize, usize)> = frame.cells.iter().map(|c| (c.row, c.column)).collect();
    assert_eq!(slots, vec![(0, 0), (0, 1), (1, 0), (1, 1), (1, 2), (2, 0)]);
}

#[test]
fn declared_columns_can_exceed_row_widths() {
    let mut table = Table::new(TablePosition::TopRight);
    for _ in 0..4 {
        table.add_column(Column::new().with_width(10));
    }
    table.add_row_with_cells([Cell::new("only")]);

    let frame = resolve_table(&table, &ResolveConfig::default());
    assert_eq!(frame.layout.column_count, 4);
    assert_eq!(frame.cells.len(), 1);
    // Column widths are not cascaded into cells.
    assert_eq!(frame.cells[0].width, None);
}

#[test]
fn per_cell_attributes_are_copied_without_cascading() {
    let mut table = Table::new(TablePosition::TopRight);
    let row = table.add_row(Row::new().with_height(40));
    row.add_cell(
        Cell::new("sized")
            .with_width(12)
            .with_height(5)
            .with_tooltip("details"),
    );
    row.add_cell(Cell::empty());

    let frame = resolve_table(&table, &ResolveConfig::default());
    let sized = &frame.cells[0];
    assert_eq!(sized.contents.as_deref(), Some("sized"));
    assert_eq!(sized.width, Some(12));
    assert_eq!(sized.height, Some(5));
    assert_eq!(sized.tooltip.as_deref(), Some("details"));

    let empty = &frame.cells[1];
    assert_eq!(empty.contents, None);
    assert_eq!(empty.height, None);
}

#[test]
fn layout_carries_table_level_attributes() {
    let frame_line = chart_table::LineStyle::new().with_color(Color::GRAY).with_width(2);
    let table = Table::new(TablePosition::BottomRight).with_style(
        bg(Color::BLUE)
            .with_frame(frame_line)
            .with_border(chart_table::LineStyle::new().with_width(1)),
    );

    let frame = resolve_table(&table, &ResolveConfig::default());
    assert_eq!(frame.layout.position, TablePosition::BottomRight);
    assert_eq!(frame.layout.background_color, Some(Color::BLUE));
    assert_eq!(frame.layout.frame, Some(frame_line));
    assert_eq!(frame.layout.border.and_then(|border| border.width), Some(1));
    assert!(frame.is_empty());
}

#[test]
fn resolution_is_deterministic_and_does_not_touch_the_document() {
    let shared = Arc::new(bg(Color::GREEN));
    let mut table = precedence_table();
    table.add_row_with_cells([
        Cell::new("x").with_shared_style(Arc::clone(&shared)),
        Cell::new("y").with_shared_style(Arc::clone(&shared)),
    ]);
    let before = table.clone();

    let config = ResolveConfig::default();
    let first = resolve_table(&table, &config);
    let second = resolve_table(&table, &config);
    assert_eq!(first, second);
    assert_eq!(table, before);

    let style = effective_style(&table, 1, 1).expect("style");
    assert!(Arc::ptr_eq(&style, &shared));
}
