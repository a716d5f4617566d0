//! Cascade resolver: flattens a [`Table`] into a [`TableFrame`].
//!
//! Each occupied slot gets `cell → row → column → table` folded with
//! [`inherit`], so the most specific scope wins field by field. The pass is
//! pure; absent cells and columns are skipped, never reported.

mod config;

pub use config::ResolveConfig;

use std::sync::Arc;

#[cfg(feature = "parallel-resolve")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::render::{ResolvedCell, TableFrame, TableLayout};
use crate::style::{TableStyle, inherit};
use crate::table::{Cell, Row, Table};

/// Resolves every occupied cell of `table`.
#[must_use]
pub fn resolve_table(table: &Table, config: &ResolveConfig) -> TableFrame {
    let layout = table_layout(table);
    let column_count = layout.column_count;

    // Rows only read shared ancestor styles, so they resolve independently.
    #[cfg(feature = "parallel-resolve")]
    let cells: Vec<ResolvedCell> = {
        let per_row: Vec<Vec<ResolvedCell>> = table
            .rows
            .par_iter()
            .enumerate()
            .map(|(row_index, row)| resolve_row(table, config, row_index, row, column_count))
            .collect();
        per_row.into_iter().flatten().collect()
    };

    #[cfg(not(feature = "parallel-resolve"))]
    let cells: Vec<ResolvedCell> = table
        .rows
        .iter()
        .enumerate()
        .flat_map(|(row_index, row)| resolve_row(table, config, row_index, row, column_count))
        .collect();

    debug!(
        rows = layout.row_count,
        columns = layout.column_count,
        cells = cells.len(),
        "resolved table frame"
    );
    TableFrame { layout, cells }
}

/// Effective style of the cell at (`row`, `column`).
///
/// `None` when the slot is absent or when no scope sets any style.
#[must_use]
pub fn effective_style(table: &Table, row: usize, column: usize) -> Option<Arc<TableStyle>> {
    let row_node = table.rows.get(row)?;
    let cell = row_node.cell(column)?;
    cascade_cell_style(table, row_node, column, cell)
}

fn table_layout(table: &Table) -> TableLayout {
    let style = table.style.as_deref();
    TableLayout {
        position: table.position,
        column_count: table.rendered_column_count(),
        row_count: table.rendered_row_count(),
        background_color: style.and_then(|style| style.background_color),
        frame: style.and_then(|style| style.frame.as_deref().copied()),
        border: style.and_then(|style| style.border.as_deref().copied()),
    }
}

fn resolve_row(
    table: &Table,
    config: &ResolveConfig,
    row_index: usize,
    row: &Row,
    column_count: usize,
) -> Vec<ResolvedCell> {
    let mut out = Vec::with_capacity(row.cells.len());
    for column in 0..column_count {
        let Some(cell) = row.cell(column) else {
            trace!(row = row_index, column, "skip absent cell");
            continue;
        };
        out.push(resolve_cell(table, config, row_index, column, row, cell));
    }
    out
}

fn cascade_cell_style(
    table: &Table,
    row: &Row,
    column: usize,
    cell: &Cell,
) -> Option<Arc<TableStyle>> {
    let column_style = table.column(column).and_then(|column| column.style.as_ref());
    let style = inherit(cell.style.as_ref(), row.style.as_ref());
    let style = inherit(style.as_ref(), column_style);
    inherit(style.as_ref(), table.style.as_ref())
}

fn resolve_cell(
    table: &Table,
    config: &ResolveConfig,
    row_index: usize,
    column: usize,
    row: &Row,
    cell: &Cell,
) -> ResolvedCell {
    let style = cascade_cell_style(table, row, column, cell);
    let style = style.as_deref();
    let font = style.and_then(|style| style.font.as_deref());

    let background_color = style.and_then(|style| style.background_color);
    let foreground_color = font
        .and_then(|font| font.color)
        .unwrap_or_else(|| config.contrast.contrast_for(background_color));
    let background_color = if config.suppress_inherited_background
        && background_color == table.background_color()
    {
        None
    } else {
        background_color
    };

    ResolvedCell {
        row: row_index,
        column,
        foreground_color,
        contents: cell.contents.clone(),
        background_color,
        font_size: font.and_then(|font| font.size),
        font_family: font.and_then(|font| font.family.clone()),
        horizontal_align: style.and_then(|style| style.horizontal_align),
        vertical_align: style.and_then(|style| style.vertical_align),
        width: cell.width,
        height: cell.height,
        tooltip: cell.tooltip.clone(),
    }
}
