//! Declarative table document.
//!
//! The tree is built append-only by the caller and handed to the resolver as
//! is. Nothing here validates shape: rows may hold different cell counts and
//! columns may be declared for only part of the grid.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::style::TableStyle;

/// Screen anchor of a table widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TablePosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Arc<TableStyle>>,
    /// Kept for hosts that size columns themselves; never cascaded to cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl Column {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = Some(Arc::new(style));
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Arc<TableStyle>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl Cell {
    #[must_use]
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// A cell without text; it still occupies its slot and gets styled.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = Some(Arc::new(style));
        self
    }

    /// Shares an existing style record instead of allocating a new one.
    #[must_use]
    pub fn with_shared_style(mut self, style: Arc<TableStyle>) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    #[serde(default)]
    pub cells: Vec<Cell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Arc<TableStyle>>,
    /// Kept for hosts that size rows themselves; never cascaded to cells.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Row {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = Some(Arc::new(style));
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Appends `cell` and returns it for further in-place edits.
    pub fn add_cell(&mut self, cell: Cell) -> &mut Cell {
        self.cells.push(cell);
        let last = self.cells.len() - 1;
        &mut self.cells[last]
    }

    #[must_use]
    pub fn cell(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub position: TablePosition,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Arc<TableStyle>>,
}

impl Table {
    #[must_use]
    pub fn new(position: TablePosition) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = Some(Arc::new(style));
        self
    }

    /// Appends `column` and returns it for further in-place edits.
    pub fn add_column(&mut self, column: Column) -> &mut Column {
        self.columns.push(column);
        let last = self.columns.len() - 1;
        &mut self.columns[last]
    }

    /// Appends `row` and returns it for further in-place edits.
    pub fn add_row(&mut self, row: Row) -> &mut Row {
        self.rows.push(row);
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Appends an unstyled row pre-populated with `cells`.
    pub fn add_row_with_cells(&mut self, cells: impl IntoIterator<Item = Cell>) -> &mut Row {
        self.add_row(Row {
            cells: cells.into_iter().collect(),
            ..Row::default()
        })
    }

    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Number of columns the widget must allocate: the larger of the declared
    /// columns and the widest row.
    #[must_use]
    pub fn rendered_column_count(&self) -> usize {
        let widest_row = self.rows.iter().map(|row| row.cells.len()).max().unwrap_or(0);
        self.columns.len().max(widest_row)
    }

    #[must_use]
    pub fn rendered_row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn background_color(&self) -> Option<Color> {
        self.style.as_ref().and_then(|style| style.background_color)
    }
}
