use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{TableError, TableResult};
use crate::style::{HorizontalAlign, LineStyle, TextSize, VerticalAlign};
use crate::table::TablePosition;

/// Table-wide attributes used to create the host widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableLayout {
    pub position: TablePosition,
    pub column_count: usize,
    pub row_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<LineStyle>,
}

impl TableLayout {
    #[must_use]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.row_count && column < self.column_count
    }
}

/// Final attributes of one occupied cell slot.
///
/// `foreground_color` is always set; every other attribute is applied only
/// when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedCell {
    pub row: usize,
    pub column: usize,
    pub foreground_color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<TextSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_align: Option<HorizontalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<VerticalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

/// Backend-agnostic result of one resolve pass, cells in row-major order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFrame {
    pub layout: TableLayout,
    pub cells: Vec<ResolvedCell>,
}

impl TableFrame {
    #[must_use]
    pub fn new(layout: TableLayout) -> Self {
        Self {
            layout,
            cells: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_cell(mut self, cell: ResolvedCell) -> Self {
        self.cells.push(cell);
        self
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&ResolvedCell> {
        self.cells
            .iter()
            .find(|cell| cell.row == row && cell.column == column)
    }

    /// Number of cells that carry an explicit background assignment.
    #[must_use]
    pub fn background_assignment_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.background_color.is_some())
            .count()
    }

    pub fn validate(&self) -> TableResult<()> {
        for cell in &self.cells {
            if !self.layout.contains(cell.row, cell.column) {
                return Err(TableError::CellOutOfRange {
                    row: cell.row,
                    column: cell.column,
                    row_count: self.layout.row_count,
                    column_count: self.layout.column_count,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
