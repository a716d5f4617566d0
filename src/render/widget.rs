use tracing::trace;

use crate::color::Color;
use crate::error::{TableError, TableResult};
use crate::render::{ResolvedCell, TableFrame, TableLayout, TableRenderer};
use crate::style::{HorizontalAlign, TextSize, VerticalAlign};

/// One per-cell setter call against a host widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellAttribute<'a> {
    Text(&'a str),
    BackgroundColor(Color),
    TextColor(Color),
    TextSize(TextSize),
    FontFamily(&'a str),
    HorizontalAlign(HorizontalAlign),
    VerticalAlign(VerticalAlign),
    Width(u32),
    Height(u32),
    Tooltip(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellAttributeKind {
    Text,
    BackgroundColor,
    TextColor,
    TextSize,
    FontFamily,
    HorizontalAlign,
    VerticalAlign,
    Width,
    Height,
    Tooltip,
}

impl CellAttribute<'_> {
    #[must_use]
    pub fn kind(&self) -> CellAttributeKind {
        match self {
            Self::Text(_) => CellAttributeKind::Text,
            Self::BackgroundColor(_) => CellAttributeKind::BackgroundColor,
            Self::TextColor(_) => CellAttributeKind::TextColor,
            Self::TextSize(_) => CellAttributeKind::TextSize,
            Self::FontFamily(_) => CellAttributeKind::FontFamily,
            Self::HorizontalAlign(_) => CellAttributeKind::HorizontalAlign,
            Self::VerticalAlign(_) => CellAttributeKind::VerticalAlign,
            Self::Width(_) => CellAttributeKind::Width,
            Self::Height(_) => CellAttributeKind::Height,
            Self::Tooltip(_) => CellAttributeKind::Tooltip,
        }
    }
}

/// Imperative table widget owned by the host.
///
/// The widget is created once per frame with a fixed grid, then receives
/// setter calls for occupied cells only.
pub trait TableWidget {
    fn create(&mut self, layout: &TableLayout) -> TableResult<()>;
    fn set(&mut self, row: usize, column: usize, attribute: CellAttribute<'_>) -> TableResult<()>;
}

/// Adapter that replays a [`TableFrame`] as setter calls on a [`TableWidget`].
#[derive(Debug, Default)]
pub struct WidgetRenderer<W: TableWidget> {
    widget: W,
}

impl<W: TableWidget> WidgetRenderer<W> {
    #[must_use]
    pub fn new(widget: W) -> Self {
        Self { widget }
    }

    #[must_use]
    pub fn widget(&self) -> &W {
        &self.widget
    }

    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.widget
    }

    fn apply_cell(&mut self, cell: &ResolvedCell) -> TableResult<()> {
        let (row, column) = (cell.row, cell.column);
        let widget = &mut self.widget;

        if let Some(text) = cell.contents.as_deref() {
            widget.set(row, column, CellAttribute::Text(text))?;
        }
        if let Some(color) = cell.background_color {
            widget.set(row, column, CellAttribute::BackgroundColor(color))?;
        }
        widget.set(row, column, CellAttribute::TextColor(cell.foreground_color))?;
        if let Some(size) = cell.font_size {
            widget.set(row, column, CellAttribute::TextSize(size))?;
        }
        if let Some(family) = cell.font_family.as_deref() {
            widget.set(row, column, CellAttribute::FontFamily(family))?;
        }
        if let Some(align) = cell.horizontal_align {
            widget.set(row, column, CellAttribute::HorizontalAlign(align))?;
        }
        if let Some(align) = cell.vertical_align {
            widget.set(row, column, CellAttribute::VerticalAlign(align))?;
        }
        if let Some(width) = cell.width {
            widget.set(row, column, CellAttribute::Width(width))?;
        }
        if let Some(height) = cell.height {
            widget.set(row, column, CellAttribute::Height(height))?;
        }
        if let Some(tooltip) = cell.tooltip.as_deref() {
            widget.set(row, column, CellAttribute::Tooltip(tooltip))?;
        }
        Ok(())
    }
}

impl<W: TableWidget> TableRenderer for WidgetRenderer<W> {
    fn render(&mut self, frame: &TableFrame) -> TableResult<()> {
        frame.validate()?;
        self.widget.create(&frame.layout)?;
        for cell in &frame.cells {
            trace!(row = cell.row, column = cell.column, "apply cell");
            self.apply_cell(cell)?;
        }
        Ok(())
    }
}

/// One setter call captured by [`RecordingWidget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedCall {
    pub row: usize,
    pub column: usize,
    pub kind: CellAttributeKind,
}

/// Headless widget that enforces grid bounds and records every setter call.
#[derive(Debug, Default)]
pub struct RecordingWidget {
    layout: Option<TableLayout>,
    calls: Vec<RecordedCall>,
}

impl RecordingWidget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn layout(&self) -> Option<&TableLayout> {
        self.layout.as_ref()
    }

    #[must_use]
    pub fn calls(&self) -> &[RecordedCall] {
        &self.calls
    }

    #[must_use]
    pub fn count(&self, kind: CellAttributeKind) -> usize {
        self.calls.iter().filter(|call| call.kind == kind).count()
    }

    #[must_use]
    pub fn calls_for(&self, row: usize, column: usize) -> Vec<CellAttributeKind> {
        self.calls
            .iter()
            .filter(|call| call.row == row && call.column == column)
            .map(|call| call.kind)
            .collect()
    }
}

impl TableWidget for RecordingWidget {
    fn create(&mut self, layout: &TableLayout) -> TableResult<()> {
        self.layout = Some(*layout);
        self.calls.clear();
        Ok(())
    }

    fn set(&mut self, row: usize, column: usize, attribute: CellAttribute<'_>) -> TableResult<()> {
        let layout = self.layout.as_ref().ok_or_else(|| {
            TableError::InvalidData("widget cell set before widget creation".to_owned())
        })?;
        if !layout.contains(row, column) {
            return Err(TableError::CellOutOfRange {
                row,
                column,
                row_count: layout.row_count,
                column_count: layout.column_count,
            });
        }
        self.calls.push(RecordedCall {
            row,
            column,
            kind: attribute.kind(),
        });
        Ok(())
    }
}
