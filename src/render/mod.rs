mod frame;
mod null_renderer;
mod widget;

pub use frame::{ResolvedCell, TableFrame, TableLayout};
pub use null_renderer::NullRenderer;
pub use widget::{
    CellAttribute, CellAttributeKind, RecordedCall, RecordingWidget, TableWidget, WidgetRenderer,
};

use crate::error::TableResult;

/// Contract implemented by any table rendering backend.
///
/// Backends receive a fully resolved, deterministic `TableFrame` so painting
/// code stays isolated from the document model and the style cascade.
pub trait TableRenderer {
    fn render(&mut self, frame: &TableFrame) -> TableResult<()>;
}
