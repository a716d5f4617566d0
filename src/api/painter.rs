use tracing::{debug, warn};

use crate::error::TableResult;
use crate::render::{TableFrame, TableRenderer};
use crate::resolve::{ResolveConfig, resolve_table};
use crate::table::Table;

/// Runs resolve + render for tables against one renderer.
///
/// Every call works on its own document; nothing is cached between tables.
pub struct TablePainter<R: TableRenderer> {
    renderer: R,
    config: ResolveConfig,
}

impl<R: TableRenderer> TablePainter<R> {
    pub fn new(renderer: R, config: ResolveConfig) -> TableResult<Self> {
        let config = config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> ResolveConfig {
        self.config
    }

    pub fn set_config(&mut self, config: ResolveConfig) -> TableResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    /// Resolves `table` without rendering it.
    #[must_use]
    pub fn build_frame(&self, table: &Table) -> TableFrame {
        resolve_table(table, &self.config)
    }

    /// Resolves and renders `table`, returning the frame that was rendered.
    pub fn paint(&mut self, table: &Table) -> TableResult<TableFrame> {
        let frame = self.build_frame(table);
        if let Err(err) = self.renderer.render(&frame) {
            warn!(
                error = %err,
                rows = frame.layout.row_count,
                columns = frame.layout.column_count,
                "table render failed"
            );
            return Err(err);
        }
        debug!(cells = frame.cells.len(), "table painted");
        Ok(frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
