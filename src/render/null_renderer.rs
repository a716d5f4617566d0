use crate::error::TableResult;
use crate::render::{TableFrame, TableRenderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frames so tests catch out-of-grid cells before a real
/// widget is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_cell_count: usize,
    pub last_background_count: usize,
}

impl TableRenderer for NullRenderer {
    fn render(&mut self, frame: &TableFrame) -> TableResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_cell_count = frame.cells.len();
        self.last_background_count = frame.background_assignment_count();
        Ok(())
    }
}
