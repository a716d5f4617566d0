mod json_contract;
mod painter;

pub use json_contract::{TABLE_FRAME_JSON_SCHEMA_V1, TableFrameJsonContractV1};
pub use painter::TablePainter;
