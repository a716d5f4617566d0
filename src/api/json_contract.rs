use serde::{Deserialize, Serialize};

use crate::error::{TableError, TableResult};
use crate::render::TableFrame;
use crate::table::Table;

pub const TABLE_FRAME_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFrameJsonContractV1 {
    pub schema_version: u32,
    pub frame: TableFrame,
}

impl TableFrame {
    pub fn to_json_contract_v1_pretty(&self) -> TableResult<String> {
        let payload = TableFrameJsonContractV1 {
            schema_version: TABLE_FRAME_JSON_SCHEMA_V1,
            frame: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TableError::InvalidData(format!("failed to serialize table frame contract v1: {e}"))
        })
    }

    /// Accepts either a bare frame or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> TableResult<Self> {
        if let Ok(frame) = serde_json::from_str::<TableFrame>(input) {
            return Ok(frame);
        }
        let payload: TableFrameJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TableError::InvalidData(format!("failed to parse table frame json payload: {e}"))
        })?;
        if payload.schema_version != TABLE_FRAME_JSON_SCHEMA_V1 {
            return Err(TableError::InvalidData(format!(
                "unsupported table frame schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.frame)
    }
}

impl Table {
    pub fn to_json_pretty(&self) -> TableResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TableError::InvalidData(format!("failed to serialize table: {e}")))
    }

    pub fn from_json_str(input: &str) -> TableResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TableError::InvalidData(format!("failed to parse table json: {e}")))
    }
}
