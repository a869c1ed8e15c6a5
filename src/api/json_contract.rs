use serde::{Deserialize, Serialize};

use crate::core::Temporal;
use crate::error::{AxisError, AxisResult};

use super::{AxisSnapshot, TemporalAxis};

pub const AXIS_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: AxisSnapshot,
}

impl AxisSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> AxisResult<String> {
        let payload = AxisSnapshotJsonContractV1 {
            schema_version: AXIS_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> AxisResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<AxisSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: AxisSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            AxisError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != AXIS_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(AxisError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<T: Temporal> TemporalAxis<T> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> AxisResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
