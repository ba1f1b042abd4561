use serde::{Deserialize, Serialize};

use crate::core::{ScreenPoint, TemperatureUnit, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::ChartEngine;
use super::chart_state::TooltipView;

pub const ENGINE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable summary of the engine, for diagnostics and host-side tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub resolution: u32,
    pub unit: TemperatureUnit,
    pub timezone_id: String,
    pub hourly_count: usize,
    pub dense_count: usize,
    pub point_count: usize,
    pub selected_index: usize,
    pub interaction_mode: InteractionMode,
    pub indicator: Option<ScreenPoint>,
    pub tooltip: Option<TooltipView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: EngineSnapshot,
}

impl EngineSnapshot {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = EngineSnapshotJsonContractV1 {
            schema_version: ENGINE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let payload: EngineSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != ENGINE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.viewport,
            resolution: self.config.resolution,
            unit: self.input.unit,
            timezone_id: self.input.timezone_id.clone(),
            hourly_count: self.input.series.len(),
            dense_count: self.state.dense.len(),
            point_count: self.state.points.len(),
            selected_index: self.state.selected_index(),
            interaction_mode: self.input_controller.mode(),
            indicator: self.state.indicator,
            tooltip: self.state.tooltip.clone(),
        }
    }
}
