mod chart_state;
mod data_controller;
mod engine;
mod engine_config;
mod interaction_controller;
mod render_frame_builder;
mod snapshot;
mod validation;

pub use chart_state::{ChartInput, ChartState, SelectionState, TooltipView};
pub use data_controller::PLACEHOLDER_HOURS;
pub use engine::ChartEngine;
pub use engine_config::{
    ChartEngineConfig, ChartStyle, CurveConfig, HitTestConfig, IndicatorConfig, PaddingConfig,
    ScaleConfig, TooltipConfig,
};
pub use render_frame_builder::build_render_frame;
pub use snapshot::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1};
