//! trend-chart: interactive hourly temperature trend chart engine.
//!
//! Hourly samples are expanded into a dense per-minute series, mapped into
//! screen space and turned into a smooth stroke and a shaded area. A small
//! pointer state machine drives a sticky selection with an indicator and a
//! floating tooltip. Drawing is left to a host-provided `Renderer`.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartState};
pub use error::{ChartError, ChartResult};
