use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{
    ChartGeometry, CurveGeometry, DenseSample, SampleSeries, ScreenPoint, TemperatureUnit,
    TooltipRect, Viewport, build_curve, format_clock_time, format_temperature,
    interpolate_dense_series, map_screen_points, minute_of_hour, position_tooltip,
};

use super::ChartEngineConfig;

/// Host-provided input the derived state is computed from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartInput {
    pub series: SampleSeries,
    pub timezone_id: String,
    pub unit: TemperatureUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_index: usize,
}

/// Readout for the current selection, ready for the host to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipView {
    pub rect: TooltipRect,
    pub formatted_time: String,
    pub formatted_temperature: String,
    pub condition_icon_id: String,
}

/// Immutable snapshot of everything derived from input, layout and selection.
///
/// The engine never patches a snapshot in place: data, unit, config or
/// viewport changes rebuild it from scratch, and selection changes produce a
/// new snapshot sharing the unchanged dense/point/path buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub viewport: Viewport,
    pub geometry: ChartGeometry,
    pub dense: Arc<[DenseSample]>,
    pub points: Arc<[ScreenPoint]>,
    pub curve: Arc<CurveGeometry>,
    pub selection: SelectionState,
    pub indicator: Option<ScreenPoint>,
    pub tooltip: Option<TooltipView>,
}

impl ChartState {
    /// Computes the full state as a pure function of its inputs.
    ///
    /// `requested_selection` is clamped into the dense series when it is not
    /// empty; an empty series keeps it untouched for later data.
    #[must_use]
    pub fn build(
        input: &ChartInput,
        config: &ChartEngineConfig,
        viewport: Viewport,
        requested_selection: usize,
    ) -> Self {
        let geometry = chart_geometry(config, viewport);
        let dense: Arc<[DenseSample]> =
            interpolate_dense_series(&input.series, config.resolution).into();

        let (points, curve) = match input.series.temperature_bounds() {
            Some(bounds) if viewport.is_valid() => {
                let points = map_screen_points(&dense, bounds, geometry);
                let curve = build_curve(&points, viewport, config.curve.tension);
                (points, curve)
            }
            _ => (Vec::new(), CurveGeometry::empty()),
        };

        let base = Self {
            viewport,
            geometry,
            dense,
            points: points.into(),
            curve: Arc::new(curve),
            selection: SelectionState {
                selected_index: requested_selection,
            },
            indicator: None,
            tooltip: None,
        };
        base.with_selection(requested_selection, config)
    }

    /// Returns a snapshot with a new selection, reusing the derived buffers.
    #[must_use]
    pub fn with_selection(&self, requested: usize, config: &ChartEngineConfig) -> Self {
        let selected_index = clamp_selection(requested, self.dense.len());
        let indicator = self.points.get(selected_index).copied();
        let tooltip = indicator.and_then(|point| {
            let sample = self.dense.get(selected_index)?;
            Some(tooltip_view(point, sample, config, self.viewport))
        });

        Self {
            viewport: self.viewport,
            geometry: self.geometry,
            dense: Arc::clone(&self.dense),
            points: Arc::clone(&self.points),
            curve: Arc::clone(&self.curve),
            selection: SelectionState { selected_index },
            indicator,
            tooltip,
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selection.selected_index
    }

    #[must_use]
    pub fn selected_sample(&self) -> Option<&DenseSample> {
        self.dense.get(self.selection.selected_index)
    }

    /// `true` once there is something to draw.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.viewport.is_valid() && !self.points.is_empty()
    }
}

#[must_use]
fn chart_geometry(config: &ChartEngineConfig, viewport: Viewport) -> ChartGeometry {
    ChartGeometry {
        width: viewport.width,
        height: viewport.height,
        padding_top: config.padding.top,
        padding_bottom: config.padding.bottom,
        padding_horizontal: config.padding.horizontal,
        min_value_buffer: config.scale.min_value_buffer,
        max_value_buffer: config.scale.max_value_buffer,
    }
}

fn clamp_selection(requested: usize, dense_len: usize) -> usize {
    if dense_len == 0 {
        requested
    } else {
        requested.min(dense_len - 1)
    }
}

fn tooltip_view(
    point: ScreenPoint,
    sample: &DenseSample,
    config: &ChartEngineConfig,
    viewport: Viewport,
) -> TooltipView {
    let rect = position_tooltip(
        point,
        config.tooltip.size,
        config.indicator.radius,
        config.tooltip.margin,
        viewport.width,
    );
    let minute = minute_of_hour(sample.minute_offset, config.resolution);
    TooltipView {
        rect,
        formatted_time: format_clock_time(sample.hour_of_day, minute),
        formatted_temperature: format_temperature(sample.temperature),
        condition_icon_id: sample.condition.icon_id().to_owned(),
    }
}
