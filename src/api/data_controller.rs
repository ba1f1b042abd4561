use chrono::{Timelike, Utc};
use tracing::{debug, warn};

use crate::core::{
    ForecastZone, HourForecast, HourlySample, SampleSeries, TemperatureUnit, Viewport,
};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;

/// Hours of placeholder data shown while loading.
pub const PLACEHOLDER_HOURS: usize = 24;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces hourly data and recomputes everything.
    ///
    /// Samples must already be localized to `timezone_id` and expressed in
    /// `unit`. Invalid samples are dropped. The selection is kept and only
    /// clamped if it no longer fits the new series.
    pub fn set_data(
        &mut self,
        samples: Vec<HourlySample>,
        timezone_id: impl Into<String>,
        unit: TemperatureUnit,
    ) {
        let original_count = samples.len();
        let series = SampleSeries::from_lossy(samples);
        let timezone_id = timezone_id.into();
        debug!(
            original_count,
            kept_count = series.len(),
            timezone_id = %timezone_id,
            ?unit,
            "set hourly data"
        );
        self.input.series = series;
        self.input.timezone_id = timezone_id;
        self.input.unit = unit;
        self.rebuild_state();
    }

    /// Localizes raw forecast records to `timezone_id` and replaces the data.
    ///
    /// `timezone_id` is an IANA zone id or a fixed UTC offset. On error the
    /// current data is left untouched.
    pub fn set_forecast(
        &mut self,
        forecast: &[HourForecast],
        timezone_id: &str,
        unit: TemperatureUnit,
    ) -> ChartResult<()> {
        let zone = ForecastZone::parse(timezone_id)?;
        let samples = zone.localize(forecast, unit)?;
        self.set_data(samples, timezone_id, unit);
        Ok(())
    }

    /// Loads a flat placeholder day starting at the current UTC hour.
    pub fn set_default_data(&mut self, unit: TemperatureUnit) {
        let start_hour = Utc::now().hour() as u8;
        self.set_default_data_from_hour(unit, start_hour);
    }

    /// Loads a flat placeholder day starting at `start_hour`.
    pub fn set_default_data_from_hour(&mut self, unit: TemperatureUnit, start_hour: u8) {
        debug!(start_hour, ?unit, "set placeholder data");
        self.input.series = SampleSeries::placeholder(unit, start_hour, PLACEHOLDER_HOURS);
        self.input.timezone_id = "UTC".to_owned();
        self.input.unit = unit;
        self.rebuild_state();
    }

    /// Drops all data and any in-flight gesture; nothing is drawn until new
    /// data arrives.
    pub fn clear_data(&mut self) {
        debug!("clear hourly data");
        self.input.series = SampleSeries::default();
        self.input_controller.reset();
        self.rebuild_state();
    }

    /// Applies a new viewport size and recomputes geometry, paths and tooltip.
    ///
    /// Non-finite or negative sizes are treated as zero. A zero-sized viewport
    /// clears all screen geometry until a valid size arrives.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        let viewport = Viewport::new(sanitize_extent(width), sanitize_extent(height));
        if viewport != Viewport::new(width, height) {
            warn!(width, height, "sanitized invalid viewport size");
        }
        debug!(width = viewport.width, height = viewport.height, "resize chart");
        self.viewport = viewport;
        self.rebuild_state();
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
