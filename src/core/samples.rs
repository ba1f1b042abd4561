use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::types::{ConditionCode, HourlySample, TemperatureUnit};
use crate::error::ChartResult;

/// Validated, timeline-ordered hourly input of the chart.
///
/// Order is the order the host supplied; `hour_of_day` is a label, not a sort
/// key, so a series may start at any hour and wrap past midnight.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SampleSeries {
    samples: Vec<HourlySample>,
}

impl SampleSeries {
    /// Builds a series, rejecting the first invalid sample.
    pub fn new(samples: Vec<HourlySample>) -> ChartResult<Self> {
        for sample in &samples {
            sample.validate()?;
        }
        Ok(Self { samples })
    }

    /// Builds a series, dropping invalid samples instead of failing.
    #[must_use]
    pub fn from_lossy(samples: Vec<HourlySample>) -> Self {
        let original_count = samples.len();
        let samples: Vec<HourlySample> = samples
            .into_iter()
            .filter(|sample| match sample.validate() {
                Ok(()) => true,
                Err(err) => {
                    warn!(error = %err, "dropping invalid hourly sample");
                    false
                }
            })
            .collect();
        if samples.len() != original_count {
            warn!(
                original_count,
                kept_count = samples.len(),
                "hourly series contained invalid samples"
            );
        }
        Self { samples }
    }

    /// `hours` samples at a constant temperature, starting at `start_hour`.
    #[must_use]
    pub fn placeholder(unit: TemperatureUnit, start_hour: u8, hours: usize) -> Self {
        let temperature = unit.placeholder_temperature();
        let start_hour = usize::from(start_hour % 24);
        let samples = (0..hours)
            .map(|offset| {
                // Always < 24, so it fits in u8.
                let hour = ((start_hour + offset % 24) % 24) as u8;
                HourlySample::new(hour, temperature, ConditionCode::Unknown)
            })
            .collect();
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[HourlySample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Minimum and maximum temperature, `None` for an empty series.
    #[must_use]
    pub fn temperature_bounds(&self) -> Option<(f64, f64)> {
        let first = self.samples.first()?.temperature;
        Some(self.samples.iter().fold((first, first), |(min, max), s| {
            (min.min(s.temperature), max.max(s.temperature))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lossy_series_drops_invalid_samples() {
        let series = SampleSeries::from_lossy(vec![
            HourlySample::new(0, 10.0, ConditionCode::Cloudy),
            HourlySample::new(24, 11.0, ConditionCode::Cloudy),
            HourlySample::new(2, f64::NAN, ConditionCode::Cloudy),
            HourlySample::new(3, 12.0, ConditionCode::Rain),
        ]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.samples()[1].hour_of_day, 3);
    }

    #[test]
    fn strict_series_rejects_invalid_hour() {
        let result = SampleSeries::new(vec![HourlySample::new(30, 1.0, ConditionCode::Fog)]);
        assert!(result.is_err());
    }

    #[test]
    fn placeholder_wraps_past_midnight() {
        let series = SampleSeries::placeholder(TemperatureUnit::Fahrenheit, 22, 24);
        assert_eq!(series.len(), 24);
        assert_eq!(series.samples()[0].hour_of_day, 22);
        assert_eq!(series.samples()[2].hour_of_day, 0);
        assert!(series.samples().iter().all(|s| s.temperature == 68.0));
        assert_eq!(series.temperature_bounds(), Some((68.0, 68.0)));
    }

    #[test]
    fn placeholder_hours_stay_in_clock_range() {
        let series = SampleSeries::placeholder(TemperatureUnit::Celsius, 250, 72);
        assert_eq!(series.samples()[0].hour_of_day, 250 % 24);
        assert!(series.samples().iter().all(|s| s.hour_of_day < 24));
        assert!(SampleSeries::new(series.samples().to_vec()).is_ok());
    }

    #[test]
    fn bounds_of_empty_series_are_none() {
        assert_eq!(SampleSeries::default().temperature_bounds(), None);
    }
}
