use crate::core::samples::SampleSeries;
use crate::core::types::DenseSample;

/// Dense samples generated per hourly sample unless configured otherwise.
pub const DEFAULT_RESOLUTION: u32 = 60;

/// Upper bound on samples per hour accepted by the engine config (one per second).
pub const MAX_RESOLUTION: u32 = 3_600;

/// Expands hourly samples into a dense, linearly interpolated series.
///
/// Hour `i` contributes `resolution` samples running from `t[i]` towards
/// `t[i + 1]`; the last hour has no successor and stays flat. Condition and
/// daylight flags are carried over from the source hour unchanged.
///
/// This only interpolates values. Visual smoothing is a separate, geometric
/// stage (see `build_curve`).
#[must_use]
pub fn interpolate_dense_series(series: &SampleSeries, resolution: u32) -> Vec<DenseSample> {
    let samples = series.samples();
    if samples.is_empty() || resolution == 0 {
        return Vec::new();
    }

    let steps = f64::from(resolution);
    let mut dense = Vec::with_capacity(samples.len() * resolution as usize);
    for (index, sample) in samples.iter().enumerate() {
        let current = sample.temperature;
        let next = samples.get(index + 1).map_or(current, |s| s.temperature);
        let delta = next - current;

        for minute in 0..resolution {
            let t = f64::from(minute) / steps;
            dense.push(DenseSample {
                source_hour_index: index,
                hour_of_day: sample.hour_of_day,
                minute_offset: minute,
                temperature: current + delta * t,
                condition: sample.condition,
                is_daylight: sample.is_daylight,
            });
        }
    }
    dense
}
