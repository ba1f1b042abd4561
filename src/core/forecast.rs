//! Localization of raw hourly forecast records into chart samples.
//!
//! Forecast records carry UTC epochs. The chart labels each sample with the
//! wall-clock hour of the forecast location, given as an IANA zone id
//! (`Asia/Ho_Chi_Minh`) or a fixed offset (`+07:00`). Zone ids follow
//! daylight-saving transitions, so a day may skip or repeat an hour label.

use chrono::{DateTime, FixedOffset, TimeZone, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::core::types::{ConditionCode, HourlySample, TemperatureUnit};
use crate::error::{ChartError, ChartResult};

/// Decoded hourly forecast as returned by the weather backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourForecast {
    pub time_epoch: i64,
    pub condition: ConditionCode,
    pub temp_c: f64,
    pub temp_f: f64,
    pub is_day: bool,
}

impl HourForecast {
    #[must_use]
    pub fn temperature(self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.temp_c,
            TemperatureUnit::Fahrenheit => self.temp_f,
        }
    }

    /// Converts the record into a sample whose hour is local to `zone`.
    ///
    /// Temperatures are truncated to whole degrees, matching what the tooltip
    /// displays.
    pub fn localize<Z: TimeZone>(
        self,
        zone: &Z,
        unit: TemperatureUnit,
    ) -> ChartResult<HourlySample> {
        let utc = DateTime::from_timestamp(self.time_epoch, 0).ok_or_else(|| {
            ChartError::InvalidData(format!("forecast epoch out of range: {}", self.time_epoch))
        })?;
        // hour() is 0..=23.
        let hour = utc.with_timezone(zone).hour() as u8;
        let sample = HourlySample::new(hour, self.temperature(unit).trunc(), self.condition)
            .with_daylight(self.is_day);
        sample.validate()?;
        Ok(sample)
    }
}

/// Localizes a whole forecast, preserving order.
pub fn localize_forecast<Z: TimeZone>(
    forecast: &[HourForecast],
    zone: &Z,
    unit: TemperatureUnit,
) -> ChartResult<Vec<HourlySample>> {
    forecast
        .iter()
        .map(|entry| entry.localize(zone, unit))
        .collect()
}

/// Location time zone of a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastZone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl ForecastZone {
    /// Parses an IANA zone id, falling back to the fixed offset spellings of
    /// `parse_utc_offset`.
    pub fn parse(id: &str) -> ChartResult<Self> {
        match id.trim().parse::<Tz>() {
            Ok(tz) => Ok(Self::Named(tz)),
            Err(named_err) => parse_utc_offset(id).map(Self::Fixed).map_err(|_| {
                ChartError::InvalidData(format!("unknown time zone `{id}`: {named_err}"))
            }),
        }
    }

    pub fn localize(
        self,
        forecast: &[HourForecast],
        unit: TemperatureUnit,
    ) -> ChartResult<Vec<HourlySample>> {
        match self {
            Self::Named(tz) => localize_forecast(forecast, &tz, unit),
            Self::Fixed(offset) => localize_forecast(forecast, &offset, unit),
        }
    }
}

/// Parses `UTC`, `Z`, `+HH`, `+HHMM`, `+HH:MM` (optionally prefixed with `UTC`
/// or `GMT`) into a fixed offset.
pub fn parse_utc_offset(input: &str) -> ChartResult<FixedOffset> {
    let invalid = || ChartError::InvalidData(format!("unsupported utc offset: `{input}`"));

    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("UTC")
        .or_else(|| trimmed.strip_prefix("GMT"))
        .unwrap_or(trimmed);
    if body.is_empty() || body == "Z" {
        return FixedOffset::east_opt(0).ok_or_else(invalid);
    }

    let (sign, digits) = match body.as_bytes()[0] {
        b'+' => (1, &body[1..]),
        b'-' => (-1, &body[1..]),
        _ => return Err(invalid()),
    };
    let digits: String = digits.chars().filter(|c| *c != ':').collect();
    if digits.is_empty() || digits.len() > 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let (hours, minutes) = if digits.len() <= 2 {
        (digits.parse::<i32>().map_err(|_| invalid())?, 0)
    } else {
        let split = digits.len() - 2;
        (
            digits[..split].parse::<i32>().map_err(|_| invalid())?,
            digits[split..].parse::<i32>().map_err(|_| invalid())?,
        )
    };
    if hours > 18 || minutes > 59 {
        return Err(invalid());
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(invalid)
}
