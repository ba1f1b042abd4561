use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Drawable area of the chart in host pixels.
///
/// A zero-sized viewport is legal: the engine keeps its data but skips all
/// geometry until a non-empty size arrives.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Temperature shown while real data is loading.
    #[must_use]
    pub const fn placeholder_temperature(self) -> f64 {
        match self {
            Self::Celsius => 20.0,
            Self::Fahrenheit => 68.0,
        }
    }
}

/// Weather condition attached to each hourly sample.
///
/// Classification happens upstream; the chart only carries the code through to
/// the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConditionCode {
    ClearDay,
    ClearNight,
    Cloudy,
    Rain,
    Snow,
    Ice,
    Thunder,
    Fog,
    #[default]
    Unknown,
}

impl ConditionCode {
    #[must_use]
    pub const fn icon_id(self) -> &'static str {
        match self {
            Self::ClearDay => "ic_clear_day",
            Self::ClearNight => "ic_clear_night",
            Self::Cloudy | Self::Unknown => "ic_cloudy",
            Self::Rain => "ic_rain",
            Self::Snow => "ic_snow",
            Self::Ice => "ic_ice",
            Self::Thunder => "ic_thunder",
            Self::Fog => "ic_fog",
        }
    }

    #[must_use]
    pub const fn display_text(self) -> &'static str {
        match self {
            Self::ClearDay => "Clear",
            Self::ClearNight => "Clear Night",
            Self::Cloudy => "Cloudy",
            Self::Rain => "Rainy",
            Self::Snow => "Snowy",
            Self::Ice => "Icy",
            Self::Thunder => "Thunderstorm",
            Self::Fog => "Foggy",
            Self::Unknown => "Unknown",
        }
    }
}

/// One localized hourly reading as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    pub hour_of_day: u8,
    pub temperature: f64,
    pub condition: ConditionCode,
    pub is_daylight: bool,
}

impl HourlySample {
    #[must_use]
    pub const fn new(hour_of_day: u8, temperature: f64, condition: ConditionCode) -> Self {
        Self {
            hour_of_day,
            temperature,
            condition,
            is_daylight: true,
        }
    }

    #[must_use]
    pub const fn with_daylight(mut self, is_daylight: bool) -> Self {
        self.is_daylight = is_daylight;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.hour_of_day > 23 {
            return Err(ChartError::InvalidData(format!(
                "hour of day must be in 0..=23, got {}",
                self.hour_of_day
            )));
        }
        if !self.temperature.is_finite() {
            return Err(ChartError::InvalidData(
                "sample temperature must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One interpolated minute of the dense series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DenseSample {
    pub source_hour_index: usize,
    pub hour_of_day: u8,
    pub minute_offset: u32,
    pub temperature: f64,
    pub condition: ConditionCode,
    pub is_daylight: bool,
}
