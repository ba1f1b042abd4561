pub mod coordinate_mapper;
pub mod curve;
pub mod forecast;
pub mod format;
pub mod interpolation;
pub mod samples;
pub mod tooltip;
pub mod types;

pub use coordinate_mapper::{ChartGeometry, map_screen_points};
pub use curve::{
    ChartPath, CurveGeometry, DEFAULT_TENSION, PathCommand, build_curve, segment_control_points,
};
pub use forecast::{ForecastZone, HourForecast, localize_forecast, parse_utc_offset};
pub use format::{format_clock_time, format_temperature, minute_of_hour};
pub use hit_test::{DEFAULT_HIT_TEST_WINDOW, nearest_index, nearest_index_bruteforce};
pub use interpolation::{DEFAULT_RESOLUTION, MAX_RESOLUTION, interpolate_dense_series};
pub use samples::SampleSeries;
pub use tooltip::{TooltipRect, TooltipSize, position_tooltip};
pub use types::{
    ConditionCode, DenseSample, HourlySample, ScreenPoint, TemperatureUnit, Viewport,
};
