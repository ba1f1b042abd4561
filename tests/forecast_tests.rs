use trend_chart::api::{ChartEngine, ChartEngineConfig};
use trend_chart::core::{
    ConditionCode, ForecastZone, HourForecast, TemperatureUnit, Viewport, localize_forecast,
    parse_utc_offset,
};
use trend_chart::render::NullRenderer;

// 2024-06-01T00:00:00Z
const MIDNIGHT_UTC: i64 = 1_717_200_000;
// 2024-03-10T05:00:00Z, midnight in New York on the day clocks spring forward.
const NEW_YORK_DST_DAY: i64 = 1_710_046_800;

fn forecast_from(start_epoch: i64, hours: i64) -> Vec<HourForecast> {
    (0..hours)
        .map(|i| HourForecast {
            time_epoch: start_epoch + i * 3_600,
            condition: ConditionCode::Rain,
            temp_c: 24.8 + i as f64,
            temp_f: 76.6 + i as f64,
            is_day: false,
        })
        .collect()
}

fn forecast() -> Vec<HourForecast> {
    forecast_from(MIDNIGHT_UTC, 3)
}

fn build_engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(320.0, 200.0)),
    )
    .expect("engine init")
}

#[test]
fn localization_shifts_hours_into_offset() {
    let offset = parse_utc_offset("+07:00").expect("offset");
    let samples =
        localize_forecast(&forecast(), &offset, TemperatureUnit::Celsius).expect("localize");
    let hours: Vec<u8> = samples.iter().map(|s| s.hour_of_day).collect();
    assert_eq!(hours, vec![7, 8, 9]);
    assert_eq!(samples[0].temperature, 24.0);
    assert!(!samples[0].is_daylight);
}

#[test]
fn negative_offset_wraps_to_previous_day() {
    let offset = parse_utc_offset("UTC-05:00").expect("offset");
    let samples =
        localize_forecast(&forecast(), &offset, TemperatureUnit::Fahrenheit).expect("localize");
    let hours: Vec<u8> = samples.iter().map(|s| s.hour_of_day).collect();
    assert_eq!(hours, vec![19, 20, 21]);
    assert_eq!(samples[2].temperature, 78.0);
}

#[test]
fn iana_zone_id_localizes_hours() {
    let zone = ForecastZone::parse("Asia/Ho_Chi_Minh").expect("zone");
    let samples = zone
        .localize(&forecast(), TemperatureUnit::Celsius)
        .expect("localize");
    let hours: Vec<u8> = samples.iter().map(|s| s.hour_of_day).collect();
    assert_eq!(hours, vec![7, 8, 9]);
}

#[test]
fn named_zone_follows_daylight_saving_transition() {
    let zone = ForecastZone::parse("America/New_York").expect("zone");
    let samples = zone
        .localize(&forecast_from(NEW_YORK_DST_DAY, 5), TemperatureUnit::Celsius)
        .expect("localize");
    let hours: Vec<u8> = samples.iter().map(|s| s.hour_of_day).collect();
    // 02:00 does not exist on this day.
    assert_eq!(hours, vec![0, 1, 3, 4, 5]);

    let fixed = ForecastZone::parse("-05:00").expect("offset");
    let samples = fixed
        .localize(&forecast_from(NEW_YORK_DST_DAY, 5), TemperatureUnit::Celsius)
        .expect("localize");
    let hours: Vec<u8> = samples.iter().map(|s| s.hour_of_day).collect();
    assert_eq!(hours, vec![0, 1, 2, 3, 4]);
}

#[test]
fn engine_localizes_forecast_with_zone_id() {
    let mut engine = build_engine();
    engine
        .set_forecast(&forecast(), "Asia/Ho_Chi_Minh", TemperatureUnit::Celsius)
        .expect("set forecast");
    engine.set_selected_hour(0, 0);

    assert_eq!(engine.input().timezone_id, "Asia/Ho_Chi_Minh");
    let tooltip = engine.tooltip().expect("tooltip");
    assert_eq!(tooltip.formatted_time, "7:00 AM");
    assert_eq!(tooltip.formatted_temperature, "24°");
    assert_eq!(tooltip.condition_icon_id, "ic_rain");
}

#[test]
fn unknown_zone_id_leaves_engine_data_untouched() {
    let mut engine = build_engine();
    engine.set_default_data_from_hour(TemperatureUnit::Celsius, 3);
    assert!(
        engine
            .set_forecast(&forecast(), "Nowhere/Atlantis", TemperatureUnit::Celsius)
            .is_err()
    );
    assert_eq!(engine.input().series.len(), 24);
    assert_eq!(engine.input().timezone_id, "UTC");
}

#[test]
fn out_of_range_epoch_is_rejected() {
    let mut bad = forecast();
    bad[1].time_epoch = i64::MAX;
    let offset = parse_utc_offset("UTC").expect("offset");
    assert!(localize_forecast(&bad, &offset, TemperatureUnit::Celsius).is_err());
}
