use trend_chart::api::{
    ChartEngine, ChartEngineConfig, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot,
};
use trend_chart::core::{TemperatureUnit, Viewport};
use trend_chart::interaction::{InteractionMode, PointerPhase};
use trend_chart::render::NullRenderer;

#[test]
fn snapshot_reflects_engine_state() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(500.0, 250.0)),
    )
    .expect("engine init");
    engine.set_default_data_from_hour(TemperatureUnit::Celsius, 0);
    engine.on_pointer_event(250.0, 100.0, PointerPhase::Down);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.hourly_count, 24);
    assert_eq!(snapshot.dense_count, 1_440);
    assert_eq!(snapshot.point_count, 1_440);
    assert_eq!(snapshot.selected_index, engine.selected_index());
    assert_eq!(snapshot.interaction_mode, InteractionMode::Tracking);
    assert_eq!(snapshot.unit, TemperatureUnit::Celsius);
    assert_eq!(snapshot.indicator, engine.indicator());
}

#[test]
fn snapshot_json_contract_round_trips() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(500.0, 250.0)),
    )
    .expect("engine init");
    engine.set_default_data_from_hour(TemperatureUnit::Fahrenheit, 5);

    let snapshot = engine.snapshot();
    let json = snapshot.to_json_pretty().expect("serialize");
    assert!(json.contains(&format!("\"schema_version\": {ENGINE_SNAPSHOT_JSON_SCHEMA_V1}")));
    let parsed = EngineSnapshot::from_json_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let engine = ChartEngine::new(
        NullRenderer::default(),
        ChartEngineConfig::new(Viewport::new(500.0, 250.0)),
    )
    .expect("engine init");
    let json = engine
        .snapshot()
        .to_json_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 9");
    assert!(EngineSnapshot::from_json_str(&json).is_err());
}
