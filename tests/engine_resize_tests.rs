use approx::assert_abs_diff_eq;
use trend_chart::api::{ChartEngine, ChartEngineConfig};
use trend_chart::core::{ConditionCode, HourlySample, TemperatureUnit, Viewport};
use trend_chart::render::NullRenderer;

fn samples() -> Vec<HourlySample> {
    vec![
        HourlySample::new(6, 12.0, ConditionCode::Fog),
        HourlySample::new(7, 14.0, ConditionCode::Cloudy),
        HourlySample::new(8, 17.0, ConditionCode::ClearDay),
    ]
}

#[test]
fn zero_width_clears_geometry_and_valid_resize_recomputes_it() {
    let config = ChartEngineConfig::new(Viewport::new(600.0, 200.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(samples(), "UTC", TemperatureUnit::Celsius);
    assert_abs_diff_eq!(engine.points()[179].x, 550.0, epsilon = 1e-9);

    engine.on_resize(0.0, 200.0);
    assert!(engine.points().is_empty());
    assert!(engine.state().curve.is_empty());
    assert!(engine.indicator().is_none());
    assert!(engine.tooltip().is_none());
    assert_eq!(engine.dense_series().len(), 180);
    engine.render().expect("render is a no-op without a viewport");
    assert_eq!(engine.renderer().frames_rendered, 0);

    engine.on_resize(300.0, 200.0);
    assert_eq!(engine.points().len(), 180);
    assert_abs_diff_eq!(engine.points()[0].x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(engine.points()[179].x, 250.0, epsilon = 1e-9);
    assert!(engine.points().iter().all(|p| p.x <= 250.0 + 1e-9));
    assert!(engine.tooltip().is_some());
    assert!(engine.render_if_needed().expect("render"));
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn invalid_resize_values_are_treated_as_empty() {
    let config = ChartEngineConfig::new(Viewport::new(600.0, 200.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(samples(), "UTC", TemperatureUnit::Celsius);

    engine.on_resize(f64::NAN, -10.0);
    assert_eq!(engine.viewport(), Viewport::new(0.0, 0.0));
    assert!(engine.points().is_empty());
}

#[test]
fn resize_moves_tooltip_with_points() {
    let config = ChartEngineConfig::new(Viewport::new(600.0, 200.0)).with_tooltip_size(120.0, 72.0);
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_data(samples(), "UTC", TemperatureUnit::Celsius);
    engine.set_selected_index(179);
    let before = engine.tooltip().expect("tooltip").rect;
    // Centred at 550 the box would overflow; it is shifted flush with the edge.
    assert_abs_diff_eq!(before.x, 600.0 - 120.0, epsilon = 1e-9);

    engine.on_resize(900.0, 200.0);
    let after = engine.tooltip().expect("tooltip").rect;
    assert_abs_diff_eq!(after.x, 900.0 - 120.0, epsilon = 1e-9);
    assert_abs_diff_eq!(after.y, before.y, epsilon = 1e-9);
}

#[test]
fn engine_starts_without_viewport_until_first_resize() {
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    engine.set_data(samples(), "UTC", TemperatureUnit::Celsius);
    assert!(engine.points().is_empty());
    assert!(!engine.render_if_needed().expect("render"));

    engine.on_resize(400.0, 240.0);
    assert_eq!(engine.points().len(), 180);
}
