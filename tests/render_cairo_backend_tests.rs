#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use trend_chart::ChartError;
use trend_chart::api::{ChartEngine, ChartEngineConfig};
use trend_chart::core::{ConditionCode, HourlySample, TemperatureUnit, Viewport};
use trend_chart::render::{CairoRenderer, Color};

fn samples() -> Vec<HourlySample> {
    [18.0, 21.5, 24.0, 22.0, 19.5, 17.0]
        .into_iter()
        .enumerate()
        .map(|(i, t)| HourlySample::new(9 + i as u8, t, ConditionCode::Cloudy))
        .collect()
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::Render(_)));
}

#[test]
fn cairo_renderer_draws_area_curve_indicator_and_tooltip() {
    let renderer = CairoRenderer::new(640, 240).expect("renderer");
    let config = ChartEngineConfig::new(Viewport::new(640.0, 240.0));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.set_data(samples(), "UTC", TemperatureUnit::Celsius);
    engine.set_selected_hour(2, 0);

    engine.render().expect("render");
    let stats = engine.into_renderer().last_stats();

    assert_eq!(stats.fills_drawn, 1);
    assert_eq!(stats.strokes_drawn, 1);
    assert_eq!(stats.indicators_drawn, 1);
    assert_eq!(stats.tooltips_drawn, 1);
    // 360 dense points: stroke n + 2, fill n + 5.
    assert_eq!(stats.path_commands, 362 + 365);
}

#[test]
fn cairo_renderer_skips_geometry_without_data() {
    let renderer = CairoRenderer::new(320, 200).expect("renderer");
    let config = ChartEngineConfig::new(Viewport::new(320.0, 200.0));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");

    engine.render().expect("render");
    let stats = engine.into_renderer().last_stats();
    assert_eq!(stats.fills_drawn, 0);
    assert_eq!(stats.strokes_drawn, 0);
    assert_eq!(stats.tooltips_drawn, 0);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let mut renderer = CairoRenderer::new(400, 220).expect("renderer");
    renderer.set_clear_color(None).expect("clear color");
    let config = ChartEngineConfig::new(Viewport::new(400.0, 220.0));
    let mut engine = ChartEngine::new(renderer, config).expect("engine init");
    engine.set_data(samples(), "UTC", TemperatureUnit::Celsius);

    let surface = ImageSurface::create(Format::ARgb32, 400, 220).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");
    assert!(!engine.needs_redraw());

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_stats().strokes_drawn, 1);
}

#[test]
fn cairo_renderer_rejects_invalid_clear_color() {
    let mut renderer = CairoRenderer::new(100, 100).expect("renderer");
    assert!(renderer.set_clear_color(Some(Color::rgba(1.5, 0.0, 0.0, 1.0))).is_err());
}
