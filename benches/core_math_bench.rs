use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use trend_chart::api::{ChartEngine, ChartEngineConfig};
use trend_chart::core::{
    ChartGeometry, ConditionCode, DEFAULT_HIT_TEST_WINDOW, DEFAULT_RESOLUTION, DEFAULT_TENSION,
    HourlySample, SampleSeries, TemperatureUnit, Viewport, build_curve, interpolate_dense_series,
    map_screen_points, nearest_index,
};
use trend_chart::interaction::PointerPhase;
use trend_chart::render::NullRenderer;

fn day_series() -> SampleSeries {
    let samples = (0..24u8)
        .map(|h| {
            let t = 18.0 + 7.0 * (f64::from(h) / 24.0 * std::f64::consts::TAU).sin();
            HourlySample::new(h, t, ConditionCode::Cloudy)
        })
        .collect();
    SampleSeries::new(samples).expect("valid series")
}

fn geometry(viewport: Viewport) -> ChartGeometry {
    ChartGeometry {
        width: viewport.width,
        height: viewport.height,
        padding_top: 60.0,
        padding_bottom: 20.0,
        padding_horizontal: 50.0,
        min_value_buffer: 0.5,
        max_value_buffer: 0.1,
    }
}

fn bench_interpolation_24h(c: &mut Criterion) {
    let series = day_series();
    c.bench_function("interpolation_24h", |b| {
        b.iter(|| interpolate_dense_series(black_box(&series), DEFAULT_RESOLUTION))
    });
}

fn bench_mapping_and_curve_24h(c: &mut Criterion) {
    let series = day_series();
    let dense = interpolate_dense_series(&series, DEFAULT_RESOLUTION);
    let bounds = series.temperature_bounds().expect("bounds");
    let viewport = Viewport::new(1080.0, 400.0);
    let geometry = geometry(viewport);

    c.bench_function("map_screen_points_24h", |b| {
        b.iter(|| map_screen_points(black_box(&dense), bounds, geometry))
    });

    let points = map_screen_points(&dense, bounds, geometry);
    c.bench_function("build_curve_24h", |b| {
        b.iter(|| build_curve(black_box(&points), viewport, DEFAULT_TENSION))
    });
}

fn bench_hit_test_24h(c: &mut Criterion) {
    let series = day_series();
    let dense = interpolate_dense_series(&series, DEFAULT_RESOLUTION);
    let bounds = series.temperature_bounds().expect("bounds");
    let viewport = Viewport::new(1080.0, 400.0);
    let points = map_screen_points(&dense, bounds, geometry(viewport));

    c.bench_function("nearest_index_24h", |b| {
        b.iter(|| {
            nearest_index(
                black_box(613.0),
                viewport.width,
                &points,
                DEFAULT_HIT_TEST_WINDOW,
            )
        })
    });
}

fn bench_engine_drag_24h(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1080.0, 400.0));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_default_data_from_hour(TemperatureUnit::Celsius, 6);
    engine.on_pointer_event(100.0, 200.0, PointerPhase::Down);

    let mut x = 100.0;
    c.bench_function("engine_drag_move_24h", |b| {
        b.iter(|| {
            x = if x > 1_000.0 { 100.0 } else { x + 3.0 };
            engine.on_pointer_event(black_box(x), 200.0, PointerPhase::Move);
            engine.render_if_needed().expect("render")
        })
    });
}

criterion_group!(
    benches,
    bench_interpolation_24h,
    bench_mapping_and_curve_24h,
    bench_hit_test_24h,
    bench_engine_drag_24h
);
criterion_main!(benches);
