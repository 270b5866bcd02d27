use approx::assert_abs_diff_eq;
use chrono::{Duration, NaiveDate};
use zoomline::api::{ChartEngine, ChartEngineConfig, SyncSource};
use zoomline::core::primitives::date_to_unix_seconds;
use zoomline::core::{DataPoint, Viewport};
use zoomline::render::NullRenderer;

fn origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

fn engine_with_month() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(800, 500));
    let mut engine = ChartEngine::new(NullRenderer::default(), NullRenderer::default(), config)
        .expect("engine init");
    let points = (0..30)
        .map(|i| DataPoint::new(origin() + Duration::days(i), 10.0 + (i % 7) as f64))
        .collect();
    engine.set_data(points);
    engine
}

fn five_day_window() -> (f64, f64) {
    (
        date_to_unix_seconds(origin() + Duration::days(10)),
        date_to_unix_seconds(origin() + Duration::days(15)),
    )
}

#[test]
fn resize_preserves_visible_time_window() {
    let mut engine = engine_with_month();
    engine.show_date_range(origin() + Duration::days(10), origin() + Duration::days(15));

    let (start, end) = five_day_window();
    let before = engine.visible_time_range();
    assert_abs_diff_eq!(before.0, start, epsilon = 1e-3);
    assert_abs_diff_eq!(before.1, end, epsilon = 1e-3);

    engine.resize(Viewport::new(400, 500));
    assert!(engine.has_pending_resize());
    assert!(engine.flush_deferred());
    assert!(!engine.has_pending_resize());

    assert_eq!(engine.layout().plot_width(), 320.0);
    let after = engine.visible_time_range();
    assert_abs_diff_eq!(after.0, start, epsilon = 1e-3);
    assert_abs_diff_eq!(after.1, end, epsilon = 1e-3);
    assert_eq!(engine.last_sync_source(), Some(SyncSource::Resize));

    // Brush follows the new base scale.
    let base = engine.base_time_scale();
    let selection = engine.brush_selection();
    assert_abs_diff_eq!(selection.x0, base.time_to_pixel(start), epsilon = 1e-6);
    assert_abs_diff_eq!(selection.x1, base.time_to_pixel(end), epsilon = 1e-6);
}

#[test]
fn deferred_step_runs_once() {
    let mut engine = engine_with_month();
    engine.resize(Viewport::new(600, 400));
    assert!(engine.flush_deferred());
    assert!(!engine.flush_deferred());
}

#[test]
fn back_to_back_resizes_keep_first_capture() {
    let mut engine = engine_with_month();
    engine.show_date_range(origin() + Duration::days(10), origin() + Duration::days(15));

    engine.resize(Viewport::new(600, 500));
    engine.resize(Viewport::new(300, 500));
    engine.resize(Viewport::new(400, 500));
    assert!(engine.flush_deferred());

    let (start, end) = five_day_window();
    let after = engine.visible_time_range();
    assert_abs_diff_eq!(after.0, start, epsilon = 1e-3);
    assert_abs_diff_eq!(after.1, end, epsilon = 1e-3);
}

#[test]
fn render_if_invalidated_flushes_pending_resize() {
    let mut engine = engine_with_month();
    engine.show_date_range(origin() + Duration::days(10), origin() + Duration::days(15));
    engine.render().expect("initial render");

    engine.resize(Viewport::new(400, 500));
    let outcome = engine.render_if_invalidated().expect("render");
    assert!(outcome.main && outcome.overview);
    assert!(!engine.has_pending_resize());

    let frame = engine
        .main_renderer()
        .last_frame
        .clone()
        .expect("main frame");
    assert_eq!(frame.viewport, Viewport::new(400, 420));
}

#[test]
fn zero_size_container_keeps_capture_until_usable() {
    let mut engine = engine_with_month();
    engine.show_date_range(origin() + Duration::days(10), origin() + Duration::days(15));

    engine.resize(Viewport::new(0, 0));
    let outcome = engine.render_if_invalidated().expect("zero-size render");
    assert!(outcome.main && outcome.overview);
    assert!(engine.has_pending_resize());
    let empty = engine
        .main_renderer()
        .last_frame
        .clone()
        .expect("main frame");
    assert!(empty.is_empty());
    assert!(!engine.flush_deferred());

    engine.resize(Viewport::new(400, 500));
    assert!(engine.flush_deferred());
    let (start, end) = five_day_window();
    let after = engine.visible_time_range();
    assert_abs_diff_eq!(after.0, start, epsilon = 1e-3);
    assert_abs_diff_eq!(after.1, end, epsilon = 1e-3);
}

#[test]
fn set_data_drops_pending_capture() {
    let mut engine = engine_with_month();
    engine.show_date_range(origin() + Duration::days(10), origin() + Duration::days(15));
    engine.resize(Viewport::new(400, 500));

    engine.set_data(vec![
        DataPoint::new(origin(), 1.0),
        DataPoint::new(origin() + Duration::days(3), 2.0),
    ]);
    assert!(!engine.has_pending_resize());
    assert!(engine.transform().is_identity());
}

#[test]
fn engine_created_at_zero_size_shows_full_domain_once_sized() {
    let config = ChartEngineConfig::new(Viewport::new(0, 0));
    let mut engine = ChartEngine::new(NullRenderer::default(), NullRenderer::default(), config)
        .expect("engine init");
    engine.set_data(
        (0..10)
            .map(|i| DataPoint::new(origin() + Duration::days(i), i as f64))
            .collect(),
    );
    engine.render().expect("zero-size render");
    assert_eq!(engine.main_renderer().last_line_count, 0);

    engine.resize(Viewport::new(800, 500));
    engine.render().expect("render");
    assert_abs_diff_eq!(engine.transform().k, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(engine.transform().tx, 0.0, epsilon = 1e-6);
    assert_eq!(engine.visible_points().len(), 10);
    assert_eq!(engine.overview_renderer().last_polyline_vertex_count, 10);
}

#[test]
fn window_holds_between_resize_and_flush() {
    let mut engine = engine_with_month();
    engine.show_date_range(origin() + Duration::days(10), origin() + Duration::days(15));

    engine.resize(Viewport::new(400, 500));
    assert!(engine.has_pending_resize());
    let (start, end) = five_day_window();
    let pending = engine.visible_time_range();
    assert_abs_diff_eq!(pending.0, start, epsilon = 1e-3);
    assert_abs_diff_eq!(pending.1, end, epsilon = 1e-3);
}

#[test]
fn wheel_after_resize_is_not_overwritten_by_deferred_step() {
    let mut engine = engine_with_month();
    engine.show_date_range(origin() + Duration::days(10), origin() + Duration::days(15));
    engine.render().expect("initial render");

    engine.resize(Viewport::new(400, 500));
    assert!(engine.main_wheel(200.0, 1e5));
    assert!(!engine.has_pending_resize());
    assert_eq!(engine.last_sync_source(), Some(SyncSource::Zoom));
    assert!(engine.transform().is_identity());

    engine.render_if_invalidated().expect("render");
    assert!(engine.transform().is_identity());
    let domain = engine.time_domain().seconds();
    let after = engine.visible_time_range();
    assert_abs_diff_eq!(after.0, domain.0, epsilon = 1e-3);
    assert_abs_diff_eq!(after.1, domain.1, epsilon = 1e-3);
}

#[test]
fn brush_after_resize_applies_on_new_layout() {
    let mut engine = engine_with_month();
    engine.show_date_range(origin() + Duration::days(10), origin() + Duration::days(15));

    engine.resize(Viewport::new(400, 500));
    let (x0, x1) = engine.layout().plot_x;
    engine.select_overview_range(x0, (x0 + x1) * 0.5);
    assert!(!engine.has_pending_resize());
    assert_eq!(engine.last_sync_source(), Some(SyncSource::Brush));

    engine.render_if_invalidated().expect("render");
    let selection = engine.brush_selection();
    assert_abs_diff_eq!(selection.x0, x0, epsilon = 1e-6);
    assert_abs_diff_eq!(selection.x1, (x0 + x1) * 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(engine.transform().k, 2.0, epsilon = 1e-9);
}

#[test]
fn resize_drops_active_drags() {
    let mut engine = engine_with_month();
    engine.show_date_range(origin() + Duration::days(10), origin() + Duration::days(15));

    engine.main_pointer_down(400.0);
    let brush_mid = {
        let selection = engine.brush_selection();
        (selection.x0 + selection.x1) * 0.5
    };
    assert!(engine.overview_pointer_down(brush_mid).is_some());

    engine.resize(Viewport::new(400, 500));
    assert!(!engine.main_pointer_move(300.0));
    assert!(!engine.overview_pointer_move(brush_mid + 40.0));
    assert!(!engine.main_pointer_up());
    assert_eq!(engine.overview_pointer_up(), None);

    let (start, end) = five_day_window();
    let after = engine.visible_time_range();
    assert_abs_diff_eq!(after.0, start, epsilon = 1e-3);
    assert_abs_diff_eq!(after.1, end, epsilon = 1e-3);
}

#[test]
fn reset_drops_pending_capture() {
    let mut engine = engine_with_month();
    engine.show_date_range(origin() + Duration::days(10), origin() + Duration::days(15));
    engine.resize(Viewport::new(400, 500));

    engine.reset_zoom();
    assert!(!engine.has_pending_resize());
    assert!(!engine.flush_deferred());
    assert!(engine.transform().is_identity());
}
