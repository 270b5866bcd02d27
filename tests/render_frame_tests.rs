use chrono::{Duration, NaiveDate};
use zoomline::api::{
    ChartEngine, ChartEngineConfig, DateLabelFormatter, InvalidationTopic, RenderStyle,
};
use zoomline::core::{DataPoint, Viewport};
use zoomline::render::{CanvasKind, Color, NullRenderer, TextHAlign};
use zoomline::ChartError;

fn engine_with_data() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(800, 500));
    let mut engine = ChartEngine::new(NullRenderer::default(), NullRenderer::default(), config)
        .expect("engine init");
    let origin = NaiveDate::from_ymd_opt(2024, 1, 20).expect("valid date");
    engine.set_data(
        (0..40)
            .map(|i| DataPoint::new(origin + Duration::days(i), 50.0 + (i % 5) as f64 * 3.0))
            .collect(),
    );
    engine
}

#[test]
fn rendering_twice_produces_identical_frames() {
    let mut engine = engine_with_data();
    engine.main_wheel(400.0, -300.0);

    engine.render().expect("first render");
    let main_first = engine.main_renderer().last_frame.clone();
    let overview_first = engine.overview_renderer().last_frame.clone();

    engine.render().expect("second render");
    assert_eq!(engine.main_renderer().last_frame, main_first);
    assert_eq!(engine.overview_renderer().last_frame, overview_first);
    assert_eq!(engine.main_renderer().render_count, 2);
}

#[test]
fn many_updates_in_one_turn_repaint_each_canvas_once() {
    let mut engine = engine_with_data();
    engine.render().expect("initial render");
    assert!(engine.pending_invalidation().is_none());

    engine.main_wheel(400.0, -100.0);
    engine.main_wheel(420.0, -100.0);
    engine.main_pointer_down(400.0);
    engine.main_pointer_move(380.0);
    engine.main_pointer_move(360.0);
    engine.main_pointer_up();

    let pending = engine.pending_invalidation();
    assert!(pending.contains_topic(InvalidationTopic::Transform));
    assert!(pending.contains_topic(InvalidationTopic::Brush));

    let outcome = engine.render_if_invalidated().expect("render");
    assert!(outcome.main && outcome.overview);
    assert_eq!(engine.main_renderer().render_count, 2);
    assert_eq!(engine.overview_renderer().render_count, 2);

    let idle = engine.render_if_invalidated().expect("idle render");
    assert!(!idle.any());
    assert_eq!(engine.main_renderer().render_count, 2);
    assert_eq!(engine.overview_renderer().render_count, 2);
}

#[test]
fn style_change_invalidates_both_canvases() {
    let mut engine = engine_with_data();
    engine.render().expect("initial render");

    let style = RenderStyle {
        series_line_width: 2.5,
        ..RenderStyle::default()
    };
    engine.set_render_style(style).expect("valid style");
    assert!(engine.needs_repaint(CanvasKind::Main));
    assert!(engine.needs_repaint(CanvasKind::Overview));

    let bad = RenderStyle {
        grid_line_width: -1.0,
        ..RenderStyle::default()
    };
    assert!(matches!(
        engine.set_render_style(bad),
        Err(ChartError::InvalidConfig(_))
    ));
    let bad_color = RenderStyle {
        brush_fill_color: Color::rgba(0.2, 0.4, 0.8, 1.5),
        ..RenderStyle::default()
    };
    assert!(matches!(
        engine.set_render_style(bad_color),
        Err(ChartError::InvalidConfig(_))
    ));
    assert_eq!(engine.render_style().series_line_width, 2.5);
}

#[test]
fn main_frame_uses_injected_date_labels() {
    let mut engine = engine_with_data();
    engine.set_date_labels(DateLabelFormatter::from_fns(
        |date| format!("d{}", date.format("%d")),
        |date| format!("m{}", date.format("%m")),
    ));

    let frame = engine.build_main_frame();
    let centered: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .collect();
    assert!(!centered.is_empty());
    assert!(
        centered
            .iter()
            .all(|text| text.text.starts_with('d') || text.text.starts_with('m'))
    );

    let days = centered.iter().filter(|text| text.text.starts_with('d')).count();
    let months = centered.iter().filter(|text| text.text.starts_with('m')).count();
    let firsts = centered.iter().filter(|text| text.text == "d01").count();
    assert!(days > 0);
    assert_eq!(months, firsts);
}

#[test]
fn value_labels_are_integers_left_of_axis() {
    let engine = engine_with_data();
    let frame = engine.build_main_frame();
    let plot_left = engine.layout().plot_x.0;

    let value_labels: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .collect();
    assert!(value_labels.len() >= 2);
    assert!(value_labels.len() <= 5);
    for label in value_labels {
        assert!(label.x < plot_left);
        label.text.parse::<i64>().expect("integer label");
    }
}

#[test]
fn main_polyline_covers_visible_slice_only() {
    let mut engine = engine_with_data();
    engine.zoom_to(4.0, NaiveDate::from_ymd_opt(2024, 2, 10).expect("valid date"));

    let frame = engine.build_main_frame();
    assert_eq!(frame.polylines.len(), 1);
    assert_eq!(frame.polylines[0].points.len(), engine.visible_points().len());

    let (left, right) = engine.layout().plot_x;
    let (top, bottom) = engine.layout().main_plot_y;
    for &(x, y) in &frame.polylines[0].points {
        assert!(x >= left - 1e-6 && x <= right + 1e-6);
        assert!(y >= top - 1e-6 && y <= bottom + 1e-6);
    }
}

#[test]
fn overview_frame_draws_full_series_and_brush() {
    let mut engine = engine_with_data();
    engine.select_overview_range(200.0, 400.0);

    let frame = engine.build_overview_frame();
    assert_eq!(frame.canvas, CanvasKind::Overview);
    assert_eq!(frame.viewport, Viewport::new(800, 80));
    assert_eq!(frame.polylines.len(), 1);
    assert_eq!(frame.polylines[0].points.len(), 40);

    // Selection body plus two handles.
    assert_eq!(frame.rects.len(), 3);
    let body = frame.rects[0];
    assert!((body.x - 200.0).abs() <= 1e-9);
    assert!((body.width - 200.0).abs() <= 1e-9);
    assert!(body.border_width > 0.0);
}

#[test]
fn collapsed_plot_yields_empty_frames() {
    let config = ChartEngineConfig::new(Viewport::new(60, 100));
    let mut engine = ChartEngine::new(NullRenderer::default(), NullRenderer::default(), config)
        .expect("engine init");
    engine.set_data(vec![DataPoint::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
        1.0,
    )]);

    assert!(engine.build_main_frame().is_empty());
    assert!(engine.build_overview_frame().is_empty());
    engine.render().expect("empty frames render");
}
