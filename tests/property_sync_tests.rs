use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use zoomline::api::{
    ChartEngine, ChartEngineConfig, SelectionAnchor, selection_to_transform,
    transform_to_selection,
};
use zoomline::core::{DataPoint, Viewport, ZoomTransform, visible_slice_bounds};
use zoomline::interaction::BrushSelection;
use zoomline::render::NullRenderer;

const PLOT: (f64, f64) = (50.0, 770.0);
const EXTENT: (f64, f64) = (1.0, 30.0);

fn origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 6, 1).expect("valid date")
}

#[derive(Debug, Clone, Copy)]
enum Gesture {
    Wheel { x: f64, delta_y: f64 },
    Pan { from: f64, to: f64 },
    Brush { down: f64, to: f64 },
}

fn gesture_strategy() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        (0.0f64..800.0, -600.0f64..600.0).prop_map(|(x, delta_y)| Gesture::Wheel { x, delta_y }),
        (0.0f64..800.0, -400.0f64..400.0).prop_map(|(from, to)| Gesture::Pan { from, to }),
        (0.0f64..800.0, -100.0f64..900.0).prop_map(|(down, to)| Gesture::Brush { down, to }),
    ]
}

proptest! {
    #[test]
    fn constrained_transform_keeps_window_inside_plot(
        k in 0.01f64..200.0,
        tx in -50_000.0f64..50_000.0
    ) {
        let transform = ZoomTransform::new(k, tx).constrained(EXTENT, PLOT);
        prop_assert!(transform.k >= EXTENT.0 && transform.k <= EXTENT.1);
        prop_assert!(transform.invert_x(PLOT.0) >= PLOT.0 - 1e-9);
        prop_assert!(transform.invert_x(PLOT.1) <= PLOT.1 + 1e-9);
    }

    #[test]
    fn brush_to_zoom_to_brush_round_trips_within_a_pixel(
        x0 in 50.0f64..740.0,
        width_factor in 0.0f64..1.0
    ) {
        // Widths of at least 24 px keep k inside the extent.
        let max_width = PLOT.1 - x0;
        prop_assume!(max_width >= 24.0);
        let width = 24.0 + (max_width - 24.0) * width_factor;
        let selection = BrushSelection::new(x0, x0 + width);

        let transform = selection_to_transform(selection, PLOT, EXTENT, SelectionAnchor::Left)
            .constrained(EXTENT, PLOT);
        let back = transform_to_selection(transform, PLOT);
        prop_assert!((back.x0 - selection.x0).abs() <= 1.0);
        prop_assert!((back.x1 - selection.x1).abs() <= 1.0);
    }

    #[test]
    fn bisection_matches_linear_scan(
        gaps in proptest::collection::vec(0i64..4, 0..80),
        start_day in -5.0f64..90.0,
        len_days in 0.0f64..60.0
    ) {
        let mut day = 0;
        let points: Vec<DataPoint> = gaps
            .iter()
            .map(|gap| {
                day += gap;
                DataPoint::new(origin() + Duration::days(day), day as f64)
            })
            .collect();
        let base = points.first().map_or(0.0, |point| point.time());
        let start = base + start_day * 86_400.0;
        let end = start + len_days * 86_400.0;

        let (lower, upper) = visible_slice_bounds(&points, start, end);
        let expected: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|(_, point)| point.time() >= start && point.time() <= end)
            .map(|(index, _)| index)
            .collect();

        prop_assert_eq!(upper - lower, expected.len());
        if let Some(first) = expected.first() {
            prop_assert_eq!(lower, *first);
        }
    }

    #[test]
    fn brush_and_zoom_agree_after_any_gesture_sequence(
        gestures in proptest::collection::vec(gesture_strategy(), 1..20)
    ) {
        let config = ChartEngineConfig::new(Viewport::new(800, 500));
        let mut engine = ChartEngine::new(NullRenderer::default(), NullRenderer::default(), config)
            .expect("engine init");
        engine.set_data(
            (0..90)
                .map(|i| DataPoint::new(origin() + Duration::days(i), (i % 11) as f64))
                .collect(),
        );

        for gesture in gestures {
            match gesture {
                Gesture::Wheel { x, delta_y } => {
                    engine.main_wheel(x, delta_y);
                }
                Gesture::Pan { from, to } => {
                    engine.main_pointer_down(from);
                    engine.main_pointer_move(to);
                    engine.main_pointer_up();
                }
                Gesture::Brush { down, to } => {
                    engine.overview_pointer_down(down);
                    engine.overview_pointer_move(to);
                    engine.overview_pointer_up();
                }
            }

            let transform = engine.transform();
            prop_assert!(transform.k >= EXTENT.0 && transform.k <= EXTENT.1);
            let expected = transform_to_selection(transform, engine.layout().plot_x);
            let selection = engine.brush_selection();
            prop_assert!((selection.x0 - expected.x0).abs() <= 1e-6);
            prop_assert!((selection.x1 - expected.x1).abs() <= 1e-6);
            prop_assert!(selection.x0 >= PLOT.0 - 1e-9 && selection.x1 <= PLOT.1 + 1e-9);
        }
    }
}
