use tracing::trace;

use crate::core::{ValueScale, project_polyline, value_tick_count};
use crate::render::{
    CanvasKind, LinePrimitive, PolylinePrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::axis_label_format::format_value_label;
use super::axis_ticks::{AXIS_LABEL_GAP_PX, AXIS_TICK_MARK_PX, time_tick_target_count};
use super::ChartEngine;

/// Extra gap between the day label and the month/year line below it.
const SECONDARY_LABEL_GAP_PX: f64 = 2.0;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the main-plot frame for the current state.
    ///
    /// Gridlines and axes first, then labels and the data path through the
    /// visible slice. A plot without area yields an empty frame.
    #[must_use]
    pub fn build_main_frame(&self) -> RenderFrame {
        let layout = self.core.layout;
        let mut frame = RenderFrame::new(CanvasKind::Main, layout.main);
        if !layout.main_is_drawable() {
            return frame;
        }

        let style = self.core.style;
        let config = &self.core.config;
        let (left, right) = layout.plot_x;
        let (top, bottom) = layout.main_plot_y;

        let window = self.visible_window();
        let time_scale = window.time_scale;
        let value_scale = ValueScale::new(window.value_domain, top, bottom);

        let time_ticks = time_scale.ticks(time_tick_target_count(
            layout.plot_width(),
            config.time_tick_density_px,
        ));
        let value_ticks = value_scale.ticks(value_tick_count(
            layout.main_plot_height(),
            config.value_tick_spacing_px,
            config.max_value_ticks,
        ));

        let time_tick_xs: Vec<_> = time_ticks
            .iter()
            .map(|date| (*date, time_scale.date_to_pixel(*date)))
            .filter(|(_, x)| *x >= left && *x <= right)
            .collect();

        for &(_, x) in &time_tick_xs {
            frame.lines.push(LinePrimitive::new(
                x,
                top,
                x,
                bottom,
                style.grid_line_width,
                style.grid_line_color,
            ));
        }
        for &value in &value_ticks {
            let y = value_scale.value_to_pixel(value);
            frame.lines.push(LinePrimitive::new(
                left,
                y,
                right,
                y,
                style.grid_line_width,
                style.grid_line_color,
            ));
        }

        // Axis baselines.
        frame.lines.push(LinePrimitive::new(
            left,
            bottom,
            right,
            bottom,
            style.axis_line_width,
            style.axis_line_color,
        ));
        frame.lines.push(LinePrimitive::new(
            left,
            top,
            left,
            bottom,
            style.axis_line_width,
            style.axis_line_color,
        ));

        let font_size = style.axis_label_font_size_px;
        let day_label_y = bottom + AXIS_TICK_MARK_PX + AXIS_LABEL_GAP_PX;
        for &(date, x) in &time_tick_xs {
            frame.lines.push(LinePrimitive::new(
                x,
                bottom,
                x,
                bottom + AXIS_TICK_MARK_PX,
                style.axis_line_width,
                style.axis_line_color,
            ));

            let (day, month_year) = self.core.labels.tick_labels(date);
            if !day.is_empty() {
                frame.texts.push(TextPrimitive::new(
                    day,
                    x,
                    day_label_y,
                    font_size,
                    style.axis_label_color,
                    TextHAlign::Center,
                ));
            }
            if let Some(month_year) = month_year.filter(|text| !text.is_empty()) {
                frame.texts.push(TextPrimitive::new(
                    month_year,
                    x,
                    day_label_y + font_size + SECONDARY_LABEL_GAP_PX,
                    font_size,
                    style.axis_label_color,
                    TextHAlign::Center,
                ));
            }
        }

        for &value in &value_ticks {
            let y = value_scale.value_to_pixel(value);
            frame.lines.push(LinePrimitive::new(
                left - AXIS_TICK_MARK_PX,
                y,
                left,
                y,
                style.axis_line_width,
                style.axis_line_color,
            ));
            frame.texts.push(TextPrimitive::new(
                format_value_label(value),
                left - AXIS_TICK_MARK_PX - AXIS_LABEL_GAP_PX,
                y - font_size * 0.5,
                font_size,
                style.axis_label_color,
                TextHAlign::Right,
            ));
        }

        let visible = self.visible_points();
        if !visible.is_empty() {
            frame.polylines.push(PolylinePrimitive::new(
                project_polyline(visible, time_scale, value_scale),
                style.series_line_width,
                style.series_line_color,
            ));
        }

        trace!(
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            points = visible.len(),
            "build main frame"
        );
        frame
    }
}
