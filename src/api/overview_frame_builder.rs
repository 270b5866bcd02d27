use tracing::trace;

use crate::core::{ValueScale, project_polyline};
use crate::render::{
    CanvasKind, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, Renderer,
};

use super::ChartEngine;
use super::axis_ticks::time_tick_target_count;

/// Border drawn around the brush selection.
const BRUSH_BORDER_WIDTH_PX: f64 = 1.0;

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the overview frame: base-scale grid, the whole series
    /// against the global value domain, and the brush overlay.
    #[must_use]
    pub fn build_overview_frame(&self) -> RenderFrame {
        let layout = self.core.layout;
        let mut frame = RenderFrame::new(CanvasKind::Overview, layout.overview);
        if !layout.overview_is_drawable() {
            return frame;
        }

        let style = self.core.style;
        let (left, right) = layout.plot_x;
        let (top, bottom) = layout.overview_plot_y;
        let time_scale = self.base_time_scale();
        let value_scale = ValueScale::new(self.core.model.global_value_domain, top, bottom);

        let tick_count =
            time_tick_target_count(layout.plot_width(), self.core.config.time_tick_density_px);
        for date in time_scale.ticks(tick_count) {
            let x = time_scale.date_to_pixel(date);
            if x < left || x > right {
                continue;
            }
            frame.lines.push(LinePrimitive::new(
                x,
                top,
                x,
                bottom,
                style.grid_line_width,
                style.grid_line_color,
            ));
        }

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

        let points = &self.core.model.points;
        if !points.is_empty() {
            frame.polylines.push(PolylinePrimitive::new(
                project_polyline(points, time_scale, value_scale),
                style.overview_line_width,
                style.overview_line_color,
            ));
        }

        let selection = self.core.brush.selection();
        let height = bottom - top;
        frame.rects.push(
            RectPrimitive::new(
                selection.left(),
                top,
                selection.width(),
                height,
                style.brush_fill_color,
            )
            .with_border(BRUSH_BORDER_WIDTH_PX, style.brush_border_color),
        );

        let handle_width = self.core.brush.handle_width();
        if handle_width > 0.0 {
            for edge in [selection.left(), selection.right()] {
                frame.rects.push(RectPrimitive::new(
                    edge - handle_width * 0.5,
                    top,
                    handle_width,
                    height,
                    style.brush_handle_color,
                ));
            }
        }

        trace!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            points = points.len(),
            "build overview frame"
        );
        frame
    }
}
