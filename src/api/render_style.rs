use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style contract for both canvases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub series_line_color: Color,
    pub series_line_width: f64,
    pub overview_line_color: Color,
    pub overview_line_width: f64,
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub axis_label_color: Color,
    pub axis_label_font_size_px: f64,
    pub brush_fill_color: Color,
    pub brush_border_color: Color,
    pub brush_handle_color: Color,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            series_line_color: Color::rgb(0.16, 0.38, 0.86),
            series_line_width: 1.5,
            overview_line_color: Color::rgb(0.45, 0.55, 0.75),
            overview_line_width: 1.0,
            grid_line_color: Color::rgba(0.0, 0.0, 0.0, 0.08),
            grid_line_width: 1.0,
            axis_line_color: Color::rgb(0.35, 0.35, 0.35),
            axis_line_width: 1.0,
            axis_label_color: Color::rgb(0.25, 0.25, 0.25),
            axis_label_font_size_px: 11.0,
            brush_fill_color: Color::rgba(0.16, 0.38, 0.86, 0.15),
            brush_border_color: Color::rgba(0.16, 0.38, 0.86, 0.6),
            brush_handle_color: Color::rgba(0.16, 0.38, 0.86, 0.8),
        }
    }
}

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<RenderStyle> {
    for color in [
        style.series_line_color,
        style.overview_line_color,
        style.grid_line_color,
        style.axis_line_color,
        style.axis_label_color,
        style.brush_fill_color,
        style.brush_border_color,
        style.brush_handle_color,
    ] {
        color
            .validate()
            .map_err(|err| ChartError::InvalidConfig(format!("render style: {err}")))?;
    }

    for (name, value) in [
        ("series_line_width", style.series_line_width),
        ("overview_line_width", style.overview_line_width),
        ("grid_line_width", style.grid_line_width),
        ("axis_line_width", style.axis_line_width),
        ("axis_label_font_size_px", style.axis_label_font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "render style `{name}` must be finite and > 0"
            )));
        }
    }

    Ok(style)
}
