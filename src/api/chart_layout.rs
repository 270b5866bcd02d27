use crate::core::Viewport;

use super::ChartEngineConfig;

/// Pixel geometry of both canvases, derived from the container size.
///
/// The main canvas takes the container height minus the overview strip. Both
/// plots share `plot_x`, so the base time scale is the same on each canvas.
/// Insets larger than the canvas collapse the plot to zero size instead of
/// inverting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub container: Viewport,
    pub main: Viewport,
    pub overview: Viewport,
    pub plot_x: (f64, f64),
    /// `(top, bottom)` of the main plot area.
    pub main_plot_y: (f64, f64),
    /// `(top, bottom)` of the overview plot area.
    pub overview_plot_y: (f64, f64),
}

impl ChartLayout {
    #[must_use]
    pub fn compute(container: Viewport, config: &ChartEngineConfig) -> Self {
        let overview_height = config.overview_height.min(container.height);
        let main = Viewport::new(container.width, container.height - overview_height);
        let overview = Viewport::new(container.width, overview_height);
        let margins = config.margins;

        let plot_x = collapse_inverted(
            margins.left,
            f64::from(container.width) - margins.right,
        );
        let main_plot_y = collapse_inverted(margins.top, f64::from(main.height) - margins.bottom);
        let overview_plot_y = collapse_inverted(
            config.overview_padding_top,
            f64::from(overview.height) - config.overview_padding_bottom,
        );

        Self {
            container,
            main,
            overview,
            plot_x,
            main_plot_y,
            overview_plot_y,
        }
    }

    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.plot_x.1 - self.plot_x.0
    }

    #[must_use]
    pub fn main_plot_height(&self) -> f64 {
        self.main_plot_y.1 - self.main_plot_y.0
    }

    #[must_use]
    pub fn overview_plot_height(&self) -> f64 {
        self.overview_plot_y.1 - self.overview_plot_y.0
    }

    #[must_use]
    pub fn main_is_drawable(&self) -> bool {
        self.main.is_valid() && self.plot_width() > 0.0 && self.main_plot_height() > 0.0
    }

    #[must_use]
    pub fn overview_is_drawable(&self) -> bool {
        self.overview.is_valid() && self.plot_width() > 0.0 && self.overview_plot_height() > 0.0
    }
}

fn collapse_inverted(start: f64, end: f64) -> (f64, f64) {
    (start, end.max(start))
}
