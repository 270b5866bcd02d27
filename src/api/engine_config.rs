use serde::{Deserialize, Serialize};

use crate::core::{Margins, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// Fixed for the lifetime of the engine. This type is serializable so host
/// applications can persist/load chart setup without inventing their own
/// ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    /// Initial host container size; the overview strip is carved from its bottom.
    pub container: Viewport,
    #[serde(default = "default_margins")]
    pub margins: Margins,
    #[serde(default = "default_overview_height")]
    pub overview_height: u32,
    /// Vertical insets of the overview plot. Horizontal insets are shared with
    /// the main plot so both canvases use the same base time range.
    #[serde(default = "default_overview_padding")]
    pub overview_padding_top: f64,
    #[serde(default = "default_overview_padding")]
    pub overview_padding_bottom: f64,
    #[serde(default = "default_zoom_scale_extent")]
    pub zoom_scale_extent: (f64, f64),
    #[serde(default = "default_max_value_ticks")]
    pub max_value_ticks: usize,
    /// Pixels of plot width per time tick.
    #[serde(default = "default_time_tick_density_px")]
    pub time_tick_density_px: f64,
    /// Minimum pixels of plot height per value tick.
    #[serde(default = "default_value_tick_spacing_px")]
    pub value_tick_spacing_px: f64,
    #[serde(default = "default_brush_handle_width_px")]
    pub brush_handle_width_px: f64,
    #[serde(default = "default_wheel_sensitivity")]
    pub wheel_sensitivity: f64,
}

impl ChartEngineConfig {
    /// Creates a config with default layout and interaction tuning.
    #[must_use]
    pub fn new(container: Viewport) -> Self {
        Self {
            container,
            margins: default_margins(),
            overview_height: default_overview_height(),
            overview_padding_top: default_overview_padding(),
            overview_padding_bottom: default_overview_padding(),
            zoom_scale_extent: default_zoom_scale_extent(),
            max_value_ticks: default_max_value_ticks(),
            time_tick_density_px: default_time_tick_density_px(),
            value_tick_spacing_px: default_value_tick_spacing_px(),
            brush_handle_width_px: default_brush_handle_width_px(),
            wheel_sensitivity: default_wheel_sensitivity(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_overview_height(mut self, overview_height: u32) -> Self {
        self.overview_height = overview_height;
        self
    }

    #[must_use]
    pub fn with_overview_padding(mut self, top: f64, bottom: f64) -> Self {
        self.overview_padding_top = top;
        self.overview_padding_bottom = bottom;
        self
    }

    #[must_use]
    pub fn with_zoom_scale_extent(mut self, k_min: f64, k_max: f64) -> Self {
        self.zoom_scale_extent = (k_min, k_max);
        self
    }

    #[must_use]
    pub fn with_max_value_ticks(mut self, max_value_ticks: usize) -> Self {
        self.max_value_ticks = max_value_ticks;
        self
    }

    #[must_use]
    pub fn with_time_tick_density_px(mut self, density_px: f64) -> Self {
        self.time_tick_density_px = density_px;
        self
    }

    #[must_use]
    pub fn with_brush_handle_width_px(mut self, width_px: f64) -> Self {
        self.brush_handle_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_wheel_sensitivity(mut self, sensitivity: f64) -> Self {
        self.wheel_sensitivity = sensitivity;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    /// Deserializes config from JSON. Missing tuning fields take defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.margins.validate()?;

        for (name, value) in [
            ("overview_padding_top", self.overview_padding_top),
            ("overview_padding_bottom", self.overview_padding_bottom),
            ("brush_handle_width_px", self.brush_handle_width_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }

        for (name, value) in [
            ("time_tick_density_px", self.time_tick_density_px),
            ("value_tick_spacing_px", self.value_tick_spacing_px),
            ("wheel_sensitivity", self.wheel_sensitivity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        let (k_min, k_max) = self.zoom_scale_extent;
        if !k_min.is_finite() || !k_max.is_finite() || k_min < 1.0 || k_max < k_min {
            return Err(ChartError::InvalidConfig(
                "zoom scale extent must be finite with 1 <= k_min <= k_max".to_owned(),
            ));
        }

        if self.max_value_ticks < 2 {
            return Err(ChartError::InvalidConfig(
                "max_value_ticks must be >= 2".to_owned(),
            ));
        }

        Ok(self)
    }
}

fn default_margins() -> Margins {
    Margins::new(20.0, 30.0, 40.0, 50.0)
}

fn default_overview_height() -> u32 {
    80
}

fn default_overview_padding() -> f64 {
    8.0
}

fn default_zoom_scale_extent() -> (f64, f64) {
    (1.0, 30.0)
}

fn default_max_value_ticks() -> usize {
    5
}

fn default_time_tick_density_px() -> f64 {
    100.0
}

fn default_value_tick_spacing_px() -> f64 {
    40.0
}

fn default_brush_handle_width_px() -> f64 {
    6.0
}

fn default_wheel_sensitivity() -> f64 {
    0.002
}
