use tracing::{debug, warn};

use crate::core::{DataPoint, parse_dataset_json};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartEngine;
use super::invalidation::InvalidationTopic;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the dataset.
    ///
    /// Points must be sorted ascending by date. Time and global value domains
    /// are derived once here; zoom and brush return to the full extent and
    /// any pending resize capture is dropped.
    pub fn set_data(&mut self, points: Vec<DataPoint>) {
        if points.windows(2).any(|pair| pair[0].date > pair[1].date) {
            warn!(count = points.len(), "dataset is not sorted by date");
        }

        self.core.model.replace_points(points);
        self.core.resize.clear();
        self.core.zoom.reset();
        let plot_x = self.core.layout.plot_x;
        self.core.brush.set_selection(plot_x.0, plot_x.1);
        self.core.last_sync_source = None;

        let domain = self.core.model.time_domain;
        debug!(
            count = self.core.model.points.len(),
            start = %domain.start,
            end = %domain.end,
            "set data points"
        );
        self.core.pending.invalidate(InvalidationTopic::Data);
    }

    /// Parses a JSON array of `{ "date", "value" }` records and loads it.
    pub fn load_json(&mut self, json: &str) -> ChartResult<()> {
        let points = parse_dataset_json(json)?;
        self.set_data(points);
        Ok(())
    }
}
