pub mod dataset;
pub mod line_series;
pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod time_ticks;
pub mod transform;
pub mod types;
pub mod value_scale;
pub mod windowing;

pub use dataset::{TimeDomain, ValueDomain, parse_dataset_json};
pub use line_series::project_polyline;
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use time_ticks::TimeTickInterval;
pub use transform::ZoomTransform;
pub use types::{DataPoint, Margins, Viewport};
pub use value_scale::{ValueScale, ValueTicks, value_tick_count};
pub use windowing::{points_in_time_window, visible_slice_bounds};
