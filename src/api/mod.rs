mod axis_label_format;
mod axis_ticks;
mod chart_layout;
mod chart_model;
mod data_controller;
mod derived_cache;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod interaction_controller;
mod invalidation;
mod main_frame_builder;
mod overview_frame_builder;
mod render_coordinator;
mod render_style;
mod resize_coordinator;
mod sync_bridge;
mod sync_coordinator;
mod visible_window_access;

pub use axis_label_format::{DateLabelFn, DateLabelFormatter};
pub use chart_layout::ChartLayout;
pub use derived_cache::{DerivedCacheStats, VisibleWindow};
pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;
pub use invalidation::{InvalidationTopic, InvalidationTopics, RenderOutcome};
pub use render_style::RenderStyle;
pub use sync_bridge::{SelectionAnchor, selection_to_transform, transform_to_selection};
pub use sync_coordinator::{ChartCommand, SyncSource};
