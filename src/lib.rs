//! zoomline: headless engine for a zoomable time-series line chart with an
//! overview brush.
//!
//! The crate keeps a strict architectural split: `core` holds pure scale,
//! tick and windowing math, `interaction` owns the zoom and brush gesture
//! state machines, `api` synchronizes them behind [`ChartEngine`], and
//! `render` turns the result into backend-agnostic frames.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
