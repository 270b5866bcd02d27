//! Gesture state machines for the main plot and the overview brush.
//!
//! Controllers own their state and clamp every input at their boundary; they
//! know nothing about each other. Synchronization lives in `api`.

mod brush;
mod zoom;

pub use brush::{BrushController, BrushDragMode, BrushSelection};
pub use zoom::{ZoomController, ZoomMode};
