use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::ZoomTransform;
use crate::interaction::BrushSelection;
use crate::render::Renderer;

use super::invalidation::InvalidationTopic;
use super::sync_bridge::{SelectionAnchor, selection_to_transform, transform_to_selection};
use super::ChartEngine;

/// Tolerance, in overview pixels, below which a reconciled selection is
/// considered unchanged.
const SELECTION_RECONCILE_EPSILON_PX: f64 = 1e-9;

/// One state change that must be reflected on both controllers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartCommand {
    /// The zoom controller applied a new transform from a gesture.
    UserZoomed(ZoomTransform),
    /// The brush selection changed from a drag or a programmatic range.
    UserBrushed {
        selection: BrushSelection,
        anchor: SelectionAnchor,
    },
    /// Re-seed both controllers from a time window (unix seconds) preserved
    /// across a layout change.
    Resized { preserved: (f64, f64) },
    Reset,
}

/// Last writer of the shared visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncSource {
    Zoom,
    Brush,
    Resize,
    Reset,
}

pub(super) struct SyncCoordinator;

impl SyncCoordinator {
    /// Routes a command to both controllers and only then records
    /// invalidation.
    ///
    /// Each controller is written through its programmatic entry point, so a
    /// dispatch never re-enters another dispatch.
    pub(super) fn dispatch<R: Renderer>(engine: &mut ChartEngine<R>, command: ChartCommand) {
        let plot_x = engine.core.layout.plot_x;
        let source = match command {
            ChartCommand::UserZoomed(transform) => {
                let selection = transform_to_selection(transform, plot_x);
                engine.core.brush.set_selection(selection.x0, selection.x1);
                SyncSource::Zoom
            }
            ChartCommand::UserBrushed { selection, anchor } => {
                Self::apply_selection(engine, selection, anchor);
                SyncSource::Brush
            }
            ChartCommand::Resized { preserved } => {
                let base = engine.core.model.base_time_scale(plot_x);
                let selection = BrushSelection::new(
                    base.time_to_pixel(preserved.0),
                    base.time_to_pixel(preserved.1),
                );
                let selection = engine.core.brush.set_selection(selection.x0, selection.x1);
                Self::apply_selection(engine, selection, SelectionAnchor::Left);
                SyncSource::Resize
            }
            ChartCommand::Reset => {
                engine.core.zoom.reset();
                engine.core.brush.set_selection(plot_x.0, plot_x.1);
                SyncSource::Reset
            }
        };

        engine.core.last_sync_source = Some(source);
        let transform = engine.core.zoom.transform();
        let selection = engine.core.brush.selection();
        debug!(
            source = ?source,
            k = transform.k,
            tx = transform.tx,
            x0 = selection.x0,
            x1 = selection.x1,
            "sync dispatch"
        );

        engine.core.pending.invalidate(InvalidationTopic::Transform);
        engine.core.pending.invalidate(InvalidationTopic::Brush);
    }

    /// Brush to zoom. When the implied transform had to be clamped, the
    /// selection is rewritten from the applied transform.
    fn apply_selection<R: Renderer>(
        engine: &mut ChartEngine<R>,
        selection: BrushSelection,
        anchor: SelectionAnchor,
    ) {
        let core = &mut engine.core;
        let plot_x = core.layout.plot_x;
        let candidate =
            selection_to_transform(selection, plot_x, core.zoom.scale_extent(), anchor);
        let applied = core.zoom.set_transform(candidate);

        let reconciled = transform_to_selection(applied, plot_x);
        let current = core.brush.selection();
        if (reconciled.x0 - current.x0).abs() > SELECTION_RECONCILE_EPSILON_PX
            || (reconciled.x1 - current.x1).abs() > SELECTION_RECONCILE_EPSILON_PX
        {
            core.brush.set_selection(reconciled.x0, reconciled.x1);
        }
    }
}
