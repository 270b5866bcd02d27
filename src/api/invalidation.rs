use serde::{Deserialize, Serialize};

use crate::render::CanvasKind;

/// Domain-oriented invalidation topic used to classify repaint requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    /// Dataset replaced.
    Data,
    /// Zoom transform changed.
    Transform,
    /// Brush selection changed.
    Brush,
    /// Container or canvas size changed.
    Layout,
    Style,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Data => 1 << 0,
            Self::Transform => 1 << 1,
            Self::Brush => 1 << 2,
            Self::Layout => 1 << 3,
            Self::Style => 1 << 4,
        }
    }

    /// Canvases whose pixels depend on this topic.
    #[must_use]
    pub const fn affects(self, canvas: CanvasKind) -> bool {
        match self {
            Self::Data | Self::Layout | Self::Style => true,
            Self::Transform => matches!(canvas, CanvasKind::Main),
            Self::Brush => matches!(canvas, CanvasKind::Overview),
        }
    }
}

/// Bitmask of invalidation topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_TOPICS: [InvalidationTopic; 5] = [
        InvalidationTopic::Data,
        InvalidationTopic::Transform,
        InvalidationTopic::Brush,
        InvalidationTopic::Layout,
        InvalidationTopic::Style,
    ];

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    /// Whether any contained topic requires repainting `canvas`.
    #[must_use]
    pub fn affects(self, canvas: CanvasKind) -> bool {
        Self::ALL_TOPICS
            .iter()
            .any(|topic| self.contains_topic(*topic) && topic.affects(canvas))
    }
}

/// Coalesced repaint requests for one event-loop turn.
///
/// Any number of state changes merge into one mask, so a turn renders each
/// affected canvas at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) struct PendingInvalidation {
    topics: InvalidationTopics,
}

impl PendingInvalidation {
    #[must_use]
    pub(super) fn full() -> Self {
        Self {
            topics: InvalidationTopics::none()
                .with_topic(InvalidationTopic::Data)
                .with_topic(InvalidationTopic::Layout),
        }
    }

    pub(super) fn invalidate(&mut self, topic: InvalidationTopic) {
        self.topics = self.topics.with_topic(topic);
    }

    #[must_use]
    pub(super) fn topics(self) -> InvalidationTopics {
        self.topics
    }

    #[must_use]
    pub(super) fn needs_repaint(self, canvas: CanvasKind) -> bool {
        self.topics.affects(canvas)
    }

    pub(super) fn clear(&mut self) {
        self.topics = InvalidationTopics::none();
    }
}

/// Which canvases a render pass actually repainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOutcome {
    pub main: bool,
    pub overview: bool,
}

impl RenderOutcome {
    #[must_use]
    pub fn any(self) -> bool {
        self.main || self.overview
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidationTopic, InvalidationTopics, PendingInvalidation};
    use crate::render::CanvasKind;

    #[test]
    fn transform_and_brush_target_their_own_canvas() {
        let transform = InvalidationTopics::none().with_topic(InvalidationTopic::Transform);
        assert!(transform.affects(CanvasKind::Main));
        assert!(!transform.affects(CanvasKind::Overview));

        let brush = InvalidationTopics::none().with_topic(InvalidationTopic::Brush);
        assert!(brush.affects(CanvasKind::Overview));
        assert!(!brush.affects(CanvasKind::Main));
    }

    #[test]
    fn pending_merges_and_clears() {
        let mut pending = PendingInvalidation::default();
        assert!(!pending.needs_repaint(CanvasKind::Main));

        pending.invalidate(InvalidationTopic::Transform);
        pending.invalidate(InvalidationTopic::Transform);
        pending.invalidate(InvalidationTopic::Brush);
        assert!(pending.needs_repaint(CanvasKind::Main));
        assert!(pending.needs_repaint(CanvasKind::Overview));

        pending.clear();
        assert!(pending.topics().is_none());
    }
}
