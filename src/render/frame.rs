use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive};

/// Which of the two chart surfaces a frame targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasKind {
    Main,
    Overview,
}

/// Backend-agnostic scene for one full repaint of one canvas.
///
/// Backends clear the surface and then draw rects, lines, polylines and
/// texts in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub canvas: CanvasKind,
    pub viewport: Viewport,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(canvas: CanvasKind, viewport: Viewport) -> Self {
        Self {
            canvas,
            viewport,
            rects: Vec::new(),
            lines: Vec::new(),
            polylines: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// Checks every primitive. A zero-area viewport is only accepted for an
    /// empty frame, which backends treat as a no-op clear.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            if self.is_empty() {
                return Ok(());
            }
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.polylines.is_empty()
            && self.texts.is_empty()
    }
}
