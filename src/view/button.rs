use crate::config::Rect;

/// Clickable rectangle on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub rect: Rect,
}

impl Button {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Edges count as inside.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let Rect { x, y, w, h } = self.rect;
        px >= x && px <= x + w && py >= y && py <= y + h
    }
}
