use crate::types::Color;

/// Turn-order ledger. Black moves first; `advance` swaps sides unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    current: Color,
    advances: u32,
}

impl TurnController {
    pub fn new() -> Self {
        Self::starting_with(Color::Black)
    }

    pub fn starting_with(current: Color) -> Self {
        Self {
            current,
            advances: 0,
        }
    }

    pub fn current(&self) -> Color {
        self.current
    }

    pub fn advance(&mut self) -> Color {
        self.current = self.current.opponent();
        self.advances += 1;
        self.current
    }

    /// Number of `advance` calls since construction.
    pub fn advances(&self) -> u32 {
        self.advances
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
