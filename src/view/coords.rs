use crate::config::AppConfig;
use crate::types::Coord;

/// Maps canvas pixels to board squares and back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateConverter {
    pub cell_size: f64,
    pub offset: f64,
}

impl CoordinateConverter {
    pub fn new(cell_size: f64, offset: f64) -> Self {
        Self { cell_size, offset }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.cell_size, config.offset)
    }

    /// Square under a pixel. May lie off the board; callers re-validate.
    pub fn pixel_to_tile(&self, px: f64, py: f64) -> Coord {
        Coord::new(self.axis_to_tile(px), self.axis_to_tile(py))
    }

    /// Top-left pixel of a square.
    pub fn tile_to_pixel(&self, pos: Coord) -> (f64, f64) {
        (
            self.offset + self.cell_size * f64::from(pos.x),
            self.offset + self.cell_size * f64::from(pos.y),
        )
    }

    fn axis_to_tile(&self, p: f64) -> i32 {
        let tile = ((p - self.offset) / self.cell_size).floor();
        // NaN would cast to 0; `as` saturates the infinities off-board.
        if tile.is_nan() {
            return i32::MIN;
        }
        tile as i32
    }
}

impl Default for CoordinateConverter {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}
