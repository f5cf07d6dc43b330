use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::board::Board;
use crate::config::AppConfig;
use crate::types::Cell;
use crate::view::{Button, CoordinateConverter};

/// Minimal drawing surface the board is rendered onto.
pub trait Surface {
    type Error;

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) -> Result<(), Self::Error>;
    fn stroke_rect(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: &str,
    ) -> Result<(), Self::Error>;
    fn fill_disc(&mut self, cx: f64, cy: f64, radius: f64, color: &str) -> Result<(), Self::Error>;
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) -> Result<(), JsValue> {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) -> Result<(), JsValue> {
        self.set_stroke_style_str(color);
        CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
        Ok(())
    }

    fn fill_disc(&mut self, cx: f64, cy: f64, radius: f64, color: &str) -> Result<(), JsValue> {
        self.begin_path();
        self.set_fill_style_str(color);
        self.arc(cx, cy, radius, 0.0, std::f64::consts::TAU)?;
        self.fill();
        Ok(())
    }
}

/// Draws the board grid, the stones and the pass button.
#[derive(Debug, Clone)]
pub struct BoardRenderer {
    converter: CoordinateConverter,
    pass_button: Button,
    board_color: String,
    line_color: String,
}

impl BoardRenderer {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            converter: CoordinateConverter::from_config(config),
            pass_button: Button::new(config.pass_button),
            board_color: config.board_color.clone(),
            line_color: config.line_color.clone(),
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, board: &Board) -> Result<(), S::Error> {
        let size = self.converter.cell_size;

        for (pos, cell) in board.cells() {
            let (px, py) = self.converter.tile_to_pixel(pos);
            surface.fill_rect(px, py, size, size, &self.board_color)?;
            surface.stroke_rect(px, py, size, size, &self.line_color)?;

            let color = match cell {
                Cell::Empty => continue,
                Cell::Black => "black",
                Cell::White => "white",
            };
            surface.fill_disc(px + size / 2.0, py + size / 2.0, size / 2.0, color)?;
        }

        let r = self.pass_button.rect;
        surface.stroke_rect(r.x, r.y, r.w, r.h, &self.line_color)
    }
}
