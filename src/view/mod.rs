//! Canvas-side helpers: pixel/tile conversion, button hit-testing and drawing.

pub mod button;
pub mod coords;
pub mod render;

pub use button::Button;
pub use coords::CoordinateConverter;
pub use render::{BoardRenderer, Surface};
