pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod moves;
pub mod persist;
pub mod turn;
pub mod types;
pub mod view;
pub mod web;

pub use board::Board;
pub use error::{BoardError, MoveRejected};
pub use game::{GameSession, MoveOutcome};
pub use moves::{Captures, apply_move, evaluate_move};
pub use turn::TurnController;
pub use types::{Cell, Color, Coord, GameState};
pub use web::OthelloApp;
