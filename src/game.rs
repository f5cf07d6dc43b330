use log::{debug, info};

use crate::board::Board;
use crate::error::{MoveRejected, PersistError};
use crate::moves::{self, Captures};
use crate::persist::SavedGame;
use crate::turn::TurnController;
use crate::types::{Color, Coord, GameState};

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mover: Color,
    pub target: Coord,
    pub flipped: Captures,
}

/// One game: the board, whose turn it is, and what the last move flipped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSession {
    board: Board,
    turn: TurnController,
    last_flipped: Captures,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn: TurnController::starting_with(turn),
            last_flipped: Captures::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.turn.current()
    }

    pub fn turn(&self) -> &TurnController {
        &self.turn
    }

    /// Plays `target` for the side to move and hands the turn over.
    /// A rejected move leaves the session unchanged.
    pub fn play(&mut self, target: Coord) -> Result<MoveOutcome, MoveRejected> {
        let mover = self.turn.current();
        let flipped = match moves::apply_move(&mut self.board, target, mover) {
            Ok(flipped) => flipped,
            Err(reason) => {
                info!("move rejected for {mover:?}: {reason}");
                return Err(reason);
            }
        };

        debug!(
            "{mover:?} played ({}, {}) flipping {} stone(s)",
            target.x,
            target.y,
            flipped.len()
        );
        self.turn.advance();
        self.last_flipped = flipped.clone();

        Ok(MoveOutcome {
            mover,
            target,
            flipped,
        })
    }

    /// Hands the turn to the other side without placing a stone.
    pub fn pass(&mut self) {
        let passed = self.turn.current();
        self.turn.advance();
        self.last_flipped.clear();
        debug!("{passed:?} passed");
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            size: self.board.size(),
            board: self.board.to_array(),
            current_player: self.turn.current().to_raw(),
            flipped: self.last_flipped.iter().copied().collect(),
        }
    }

    pub fn to_saved(&self) -> SavedGame {
        SavedGame::new(&self.board, self.turn.current())
    }

    pub fn from_saved(saved: &SavedGame) -> Result<Self, PersistError> {
        saved.verify()?;
        Ok(Self::from_parts(saved.board()?, saved.turn()?))
    }
}
