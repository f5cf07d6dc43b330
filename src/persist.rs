use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::PersistError;
use crate::types::Color;

/// Flat saved form of a session: `{turn, grid, checksum}`.
///
/// `checksum` is the CRC32 of the turn byte followed by the grid in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub turn: u8,
    pub grid: Vec<Vec<u8>>,
    pub checksum: u32,
}

impl SavedGame {
    pub fn new(board: &Board, turn: Color) -> Self {
        let turn = turn.to_raw();
        let grid = board.to_rows();
        let checksum = checksum(turn, &grid);
        Self {
            turn,
            grid,
            checksum,
        }
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses and verifies a saved game.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        let saved: SavedGame = serde_json::from_str(json)?;
        saved.verify()?;
        Ok(saved)
    }

    pub fn verify(&self) -> Result<(), PersistError> {
        let actual = checksum(self.turn, &self.grid);
        if actual != self.checksum {
            return Err(PersistError::ChecksumMismatch {
                expected: self.checksum,
                actual,
            });
        }
        Ok(())
    }

    pub fn board(&self) -> Result<Board, PersistError> {
        Ok(Board::from_rows(&self.grid)?)
    }

    pub fn turn(&self) -> Result<Color, PersistError> {
        match self.turn {
            1 => Ok(Color::Black),
            2 => Ok(Color::White),
            other => Err(PersistError::InvalidTurn(other)),
        }
    }
}

fn checksum(turn: u8, grid: &[Vec<u8>]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(&[turn]);
    for row in grid {
        hasher.update(row);
    }
    hasher.finalize()
}

/// Key/value store a game can be saved into (browser `localStorage`, memory).
pub trait SaveSlot {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
    fn clear(&mut self, key: &str) -> Result<(), PersistError>;
}

impl SaveSlot for web_sys::Storage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        self.get_item(key).map_err(|e| PersistError::Storage(format!("{e:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.set_item(key, value).map_err(|e| PersistError::Storage(format!("{e:?}")))
    }

    fn clear(&mut self, key: &str) -> Result<(), PersistError> {
        self.remove_item(key).map_err(|e| PersistError::Storage(format!("{e:?}")))
    }
}

/// In-process slot, used off the browser.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
}

impl SaveSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<(), PersistError> {
        self.entries.remove(key);
        Ok(())
    }
}

pub fn save(slot: &mut dyn SaveSlot, key: &str, saved: &SavedGame) -> Result<(), PersistError> {
    slot.write(key, &saved.to_json()?)
}

/// Returns `Ok(None)` when nothing has been saved under `key`.
pub fn load(slot: &dyn SaveSlot, key: &str) -> Result<Option<SavedGame>, PersistError> {
    match slot.read(key)? {
        Some(json) => SavedGame::from_json(&json).map(Some),
        None => Ok(None),
    }
}
