use crate::types::Coord;

/// Errors raised by direct board access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position ({}, {}) is outside the {size}x{size} board", .pos.x, .pos.y)]
    OutOfRange { pos: Coord, size: usize },

    #[error("invalid cell value {0} (expected 0, 1 or 2)")]
    InvalidValue(u8),

    #[error("invalid board dimension {0} (expected an even number >= 4)")]
    InvalidSize(usize),

    #[error("grid is not square: row {row} has {len} cells, expected {size}")]
    RaggedRow { row: usize, len: usize, size: usize },
}

/// Why a move was refused. Illegal moves are an expected outcome of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejected {
    #[error("({}, {}) is off the board", .0.x, .0.y)]
    OutOfBounds(Coord),

    #[error("({}, {}) is already occupied", .0.x, .0.y)]
    Occupied(Coord),

    #[error("no stones to flip from ({}, {})", .0.x, .0.y)]
    NoCapture(Coord),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while saving or restoring a game.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("invalid turn value {0} (expected 1 or 2)")]
    InvalidTurn(u8),

    #[error("invalid grid: {0}")]
    Board(#[from] BoardError),

    #[error("storage error: {0}")]
    Storage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_rejected_display() {
        let err = MoveRejected::Occupied(Coord::new(3, 4));
        assert_eq!(err.to_string(), "(3, 4) is already occupied");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::OutOfRange {
            pos: Coord::new(-1, 2),
            size: 8,
        };
        assert_eq!(err.to_string(), "position (-1, 2) is outside the 8x8 board");
    }

    #[test]
    fn persist_error_display() {
        let err = PersistError::ChecksumMismatch {
            expected: 0xdead_beef,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: expected 0xdeadbeef, got 0x00000001"
        );
    }
}
