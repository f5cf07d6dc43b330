use std::collections::BTreeSet;

use crate::board::Board;
use crate::error::MoveRejected;
use crate::types::{Cell, Color, Coord};

const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Opponent stones flipped by a move. Never contains the target square.
pub type Captures = BTreeSet<Coord>;

/// Decides whether `mover` may play at `target` and which stones it flips.
/// Does not modify the board.
pub fn evaluate_move(board: &Board, target: Coord, mover: Color) -> Result<Captures, MoveRejected> {
    if !board.is_inside(target) {
        return Err(MoveRejected::OutOfBounds(target));
    }
    if !board.is_empty(target) {
        return Err(MoveRejected::Occupied(target));
    }

    let mut captures = Captures::new();
    for dir in DIRECTIONS {
        captures.extend(cast_ray(board, target, dir, mover));
    }

    if captures.is_empty() {
        return Err(MoveRejected::NoCapture(target));
    }
    Ok(captures)
}

/// Places a stone for `mover` at `target` and flips the captured stones.
/// On rejection the board is left untouched.
pub fn apply_move(
    board: &mut Board,
    target: Coord,
    mover: Color,
) -> Result<Captures, MoveRejected> {
    let captures = evaluate_move(board, target, mover)?;

    // Everything below is on-board and already validated.
    let stone = Cell::from(mover);
    board.write(target, stone);
    for &pos in &captures {
        board.write(pos, stone);
    }

    Ok(captures)
}

/// Opponent run from `origin` along `dir`; empty unless it closes on a `mover` anchor.
fn cast_ray(board: &Board, origin: Coord, dir: (i32, i32), mover: Color) -> Vec<Coord> {
    let mut line = Vec::new();
    let mut pos = origin.step(dir);

    while let Ok(cell) = board.get(pos) {
        match cell.color() {
            None => break,
            Some(color) if color == mover => return line,
            Some(_) => line.push(pos),
        }
        pos = pos.step(dir);
    }

    Vec::new()
}
