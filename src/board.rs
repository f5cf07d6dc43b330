use crate::error::BoardError;
use crate::types::{Cell, Coord};

pub const DEFAULT_SIZE: usize = 8;

/// Square grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates the initial 8x8 board:
    /// (3,3)=white, (4,3)=black, (3,4)=black, (4,4)=white.
    pub fn new() -> Self {
        Self::starting(DEFAULT_SIZE)
    }

    /// Creates a starting position on an `size`x`size` board.
    /// `size` must be even and at least 4.
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        check_size(size)?;
        Ok(Self::starting(size))
    }

    fn starting(size: usize) -> Self {
        let mut board = Self::empty(size);
        let lo = (size / 2 - 1) as i32;
        let hi = (size / 2) as i32;
        board.write(Coord::new(lo, lo), Cell::White);
        board.write(Coord::new(lo, hi), Cell::Black);
        board.write(Coord::new(hi, lo), Cell::Black);
        board.write(Coord::new(hi, hi), Cell::White);
        board
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Rebuilds a board from raw rows (0=empty, 1=black, 2=white).
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BoardError> {
        let size = rows.len();
        check_size(size)?;

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(BoardError::RaggedRow {
                    row,
                    len: values.len(),
                    size,
                });
            }
            for &raw in values {
                cells.push(Cell::try_from(raw)?);
            }
        }

        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_inside(&self, pos: Coord) -> bool {
        let n = self.size as i32;
        (0..n).contains(&pos.x) && (0..n).contains(&pos.y)
    }

    /// `false` for off-board positions.
    pub fn is_empty(&self, pos: Coord) -> bool {
        matches!(self.get(pos), Ok(Cell::Empty))
    }

    pub fn get(&self, pos: Coord) -> Result<Cell, BoardError> {
        let idx = self.index(pos)?;
        Ok(self.cells[idx])
    }

    /// Overwrites a cell. Occupancy is not checked here.
    pub fn set(&mut self, pos: Coord, value: Cell) -> Result<(), BoardError> {
        let idx = self.index(pos)?;
        self.cells[idx] = value;
        Ok(())
    }

    /// Like [`Board::set`], for untrusted raw values.
    pub fn set_raw(&mut self, pos: Coord, raw: u8) -> Result<(), BoardError> {
        let value = Cell::try_from(raw)?;
        self.set(pos, value)
    }

    /// Cells in row-major order with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (Coord::new((idx % n) as i32, (idx / n) as i32), cell))
    }

    /// Flat row-major raw encoding.
    pub fn to_array(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.to_raw()).collect()
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|cell| cell.to_raw()).collect())
            .collect()
    }

    /// Write to a position already known to be on the board.
    pub(crate) fn write(&mut self, pos: Coord, value: Cell) {
        debug_assert!(self.is_inside(pos), "write outside board: {pos:?}");
        let idx = (pos.y as usize) * self.size + pos.x as usize;
        self.cells[idx] = value;
    }

    fn index(&self, pos: Coord) -> Result<usize, BoardError> {
        if !self.is_inside(pos) {
            return Err(BoardError::OutOfRange {
                pos,
                size: self.size,
            });
        }
        Ok((pos.y as usize) * self.size + pos.x as usize)
    }
}

fn check_size(size: usize) -> Result<(), BoardError> {
    if size < 4 || size % 2 != 0 {
        return Err(BoardError::InvalidSize(size));
    }
    Ok(())
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn initial_board_has_diagonal_center() {
        let board = Board::new();

        assert_eq!(board.size(), 8);
        assert_eq!(board.get(at(3, 3)), Ok(Cell::White));
        assert_eq!(board.get(at(3, 4)), Ok(Cell::Black));
        assert_eq!(board.get(at(4, 3)), Ok(Cell::Black));
        assert_eq!(board.get(at(4, 4)), Ok(Cell::White));

        let occupied = board.cells().filter(|(_, cell)| *cell != Cell::Empty).count();
        assert_eq!(occupied, 4);
    }

    #[test]
    fn get_and_set_reject_off_board_positions() {
        let mut board = Board::new();

        for pos in [at(-1, 0), at(0, -1), at(8, 0), at(0, 8)] {
            assert!(!board.is_inside(pos));
            assert!(!board.is_empty(pos));
            assert_eq!(board.get(pos), Err(BoardError::OutOfRange { pos, size: 8 }));
            assert!(board.set(pos, Cell::Black).is_err());
        }
    }

    #[test]
    fn set_overwrites_without_occupancy_check() {
        let mut board = Board::new();

        board.set(at(3, 3), Cell::Black).unwrap();
        assert_eq!(board.get(at(3, 3)), Ok(Cell::Black));

        board.set(at(3, 3), Cell::Empty).unwrap();
        assert!(board.is_empty(at(3, 3)));
    }

    #[test]
    fn set_raw_rejects_invalid_value_and_keeps_cell() {
        let mut board = Board::new();

        assert_eq!(board.set_raw(at(0, 0), 7), Err(BoardError::InvalidValue(7)));
        assert!(board.is_empty(at(0, 0)));

        board.set_raw(at(0, 0), 2).unwrap();
        assert_eq!(board.get(at(0, 0)), Ok(Cell::White));
    }

    #[test]
    fn with_size_places_center_for_larger_boards() {
        let board = Board::with_size(10).unwrap();

        assert_eq!(board.get(at(4, 4)), Ok(Cell::White));
        assert_eq!(board.get(at(4, 5)), Ok(Cell::Black));
        assert_eq!(board.get(at(5, 4)), Ok(Cell::Black));
        assert_eq!(board.get(at(5, 5)), Ok(Cell::White));
        assert_eq!(Board::with_size(7), Err(BoardError::InvalidSize(7)));
        assert_eq!(Board::with_size(2), Err(BoardError::InvalidSize(2)));
    }

    #[test]
    fn rows_round_trip_and_reject_bad_grids() {
        let board = Board::new();
        let rows = board.to_rows();

        assert_eq!(rows[3], vec![0, 0, 0, 2, 1, 0, 0, 0]);
        assert_eq!(Board::from_rows(&rows).unwrap(), board);

        let mut ragged = rows.clone();
        ragged[5].pop();
        assert_eq!(
            Board::from_rows(&ragged),
            Err(BoardError::RaggedRow {
                row: 5,
                len: 7,
                size: 8
            })
        );

        let mut invalid = rows;
        invalid[0][0] = 9;
        assert_eq!(Board::from_rows(&invalid), Err(BoardError::InvalidValue(9)));

        for size in [0, 1, 3, 5] {
            assert_eq!(
                Board::from_rows(&vec![vec![0u8; size]; size]),
                Err(BoardError::InvalidSize(size))
            );
        }
    }
}
