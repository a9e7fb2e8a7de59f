use crate::error::PlaceError;
use crate::piece::Piece;

pub const BOARD_SIZE: usize = 8;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;
const EMPTY: u8 = 0;

/// 8x8 grid. A cell is 0 when empty, otherwise the palette index of the
/// piece that filled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[EMPTY; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from raw cell values (row-major).
    pub fn from_cells(cells: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the cell value, or `None` outside the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_some_and(|v| v != EMPTY)
    }

    /// Checks every occupied cell of `piece` at offset `(row, col)`.
    /// Stops at the first cell that leaves the board or hits a filled cell.
    pub fn check_placement(&self, piece: &Piece, row: i32, col: i32) -> Result<(), PlaceError> {
        for &(pr, pc) in piece.cells() {
            let (r, c) = (offset(row, pr), offset(col, pc));
            let (Some(r), Some(c)) = (r.and_then(to_index), c.and_then(to_index)) else {
                return Err(PlaceError::OutOfBounds {
                    row: r.unwrap_or(row),
                    col: c.unwrap_or(col),
                });
            };
            if self.cells[r][c] != EMPTY {
                return Err(PlaceError::Occupied { row: r, col: c });
            }
        }
        Ok(())
    }

    pub fn can_place(&self, piece: &Piece, row: i32, col: i32) -> bool {
        self.check_placement(piece, row, col).is_ok()
    }

    /// Writes the piece color into its footprint. Leaves the board untouched
    /// when the placement is invalid.
    pub fn place(&mut self, piece: &Piece, row: i32, col: i32) -> Result<(), PlaceError> {
        self.check_placement(piece, row, col)?;

        let color = piece.color().index();
        for &(pr, pc) in piece.cells() {
            // Offsets were validated above, so both are non-negative.
            let r = row as usize + pr;
            let c = col as usize + pc;
            self.cells[r][c] = color;
        }
        Ok(())
    }

    /// Removes full rows, then full columns, and returns how many were removed.
    ///
    /// Rows are scanned top to bottom. A full row is dropped and an empty row
    /// is inserted at the top. Columns are then scanned left to right on the
    /// board as left by the row pass. A full column is dropped from every row
    /// and an empty cell is appended at the right. An index is never scanned
    /// twice in the same call, even when a removal shifts a new line into it.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;

        for row in 0..BOARD_SIZE {
            if self.row_full(row) {
                self.cells.copy_within(0..row, 1);
                self.cells[0] = [EMPTY; BOARD_SIZE];
                cleared += 1;
            }
        }

        for col in 0..BOARD_SIZE {
            if self.col_full(col) {
                for line in self.cells.iter_mut() {
                    line.copy_within(col + 1.., col);
                    line[BOARD_SIZE - 1] = EMPTY;
                }
                cleared += 1;
            }
        }

        cleared
    }

    /// Tests the piece footprint at offset (0, 0) only. Cells outside the
    /// board are ignored rather than counted as collisions.
    pub fn collides_at_origin(&self, piece: &Piece) -> bool {
        piece.cells().iter().any(|&(r, c)| self.is_filled(r, c))
    }

    pub fn filled_count(&self) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&v| v != EMPTY)
            .count() as u8
    }

    pub fn rows(&self) -> &[[u8; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Flattens the board row-major.
    pub fn to_array(&self) -> [u8; NUM_CELLS] {
        let mut board = [EMPTY; NUM_CELLS];
        for (pos, cell) in board.iter_mut().enumerate() {
            *cell = self.cells[pos / BOARD_SIZE][pos % BOARD_SIZE];
        }
        board
    }

    fn row_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(|&v| v != EMPTY)
    }

    fn col_full(&self, col: usize) -> bool {
        self.cells.iter().all(|line| line[col] != EMPTY)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// `None` when the sum leaves the `i32` range.
fn offset(base: i32, delta: usize) -> Option<i32> {
    base.checked_add(i32::try_from(delta).ok()?)
}

fn to_index(v: i32) -> Option<usize> {
    usize::try_from(v).ok().filter(|&v| v < BOARD_SIZE)
}
