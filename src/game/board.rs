use crate::error::MoveError;
use crate::game::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// One board cell: `None` when empty, `Some(player)` once a piece lands.
pub type Cell = Option<Player>;

/// A 6×7 Connect Four grid. Row 0 is the top, row 5 the bottom; a dropped
/// piece settles into the highest row index whose cell is still empty.
///
/// Cells are write-once: nothing resets a cell short of constructing a new
/// board. Presentation layers that want the bottom row drawn last must flip
/// row order themselves; the engine never reorders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check whether a column can accept another piece, i.e. its top cell
    /// is empty. Out-of-range columns are reported as unplayable rather
    /// than panicking; the fallible operations return
    /// [`MoveError::InvalidColumn`] for those.
    pub fn is_valid_location(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_none()
    }

    /// Find the row a piece dropped into `col` would land in: the lowest
    /// empty cell, scanning from the bottom row upward.
    pub fn next_open_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col].is_none())
            .ok_or(MoveError::ColumnFull(col))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, piece: Player) -> Result<usize, MoveError> {
        let row = self.next_open_row(col)?;
        self.cells[row][col] = Some(piece);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| !self.is_valid_location(col))
    }

    /// Check whether `piece` has four in a row anywhere on the board.
    ///
    /// Scans every window of four cells in the four orientations —
    /// horizontal, vertical, positive diagonal (down-left to up-right) and
    /// negative diagonal (up-left to down-right). A 6×7 board has at most
    /// 69 windows, so the exhaustive scan is already bounded; it still
    /// short-circuits on the first match.
    pub fn winning_move(&self, piece: Player) -> bool {
        let want = Some(piece);

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - 4 {
                if (0..4).all(|i| self.cells[row][col + i] == want) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - 4 {
                if (0..4).all(|i| self.cells[row + i][col] == want) {
                    return true;
                }
            }
        }

        // Negative diagonal (\): down-right from the start cell
        for row in 0..=ROWS - 4 {
            for col in 0..=COLS - 4 {
                if (0..4).all(|i| self.cells[row + i][col + i] == want) {
                    return true;
                }
            }
        }

        // Positive diagonal (/): up-right from the start cell
        for row in 3..ROWS {
            for col in 0..=COLS - 4 {
                if (0..4).all(|i| self.cells[row - i][col + i] == want) {
                    return true;
                }
            }
        }

        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
