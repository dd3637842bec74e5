/// Errors produced when a move cannot be applied.
///
/// All variants are recoverable by contract: a rejected move leaves the
/// board and session exactly as they were, with the turn unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Column index outside `0..COLS`. A correct presentation layer only
    /// offers valid columns, so this indicates a caller bug.
    #[error("column {0} is out of range")]
    InvalidColumn(usize),

    /// The column has no empty cell left.
    #[error("column {0} is full")]
    ColumnFull(usize),

    /// A move was attempted after a win or draw.
    #[error("the game has already concluded")]
    GameOver,
}
