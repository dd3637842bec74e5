use tracing::{debug, info};

use crate::error::MoveError;
use crate::game::{Board, Player};

/// Where a session stands: still playing, won, or drawn.
///
/// `Won` and `Draw` are terminal. No move is accepted from a terminal
/// status; the only way out is constructing a fresh session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// A single Connect Four game: the board plus whose turn it is and whether
/// the game has concluded.
///
/// The session is plain owned state with no interior mutability; whoever
/// holds it drives it. One interactive game maps to one session, and a
/// restart replaces the whole session rather than patching fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameSession {
    board: Board,
    current_turn: Player,
    status: GameStatus,
}

impl GameSession {
    /// Create a fresh session: empty board, Player 1 to move.
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            current_turn: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose move is next. After a win this still names the
    /// winner, since the turn does not advance past a winning move.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has concluded (won or drawn)
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Apply the current player's move to `column` and return the row the
    /// piece landed in.
    ///
    /// One atomic transition: validate, place the piece, evaluate win then
    /// draw, advance the turn. A rejected move (`GameOver`, `ColumnFull`,
    /// `InvalidColumn`) leaves the session exactly as it was.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_turn;
        let row = self.board.drop_piece(column, mover)?;
        debug!(row, column, player = mover.name(), "piece placed");

        if self.board.winning_move(mover) {
            // The winner keeps the turn; the game is over.
            self.status = GameStatus::Won(mover);
            info!(player = mover.name(), "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("board full, game drawn");
        } else {
            self.current_turn = mover.other();
        }

        Ok(row)
    }

    /// Apply a move and return the resulting session, leaving `self`
    /// untouched. Same rules as [`apply_move`](Self::apply_move), for
    /// callers that prefer value semantics.
    pub fn with_move(&self, column: usize) -> Result<GameSession, MoveError> {
        let mut next = *self;
        next.apply_move(column)?;
        Ok(next)
    }

    /// Restart: replace this session wholesale with a fresh one.
    pub fn reset(&mut self) {
        *self = GameSession::new();
    }

    /// Human-readable summary of the session, derived from the
    /// authoritative state.
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn", self.current_turn.name()),
            GameStatus::Won(player) => format!("{} wins!", player.name()),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    /// Column order that, repeated six times, fills the board with
    /// alternating-row stripes (1 1 2 2 1 1 2 / 2 2 1 1 2 2 1) containing
    /// no four-in-a-row for either player.
    const DRAWING_ROUND: [usize; COLS] = [0, 2, 1, 3, 4, 6, 5];

    #[test]
    fn test_initial_session() {
        let session = GameSession::new();
        assert_eq!(session.current_turn(), Player::One);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert!(!session.is_game_over());
        assert_eq!(session.status_message(), "Player 1's turn");
    }

    #[test]
    fn test_first_move_lands_bottom_and_turn_alternates() {
        let mut session = GameSession::new();
        let row = session.apply_move(3).unwrap();

        assert_eq!(row, 5);
        assert_eq!(session.board().get(5, 3), Some(Player::One));
        assert!(session.board().is_valid_location(3));
        assert_eq!(session.current_turn(), Player::Two);
        assert_eq!(session.status_message(), "Player 2's turn");
    }

    #[test]
    fn test_full_column_rejected_without_state_change() {
        let mut session = GameSession::new();
        for _ in 0..ROWS {
            session.apply_move(0).unwrap();
        }

        let before = session;
        assert_eq!(session.apply_move(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(session, before);
        assert_eq!(session.current_turn(), Player::One);
    }

    #[test]
    fn test_invalid_column_rejected_without_state_change() {
        let mut session = GameSession::new();
        let before = session;
        assert_eq!(session.apply_move(COLS), Err(MoveError::InvalidColumn(COLS)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_horizontal_win_ends_game() {
        let mut session = GameSession::new();

        // One builds the bottom row across columns 0..=3; Two answers in
        // the same columns one row up, never completing four.
        for col in 0..3 {
            session.apply_move(col).unwrap(); // One at (5, col)
            session.apply_move(col).unwrap(); // Two at (4, col)
        }
        session.apply_move(3).unwrap(); // One at (5, 3): four in a row

        assert_eq!(session.status(), GameStatus::Won(Player::One));
        assert!(session.is_game_over());
        // Winner keeps the turn
        assert_eq!(session.current_turn(), Player::One);
        assert_eq!(session.status_message(), "Player 1 wins!");
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut session = GameSession::new();
        for col in 0..3 {
            session.apply_move(col).unwrap();
            session.apply_move(col).unwrap();
        }
        session.apply_move(3).unwrap();
        assert!(session.is_game_over());

        let before = session;
        assert_eq!(session.apply_move(6), Err(MoveError::GameOver));
        assert_eq!(session, before);
    }

    #[test]
    fn test_vertical_win() {
        let mut session = GameSession::new();
        // One stacks column 0, Two stacks column 1
        for _ in 0..3 {
            session.apply_move(0).unwrap();
            session.apply_move(1).unwrap();
        }
        session.apply_move(0).unwrap();

        assert_eq!(session.status(), GameStatus::Won(Player::One));
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut session = GameSession::new();
        for _ in 0..ROWS {
            for &col in &DRAWING_ROUND {
                session.apply_move(col).unwrap();
            }
        }

        assert!(session.board().is_full());
        assert_eq!(session.status(), GameStatus::Draw);
        assert!(session.is_game_over());
        assert_eq!(session.status_message(), "It's a draw!");

        let before = session;
        assert_eq!(session.apply_move(0), Err(MoveError::GameOver));
        assert_eq!(session, before);
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let session = GameSession::new();
        let next = session.with_move(2).unwrap();

        assert_eq!(session.board().get(5, 2), None);
        assert_eq!(session.current_turn(), Player::One);
        assert_eq!(next.board().get(5, 2), Some(Player::One));
        assert_eq!(next.current_turn(), Player::Two);
    }

    #[test]
    fn test_reset_restores_fresh_session() {
        let mut session = GameSession::new();
        session.apply_move(3).unwrap();
        session.apply_move(4).unwrap();

        session.reset();
        assert_eq!(session, GameSession::new());
    }
}
