//! # Connect Four Engine
//!
//! The rules engine for Connect Four: board state, move legality, and
//! win/draw detection. The engine is a deterministic, side-effect-isolated
//! game-state module; a presentation layer (CLI, TUI, web) owns a
//! [`GameSession`] and drives it through the public API.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, session state machine
//! - [`error`] — Structured error types
//!
//! ```
//! use connect_four_engine::{GameSession, GameStatus, Player};
//!
//! let mut session = GameSession::new();
//! let row = session.apply_move(3).unwrap();
//! assert_eq!(row, 5); // pieces fall to the bottom
//! assert_eq!(session.current_turn(), Player::Two);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! ```

pub mod error;
pub mod game;

pub use error::MoveError;
pub use game::{Board, Cell, GameSession, GameStatus, Player, COLS, ROWS};
