//! Core Connect Four game logic: board representation, player types, and the
//! session state machine.

mod board;
mod player;
mod session;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use session::{GameSession, GameStatus};
