//! Core Tic-Tac-Toe game logic: board representation, player types, the
//! outcome evaluator, and a game state machine with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, GameOutcome, WinLine, CELLS, WIN_LINES};
pub use player::Player;
pub use state::{GameState, MoveError};
