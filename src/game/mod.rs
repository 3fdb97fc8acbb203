//! Core Connect Four game logic: board representation, player types, the
//! game state machine, and the engine contract used by front ends.

mod board;
mod engine;
mod player;
mod state;

pub use board::{Board, Cell, DropError, DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_DIMENSION};
pub use engine::{new_game, play_move, MoveResult};
pub use player::Player;
pub use state::{GameState, GameStatus, Placement};
