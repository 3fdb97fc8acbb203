//! The by-value contract handed to front ends: start a game, play a column,
//! get back the next state and where the piece landed.

use super::GameState;
use crate::error::{BoardError, MoveError};

/// Outcome of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub state: GameState,
    pub row: usize,
    pub column: usize,
}

/// Start a game on a `width` x `height` board with Player 1 to move.
pub fn new_game(width: usize, height: usize) -> Result<GameState, BoardError> {
    GameState::with_dimensions(width, height)
}

/// Play the current player's piece into `column`.
///
/// On error the caller keeps its state unchanged: a full or missing column
/// should prompt for another column, and a finished game should block input
/// until a new one starts.
pub fn play_move(mut state: GameState, column: usize) -> Result<MoveResult, MoveError> {
    let placement = state.play(column)?;
    Ok(MoveResult {
        state,
        row: placement.row,
        column: placement.column,
    })
}
