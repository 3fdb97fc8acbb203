use super::board::DropError;
use super::{Board, Cell, Player};
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Where an accepted move put its piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    moves_played: usize,
}

impl GameState {
    /// Create initial game state on the default 7x6 board
    pub fn new() -> Self {
        Self::with_board(Board::default())
    }

    /// Create initial game state on a board of the given size
    pub fn with_dimensions(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(width, height)?))
    }

    /// A fresh game on an empty board of the same size.
    pub fn restart(&self) -> Self {
        Self::with_board(self.board.empty_like())
    }

    fn with_board(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::One,
            status: GameStatus::InProgress,
            moves_played: 0,
        }
    }

    /// Get current player. After the game ends this is the player who made
    /// the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, row: usize, column: usize) -> Result<Cell, BoardError> {
        self.board.cell_at(row, column)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<(GameState, Placement), MoveError> {
        let mut next = self.clone();
        let placement = next.play(column)?;
        Ok((next, placement))
    }

    /// Apply move in place. A rejected move leaves the state untouched.
    pub fn play(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let width = self.board.width();
        let row = self
            .board
            .drop_in_column(column, player)
            .map_err(|e| match e {
                DropError::ColumnFull => MoveError::ColumnFull { column },
                DropError::InvalidColumn => MoveError::InvalidColumn { column, width },
            })?;
        self.moves_played += 1;

        // No line existed before this move, so any line found is the mover's.
        if self.board.find_four().is_some() {
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.other();
        }

        Ok(Placement {
            player,
            row,
            column,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::One);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns().len(), 7);
        assert_eq!(state.moves_played(), 0);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::new();
        let (new_state, placement) = state.apply_move(3).unwrap();

        assert_eq!(
            placement,
            Placement {
                player: Player::One,
                row: 5,
                column: 3
            }
        );
        assert_eq!(new_state.current_player(), Player::Two);
        assert_eq!(new_state.cell_at(5, 3), Ok(Cell::Occupied(Player::One)));
        // The original is untouched
        assert_eq!(state.cell_at(5, 3), Ok(Cell::Empty));
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::new();

        // Player 1 wins with horizontal line
        for col in 0..4 {
            state.play(col).unwrap(); // Player 1
            if col < 3 {
                state.play(col).unwrap(); // Player 2 (row above)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.status(), GameStatus::Won(Player::One));
        assert_eq!(state.current_player(), Player::One);
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_move_after_game_over_is_rejected() {
        let mut state = GameState::new();
        for _ in 0..3 {
            state.play(0).unwrap();
            state.play(1).unwrap();
        }
        state.play(0).unwrap();
        let finished = state.clone();

        assert_eq!(state.play(2), Err(MoveError::GameOver));
        assert_eq!(state, finished);
    }

    #[test]
    fn test_full_column_does_not_advance_turn() {
        let mut state = GameState::new();
        // Alternating pieces in one column never line up
        for _ in 0..6 {
            state.play(0).unwrap();
        }
        let before = state.clone();

        assert_eq!(state.play(0), Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(state, before);
        assert_eq!(state.current_player(), Player::One);
    }

    #[test]
    fn test_invalid_column() {
        let state = GameState::new();
        assert_eq!(
            state.apply_move(7).unwrap_err(),
            MoveError::InvalidColumn {
                column: 7,
                width: 7
            }
        );
    }

    #[test]
    fn test_with_dimensions() {
        let state = GameState::with_dimensions(10, 8).unwrap();
        assert_eq!(state.board().width(), 10);
        assert_eq!(state.board().height(), 8);
        assert!(GameState::with_dimensions(3, 8).is_err());
    }

    #[test]
    fn test_restart_keeps_dimensions() {
        let mut state = GameState::with_dimensions(5, 4).unwrap();
        state.play(0).unwrap();
        state.play(4).unwrap();

        let fresh = state.restart();
        assert_eq!(fresh, GameState::with_dimensions(5, 4).unwrap());
        assert_eq!(state.moves_played(), 2);
    }
}
