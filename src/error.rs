use std::path::PathBuf;

/// Errors from constructing or reading a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height} (both must be at least 4)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("cell ({row}, {column}) is outside the board")]
    OutOfBounds { row: usize, column: usize },
}

/// Reasons a move is rejected. None of these change the game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} does not exist (board has {width} columns)")]
    InvalidColumn { column: usize, width: usize },

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidDimensions {
            width: 3,
            height: 6,
        };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 3x6 (both must be at least 4)"
        );
        let err = BoardError::OutOfBounds { row: 6, column: 0 };
        assert_eq!(err.to_string(), "cell (6, 0) is outside the board");
    }

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn {
                column: 7,
                width: 7
            }
            .to_string(),
            "column 7 does not exist (board has 7 columns)"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 2 }.to_string(),
            "column 2 is full"
        );
        assert_eq!(MoveError::GameOver.to_string(), "game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be >= 4"
        );
    }
}
