use crate::{arena::MAX_OPENING_PLIES, board::Player, MAX_DEPTH, WIDTH};

/// Reasons a move can be refused. A refused move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {} out of range. Columns must be between 1 and {}", .column.saturating_add(1), WIDTH)]
    ColumnOutOfRange { column: usize },

    #[error("Invalid move, column {} full", .column.saturating_add(1))]
    ColumnFull { column: usize },

    #[error("the game is over, no further moves are accepted")]
    GameOver,

    #[error("it is {player}'s turn to move")]
    NotYourTurn { player: Player },

    #[error("no legal move is available")]
    NoLegalMove,

    #[error("could not parse '{character}' at position {position} as a valid move")]
    InvalidMoveString { position: usize, character: char },
}

/// Errors raised while building a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("search depth {depth} is too deep, the maximum is {}", MAX_DEPTH)]
    DepthTooLarge { depth: usize },
}

/// Errors raised by a computer-against-computer run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArenaError {
    #[error("at most {} opening plies are supported, got {plies}", MAX_OPENING_PLIES)]
    TooManyOpeningPlies { plies: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Move(#[from] MoveError),
}
