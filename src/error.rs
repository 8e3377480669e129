use crate::board::Player;

/// Errors raised while building a board from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board needs at least one row")]
    Empty,

    #[error("board is not square: row {row} has {width} cells, expected {expected}")]
    NotSquare { row: usize, width: usize, expected: usize },

    #[error("unrecognised cell character {0:?}")]
    BadCell(char),
}

/// Misconfiguration of the engine or the match driver.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown difficulty {0:?} (expected easy, medium or impossible)")]
    UnknownDifficulty(String),

    #[error("unknown mode {0:?} (expected hvh or hvai)")]
    UnknownMode(String),

    #[error("unknown player {0:?} (expected x or o)")]
    UnknownPlayer(String),

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f64 },
}

/// Move selection refused to produce a move.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("game is already won by {winner}")]
    GameOver { winner: Player },

    #[error("invalid engine config: {0}")]
    Config(#[from] ConfigError),
}

/// Errors surfaced by the match controller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("illegal move ({row}, {col})")]
    IllegalMove { row: usize, col: usize },

    #[error("the game is over")]
    GameOver,

    #[error("it is the engine's turn")]
    NotYourTurn,

    #[error("it is not the engine's turn")]
    NotEngineTurn,

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
}
