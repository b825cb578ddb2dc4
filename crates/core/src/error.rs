use thiserror::Error;

/// Errors that can occur while playing or searching a game
#[derive(Error, Debug)]
pub enum TicTacError {
    #[error("Illegal move: {0}")]
    IllegalMove(String),

    #[error("Invalid cell value: {0} (expected -1, 0 or 1)")]
    InvalidCell(i8),

    #[error("Cannot parse move: {0}")]
    ParseMove(String),

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Game is not terminal")]
    NotTerminal,

    #[error("Game is already over")]
    GameOver,

    #[error("Input closed before a move was entered")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for game operations
pub type Result<T> = std::result::Result<T, TicTacError>;
