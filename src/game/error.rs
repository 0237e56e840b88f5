use thiserror::Error;

/// Errors raised by the engine and its containers.
///
/// All of these indicate a programming or integration mistake rather than an
/// expected runtime condition; a lost game is reported through
/// [`GameStatus`](super::GameStatus), never through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cannot {operation} an empty queue")]
    EmptyQueue { operation: &'static str },

    #[error("position ({row}, {col}) is outside the {size}x{size} arena")]
    OutOfBounds { row: i32, col: i32, size: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
