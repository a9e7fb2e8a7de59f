use thiserror::Error;

/// Reasons a placement request is rejected. A rejected placement never
/// mutates the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// A cell of the piece would land outside the 8x8 board.
    #[error("piece cell out of bounds at ({row}, {col})")]
    OutOfBounds { row: i32, col: i32 },

    /// A cell of the piece would land on an already filled cell.
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    /// The game has ended; only a reset is accepted.
    #[error("game is already over")]
    GameOver,
}
