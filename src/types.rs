use serde::Serialize;

use crate::piece::Piece;

/// A piece as the UI renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub kind: String,
    /// Occupancy matrix, 1 = filled.
    pub shape: Vec<Vec<u8>>,
    pub color: String,
    pub color_index: u8,
}

impl From<&Piece> for PieceView {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: format!("{:?}", piece.kind()),
            shape: piece
                .matrix()
                .rows()
                .iter()
                .map(|row| row.iter().map(|&filled| u8::from(filled)).collect())
                .collect(),
            color: piece.color().hex().to_string(),
            color_index: piece.color().index(),
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// 64 cells row-major: 0 = empty, 1..=7 = palette index.
    pub board: Vec<u8>,
    pub current_piece: PieceView,
    pub next_piece: PieceView,
    pub score: u32,
    pub level: u32,
    pub is_game_over: bool,
    /// Rows plus columns removed by the most recent placement.
    pub last_cleared: u32,
}

/// What a successful placement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOutcome {
    pub cleared: u32,
    pub points: u32,
    pub level: u32,
    pub is_game_over: bool,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
    pub pieces_placed: u32,
}
