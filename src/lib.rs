use wasm_bindgen::prelude::*;

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod piece;
pub mod types;

pub use error::PlaceError;
pub use game::{GameInstance, Phase, PieceSource, RandomPieces, ScriptedPieces};
pub use piece::{Color, Piece, ShapeKind};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
