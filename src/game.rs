use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::Board;
use crate::config::{EngineConfig, MAX_LEVEL, POINTS_PER_LINE};
use crate::error::PlaceError;
use crate::piece::Piece;
use crate::types::{GameResult, GameState, PieceView, PlaceOutcome};

const PREVIEW_SIZE: usize = 4;

/// Supplies the pieces a game deals out.
pub trait PieceSource {
    fn next_piece(&mut self) -> Piece;
}

/// Uniform shape and color from a seeded generator.
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: StdRng,
}

impl RandomPieces {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl PieceSource for RandomPieces {
    fn next_piece(&mut self) -> Piece {
        Piece::random(&mut self.rng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    GameOver,
}

/// Everything that `reset` throws away.
#[derive(Debug, Clone)]
struct Round {
    board: Board,
    current: Piece,
    next: Piece,
    score: u32,
    level: u32,
    phase: Phase,
    last_cleared: u32,
    lines_cleared: u32,
    pieces_placed: u32,
}

impl Round {
    fn start(source: &mut dyn PieceSource) -> Self {
        let current = source.next_piece();
        let next = source.next_piece();
        Self {
            board: Board::new(),
            current,
            next,
            score: 0,
            level: 1,
            phase: Phase::Active,
            last_cleared: 0,
            lines_cleared: 0,
            pieces_placed: 0,
        }
    }
}

pub struct GameInstance {
    round: Round,
    source: Box<dyn PieceSource>,
}

impl GameInstance {
    pub fn new(mut source: Box<dyn PieceSource>) -> Self {
        let round = Round::start(source.as_mut());
        Self { round, source }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(Box::new(RandomPieces::new(config.resolve_seed())))
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_config(&EngineConfig::seeded(seed))
    }

    /// Draws a fresh piece from the source.
    pub fn generate_piece(&mut self) -> Piece {
        self.source.next_piece()
    }

    pub fn can_place(&self, piece: &Piece, row: i32, col: i32) -> bool {
        self.round.board.can_place(piece, row, col)
    }

    /// Writes `piece` onto the board when it fits. Returns whether it did.
    pub fn place_piece(&mut self, piece: &Piece, row: i32, col: i32) -> bool {
        self.round.board.place(piece, row, col).is_ok()
    }

    /// Clears full rows and columns, then scores them at the current level
    /// and levels up once if anything was cleared.
    pub fn clear_lines(&mut self) -> u32 {
        let round = &mut self.round;
        let cleared = round.board.clear_lines();
        round.score += cleared * POINTS_PER_LINE * round.level;
        if cleared > 0 {
            round.level = (round.level + 1).min(MAX_LEVEL);
            round.lines_cleared += cleared;
        }
        round.last_cleared = cleared;
        cleared
    }

    /// True when the next piece, laid at the top-left corner, overlaps a
    /// filled cell. Other positions are not tried.
    pub fn is_game_over(&self) -> bool {
        self.round.board.collides_at_origin(&self.round.next)
    }

    /// Places the current piece with its top-left at `(row, col)`.
    ///
    /// On success the board is cleared and scored, the next piece becomes
    /// current, a new next piece is drawn, and the game-over check runs.
    /// On failure nothing changes.
    pub fn place(&mut self, row: i32, col: i32) -> Result<PlaceOutcome, PlaceError> {
        if self.round.phase == Phase::GameOver {
            return Err(PlaceError::GameOver);
        }

        let piece = self.round.current;
        if let Err(err) = self.round.board.place(&piece, row, col) {
            tracing::debug!("rejected {:?} at ({}, {}): {}", piece.kind(), row, col, err);
            return Err(err);
        }
        self.round.pieces_placed += 1;

        let level_before = self.round.level;
        let cleared = self.clear_lines();

        self.round.current = self.round.next;
        self.round.next = self.source.next_piece();

        if self.is_game_over() {
            self.round.phase = Phase::GameOver;
            tracing::info!("game over with score {}", self.round.score);
        }

        tracing::debug!(
            "placed {:?} at ({}, {}), cleared {}, score {}",
            piece.kind(),
            row,
            col,
            cleared,
            self.round.score
        );

        Ok(PlaceOutcome {
            cleared,
            points: cleared * POINTS_PER_LINE * level_before,
            level: self.round.level,
            is_game_over: self.round.phase == Phase::GameOver,
        })
    }

    /// Starts a new round: empty board, score 0, level 1, two new pieces.
    pub fn reset(&mut self) {
        self.round = Round::start(self.source.as_mut());
        tracing::info!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.round.board
    }

    pub fn current_piece(&self) -> &Piece {
        &self.round.current
    }

    pub fn next_piece(&self) -> &Piece {
        &self.round.next
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn level(&self) -> u32 {
        self.round.level
    }

    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    /// The next piece laid into a 4x4 preview grid, row-major, 0 = empty.
    pub fn preview_cells(&self) -> Vec<u8> {
        let mut cells = vec![0u8; PREVIEW_SIZE * PREVIEW_SIZE];
        let next = &self.round.next;
        let matrix = next.matrix();
        let color = next.color().index();
        let (height, width) = (
            matrix.height().min(PREVIEW_SIZE),
            matrix.width().min(PREVIEW_SIZE),
        );
        for (r, line) in matrix.rows().iter().enumerate().take(height) {
            for (c, &filled) in line.iter().enumerate().take(width) {
                if filled {
                    cells[r * PREVIEW_SIZE + c] = color;
                }
            }
        }
        cells
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.round.board.to_array().to_vec(),
            current_piece: PieceView::from(&self.round.current),
            next_piece: PieceView::from(&self.round.next),
            score: self.round.score,
            level: self.round.level,
            is_game_over: self.round.phase == Phase::GameOver,
            last_cleared: self.round.last_cleared,
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        GameResult {
            score: self.round.score,
            level: self.round.level,
            lines_cleared: self.round.lines_cleared,
            pieces_placed: self.round.pieces_placed,
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board) {
        self.round.board = board;
    }

    #[cfg(test)]
    fn set_level_for_test(&mut self, level: u32) {
        self.round.level = level;
    }
}

/// Deals a fixed sequence of pieces, repeating it forever.
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    pieces: Vec<Piece>,
    cursor: usize,
}

impl ScriptedPieces {
    /// # Panics
    ///
    /// Panics if `pieces` is empty.
    pub fn new(pieces: Vec<Piece>) -> Self {
        assert!(!pieces.is_empty(), "scripted piece list is empty");
        Self { pieces, cursor: 0 }
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> Piece {
        let piece = self.pieces[self.cursor % self.pieces.len()];
        self.cursor += 1;
        piece
    }
}
