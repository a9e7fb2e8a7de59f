use once_cell::sync::Lazy;
use rand::Rng;
use serde::Serialize;

/// The seven block shapes, in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShapeKind {
    I,
    O,
    Z,
    S,
    J,
    L,
    T,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::T,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Palette entries. Board cells store `index()`, 0 being empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Coral,
    Teal,
    Sky,
    Sage,
    Amber,
    Pink,
    Blue,
}

impl Color {
    pub const ALL: [Color; 7] = [
        Color::Coral,
        Color::Teal,
        Color::Sky,
        Color::Sage,
        Color::Amber,
        Color::Pink,
        Color::Blue,
    ];

    /// Cell identifier in `1..=7`.
    pub fn index(self) -> u8 {
        self as u8 + 1
    }

    pub fn hex(self) -> &'static str {
        match self {
            Color::Coral => "#FF6B6B",
            Color::Teal => "#4ECDC4",
            Color::Sky => "#45B7D1",
            Color::Sage => "#96CEB4",
            Color::Amber => "#FECA57",
            Color::Pink => "#FF9FF3",
            Color::Blue => "#54A0FF",
        }
    }
}

/// Occupancy matrix of one shape plus its precomputed filled offsets.
#[derive(Debug)]
pub struct ShapeMatrix {
    rows: Vec<Vec<bool>>,
    cells: Vec<(usize, usize)>,
}

impl ShapeMatrix {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let rows: Vec<Vec<bool>> = rows
            .iter()
            .map(|row| row.iter().map(|&v| v != 0).collect())
            .collect();
        let cells = rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &filled)| filled)
                    .map(move |(c, _)| (r, c))
            })
            .collect();
        Self { rows, cells }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// `(row, col)` offsets of the occupied cells, row-major.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

static SHAPES: Lazy<[ShapeMatrix; 7]> = Lazy::new(|| {
    [
        ShapeMatrix::from_rows(&[&[1, 1, 1, 1]]),
        ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
        ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        ShapeMatrix::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        ShapeMatrix::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        ShapeMatrix::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
        ShapeMatrix::from_rows(&[&[1, 1, 1], &[1, 1, 0]]),
    ]
});

/// An immutable piece template: a shape and the color it paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    color: Color,
}

impl Piece {
    pub fn new(kind: ShapeKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Picks shape and color independently and uniformly.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
        let color = Color::ALL[rng.random_range(0..Color::ALL.len())];
        Self { kind, color }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn matrix(&self) -> &'static ShapeMatrix {
        &SHAPES[self.kind.index()]
    }

    pub fn cells(&self) -> &'static [(usize, usize)] {
        self.matrix().cells()
    }
}
