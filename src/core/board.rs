//! Square grid of optional pieces.
//!
//! Stored row-major in a flat `Vec` so that cloning a board for a new state
//! is a single allocation. On the wire a board is a `size × size` array of
//! rows whose cells are `null` or `{"color": "W" | "B"}`; deserialization
//! rejects grids that are not square.

use serde::{Deserialize, Serialize};

use super::color::{Color, Piece};
use crate::error::Error;

/// Smallest board accepted at the request boundary. Below this the two
/// starting rows of each side would overlap.
pub const MIN_SIZE: usize = 4;

/// Largest board accepted at the request boundary.
pub const MAX_SIZE: usize = 16;

/// A board coordinate, `(row, col)`.
///
/// Serialized as a two-element array `[row, col]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset this square, returning `None` when it leaves a `size`-board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize, size: usize) -> Option<Square> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < size && col < size).then_some(Square { row, col })
    }
}

impl From<(usize, usize)> for Square {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Square> for (usize, usize) {
    fn from(sq: Square) -> Self {
        (sq.row, sq.col)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// An N×N board. A cell holds at most one piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Option<Piece>>>", into = "Vec<Vec<Option<Piece>>>")]
pub struct Board {
    size: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Piece at a square. Panics if the square is off the board.
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row * self.size + sq.col]
    }

    /// Piece at `(row, col)`, `None` when off the board or empty.
    #[inline]
    #[must_use]
    pub fn get_checked(&self, row: isize, col: isize) -> Option<Piece> {
        if self.in_bounds(row, col) {
            self.cells[row as usize * self.size + col as usize]
        } else {
            None
        }
    }

    /// Color at a square, if occupied.
    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|p| p.color)
    }

    /// Place or clear a square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq.row * self.size + sq.col] = piece;
    }

    /// Whether `(row, col)` lies on the board.
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|p| (Square::new(i / size, i % size), p)))
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Option<Piece>> + '_ {
        self.cells.iter().copied()
    }

    /// One row of the board.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<Piece>] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Total number of pieces.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of pieces of one color.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Some(p) if p.color == color))
            .count()
    }

    /// Build a board from an ASCII diagram, one line per row.
    ///
    /// `W` / `B` are pieces, `.` is empty; whitespace is ignored.
    ///
    /// ```
    /// use breakthrough_ai::core::{Board, Color, Square};
    ///
    /// let board = Board::from_diagram("
    ///     B...
    ///     ....
    ///     ....
    ///     ...W
    /// ").unwrap();
    /// assert_eq!(board.color_at(Square::new(3, 3)), Some(Color::White));
    /// ```
    pub fn from_diagram(diagram: &str) -> Result<Self, Error> {
        let rows: Vec<Vec<Option<Piece>>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|chars| !chars.is_empty())
            .map(|chars| {
                chars
                    .into_iter()
                    .map(|c| match c {
                        'W' | 'w' => Some(Piece::new(Color::White)),
                        'B' | 'b' => Some(Piece::new(Color::Black)),
                        _ => None,
                    })
                    .collect()
            })
            .collect();
        Board::try_from(rows)
    }
}

impl TryFrom<Vec<Vec<Option<Piece>>>> for Board {
    type Error = Error;

    fn try_from(rows: Vec<Vec<Option<Piece>>>) -> Result<Self, Self::Error> {
        let size = rows.len();
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(Error::InvalidSize(size));
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != size {
                return Err(Error::BoardShape {
                    size,
                    row,
                    len: line.len(),
                });
            }
            cells.extend(line);
        }
        Ok(Self { size, cells })
    }
}

impl From<Board> for Vec<Vec<Option<Piece>>> {
    fn from(board: Board) -> Self {
        board.cells.chunks(board.size).map(<[_]>::to_vec).collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for cell in self.row(row) {
                let c = cell.map_or('.', |p| p.color.code());
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
