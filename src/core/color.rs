//! Sides and pieces.
//!
//! ## Color
//!
//! The two sides of a Breakthrough game. White starts on the high-index rows
//! and moves toward row 0; Black starts on rows 0 and 1 and moves toward
//! row `size - 1`.
//!
//! ## Piece
//!
//! A pawn-like piece. It carries nothing but its color; where it stands is
//! owned by the [`Board`](super::Board).

use serde::{Deserialize, Serialize};

/// One of the two sides.
///
/// Serialized as `"W"` / `"B"` to match the request boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Moves first, advances toward row 0.
    #[serde(rename = "W")]
    White,
    /// Advances toward row `size - 1`.
    #[serde(rename = "B")]
    Black,
}

impl Color {
    /// Both colors, White first.
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step.
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row this side must reach to win (the opponent's back rank).
    #[must_use]
    pub const fn goal_row(self, size: usize) -> usize {
        match self {
            Color::White => 0,
            Color::Black => size - 1,
        }
    }

    /// Sign used by absolute (White-positive) evaluators.
    #[must_use]
    pub const fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Single-letter code, as used on the wire.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
}

impl Piece {
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
    }

    #[test]
    fn test_goal_rows() {
        assert_eq!(Color::White.goal_row(8), 0);
        assert_eq!(Color::Black.goal_row(8), 7);
        assert_eq!(Color::Black.goal_row(5), 4);
    }

    #[test]
    fn test_forward_points_at_goal() {
        for size in [4usize, 6, 8] {
            for color in Color::BOTH {
                let start = color.opponent().goal_row(size) as isize;
                let goal = color.goal_row(size) as isize;
                assert_eq!((goal - start).signum(), color.forward());
            }
        }
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Color::White).unwrap(), "\"W\"");
        let piece: Piece = serde_json::from_str(r#"{"color":"B"}"#).unwrap();
        assert_eq!(piece, Piece::new(Color::Black));
    }
}
