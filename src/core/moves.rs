//! Move representation.
//!
//! A move relocates one piece one row forward. `capture` is set when the
//! destination held an enemy piece at generation time; it is informational
//! only, `apply_move` overwrites the destination either way.

use serde::{Deserialize, Serialize};

use super::board::Square;

/// A single piece move.
///
/// ```
/// use breakthrough_ai::core::{Move, Square};
///
/// let quiet = Move::new(Square::new(6, 0), Square::new(5, 0));
/// let json = serde_json::to_string(&quiet).unwrap();
/// assert_eq!(json, r#"{"from":[6,0],"to":[5,0]}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub capture: bool,
}

impl Move {
    /// A non-capturing move.
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            capture: false,
        }
    }

    /// A capturing move.
    #[must_use]
    pub const fn capture(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            capture: true,
        }
    }

    /// Whether the piece changes file.
    #[must_use]
    pub fn is_diagonal(&self) -> bool {
        self.from.col != self.to.col
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.capture { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let m = Move::capture(Square::new(3, 2), Square::new(2, 3));
        assert_eq!(m.to_string(), "3,2x2,3");
        assert_eq!(Move::new(Square::new(1, 1), Square::new(2, 1)).to_string(), "1,1-2,1");
    }

    #[test]
    fn test_is_diagonal() {
        assert!(Move::new(Square::new(6, 0), Square::new(5, 1)).is_diagonal());
        assert!(!Move::new(Square::new(6, 0), Square::new(5, 0)).is_diagonal());
    }

    #[test]
    fn test_serialization() {
        let m = Move::capture(Square::new(4, 4), Square::new(3, 5));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"from":[4,4],"to":[3,5],"capture":true}"#);

        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);

        let quiet: Move = serde_json::from_str(r#"{"from":[1,0],"to":[2,0]}"#).unwrap();
        assert!(!quiet.capture);
    }
}
