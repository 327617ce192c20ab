use std::fmt;

use crate::{role::Role, side::Side};

/// A piece with [`Side`] and [`Role`].
///
/// # Examples
///
/// ```
/// use janggi::{Piece, Role, Side};
///
/// let piece = Side::Red.cannon();
/// assert_eq!(piece.char(), 'C');
/// assert_eq!(Piece::from_char('c'), Some(Side::Blue.cannon()));
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Piece {
    pub side: Side,
    pub role: Role,
}

impl Piece {
    /// Gets the letter for the piece, uppercase for red.
    pub fn char(self) -> char {
        self.side
            .fold(self.role.upper_char(), self.role.char())
    }

    /// Gets the piece from its letter, uppercase for red.
    pub fn from_char(ch: char) -> Option<Piece> {
        Role::from_char(ch).map(|role| {
            role.of(if ch.is_ascii_uppercase() {
                Side::Red
            } else {
                Side::Blue
            })
        })
    }
}

/// The result of a game, or the lack of one so far.
///
/// The only terminal condition in this engine is checkmate. There is no
/// draw result.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Outcome {
    /// The game is still being played.
    InProgress,
    /// The given side delivered checkmate.
    Won(Side),
}

impl Outcome {
    #[inline]
    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won(side) => Some(side),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => f.write_str("in progress"),
            Outcome::Won(side) => write!(f, "{side} won"),
        }
    }
}
