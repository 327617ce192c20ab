use std::{fmt, fmt::Write as _};

use crate::{side::Side, square::Square, types::Piece};

/// The fixed mirrored starting layout, 16 pieces per side.
pub(crate) const STARTING: [(Piece, Square); 32] = [
    (Side::Red.chariot(), Square::A1),
    (Side::Red.elephant(), Square::B1),
    (Side::Red.horse(), Square::C1),
    (Side::Red.guard(), Square::D1),
    (Side::Red.guard(), Square::F1),
    (Side::Red.elephant(), Square::G1),
    (Side::Red.horse(), Square::H1),
    (Side::Red.chariot(), Square::I1),
    (Side::Red.general(), Square::E2),
    (Side::Red.cannon(), Square::B3),
    (Side::Red.cannon(), Square::H3),
    (Side::Red.soldier(), Square::A4),
    (Side::Red.soldier(), Square::C4),
    (Side::Red.soldier(), Square::E4),
    (Side::Red.soldier(), Square::G4),
    (Side::Red.soldier(), Square::I4),
    (Side::Blue.soldier(), Square::A7),
    (Side::Blue.soldier(), Square::C7),
    (Side::Blue.soldier(), Square::E7),
    (Side::Blue.soldier(), Square::G7),
    (Side::Blue.soldier(), Square::I7),
    (Side::Blue.cannon(), Square::B8),
    (Side::Blue.cannon(), Square::H8),
    (Side::Blue.general(), Square::E9),
    (Side::Blue.chariot(), Square::A10),
    (Side::Blue.elephant(), Square::B10),
    (Side::Blue.horse(), Square::C10),
    (Side::Blue.guard(), Square::D10),
    (Side::Blue.guard(), Square::F10),
    (Side::Blue.elephant(), Square::G10),
    (Side::Blue.horse(), Square::H10),
    (Side::Blue.chariot(), Square::I10),
];

/// Piece occupancy for every one of the 90 squares.
///
/// The board records only which piece stands where. Whose turn it is,
/// check status and the game result live in [`Janggi`](crate::Janggi).
/// Snapshots for speculative moves are plain clones; a clone shares no
/// state with the original.
#[derive(Clone, Eq, PartialEq)]
pub struct Board {
    slots: [Option<Piece>; 90],
}

impl Board {
    /// An empty board.
    pub const fn empty() -> Board {
        Board { slots: [None; 90] }
    }

    /// Sets up the starting layout.
    pub fn starting() -> Board {
        let mut board = Board::empty();
        for &(piece, square) in &STARTING {
            board.place(piece, square);
        }
        board
    }

    /// Gets the piece at the given square, if any.
    #[inline]
    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.slots[square.index()]
    }

    /// Puts a piece on the given square, replacing any previous occupant.
    #[inline]
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.slots[square.index()] = Some(piece);
    }

    /// Empties the given square.
    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.slots[square.index()] = None;
    }

    /// Iterator over all occupied squares.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.map(|piece| (Square::from_index_unchecked(index as u8), piece))
            })
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..10).rev() {
            for file in 0..9 {
                if let Some(square) = Square::from_coords(file, rank) {
                    f.write_char(self.occupant(square).map_or('.', Piece::char))?;
                    f.write_char(if file < 8 { ' ' } else { '\n' })?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_layout() {
        let board = Board::starting();
        assert_eq!(board.iter().count(), 32);
        assert_eq!(board.occupant(Square::E2), Some(Side::Red.general()));
        assert_eq!(board.occupant(Square::E9), Some(Side::Blue.general()));
        assert_eq!(board.occupant(Square::B3), Some(Side::Red.cannon()));
        assert_eq!(board.occupant(Square::I10), Some(Side::Blue.chariot()));
        assert_eq!(board.occupant(Square::E5), None);
    }

    #[test]
    fn test_place_clear() {
        let mut board = Board::empty();
        board.place(Side::Blue.horse(), Square::D5);
        assert_eq!(board.occupant(Square::D5), Some(Side::Blue.horse()));
        board.clear(Square::D5);
        assert_eq!(board.occupant(Square::D5), None);
    }

    #[test]
    fn test_clone_is_a_snapshot() {
        let board = Board::starting();
        let mut live = board.clone();
        live.clear(Square::E2);
        live.place(Side::Red.general(), Square::E1);
        assert_eq!(board.occupant(Square::E2), Some(Side::Red.general()));
        assert_eq!(board.occupant(Square::E1), None);
    }
}
