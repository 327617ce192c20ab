use std::{fmt, fmt::Write as _, ops};

use crate::square::Square;

/// A set of squares, one bit for each of the 90 intersections.
///
/// # Examples
///
/// ```
/// use janggi::{Square, SquareSet};
///
/// let set = SquareSet::EMPTY.with(Square::E2).with(Square::E9);
/// assert!(set.contains(Square::E2));
/// assert_eq!(set.count(), 2);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct SquareSet(u128);

impl SquareSet {
    /// The empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// The set containing all 90 squares.
    pub const FULL: SquareSet = SquareSet((1 << 90) - 1);

    #[inline]
    pub const fn from_square(square: Square) -> SquareSet {
        SquareSet(1 << square.index())
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1 << square.index()) != 0
    }

    #[inline]
    pub fn add(&mut self, square: Square) {
        self.0 |= 1 << square.index();
    }

    #[inline]
    pub fn remove(&mut self, square: Square) {
        self.0 &= !(1 << square.index());
    }

    #[inline]
    pub const fn with(self, square: Square) -> SquareSet {
        SquareSet(self.0 | 1 << square.index())
    }

    #[inline]
    pub const fn without(self, square: Square) -> SquareSet {
        SquareSet(self.0 & !(1 << square.index()))
    }

    #[inline]
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn first(self) -> Option<Square> {
        if self.is_empty() {
            None
        } else {
            Some(Square::from_index_unchecked(self.0.trailing_zeros() as u8))
        }
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..10).rev() {
            for file in 0..9 {
                if let Some(square) = Square::from_coords(file, rank) {
                    f.write_char(if self.contains(square) { '1' } else { '.' })?;
                    f.write_char(if file < 8 { ' ' } else { '\n' })?;
                }
            }
        }
        Ok(())
    }
}

impl ops::BitAnd for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

impl ops::BitOr for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl ops::BitXor for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn bitxor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 ^ rhs.0)
    }
}

impl ops::Not for SquareSet {
    type Output = SquareSet;

    #[inline]
    fn not(self) -> SquareSet {
        SquareSet(!self.0) & SquareSet::FULL
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<T: IntoIterator<Item = Square>>(iter: T) -> SquareSet {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.add(square);
        }
        set
    }
}

impl Iterator for SquareSet {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let square = self.first();
        self.0 &= self.0.wrapping_sub(1);
        square
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.count();
        (len, Some(len))
    }
}

impl ExactSizeIterator for SquareSet {
    fn len(&self) -> usize {
        self.count()
    }
}

impl std::iter::FusedIterator for SquareSet {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full() {
        assert_eq!(SquareSet::FULL.count(), 90);
        assert_eq!(!SquareSet::FULL, SquareSet::EMPTY);
    }

    #[test]
    fn test_first() {
        assert_eq!(SquareSet::from_square(Square::A1).first(), Some(Square::A1));
        assert_eq!(SquareSet::EMPTY.first(), None);
    }

    #[test]
    fn test_iter() {
        let set = SquareSet::EMPTY
            .with(Square::I10)
            .with(Square::E2)
            .with(Square::A1);
        assert_eq!(
            set.collect::<Vec<_>>(),
            vec![Square::A1, Square::E2, Square::I10]
        );
    }

    #[test]
    fn test_with_without() {
        let set = SquareSet::EMPTY.with(Square::D5);
        assert!(set.contains(Square::D5));
        assert!(set.without(Square::D5).is_empty());
    }
}
