use std::{error::Error, fmt, str::FromStr};

/// An intersection of the 9 by 10 Janggi board.
///
/// Squares are numbered file-major from `A1` (index 0, red's left corner)
/// to `I10` (index 89). Rank 1 is red's back edge, rank 10 is blue's.
///
/// # Examples
///
/// ```
/// use janggi::Square;
///
/// assert_eq!(Square::from_coords(4, 1), Some(Square::E2));
/// assert_eq!("i10".parse::<Square>().ok(), Some(Square::I10));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub struct Square(u8);

impl Square {
    /// Tries to get a square from zero-based file and rank coordinates.
    /// Returns `None` if the coordinates are off the board.
    #[inline]
    pub const fn from_coords(file: i32, rank: i32) -> Option<Square> {
        if 0 <= file && file < 9 && 0 <= rank && rank < 10 {
            Some(Square((rank * 9 + file) as u8))
        } else {
            None
        }
    }

    /// Gets the square index, in the range `0..90`.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Gets the zero-based file, `0` for file `a`.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 9
    }

    /// Gets the zero-based rank, `0` for rank `1`.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 9
    }

    /// Mirrors the square across the horizontal midline of the board,
    /// keeping the file.
    ///
    /// # Examples
    ///
    /// ```
    /// use janggi::Square;
    ///
    /// assert_eq!(Square::E2.flip_vertical(), Square::E9);
    /// assert_eq!(Square::A1.flip_vertical(), Square::A10);
    /// ```
    #[inline]
    pub const fn flip_vertical(self) -> Square {
        Square((9 - self.rank()) * 9 + self.file())
    }

    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 90);
        Square(index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file()),
            u32::from(self.rank()) + 1
        )
    }
}

/// Error when parsing an invalid square name.
#[derive(Clone, Debug)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid square name")
    }
}

impl Error for ParseSquareError {}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Square, ParseSquareError> {
        let bytes = s.as_bytes();
        if bytes.len() < 2 || bytes.len() > 3 {
            return Err(ParseSquareError);
        }
        let file = match bytes[0] {
            ch @ b'a'..=b'i' => i32::from(ch - b'a'),
            _ => return Err(ParseSquareError),
        };
        if bytes[1] == b'0' {
            return Err(ParseSquareError);
        }
        let rank: u32 = btoi::btou(&bytes[1..]).map_err(|_| ParseSquareError)?;
        if !(1..=10).contains(&rank) {
            return Err(ParseSquareError);
        }
        Square::from_coords(file, rank as i32 - 1).ok_or(ParseSquareError)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Square, D::Error> {
        struct SquareVisitor;

        impl serde::de::Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("square name like e2 or i10")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Square, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}

#[allow(missing_docs)]
impl Square {
    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const I1: Square = Square(8);
    pub const A2: Square = Square(9);
    pub const B2: Square = Square(10);
    pub const C2: Square = Square(11);
    pub const D2: Square = Square(12);
    pub const E2: Square = Square(13);
    pub const F2: Square = Square(14);
    pub const G2: Square = Square(15);
    pub const H2: Square = Square(16);
    pub const I2: Square = Square(17);
    pub const A3: Square = Square(18);
    pub const B3: Square = Square(19);
    pub const C3: Square = Square(20);
    pub const D3: Square = Square(21);
    pub const E3: Square = Square(22);
    pub const F3: Square = Square(23);
    pub const G3: Square = Square(24);
    pub const H3: Square = Square(25);
    pub const I3: Square = Square(26);
    pub const A4: Square = Square(27);
    pub const B4: Square = Square(28);
    pub const C4: Square = Square(29);
    pub const D4: Square = Square(30);
    pub const E4: Square = Square(31);
    pub const F4: Square = Square(32);
    pub const G4: Square = Square(33);
    pub const H4: Square = Square(34);
    pub const I4: Square = Square(35);
    pub const A5: Square = Square(36);
    pub const B5: Square = Square(37);
    pub const C5: Square = Square(38);
    pub const D5: Square = Square(39);
    pub const E5: Square = Square(40);
    pub const F5: Square = Square(41);
    pub const G5: Square = Square(42);
    pub const H5: Square = Square(43);
    pub const I5: Square = Square(44);
    pub const A6: Square = Square(45);
    pub const B6: Square = Square(46);
    pub const C6: Square = Square(47);
    pub const D6: Square = Square(48);
    pub const E6: Square = Square(49);
    pub const F6: Square = Square(50);
    pub const G6: Square = Square(51);
    pub const H6: Square = Square(52);
    pub const I6: Square = Square(53);
    pub const A7: Square = Square(54);
    pub const B7: Square = Square(55);
    pub const C7: Square = Square(56);
    pub const D7: Square = Square(57);
    pub const E7: Square = Square(58);
    pub const F7: Square = Square(59);
    pub const G7: Square = Square(60);
    pub const H7: Square = Square(61);
    pub const I7: Square = Square(62);
    pub const A8: Square = Square(63);
    pub const B8: Square = Square(64);
    pub const C8: Square = Square(65);
    pub const D8: Square = Square(66);
    pub const E8: Square = Square(67);
    pub const F8: Square = Square(68);
    pub const G8: Square = Square(69);
    pub const H8: Square = Square(70);
    pub const I8: Square = Square(71);
    pub const A9: Square = Square(72);
    pub const B9: Square = Square(73);
    pub const C9: Square = Square(74);
    pub const D9: Square = Square(75);
    pub const E9: Square = Square(76);
    pub const F9: Square = Square(77);
    pub const G9: Square = Square(78);
    pub const H9: Square = Square(79);
    pub const I9: Square = Square(80);
    pub const A10: Square = Square(81);
    pub const B10: Square = Square(82);
    pub const C10: Square = Square(83);
    pub const D10: Square = Square(84);
    pub const E10: Square = Square(85);
    pub const F10: Square = Square(86);
    pub const G10: Square = Square(87);
    pub const H10: Square = Square(88);
    pub const I10: Square = Square(89);
}
