use std::{error::Error, fmt, ops, str::FromStr};

use crate::{role::Role, types::Piece};

/// `Red` or `Blue`.
///
/// Red owns ranks 1 to 3 at the start of the game, blue owns ranks 8 to 10.
/// Blue moves first.
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Side {
    Red = 0,
    Blue = 1,
}

impl Side {
    pub const fn from_char(ch: char) -> Option<Side> {
        match ch {
            'r' => Some(Side::Red),
            'b' => Some(Side::Blue),
            _ => None,
        }
    }

    #[inline]
    pub const fn other(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    #[inline]
    pub fn fold<T>(self, red: T, blue: T) -> T {
        match self {
            Side::Red => red,
            Side::Blue => blue,
        }
    }

    #[inline]
    pub fn is_red(self) -> bool {
        matches!(self, Side::Red)
    }

    #[inline]
    pub fn is_blue(self) -> bool {
        matches!(self, Side::Blue)
    }

    pub fn char(self) -> char {
        self.fold('r', 'b')
    }

    #[inline]
    pub const fn soldier(self) -> Piece {
        Role::Soldier.of(self)
    }
    #[inline]
    pub const fn cannon(self) -> Piece {
        Role::Cannon.of(self)
    }
    #[inline]
    pub const fn chariot(self) -> Piece {
        Role::Chariot.of(self)
    }
    #[inline]
    pub const fn horse(self) -> Piece {
        Role::Horse.of(self)
    }
    #[inline]
    pub const fn elephant(self) -> Piece {
        Role::Elephant.of(self)
    }
    #[inline]
    pub const fn guard(self) -> Piece {
        Role::Guard.of(self)
    }
    #[inline]
    pub const fn general(self) -> Piece {
        Role::General.of(self)
    }

    /// `Red` and `Blue`, in this order.
    pub const ALL: [Side; 2] = [Side::Red, Side::Blue];
}

impl ops::Not for Side {
    type Output = Side;

    #[inline]
    fn not(self) -> Side {
        self.other()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fold("red", "blue"))
    }
}

/// Error when parsing an invalid side name.
#[derive(Clone, Debug)]
pub struct ParseSideError;

impl fmt::Display for ParseSideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid side")
    }
}

impl Error for ParseSideError {}

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Side, ParseSideError> {
        Ok(match s {
            "red" => Side::Red,
            "blue" => Side::Blue,
            _ => return Err(ParseSideError),
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Side {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Side {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Side, D::Error> {
        struct SideVisitor;

        impl serde::de::Visitor<'_> for SideVisitor {
            type Value = Side;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("side name like red or blue")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Side, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(SideVisitor)
    }
}

/// Container with values for each [`Side`].
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug, Hash)]
pub struct BySide<T> {
    pub red: T,
    pub blue: T,
}

impl<T> BySide<T> {
    #[inline]
    pub fn new_with<F>(mut init: F) -> BySide<T>
    where
        F: FnMut(Side) -> T,
    {
        BySide {
            red: init(Side::Red),
            blue: init(Side::Blue),
        }
    }

    #[inline]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Red => &self.red,
            Side::Blue => &self.blue,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Red => &mut self.red,
            Side::Blue => &mut self.blue,
        }
    }

    #[inline]
    pub fn map<U, F>(self, mut f: F) -> BySide<U>
    where
        F: FnMut(T) -> U,
    {
        BySide {
            red: f(self.red),
            blue: f(self.blue),
        }
    }
}
