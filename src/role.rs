use std::{error::Error, fmt, str::FromStr};

use crate::{side::Side, types::Piece};

/// Piece kinds: `Soldier`, `Cannon`, `Chariot`, `Horse`, `Elephant`,
/// `Guard`, `General`.
///
/// # Examples
///
/// ```
/// use janggi::Role;
///
/// assert_eq!(Role::from_char('G'), Some(Role::General));
/// assert_eq!(Role::from_char('X'), None);
/// ```
#[allow(missing_docs)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Role {
    Soldier = 1,
    Cannon = 2,
    Chariot = 3,
    Horse = 4,
    Elephant = 5,
    Guard = 6,
    General = 7,
}

impl Role {
    /// Gets the piece kind from its letter. `a` stands for the guard,
    /// following the xiangqi convention of calling it an advisor.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'S' | 's' => Some(Self::Soldier),
            'C' | 'c' => Some(Self::Cannon),
            'R' | 'r' => Some(Self::Chariot),
            'H' | 'h' => Some(Self::Horse),
            'E' | 'e' => Some(Self::Elephant),
            'A' | 'a' => Some(Self::Guard),
            'G' | 'g' => Some(Self::General),
            _ => None,
        }
    }

    /// Gets a [`Piece`] of the given side.
    ///
    /// # Examples
    ///
    /// ```
    /// use janggi::{Role, Side};
    ///
    /// assert_eq!(Role::General.of(Side::Blue), Side::Blue.general());
    /// ```
    #[inline]
    pub const fn of(self, side: Side) -> Piece {
        Piece { side, role: self }
    }

    /// Gets the lowercase letter for the piece kind.
    pub const fn char(self) -> char {
        match self {
            Self::Soldier => 's',
            Self::Cannon => 'c',
            Self::Chariot => 'r',
            Self::Horse => 'h',
            Self::Elephant => 'e',
            Self::Guard => 'a',
            Self::General => 'g',
        }
    }

    /// Gets the uppercase letter for the piece kind.
    pub const fn upper_char(self) -> char {
        match self {
            Self::Soldier => 'S',
            Self::Cannon => 'C',
            Self::Chariot => 'R',
            Self::Horse => 'H',
            Self::Elephant => 'E',
            Self::Guard => 'A',
            Self::General => 'G',
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Soldier => "soldier",
            Self::Cannon => "cannon",
            Self::Chariot => "chariot",
            Self::Horse => "horse",
            Self::Elephant => "elephant",
            Self::Guard => "guard",
            Self::General => "general",
        }
    }

    /// All seven piece kinds, in discriminant order.
    pub const ALL: [Self; 7] = [
        Self::Soldier,
        Self::Cannon,
        Self::Chariot,
        Self::Horse,
        Self::Elephant,
        Self::Guard,
        Self::General,
    ];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing an invalid piece kind name.
#[derive(Clone, Debug)]
pub struct ParseRoleError;

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid role")
    }
}

impl Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Role, ParseRoleError> {
        Role::ALL
            .into_iter()
            .find(|role| role.name() == s)
            .ok_or(ParseRoleError)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Role, D::Error> {
        struct RoleVisitor;

        impl serde::de::Visitor<'_> for RoleVisitor {
            type Value = Role;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("piece kind name like soldier or general")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Role, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(RoleVisitor)
    }
}
