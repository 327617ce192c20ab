//! A library for Janggi (Korean chess) vocabulary and rules.
//!
//! The engine decides, for any proposed move, whether it is legal, what
//! it does to the board, and whether it ends the game. Rendering,
//! input loops and persistence are left to the caller.
//!
//! # Examples
//!
//! Start a game and play the opening moves of a fool's attack:
//!
//! ```
//! use janggi::{Janggi, Outcome, Side, Square};
//!
//! let mut game = Janggi::new();
//! assert_eq!(game.turn(), Side::Blue);
//!
//! assert!(game.submit_move(Square::C10, Square::D8)); // blue horse
//! assert!(game.submit_move(Square::E4, Square::F4)); // red soldier
//! assert!(game.submit_move(Square::B8, Square::E8)); // blue cannon
//!
//! assert!(game.is_in_check(Side::Red));
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```
//!
//! Illegal moves are rejected without touching the game:
//!
//! ```
//! # use janggi::{Janggi, Square};
//! # let mut game = Janggi::new();
//! assert!(!game.submit_move(Square::A4, Square::A5)); // not blue's piece
//! assert!(!game.submit_move(Square::B8, Square::B7)); // cannon without screen
//! ```
//!
//! Square names parse from algebraic notation, with file `a` to `i` and
//! rank `1` (red's back edge) to `10` (blue's):
//!
//! ```
//! use janggi::Square;
//!
//! assert_eq!("e9".parse::<Square>().ok(), Some(Square::E9));
//! assert!("j5".parse::<Square>().is_err());
//! ```
//!
//! # Feature flags
//!
//! * `serde`: Implements [`serde::Serialize`](https://docs.rs/serde/1/serde/trait.Serialize.html)
//!   and [`serde::Deserialize`](https://docs.rs/serde/1/serde/trait.Deserialize.html) for
//!   types with unique natural representations.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

mod board;
mod position;
mod role;
mod side;
mod square;
mod squareset;
mod types;

pub mod attacks;

pub use board::Board;
pub use position::Janggi;
pub use role::{ParseRoleError, Role};
pub use side::{BySide, ParseSideError, Side};
pub use square::{ParseSquareError, Square};
pub use squareset::SquareSet;
pub use types::{Outcome, Piece};
