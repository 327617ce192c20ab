//! Move geometry and blocking rules.
//!
//! [`reachable`] answers whether a destination fits a piece's movement
//! shape, ignoring occupancy. [`blocked`] answers whether occupancy
//! forbids a destination that is already known reachable. [`moves`]
//! combines both into the full pseudo-legal destination set for a piece.
//! None of these consult whose turn it is or check status.

use crate::{
    board::Board, role::Role, side::Side, square::Square, squareset::SquareSet, types::Piece,
};

/// Red's palace, files `d` to `f` on ranks 1 to 3.
pub const RED_PALACE: SquareSet = SquareSet::EMPTY
    .with(Square::D1)
    .with(Square::E1)
    .with(Square::F1)
    .with(Square::D2)
    .with(Square::E2)
    .with(Square::F2)
    .with(Square::D3)
    .with(Square::E3)
    .with(Square::F3);

/// Blue's palace, files `d` to `f` on ranks 8 to 10.
pub const BLUE_PALACE: SquareSet = SquareSet::EMPTY
    .with(Square::D8)
    .with(Square::E8)
    .with(Square::F8)
    .with(Square::D9)
    .with(Square::E9)
    .with(Square::F9)
    .with(Square::D10)
    .with(Square::E10)
    .with(Square::F10);

/// The squares of red's palace connected by diagonal lines.
pub const RED_DIAGONALS: SquareSet = SquareSet::EMPTY
    .with(Square::D1)
    .with(Square::F1)
    .with(Square::E2)
    .with(Square::D3)
    .with(Square::F3);

/// The squares of blue's palace connected by diagonal lines.
pub const BLUE_DIAGONALS: SquareSet = SquareSet::EMPTY
    .with(Square::D8)
    .with(Square::F8)
    .with(Square::E9)
    .with(Square::D10)
    .with(Square::F10);

/// The palace for the given side.
#[inline]
pub const fn palace(side: Side) -> SquareSet {
    match side {
        Side::Red => RED_PALACE,
        Side::Blue => BLUE_PALACE,
    }
}

/// The palace diagonal-line squares for the given side.
#[inline]
pub const fn diagonals(side: Side) -> SquareSet {
    match side {
        Side::Red => RED_DIAGONALS,
        Side::Blue => BLUE_DIAGONALS,
    }
}

/// The center of the given side's palace.
#[inline]
pub const fn center(side: Side) -> Square {
    match side {
        Side::Red => Square::E2,
        Side::Blue => Square::E9,
    }
}

/// The four corners of the given side's palace.
#[inline]
pub const fn corners(side: Side) -> SquareSet {
    diagonals(side).without(center(side))
}

/// Tests whether `to` fits the movement shape of `piece` standing on
/// `from`, ignoring occupancy.
pub fn reachable(piece: Piece, from: Square, to: Square) -> bool {
    let dr = i32::from(to.rank()) - i32::from(from.rank());
    let dc = i32::from(to.file()) - i32::from(from.file());
    match piece.role {
        Role::Soldier => {
            // Forward is toward the opposing edge. Soldiers never retreat.
            let forward = piece.side.fold(1, -1);
            (dr == forward && dc == 0)
                || (dr == 0 && dc.abs() == 1)
                || (dr == forward
                    && dc.abs() == 1
                    && diagonals(!piece.side).contains(from)
                    && diagonals(!piece.side).contains(to))
        }
        Role::Guard | Role::General => {
            palace(piece.side).contains(to)
                && (dr.abs() + dc.abs() == 1
                    || (dr.abs() == 1
                        && dc.abs() == 1
                        && diagonals(piece.side).contains(from)
                        && diagonals(piece.side).contains(to)))
        }
        Role::Chariot => {
            dr == 0
                || dc == 0
                || Side::ALL
                    .iter()
                    .any(|&s| diagonals(s).contains(from) && diagonals(s).contains(to))
        }
        Role::Cannon => {
            (dr == 0 && dc.abs() > 1)
                || (dc == 0 && dr.abs() > 1)
                || Side::ALL
                    .iter()
                    .any(|&s| corners(s).contains(from) && corners(s).contains(to))
        }
        Role::Horse => matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1)),
        Role::Elephant => matches!((dr.abs(), dc.abs()), (2, 3) | (3, 2)),
    }
}

/// Tests whether occupancy forbids moving `piece` from `from` to `to`.
/// Only meaningful for destinations that are already [`reachable`].
pub fn blocked(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    if board
        .occupant(to)
        .is_some_and(|occupant| occupant.side == piece.side)
    {
        return true;
    }
    let dr = i32::from(to.rank()) - i32::from(from.rank());
    let dc = i32::from(to.file()) - i32::from(from.file());
    match piece.role {
        // Single-step pieces have no intermediate squares.
        Role::Soldier | Role::Guard | Role::General => false,
        Role::Chariot => {
            if dr == 0 || dc == 0 {
                between(from, to).any(|square| board.occupant(square).is_some())
            } else {
                // A corner-to-opposite-corner slide passes over the center.
                Side::ALL.iter().any(|&s| {
                    corners(s).contains(from)
                        && corners(s).contains(to)
                        && board.occupant(center(s)).is_some()
                })
            }
        }
        Role::Cannon => {
            if board
                .occupant(to)
                .is_some_and(|occupant| occupant.role == Role::Cannon)
            {
                return true;
            }
            if dr == 0 || dc == 0 {
                !single_screen(from, to, board)
            } else {
                !Side::ALL.iter().any(|&s| {
                    corners(s).contains(from)
                        && corners(s).contains(to)
                        && board
                            .occupant(center(s))
                            .is_some_and(|screen| screen.role != Role::Cannon)
                })
            }
        }
        Role::Horse => {
            // The orthogonal first leg of the leap must be free.
            let leg = if dr.abs() == 1 {
                step(from, 0, dc.signum())
            } else {
                step(from, dr.signum(), 0)
            };
            leg.is_some_and(|square| board.occupant(square).is_some())
        }
        Role::Elephant => {
            // Both the orthogonal first leg and the diagonal second leg
            // must be free.
            let (first, second) = if dc.abs() == 3 {
                (
                    step(from, 0, dc.signum()),
                    step(from, dr.signum(), 2 * dc.signum()),
                )
            } else {
                (
                    step(from, dr.signum(), 0),
                    step(from, 2 * dr.signum(), dc.signum()),
                )
            };
            first.is_some_and(|square| board.occupant(square).is_some())
                || second.is_some_and(|square| board.occupant(square).is_some())
        }
    }
}

/// The full pseudo-legal destination set for `piece` standing on `from`,
/// computed from scratch against `board` by scanning every square.
pub fn moves(piece: Piece, from: Square, board: &Board) -> SquareSet {
    let mut set = SquareSet::EMPTY;
    for to in SquareSet::FULL {
        if reachable(piece, from, to) && !blocked(piece, from, to, board) {
            set.add(to);
        }
    }
    set
}

fn step(from: Square, dr: i32, dc: i32) -> Option<Square> {
    Square::from_coords(i32::from(from.file()) + dc, i32::from(from.rank()) + dr)
}

/// The squares strictly between two squares on the same rank or file.
fn between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let dr = (i32::from(to.rank()) - i32::from(from.rank())).signum();
    let dc = (i32::from(to.file()) - i32::from(from.file())).signum();
    std::iter::successors(step(from, dr, dc), move |&square| step(square, dr, dc))
        .take_while(move |&square| square != to)
}

fn single_screen(from: Square, to: Square, board: &Board) -> bool {
    let mut screen = None;
    for square in between(from, to) {
        if let Some(occupant) = board.occupant(square) {
            if screen.is_some() {
                return false;
            }
            screen = Some(occupant);
        }
    }
    screen.is_some_and(|piece| piece.role != Role::Cannon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(Piece, Square)]) -> Board {
        let mut board = Board::empty();
        for &(piece, square) in pieces {
            board.place(piece, square);
        }
        board
    }

    #[test]
    fn test_soldier_geometry() {
        let red = Side::Red.soldier();
        assert!(reachable(red, Square::A4, Square::A5));
        assert!(!reachable(red, Square::A4, Square::A3));
        assert!(!reachable(red, Square::A4, Square::A6));
        assert!(!reachable(red, Square::A4, Square::B5));
        assert!(reachable(red, Square::C4, Square::B4));
        assert!(reachable(red, Square::C4, Square::D4));

        let blue = Side::Blue.soldier();
        assert!(reachable(blue, Square::A7, Square::A6));
        assert!(!reachable(blue, Square::A7, Square::A8));

        // Diagonal steps inside the opposing palace only, forward only.
        assert!(reachable(blue, Square::D3, Square::E2));
        assert!(reachable(blue, Square::E2, Square::F1));
        assert!(!reachable(blue, Square::E2, Square::F3));
        assert!(!reachable(blue, Square::D2, Square::E1));
        assert!(reachable(red, Square::F8, Square::E9));
        assert!(reachable(red, Square::E9, Square::D10));
        assert!(!reachable(red, Square::E9, Square::D8));
    }

    #[test]
    fn test_guard_and_general_geometry() {
        let guard = Side::Blue.guard();
        assert!(reachable(guard, Square::D10, Square::E9));
        assert!(reachable(guard, Square::D10, Square::D9));
        assert!(!reachable(guard, Square::D10, Square::C10));
        assert!(reachable(guard, Square::F8, Square::E9));
        assert!(reachable(guard, Square::F8, Square::F9));
        // Not on a diagonal line, so no cutting across.
        assert!(!reachable(guard, Square::E8, Square::D9));

        let general = Side::Red.general();
        assert!(reachable(general, Square::E2, Square::E1));
        assert!(reachable(general, Square::E2, Square::D3));
        assert!(!reachable(general, Square::E2, Square::E4));
        assert!(!reachable(Side::Red.guard(), Square::D1, Square::C1));
    }

    #[test]
    fn test_chariot_geometry() {
        let chariot = Side::Red.chariot();
        assert!(reachable(chariot, Square::A1, Square::I1));
        assert!(reachable(chariot, Square::A1, Square::A10));
        assert!(!reachable(chariot, Square::A1, Square::B2));
        // Palace diagonals of either side.
        assert!(reachable(chariot, Square::D1, Square::F3));
        assert!(reachable(chariot, Square::D8, Square::E9));
        assert!(reachable(chariot, Square::E9, Square::F10));
        assert!(!reachable(chariot, Square::D2, Square::E3));
    }

    #[test]
    fn test_cannon_geometry() {
        let cannon = Side::Red.cannon();
        assert!(reachable(cannon, Square::H3, Square::H5));
        assert!(reachable(cannon, Square::H3, Square::F3));
        // Never a single step.
        assert!(!reachable(cannon, Square::H3, Square::I3));
        assert!(!reachable(cannon, Square::H3, Square::H4));
        // Corner-to-corner jumps only; the center is not in the set.
        assert!(reachable(cannon, Square::D8, Square::F10));
        assert!(!reachable(cannon, Square::D1, Square::E2));
        assert!(!reachable(cannon, Square::E2, Square::F3));
    }

    #[test]
    fn test_horse_and_elephant_geometry() {
        let horse = Side::Red.horse();
        assert!(reachable(horse, Square::C1, Square::B3));
        assert!(reachable(horse, Square::C1, Square::D3));
        assert!(reachable(horse, Square::C1, Square::E2));
        assert!(!reachable(horse, Square::C1, Square::D1));
        assert!(!reachable(horse, Square::C1, Square::B1));

        let elephant = Side::Blue.elephant();
        assert!(reachable(elephant, Square::G10, Square::D8));
        assert!(reachable(elephant, Square::G10, Square::E7));
        assert!(!reachable(elephant, Square::G10, Square::C8));
    }

    #[test]
    fn test_single_step_blocking() {
        let board = Board::starting();
        let guard = Side::Blue.guard();
        assert!(blocked(guard, Square::D10, Square::E9, &board));
        assert!(!blocked(guard, Square::D10, Square::D9, &board));
        let general = Side::Red.general();
        assert!(blocked(general, Square::E2, Square::F1, &board));
        assert!(!blocked(general, Square::E2, Square::D3, &board));
    }

    #[test]
    fn test_chariot_blocking() {
        let board = Board::starting();
        let chariot = Side::Red.chariot();
        assert!(!blocked(chariot, Square::A1, Square::A3, &board));
        assert!(blocked(chariot, Square::A1, Square::A4, &board));

        let blue = Side::Blue.chariot();
        assert!(!blocked(blue, Square::D8, Square::G8, &board));
        assert!(blocked(blue, Square::D8, Square::H8, &board));
        // Corner to opposite corner is blocked by an occupied center.
        assert!(blocked(blue, Square::D10, Square::F8, &board));
        let mut open = board.clone();
        open.clear(Square::E9);
        assert!(!blocked(blue, Square::D10, Square::F8, &open));
    }

    #[test]
    fn test_cannon_blocking() {
        let board = Board::starting();
        let cannon = Side::Red.cannon();
        // No screen at all.
        assert!(blocked(cannon, Square::B3, Square::B6, &board));
        // The only screen is the opposing cannon.
        assert!(blocked(cannon, Square::B3, Square::B10, &board));
        // One soldier screen.
        assert!(!blocked(cannon, Square::C3, Square::C5, &board));
        // Palace jump screened by the general on the center.
        assert!(!blocked(cannon, Square::D8, Square::F10, &board));
    }

    #[test]
    fn test_horse_blocking() {
        let board = Board::starting();
        let horse = Side::Blue.horse();
        assert!(blocked(horse, Square::C10, Square::A9, &board));
        assert!(!blocked(horse, Square::C10, Square::D8, &board));
        assert!(blocked(Side::Red.horse(), Square::H1, Square::F2, &board));
    }

    #[test]
    fn test_elephant_blocking() {
        let board = Board::starting();
        let elephant = Side::Blue.elephant();
        assert!(!blocked(elephant, Square::B10, Square::D7, &board));
        assert!(blocked(elephant, Square::B10, Square::E8, &board));
        let red = Side::Red.elephant();
        assert!(blocked(red, Square::C3, Square::F5, &board));
    }

    #[test]
    fn test_cannon_moves_need_exactly_one_screen() {
        // From its starting square a cannon has nothing to jump over.
        let board = Board::starting();
        let cannon = Side::Red.cannon();
        assert_eq!(moves(cannon, Square::B3, &board), SquareSet::EMPTY);

        // A single screen opens exactly the squares behind it, up to but
        // not including the opposing cannon.
        let mut board = Board::starting();
        board.place(Side::Red.soldier(), Square::B6);
        assert_eq!(
            moves(cannon, Square::B3, &board),
            SquareSet::EMPTY.with(Square::B7)
        );
    }

    #[test]
    fn test_soldier_moves() {
        let board = board_with(&[
            (Side::Red.soldier(), Square::E6),
            (Side::Blue.soldier(), Square::E7),
        ]);
        assert_eq!(
            moves(Side::Red.soldier(), Square::E6, &board),
            SquareSet::EMPTY
                .with(Square::D6)
                .with(Square::F6)
                .with(Square::E7)
        );
    }

    #[test]
    fn test_palace_sets() {
        assert_eq!(RED_PALACE.count(), 9);
        assert_eq!(BLUE_PALACE.count(), 9);
        assert_eq!(corners(Side::Red).count(), 4);
        assert!(diagonals(Side::Blue).contains(center(Side::Blue)));
        assert!(!corners(Side::Blue).contains(center(Side::Blue)));
    }
}
