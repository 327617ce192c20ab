use arrayvec::ArrayVec;

use crate::{
    attacks,
    board::{Board, STARTING},
    role::Role,
    side::{BySide, Side},
    square::Square,
    squareset::SquareSet,
    types::{Outcome, Piece},
};

/// A live piece with its materialized pseudo-legal destination set.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct PieceEntry {
    piece: Piece,
    square: Square,
    moves: SquareSet,
}

/// A full copy of the mutable position state, taken before a tentative
/// move so that a rejected move can be rolled back without a trace.
#[derive(Clone)]
struct Snapshot {
    board: Board,
    pieces: ArrayVec<PieceEntry, 32>,
}

/// A Janggi game.
///
/// Owns the board, the live piece collection, the side to move, both
/// check flags and the result. Every piece's pseudo-legal move set is
/// recomputed from scratch against the current board after each applied
/// move, including the speculative ones made while probing for self-check
/// and checkmate.
///
/// # Examples
///
/// ```
/// use janggi::{Janggi, Outcome, Side, Square};
///
/// let mut game = Janggi::new();
/// assert_eq!(game.turn(), Side::Blue);
/// assert!(game.submit_move(Square::C10, Square::D8));
/// assert!(!game.submit_move(Square::C10, Square::D8)); // empty source
/// assert_eq!(game.turn(), Side::Red);
/// assert_eq!(game.outcome(), Outcome::InProgress);
/// ```
#[derive(Clone, Debug)]
pub struct Janggi {
    board: Board,
    pieces: ArrayVec<PieceEntry, 32>,
    turn: Side,
    checks: BySide<bool>,
    outcome: Outcome,
}

impl Janggi {
    /// Starts a game with the fixed mirrored layout. Blue moves first.
    pub fn new() -> Janggi {
        let mut game = Janggi {
            board: Board::starting(),
            pieces: STARTING
                .iter()
                .map(|&(piece, square)| PieceEntry {
                    piece,
                    square,
                    moves: SquareSet::EMPTY,
                })
                .collect(),
            turn: Side::Blue,
            checks: BySide::default(),
            outcome: Outcome::InProgress,
        };
        game.recompute_all();
        game
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The result so far.
    #[inline]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the given side is currently flagged in check.
    #[inline]
    pub fn is_in_check(&self, side: Side) -> bool {
        *self.checks.get(side)
    }

    /// The piece at the given square, if any.
    #[inline]
    pub fn occupant(&self, square: Square) -> Option<Piece> {
        self.board.occupant(square)
    }

    /// Iterator over all live pieces and their squares.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|entry| (entry.square, entry.piece))
    }

    /// The materialized pseudo-legal destination set of the piece on the
    /// given square, or `None` for an empty square. The set ignores
    /// whose turn it is and does not account for self-check.
    pub fn moves_from(&self, square: Square) -> Option<SquareSet> {
        self.pieces
            .iter()
            .find(|entry| entry.square == square)
            .map(|entry| entry.moves)
    }

    /// Submits a move for the side to move. Returns whether the move was
    /// accepted and applied.
    ///
    /// Submitting the source square as the destination passes the turn,
    /// which is allowed only while not in check. A move that is
    /// geometrically legal but would leave the mover's own general
    /// attacked is rejected after a full tentative apply and rollback.
    /// A rejected move never leaves any observable state change.
    ///
    /// When the applied move puts the opponent in check and no opposing
    /// reply can lift the check, the game ends and [`Janggi::outcome`]
    /// reports the win; the turn does not advance past a finished game.
    pub fn submit_move(&mut self, from: Square, to: Square) -> bool {
        if self.outcome != Outcome::InProgress {
            return false;
        }
        let mover = self.turn;
        if from == to {
            if *self.checks.get(mover) {
                return false;
            }
            self.turn = !mover;
            return true;
        }
        match self.board.occupant(from) {
            Some(piece) if piece.side == mover => {}
            _ => return false,
        }
        if !self.moves_from(from).is_some_and(|moves| moves.contains(to)) {
            return false;
        }

        let snapshot = self.snapshot();
        self.apply_move(from, to);
        if self.is_attacked(mover) {
            self.restore(snapshot);
            return false;
        }

        let opponent = !mover;
        if self.is_attacked(opponent) {
            *self.checks.get_mut(opponent) = true;
            if self.is_checkmated(opponent) {
                self.outcome = Outcome::Won(mover);
                return true;
            }
        }
        *self.checks.get_mut(mover) = false;
        self.turn = opponent;
        true
    }

    /// Moves the piece on `from` to `to`, removing any captured piece
    /// from the collection, and recomputes every move set.
    fn apply_move(&mut self, from: Square, to: Square) {
        if let Some(captured) = self.pieces.iter().position(|entry| entry.square == to) {
            self.pieces.remove(captured);
            self.board.clear(to);
        }
        if let Some(entry) = self.pieces.iter_mut().find(|entry| entry.square == from) {
            entry.square = to;
            let piece = entry.piece;
            self.board.clear(from);
            self.board.place(piece, to);
        }
        self.recompute_all();
    }

    /// Recomputes every live piece's pseudo-legal move set from scratch.
    fn recompute_all(&mut self) {
        for entry in &mut self.pieces {
            entry.moves = attacks::moves(entry.piece, entry.square, &self.board);
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            pieces: self.pieces.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.board = snapshot.board;
        self.pieces = snapshot.pieces;
    }

    fn general(&self, side: Side) -> Option<Square> {
        self.pieces
            .iter()
            .find(|entry| entry.piece.side == side && entry.piece.role == Role::General)
            .map(|entry| entry.square)
    }

    /// Whether the given side's general stands in some opposing piece's
    /// move set.
    fn is_attacked(&self, side: Side) -> bool {
        match self.general(side) {
            Some(square) => self
                .pieces
                .iter()
                .any(|entry| entry.piece.side != side && entry.moves.contains(square)),
            None => false,
        }
    }

    /// Exhaustively tries every move of the checked side, each through
    /// the same apply-and-roll-back path as a real move, and reports
    /// whether none of them lifts the check.
    fn is_checkmated(&mut self, side: Side) -> bool {
        let candidates: ArrayVec<(Square, SquareSet), 32> = self
            .pieces
            .iter()
            .filter(|entry| entry.piece.side == side)
            .map(|entry| (entry.square, entry.moves))
            .collect();
        for (from, moves) in candidates {
            for to in moves {
                let snapshot = self.snapshot();
                self.apply_move(from, to);
                let safe = !self.is_attacked(side);
                self.restore(snapshot);
                if safe {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Janggi {
    fn default() -> Janggi {
        Janggi::new()
    }
}
