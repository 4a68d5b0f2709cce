//! The immutable board and the check/checkmate predicates built on move
//! generation.

use std::fmt;

use crate::{
    coordinate::Coordinate,
    error::{ChessError, Result},
    movegen::Move,
    piece::Piece,
    side::Side,
};

/// A set of pieces with at most one piece per square.
///
/// Boards are never mutated once built: every update returns a new board and
/// the old one stays a valid snapshot. A board does not know whose turn it
/// is, and it does not require either side to have a king.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Fails with [`ChessError::DuplicatePosition`] if two pieces share a
    /// square.
    pub fn new(pieces: impl IntoIterator<Item = Piece>) -> Result<Self> {
        let mut board = Self::empty();
        for piece in pieces {
            board.place(piece)?;
        }
        Ok(board)
    }

    fn place(&mut self, piece: Piece) -> Result<()> {
        let slot = &mut self.squares[piece.coordinate().index()];
        if slot.is_some() {
            return Err(ChessError::DuplicatePosition(piece.coordinate()));
        }
        *slot = Some(piece);
        Ok(())
    }

    fn lift(&mut self, piece: Piece) {
        let slot = &mut self.squares[piece.coordinate().index()];
        if *slot == Some(piece) {
            *slot = None;
        }
    }

    pub fn with_piece(&self, piece: Piece) -> Result<Board> {
        let mut next = self.clone();
        next.place(piece)?;
        Ok(next)
    }

    /// A board without `piece`. Removing a piece that is not on the board is
    /// a no-op; removing a king fails with [`ChessError::KingRemoval`].
    pub fn without_piece(&self, piece: Piece) -> Result<Board> {
        if piece.is_king() {
            return Err(ChessError::KingRemoval(piece.coordinate()));
        }
        let mut next = self.clone();
        next.lift(piece);
        Ok(next)
    }

    /// Moves `piece` to `to`, capturing whatever stands there.
    ///
    /// The occupant of `to` goes through [`Board::without_piece`], so a move
    /// onto a king fails. The mover itself is lifted without that guard:
    /// kings move, they just cannot be captured.
    pub fn with_piece_moved(&self, piece: Piece, to: Coordinate) -> Result<Board> {
        let next = match self.piece_at(to) {
            Some(captured) => self.without_piece(captured)?,
            None => self.clone(),
        };
        Ok(next.relocate(piece, to))
    }

    /// Applies a generated move, or `None` when its destination holds a
    /// king: those moves count as attacks but are never played.
    pub fn apply(&self, mv: Move) -> Option<Board> {
        match self.piece_at(mv.to) {
            Some(occupant) if occupant.is_king() => None,
            Some(captured) => {
                let mut next = self.clone();
                next.lift(captured);
                Some(next.relocate(mv.piece, mv.to))
            }
            None => Some(self.clone().relocate(mv.piece, mv.to)),
        }
    }

    // `to` must already be empty.
    fn relocate(mut self, piece: Piece, to: Coordinate) -> Board {
        self.lift(piece);
        self.squares[to.index()] = Some(piece.relocated(to));
        self
    }

    /// All pieces, in square index order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().copied()
    }

    pub fn pieces_for_side(&self, side: Side) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.side() == side)
    }

    pub fn piece_at(&self, coordinate: Coordinate) -> Option<Piece> {
        self.squares[coordinate.index()]
    }

    pub fn len(&self) -> usize {
        self.pieces().count()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }

    pub fn moves_for_piece(&self, piece: Piece) -> impl Iterator<Item = Board> + '_ {
        piece.moves(self)
    }

    /// Every pseudo-legal move of `side`, before any board is built. Moves
    /// onto a king are included.
    pub fn pseudo_moves_for_side(&self, side: Side) -> impl Iterator<Item = Move> + '_ {
        self.pieces_for_side(side)
            .flat_map(move |piece| piece.pseudo_moves(self))
    }

    /// Boards reachable by one pseudo-legal move of `side`, whether or not
    /// they leave `side` in check.
    pub fn moves_for_side_ignoring_check(&self, side: Side) -> impl Iterator<Item = Board> + '_ {
        self.pieces_for_side(side)
            .flat_map(move |piece| self.moves_for_piece(piece))
    }

    /// Whether some opposing pseudo-legal move would capture `piece`.
    ///
    /// Checked on destinations rather than on built boards, so a threatened
    /// king is detected without materializing its capture. A piece that is
    /// not on this board is never threatened.
    pub fn is_piece_threatened(&self, piece: Piece) -> bool {
        let square = piece.coordinate();
        self.piece_at(square) == Some(piece)
            && self
                .pseudo_moves_for_side(piece.side().opponent())
                .any(|mv| mv.to == square)
    }

    pub fn is_side_in_check(&self, side: Side) -> bool {
        self.pieces_for_side(side)
            .filter(|piece| piece.is_king())
            .any(|king| self.is_piece_threatened(king))
    }

    /// Legal successor boards: pseudo-legal moves of `side` that do not leave
    /// `side` in check.
    pub fn moves_for_side(&self, side: Side) -> impl Iterator<Item = Board> + '_ {
        self.moves_for_side_ignoring_check(side)
            .filter(move |board| !board.is_side_in_check(side))
    }

    pub fn has_legal_move(&self, side: Side) -> bool {
        self.moves_for_side(side).next().is_some()
    }

    pub fn is_side_in_checkmate(&self, side: Side) -> bool {
        self.is_side_in_check(side) && !self.has_legal_move(side)
    }

    pub fn is_side_in_stalemate(&self, side: Side) -> bool {
        !self.is_side_in_check(side) && !self.has_legal_move(side)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pieces()).finish()
    }
}

/// Diagram with rank 7 on top: upper case for White, lower case for Black.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in self.squares.chunks(8).rev() {
            for square in rank {
                let ch = match square {
                    None => '.',
                    Some(piece) => match piece.side() {
                        Side::White => piece.kind().letter(),
                        Side::Black => piece.kind().letter().to_ascii_lowercase(),
                    },
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
