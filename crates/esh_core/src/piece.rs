//! The five piece variants and their movement rules.
//!
//! Pieces are plain values: moving one produces a relocated copy and leaves
//! the old value untouched. Equality is structural, so two pawns on the same
//! square differ when only one of them has moved.

use crate::{
    board::Board,
    coordinate::{Coordinate, Displacement},
    movegen::{CapturePolicy, Move, Offset, Targets, slide, steps},
    side::Side,
};

use CapturePolicy::{CaptureOnly, MoveOnly, MoveOrCapture};

pub const BISHOP_DIRS: [Displacement; 4] = [
    Displacement::new(-1, -1),
    Displacement::new(1, -1),
    Displacement::new(-1, 1),
    Displacement::new(1, 1),
];

pub const ROOK_DIRS: [Displacement; 4] = [
    Displacement::new(0, 1),
    Displacement::new(0, -1),
    Displacement::new(1, 0),
    Displacement::new(-1, 0),
];

pub const QUEEN_DIRS: [Displacement; 8] = [
    Displacement::new(-1, -1),
    Displacement::new(1, -1),
    Displacement::new(-1, 1),
    Displacement::new(1, 1),
    Displacement::new(0, 1),
    Displacement::new(0, -1),
    Displacement::new(1, 0),
    Displacement::new(-1, 0),
];

pub const KING_STEPS: [Offset; 8] = [
    Offset::new(0, 1, MoveOrCapture),
    Offset::new(1, 1, MoveOrCapture),
    Offset::new(1, 0, MoveOrCapture),
    Offset::new(1, -1, MoveOrCapture),
    Offset::new(0, -1, MoveOrCapture),
    Offset::new(-1, -1, MoveOrCapture),
    Offset::new(-1, 0, MoveOrCapture),
    Offset::new(-1, 1, MoveOrCapture),
];

// Pawn tables: single step, double step while unmoved, then the two captures.
const WHITE_PAWN_UNMOVED: [Offset; 4] = [
    Offset::new(0, 1, MoveOnly),
    Offset::new(0, 2, MoveOnly),
    Offset::new(-1, 1, CaptureOnly),
    Offset::new(1, 1, CaptureOnly),
];
const WHITE_PAWN_MOVED: [Offset; 3] = [
    Offset::new(0, 1, MoveOnly),
    Offset::new(-1, 1, CaptureOnly),
    Offset::new(1, 1, CaptureOnly),
];
const BLACK_PAWN_UNMOVED: [Offset; 4] = [
    Offset::new(0, -1, MoveOnly),
    Offset::new(0, -2, MoveOnly),
    Offset::new(-1, -1, CaptureOnly),
    Offset::new(1, -1, CaptureOnly),
];
const BLACK_PAWN_MOVED: [Offset; 3] = [
    Offset::new(0, -1, MoveOnly),
    Offset::new(-1, -1, CaptureOnly),
    Offset::new(1, -1, CaptureOnly),
];

fn pawn_offsets(side: Side, has_moved: bool) -> &'static [Offset] {
    match (side, has_moved) {
        (Side::White, false) => &WHITE_PAWN_UNMOVED,
        (Side::White, true) => &WHITE_PAWN_MOVED,
        (Side::Black, false) => &BLACK_PAWN_UNMOVED,
        (Side::Black, true) => &BLACK_PAWN_MOVED,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter used by the board diagram.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Piece {
    Pawn {
        side: Side,
        coordinate: Coordinate,
        has_moved: bool,
    },
    Bishop { side: Side, coordinate: Coordinate },
    Rook { side: Side, coordinate: Coordinate },
    Queen { side: Side, coordinate: Coordinate },
    King { side: Side, coordinate: Coordinate },
}

impl Piece {
    /// A piece of `kind` on its initial placement.
    pub fn new(kind: PieceKind, side: Side, coordinate: Coordinate) -> Self {
        match kind {
            PieceKind::Pawn => Piece::pawn(side, coordinate),
            PieceKind::Bishop => Piece::bishop(side, coordinate),
            PieceKind::Rook => Piece::rook(side, coordinate),
            PieceKind::Queen => Piece::queen(side, coordinate),
            PieceKind::King => Piece::king(side, coordinate),
        }
    }

    /// A pawn on its initial placement, still allowed the double step.
    pub fn pawn(side: Side, coordinate: Coordinate) -> Self {
        Piece::Pawn {
            side,
            coordinate,
            has_moved: false,
        }
    }

    pub fn bishop(side: Side, coordinate: Coordinate) -> Self {
        Piece::Bishop { side, coordinate }
    }

    pub fn rook(side: Side, coordinate: Coordinate) -> Self {
        Piece::Rook { side, coordinate }
    }

    pub fn queen(side: Side, coordinate: Coordinate) -> Self {
        Piece::Queen { side, coordinate }
    }

    pub fn king(side: Side, coordinate: Coordinate) -> Self {
        Piece::King { side, coordinate }
    }

    pub fn side(self) -> Side {
        match self {
            Piece::Pawn { side, .. }
            | Piece::Bishop { side, .. }
            | Piece::Rook { side, .. }
            | Piece::Queen { side, .. }
            | Piece::King { side, .. } => side,
        }
    }

    pub fn coordinate(self) -> Coordinate {
        match self {
            Piece::Pawn { coordinate, .. }
            | Piece::Bishop { coordinate, .. }
            | Piece::Rook { coordinate, .. }
            | Piece::Queen { coordinate, .. }
            | Piece::King { coordinate, .. } => coordinate,
        }
    }

    pub fn kind(self) -> PieceKind {
        match self {
            Piece::Pawn { .. } => PieceKind::Pawn,
            Piece::Bishop { .. } => PieceKind::Bishop,
            Piece::Rook { .. } => PieceKind::Rook,
            Piece::Queen { .. } => PieceKind::Queen,
            Piece::King { .. } => PieceKind::King,
        }
    }

    pub fn is_king(self) -> bool {
        matches!(self, Piece::King { .. })
    }

    /// Only pawns remember moving; every other variant reports `false`.
    pub fn has_moved(self) -> bool {
        matches!(
            self,
            Piece::Pawn {
                has_moved: true,
                ..
            }
        )
    }

    /// The same piece standing on `coordinate`. A relocated pawn has always
    /// moved, whatever the distance.
    pub fn relocated(self, coordinate: Coordinate) -> Piece {
        match self {
            Piece::Pawn { side, .. } => Piece::Pawn {
                side,
                coordinate,
                has_moved: true,
            },
            Piece::Bishop { side, .. } => Piece::Bishop { side, coordinate },
            Piece::Rook { side, .. } => Piece::Rook { side, coordinate },
            Piece::Queen { side, .. } => Piece::Queen { side, coordinate },
            Piece::King { side, .. } => Piece::King { side, coordinate },
        }
    }

    /// Pseudo-legal destination squares on `board`, including squares held
    /// by an opposing king.
    pub fn targets(self, board: &Board) -> Targets<'_> {
        let (side, from) = (self.side(), self.coordinate());
        match self {
            Piece::Pawn { has_moved, .. } => {
                Targets::Steps(steps(board, side, from, pawn_offsets(side, has_moved)))
            }
            Piece::Bishop { .. } => Targets::Slide(slide(board, side, from, &BISHOP_DIRS)),
            Piece::Rook { .. } => Targets::Slide(slide(board, side, from, &ROOK_DIRS)),
            Piece::Queen { .. } => Targets::Slide(slide(board, side, from, &QUEEN_DIRS)),
            Piece::King { .. } => Targets::Steps(steps(board, side, from, &KING_STEPS)),
        }
    }

    pub fn pseudo_moves(self, board: &Board) -> impl Iterator<Item = Move> + '_ {
        self.targets(board).map(move |to| Move { piece: self, to })
    }

    /// Successor boards for every pseudo-legal move of this piece.
    ///
    /// A destination holding a king yields no board: kings are never
    /// captured, only threatened.
    pub fn moves(self, board: &Board) -> impl Iterator<Item = Board> + '_ {
        self.pseudo_moves(board).filter_map(move |mv| board.apply(mv))
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
