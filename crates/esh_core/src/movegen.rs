//! The two move-generation algorithms shared by the piece variants.
//!
//! Both produce destination squares lazily; turning a destination into a
//! successor [`Board`] is left to [`Piece::moves`](crate::Piece::moves), so
//! attack detection can look at destinations without building boards.

use crate::{
    board::Board,
    coordinate::{Coordinate, Displacement},
    error::{ChessError, Result},
    piece::Piece,
    side::Side,
};

/// Which occupancy a fixed-offset destination may have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CapturePolicy {
    /// Empty, or held by an opponent.
    MoveOrCapture = 1,
    /// Empty only.
    MoveOnly = 2,
    /// Held by an opponent only.
    CaptureOnly = 3,
}

impl CapturePolicy {
    /// Whether a piece of `mover` may land on a square held by `occupant`.
    pub fn allows(self, mover: Side, occupant: Option<Side>) -> bool {
        match (self, occupant) {
            (CapturePolicy::MoveOrCapture | CapturePolicy::MoveOnly, None) => true,
            (CapturePolicy::MoveOrCapture | CapturePolicy::CaptureOnly, Some(side)) => {
                side != mover
            }
            (CapturePolicy::MoveOnly, Some(_)) | (CapturePolicy::CaptureOnly, None) => false,
        }
    }
}

impl TryFrom<u8> for CapturePolicy {
    type Error = ChessError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(CapturePolicy::MoveOrCapture),
            2 => Ok(CapturePolicy::MoveOnly),
            3 => Ok(CapturePolicy::CaptureOnly),
            other => Err(ChessError::UnsupportedPolicy(other)),
        }
    }
}

/// One fixed displacement together with the policy its destination obeys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Offset {
    pub delta: Displacement,
    pub policy: CapturePolicy,
}

impl Offset {
    pub const fn new(dx: i8, dy: i8, policy: CapturePolicy) -> Self {
        Self {
            delta: Displacement::new(dx, dy),
            policy,
        }
    }
}

/// A pseudo-legal move that has not been applied to a board yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: Piece,
    pub to: Coordinate,
}

/// Destinations of a long-range piece: walk each direction until blocked.
///
/// An empty square is emitted and the walk continues; an opposing piece is
/// emitted and ends the direction; a friendly piece ends it silently.
#[derive(Clone, Debug)]
pub struct Slide<'a> {
    board: &'a Board,
    side: Side,
    origin: Coordinate,
    cursor: Coordinate,
    dirs: &'static [Displacement],
    dir: usize,
}

pub fn slide<'a>(
    board: &'a Board,
    side: Side,
    origin: Coordinate,
    dirs: &'static [Displacement],
) -> Slide<'a> {
    Slide {
        board,
        side,
        origin,
        cursor: origin,
        dirs,
        dir: 0,
    }
}

impl Slide<'_> {
    fn next_direction(&mut self) {
        self.dir += 1;
        self.cursor = self.origin;
    }
}

impl Iterator for Slide<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while let Some(&delta) = self.dirs.get(self.dir) {
            let Ok(to) = self.cursor.checked_add(delta) else {
                self.next_direction();
                continue;
            };
            match self.board.piece_at(to) {
                None => {
                    self.cursor = to;
                    return Some(to);
                }
                Some(occupant) => {
                    self.next_direction();
                    if occupant.side() != self.side {
                        return Some(to);
                    }
                }
            }
        }
        None
    }
}

/// Destinations of a short-range piece: each offset contributes at most one
/// square, and only when it is on the board and its occupancy matches the
/// offset's policy.
#[derive(Clone, Debug)]
pub struct Steps<'a> {
    board: &'a Board,
    side: Side,
    origin: Coordinate,
    offsets: std::slice::Iter<'static, Offset>,
}

pub fn steps<'a>(
    board: &'a Board,
    side: Side,
    origin: Coordinate,
    offsets: &'static [Offset],
) -> Steps<'a> {
    Steps {
        board,
        side,
        origin,
        offsets: offsets.iter(),
    }
}

impl Iterator for Steps<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        for offset in self.offsets.by_ref() {
            let Ok(to) = self.origin.checked_add(offset.delta) else {
                continue;
            };
            let occupant = self.board.piece_at(to).map(Piece::side);
            if offset.policy.allows(self.side, occupant) {
                return Some(to);
            }
        }
        None
    }
}

/// Destinations of any piece, whichever algorithm its variant uses.
#[derive(Clone, Debug)]
pub enum Targets<'a> {
    Slide(Slide<'a>),
    Steps(Steps<'a>),
}

impl Iterator for Targets<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        match self {
            Targets::Slide(inner) => inner.next(),
            Targets::Steps(inner) => inner.next(),
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
