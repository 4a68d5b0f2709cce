//! Squares and displacements on the 8x8 board.
//!
//! A [`Coordinate`] is always on the board: every constructor and every
//! arithmetic operation is bounds-checked and fails with
//! [`ChessError::OutOfRange`] instead of producing an off-board square.

use std::fmt;
use std::ops::Neg;

use crate::error::{ChessError, Result};

/// Number of files and ranks.
pub const BOARD_SIZE: i8 = 8;

/// A square, `x` being the file and `y` the rank, both in `0..8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    x: i8,
    y: i8,
}

/// A signed step between two squares.
///
/// Components are built from `i8` but held as `i16`, so negation never
/// overflows: `-Displacement::new(i8::MIN, 0)` has `dx() == 128`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Displacement {
    dx: i16,
    dy: i16,
}

impl Displacement {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self {
            dx: dx as i16,
            dy: dy as i16,
        }
    }

    pub fn dx(self) -> i16 {
        self.dx
    }

    pub fn dy(self) -> i16 {
        self.dy
    }
}

impl Neg for Displacement {
    type Output = Displacement;

    fn neg(self) -> Self::Output {
        Displacement {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

fn on_board(v: i16) -> bool {
    (0..BOARD_SIZE as i16).contains(&v)
}

impl Coordinate {
    pub fn new(x: i8, y: i8) -> Result<Self> {
        Self::checked(x as i16, y as i16)
    }

    fn checked(x: i16, y: i16) -> Result<Self> {
        if on_board(x) && on_board(y) {
            Ok(Self {
                x: x as i8,
                y: y as i8,
            })
        } else {
            Err(ChessError::OutOfRange { x, y })
        }
    }

    pub fn x(self) -> i8 {
        self.x
    }

    pub fn y(self) -> i8 {
        self.y
    }

    /// Slot of this square in a rank-major 64-entry array.
    pub fn index(self) -> usize {
        (self.y as usize) * 8 + self.x as usize
    }

    /// Inverse of [`Coordinate::index`]; `None` past the last square.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 64 {
            Some(Self {
                x: (index % 8) as i8,
                y: (index / 8) as i8,
            })
        } else {
            None
        }
    }

    /// Every square, in index order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..64).filter_map(Coordinate::from_index)
    }

    pub fn can_add(self, delta: Displacement) -> bool {
        on_board(self.x as i16 + delta.dx) && on_board(self.y as i16 + delta.dy)
    }

    pub fn checked_add(self, delta: Displacement) -> Result<Self> {
        Self::checked(self.x as i16 + delta.dx, self.y as i16 + delta.dy)
    }

    pub fn checked_sub(self, delta: Displacement) -> Result<Self> {
        Self::checked(self.x as i16 - delta.dx, self.y as i16 - delta.dy)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
#[path = "coordinate_tests.rs"]
mod coordinate_tests;
