//! Contract violations raised by the rules core.
//!
//! None of these describe normal gameplay: a caller that only ever applies
//! boards drawn from [`Board::moves_for_side`](crate::Board::moves_for_side)
//! never sees them.

use crate::coordinate::Coordinate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// A coordinate was constructed or computed outside the 8x8 board.
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfRange { x: i16, y: i16 },

    /// Two pieces would occupy the same square.
    #[error("duplicate piece position at {0}")]
    DuplicatePosition(Coordinate),

    /// Kings are attacked, never removed.
    #[error("cannot remove the king at {0}")]
    KingRemoval(Coordinate),

    /// A raw capture policy code that names no policy.
    #[error("unsupported capture policy code {0}")]
    UnsupportedPolicy(u8),
}

pub type Result<T> = std::result::Result<T, ChessError>;
