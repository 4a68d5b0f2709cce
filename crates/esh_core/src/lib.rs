//! Chess rules core: an immutable board, move generation for pawns, bishops,
//! rooks, queens and kings, and check/checkmate detection.
//!
//! Everything here is a pure function of its inputs. Turn order, setup and
//! presentation belong to the caller.

pub mod board;
pub mod coordinate;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod piece;
pub mod side;

pub use board::Board;
pub use coordinate::{BOARD_SIZE, Coordinate, Displacement};
pub use error::{ChessError, Result};
pub use movegen::{CapturePolicy, Move, Offset, Targets};
pub use perft::{divide, perft};
pub use piece::{Piece, PieceKind};
pub use side::Side;
