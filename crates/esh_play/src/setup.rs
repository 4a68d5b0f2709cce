use esh_core::{Board, ChessError, Coordinate, Piece, PieceKind, Side};

/// Back rank by file. Knights are not modelled, so their squares stay empty.
const BACK_RANK: [Option<PieceKind>; 8] = [
    Some(PieceKind::Rook),
    None,
    Some(PieceKind::Bishop),
    Some(PieceKind::Queen),
    Some(PieceKind::King),
    Some(PieceKind::Bishop),
    None,
    Some(PieceKind::Rook),
];

/// The standard starting arrangement: White on ranks 0 and 1, Black on ranks
/// 7 and 6.
pub fn standard_board() -> Result<Board, ChessError> {
    let mut pieces = Vec::with_capacity(28);
    for (side, back, pawns) in [(Side::White, 0, 1), (Side::Black, 7, 6)] {
        for (file, kind) in (0i8..).zip(BACK_RANK) {
            pieces.push(Piece::pawn(side, Coordinate::new(file, pawns)?));
            if let Some(kind) = kind {
                pieces.push(Piece::new(kind, side, Coordinate::new(file, back)?));
            }
        }
    }
    Board::new(pieces)
}
