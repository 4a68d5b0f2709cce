use esh_core::{Board, Coordinate, Piece, Side};

fn c(x: i8, y: i8) -> Coordinate {
    Coordinate::new(x, y).unwrap()
}

fn board(pieces: &[Piece]) -> Board {
    Board::new(pieces.iter().copied()).unwrap()
}

fn assert_no_move_leaves_mover_in_check(board: &Board, side: Side) {
    for next in board.moves_for_side(side) {
        assert!(
            !next.is_side_in_check(side),
            "legal move leaves {side} in check:\n{next}"
        );
    }
}

#[test]
fn rook_on_open_file_gives_check() {
    let b = board(&[
        Piece::king(Side::White, c(0, 0)),
        Piece::rook(Side::Black, c(0, 7)),
    ]);
    assert!(b.is_side_in_check(Side::White));
    assert!(!b.is_side_in_check(Side::Black));
    assert!(!b.is_side_in_checkmate(Side::White));
}

#[test]
fn blocked_file_is_not_check() {
    let b = board(&[
        Piece::king(Side::White, c(0, 0)),
        Piece::pawn(Side::White, c(0, 3)),
        Piece::rook(Side::Black, c(0, 7)),
    ]);
    assert!(!b.is_side_in_check(Side::White));
}

#[test]
fn two_rooks_mate_cornered_king() {
    let b = board(&[
        Piece::king(Side::White, c(0, 0)),
        Piece::rook(Side::Black, c(0, 7)),
        Piece::rook(Side::Black, c(1, 7)),
    ]);
    assert!(b.is_side_in_check(Side::White));
    assert_eq!(b.moves_for_side(Side::White).count(), 0);
    assert!(b.is_side_in_checkmate(Side::White));
    assert!(!b.is_side_in_stalemate(Side::White));
}

#[test]
fn back_rank_mate_behind_own_pawns() {
    let b = board(&[
        Piece::king(Side::White, c(6, 0)),
        Piece::pawn(Side::White, c(5, 1)),
        Piece::pawn(Side::White, c(6, 1)),
        Piece::pawn(Side::White, c(7, 1)),
        Piece::rook(Side::Black, c(0, 0)),
        Piece::king(Side::Black, c(6, 7)),
    ]);
    assert!(b.is_side_in_check(Side::White));
    // Pawn pushes exist but none of them addresses the check.
    assert!(b.moves_for_side_ignoring_check(Side::White).count() > 0);
    assert_eq!(b.moves_for_side(Side::White).count(), 0);
    assert!(b.is_side_in_checkmate(Side::White));
}

#[test]
fn back_rank_with_luft_is_only_check() {
    let b = board(&[
        Piece::king(Side::White, c(6, 0)),
        Piece::pawn(Side::White, c(5, 1)),
        Piece::pawn(Side::White, c(6, 1)),
        Piece::rook(Side::Black, c(0, 0)),
    ]);
    assert!(b.is_side_in_check(Side::White));
    assert!(!b.is_side_in_checkmate(Side::White));
    let escapes: Vec<Board> = b.moves_for_side(Side::White).collect();
    assert_eq!(escapes.len(), 1);
    assert!(escapes[0].piece_at(c(7, 1)).is_some_and(|p| p.is_king()));
}

#[test]
fn capturing_the_checker_is_legal() {
    let b = board(&[
        Piece::king(Side::White, c(0, 0)),
        Piece::rook(Side::Black, c(0, 1)),
        Piece::rook(Side::Black, c(7, 7)),
    ]);
    assert!(b.is_side_in_check(Side::White));
    let replies: Vec<Board> = b.moves_for_side(Side::White).collect();
    // Take on (0, 1) or step to (1, 0); (1, 1) stays on the rook's rank.
    assert_eq!(replies.len(), 2);
    assert!(replies.iter().any(|r| r.len() == 2));
    assert_no_move_leaves_mover_in_check(&b, Side::White);
}

#[test]
fn pinned_rook_stays_on_file() {
    let b = board(&[
        Piece::king(Side::White, c(4, 0)),
        Piece::rook(Side::White, c(4, 1)),
        Piece::rook(Side::Black, c(4, 7)),
    ]);
    assert!(!b.is_side_in_check(Side::White));
    assert_eq!(b.moves_for_side_ignoring_check(Side::White).count(), 17);
    assert_eq!(b.moves_for_side(Side::White).count(), 10);
    assert_no_move_leaves_mover_in_check(&b, Side::White);
}

#[test]
fn stalemated_king() {
    let b = board(&[
        Piece::king(Side::White, c(0, 0)),
        Piece::queen(Side::Black, c(1, 2)),
        Piece::king(Side::Black, c(7, 7)),
    ]);
    assert!(!b.is_side_in_check(Side::White));
    assert!(!b.is_side_in_checkmate(Side::White));
    assert!(b.is_side_in_stalemate(Side::White));
}

#[test]
fn kings_may_not_approach_each_other() {
    let b = board(&[
        Piece::king(Side::White, c(3, 3)),
        Piece::king(Side::Black, c(5, 3)),
    ]);
    let landing: Vec<Coordinate> = b
        .moves_for_side(Side::White)
        .filter_map(|next| next.pieces_for_side(Side::White).next())
        .map(|king| king.coordinate())
        .collect();
    assert_eq!(landing.len(), 5);
    assert!(landing.iter().all(|sq| sq.x() < 4));
}

#[test]
fn removing_king_after_any_move_fails() {
    let king = Piece::king(Side::White, c(4, 0));
    let b = board(&[king, Piece::pawn(Side::White, c(0, 1))]);
    for next in b.moves_for_side(Side::White) {
        let king_now = next
            .pieces_for_side(Side::White)
            .find(|p| p.is_king())
            .unwrap();
        assert!(next.without_piece(king_now).is_err());
    }
    let moved = b.with_piece_moved(king, c(4, 1)).unwrap();
    assert!(moved.without_piece(king.relocated(c(4, 1))).is_err());
}

#[test]
fn check_is_independent_of_turn() {
    // White is "in check" here even though nothing records that it is
    // Black's move; the predicate only looks at attacks.
    let b = board(&[
        Piece::king(Side::White, c(4, 4)),
        Piece::bishop(Side::Black, c(7, 7)),
        Piece::king(Side::Black, c(0, 7)),
    ]);
    assert!(b.is_side_in_check(Side::White));
    // Black's own pseudo-legal moves never include taking the king.
    assert!(
        b.moves_for_side_ignoring_check(Side::Black)
            .all(|next| next.pieces_for_side(Side::White).any(|p| p.is_king()))
    );
}
