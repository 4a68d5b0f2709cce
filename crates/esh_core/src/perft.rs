use crate::{board::Board, side::Side};

/// Pure perft node count.
/// Counts the legal boards `depth` plies below `board`, `side` moving first
/// and sides alternating every ply.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    match depth {
        0 => 1,
        1 => board.moves_for_side(side).count() as u64,
        _ => board
            .moves_for_side(side)
            .map(|next| perft(&next, side.opponent(), depth - 1))
            .sum(),
    }
}

/// Per-root-move perft counts, in generation order.
pub fn divide(board: &Board, side: Side, depth: u8) -> Vec<(Board, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    board
        .moves_for_side(side)
        .map(|next| {
            let nodes = perft(&next, side.opponent(), depth - 1);
            tracing::trace!(depth, nodes, "divide branch");
            (next, nodes)
        })
        .collect()
}
