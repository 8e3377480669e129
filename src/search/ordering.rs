use crate::board::{Board, Move};

/// Every cell of an N×N board in preference order: center, the four corners
/// (TL, TR, BL, BR), the remaining border cells, then everything else row-major.
/// Each cell appears once.
pub fn preference_order(n: usize) -> Vec<Move> {
    let mut candidates: Vec<Move> = Vec::with_capacity(n * n + 5);
    candidates.push((n / 2, n / 2));
    candidates.extend([(0, 0), (0, n - 1), (n - 1, 0), (n - 1, n - 1)]);
    for i in 1..n.saturating_sub(1) {
        candidates.extend([(0, i), (n - 1, i), (i, 0), (i, n - 1)]);
    }
    for r in 0..n {
        for c in 0..n { candidates.push((r, c)); }
    }
    let mut seen = vec![false; n * n];
    candidates.retain(|&(r, c)| !std::mem::replace(&mut seen[r * n + c], true));
    candidates
}

/// The empty cells of `board`, in the order given by `order`.
pub fn filter_legal(board: &Board, order: &[Move]) -> Vec<Move> {
    order
        .iter()
        .copied()
        .filter(|&(r, c)| board.get(r, c).map_or(false, |cell| cell.is_empty()))
        .collect()
}

/// Legal moves of `board`, strongest-looking first.
pub fn ordered_moves(board: &Board) -> Vec<Move> {
    filter_legal(board, &preference_order(board.size()))
}
