use rand::Rng;

use crate::board::{Board, Move, Player};

/// Uniform pick from `moves`, `None` when empty.
pub fn random_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    if moves.is_empty() { return None; }
    Some(moves[rng.gen_range(0..moves.len())])
}

/// First move in `order` that completes a line for `player` right away.
pub fn winning_move(board: &Board, order: &[Move], player: Player) -> Option<Move> {
    order.iter().copied().find(|&(r, c)| {
        let mut child = board.clone();
        child.place(r, c, player) && child.check_winner().winner() == Some(player)
    })
}
