use crate::board::{Outcome, Player};

/// Scores are always from X's point of view; X maximizes, O minimizes.
pub const MAXIMIZER: Player = Player::X;

pub const WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
/// Returned when a depth limit runs out before a terminal position. There is
/// no static evaluation, which is fine for 3×3 but weak on larger boards.
pub const CUTOFF_SCORE: i32 = 0;
/// Window bound, strictly outside every reachable score.
pub const INF: i32 = 1_000;

pub fn win_score(winner: Player) -> i32 {
    if winner == MAXIMIZER { WIN_SCORE } else { -WIN_SCORE }
}

/// Score of a finished game, `None` while it is still in progress.
pub fn terminal_score(outcome: &Outcome) -> Option<i32> {
    match outcome {
        Outcome::Win { player, .. } => Some(win_score(*player)),
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::InProgress => None,
    }
}

/// Score from `player`'s own perspective (negamax-friendly).
pub fn relative_score(score: i32, player: Player) -> i32 {
    if player == MAXIMIZER { score } else { -score }
}
