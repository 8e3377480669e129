use crate::board::{Board, Outcome, Player};

/// Positions reachable in exactly `depth` plies, stopping at finished games.
pub fn perft(board: &Board, mover: Player, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if board.is_terminal() { return 0; }
    let mut nodes = 0u64;
    for (r, c) in board.legal_moves() {
        let mut child = board.clone();
        child.place(r, c, mover);
        nodes += perft(&child, mover.other(), depth - 1);
    }
    nodes
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTally {
    pub x_wins: u64,
    pub o_wins: u64,
    pub draws: u64,
}

impl GameTally {
    pub fn total(&self) -> u64 { self.x_wins + self.o_wins + self.draws }
}

/// Every distinct move sequence from `board` to a finished game, by result.
pub fn count_games(board: &Board, mover: Player) -> GameTally {
    let mut tally = GameTally::default();
    walk(board, mover, &mut tally);
    tally
}

fn walk(board: &Board, mover: Player, tally: &mut GameTally) {
    match board.check_winner() {
        Outcome::Win { player: Player::X, .. } => { tally.x_wins += 1; return; }
        Outcome::Win { player: Player::O, .. } => { tally.o_wins += 1; return; }
        Outcome::Draw => { tally.draws += 1; return; }
        Outcome::InProgress => {}
    }
    for (r, c) in board.legal_moves() {
        let mut child = board.clone();
        child.place(r, c, mover);
        walk(&child, mover.other(), tally);
    }
}
