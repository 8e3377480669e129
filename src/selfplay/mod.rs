use log::warn;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};
use crate::engine::{select_move, Difficulty};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub size: usize,
    pub x_difficulty: Difficulty,
    pub o_difficulty: Difficulty,
    pub seed: u64,
    pub threads: usize,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self {
            games: 100,
            size: 3,
            x_difficulty: Difficulty::Impossible,
            o_difficulty: Difficulty::Impossible,
            seed: 42,
            threads: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub winner: Option<Player>,
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SelfPlaySummary {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

/// Play `params.games` engine-vs-engine games. Game `i` is seeded with
/// `seed ^ i`, so the records do not depend on the thread count.
pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    if params.threads <= 1 {
        return (0..params.games).map(|gi| play_game(params, gi)).collect();
    }
    match rayon::ThreadPoolBuilder::new().num_threads(params.threads).build() {
        Ok(pool) => pool.install(|| (0..params.games).into_par_iter().map(|gi| play_game(params, gi)).collect()),
        Err(e) => {
            warn!("thread pool unavailable ({}), playing serially", e);
            (0..params.games).map(|gi| play_game(params, gi)).collect()
        }
    }
}

pub fn play_game(params: &SelfPlayParams, index: usize) -> GameRecord {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ index as u64);
    let mut board = Board::new(params.size);
    let mut mover = Player::X;
    let mut moves = Vec::with_capacity(params.size * params.size);
    while !board.is_terminal() {
        let difficulty = if mover == Player::X { params.x_difficulty } else { params.o_difficulty };
        match select_move(&board, mover, difficulty, &mut rng) {
            Ok((r, c)) => {
                board.place(r, c, mover);
                moves.push((r, c));
            }
            Err(e) => {
                warn!("game {} stopped early: {}", index, e);
                break;
            }
        }
        mover = mover.other();
    }
    GameRecord { moves, winner: board.check_winner().winner() }
}

pub fn summarize(games: &[GameRecord]) -> SelfPlaySummary {
    let mut s = SelfPlaySummary::default();
    for g in games {
        match g.winner {
            Some(Player::X) => s.x_wins += 1,
            Some(Player::O) => s.o_wins += 1,
            None => s.draws += 1,
        }
    }
    s
}
