//! Move selection with three difficulty tiers on top of the alpha-beta searcher.
//!
//! Randomness always comes from a caller-supplied RNG so that the random tiers
//! can be replayed exactly from a seed.

use std::fmt;
use std::str::FromStr;

use log::trace;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move, Player};
use crate::error::{ConfigError, EngineError};
use crate::search::alphabeta::Searcher;
use crate::search::{eval, noise, ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Impossible];

    /// Next tier, wrapping from impossible back to easy.
    pub fn next(self) -> Difficulty {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Impossible,
            Difficulty::Impossible => Difficulty::Easy,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Impossible => "impossible",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "impossible" => Ok(Difficulty::Impossible),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Tuning for the randomized tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Chance that easy plays a uniformly random move.
    pub easy_random_rate: f64,
    /// Chance that medium plays a uniformly random move.
    pub medium_random_rate: f64,
    /// Search depth for medium, root ply included.
    pub medium_depth: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { easy_random_rate: 0.8, medium_random_rate: 0.3, medium_depth: 3 }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("easy_random_rate", self.easy_random_rate), ("medium_random_rate", self.medium_random_rate)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidRate { name, value });
            }
        }
        Ok(())
    }
}

/// Pick a move for `player` with the default tier tuning.
///
/// The board must have at least one empty cell and no winner yet.
pub fn select_move<R: Rng + ?Sized>(board: &Board, player: Player, difficulty: Difficulty, rng: &mut R) -> Result<Move, EngineError> {
    select_move_with(&EngineConfig::default(), board, player, difficulty, rng)
}

pub fn select_move_with<R: Rng + ?Sized>(
    config: &EngineConfig,
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Move, EngineError> {
    config.validate()?;
    let legal = board.legal_moves();
    if legal.is_empty() { return Err(EngineError::NoLegalMoves); }
    if let Some(winner) = board.check_winner().winner() { return Err(EngineError::GameOver { winner }); }

    match difficulty {
        Difficulty::Easy => easy(config, board, player, &legal, rng),
        Difficulty::Medium => medium(config, board, player, &legal, rng),
        Difficulty::Impossible => impossible(board, player),
    }
}

fn easy<R: Rng + ?Sized>(config: &EngineConfig, board: &Board, player: Player, legal: &[Move], rng: &mut R) -> Result<Move, EngineError> {
    if !rng.gen_bool(config.easy_random_rate) {
        if let Some(m) = noise::winning_move(board, &ordering::ordered_moves(board), player) {
            trace!("easy {}: takes win at {:?}", player, m);
            return Ok(m);
        }
    }
    random_fallback(legal, rng)
}

fn medium<R: Rng + ?Sized>(config: &EngineConfig, board: &Board, player: Player, legal: &[Move], rng: &mut R) -> Result<Move, EngineError> {
    if rng.gen_bool(config.medium_random_rate) {
        trace!("medium {}: random roll", player);
        return random_fallback(legal, rng);
    }
    let res = Searcher::default().search_depth(board, player, config.medium_depth);
    match res.best_move {
        Some(m) => Ok(m),
        None => random_fallback(legal, rng),
    }
}

/// Win now, else block the opponent's immediate win, else full search. Both
/// shortcuts pick moves the full search scores as tied-for-best.
fn impossible(board: &Board, player: Player) -> Result<Move, EngineError> {
    let order = ordering::ordered_moves(board);
    if let Some(m) = noise::winning_move(board, &order, player) {
        trace!("impossible {}: immediate win at {:?}", player, m);
        return Ok(m);
    }
    if let Some(m) = noise::winning_move(board, &order, player.other()) {
        trace!("impossible {}: blocks {:?}", player, m);
        return Ok(m);
    }
    let res = Searcher::default().search_full(board, player);
    trace!("impossible {}: searched, expects {}", player, eval::relative_score(res.score, player));
    res.best_move.ok_or(EngineError::NoLegalMoves)
}

fn random_fallback<R: Rng + ?Sized>(legal: &[Move], rng: &mut R) -> Result<Move, EngineError> {
    noise::random_move(legal, rng).ok_or(EngineError::NoLegalMoves)
}

/// Move selector that owns its RNG.
pub struct Engine {
    rng: SmallRng,
    config: EngineConfig,
}

impl Engine {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: SmallRng::seed_from_u64(seed), config: EngineConfig::default() }
    }

    pub fn from_entropy() -> Self {
        Self { rng: SmallRng::from_entropy(), config: EngineConfig::default() }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &EngineConfig { &self.config }

    pub fn select_move(&mut self, board: &Board, player: Player, difficulty: Difficulty) -> Result<Move, EngineError> {
        select_move_with(&self.config, board, player, difficulty, &mut self.rng)
    }
}
