//! N×N tic-tac-toe rules plus a minimax/alpha-beta move-selection engine with
//! easy, medium and impossible tiers.
pub mod board;
pub mod engine;
pub mod error;
pub mod game;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use crate::board::{Board, Cell, Move, Outcome, Player};
pub use crate::engine::{select_move, select_move_with, Difficulty, Engine, EngineConfig};
pub use crate::error::{BoardError, ConfigError, EngineError, GameError};
pub use crate::game::{Match, Mode};
