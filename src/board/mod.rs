pub mod grid;
pub mod player;

pub use grid::{Board, Move, Outcome};
pub use player::{Cell, Player};
