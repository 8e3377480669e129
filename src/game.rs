//! Turn sequencing for a single match: whose turn it is, move history, the
//! current outcome, and replay of recorded moves.

use std::fmt;
use std::str::FromStr;

use log::info;
use rand::Rng;

use crate::board::{Board, Move, Outcome, Player};
use crate::engine::{self, Difficulty};
use crate::error::{ConfigError, GameError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    HumanVsHuman,
    HumanVsEngine,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::HumanVsHuman => f.write_str("hvh"),
            Mode::HumanVsEngine => f.write_str("hvai"),
        }
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hvh" | "hvsh" => Ok(Mode::HumanVsHuman),
            "hvai" | "hvsai" | "hve" => Ok(Mode::HumanVsEngine),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

pub struct Match {
    board: Board,
    mode: Mode,
    difficulty: Difficulty,
    human: Player,
    current: Player,
    outcome: Outcome,
    history: Vec<(Move, Player)>,
}

impl Match {
    /// New match with X to move. In engine mode the human plays X unless changed with `with_human`.
    pub fn new(size: usize, mode: Mode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(size),
            mode,
            difficulty,
            human: Player::X,
            current: Player::X,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    pub fn with_human(mut self, human: Player) -> Self {
        self.human = human;
        self
    }

    pub fn board(&self) -> &Board { &self.board }
    pub fn mode(&self) -> Mode { self.mode }
    pub fn difficulty(&self) -> Difficulty { self.difficulty }
    pub fn human(&self) -> Player { self.human }
    pub fn current_player(&self) -> Player { self.current }
    pub fn outcome(&self) -> &Outcome { &self.outcome }
    pub fn history(&self) -> &[(Move, Player)] { &self.history }
    pub fn is_over(&self) -> bool { self.outcome.is_over() }

    pub fn is_engine_turn(&self) -> bool {
        self.mode == Mode::HumanVsEngine && self.current != self.human && !self.is_over()
    }

    /// Human move for the side to move.
    pub fn play(&mut self, row: usize, col: usize) -> Result<Outcome, GameError> {
        if self.is_over() { return Err(GameError::GameOver); }
        if self.is_engine_turn() { return Err(GameError::NotYourTurn); }
        let player = self.current;
        if !self.board.place(row, col, player) { return Err(GameError::IllegalMove { row, col }); }
        self.record((row, col), player);
        Ok(self.outcome.clone())
    }

    /// Let the engine move for its side.
    pub fn play_engine<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Move, GameError> {
        if self.is_over() { return Err(GameError::GameOver); }
        if !self.is_engine_turn() { return Err(GameError::NotEngineTurn); }
        let player = self.current;
        let (row, col) = engine::select_move(&self.board, player, self.difficulty, rng)?;
        if !self.board.place(row, col, player) { return Err(GameError::IllegalMove { row, col }); }
        self.record((row, col), player);
        Ok((row, col))
    }

    fn record(&mut self, mv: Move, player: Player) {
        self.history.push((mv, player));
        self.outcome = self.board.check_winner();
        match &self.outcome {
            Outcome::InProgress => self.current = player.other(),
            Outcome::Win { player: winner, .. } => info!("{} wins after {} moves", winner, self.history.len()),
            Outcome::Draw => info!("draw after {} moves", self.history.len()),
        }
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current = Player::X;
        self.outcome = Outcome::InProgress;
        self.history.clear();
    }

    pub fn cycle_difficulty(&mut self) -> Difficulty {
        self.difficulty = self.difficulty.next();
        self.difficulty
    }

    /// Board snapshots after each recorded move, starting from an empty board.
    pub fn replay(&self) -> Replay<'_> {
        Replay { board: Board::new(self.board.size()), moves: self.history.iter() }
    }
}

pub struct Replay<'a> {
    board: Board,
    moves: std::slice::Iter<'a, (Move, Player)>,
}

impl Iterator for Replay<'_> {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        let &((row, col), player) = self.moves.next()?;
        self.board.place(row, col, player);
        Some(self.board.clone())
    }
}
