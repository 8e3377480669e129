use std::fmt;

use crate::board::player::{Cell, Player};
use crate::error::BoardError;

/// A `(row, col)` coordinate, 0-indexed from the top-left cell.
pub type Move = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    /// `line` holds the N coordinates of the completed row, column or diagonal, in order.
    Win { player: Player, line: Vec<Move> },
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool { !matches!(self, Outcome::InProgress) }
}

/// N×N grid stored row-major. `place` is the only mutator besides `reset`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self { Self::new(3) }
}

impl Board {
    /// Empty board of `size`×`size` cells.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");
        Self { size, cells: vec![Cell::Empty; size * size] }
    }

    /// Parse rows such as `["XO.", ".X.", "..O"]`. `.`, `-`, `_` and space are empty cells.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        if rows.is_empty() { return Err(BoardError::Empty); }
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != size {
                return Err(BoardError::NotSquare { row, width, expected: size });
            }
            for ch in line.chars() {
                cells.push(match ch {
                    'X' | 'x' => Cell::X,
                    'O' | 'o' => Cell::O,
                    '.' | '-' | '_' | ' ' => Cell::Empty,
                    other => return Err(BoardError::BadCell(other)),
                });
            }
        }
        Ok(Self { size, cells })
    }

    pub fn size(&self) -> usize { self.size }

    fn index(&self, (row, col): Move) -> usize { row * self.size + col }

    /// Cell contents, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size { return None; }
        Some(self.cells[self.index((row, col))])
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = Cell::Empty);
    }

    /// Mark an empty in-bounds cell. Returns false and leaves the board untouched otherwise.
    pub fn place(&mut self, row: usize, col: usize, player: Player) -> bool {
        if row >= self.size || col >= self.size { return false; }
        let idx = self.index((row, col));
        if !self.cells[idx].is_empty() { return false; }
        self.cells[idx] = player.to_cell();
        true
    }

    /// Empty cells in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| (i / n, i % n))
            .collect()
    }

    pub fn is_full(&self) -> bool { self.cells.iter().all(|c| !c.is_empty()) }

    pub fn is_terminal(&self) -> bool { self.check_winner().is_over() }

    pub fn count(&self, player: Player) -> usize {
        let mark = player.to_cell();
        self.cells.iter().filter(|&&c| c == mark).count()
    }

    /// Side to move assuming X opened and turns alternated.
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) { Player::O } else { Player::X }
    }

    /// Scans row i then column i for each i, then the main diagonal, then the
    /// anti-diagonal. The first complete line wins, so simultaneous lines
    /// resolve rows before columns before diagonals, lower index first.
    pub fn check_winner(&self) -> Outcome {
        let n = self.size;
        for i in 0..n {
            if let Some(win) = self.scan_line(|k| (i, k)) { return win; }
            if let Some(win) = self.scan_line(|k| (k, i)) { return win; }
        }
        if let Some(win) = self.scan_line(|k| (k, k)) { return win; }
        if let Some(win) = self.scan_line(|k| (k, n - 1 - k)) { return win; }
        if self.is_full() { Outcome::Draw } else { Outcome::InProgress }
    }

    fn scan_line<F: Fn(usize) -> Move>(&self, at: F) -> Option<Outcome> {
        let player = self.cells[self.index(at(0))].player()?;
        let mark = player.to_cell();
        if !(1..self.size).all(|k| self.cells[self.index(at(k))] == mark) { return None; }
        Some(Outcome::Win { player, line: (0..self.size).map(at).collect() })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
