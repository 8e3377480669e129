use log::debug;

use crate::board::{Board, Move, Player};
use crate::search::eval::{self, CUTOFF_SCORE, INF, MAXIMIZER};
use crate::search::ordering;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Plies to search, counting the root move as 1. `None` searches to terminal positions.
    pub depth: Option<u32>,
    /// Visit candidates in preference order instead of row-major.
    pub order_moves: bool,
}

impl Default for SearchParams {
    fn default() -> Self { Self { depth: None, order_moves: true } }
}

#[derive(Default, Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// From X's perspective: +1 X wins, -1 O wins, 0 draw or cutoff.
    pub score: i32,
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Minimax with alpha-beta pruning. Each branch works on its own clone of the
/// board; the caller's board is never touched.
#[derive(Default)]
pub struct Searcher {
    nodes: u64,
    cutoffs: u64,
    order_moves: bool,
    preference: Vec<Move>,
}

impl Searcher {
    pub fn search_with_params(&mut self, board: &Board, player: Player, params: SearchParams) -> SearchResult {
        self.nodes = 0;
        self.cutoffs = 0;
        self.order_moves = params.order_moves;
        self.preference = ordering::preference_order(board.size());
        let (score, best_move) = self.minimax(board, player, params.depth, -INF, INF);
        debug!(
            "search {} depth={:?} ordered={} -> {:?} score={} nodes={} cutoffs={}",
            player, params.depth, params.order_moves, best_move, score, self.nodes, self.cutoffs
        );
        SearchResult { best_move, score, nodes: self.nodes, cutoffs: self.cutoffs }
    }

    /// Depth-limited search with move ordering.
    pub fn search_depth(&mut self, board: &Board, player: Player, depth: u32) -> SearchResult {
        self.search_with_params(board, player, SearchParams { depth: Some(depth), ..SearchParams::default() })
    }

    /// Search to terminal positions with move ordering.
    pub fn search_full(&mut self, board: &Board, player: Player) -> SearchResult {
        self.search_with_params(board, player, SearchParams::default())
    }

    fn candidates(&self, board: &Board) -> Vec<Move> {
        if self.order_moves { ordering::filter_legal(board, &self.preference) } else { board.legal_moves() }
    }

    fn minimax(&mut self, board: &Board, mover: Player, depth: Option<u32>, mut alpha: i32, mut beta: i32) -> (i32, Option<Move>) {
        self.nodes += 1;
        if let Some(score) = eval::terminal_score(&board.check_winner()) { return (score, None); }
        if depth == Some(0) { return (CUTOFF_SCORE, None); }

        let maximizing = mover == MAXIMIZER;
        let next_depth = depth.map(|d| d - 1);
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move: Option<Move> = None;
        for (row, col) in self.candidates(board) {
            let mut child = board.clone();
            child.place(row, col, mover);
            let (score, _) = self.minimax(&child, mover.other(), next_depth, alpha, beta);
            if maximizing {
                if score > best_score { best_score = score; best_move = Some((row, col)); }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score { best_score = score; best_move = Some((row, col)); }
                beta = beta.min(best_score);
            }
            if beta <= alpha {
                self.cutoffs += 1;
                break;
            }
        }
        (best_score, best_move)
    }
}
