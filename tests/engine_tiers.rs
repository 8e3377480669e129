use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictac::search::alphabeta::Searcher;
use tictac::{select_move, select_move_with, Board, ConfigError, Difficulty, EngineConfig, EngineError, Player};

fn rng(seed: u64) -> SmallRng { SmallRng::seed_from_u64(seed) }

#[test]
fn impossible_blocks_immediate_threat() {
    let mut b = Board::new(3);
    b.place(0, 0, Player::X);
    b.place(0, 1, Player::X);
    let mv = select_move(&b, Player::O, Difficulty::Impossible, &mut rng(0)).unwrap();
    assert_eq!(mv, (0, 2));
}

#[test]
fn impossible_completes_own_line() {
    let b = Board::from_rows(&["O..", "XX.", "..O"]).unwrap();
    let mv = select_move(&b, Player::X, Difficulty::Impossible, &mut rng(0)).unwrap();
    assert_eq!(mv, (1, 2));
}

#[test]
fn impossible_prefers_win_over_block() {
    // Both sides threaten; X to move must win rather than block row 2.
    let b = Board::from_rows(&["XX.", "...", "OO."]).unwrap();
    let mv = select_move(&b, Player::X, Difficulty::Impossible, &mut rng(0)).unwrap();
    assert_eq!(mv, (0, 2));
}

#[test]
fn impossible_is_deterministic_regardless_of_seed() {
    let b = Board::from_rows(&["X..", "...", "..."]).unwrap();
    let a = select_move(&b, Player::O, Difficulty::Impossible, &mut rng(1)).unwrap();
    let c = select_move(&b, Player::O, Difficulty::Impossible, &mut rng(999)).unwrap();
    assert_eq!(a, c);
    // Against a corner opening only the center holds the draw.
    assert_eq!(a, (1, 1));
}

/// Impossible's move leaves the full-search score unchanged.
fn assert_tied_for_best(b: &Board, mover: Player) {
    let mv = select_move(b, mover, Difficulty::Impossible, &mut rng(0)).unwrap();
    let root = Searcher::default().search_full(b, mover);
    let mut child = b.clone();
    assert!(child.place(mv.0, mv.1, mover));
    let after = Searcher::default().search_full(&child, mover.other());
    assert_eq!(after.score, root.score, "move {mv:?} for {mover} is not optimal on\n{b}");
}

fn walk_reachable(b: &Board, mover: Player, seen: &mut HashSet<Board>) {
    if b.is_terminal() || !seen.insert(b.clone()) {
        return;
    }
    assert_tied_for_best(b, mover);
    for (r, c) in b.legal_moves() {
        let mut child = b.clone();
        child.place(r, c, mover);
        walk_reachable(&child, mover.other(), seen);
    }
}

#[test]
fn impossible_is_tied_for_best_on_every_reachable_position() {
    let mut seen = HashSet::new();
    walk_reachable(&Board::new(3), Player::X, &mut seen);
    // 5478 legal positions, 958 of them finished.
    assert_eq!(seen.len(), 4520);
}

#[test]
fn shortcut_moves_are_tied_for_best_on_4x4() {
    let b = Board::from_rows(&["XXX.", "OO.X", "OXO.", ".OXO"]).unwrap();
    assert_tied_for_best(&b, Player::X);
    assert_tied_for_best(&b, Player::O);
}

#[test]
fn easy_without_randomness_takes_an_immediate_win() {
    let cfg = EngineConfig { easy_random_rate: 0.0, ..EngineConfig::default() };
    let b = Board::from_rows(&["O..", "XX.", "..O"]).unwrap();
    for seed in 0..16 {
        let mv = select_move_with(&cfg, &b, Player::X, Difficulty::Easy, &mut rng(seed)).unwrap();
        assert_eq!(mv, (1, 2));
    }
}

#[test]
fn easy_always_returns_a_legal_move() {
    let b = Board::from_rows(&["XO.", ".X.", "..O"]).unwrap();
    let legal = b.legal_moves();
    let mut r = rng(5);
    for _ in 0..64 {
        let mv = select_move(&b, Player::X, Difficulty::Easy, &mut r).unwrap();
        assert!(legal.contains(&mv));
    }
}

#[test]
fn easy_with_full_randomness_can_miss_a_win() {
    let cfg = EngineConfig { easy_random_rate: 1.0, ..EngineConfig::default() };
    let b = Board::from_rows(&["O..", "XX.", "..O"]).unwrap();
    let moves: Vec<_> = (0..32)
        .map(|seed| select_move_with(&cfg, &b, Player::X, Difficulty::Easy, &mut rng(seed)).unwrap())
        .collect();
    assert!(moves.iter().any(|&m| m != (1, 2)), "random roll never taken: {moves:?}");
}

#[test]
fn easy_default_rate_gates_the_win() {
    // Win taken with p = 0.2, plus 1 in 5 of the random rolls: 0.36 overall.
    let b = Board::from_rows(&["O..", "XX.", "..O"]).unwrap();
    let mut r = rng(77);
    let hits = (0..1000)
        .filter(|_| select_move(&b, Player::X, Difficulty::Easy, &mut r).unwrap() == (1, 2))
        .count();
    assert!((300..=420).contains(&hits), "winning move chosen {hits}/1000 times");
}

#[test]
fn medium_without_randomness_uses_bounded_search() {
    // O's corner reply loses to a fork four plies out; three plies cannot see it.
    let b = Board::from_rows(&["X..", ".O.", "..X"]).unwrap();
    let full = Searcher::default().search_full(&b, Player::O);
    assert_eq!(full.best_move, Some((0, 1)));

    let cfg = EngineConfig { medium_random_rate: 0.0, ..EngineConfig::default() };
    for seed in 0..8 {
        let mv = select_move_with(&cfg, &b, Player::O, Difficulty::Medium, &mut rng(seed)).unwrap();
        assert_eq!(mv, (0, 2));
    }

    let deep = EngineConfig { medium_depth: 9, ..cfg };
    let mv = select_move_with(&deep, &b, Player::O, Difficulty::Medium, &mut rng(0)).unwrap();
    assert_eq!(mv, (0, 1));
}

#[test]
fn medium_with_full_randomness_leaves_the_search() {
    let cfg = EngineConfig { medium_random_rate: 1.0, ..EngineConfig::default() };
    let b = Board::from_rows(&["X..", ".O.", "..X"]).unwrap();
    let moves: HashSet<_> = (0..64)
        .map(|seed| select_move_with(&cfg, &b, Player::O, Difficulty::Medium, &mut rng(seed)).unwrap())
        .collect();
    assert!(moves.len() > 1);
    assert!(moves.iter().all(|m| b.legal_moves().contains(m)));
}

#[test]
fn medium_default_rate_gates_the_search() {
    // Search picks (0, 2); the random roll (p = 0.3) hits it 1 time in 6.
    let b = Board::from_rows(&["X..", ".O.", "..X"]).unwrap();
    let mut r = rng(2024);
    let hits = (0..1000)
        .filter(|_| select_move(&b, Player::O, Difficulty::Medium, &mut r).unwrap() == (0, 2))
        .count();
    assert!((690..=810).contains(&hits), "searched move chosen {hits}/1000 times");
}

#[test]
fn medium_always_returns_a_legal_move() {
    let b = Board::new(3);
    let mut r = rng(8);
    for _ in 0..16 {
        let mv = select_move(&b, Player::X, Difficulty::Medium, &mut r).unwrap();
        assert!(b.legal_moves().contains(&mv));
    }
}

#[test]
fn same_seed_same_move() {
    let b = Board::from_rows(&["X..", ".O.", "..."]).unwrap();
    for d in Difficulty::ALL {
        for seed in 0..8 {
            let first = select_move(&b, Player::X, d, &mut rng(seed)).unwrap();
            let second = select_move(&b, Player::X, d, &mut rng(seed)).unwrap();
            assert_eq!(first, second, "difficulty {d} seed {seed}");
        }
    }
}

#[test]
fn selection_does_not_mutate_the_board() {
    let b = Board::from_rows(&["X..", ".O.", "..."]).unwrap();
    let before = b.clone();
    for d in Difficulty::ALL {
        let _ = select_move(&b, Player::X, d, &mut rng(1)).unwrap();
    }
    assert_eq!(b, before);
}

#[test]
fn full_board_is_rejected() {
    let b = Board::from_rows(&["XOX", "XOO", "OXX"]).unwrap();
    for d in Difficulty::ALL {
        assert_eq!(select_move(&b, Player::X, d, &mut rng(0)), Err(EngineError::NoLegalMoves));
    }
}

#[test]
fn won_board_is_rejected() {
    let b = Board::from_rows(&["XXX", "OO.", "..."]).unwrap();
    assert_eq!(
        select_move(&b, Player::O, Difficulty::Impossible, &mut rng(0)),
        Err(EngineError::GameOver { winner: Player::X })
    );
}

#[test]
fn invalid_config_is_reported() {
    let cfg = EngineConfig { medium_random_rate: -0.1, ..EngineConfig::default() };
    let b = Board::new(3);
    assert_eq!(
        select_move_with(&cfg, &b, Player::X, Difficulty::Medium, &mut rng(0)),
        Err(EngineError::Config(ConfigError::InvalidRate { name: "medium_random_rate", value: -0.1 }))
    );
}

#[test]
fn unknown_difficulty_is_an_error() {
    assert!(matches!("brutal".parse::<Difficulty>(), Err(ConfigError::UnknownDifficulty(_))));
    assert_eq!("IMPOSSIBLE".parse::<Difficulty>(), Ok(Difficulty::Impossible));
}
