use std::time::Instant;

use tictac::perft::{count_games, perft};
use tictac::Board;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Count tic-tac-toe positions and complete games")]
struct Args {
    /// Search depth in plies
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board rows such as "X.O/.X./..O", or "empty"
    #[arg(value_name = "BOARD", default_value = "empty")]
    board: String,
    /// Board size when BOARD is "empty"
    #[arg(long, default_value_t = 3)]
    size: usize,
    /// Also enumerate every complete game from the position
    #[arg(long, default_value_t = false)]
    games: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    env_logger::init();
    let args = Args::parse();

    let board = if args.board == "empty" {
        if args.size == 0 { anyhow::bail!("board size must be at least 1"); }
        Board::new(args.size)
    } else {
        let rows: Vec<&str> = args.board.split('/').collect();
        Board::from_rows(&rows)?
    };
    let mover = board.side_to_move();

    let t0 = Instant::now();
    let nodes = perft(&board, mover, args.depth);
    println!("nodes: {} elapsed: {:.3}s", nodes, t0.elapsed().as_secs_f64());

    if args.games {
        let t0 = Instant::now();
        let tally = count_games(&board, mover);
        println!(
            "games: {} (X {} / O {} / draw {}) elapsed: {:.3}s",
            tally.total(), tally.x_wins, tally.o_wins, tally.draws, t0.elapsed().as_secs_f64()
        );
    }
    Ok(())
}
