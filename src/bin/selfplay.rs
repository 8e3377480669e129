use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tictac::selfplay::{play_game, summarize, SelfPlayParams};
use tictac::Difficulty;

#[derive(Parser, Debug)]
#[command(name = "tictac-selfplay", about = "Play engine-vs-engine games and report results")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 3)]
    size: usize,
    /// Difficulty of the X side
    #[arg(long, default_value = "impossible")]
    x: Difficulty,
    /// Difficulty of the O side
    #[arg(long, default_value = "impossible")]
    o: Difficulty,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print every game record as a JSON line
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    if a.size == 0 { anyhow::bail!("board size must be at least 1"); }
    let params = SelfPlayParams {
        games: a.games,
        size: a.size,
        x_difficulty: a.x,
        o_difficulty: a.o,
        seed: a.seed,
        threads: a.threads,
    };
    eprintln!("Playing {} games on {}x{} (X={}, O={}, seed={})", a.games, a.size, a.size, a.x, a.o, a.seed);

    let games = if a.threads > 1 {
        tictac::selfplay::generate_games(&params)
    } else {
        let pb = ProgressBar::new(a.games as u64);
        pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games")?);
        let games: Vec<_> = (0..a.games).map(|gi| { let g = play_game(&params, gi); pb.inc(1); g }).collect();
        pb.finish_and_clear();
        games
    };

    if a.json {
        for g in &games { println!("{}", serde_json::to_string(g)?); }
    }
    let s = summarize(&games);
    eprintln!("X wins: {}  O wins: {}  draws: {}", s.x_wins, s.o_wins, s.draws);
    if a.json { println!("{}", serde_json::to_string(&s)?); }
    Ok(())
}
