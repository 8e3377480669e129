use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};
use tictac::{Difficulty, Match, Mode, Outcome, Player};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play N×N tic-tac-toe in the terminal", long_about = None)]
struct Args {
    /// Game mode: 'hvh' (human vs human) or 'hvai' (human vs engine)
    #[arg(long, default_value = "hvai")]
    mode: Mode,

    /// Engine difficulty: easy, medium or impossible
    #[arg(long, default_value = "impossible")]
    difficulty: Difficulty,

    /// Side played by the human in hvai mode: 'x' or 'o'
    #[arg(long, default_value = "x")]
    human: Player,

    /// Board size N
    #[arg(long, default_value_t = 3)]
    size: usize,

    /// Seed for the engine's random tiers
    #[arg(long)]
    seed: Option<u64>,
}

enum Command {
    Place(usize, usize),
    Reset,
    Difficulty,
    Replay,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input {
        "q" | "quit" => return Some(Command::Quit),
        "r" | "reset" => return Some(Command::Reset),
        "d" => return Some(Command::Difficulty),
        "p" | "replay" => return Some(Command::Replay),
        _ => {}
    }
    let mut parts = input.split(|c: char| c == ',' || c.is_whitespace()).filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() { return None; }
    Some(Command::Place(row, col))
}

fn read_command() -> Result<Option<Command>> {
    print!("move (row col), r=reset, d=difficulty, p=replay, q=quit: ");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input).context("reading stdin")? == 0 {
        return Ok(Some(Command::Quit));
    }
    Ok(parse_command(input.trim()))
}

fn announce(outcome: &Outcome) {
    match outcome {
        Outcome::Win { player, line } => println!("{} wins along {:?}", player, line),
        Outcome::Draw => println!("Draw."),
        Outcome::InProgress => {}
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.size == 0 {
        anyhow::bail!("board size must be at least 1");
    }

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut game = Match::new(args.size, args.mode, args.difficulty).with_human(args.human);

    loop {
        println!("\n{}", game.board());
        if game.is_engine_turn() {
            let (r, c) = game.play_engine(&mut rng)?;
            println!("Engine ({}) plays {} {}", game.human().other(), r, c);
            announce(game.outcome());
            continue;
        }
        if !game.is_over() {
            println!("{} to move ({} mode, {})", game.current_player(), game.mode(), game.difficulty());
        }

        match read_command()? {
            Some(Command::Quit) => break,
            Some(Command::Reset) => game.reset(),
            Some(Command::Difficulty) => println!("Difficulty: {}", game.cycle_difficulty()),
            Some(Command::Replay) => {
                for (i, snapshot) in game.replay().enumerate() {
                    println!("-- move {} --\n{}", i + 1, snapshot);
                }
            }
            Some(Command::Place(r, c)) => match game.play(r, c) {
                Ok(outcome) => announce(&outcome),
                Err(e) => println!("{}", e),
            },
            None => println!("Invalid input! Use format like '1 2'"),
        }
    }

    println!("Thanks for playing!");
    Ok(())
}
