//! Number baseball console.
//!
//! Plays games on stdin/stdout. Type a guess, or one of:
//! `:history`, `:stats`, `:new`, `:quit`.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use number_baseball::{GameConfig, GameEngine, GameRng, GameState, WinRecord};

#[derive(Debug, Parser)]
#[command(name = "number-baseball", about = "Guess the secret number of unique digits")]
struct Cli {
    /// Number of digits in the secret (1-10)
    #[arg(short, long, default_value_t = number_baseball::core::DEFAULT_DIGITS)]
    digits: usize,

    /// Allow the secret and guesses to start with 0
    #[arg(long)]
    allow_leading_zero: bool,

    /// Seed for a reproducible secret
    #[arg(long)]
    seed: Option<u64>,

    /// Name shown on win records
    #[arg(short, long, default_value = number_baseball::rules::DEFAULT_PLAYER_NAME)]
    name: String,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.digits, cli.allow_leading_zero)?;
    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);

    let mut engine = GameEngine::new(rng)
        .with_player_name(cli.name)
        .with_observer(|r: &WinRecord| {
            println!(
                "Record: {} solved {} digits in {} attempts ({}s)",
                r.player_name, r.digit_count, r.attempts, r.duration_seconds
            );
        });

    let mut state = engine.new_game(config);
    print_intro(&state);
    prompt(&state)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":quit" => break,
            ":new" => {
                state = engine.new_game(config);
                print_intro(&state);
            }
            ":history" => print_history(&state),
            ":stats" => {
                let stats = engine.statistics(&state);
                println!(
                    "attempts: {}  best: {}  avg strike: {:.2}  avg ball: {:.2}",
                    stats.total_attempts,
                    stats.best.map_or_else(|| "-".to_string(), |j| j.to_string()),
                    stats.average_strike,
                    stats.average_ball,
                );
            }
            guess => match engine.submit_guess(&state, guess) {
                Ok(next) => {
                    state = next;
                    report(&state);
                }
                Err(err) => println!("{}", err),
            },
        }
        prompt(&state)?;
    }

    Ok(())
}

fn print_intro(state: &GameState) {
    let config = state.config();
    println!(
        "New game: {} digits, leading zero {}. {} attempts.",
        config.digit_count(),
        if config.allow_leading_zero() { "allowed" } else { "not allowed" },
        config.max_attempts(),
    );
}

fn report(state: &GameState) {
    if let Some(attempt) = state.last_attempt() {
        println!("#{} {}  {}", attempt.number, attempt.guess, attempt.judgment);
    }
    if state.is_won() {
        println!("Correct! Solved in {} attempts. Type :new to play again.", state.attempt_count());
    } else if state.is_finished() {
        println!("Out of attempts. The secret was {}. Type :new to play again.", state.secret());
    }
}

fn print_history(state: &GameState) {
    for attempt in state.attempts() {
        println!("#{:>2} {}  {}", attempt.number, attempt.guess, attempt.judgment);
    }
}

fn prompt(state: &GameState) -> io::Result<()> {
    if !state.is_finished() {
        print!("[{} left] > ", state.remaining_attempts());
    }
    io::stdout().flush()
}
