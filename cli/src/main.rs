#![warn(clippy::pedantic)]

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::owo_colors::OwoColorize;
use cube_core::{Color, CubeState, Face, MoveToken, compress_moves, parse_move_sequence};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use layer_solver::solve;
use log::{LevelFilter, info};

/// Scrambles and solves 3x3 cubes layer by layer
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The level of log output to send to stderr. Can be set zero to three times.
    #[arg(short, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the state reached by a scramble in face-turn notation
    Solve {
        /// The scramble, e.g. "F R U' B2"
        scramble: String,
    },
    /// Generate a random scramble and solve it
    Random {
        /// How many random quarter turns to scramble with
        #[arg(long, default_value_t = 25)]
        length: usize,
        /// Scramble seed; omit for a fresh scramble every run
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let scramble = match cli.command {
        Commands::Solve { scramble } => parse_move_sequence(&scramble)?,
        Commands::Random { length, seed } => {
            let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
            info!("scramble seed: {}", rng.get_seed());
            random_scramble(&mut rng, length)
        }
    };
    println!("scramble: {}", paint_all(&scramble));

    let mut cube = CubeState::solved();
    for token in &scramble {
        cube.apply_move(token.face, token.direction);
    }

    let solution = solve(&mut cube)?;
    if solution.is_empty() {
        println!("already solved");
    } else {
        println!("solution ({} moves): {}", solution.len(), paint_all(&solution));
    }
    Ok(())
}

fn random_scramble(rng: &mut fastrand::Rng, length: usize) -> Vec<MoveToken> {
    let tokens = (0..length)
        .map(|_| {
            let face = Face::ALL[rng.usize(..6)];
            if rng.bool() {
                MoveToken::clockwise(face)
            } else {
                MoveToken::counter_clockwise(face)
            }
        })
        .collect_vec();
    // A raw random sequence can contain redundant runs; present it compacted.
    compress_moves(&tokens)
}

/// Render a move sequence with each token in its face's sticker color.
fn paint_all(tokens: &[MoveToken]) -> String {
    tokens.iter().map(paint).join(" ")
}

fn paint(token: &MoveToken) -> String {
    let text = token.to_string();
    match token.face.color() {
        Color::White => text.white().to_string(),
        Color::Yellow => text.yellow().to_string(),
        Color::Green => text.green().to_string(),
        Color::Blue => text.blue().to_string(),
        Color::Orange => text.truecolor(0xff, 0xa5, 0x00).to_string(),
        Color::Red => text.red().to_string(),
    }
}
