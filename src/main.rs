//! 8-Puzzle Solver
//!
//! Finds shortest solutions for the 3x3 sliding-tile puzzle using A* with
//! the Manhattan-distance heuristic, and plays them back in the terminal.
//! All timing lives here; the solver itself returns the complete path
//! synchronously.

use std::process;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use taquin::{format_path, solve, Board, Step};

/// Solves 8-puzzle boards optimally and animates the solution.
#[derive(Parser)]
#[command(name = "taquin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board given as 9 tiles, e.g. "1,2,3,4,0,5,7,8,6" or "123405786".
    Solve {
        /// Tiles in row-major order; 0 is the blank.
        board: String,
        /// Reveal one move every this many milliseconds instead of printing
        /// the whole path at once.
        #[arg(long)]
        delay: Option<u64>,
    },
    /// Print a random solvable board produced by a legal random walk.
    Scramble {
        /// Number of random blank moves to apply.
        #[arg(long, default_value_t = 50)]
        moves: usize,
        /// Seed for reproducible scrambles.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the heuristic estimate and solvability of a board.
    Check {
        /// Tiles in row-major order; 0 is the blank.
        board: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve { board, delay }) => {
            let board = parse_board(&board);
            run_solve(&board, delay);
        }
        Some(Command::Scramble { moves, seed }) => run_scramble(moves, seed),
        Some(Command::Check { board }) => {
            let board = parse_board(&board);
            println!("{}", board);
            println!("manhattan estimate: {}", board.manhattan());
            println!(
                "solvable: {}",
                if board.is_solvable() { "yes" } else { "no" }
            );
        }
        None => {
            // default: scramble a board, then solve it
            let mut rng = SmallRng::from_entropy();
            let board = Board::scrambled(&mut rng, 50);
            println!("Scrambled board:\n{}", board);
            run_solve(&board, None);
        }
    }
}

/// Parses a board argument or exits with a diagnostic.
fn parse_board(input: &str) -> Board {
    match input.parse() {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Invalid board {:?}: {}", input, e);
            process::exit(1);
        }
    }
}

/// Solves `board` and prints the path, optionally paced one step at a time.
fn run_solve(board: &Board, delay: Option<u64>) {
    if !board.is_solvable() {
        eprintln!("Board is unsolvable (odd inversion parity); not searching.");
        process::exit(1);
    }

    match solve(board) {
        Some(path) => match delay {
            Some(ms) => play_back(&path, ms),
            None => print!("{}", format_path(&path)),
        },
        None => {
            // unreachable for parity-checked boards, but the contract says
            // callers must handle it
            eprintln!("No solution found.");
            process::exit(1);
        }
    }
}

/// Reveals the path one move at a time, sleeping between steps.
fn play_back(path: &[Step], delay_ms: u64) {
    let moves = path.len() - 1;
    println!("Solved in {} moves:\n", moves);
    println!("{}", path[0].board);

    for (i, step) in path.iter().enumerate().skip(1) {
        thread::sleep(Duration::from_millis(delay_ms));
        if let Some(movement) = step.movement {
            println!("Step {}/{}: {}", i, moves, movement);
        }
        println!("{}", step.board);
    }
    println!("Puzzle solved!");
}

/// Prints a scrambled board in both grid and compact forms.
fn run_scramble(moves: usize, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let board = Board::scrambled(&mut rng, moves);

    println!("{}", board);
    let compact: String = board.tiles().iter().map(|t| t.to_string()).collect();
    println!("{}", compact);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_snapshot() {
        let board: Board = "1,2,3,4,0,5,7,8,6".parse().unwrap();
        let path = solve(&board).unwrap();
        let output = format_path(&path);

        insta::assert_snapshot!(output.trim_end());
    }

    #[test]
    fn test_scrambled_boards_round_trip_through_parsing() {
        let mut rng = SmallRng::seed_from_u64(3);
        let board = Board::scrambled(&mut rng, 40);

        let compact: String = board.tiles().iter().map(|t| t.to_string()).collect();
        let reparsed: Board = compact.parse().unwrap();
        assert_eq!(reparsed, board);
        assert!(solve(&reparsed).is_some());
    }
}
