//! 8-Puzzle Solver Library
//!
//! Provides the board model and an optimal A* solver for the 3x3
//! sliding-tile puzzle. Display and pacing concerns belong to callers: the
//! solver returns the full solution path synchronously and holds no state
//! between invocations.

pub mod board;
pub mod solver;

pub use board::{Board, BoardError, Move};
pub use solver::{format_path, solve, Step};
