//! A* search for shortest 8-puzzle solutions.
//!
//! Key structure:
//! - Nodes live in an arena `Vec`; parent links are plain indices, so path
//!   reconstruction needs no owned back-references.
//! - The frontier is a binary heap ordered by `f = g + h`, ties broken by
//!   insertion order (FIFO), which makes every run deterministic.
//! - Duplicates are eliminated lazily: a board may sit in the frontier
//!   several times via different parents, and all but the first pop of it
//!   are discarded against the visited set.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::board::{Board, Move};

/// One state along a solution path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The board after `movement` was applied.
    pub board: Board,
    /// The blank move that produced this board, `None` for the start.
    pub movement: Option<Move>,
    /// Moves taken from the start board (the node's `g`).
    pub cost: u32,
}

/// A search node in the arena.
struct Node {
    board: Board,
    parent: Option<usize>,
    movement: Option<Move>,
    g: u32,
}

/// Frontier entry: ordered by lowest `f`, then earliest insertion.
///
/// `BinaryHeap` is a max-heap, so the comparison is reversed.
struct Open {
    f: u32,
    seq: u64,
    node: usize,
}

impl PartialEq for Open {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for Open {}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Open {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Finds a shortest move sequence from `start` to the goal board.
///
/// Returns the path from the start board (step 0, no movement) to the goal,
/// or `None` if the search space is exhausted without reaching it, which
/// happens exactly for unsolvable boards. The Manhattan heuristic never
/// overestimates, so the returned path is optimal.
pub fn solve(start: &Board) -> Option<Vec<Step>> {
    let mut arena: Vec<Node> = Vec::new();
    let mut frontier: BinaryHeap<Open> = BinaryHeap::new();
    let mut visited: FxHashSet<Board> = FxHashSet::default();
    let mut seq = 0u64;

    arena.push(Node {
        board: *start,
        parent: None,
        movement: None,
        g: 0,
    });
    frontier.push(Open {
        f: start.manhattan(),
        seq,
        node: 0,
    });

    while let Some(entry) = frontier.pop() {
        let (board, g) = {
            let node = &arena[entry.node];
            (node.board, node.g)
        };

        if board.is_goal() {
            return Some(reconstruct(&arena, entry.node));
        }

        // lazy duplicate elimination: the same board may have been queued
        // through several parents; only the first pop expands
        if !visited.insert(board) {
            continue;
        }

        for movement in Move::ALL {
            let Some(successor) = board.slide(movement) else {
                continue;
            };
            if visited.contains(&successor) {
                continue;
            }

            let child_g = g + 1;
            arena.push(Node {
                board: successor,
                parent: Some(entry.node),
                movement: Some(movement),
                g: child_g,
            });
            seq += 1;
            frontier.push(Open {
                f: child_g + successor.manhattan(),
                seq,
                node: arena.len() - 1,
            });
        }
    }

    None
}

/// Walks parent links from `goal` back to the root and reverses the result.
fn reconstruct(arena: &[Node], goal: usize) -> Vec<Step> {
    let mut path = Vec::new();
    let mut current = Some(goal);

    while let Some(idx) = current {
        let node = &arena[idx];
        path.push(Step {
            board: node.board,
            movement: node.movement,
            cost: node.g,
        });
        current = node.parent;
    }

    path.reverse();
    path
}

/// Formats a solution path as readable text: the start board, then one
/// block per move with its label and cumulative cost.
pub fn format_path(path: &[Step]) -> String {
    let moves = path.len().saturating_sub(1);
    let mut output = format!("Solved in {} moves:\n\n", moves);

    for (i, step) in path.iter().enumerate() {
        match step.movement {
            Some(movement) => {
                output.push_str(&format!("Step {}: {} (cost {})\n", i, movement, step.cost))
            }
            None => output.push_str(&format!("Step {}: start\n", i)),
        }
        output.push_str(&step.board.to_string());
        output.push('\n');
    }

    output
}
