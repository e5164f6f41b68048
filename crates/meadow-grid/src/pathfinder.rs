//! A* shortest-path search on a 4-connected uniform-cost grid.
//!
//! # Contract
//!
//! [`astar`] is a pure function of its inputs: it never mutates caller
//! state, so any number of NPCs may search concurrently against the same
//! read-only oracle.  "No route" is a normal outcome reported as an empty
//! [`Path`]; callers treat it as "no movement this tick".
//!
//! # Heuristic
//!
//! Manhattan distance is admissible and consistent for unit-cost 4-way
//! moves, so the first time the goal is popped its cost is optimal.  Ties on
//! `f = g + h` go to the most recently generated node, which keeps searches
//! on open floor running straight toward the goal.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use meadow_core::Cell;

/// Cells from start to goal inclusive.  Empty means unreachable.
pub type Path = Vec<Cell>;

/// Frontier entry.  Ordered by lowest `f`, then highest `seq`.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct Open {
    f:   Reverse<u32>,
    seq: u64,
    g:   u32,
    pos: Cell,
}

/// Shortest path from `start` to `goal`.
///
/// - `can_pass(cell)` gates every neighbour; it must be `false` outside a
///   finite region or unreachable searches will not terminate.
/// - `filter(cell)` optionally excludes further cells (e.g. ones occupied by
///   predators).  If it rejects `goal` the search fails immediately.
/// - The start cell itself is never tested.
///
/// Returns `[start]` when `start == goal`.
pub fn astar<P>(start: Cell, goal: Cell, can_pass: P, filter: Option<&dyn Fn(Cell) -> bool>) -> Path
where
    P: Fn(Cell) -> bool,
{
    if start == goal {
        return vec![start];
    }
    if let Some(filter) = filter {
        if !filter(goal) {
            return Vec::new();
        }
    }

    let admissible = |cell: Cell| can_pass(cell) && filter.is_none_or(|f| f(cell));

    let mut g_score: FxHashMap<Cell, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<Cell, Cell> = FxHashMap::default();
    let mut open = BinaryHeap::new();
    let mut seq: u64 = 0;

    g_score.insert(start, 0);
    open.push(Open { f: Reverse(start.manhattan(goal)), seq, g: 0, pos: start });

    while let Some(Open { g, pos, .. }) = open.pop() {
        if pos == goal {
            return reconstruct(&came_from, start, goal);
        }

        // Skip stale heap entries superseded by a cheaper push.
        if g_score.get(&pos).is_some_and(|&best| g > best) {
            continue;
        }

        for neighbor in pos.neighbors() {
            if !admissible(neighbor) {
                continue;
            }
            let tentative = g + 1;
            let improves = g_score.get(&neighbor).is_none_or(|&known| tentative < known);
            if improves {
                came_from.insert(neighbor, pos);
                g_score.insert(neighbor, tentative);
                seq += 1;
                open.push(Open {
                    f: Reverse(tentative + neighbor.manhattan(goal)),
                    seq,
                    g: tentative,
                    pos: neighbor,
                });
            }
        }
    }

    Vec::new()
}

fn reconstruct(came_from: &FxHashMap<Cell, Cell>, start: Cell, goal: Cell) -> Path {
    let mut path = vec![goal];
    let mut cur = goal;
    while cur != start {
        match came_from.get(&cur) {
            Some(&prev) => {
                path.push(prev);
                cur = prev;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}
