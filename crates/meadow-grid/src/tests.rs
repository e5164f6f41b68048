//! Unit tests for meadow-grid.
//!
//! All tests use hand-written or seeded random grids so they run without a
//! level generator.

#[cfg(test)]
mod helpers {
    use std::collections::VecDeque;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use meadow_core::Cell;

    use crate::{GridOracle, TileGrid};

    /// Reference shortest path length by breadth-first search.
    pub fn bfs_len(grid: &TileGrid, start: Cell, goal: Cell) -> Option<usize> {
        if start == goal {
            return Some(1);
        }
        let mut seen = vec![false; grid.width() * grid.height()];
        let idx = |c: Cell| c.y as usize * grid.width() + c.x as usize;
        let mut queue = VecDeque::from([(start, 1usize)]);
        seen[idx(start)] = true;
        while let Some((cell, len)) = queue.pop_front() {
            for n in cell.neighbors() {
                if !grid.can_pass(n) || seen[idx(n)] {
                    continue;
                }
                if n == goal {
                    return Some(len + 1);
                }
                seen[idx(n)] = true;
                queue.push_back((n, len + 1));
            }
        }
        None
    }

    /// A `w × h` grid with about `wall_pct`% walls.  Guaranteed one floor cell.
    pub fn random_grid(rng: &mut SmallRng, w: usize, h: usize, wall_pct: u32) -> TileGrid {
        let mut rows: Vec<String> = (0..h)
            .map(|_| {
                (0..w)
                    .map(|_| if rng.gen_range(0..100) < wall_pct { '#' } else { '.' })
                    .collect()
            })
            .collect();
        rows[0].replace_range(0..1, ".");
        TileGrid::from_rows(&rows).expect("random grid is well formed")
    }

    pub fn seeded(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }
}

// ── TileGrid ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tile_grid {
    use meadow_core::{Cell, SimRng};

    use crate::{GridError, GridOracle, TileGrid};

    #[test]
    fn parses_floor_and_walls() {
        let g = TileGrid::from_rows(&["#.#", "..."]).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.floor_count(), 4);
        assert!(g.can_pass(Cell::new(1, 0)));
        assert!(!g.can_pass(Cell::new(0, 0)));
    }

    #[test]
    fn out_of_bounds_is_blocked() {
        let g = TileGrid::from_rows(&["..", ".."]).unwrap();
        assert!(!g.can_pass(Cell::new(-1, 0)));
        assert!(!g.can_pass(Cell::new(0, 2)));
        assert!(!g.can_pass(Cell::new(2, 0)));
    }

    #[test]
    fn rejects_malformed_rows() {
        assert!(matches!(TileGrid::from_rows::<&str>(&[]), Err(GridError::Empty)));
        assert!(matches!(
            TileGrid::from_rows(&["...", ".."]),
            Err(GridError::RaggedRow { row: 1, expected: 3, got: 2 })
        ));
        assert!(matches!(
            TileGrid::from_rows(&[".x."]),
            Err(GridError::UnknownGlyph { glyph: 'x', x: 1, y: 0 })
        ));
        assert!(matches!(TileGrid::from_rows(&["###"]), Err(GridError::NoFloor)));
    }

    #[test]
    fn random_floor_cell_is_passable() {
        let g = TileGrid::from_rows(&["#.#.", "....", "##.#"]).unwrap();
        let mut rng = SimRng::new(11);
        for _ in 0..200 {
            let c = g.random_floor_cell(rng.as_dyn()).expect("grid has floor");
            assert!(g.can_pass(c));
        }
    }

    #[test]
    fn walled_room_interior() {
        let g = TileGrid::walled_room(5, 4).unwrap();
        assert_eq!(g.floor_count(), 3 * 2);
        assert!(!g.can_pass(Cell::new(0, 1)));
        assert!(g.can_pass(Cell::new(1, 1)));
        assert!(g.can_pass(Cell::new(3, 2)));
    }

    #[test]
    fn set_passable_updates_floor_list() {
        let mut g = TileGrid::walled_room(4, 4).unwrap();
        g.set_passable(Cell::new(1, 1), false);
        assert_eq!(g.floor_count(), 3);
        assert!(!g.can_pass(Cell::new(1, 1)));
        g.set_passable(Cell::new(1, 1), true);
        assert_eq!(g.floor_count(), 4);
        g.set_passable(Cell::new(40, 40), true); // ignored
        assert_eq!(g.floor_count(), 4);
    }
}

// ── Pathfinder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod pathfinder {
    use meadow_core::Cell;

    use super::helpers::{bfs_len, random_grid, seeded};
    use crate::{astar, GridOracle, TileGrid};

    fn is_connected_walk(path: &[Cell]) -> bool {
        path.windows(2).all(|w| w[0].manhattan(w[1]) == 1)
    }

    #[test]
    fn same_cell_is_single_step_path() {
        let g = TileGrid::walled_room(6, 6).unwrap();
        let p = Cell::new(2, 3);
        assert_eq!(astar(p, p, |c| g.can_pass(c), None), vec![p]);
    }

    #[test]
    fn straight_corridor() {
        let g = TileGrid::from_rows(&["....."]).unwrap();
        let path = astar(Cell::new(0, 0), Cell::new(4, 0), |c| g.can_pass(c), None);
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&Cell::new(0, 0)));
        assert_eq!(path.last(), Some(&Cell::new(4, 0)));
    }

    #[test]
    fn routes_around_a_wall() {
        let g = TileGrid::from_rows(&[
            ".....",
            ".###.",
            ".#...",
            ".#.#.",
            "...#.",
        ])
        .unwrap();
        let start = Cell::new(2, 2);
        let goal = Cell::new(0, 4);
        let path = astar(start, goal, |c| g.can_pass(c), None);
        assert_eq!(Some(path.len()), bfs_len(&g, start, goal));
        assert!(is_connected_walk(&path));
        assert!(path.iter().all(|&c| g.can_pass(c)));
    }

    #[test]
    fn unreachable_goal_gives_empty_path() {
        // (0,1) is a wall and nothing routes around it.
        let g = TileGrid::from_rows(&[".", "#", "."]).unwrap();
        let path = astar(Cell::new(0, 0), Cell::new(0, 2), |c| g.can_pass(c), None);
        assert!(path.is_empty());
    }

    #[test]
    fn filter_rejecting_goal_fails_even_when_reachable() {
        let g = TileGrid::walled_room(6, 6).unwrap();
        let goal = Cell::new(4, 4);
        let reject_goal = |c: Cell| c != goal;
        let path = astar(Cell::new(1, 1), goal, |c| g.can_pass(c), Some(&reject_goal));
        assert!(path.is_empty());
    }

    #[test]
    fn filter_excludes_intermediate_cells() {
        // A 3-wide corridor; blocking the middle row forces a detour.
        let g = TileGrid::from_rows(&[".....", ".....", "....."]).unwrap();
        let blocked = Cell::new(2, 1);
        let avoid = |c: Cell| c != blocked;
        let path = astar(Cell::new(0, 1), Cell::new(4, 1), |c| g.can_pass(c), Some(&avoid));
        assert!(!path.contains(&blocked));
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn matches_bfs_on_random_grids() {
        let mut rng = seeded(2024);
        for round in 0..150 {
            let g = random_grid(&mut rng, 9, 7, 30);
            for _ in 0..6 {
                use rand::Rng;
                let start = Cell::new(rng.gen_range(0..9), rng.gen_range(0..7));
                let goal = Cell::new(rng.gen_range(0..9), rng.gen_range(0..7));
                if !g.can_pass(start) || !g.can_pass(goal) {
                    continue;
                }
                let path = astar(start, goal, |c| g.can_pass(c), None);
                let expected = bfs_len(&g, start, goal);
                match expected {
                    None => assert!(path.is_empty(), "round {round}: {start} → {goal} should fail"),
                    Some(len) => {
                        assert_eq!(path.len(), len, "round {round}: {start} → {goal}");
                        assert_eq!(path[0], start);
                        assert_eq!(*path.last().unwrap(), goal);
                        assert!(is_connected_walk(&path));
                    }
                }
            }
        }
    }

    #[test]
    fn concurrent_searches_share_one_grid() {
        let g = TileGrid::walled_room(30, 30).unwrap();
        std::thread::scope(|s| {
            let handles: Vec<_> = (1..8)
                .map(|i| {
                    let g = &g;
                    s.spawn(move || astar(Cell::new(1, 1), Cell::new(i * 3, 28 - i), |c| g.can_pass(c), None))
                })
                .collect();
            for (i, h) in handles.into_iter().enumerate() {
                let i = i as i32 + 1;
                let path = h.join().unwrap();
                let expected = Cell::new(1, 1).manhattan(Cell::new(i * 3, 28 - i)) as usize + 1;
                assert_eq!(path.len(), expected);
            }
        });
    }
}
