//! The grid oracle contract and a bitmap implementation of it.
//!
//! # Thread safety
//!
//! Oracles are shared by every hero and NPC row (one `Arc` per row, usually
//! all pointing at the same level) and queried from whichever thread runs a
//! system, so implementations must be `Send + Sync` and answer from
//! read-only state.

use rand::RngCore;
use rand::seq::SliceRandom;

use meadow_core::Cell;

use crate::{GridError, GridResult};

// ── GridOracle ────────────────────────────────────────────────────────────────

/// Read-only view of a level's walkable space.
pub trait GridOracle: Send + Sync {
    /// `true` if an agent may stand on `cell`.  Cells outside the level must
    /// report `false`.
    fn can_pass(&self, cell: Cell) -> bool;

    /// A uniformly chosen walkable cell, or `None` if the level has none.
    fn random_floor_cell(&self, rng: &mut dyn RngCore) -> Option<Cell>;
}

// ── TileGrid ──────────────────────────────────────────────────────────────────

/// A rectangular level stored as a row-major passability bitmap.
///
/// Parse one from ASCII with [`TileGrid::from_rows`]: `.` is floor, `#` is
/// wall, and a space is void (also impassable).
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: usize,
    height: usize,
    passable: Vec<bool>,
    /// Every floor cell, in row-major order, for O(1) random sampling.
    floor: Vec<Cell>,
}

impl TileGrid {
    /// Build from row strings.  All rows must have the same width.
    ///
    /// # Errors
    ///
    /// [`GridError::Empty`] for no rows, [`GridError::RaggedRow`] for unequal
    /// widths, [`GridError::UnknownGlyph`] for anything other than `.#` and
    /// space, [`GridError::NoFloor`] if no `.` is present.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> GridResult<Self> {
        let height = rows.len();
        if height == 0 {
            return Err(GridError::Empty);
        }
        let width = rows[0].as_ref().chars().count();
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(GridError::TooLarge { width, height });
        }

        let mut passable = Vec::with_capacity(width * height);
        let mut floor = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let got = row.chars().count();
            if got != width {
                return Err(GridError::RaggedRow { row: y, expected: width, got });
            }
            for (x, glyph) in row.chars().enumerate() {
                let open = match glyph {
                    '.' => true,
                    '#' | ' ' => false,
                    other => return Err(GridError::UnknownGlyph { glyph: other, x, y }),
                };
                if open {
                    floor.push(Cell::new(x as i32, y as i32));
                }
                passable.push(open);
            }
        }

        if floor.is_empty() {
            return Err(GridError::NoFloor);
        }
        Ok(Self { width, height, passable, floor })
    }

    /// An open `width × height` room surrounded by a one-cell wall.
    ///
    /// The interior spans `1..=width-2` × `1..=height-2`.
    pub fn walled_room(width: usize, height: usize) -> GridResult<Self> {
        let rows: Vec<String> = (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| {
                        let edge = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
                        if edge { '#' } else { '.' }
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(&rows)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of walkable cells.
    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floor.len()
    }

    /// Mark `cell` passable or blocked.  Out-of-range cells are ignored.
    pub fn set_passable(&mut self, cell: Cell, open: bool) {
        let Some(i) = self.offset(cell) else { return };
        if self.passable[i] == open {
            return;
        }
        self.passable[i] = open;
        if open {
            self.floor.push(cell);
            self.floor.sort_unstable_by_key(|c| (c.y, c.x));
        } else {
            self.floor.retain(|&c| c != cell);
        }
    }

    #[inline]
    fn offset(&self, cell: Cell) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }
}

impl GridOracle for TileGrid {
    #[inline]
    fn can_pass(&self, cell: Cell) -> bool {
        self.offset(cell).is_some_and(|i| self.passable[i])
    }

    fn random_floor_cell(&self, rng: &mut dyn RngCore) -> Option<Cell> {
        self.floor.choose(rng).copied()
    }
}
