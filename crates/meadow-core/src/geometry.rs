//! Grid cells and real-valued entity transforms.
//!
//! Entities live at real-valued coordinates but every gameplay rule
//! (collision, pathfinding, passability) works on integer cells obtained by
//! truncating the position toward zero.

use std::fmt;
use std::ops::Add;

/// An integer grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

/// The four axis-aligned unit steps, in the order random walks index them.
pub const CARDINALS: [Cell; 4] = [
    Cell { x: 1, y: 0 },
    Cell { x: -1, y: 0 },
    Cell { x: 0, y: 1 },
    Cell { x: 0, y: -1 },
];

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|dx| + |dy|` between two cells.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Each axis of `self` clamped to `{-1, 0, 1}`.
    #[inline]
    pub fn signum(self) -> Cell {
        Cell::new(self.x.signum(), self.y.signum())
    }

    /// The four axis-aligned neighbours, in [`CARDINALS`] order.
    #[inline]
    pub fn neighbors(self) -> [Cell; 4] {
        CARDINALS.map(|d| self + d)
    }
}

impl Add for Cell {
    type Output = Cell;
    #[inline]
    fn add(self, rhs: Cell) -> Cell {
        Cell::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Transform ─────────────────────────────────────────────────────────────────

/// World-space position and size of an entity, in cell units.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub size_x: f64,
    pub size_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

impl Transform {
    /// A unit-sized transform at `(x, y)`.
    #[inline]
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, size_x: 1.0, size_y: 1.0 }
    }

    /// A unit-sized transform placed exactly on `cell`.
    #[inline]
    pub fn on_cell(cell: Cell) -> Self {
        Self::at(cell.x as f64, cell.y as f64)
    }

    /// The cell this transform occupies (truncation toward zero).
    #[inline]
    pub fn cell(&self) -> Cell {
        Cell::new(self.x as i32, self.y as i32)
    }

    /// Snap onto `cell`, keeping the size.
    #[inline]
    pub fn move_to(&mut self, cell: Cell) {
        self.x = cell.x as f64;
        self.y = cell.y as f64;
    }

    /// Manhattan distance between the real-valued positions.
    #[inline]
    pub fn manhattan(&self, other: &Transform) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}
