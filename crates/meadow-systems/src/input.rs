//! Directional input for one frame, polled by the caller.

use meadow_core::Cell;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct InputSnapshot {
    pub up:    bool,
    pub down:  bool,
    pub left:  bool,
    pub right: bool,
}

impl InputSnapshot {
    /// `true` if any direction is held.
    #[inline]
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Sum of the held directions.  Opposite keys cancel; `up` is `-y`.
    pub fn delta(&self) -> Cell {
        let axis = |neg: bool, pos: bool| i32::from(pos) - i32::from(neg);
        Cell::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}
