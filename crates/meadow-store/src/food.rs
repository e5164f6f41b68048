//! Consumable food items.

use meadow_core::{FoodKind, SpriteId, Transform};

use crate::removal::{RemovalQueue, erase_rows};

#[derive(Clone, Debug, Default)]
pub struct FoodTable {
    pub sprite:    Vec<SpriteId>,
    pub transform: Vec<Transform>,
    pub kind:      Vec<FoodKind>,
    pub removals:  RemovalQueue,
}

impl FoodTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.transform.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.transform.is_empty()
    }

    #[inline]
    pub fn is_live(&self, row: usize) -> bool {
        row < self.len() && !self.removals.contains(row)
    }

    pub fn spawn(&mut self, sprite: SpriteId, transform: Transform, kind: FoodKind) -> usize {
        self.sprite.push(sprite);
        self.transform.push(transform);
        self.kind.push(kind);
        self.len() - 1
    }

    pub fn apply_removals(&mut self) -> usize {
        let rows = self.removals.drain_descending(self.len());
        erase_rows(&mut self.sprite, &rows);
        erase_rows(&mut self.transform, &rows);
        erase_rows(&mut self.kind, &rows);
        debug_assert!(self.sprite.len() == self.len() && self.kind.len() == self.len());
        rows.len()
    }
}
