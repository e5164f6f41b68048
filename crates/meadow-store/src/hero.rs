//! The player-controlled hero table.

use meadow_core::{Health, SpriteId, Stamina, Transform};

use crate::removal::{RemovalQueue, erase_rows};
use crate::Restrictor;

/// Hero-specific state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HeroData {
    /// Seconds accumulated since the last accepted move.
    pub since_last_move: f32,
    /// Row of the camera that follows this hero, if any.  Camera rows are
    /// never removed, so the index stays valid for the world's lifetime.
    pub camera: Option<usize>,
}

/// Everything needed to append one hero row.
pub struct HeroSpawn {
    pub sprite:     SpriteId,
    pub transform:  Transform,
    pub health:     Health,
    pub stamina:    Stamina,
    pub restrictor: Restrictor,
    pub camera:     Option<usize>,
}

/// Columnar hero storage.  Usually one row, but nothing assumes that.
#[derive(Default)]
pub struct HeroTable {
    pub sprite:     Vec<SpriteId>,
    pub transform:  Vec<Transform>,
    pub health:     Vec<Health>,
    pub stamina:    Vec<Stamina>,
    pub restrictor: Vec<Restrictor>,
    pub data:       Vec<HeroData>,
    pub removals:   RemovalQueue,
}

impl HeroTable {
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

    /// `true` if `row` exists and is not marked for removal.
    #[inline]
    pub fn is_live(&self, row: usize) -> bool {
        row < self.len() && !self.removals.contains(row)
    }

    /// Append a hero and return its row.
    pub fn spawn(&mut self, spawn: HeroSpawn) -> usize {
        self.sprite.push(spawn.sprite);
        self.transform.push(spawn.transform);
        self.health.push(spawn.health);
        self.stamina.push(spawn.stamina);
        self.restrictor.push(spawn.restrictor);
        self.data.push(HeroData { since_last_move: 0.0, camera: spawn.camera });
        self.debug_check_columns();
        self.len() - 1
    }

    /// Compact away every marked row.  Returns the number erased.
    pub fn apply_removals(&mut self) -> usize {
        let rows = self.removals.drain_descending(self.len());
        erase_rows(&mut self.sprite, &rows);
        erase_rows(&mut self.transform, &rows);
        erase_rows(&mut self.health, &rows);
        erase_rows(&mut self.stamina, &rows);
        erase_rows(&mut self.restrictor, &rows);
        erase_rows(&mut self.data, &rows);
        self.debug_check_columns();
        rows.len()
    }

    #[inline]
    fn debug_check_columns(&self) {
        let n = self.len();
        debug_assert!(
            self.sprite.len() == n
                && self.health.len() == n
                && self.stamina.len() == n
                && self.restrictor.len() == n
                && self.data.len() == n,
            "hero columns out of step"
        );
    }
}
