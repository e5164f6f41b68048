//! `EntityStore`: every category table of one world.

use crate::{CameraTable, FoodTable, HeroTable, NpcTable, TileTable};

/// Rows erased per category by one removal barrier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RemovalCounts {
    pub heroes: usize,
    pub npcs:   usize,
    pub food:   usize,
}

impl RemovalCounts {
    #[inline]
    pub fn total(&self) -> usize {
        self.heroes + self.npcs + self.food
    }
}

/// All entity tables.  Fields are public so systems can borrow disjoint
/// tables mutably at the same time.
pub struct EntityStore {
    pub heroes:  HeroTable,
    pub npcs:    NpcTable,
    pub food:    FoodTable,
    pub tiles:   TileTable,
    pub cameras: CameraTable,
}

impl EntityStore {
    /// Empty tables; NPC RNG streams derive from `world_seed`.
    pub fn new(world_seed: u64) -> Self {
        Self {
            heroes:  HeroTable::new(),
            npcs:    NpcTable::new(world_seed),
            food:    FoodTable::new(),
            tiles:   TileTable::new(),
            cameras: CameraTable::new(),
        }
    }

    /// The removal barrier: compact every category, consuming its queue.
    ///
    /// Must run with exclusive access, never while a system is executing.
    pub fn apply_removals(&mut self) -> RemovalCounts {
        RemovalCounts {
            heroes: self.heroes.apply_removals(),
            npcs:   self.npcs.apply_removals(),
            food:   self.food.apply_removals(),
        }
    }

    /// `true` if no category has pending removals.
    pub fn removals_pending(&self) -> bool {
        !(self.heroes.removals.is_empty()
            && self.npcs.removals.is_empty()
            && self.food.removals.is_empty())
    }
}
