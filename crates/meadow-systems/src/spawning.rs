//! Periodic food spawning.
//!
//! The generator owns its own `SimRng` and a handle on the level oracle, so
//! it touches no table other than food and can run beside any system that
//! leaves food alone.

use std::sync::Arc;

use meadow_core::{FoodKind, PeriodicTimer, SimRng, SpawnConfig, SpriteId, Transform};
use meadow_grid::GridOracle;

use meadow_store::FoodTable;

/// One row of the weighted food table.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FoodEntry {
    pub kind:   FoodKind,
    pub sprite: SpriteId,
    pub weight: u32,
}

/// The stock table: small and large health and stamina restores, weighted
/// toward small health food.
pub fn default_food_table() -> Vec<FoodEntry> {
    vec![
        FoodEntry { kind: FoodKind::HealthRestore(10),  sprite: SpriteId(100), weight: 100 },
        FoodEntry { kind: FoodKind::HealthRestore(25),  sprite: SpriteId(101), weight: 30 },
        FoodEntry { kind: FoodKind::StaminaRestore(10), sprite: SpriteId(102), weight: 35 },
        FoodEntry { kind: FoodKind::StaminaRestore(25), sprite: SpriteId(103), weight: 20 },
    ]
}

pub struct FoodGenerator {
    pub timer: PeriodicTimer,
    table: Vec<FoodEntry>,
    total_weight: u32,
    grid: Arc<dyn GridOracle>,
    rng: SimRng,
}

impl FoodGenerator {
    /// A generator firing every `config.food_interval_secs()`.  The table is
    /// fixed for the generator's lifetime.
    pub fn new(config: &SpawnConfig, table: Vec<FoodEntry>, grid: Arc<dyn GridOracle>, rng: SimRng) -> Self {
        let total_weight = table.iter().fold(0u32, |acc, e| acc.saturating_add(e.weight));
        Self {
            timer: PeriodicTimer::restarting(config.food_interval_secs()),
            table,
            total_weight,
            grid,
            rng,
        }
    }

    pub fn table(&self) -> &[FoodEntry] {
        &self.table
    }

    /// Draw one entry by weight, or `None` if the table has no weight.
    pub fn pick(&mut self) -> Option<FoodEntry> {
        if self.total_weight == 0 {
            return None;
        }
        let mut roll = self.rng.gen_range(0..self.total_weight);
        for entry in &self.table {
            if roll < entry.weight {
                return Some(*entry);
            }
            roll -= entry.weight;
        }
        None
    }

    /// Spawn one food item at a random floor cell.  Returns its row.
    pub fn spawn_one(&mut self, food: &mut FoodTable) -> Option<usize> {
        let entry = self.pick()?;
        let cell = self.grid.random_floor_cell(self.rng.as_dyn())?;
        Some(food.spawn(entry.sprite, Transform::on_cell(cell), entry.kind))
    }

    /// Advance the timer by `dt` and spawn when it fires.
    pub fn run(&mut self, food: &mut FoodTable, dt: f32) -> Option<usize> {
        if !self.timer.tick(dt) {
            return None;
        }
        self.spawn_one(food)
    }
}
