//! The per-decision view of the world handed to strategies and tree nodes.

use meadow_core::{BehaviorConfig, Cell, NpcKind};
use meadow_store::{FoodTable, HeroTable, NpcTable};

/// What an NPC decided to do on one tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Activity {
    #[default]
    Idle,
    Fleeing,
    SeekingFood,
    SeekingMate,
    Hunting,
}

/// Mutable access to the NPC table plus read access to the tables an NPC
/// looks at while deciding.
///
/// Built once per dispatch pass and re-pointed at each NPC with
/// [`AgentCtx::at`]; no allocation happens between NPCs.
pub struct AgentCtx<'w> {
    /// Row of the NPC being decided for.
    pub npc: usize,
    pub npcs: &'w mut NpcTable,
    pub heroes: &'w HeroTable,
    pub food: &'w FoodTable,
    pub config: &'w BehaviorConfig,
    /// Set by any primitive that changed the NPC's position this tick.
    pub moved: bool,
    /// Recorded by the behavior that ran this tick.
    pub activity: Activity,
}

impl<'w> AgentCtx<'w> {
    pub fn new(
        npcs:   &'w mut NpcTable,
        heroes: &'w HeroTable,
        food:   &'w FoodTable,
        config: &'w BehaviorConfig,
    ) -> Self {
        Self { npc: 0, npcs, heroes, food, config, moved: false, activity: Activity::Idle }
    }

    /// Point the context at row `npc` and clear the per-tick flags.
    #[inline]
    pub fn at(&mut self, npc: usize) -> &mut Self {
        self.npc = npc;
        self.moved = false;
        self.activity = Activity::Idle;
        self
    }

    #[inline]
    pub fn kind(&self) -> NpcKind {
        self.npcs.kind[self.npc]
    }

    /// The NPC's current cell.
    #[inline]
    pub fn cell(&self) -> Cell {
        self.npcs.transform[self.npc].cell()
    }

    #[inline]
    pub fn target(&self) -> Option<Cell> {
        self.npcs.data[self.npc].target
    }

    #[inline]
    pub fn set_target(&mut self, target: Option<Cell>) {
        self.npcs.data[self.npc].target = target;
    }
}
