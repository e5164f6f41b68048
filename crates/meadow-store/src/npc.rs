//! The NPC table: consumers and predators share one set of columns.
//!
//! Besides the shared agent columns, each row owns an [`AgentRng`] seeded
//! from the world seed and a spawn serial that only ever increases, so an
//! NPC's random stream is fixed at birth and moves with its row during
//! compaction.

use meadow_core::{AgentRng, Cell, Health, NpcKind, NpcState, SpriteId, Stamina, Transform};

use crate::removal::{RemovalQueue, erase_rows};
use crate::Restrictor;

/// Per-NPC behavior bookkeeping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NpcData {
    /// Movement budget in cells; one decision runs per whole cell.
    pub accumulated: f32,
    /// FSM state tag.  Untouched by the tree strategy.
    pub state: NpcState,
    /// Cell of the current target (food, mate, prey, threat), if cached.
    pub target: Option<Cell>,
}

impl NpcData {
    pub fn new(kind: NpcKind) -> Self {
        Self { accumulated: 0.0, state: kind.initial_state(), target: None }
    }
}

/// Everything needed to append one NPC row.
pub struct NpcSpawn {
    pub sprite:     SpriteId,
    pub transform:  Transform,
    pub health:     Health,
    pub stamina:    Stamina,
    pub restrictor: Restrictor,
    pub kind:       NpcKind,
}

/// Columnar NPC storage.
pub struct NpcTable {
    pub sprite:     Vec<SpriteId>,
    pub transform:  Vec<Transform>,
    pub health:     Vec<Health>,
    pub stamina:    Vec<Stamina>,
    pub restrictor: Vec<Restrictor>,
    pub data:       Vec<NpcData>,
    pub kind:       Vec<NpcKind>,
    pub rng:        Vec<AgentRng>,
    pub removals:   RemovalQueue,
    seed:           u64,
    next_serial:    u64,
}

impl NpcTable {
    /// An empty table whose rows draw RNG streams from `world_seed`.
    pub fn new(world_seed: u64) -> Self {
        Self {
            sprite:      Vec::new(),
            transform:   Vec::new(),
            health:      Vec::new(),
            stamina:     Vec::new(),
            restrictor:  Vec::new(),
            data:        Vec::new(),
            kind:        Vec::new(),
            rng:         Vec::new(),
            removals:    RemovalQueue::new(),
            seed:        world_seed,
            next_serial: 0,
        }
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

    /// Number of NPCs ever spawned into this table.
    #[inline]
    pub fn spawned_total(&self) -> u64 {
        self.next_serial
    }

    /// Live rows of the given kind.
    pub fn count_kind(&self, kind: NpcKind) -> usize {
        (0..self.len()).filter(|&i| self.kind[i] == kind && !self.removals.contains(i)).count()
    }

    /// Append an NPC in its kind's initial state and return its row.
    pub fn spawn(&mut self, spawn: NpcSpawn) -> usize {
        let serial = self.next_serial;
        self.next_serial += 1;

        self.sprite.push(spawn.sprite);
        self.transform.push(spawn.transform);
        self.health.push(spawn.health);
        self.stamina.push(spawn.stamina);
        self.restrictor.push(spawn.restrictor);
        self.data.push(NpcData::new(spawn.kind));
        self.kind.push(spawn.kind);
        self.rng.push(AgentRng::new(self.seed, serial));
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
        erase_rows(&mut self.kind, &rows);
        erase_rows(&mut self.rng, &rows);
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
                && self.data.len() == n
                && self.kind.len() == n
                && self.rng.len() == n,
            "npc columns out of step"
        );
    }
}
