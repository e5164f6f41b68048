//! `World`: one level's entity store plus the state its periodic systems own.

use std::sync::Arc;

use tracing::debug;

use meadow_core::{Cell, Health, NpcKind, SimRng, SpriteId, Stamina, Transform, WorldConfig};
use meadow_store::{Camera, EntityStore, HeroSpawn, NpcSpawn, RemovalCounts, Restrictor};
use meadow_systems::{FoodEntry, FoodGenerator, Starvation, Tiredness};

use crate::SimResult;

pub const HERO_SPRITE: SpriteId = SpriteId(1);
pub const CONSUMER_SPRITE: SpriteId = SpriteId(10);
pub const PREDATOR_SPRITE: SpriteId = SpriteId(11);

/// Timers and generators carried from frame to frame.
pub struct SystemState {
    pub starvation: Starvation,
    pub tiredness: Tiredness,
    pub generator: FoodGenerator,
}

impl SystemState {
    pub fn new(config: &WorldConfig, table: Vec<FoodEntry>, grid: Restrictor, rng: SimRng) -> Self {
        Self {
            starvation: Starvation::new(&config.attrition),
            tiredness:  Tiredness::new(&config.attrition),
            generator:  FoodGenerator::new(&config.spawn, table, grid, rng),
        }
    }
}

/// Live entity counts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Census {
    pub heroes:    usize,
    pub consumers: usize,
    pub predators: usize,
    pub food:      usize,
}

impl Census {
    #[inline]
    pub fn npcs(&self) -> usize {
        self.consumers + self.predators
    }
}

pub struct World {
    pub config: WorldConfig,
    pub store: EntityStore,
    pub systems: SystemState,
    pub(crate) grid: Restrictor,
    rng: SimRng,
    frame: u64,
}

impl World {
    /// An empty world on `grid`.  Fails if `config` does not validate.
    pub fn new(config: WorldConfig, grid: Restrictor, food_table: Vec<FoodEntry>) -> SimResult<Self> {
        config.validate()?;
        let mut rng = SimRng::new(config.seed);
        let systems = SystemState::new(&config, food_table, Arc::clone(&grid), rng.child(1));
        Ok(Self {
            store: EntityStore::new(config.seed),
            config,
            systems,
            grid,
            rng,
            frame: 0,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Restrictor {
        &self.grid
    }

    /// Frames completed so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Place a full-health hero on `cell` with a camera centered on it.
    pub fn spawn_hero(&mut self, cell: Cell) -> usize {
        let transform = Transform::on_cell(cell);
        let camera = self.store.cameras.push(transform, Camera::default());
        self.store.heroes.spawn(HeroSpawn {
            sprite:     HERO_SPRITE,
            transform,
            health:     Health::new(self.config.vitals.max_health),
            stamina:    Stamina::new(self.config.vitals.max_stamina),
            restrictor: Arc::clone(&self.grid),
            camera:     Some(camera),
        })
    }

    /// Place a full-health NPC of `kind` on `cell`.
    pub fn spawn_npc(&mut self, kind: NpcKind, cell: Cell) -> usize {
        let sprite = match kind {
            NpcKind::Consumer => CONSUMER_SPRITE,
            NpcKind::Predator => PREDATOR_SPRITE,
        };
        self.store.npcs.spawn(NpcSpawn {
            sprite,
            transform:  Transform::on_cell(cell),
            health:     Health::new(self.config.vitals.max_health),
            stamina:    Stamina::new(self.config.vitals.max_stamina),
            restrictor: Arc::clone(&self.grid),
            kind,
        })
    }

    /// Seed a fresh level: one hero, `spawn.npc_count` NPCs and
    /// `spawn.initial_food` food items, all on random floor cells.
    pub fn populate(&mut self) -> Census {
        if let Some(cell) = self.random_floor_cell() {
            self.spawn_hero(cell);
        }
        let p = self.config.spawn.predator_probability;
        for _ in 0..self.config.spawn.npc_count {
            let kind = if self.rng.gen_bool(p) { NpcKind::Predator } else { NpcKind::Consumer };
            let Some(cell) = self.random_floor_cell() else { break };
            self.spawn_npc(kind, cell);
        }
        for _ in 0..self.config.spawn.initial_food {
            if self.systems.generator.spawn_one(&mut self.store.food).is_none() {
                break;
            }
        }
        let census = self.census();
        debug!(
            heroes = census.heroes,
            consumers = census.consumers,
            predators = census.predators,
            food = census.food,
            "world_populated"
        );
        census
    }

    /// Counts of rows not queued for removal.
    pub fn census(&self) -> Census {
        let store = &self.store;
        Census {
            heroes:    (0..store.heroes.len()).filter(|&h| store.heroes.is_live(h)).count(),
            consumers: store.npcs.count_kind(NpcKind::Consumer),
            predators: store.npcs.count_kind(NpcKind::Predator),
            food:      (0..store.food.len()).filter(|&f| store.food.is_live(f)).count(),
        }
    }

    /// The removal barrier.  Compacts every table and closes the frame.
    pub(crate) fn end_frame(&mut self) -> RemovalCounts {
        let removed = self.store.apply_removals();
        if removed.total() > 0 {
            debug!(
                frame = self.frame,
                heroes_removed = removed.heroes,
                npcs_removed = removed.npcs,
                food_removed = removed.food,
                "removal_barrier"
            );
        }
        self.frame += 1;
        removed
    }

    fn random_floor_cell(&mut self) -> Option<Cell> {
        self.grid.random_floor_cell(self.rng.as_dyn())
    }
}
