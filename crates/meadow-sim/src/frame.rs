//! Running one system against the world, with or without per-table locks.

use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use meadow_behavior::DecisionStrategy;
use meadow_core::{BehaviorConfig, SimRng, VitalsConfig};
use meadow_store::{CameraTable, FoodTable, HeroTable, NpcTable};
use meadow_systems::{
    FoodGenerator, InputSnapshot, Starvation, SystemId, Tiredness, feeding, hero_movement,
    npc_dispatch, predation, reproduction,
};

use crate::{SimError, SimResult, World};

/// Per-frame values every system may read.
pub(crate) struct FrameInputs {
    pub input:    InputSnapshot,
    pub dt:       f32,
    pub behavior: BehaviorConfig,
    pub vitals:   VitalsConfig,
    pub decision: Arc<dyn DecisionStrategy>,
}

/// Run `id` with exclusive access to the whole world.  Returns the
/// system's event count (moves, decisions, items eaten, ...).
pub(crate) fn run_exclusive(id: SystemId, world: &mut World, inputs: &FrameInputs) -> usize {
    let store = &mut world.store;
    let systems = &mut world.systems;
    let dt = inputs.dt;
    match id {
        SystemId::HeroMovement => {
            hero_movement(&mut store.heroes, &mut store.cameras, &inputs.input, dt)
        }
        SystemId::NpcDispatch => npc_dispatch(
            &mut store.npcs,
            &store.heroes,
            &store.food,
            &inputs.behavior,
            inputs.decision.as_ref(),
            dt,
        ),
        SystemId::Feeding => feeding(&mut store.heroes, &mut store.npcs, &mut store.food),
        SystemId::Predation => predation(&mut store.npcs, &mut store.heroes),
        SystemId::Reproduction => reproduction(&mut store.npcs, &inputs.behavior, &inputs.vitals),
        SystemId::Starvation => systems.starvation.run(&mut store.heroes, &mut store.npcs, dt),
        SystemId::Tiredness => {
            usize::from(systems.tiredness.run(&mut store.heroes, &mut store.npcs, dt))
        }
        SystemId::FoodGeneration => usize::from(systems.generator.run(&mut store.food, dt).is_some()),
    }
}

// ── SharedFrame ───────────────────────────────────────────────────────────────

/// The world's mutable tables and system state moved behind individual
/// locks for the duration of one parallel frame.
///
/// Systems take table locks in the fixed order heroes, npcs, food, cameras,
/// then the lock on their own state, so no two systems can deadlock.
/// Tiles are never touched by a system and stay in the world.
pub(crate) struct SharedFrame {
    heroes:     RwLock<HeroTable>,
    npcs:       RwLock<NpcTable>,
    food:       RwLock<FoodTable>,
    cameras:    RwLock<CameraTable>,
    starvation: Mutex<Starvation>,
    tiredness:  Mutex<Tiredness>,
    generator:  Mutex<FoodGenerator>,
}

impl SharedFrame {
    /// Move the tables out of `world`, leaving empty placeholders.
    pub fn take(world: &mut World) -> Self {
        let seed = world.config.seed;
        let store = &mut world.store;
        let systems = &mut world.systems;
        let idle_generator = FoodGenerator::new(
            &world.config.spawn,
            Vec::new(),
            Arc::clone(&world.grid),
            SimRng::new(seed),
        );
        Self {
            heroes:     RwLock::new(mem::take(&mut store.heroes)),
            npcs:       RwLock::new(mem::replace(&mut store.npcs, NpcTable::new(seed))),
            food:       RwLock::new(mem::take(&mut store.food)),
            cameras:    RwLock::new(mem::take(&mut store.cameras)),
            starvation: Mutex::new(mem::replace(
                &mut systems.starvation,
                Starvation::new(&world.config.attrition),
            )),
            tiredness:  Mutex::new(mem::replace(
                &mut systems.tiredness,
                Tiredness::new(&world.config.attrition),
            )),
            generator:  Mutex::new(mem::replace(&mut systems.generator, idle_generator)),
        }
    }

    /// Move everything back.  Poisoned locks still hand back their data;
    /// the panic itself is reported by whoever joined the system.
    pub fn restore(self, world: &mut World) {
        world.store.heroes = self.heroes.into_inner().unwrap_or_else(PoisonError::into_inner);
        world.store.npcs = self.npcs.into_inner().unwrap_or_else(PoisonError::into_inner);
        world.store.food = self.food.into_inner().unwrap_or_else(PoisonError::into_inner);
        world.store.cameras = self.cameras.into_inner().unwrap_or_else(PoisonError::into_inner);
        world.systems.starvation =
            self.starvation.into_inner().unwrap_or_else(PoisonError::into_inner);
        world.systems.tiredness =
            self.tiredness.into_inner().unwrap_or_else(PoisonError::into_inner);
        world.systems.generator =
            self.generator.into_inner().unwrap_or_else(PoisonError::into_inner);
    }

    /// Run `id`, locking only what it touches.
    pub fn run(&self, id: SystemId, inputs: &FrameInputs) -> SimResult<usize> {
        let dt = inputs.dt;
        let count = match id {
            SystemId::HeroMovement => {
                let mut heroes = write(&self.heroes, "hero table")?;
                let mut cameras = write(&self.cameras, "camera table")?;
                hero_movement(&mut heroes, &mut cameras, &inputs.input, dt)
            }
            SystemId::NpcDispatch => {
                let heroes = read(&self.heroes, "hero table")?;
                let mut npcs = write(&self.npcs, "npc table")?;
                let food = read(&self.food, "food table")?;
                npc_dispatch(&mut npcs, &heroes, &food, &inputs.behavior, inputs.decision.as_ref(), dt)
            }
            SystemId::Feeding => {
                let mut heroes = write(&self.heroes, "hero table")?;
                let mut npcs = write(&self.npcs, "npc table")?;
                let mut food = write(&self.food, "food table")?;
                feeding(&mut heroes, &mut npcs, &mut food)
            }
            SystemId::Predation => {
                let mut heroes = write(&self.heroes, "hero table")?;
                let mut npcs = write(&self.npcs, "npc table")?;
                predation(&mut npcs, &mut heroes)
            }
            SystemId::Reproduction => {
                let mut npcs = write(&self.npcs, "npc table")?;
                reproduction(&mut npcs, &inputs.behavior, &inputs.vitals)
            }
            SystemId::Starvation => {
                let mut heroes = write(&self.heroes, "hero table")?;
                let mut npcs = write(&self.npcs, "npc table")?;
                lock(&self.starvation, "starvation")?.run(&mut heroes, &mut npcs, dt)
            }
            SystemId::Tiredness => {
                let mut heroes = write(&self.heroes, "hero table")?;
                let mut npcs = write(&self.npcs, "npc table")?;
                usize::from(lock(&self.tiredness, "tiredness")?.run(&mut heroes, &mut npcs, dt))
            }
            SystemId::FoodGeneration => {
                let mut food = write(&self.food, "food table")?;
                usize::from(lock(&self.generator, "food generator")?.run(&mut food, dt).is_some())
            }
        };
        Ok(count)
    }
}

fn read<'a, T>(lock: &'a RwLock<T>, what: &'static str) -> SimResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| SimError::Poisoned(what))
}

fn write<'a, T>(lock: &'a RwLock<T>, what: &'static str) -> SimResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| SimError::Poisoned(what))
}

fn lock<'a, T>(mutex: &'a Mutex<T>, what: &'static str) -> SimResult<MutexGuard<'a, T>> {
    mutex.lock().map_err(|_| SimError::Poisoned(what))
}
