//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;

use meadow_behavior::{DecisionStrategy, DefaultStrategy};
use meadow_core::WorldConfig;
use meadow_store::Restrictor;
use meadow_systems::{FoodEntry, default_food_table};

use crate::{ExecutionStrategy, Scheduler, Sim, SimError, SimResult, World};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`WorldConfig`]: seed, vitals, thresholds, timers, population sizes
/// - a grid oracle via [`.grid(g)`](SimBuilder::grid)
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                              |
/// |-------------------|--------------------------------------|
/// | `.strategy(s)`    | `ExecutionStrategy::Sequential`      |
/// | `.decision(d)`    | `DefaultStrategy` (tree, or FSM with the `fsm` feature) |
/// | `.food_table(t)`  | `default_food_table()`               |
/// | `.populate(b)`    | `false`                              |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(WorldConfig::default())
///     .grid(Arc::new(TileGrid::walled_room(40, 30)?))
///     .strategy(ExecutionStrategy::pool())
///     .populate(true)
///     .build()?;
/// sim.step(&InputSnapshot::default(), 1.0 / 60.0, &mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:     WorldConfig,
    grid:       Option<Restrictor>,
    strategy:   ExecutionStrategy,
    decision:   Option<Arc<dyn DecisionStrategy>>,
    food_table: Option<Vec<FoodEntry>>,
    populate:   bool,
}

impl SimBuilder {
    pub fn new(config: WorldConfig) -> Self {
        Self {
            config,
            grid:       None,
            strategy:   ExecutionStrategy::default(),
            decision:   None,
            food_table: None,
            populate:   false,
        }
    }

    /// The level every agent walks on.
    pub fn grid(mut self, grid: Restrictor) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// NPC decision strategy, overriding the build-time default.
    pub fn decision(mut self, decision: Arc<dyn DecisionStrategy>) -> Self {
        self.decision = Some(decision);
        self
    }

    pub fn food_table(mut self, table: Vec<FoodEntry>) -> Self {
        self.food_table = Some(table);
        self
    }

    /// Spawn the initial hero, NPCs and food when building.
    pub fn populate(mut self, populate: bool) -> Self {
        self.populate = populate;
        self
    }

    /// Build only the world, e.g. to hand to [`Sim::swap_world`].
    pub fn build_world(&self) -> SimResult<World> {
        let grid = self.grid.clone().ok_or(SimError::MissingGrid)?;
        let table = self.food_table.clone().unwrap_or_else(default_food_table);
        let mut world = World::new(self.config.clone(), grid, table)?;
        if self.populate {
            world.populate();
        }
        Ok(world)
    }

    /// Validate inputs, build the world and scheduler, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let world = self.build_world()?;
        let decision = self
            .decision
            .unwrap_or_else(|| Arc::new(DefaultStrategy::default()) as Arc<dyn DecisionStrategy>);
        let scheduler = Scheduler::new(self.strategy, decision)?;
        Ok(Sim::new(scheduler, world))
    }
}
