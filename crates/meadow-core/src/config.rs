//! World configuration.
//!
//! Typically built in code by the application (or deserialized when the
//! `serde` feature is on) and handed to `meadow-sim`'s builder.  Defaults
//! reproduce the tuning the engine ships with.

use crate::{CoreError, CoreResult};

/// Maximum values for freshly spawned agents.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VitalsConfig {
    pub max_health: i32,
    pub max_stamina: i32,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self { max_health: 100, max_stamina: 100 }
    }
}

/// Thresholds and radii used by both decision strategies.
///
/// Radii are compared with `<` against Manhattan distance between
/// real-valued positions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorConfig {
    /// Hungry when health OR stamina is below this.
    pub hunger_threshold: i32,
    /// Ready to reproduce when health is above this.
    pub reproduction_threshold: i32,
    /// Consumers flee predators closer than this.
    pub threat_radius: f64,
    /// Predators hunt prey closer than this.
    pub hunt_radius: f64,
    /// Candidate mates must be closer than this.
    pub mate_search_radius: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            hunger_threshold:       50,
            reproduction_threshold: 80,
            threat_radius:          5.0,
            hunt_radius:            8.0,
            mate_search_radius:     10.0,
        }
    }
}

/// Periodic health and stamina loss.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttritionConfig {
    pub starvation_interval_secs: f32,
    pub starvation_damage: i32,
    pub tiredness_interval_secs: f32,
    pub tiredness_drain: i32,
}

impl Default for AttritionConfig {
    fn default() -> Self {
        Self {
            starvation_interval_secs: 1.0,
            starvation_damage:        2,
            tiredness_interval_secs:  1.0,
            tiredness_drain:          5,
        }
    }
}

/// Food spawning and initial population sizes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnConfig {
    /// Base food spawn interval in seconds, divided by `food_spawn_rate`.
    pub food_base_interval_secs: f32,
    pub food_spawn_rate: f32,
    /// Food items placed by `World::populate`.
    pub initial_food: usize,
    /// NPCs placed by `World::populate`.
    pub npc_count: usize,
    /// Probability that a populated NPC is a predator.
    pub predator_probability: f64,
}

impl SpawnConfig {
    /// Seconds between two food spawns.
    #[inline]
    pub fn food_interval_secs(&self) -> f32 {
        self.food_base_interval_secs / self.food_spawn_rate
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            food_base_interval_secs: 2.0,
            food_spawn_rate:         100.0,
            initial_food:            100,
            npc_count:               100,
            predator_probability:    0.2,
        }
    }
}

/// Top-level world configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Master RNG seed.  The same seed reproduces a sequential run exactly.
    pub seed: u64,
    pub vitals: VitalsConfig,
    pub behavior: BehaviorConfig,
    pub attrition: AttritionConfig,
    pub spawn: SpawnConfig,
}

impl WorldConfig {
    /// Reject values that would stall or corrupt the simulation.
    pub fn validate(&self) -> CoreResult<()> {
        if self.vitals.max_health <= 0 || self.vitals.max_stamina <= 0 {
            return Err(CoreError::Config("vitals maxima must be positive".into()));
        }
        if self.attrition.starvation_interval_secs <= 0.0
            || self.attrition.tiredness_interval_secs <= 0.0
        {
            return Err(CoreError::Config("attrition intervals must be positive".into()));
        }
        if self.spawn.food_spawn_rate <= 0.0 || self.spawn.food_base_interval_secs <= 0.0 {
            return Err(CoreError::Config("food spawn interval must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.spawn.predator_probability) {
            return Err(CoreError::Config(format!(
                "predator_probability {} outside [0, 1]",
                self.spawn.predator_probability
            )));
        }
        let b = &self.behavior;
        if b.threat_radius < 0.0 || b.hunt_radius < 0.0 || b.mate_search_radius < 0.0 {
            return Err(CoreError::Config("behavior radii must be non-negative".into()));
        }
        Ok(())
    }
}
