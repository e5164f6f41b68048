//! Periodic starvation damage and stamina drain.

use tracing::debug;

use meadow_core::{AttritionConfig, PeriodicTimer};
use meadow_store::{HeroTable, NpcTable};

// ── Starvation ────────────────────────────────────────────────────────────────

/// On each firing, every live agent with depleted stamina loses a fixed
/// amount of health; agents reaching zero are marked for removal.
#[derive(Clone, Debug)]
pub struct Starvation {
    pub timer: PeriodicTimer,
    pub damage: i32,
}

impl Starvation {
    pub fn new(config: &AttritionConfig) -> Self {
        Self {
            timer:  PeriodicTimer::carrying(config.starvation_interval_secs),
            damage: config.starvation_damage,
        }
    }

    /// Advance the timer by `dt`.  Returns the number of agents that died.
    pub fn run(&mut self, heroes: &mut HeroTable, npcs: &mut NpcTable, dt: f32) -> usize {
        if !self.timer.tick(dt) {
            return 0;
        }
        let mut deaths = 0;

        for h in 0..heroes.len() {
            if heroes.removals.contains(h) || !heroes.stamina[h].is_depleted() {
                continue;
            }
            heroes.health[h].change(-self.damage);
            if heroes.health[h].is_dead() {
                heroes.removals.mark(h);
                debug!(hero = h, "hero_starved");
                deaths += 1;
            }
        }

        for n in 0..npcs.len() {
            if npcs.removals.contains(n) || !npcs.stamina[n].is_depleted() {
                continue;
            }
            npcs.health[n].change(-self.damage);
            if npcs.health[n].is_dead() {
                npcs.removals.mark(n);
                debug!(npc = n, kind = ?npcs.kind[n], "npc_starved");
                deaths += 1;
            }
        }
        deaths
    }
}

// ── Tiredness ─────────────────────────────────────────────────────────────────

/// On each firing, every hero and NPC loses a fixed amount of stamina.
#[derive(Clone, Debug)]
pub struct Tiredness {
    pub timer: PeriodicTimer,
    pub drain: i32,
}

impl Tiredness {
    pub fn new(config: &AttritionConfig) -> Self {
        Self {
            timer: PeriodicTimer::carrying(config.tiredness_interval_secs),
            drain: config.tiredness_drain,
        }
    }

    /// Advance the timer by `dt`.  Returns `true` if stamina was drained.
    pub fn run(&mut self, heroes: &mut HeroTable, npcs: &mut NpcTable, dt: f32) -> bool {
        if !self.timer.tick(dt) {
            return false;
        }
        let delta = -self.drain;
        for s in &mut heroes.stamina {
            s.change(delta);
        }

        #[cfg(not(feature = "parallel"))]
        for s in &mut npcs.stamina {
            s.change(delta);
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            npcs.stamina.par_iter_mut().for_each(|s| s.change(delta));
        }
        true
    }
}
