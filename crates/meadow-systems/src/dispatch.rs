//! NPC decision dispatch.

use meadow_behavior::{AgentCtx, DecisionStrategy};
use meadow_core::BehaviorConfig;
use meadow_store::{FoodTable, HeroTable, NpcTable};

/// Grow each live NPC's movement budget by `dt * speed` and, once it
/// reaches a whole cell, spend exactly 1.0 of it on one decision.
///
/// Returns the number of decisions made.
pub fn npc_dispatch(
    npcs:     &mut NpcTable,
    heroes:   &HeroTable,
    food:     &FoodTable,
    config:   &BehaviorConfig,
    strategy: &dyn DecisionStrategy,
    dt:       f32,
) -> usize {
    let mut ctx = AgentCtx::new(npcs, heroes, food, config);
    let mut decisions = 0;

    for i in 0..ctx.npcs.len() {
        if ctx.npcs.removals.contains(i) {
            continue;
        }
        let speed = ctx.npcs.stamina[i].speed();
        let data = &mut ctx.npcs.data[i];
        data.accumulated += dt * speed;
        if data.accumulated < 1.0 {
            continue;
        }
        data.accumulated -= 1.0;

        strategy.decide(ctx.at(i));
        decisions += 1;
    }
    decisions
}
