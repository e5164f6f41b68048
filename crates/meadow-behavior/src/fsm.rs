//! The finite-state-machine strategy.
//!
//! Guards are re-evaluated from scratch every tick, highest priority first.
//! The stored state (and its cached target) is replaced only when the
//! winning guard names a different state; the flee target is refreshed
//! every tick regardless.  The movement primitive bound to the resulting
//! state then runs exactly once.

use tracing::trace;

use meadow_core::{Cell, ConsumerState, NpcState, PredatorState};

use crate::movement::{flee, seek, wander};
use crate::targeting::{
    is_hungry, nearest_food, nearest_mate, nearest_prey, nearest_threat, ready_to_reproduce,
};
use crate::{Activity, AgentCtx, DecisionStrategy};

#[derive(Copy, Clone, Debug, Default)]
pub struct FsmStrategy;

impl FsmStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl DecisionStrategy for FsmStrategy {
    fn decide(&self, ctx: &mut AgentCtx<'_>) -> Activity {
        match ctx.npcs.data[ctx.npc].state {
            NpcState::Consumer(_) => consumer(ctx),
            NpcState::Predator(_) => predator(ctx),
        }
        ctx.activity
    }

    fn name(&self) -> &'static str {
        "fsm"
    }
}

/// Store `next` if it differs from the current state, clearing the target.
fn transition(ctx: &mut AgentCtx<'_>, next: NpcState) {
    let data = &mut ctx.npcs.data[ctx.npc];
    if data.state != next {
        trace!(npc = ctx.npc, from = ?data.state, to = ?next, "npc_state_changed");
        data.state = next;
        data.target = None;
    }
}

fn consumer(ctx: &mut AgentCtx<'_>) {
    let threat = nearest_threat(ctx);
    let next = if threat.is_some() {
        ConsumerState::Fleeing
    } else if ready_to_reproduce(ctx) {
        ConsumerState::SeekingMate
    } else if is_hungry(ctx) {
        ConsumerState::SeekingFood
    } else {
        ConsumerState::Idle
    };
    transition(ctx, NpcState::Consumer(next));

    match next {
        ConsumerState::Fleeing => {
            ctx.activity = Activity::Fleeing;
            ctx.set_target(threat);
            if let Some(threat) = threat {
                flee(ctx, threat);
            }
        }
        ConsumerState::SeekingMate => {
            ctx.activity = Activity::SeekingMate;
            let mate = nearest_mate(ctx);
            pursue(ctx, mate, false);
        }
        ConsumerState::SeekingFood => {
            ctx.activity = Activity::SeekingFood;
            let food = nearest_food(ctx);
            pursue(ctx, food, true);
        }
        ConsumerState::Idle => {
            ctx.activity = Activity::Idle;
            wander(ctx);
        }
    }
}

fn predator(ctx: &mut AgentCtx<'_>) {
    let prey = nearest_prey(ctx);
    let next = if prey.is_some() {
        PredatorState::Hunting
    } else if ready_to_reproduce(ctx) {
        PredatorState::SeekingMate
    } else {
        PredatorState::Idle
    };
    transition(ctx, NpcState::Predator(next));

    match next {
        PredatorState::Hunting => {
            ctx.activity = Activity::Hunting;
            pursue(ctx, prey, false);
        }
        PredatorState::SeekingMate => {
            ctx.activity = Activity::SeekingMate;
            let mate = nearest_mate(ctx);
            pursue(ctx, mate, false);
        }
        PredatorState::Idle => {
            ctx.activity = Activity::Idle;
            wander(ctx);
        }
    }
}

/// Cache `target` and take one step toward it.
fn pursue(ctx: &mut AgentCtx<'_>, target: Option<Cell>, avoid_predators: bool) {
    ctx.set_target(target);
    seek(ctx, target, avoid_predators);
}
