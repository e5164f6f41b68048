//! The composable-tree strategy.
//!
//! Consumer tree (highest priority first):
//!
//! ```text
//! Selector
//! ├── Sequence: threat in range?      → flee
//! ├── Sequence: ready to reproduce?   → seek mate
//! ├── Sequence: hungry?               → seek food (avoiding predators)
//! └── Action:   wander
//! ```
//!
//! Predator tree:
//!
//! ```text
//! Selector
//! ├── Sequence: prey in range?        → hunt
//! ├── Sequence: ready to reproduce?   → seek mate
//! └── Action:   wander
//! ```
//!
//! Hunting outranks mating so a predator with prey nearby never stalls
//! looking for a partner.

use meadow_core::NpcKind;

use crate::movement::{flee, seek, wander};
use crate::targeting::{
    is_hungry, nearest_food, nearest_mate, nearest_prey, nearest_threat, ready_to_reproduce,
};
use crate::{Activity, AgentCtx, DecisionStrategy, Node};

/// Evaluates one prebuilt tree per NPC kind.
pub struct TreeStrategy {
    consumer: Node,
    predator: Node,
}

impl TreeStrategy {
    /// The standard consumer and predator trees.
    pub fn new() -> Self {
        Self { consumer: consumer_tree(), predator: predator_tree() }
    }

    /// Use custom trees.  Leaves should record what they did in
    /// `ctx.activity`.
    pub fn with_trees(consumer: Node, predator: Node) -> Self {
        Self { consumer, predator }
    }

    pub fn tree(&self, kind: NpcKind) -> &Node {
        match kind {
            NpcKind::Consumer => &self.consumer,
            NpcKind::Predator => &self.predator,
        }
    }
}

impl Default for TreeStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionStrategy for TreeStrategy {
    fn decide(&self, ctx: &mut AgentCtx<'_>) -> Activity {
        self.tree(ctx.kind()).tick(ctx);
        ctx.activity
    }

    fn name(&self) -> &'static str {
        "tree"
    }
}

// ── Leaves ────────────────────────────────────────────────────────────────────

fn threat_in_range(ctx: &mut AgentCtx<'_>) -> bool {
    let threat = nearest_threat(ctx);
    if threat.is_some() {
        ctx.set_target(threat);
    }
    threat.is_some()
}

fn prey_in_range(ctx: &mut AgentCtx<'_>) -> bool {
    let prey = nearest_prey(ctx);
    if prey.is_some() {
        ctx.set_target(prey);
    }
    prey.is_some()
}

fn flee_from_target(ctx: &mut AgentCtx<'_>) {
    ctx.activity = Activity::Fleeing;
    if let Some(threat) = ctx.target() {
        flee(ctx, threat);
    }
}

fn hunt_target(ctx: &mut AgentCtx<'_>) {
    ctx.activity = Activity::Hunting;
    let prey = ctx.target();
    seek(ctx, prey, false);
}

fn seek_mate(ctx: &mut AgentCtx<'_>) {
    ctx.activity = Activity::SeekingMate;
    let mate = nearest_mate(ctx);
    ctx.set_target(mate);
    seek(ctx, mate, false);
}

fn seek_food(ctx: &mut AgentCtx<'_>) {
    ctx.activity = Activity::SeekingFood;
    let food = nearest_food(ctx);
    ctx.set_target(food);
    seek(ctx, food, true);
}

fn idle(ctx: &mut AgentCtx<'_>) {
    ctx.activity = Activity::Idle;
    wander(ctx);
}

// ── Trees ─────────────────────────────────────────────────────────────────────

fn consumer_tree() -> Node {
    Node::selector([
        Node::sequence([Node::condition(threat_in_range), Node::action(flee_from_target)]),
        Node::sequence([Node::condition(|ctx| ready_to_reproduce(ctx)), Node::action(seek_mate)]),
        Node::sequence([Node::condition(|ctx| is_hungry(ctx)), Node::action(seek_food)]),
        Node::action(idle),
    ])
}

fn predator_tree() -> Node {
    Node::selector([
        Node::sequence([Node::condition(prey_in_range), Node::action(hunt_target)]),
        Node::sequence([Node::condition(|ctx| ready_to_reproduce(ctx)), Node::action(seek_mate)]),
        Node::action(idle),
    ])
}
