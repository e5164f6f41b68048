//! Target selection.
//!
//! Every query measures Manhattan distance between real-valued positions,
//! ignores rows queued for removal, and breaks ties in favor of the row
//! scanned first (NPCs before heroes).  Radii are strict: a candidate at
//! exactly the radius is out of range.

use rustc_hash::FxHashSet;

use meadow_core::{Cell, NpcKind, Transform};

use crate::AgentCtx;

/// Nearest candidate so far.
struct Nearest {
    dist: f64,
    cell: Option<Cell>,
}

impl Nearest {
    fn within(radius: f64) -> Self {
        Self { dist: radius, cell: None }
    }

    fn unbounded() -> Self {
        Self { dist: f64::INFINITY, cell: None }
    }

    #[inline]
    fn offer(&mut self, from: &Transform, candidate: &Transform) {
        let d = from.manhattan(candidate);
        if d < self.dist {
            self.dist = d;
            self.cell = Some(candidate.cell());
        }
    }
}

/// `true` if health or stamina is below the hunger threshold.
pub fn is_hungry(ctx: &AgentCtx<'_>) -> bool {
    let t = ctx.config.hunger_threshold;
    ctx.npcs.health[ctx.npc].current < t || ctx.npcs.stamina[ctx.npc].current < t
}

/// `true` if health is above the reproduction threshold.
pub fn ready_to_reproduce(ctx: &AgentCtx<'_>) -> bool {
    ctx.npcs.health[ctx.npc].current > ctx.config.reproduction_threshold
}

/// Cell of the nearest predator strictly inside the threat radius.
pub fn nearest_threat(ctx: &AgentCtx<'_>) -> Option<Cell> {
    let npcs = &*ctx.npcs;
    let me = &npcs.transform[ctx.npc];
    let mut best = Nearest::within(ctx.config.threat_radius);
    for p in 0..npcs.len() {
        if p == ctx.npc || npcs.kind[p] != NpcKind::Predator || npcs.removals.contains(p) {
            continue;
        }
        best.offer(me, &npcs.transform[p]);
    }
    best.cell
}

/// Cell of the nearest consumer NPC or hero strictly inside the hunt radius.
pub fn nearest_prey(ctx: &AgentCtx<'_>) -> Option<Cell> {
    let npcs = &*ctx.npcs;
    let me = &npcs.transform[ctx.npc];
    let mut best = Nearest::within(ctx.config.hunt_radius);
    for n in 0..npcs.len() {
        if n == ctx.npc || npcs.kind[n] != NpcKind::Consumer || npcs.removals.contains(n) {
            continue;
        }
        best.offer(me, &npcs.transform[n]);
    }
    let heroes = ctx.heroes;
    for h in 0..heroes.len() {
        if heroes.removals.contains(h) {
            continue;
        }
        best.offer(me, &heroes.transform[h]);
    }
    best.cell
}

/// Cell of the nearest same-kind NPC that is itself ready to reproduce,
/// strictly inside the mate search radius.
pub fn nearest_mate(ctx: &AgentCtx<'_>) -> Option<Cell> {
    let npcs = &*ctx.npcs;
    let me = &npcs.transform[ctx.npc];
    let kind = npcs.kind[ctx.npc];
    let threshold = ctx.config.reproduction_threshold;
    let mut best = Nearest::within(ctx.config.mate_search_radius);
    for m in 0..npcs.len() {
        if m == ctx.npc
            || npcs.kind[m] != kind
            || npcs.health[m].current <= threshold
            || npcs.removals.contains(m)
        {
            continue;
        }
        best.offer(me, &npcs.transform[m]);
    }
    best.cell
}

/// Cell of the nearest food item, at any distance.
pub fn nearest_food(ctx: &AgentCtx<'_>) -> Option<Cell> {
    let me = &ctx.npcs.transform[ctx.npc];
    let food = ctx.food;
    let mut best = Nearest::unbounded();
    for f in 0..food.len() {
        if food.removals.contains(f) {
            continue;
        }
        best.offer(me, &food.transform[f]);
    }
    best.cell
}

/// Cells currently occupied by live predators.
pub fn predator_cells(ctx: &AgentCtx<'_>) -> FxHashSet<Cell> {
    let npcs = &*ctx.npcs;
    (0..npcs.len())
        .filter(|&p| npcs.kind[p] == NpcKind::Predator && !npcs.removals.contains(p))
        .map(|p| npcs.transform[p].cell())
        .collect()
}
