//! Movement primitives.  Each moves the NPC at most one cell and reports
//! whether it moved; passability always comes from the NPC's own
//! restrictor.

use meadow_core::{CARDINALS, Cell};
use meadow_grid::astar;

use crate::AgentCtx;
use crate::targeting::predator_cells;

/// Try to move onto `to`.  Returns `false` (and stays) if it is blocked.
fn try_step(ctx: &mut AgentCtx<'_>, to: Cell) -> bool {
    let npcs = &mut *ctx.npcs;
    if !npcs.restrictor[ctx.npc].can_pass(to) {
        return false;
    }
    npcs.transform[ctx.npc].move_to(to);
    ctx.moved = true;
    true
}

/// Step away from `threat`: the sign-clamped direction first, then the
/// two single-axis alternatives `(x + dir.y, y)` and `(x, y + dir.x)`.
/// Candidates equal to the current cell are skipped.
pub fn flee(ctx: &mut AgentCtx<'_>, threat: Cell) -> bool {
    let here = ctx.cell();
    let dir = Cell::new(here.x - threat.x, here.y - threat.y).signum();
    if dir == Cell::default() {
        return false;
    }
    [here + dir, Cell::new(here.x + dir.y, here.y), Cell::new(here.x, here.y + dir.x)]
        .into_iter()
        .filter(|&to| to != here)
        .any(|to| try_step(ctx, to))
}

/// One uniformly random cardinal step, drawn from the NPC's own stream.
pub fn random_step(ctx: &mut AgentCtx<'_>) -> bool {
    let dir = CARDINALS[ctx.npcs.rng[ctx.npc].cardinal_index()];
    let to = ctx.cell() + dir;
    try_step(ctx, to)
}

/// Idle wander: a random step unless something already moved the NPC this
/// tick.
pub fn wander(ctx: &mut AgentCtx<'_>) -> bool {
    if ctx.moved {
        return false;
    }
    random_step(ctx)
}

/// Advance one cell along the shortest path to `target`.
///
/// With no target, or no route, falls back to [`random_step`].  Standing on
/// the target already is arrival and does not move.  `avoid_predators`
/// excludes predator-occupied cells from the route.
pub fn seek(ctx: &mut AgentCtx<'_>, target: Option<Cell>, avoid_predators: bool) -> bool {
    let Some(goal) = target else {
        return random_step(ctx);
    };
    let start = ctx.cell();
    let path = {
        let grid = &ctx.npcs.restrictor[ctx.npc];
        let can_pass = |c: Cell| grid.can_pass(c);
        if avoid_predators {
            let occupied = predator_cells(ctx);
            let avoid = |c: Cell| !occupied.contains(&c);
            astar(start, goal, can_pass, Some(&avoid))
        } else {
            astar(start, goal, can_pass, None)
        }
    };
    match path.get(1) {
        Some(&next) => try_step(ctx, next),
        None if path.is_empty() => random_step(ctx),
        None => false,
    }
}
