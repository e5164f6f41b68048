//! Predators eating heroes and consumers on their cell.

use tracing::debug;

use meadow_core::NpcKind;
use meadow_store::{HeroTable, NpcTable};

/// Each live predator eats at most one victim on its own cell: a live hero
/// if there is one, otherwise the first live consumer.  The victim's
/// current health is added to the predator's (clamped) and the victim is
/// marked for removal.  Returns the number of kills.
pub fn predation(npcs: &mut NpcTable, heroes: &mut HeroTable) -> usize {
    let mut kills = 0;

    for p in 0..npcs.len() {
        if npcs.kind[p] != NpcKind::Predator || npcs.removals.contains(p) {
            continue;
        }
        let cell = npcs.transform[p].cell();

        let hero = (0..heroes.len())
            .find(|&h| !heroes.removals.contains(h) && heroes.transform[h].cell() == cell);
        if let Some(h) = hero {
            npcs.health[p].change(heroes.health[h].current);
            heroes.removals.mark(h);
            debug!(predator = p, hero = h, %cell, "hero_killed");
            kills += 1;
            continue;
        }

        let victim = (0..npcs.len()).find(|&v| {
            v != p
                && npcs.kind[v] == NpcKind::Consumer
                && !npcs.removals.contains(v)
                && npcs.transform[v].cell() == cell
        });
        if let Some(v) = victim {
            let gained = npcs.health[v].current;
            npcs.health[p].change(gained);
            npcs.removals.mark(v);
            debug!(predator = p, victim = v, gained, %cell, "npc_killed");
            kills += 1;
        }
    }
    kills
}
