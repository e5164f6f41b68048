//! Same-kind NPCs sharing a cell produce offspring.

use std::sync::Arc;

use tracing::debug;

use meadow_core::{BehaviorConfig, Health, Stamina, VitalsConfig};
use meadow_store::{NpcSpawn, NpcTable};

/// Pair up live same-kind NPCs on the same cell whose health is above the
/// reproduction threshold.
///
/// Pairs are formed in row order, first match wins, and every NPC takes
/// part in at most one pairing per frame.  Each parent gives up
/// `floor(health / 3)`; the offspring starts with the sum (clamped to the
/// configured maximum), fresh stamina, the first parent's sprite and
/// restrictor, and its kind's initial state.  Offspring are appended after
/// the rows considered, so they cannot breed in the frame they are born.
///
/// Returns the number of offspring spawned.
pub fn reproduction(npcs: &mut NpcTable, behavior: &BehaviorConfig, vitals: &VitalsConfig) -> usize {
    let threshold = behavior.reproduction_threshold;
    let n = npcs.len();
    let eligible = |npcs: &NpcTable, i: usize| {
        !npcs.removals.contains(i) && npcs.health[i].current > threshold
    };

    let mut paired = vec![false; n];
    let mut pairs = Vec::new();
    for a in 0..n {
        if paired[a] || !eligible(npcs, a) {
            continue;
        }
        let cell = npcs.transform[a].cell();
        let kind = npcs.kind[a];
        let mate = (a + 1..n).find(|&b| {
            !paired[b]
                && npcs.kind[b] == kind
                && eligible(npcs, b)
                && npcs.transform[b].cell() == cell
        });
        if let Some(b) = mate {
            paired[a] = true;
            paired[b] = true;
            pairs.push((a, b));
        }
    }

    for &(a, b) in &pairs {
        let from_a = npcs.health[a].current / 3;
        let from_b = npcs.health[b].current / 3;
        npcs.health[a].change(-from_a);
        npcs.health[b].change(-from_b);

        let child = npcs.spawn(NpcSpawn {
            sprite:     npcs.sprite[a],
            transform:  npcs.transform[a],
            health:     Health::with_current(from_a + from_b, vitals.max_health),
            stamina:    Stamina::new(vitals.max_stamina),
            restrictor: Arc::clone(&npcs.restrictor[a]),
            kind:       npcs.kind[a],
        });
        debug!(parent_a = a, parent_b = b, child, health = from_a + from_b, "npc_born");
    }
    pairs.len()
}
