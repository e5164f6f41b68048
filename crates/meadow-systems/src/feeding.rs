//! Food consumption by heroes and consumer NPCs.

use meadow_core::{Cell, FoodKind, Health, NpcKind, Stamina};
use meadow_store::{FoodTable, HeroTable, NpcTable};

/// Every live hero, then every live consumer NPC, eats the first live food
/// item on its cell.  One item per eater per frame.  Returns items eaten.
pub fn feeding(heroes: &mut HeroTable, npcs: &mut NpcTable, food: &mut FoodTable) -> usize {
    let mut eaten = 0;

    for h in 0..heroes.len() {
        if heroes.removals.contains(h) {
            continue;
        }
        let cell = heroes.transform[h].cell();
        if eat_at(food, cell, &mut heroes.health[h], &mut heroes.stamina[h]) {
            eaten += 1;
        }
    }

    for n in 0..npcs.len() {
        if npcs.kind[n] != NpcKind::Consumer || npcs.removals.contains(n) {
            continue;
        }
        let cell = npcs.transform[n].cell();
        if eat_at(food, cell, &mut npcs.health[n], &mut npcs.stamina[n]) {
            eaten += 1;
        }
    }
    eaten
}

fn eat_at(food: &mut FoodTable, cell: Cell, health: &mut Health, stamina: &mut Stamina) -> bool {
    let Some(f) = (0..food.len())
        .find(|&f| !food.removals.contains(f) && food.transform[f].cell() == cell)
    else {
        return false;
    };
    match food.kind[f] {
        FoodKind::HealthRestore(n) => health.change(n),
        FoodKind::StaminaRestore(n) => stamina.change(n),
    }
    food.removals.mark(f);
    true
}
