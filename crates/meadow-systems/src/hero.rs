//! Input-driven hero movement.

use meadow_store::{CameraTable, HeroTable};

use crate::InputSnapshot;

/// Move every live hero by the input delta, gated by a stamina-dependent
/// cooldown of `1 / speed` seconds.
///
/// With no key held nothing happens and the cooldown is left untouched.
/// While cooling down the hero accumulates `dt` and stays put.  Otherwise
/// the cooldown restarts and the hero moves if the target cell is passable,
/// dragging its bound camera along.  Returns the number of heroes moved.
pub fn hero_movement(
    heroes:  &mut HeroTable,
    cameras: &mut CameraTable,
    input:   &InputSnapshot,
    dt:      f32,
) -> usize {
    if !input.any() {
        return 0;
    }
    let delta = input.delta();
    let mut moved = 0;

    for h in 0..heroes.len() {
        if heroes.removals.contains(h) {
            continue;
        }
        let data = &mut heroes.data[h];
        if data.since_last_move < 1.0 / heroes.stamina[h].speed() {
            data.since_last_move += dt;
            continue;
        }
        data.since_last_move = 0.0;

        let to = heroes.transform[h].cell() + delta;
        if !heroes.restrictor[h].can_pass(to) {
            continue;
        }
        let t = &mut heroes.transform[h];
        t.move_to(to);
        if let Some(camera) = heroes.data[h].camera {
            cameras.center_on(camera, t.x, t.y);
        }
        moved += 1;
    }
    moved
}
