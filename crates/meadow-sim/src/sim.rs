//! `Sim`: a scheduler driving whatever world the slot currently holds.

use std::sync::{Arc, Mutex};

use meadow_systems::InputSnapshot;

use crate::{FrameObserver, FrameStats, Scheduler, SimResult, World, WorldSlot};

/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    pub scheduler: Scheduler,
    slot: WorldSlot,
}

impl Sim {
    pub fn new(scheduler: Scheduler, world: World) -> Self {
        Self { scheduler, slot: WorldSlot::new(world) }
    }

    /// Run one frame on the current world.
    pub fn step<O: FrameObserver + ?Sized>(
        &self,
        input:    &InputSnapshot,
        dt:       f32,
        observer: &mut O,
    ) -> SimResult<FrameStats> {
        let world = self.slot.current();
        self.scheduler.run_frame(&world, input, dt, observer)
    }

    /// Run `n` frames with the same input and `dt`.
    pub fn run_frames<O: FrameObserver + ?Sized>(
        &self,
        n:        u64,
        input:    &InputSnapshot,
        dt:       f32,
        observer: &mut O,
    ) -> SimResult<()> {
        for _ in 0..n {
            self.step(input, dt, observer)?;
        }
        Ok(())
    }

    /// Replace the world between frames.  The previous world lives on until
    /// every outstanding [`Sim::world`] handle is dropped.
    pub fn swap_world<O: FrameObserver + ?Sized>(&self, world: World, observer: &mut O) -> u64 {
        let epoch = self.slot.replace(world);
        observer.on_world_swapped(epoch);
        epoch
    }

    /// A handle on the current world, e.g. for a renderer.
    pub fn world(&self) -> Arc<Mutex<World>> {
        self.slot.current()
    }

    #[inline]
    pub fn slot(&self) -> &WorldSlot {
        &self.slot
    }
}
