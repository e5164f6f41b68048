//! Atomic world replacement with deferred teardown.

use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use tracing::info;

use crate::World;

/// Holds the current world.
///
/// Readers (the scheduler, a renderer) take a clone of the `Arc` for as long
/// as they need the world.  [`WorldSlot::replace`] swaps in a new one under
/// a short write lock; the old world is dropped when its last clone goes
/// away, never underneath a reader.
pub struct WorldSlot {
    current: RwLock<Arc<Mutex<World>>>,
    epoch:   AtomicU64,
}

impl WorldSlot {
    pub fn new(world: World) -> Self {
        Self {
            current: RwLock::new(Arc::new(Mutex::new(world))),
            epoch:   AtomicU64::new(0),
        }
    }

    /// The world readers should use from now on.
    pub fn current(&self) -> Arc<Mutex<World>> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of replacements so far.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Install `world` and return the new epoch.
    pub fn replace(&self, world: World) -> u64 {
        let fresh = Arc::new(Mutex::new(world));
        let old = {
            let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
            mem::replace(&mut *slot, fresh)
        };
        let epoch = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
        info!(epoch, outstanding_readers = Arc::strong_count(&old) - 1, "world_swapped");
        epoch
    }
}
