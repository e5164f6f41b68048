//! Frame observer trait for progress reporting and data collection.

use meadow_store::RemovalCounts;
use meadow_systems::SystemId;

/// What happened during one frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Index of the frame these numbers belong to.
    pub frame: u64,
    pub hero_moves: usize,
    pub decisions: usize,
    pub food_eaten: usize,
    pub kills: usize,
    pub births: usize,
    pub starved: usize,
    pub food_spawned: usize,
    pub stamina_drained: bool,
    /// Rows erased by the removal barrier.
    pub removed: RemovalCounts,
}

impl FrameStats {
    pub fn new(frame: u64) -> Self {
        Self { frame, ..Self::default() }
    }

    /// Entities added during the frame.
    #[inline]
    pub fn spawned(&self) -> usize {
        self.births + self.food_spawned
    }

    pub(crate) fn record(&mut self, id: SystemId, count: usize) {
        match id {
            SystemId::HeroMovement   => self.hero_moves = count,
            SystemId::NpcDispatch    => self.decisions = count,
            SystemId::Feeding        => self.food_eaten = count,
            SystemId::Predation      => self.kills = count,
            SystemId::Reproduction   => self.births = count,
            SystemId::Starvation     => self.starved = count,
            SystemId::Tiredness      => self.stamina_drained = count > 0,
            SystemId::FoodGeneration => self.food_spawned = count,
        }
    }
}

/// Callbacks invoked by the scheduler around each frame.
///
/// All methods have default no-op implementations.
///
/// # Example: population printer
///
/// ```rust,ignore
/// struct Deaths(usize);
///
/// impl FrameObserver for Deaths {
///     fn on_frame_end(&mut self, stats: &FrameStats) {
///         self.0 += stats.removed.heroes + stats.removed.npcs;
///     }
/// }
/// ```
pub trait FrameObserver {
    /// Called before the first system of a frame runs.
    fn on_frame_start(&mut self, _frame: u64) {}

    /// Called after the removal barrier.
    fn on_frame_end(&mut self, _stats: &FrameStats) {}

    /// Called after a world regeneration with the slot's new epoch.
    fn on_world_swapped(&mut self, _epoch: u64) {}
}

/// A [`FrameObserver`] that does nothing.
pub struct NoopObserver;

impl FrameObserver for NoopObserver {}
