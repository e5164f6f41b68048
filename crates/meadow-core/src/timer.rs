//! Fixed-interval accumulators driving the periodic systems.
//!
//! Frames arrive with a variable `dt` (seconds).  Starvation and tiredness
//! fire at most once per frame when enough time has accumulated and carry
//! the remainder; food spawning restarts from zero after firing.

/// What happens to the accumulator when the timer fires.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rearm {
    /// Subtract one interval, keeping any overshoot.
    CarryRemainder,
    /// Reset to zero.
    Restart,
}

/// A periodic trigger accumulated against frame time.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodicTimer {
    pub accumulator: f32,
    pub interval: f32,
    pub rearm: Rearm,
}

impl PeriodicTimer {
    /// A timer that keeps overshoot between firings.
    pub fn carrying(interval: f32) -> Self {
        Self { accumulator: 0.0, interval, rearm: Rearm::CarryRemainder }
    }

    /// A timer that restarts from zero after firing.
    pub fn restarting(interval: f32) -> Self {
        Self { accumulator: 0.0, interval, rearm: Rearm::Restart }
    }

    /// Add `dt` and report whether the interval elapsed this frame.
    ///
    /// Fires at most once per call even if `dt` spans several intervals.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.accumulator += dt;
        if self.accumulator < self.interval {
            return false;
        }
        match self.rearm {
            Rearm::CarryRemainder => self.accumulator -= self.interval,
            Rearm::Restart => self.accumulator = 0.0,
        }
        true
    }
}
