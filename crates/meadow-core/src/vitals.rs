//! Bounded health and stamina counters.

/// Cells per second an agent moves with depleted stamina.
pub const BASE_SPEED: f32 = 5.0;

/// Extra cells per second while stamina is above zero.
pub const RESTED_BONUS: f32 = 5.0;

/// Hit points in `[0, max]`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    /// Full health.
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// `current` clamped into `[0, max]`.
    pub fn with_current(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self { current: current.clamp(0, max), max }
    }

    /// Add `delta` and clamp the result into `[0, max]`.
    #[inline]
    pub fn change(&mut self, delta: i32) {
        self.current = self.current.saturating_add(delta).clamp(0, self.max);
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Stamina in `[0, max]`; zero halves movement speed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stamina {
    pub current: i32,
    pub max: i32,
}

impl Stamina {
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    pub fn with_current(current: i32, max: i32) -> Self {
        let max = max.max(0);
        Self { current: current.clamp(0, max), max }
    }

    #[inline]
    pub fn change(&mut self, delta: i32) {
        self.current = self.current.saturating_add(delta).clamp(0, self.max);
    }

    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Movement rate in cells per second.
    #[inline]
    pub fn speed(&self) -> f32 {
        if self.is_depleted() { BASE_SPEED } else { BASE_SPEED + RESTED_BONUS }
    }
}

impl Default for Stamina {
    fn default() -> Self {
        Self::new(100)
    }
}
