//! Deterministic per-NPC and per-system RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each NPC row carries its own `SmallRng` seeded by:
//!
//!   seed = world_seed XOR (spawn_serial * MIXING_CONSTANT)
//!
//! `spawn_serial` is a monotonically increasing counter kept by the NPC
//! table, so offspring born mid-run get fresh, reproducible streams and
//! compaction at the removal barrier (which moves rows) never changes which
//! stream belongs to which NPC.  Systems that need randomness outside the
//! NPC rows (food spawning, initial population) own a separate `SimRng`.
//!
//! Under the parallel strategies no two threads ever share a stream.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-NPC deterministic RNG, stored as one column of the NPC table.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the world seed and a spawn serial.
    pub fn new(world_seed: u64, serial: u64) -> Self {
        let seed = world_seed ^ serial.wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for `rand` APIs that take `&mut R`.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Index into a four-element table, uniformly.
    #[inline]
    pub fn cardinal_index(&mut self) -> usize {
        self.0.gen_range(0..4)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// System-level RNG for global operations (food spawning, population setup).
///
/// Owned by exactly one system, so it is only ever touched by one thread at
/// a time regardless of the scheduling strategy.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// The stream as a trait object, for object-safe oracle APIs.
    #[inline]
    pub fn as_dyn(&mut self) -> &mut dyn RngCore {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
