//! `meadow-core`: foundational types for the `meadow` simulation engine.
//!
//! This crate is a dependency of every other `meadow-*` crate.  It has no
//! `meadow-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`ids`]         | `SpriteId`                                               |
//! | [`geometry`]    | `Cell`, `Transform`, Manhattan distance                  |
//! | [`vitals`]      | `Health`, `Stamina` bounded counters                     |
//! | [`kinds`]       | `NpcKind`, `FoodKind`, `NpcState` and the per-kind states |
//! | [`timer`]       | `PeriodicTimer` fixed-interval accumulator               |
//! | [`rng`]         | `AgentRng` (per-NPC), `SimRng` (per-system)              |
//! | [`config`]      | `WorldConfig` and its sections                           |
//! | [`error`]       | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod kinds;
pub mod rng;
pub mod timer;
pub mod vitals;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AttritionConfig, BehaviorConfig, SpawnConfig, VitalsConfig, WorldConfig};
pub use error::{CoreError, CoreResult};
pub use geometry::{Cell, Transform, CARDINALS};
pub use ids::SpriteId;
pub use kinds::{ConsumerState, FoodKind, NpcKind, NpcState, PredatorState};
pub use rng::{AgentRng, SimRng};
pub use timer::{PeriodicTimer, Rearm};
pub use vitals::{Health, Stamina};
