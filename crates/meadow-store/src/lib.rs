//! `meadow-store`: struct-of-arrays entity storage.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`removal`]  | `RemovalQueue` (deferred deletes with O(1) membership)      |
//! | [`hero`]     | `HeroTable`, `HeroData`, `HeroSpawn`                        |
//! | [`npc`]      | `NpcTable`, `NpcData`, `NpcSpawn`                           |
//! | [`food`]     | `FoodTable`                                                 |
//! | [`scenery`]  | `TileTable`, `CameraTable`, `Camera`                        |
//! | [`store`]    | `EntityStore` grouping every table, `RemovalCounts`         |
//!
//! # Row addressing
//!
//! Each table keeps one dense `Vec` per attribute, all of equal length.  A
//! row index addresses the same entity in every column of its table, but
//! only until the next removal barrier: [`EntityStore::apply_removals`]
//! compacts the columns and shifts later rows down.
//!
//! Systems never delete rows directly.  They mark them in the table's
//! `removals` queue and skip marked rows for the rest of the frame.

pub mod food;
pub mod hero;
pub mod npc;
pub mod removal;
pub mod scenery;
pub mod store;


use std::sync::Arc;

use meadow_grid::GridOracle;

/// Passability delegate attached to each agent row.
pub type Restrictor = Arc<dyn GridOracle>;

pub use food::FoodTable;
pub use hero::{HeroData, HeroSpawn, HeroTable};
pub use npc::{NpcData, NpcSpawn, NpcTable};
pub use removal::RemovalQueue;
pub use scenery::{Camera, CameraTable, TileTable};
pub use store::{EntityStore, RemovalCounts};
