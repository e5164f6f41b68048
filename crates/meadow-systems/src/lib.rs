//! `meadow-systems`: the systems run once per frame by the scheduler.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                 |
//! |------------------|----------------------------------------------------------|
//! | [`pipeline`]     | `SystemId` and the fixed `PIPELINE` order                |
//! | [`input`]        | `InputSnapshot` (directional intents for one frame)      |
//! | [`hero`]         | `hero_movement`                                          |
//! | [`dispatch`]     | `npc_dispatch` (movement budget + decision strategy)     |
//! | [`feeding`]      | `feeding`                                                |
//! | [`predation`]    | `predation`                                              |
//! | [`reproduction`] | `reproduction`                                           |
//! | [`attrition`]    | `Starvation`, `Tiredness` periodic systems               |
//! | [`spawning`]     | `FoodGenerator`, `FoodEntry`, the default food table      |
//!
//! Every system is a plain function (or a method on its own state) over
//! exactly the tables it touches, so the scheduler can lock, borrow or
//! share those tables however its strategy requires.  Systems never erase
//! rows; they mark them in the table's removal queue and skip marked rows.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Tiredness drains stamina on Rayon's thread pool.       |

pub mod attrition;
pub mod dispatch;
pub mod feeding;
pub mod hero;
pub mod input;
pub mod pipeline;
pub mod predation;
pub mod reproduction;
pub mod spawning;


pub use attrition::{Starvation, Tiredness};
pub use dispatch::npc_dispatch;
pub use feeding::feeding;
pub use hero::hero_movement;
pub use input::InputSnapshot;
pub use pipeline::{PIPELINE, SystemId};
pub use predation::predation;
pub use reproduction::reproduction;
pub use spawning::{FoodEntry, FoodGenerator, default_food_table};
