//! `meadow-behavior`: NPC decision making.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`context`]   | `AgentCtx<'w>` (one NPC's view of the world), `Activity`      |
//! | [`targeting`] | nearest threat / prey / mate / food queries, hunger checks    |
//! | [`movement`]  | flee, seek and random-step primitives shared by strategies    |
//! | [`tree`]      | `Node` (condition, action, task, sequence, selector, inverter), `Status` |
//! | [`model`]     | `DecisionStrategy` trait, `DefaultStrategy` alias             |
//! | [`tree_strategy`] | `TreeStrategy`: prebuilt consumer and predator trees     |
//! | [`fsm`]       | `FsmStrategy`: per-kind state machine                        |
//!
//! # Strategies
//!
//! Both strategies pick the same behavior from the same world state and run
//! the same movement primitive, so swapping one for the other changes no
//! outcome except the stored FSM state tag.  The `fsm` Cargo feature selects
//! which one [`DefaultStrategy`] names.

pub mod context;
pub mod fsm;
pub mod model;
pub mod movement;
pub mod targeting;
pub mod tree;
pub mod tree_strategy;

#[cfg(test)]
mod tests;

pub use context::{Activity, AgentCtx};
pub use fsm::FsmStrategy;
pub use model::{DecisionStrategy, DefaultStrategy};
pub use tree::{Node, Status};
pub use tree_strategy::TreeStrategy;
