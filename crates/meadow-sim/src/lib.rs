//! `meadow-sim`: world, scheduler and execution strategies for the
//! `meadow` simulation engine.
//!
//! # Frame pipeline
//!
//! ```text
//! run_frame(input, dt):
//!   ① HeroMovement   : input-driven, cooldown-gated moves; camera follows
//!   ② NpcDispatch    : movement budget, one decision per whole cell
//!   ③ Feeding        : heroes and consumers eat food on their cell
//!   ④ Predation      : predators eat one hero or consumer on their cell
//!   ⑤ Reproduction   : same-kind pairs on one cell spawn offspring
//!   ⑥ Starvation     : periodic damage to agents with no stamina
//!   ⑦ Tiredness      : periodic stamina drain
//!   ⑧ FoodGeneration : periodic weighted food spawn
//!   ── removal barrier (calling thread, exclusive access) ──
//! ```
//!
//! # Execution strategies
//!
//! | Strategy          | Order within a frame | Threads                         |
//! |-------------------|----------------------|---------------------------------|
//! | `Sequential`      | pipeline order       | caller                          |
//! | `GloballyLocked`  | pipeline order       | caller, world lock per system   |
//! | `ThreadPerSystem` | unspecified          | one scoped thread per system    |
//! | `WorkerPool`      | unspecified          | fixed pool, created once        |
//!
//! The parallel strategies move the tables behind per-table `RwLock`s for
//! the frame; systems that touch disjoint tables run at the same time.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Tiredness drains stamina on Rayon's thread pool.       |
//! | `fsm`      | `DefaultStrategy` is the state machine, not the tree.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use meadow_core::WorldConfig;
//! use meadow_grid::TileGrid;
//! use meadow_sim::{ExecutionStrategy, NoopObserver, SimBuilder};
//! use meadow_systems::InputSnapshot;
//!
//! let sim = SimBuilder::new(WorldConfig::default())
//!     .grid(Arc::new(TileGrid::walled_room(40, 30)?))
//!     .strategy(ExecutionStrategy::ThreadPerSystem)
//!     .populate(true)
//!     .build()?;
//! sim.run_frames(600, &InputSnapshot::default(), 1.0 / 60.0, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
mod frame;
pub mod observer;
pub mod pool;
pub mod scheduler;
pub mod sim;
pub mod slot;
pub mod strategy;
pub mod world;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{FrameObserver, FrameStats, NoopObserver};
pub use pool::WorkerPool;
pub use scheduler::Scheduler;
pub use sim::Sim;
pub use slot::WorldSlot;
pub use strategy::ExecutionStrategy;
pub use world::{Census, SystemState, World};
