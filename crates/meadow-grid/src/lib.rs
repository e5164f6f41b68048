//! `meadow-grid`: passability oracle and grid pathfinding.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`oracle`]     | `GridOracle` trait (consumed contract), `TileGrid` bitmap  |
//! | [`pathfinder`] | `astar`, `Path`                                            |
//! | [`error`]      | `GridError`, `GridResult<T>`                               |
//!
//! The dungeon generator that produces real levels is an external
//! collaborator; it only has to implement [`GridOracle`].  [`TileGrid`] is a
//! small reference oracle used by tests and the demo.

pub mod error;
pub mod oracle;
pub mod pathfinder;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use oracle::{GridOracle, TileGrid};
pub use pathfinder::{astar, Path};
