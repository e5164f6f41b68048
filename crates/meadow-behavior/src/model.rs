//! The `DecisionStrategy` trait: the seam between the NPC dispatch system
//! and the decision engines.

use crate::{Activity, AgentCtx};

/// Pluggable NPC decision making.
///
/// `decide` runs once per NPC whenever its movement budget reaches a whole
/// cell.  It may move the NPC by at most one cell and update its cached
/// target and state tag; it must not touch any other row.
///
/// # Thread safety
///
/// A strategy is shared by reference with whichever thread runs the
/// dispatch system, so implementations must be `Send + Sync`.  Per-NPC
/// state lives in the NPC table, not in the strategy.
pub trait DecisionStrategy: Send + Sync + 'static {
    /// Decide and act for the NPC at `ctx.npc`.  Returns what it did.
    fn decide(&self, ctx: &mut AgentCtx<'_>) -> Activity;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// The strategy used when none is given explicitly.
#[cfg(not(feature = "fsm"))]
pub type DefaultStrategy = crate::TreeStrategy;

/// The strategy used when none is given explicitly.
#[cfg(feature = "fsm")]
pub type DefaultStrategy = crate::FsmStrategy;
