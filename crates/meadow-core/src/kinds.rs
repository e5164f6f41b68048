//! Closed entity variants: NPC kinds, food kinds, and FSM state tags.

/// What an NPC is.  Fixed at spawn.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NpcKind {
    /// Eats food, flees predators.
    Consumer,
    /// Hunts consumers and the hero; never eats food or other predators.
    Predator,
}

impl NpcKind {
    /// `true` if an NPC of kind `self` may eat an NPC of kind `other`.
    #[inline]
    pub fn preys_on(self, other: NpcKind) -> bool {
        matches!((self, other), (NpcKind::Predator, NpcKind::Consumer))
    }

    /// The FSM state a freshly spawned NPC of this kind starts in.
    #[inline]
    pub fn initial_state(self) -> NpcState {
        match self {
            NpcKind::Consumer => NpcState::Consumer(ConsumerState::Idle),
            NpcKind::Predator => NpcState::Predator(PredatorState::Idle),
        }
    }
}

/// What eating a food item restores, and by how much.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FoodKind {
    HealthRestore(i32),
    StaminaRestore(i32),
}

impl FoodKind {
    #[inline]
    pub fn amount(self) -> i32 {
        match self {
            FoodKind::HealthRestore(n) | FoodKind::StaminaRestore(n) => n,
        }
    }
}

// ── FSM states ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConsumerState {
    #[default]
    Idle,
    SeekingFood,
    Fleeing,
    SeekingMate,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PredatorState {
    #[default]
    Idle,
    Hunting,
    SeekingMate,
}

/// Discrete behavior state of one NPC, scoped to its kind.
///
/// Only the FSM strategy reads or writes this; the tree strategy leaves
/// it at its spawn value.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NpcState {
    Consumer(ConsumerState),
    Predator(PredatorState),
}
