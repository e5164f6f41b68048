//! The fixed per-frame system order.

use std::fmt;

/// One stage of the frame pipeline.  The removal barrier is not a system;
/// the scheduler runs it after all of these.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum SystemId {
    HeroMovement,
    NpcDispatch,
    Feeding,
    Predation,
    Reproduction,
    Starvation,
    Tiredness,
    FoodGeneration,
}

/// Systems in the order the sequential strategies run them.
pub const PIPELINE: [SystemId; 8] = [
    SystemId::HeroMovement,
    SystemId::NpcDispatch,
    SystemId::Feeding,
    SystemId::Predation,
    SystemId::Reproduction,
    SystemId::Starvation,
    SystemId::Tiredness,
    SystemId::FoodGeneration,
];

impl SystemId {
    pub fn name(self) -> &'static str {
        match self {
            SystemId::HeroMovement   => "hero_movement",
            SystemId::NpcDispatch    => "npc_dispatch",
            SystemId::Feeding        => "feeding",
            SystemId::Predation      => "predation",
            SystemId::Reproduction   => "reproduction",
            SystemId::Starvation     => "starvation",
            SystemId::Tiredness      => "tiredness",
            SystemId::FoodGeneration => "food_generation",
        }
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
