//! In-battle representation of a creature stack

use serde::{Deserialize, Serialize};

use crate::creature::{ArmyStack, CreatureType};

/// Which army a unit fights for; fixed for the duration of one battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

/// One creature stack in battle.
///
/// Health is pooled: only the top creature has variable HP, every other
/// creature in the stack is at full health until it becomes the top.
///
/// Invariant: `is_dead ⇔ quantity == 0 ⇔ current_hp == 0`; while alive
/// `1 ≤ current_hp ≤ max_hp`.
#[derive(Debug, Clone)]
pub struct BattleUnit {
    pub creature: CreatureType,
    pub quantity: u32,
    /// Remaining HP of the top creature in the stack
    pub current_hp: u32,
    /// HP per individual, derived from the health attribute
    pub max_hp: u32,
    pub side: Side,
    pub is_dead: bool,
}

impl BattleUnit {
    /// Build a battle unit from a roster entry. A quantity-0 entry is
    /// created dead.
    pub fn from_stack(stack: &ArmyStack, side: Side) -> Self {
        let max_hp = stack.creature.attributes.health();
        let dead = stack.quantity == 0;
        Self {
            creature: stack.creature.clone(),
            quantity: stack.quantity,
            current_hp: if dead { 0 } else { max_hp },
            max_hp,
            side,
            is_dead: dead,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.is_dead
    }

    pub fn name(&self) -> &str {
        &self.creature.name
    }

    pub fn attack(&self) -> u32 {
        self.creature.attributes.attack()
    }

    pub fn defense(&self) -> u32 {
        self.creature.attributes.defense()
    }

    pub fn speed(&self) -> u32 {
        self.creature.attributes.speed()
    }

    pub fn min_damage(&self) -> u32 {
        self.creature.attributes.min_damage()
    }

    pub fn max_damage(&self) -> u32 {
        self.creature.attributes.max_damage()
    }

    /// Surviving roster entry for post-battle army rebuilding
    pub fn to_stack(&self) -> ArmyStack {
        ArmyStack::new(self.creature.clone(), self.quantity)
    }
}
