//! Army composition: creature stacks outside of battle

use serde::{Deserialize, Serialize};

use crate::creature::types::CreatureType;

/// A (creature type, quantity) roster entry.
///
/// Quantity 0 denotes an empty/removed stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmyStack {
    pub creature: CreatureType,
    pub quantity: u32,
}

impl ArmyStack {
    pub fn new(creature: CreatureType, quantity: u32) -> Self {
        Self { creature, quantity }
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}
