//! Heroes on the adventure map

use serde::{Deserialize, Serialize};

use crate::core::{HeroId, TilePos};
use crate::creature::ArmyStack;

pub const BASE_MOVEMENT_POINTS: u32 = 1500;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub level: u32,
    pub movement_points: u32,
    pub max_movement_points: u32,
    pub position: TilePos,
    /// Remaining movement path, next step first
    pub path: Vec<TilePos>,
    pub army: Vec<ArmyStack>,
}

impl Hero {
    pub fn new(name: &str, position: TilePos, army: Vec<ArmyStack>) -> Self {
        Self {
            id: HeroId::new(),
            name: name.to_string(),
            level: 1,
            movement_points: BASE_MOVEMENT_POINTS,
            max_movement_points: BASE_MOVEMENT_POINTS,
            position,
            path: Vec::new(),
            army,
        }
    }

    /// Total creatures across all stacks
    pub fn army_size(&self) -> u32 {
        self.army.iter().map(|stack| stack.quantity).sum()
    }

    pub fn has_army(&self) -> bool {
        self.army.iter().any(|stack| !stack.is_empty())
    }
}
