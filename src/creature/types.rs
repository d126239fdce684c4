//! Creature archetype definitions
//!
//! A `CreatureType` is created once at data-load time and referenced,
//! never mutated, by battle units.

use serde::{Deserialize, Serialize};

use crate::creature::attributes::CreatureAttributes;

/// Town faction a creature belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Castle,
    Rampart,
    Tower,
    Necropolis,
    Dungeon,
    Stronghold,
    Neutral,
}

/// Dwelling tier, from peasant fodder to the top-tier monsters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreatureLevel {
    Level1,
    Level2,
    Level3,
    Level4,
    Level5,
    Level6,
    Level7,
}

/// Immutable definition of a creature archetype
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureType {
    pub id: String,
    pub name: String,
    pub faction: Faction,
    pub level: CreatureLevel,
    pub attributes: CreatureAttributes,
}

impl CreatureType {
    /// Neutral melee creature from a bare stat block; the workhorse
    /// constructor for tests and quick fixtures.
    pub fn with_stats(
        name: &str,
        attack: u32,
        defense: u32,
        min_damage: u32,
        max_damage: u32,
        health: u32,
        speed: u32,
    ) -> Self {
        Self {
            id: name.to_lowercase().replace(' ', "_"),
            name: name.to_string(),
            faction: Faction::Neutral,
            level: CreatureLevel::Level1,
            attributes: CreatureAttributes::standard(
                attack, defense, min_damage, max_damage, health, speed,
            ),
        }
    }
}
