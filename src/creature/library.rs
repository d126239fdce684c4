//! Creature definition store
//!
//! Definitions are normally parsed from a JSON roster file; a handful of
//! built-in archetypes cover tests and the headless battle runner.

use std::fs;
use std::path::Path;

use ahash::AHashMap;

use crate::core::{GameError, Result};
use crate::creature::army::ArmyStack;
use crate::creature::attributes::{AttributeKind, CreatureAttributes};
use crate::creature::types::{CreatureLevel, CreatureType, Faction};

/// Id-keyed collection of creature archetypes
#[derive(Debug, Clone, Default)]
pub struct CreatureLibrary {
    creatures: AHashMap<String, CreatureType>,
}

impl CreatureLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Library preloaded with the built-in archetypes
    pub fn builtin() -> Self {
        let mut library = Self::new();
        library.insert(CreatureType::pikeman());
        library.insert(CreatureType::archer());
        library.insert(CreatureType::griffin());
        library.insert(CreatureType::wolf_rider());
        library.insert(CreatureType::red_dragon());
        library
    }

    /// Parse a JSON array of creature definitions
    pub fn from_json_str(json: &str) -> Result<Self> {
        let creatures: Vec<CreatureType> = serde_json::from_str(json)?;
        let mut library = Self::new();
        for creature in creatures {
            library.insert(creature);
        }
        Ok(library)
    }

    /// Load a JSON roster file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn insert(&mut self, creature: CreatureType) {
        self.creatures.insert(creature.id.clone(), creature);
    }

    pub fn get(&self, id: &str) -> Option<&CreatureType> {
        self.creatures.get(id)
    }

    /// Build a roster entry for `quantity` creatures of the given type
    pub fn stack(&self, id: &str, quantity: u32) -> Result<ArmyStack> {
        let creature = self
            .get(id)
            .ok_or_else(|| GameError::UnknownCreature(id.to_string()))?;
        Ok(ArmyStack::new(creature.clone(), quantity))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreatureType> {
        self.creatures.values()
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

impl CreatureType {
    /// Castle tier-1 melee liner
    pub fn pikeman() -> Self {
        Self {
            id: "pikeman".to_string(),
            name: "Pikeman".to_string(),
            faction: Faction::Castle,
            level: CreatureLevel::Level1,
            attributes: CreatureAttributes::standard(4, 5, 1, 3, 10, 4),
        }
    }

    /// Castle tier-2 shooter; carries a ranged attack only
    pub fn archer() -> Self {
        let mut attributes = CreatureAttributes::new();
        attributes.set(AttributeKind::AttackRanged, 6);
        attributes.set(AttributeKind::Defense, 3);
        attributes.set(AttributeKind::MinDamage, 2);
        attributes.set(AttributeKind::MaxDamage, 3);
        attributes.set(AttributeKind::Health, 10);
        attributes.set(AttributeKind::Speed, 4);
        Self {
            id: "archer".to_string(),
            name: "Archer".to_string(),
            faction: Faction::Castle,
            level: CreatureLevel::Level2,
            attributes,
        }
    }

    /// Castle tier-3 flyer
    pub fn griffin() -> Self {
        Self {
            id: "griffin".to_string(),
            name: "Griffin".to_string(),
            faction: Faction::Castle,
            level: CreatureLevel::Level3,
            attributes: CreatureAttributes::standard(8, 8, 3, 6, 25, 6),
        }
    }

    /// Stronghold tier-2 skirmisher
    pub fn wolf_rider() -> Self {
        Self {
            id: "wolf_rider".to_string(),
            name: "Wolf Rider".to_string(),
            faction: Faction::Stronghold,
            level: CreatureLevel::Level2,
            attributes: CreatureAttributes::standard(7, 5, 2, 4, 10, 7),
        }
    }

    /// Dungeon tier-7 monster
    pub fn red_dragon() -> Self {
        Self {
            id: "red_dragon".to_string(),
            name: "Red Dragon".to_string(),
            faction: Faction::Dungeon,
            level: CreatureLevel::Level7,
            attributes: CreatureAttributes::standard(19, 19, 40, 50, 180, 11),
        }
    }
}
