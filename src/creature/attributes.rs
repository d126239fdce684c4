//! Creature attribute lookup with silent defaults
//!
//! A malformed or partially specified creature never crashes the
//! simulation: missing attributes resolve to baseline values (0 for
//! attack/defense/speed, 1 for damage bounds and health).

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Semantic attribute kinds carried by a creature archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeKind {
    AttackMelee,
    AttackRanged,
    Defense,
    MinDamage,
    MaxDamage,
    Health,
    Speed,
}

/// Attribute set of a creature archetype, keyed by semantic kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureAttributes {
    values: AHashMap<AttributeKind, u32>,
}

impl CreatureAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard melee stat block in the usual roster order
    pub fn standard(
        attack: u32,
        defense: u32,
        min_damage: u32,
        max_damage: u32,
        health: u32,
        speed: u32,
    ) -> Self {
        let mut attrs = Self::new();
        attrs.set(AttributeKind::AttackMelee, attack);
        attrs.set(AttributeKind::Defense, defense);
        attrs.set(AttributeKind::MinDamage, min_damage);
        attrs.set(AttributeKind::MaxDamage, max_damage);
        attrs.set(AttributeKind::Health, health);
        attrs.set(AttributeKind::Speed, speed);
        attrs
    }

    pub fn set(&mut self, kind: AttributeKind, value: u32) {
        self.values.insert(kind, value);
    }

    pub fn get(&self, kind: AttributeKind) -> Option<u32> {
        self.values.get(&kind).copied()
    }

    pub fn has(&self, kind: AttributeKind) -> bool {
        self.values.contains_key(&kind)
    }

    /// Attack value: melee preferred, ranged as fallback, baseline 0
    pub fn attack(&self) -> u32 {
        self.get(AttributeKind::AttackMelee)
            .or_else(|| self.get(AttributeKind::AttackRanged))
            .unwrap_or(0)
    }

    pub fn defense(&self) -> u32 {
        self.get(AttributeKind::Defense).unwrap_or(0)
    }

    pub fn speed(&self) -> u32 {
        self.get(AttributeKind::Speed).unwrap_or(0)
    }

    pub fn min_damage(&self) -> u32 {
        self.get(AttributeKind::MinDamage).unwrap_or(1)
    }

    pub fn max_damage(&self) -> u32 {
        self.get(AttributeKind::MaxDamage).unwrap_or(1)
    }

    /// Health per individual creature; a stack's HP pool is quantity × health
    pub fn health(&self) -> u32 {
        self.get(AttributeKind::Health).unwrap_or(1)
    }
}
