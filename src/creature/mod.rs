//! Creature archetypes, attribute lookup, and army composition

pub mod army;
pub mod attributes;
pub mod library;
pub mod types;

pub use army::ArmyStack;
pub use attributes::{AttributeKind, CreatureAttributes};
pub use library::CreatureLibrary;
pub use types::{CreatureLevel, CreatureType, Faction};
