//! Map objects storage and queries

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{ObjectId, TilePos};
use crate::creature::ArmyStack;

/// Relative tile offset within an object's footprint or entry set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileOffset {
    pub dx: i32,
    pub dy: i32,
}

impl TileOffset {
    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MapObjectKind {
    /// Wandering creature stacks guarding their tile
    Creature { guards: Vec<ArmyStack> },
    Mine,
    Town,
}

/// An object placed on the adventure map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapObject {
    pub id: ObjectId,
    pub kind: MapObjectKind,
    pub position: TilePos,
    /// Tiles the object occupies; blocked while the object is present
    pub footprint: Vec<TileOffset>,
    /// Tiles that trigger the object's interaction when stepped on
    pub entries: Vec<TileOffset>,
}

impl MapObject {
    /// Single-tile wandering creature with its entry one tile south
    pub fn creature(position: TilePos, guards: Vec<ArmyStack>) -> Self {
        Self {
            id: ObjectId::new(),
            kind: MapObjectKind::Creature { guards },
            position,
            footprint: vec![TileOffset::new(0, 0)],
            entries: vec![TileOffset::new(0, 1)],
        }
    }

    pub fn is_creature(&self) -> bool {
        matches!(self.kind, MapObjectKind::Creature { .. })
    }

    /// Guarding army, if this is a creature object
    pub fn guards(&self) -> Option<&[ArmyStack]> {
        match &self.kind {
            MapObjectKind::Creature { guards } => Some(guards),
            _ => None,
        }
    }
}

/// Storage for all objects on the map
#[derive(Debug, Clone, Default)]
pub struct WorldObjects {
    objects: AHashMap<ObjectId, MapObject>,
}

impl WorldObjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: MapObject) {
        self.objects.insert(object.id, object);
    }

    pub fn get(&self, id: ObjectId) -> Option<&MapObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut MapObject> {
        self.objects.get_mut(&id)
    }

    /// Remove an object; removing a missing id is a no-op returning None
    pub fn remove(&mut self, id: ObjectId) -> Option<MapObject> {
        self.objects.remove(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MapObject> {
        self.objects.values()
    }

    pub fn creatures(&self) -> impl Iterator<Item = &MapObject> {
        self.objects.values().filter(|object| object.is_creature())
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
