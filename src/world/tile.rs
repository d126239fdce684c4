//! Adventure map tiles and interactions

use serde::{Deserialize, Serialize};

use crate::core::ObjectId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainType {
    Grass,
    Dirt,
    Sand,
    Snow,
    Swamp,
    Water,
}

/// What stepping onto a tile triggers.
///
/// Tagged-variant dispatch: the game loop matches on the kind instead
/// of probing a registry of handler objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileInteraction {
    /// Entering starts a battle against the guarding creature object
    Battle(ObjectId),
    /// Entering captures the object (mines and the like)
    Capture(ObjectId),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub terrain: TerrainType,
    pub walkable: bool,
    pub interaction: Option<TileInteraction>,
}

impl Tile {
    pub fn new(x: i32, y: i32, terrain: TerrainType) -> Self {
        Self {
            x,
            y,
            terrain,
            walkable: terrain != TerrainType::Water,
            interaction: None,
        }
    }
}
