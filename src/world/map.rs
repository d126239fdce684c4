//! Adventure map: tile grid plus object storage

use crate::core::{ObjectId, TilePos};
use crate::world::objects::{MapObject, MapObjectKind, WorldObjects};
use crate::world::tile::{TerrainType, Tile, TileInteraction};

/// Rectangular tile grid with the objects placed on it
#[derive(Debug, Clone)]
pub struct GameMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    pub objects: WorldObjects,
}

impl GameMap {
    pub fn new(width: i32, height: i32, terrain: TerrainType) -> Self {
        let mut tiles = Vec::with_capacity((width * height).max(0) as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile::new(x, y, terrain));
            }
        }
        Self {
            width,
            height,
            tiles,
            objects: WorldObjects::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, pos: TilePos) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some((pos.y * self.width + pos.x) as usize)
    }

    pub fn tile(&self, pos: TilePos) -> Option<&Tile> {
        let i = self.index(pos)?;
        Some(&self.tiles[i])
    }

    pub fn tile_mut(&mut self, pos: TilePos) -> Option<&mut Tile> {
        let i = self.index(pos)?;
        Some(&mut self.tiles[i])
    }

    /// Place an object: its footprint tiles become unwalkable and its
    /// entry tiles get the matching interaction. Off-map tiles in the
    /// footprint are skipped.
    pub fn place_object(&mut self, object: MapObject) -> ObjectId {
        let id = object.id;
        let interaction = match object.kind {
            MapObjectKind::Creature { .. } => Some(TileInteraction::Battle(id)),
            MapObjectKind::Mine => Some(TileInteraction::Capture(id)),
            MapObjectKind::Town => None,
        };

        for foot in &object.footprint {
            if let Some(tile) = self.tile_mut(object.position.offset(foot.dx, foot.dy)) {
                tile.walkable = false;
            }
        }
        if let Some(interaction) = interaction {
            for entry in &object.entries {
                if let Some(tile) = self.tile_mut(object.position.offset(entry.dx, entry.dy)) {
                    tile.interaction = Some(interaction);
                }
            }
        }

        self.objects.add(object);
        id
    }

    /// Remove an object and release its tiles: interactions are cleared
    /// from entry tiles and walkability restored on the footprint.
    /// Removing a missing id is a no-op.
    pub fn remove_object(&mut self, id: ObjectId) -> Option<MapObject> {
        let object = self.objects.remove(id)?;

        for entry in &object.entries {
            if let Some(tile) = self.tile_mut(object.position.offset(entry.dx, entry.dy)) {
                tile.interaction = None;
                tile.walkable = true;
            }
        }
        for foot in &object.footprint {
            if let Some(tile) = self.tile_mut(object.position.offset(foot.dx, foot.dy)) {
                tile.walkable = true;
            }
        }

        Some(object)
    }
}
