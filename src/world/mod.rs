//! Adventure map world: tiles, objects, and their bookkeeping

pub mod map;
pub mod objects;
pub mod tile;

pub use map::GameMap;
pub use objects::{MapObject, MapObjectKind, TileOffset, WorldObjects};
pub use tile::{TerrainType, Tile, TileInteraction};
