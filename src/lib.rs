//! Crownmarch - turn-based tactical battle resolver
//!
//! Simulates combat between two armies of creature stacks and folds the
//! terminal result back into persistent game state: hero rosters, player
//! elimination, map object removal. Rendering, sprite loading, terrain
//! generation, and hero pathfinding live outside this crate.

pub mod battle;
pub mod core;
pub mod creature;
pub mod game;
pub mod world;
