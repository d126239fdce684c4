//! Persistent game state touched by battle outcomes

pub mod hero;
pub mod outcome;
pub mod player;

pub use hero::Hero;
pub use outcome::apply_outcome;
pub use player::{Player, Resources};
