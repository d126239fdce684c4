//! Battle engine - stack-vs-stack army combat
//!
//! Whole-army exchanges with no battlefield geometry: each round the
//! living stacks act in speed order, strike an enemy stack, and the
//! pooled-HP casualty model removes creatures from the target.

pub mod casualties;
pub mod constants;
pub mod damage;
pub mod resolve;
pub mod state;
pub mod turn_order;
pub mod unit;

pub use casualties::apply_damage;
pub use constants::*;
pub use damage::{calculate_damage, damage_modifier};
pub use resolve::resolve_battle;
pub use state::{BattleAction, BattleResult, BattleState};
pub use turn_order::calculate_turn_order;
pub use unit::{BattleUnit, Side};
