//! Damage calculation for one stack attacking another

use rand::Rng;

use crate::battle::constants::{
    ATTACK_BONUS_PER_POINT, DEFENSE_PENALTY_PER_POINT, MAX_DAMAGE_MODIFIER, MIN_DAMAGE_DEALT,
};
use crate::battle::unit::BattleUnit;

/// Attack-vs-defense damage modifier.
///
/// At or above parity: +5% per point of advantage, clamped at ×4.
/// Below parity the modifier decays as 1 / (1 + 0.025 × deficit), an
/// asymmetric curve that shrinks damage without ever zeroing it.
pub fn damage_modifier(attack: u32, defense: u32) -> f64 {
    let diff = f64::from(attack) - f64::from(defense);
    if diff >= 0.0 {
        (1.0 + diff * ATTACK_BONUS_PER_POINT).min(MAX_DAMAGE_MODIFIER)
    } else {
        1.0 / (1.0 + (-diff) * DEFENSE_PENALTY_PER_POINT)
    }
}

/// Damage one stack deals to another: quantity × roll in the creature's
/// damage range (inclusive bounds), scaled by the attack/defense
/// modifier, floored, and never below 1.
pub fn calculate_damage(attacker: &BattleUnit, target: &BattleUnit, rng: &mut impl Rng) -> u32 {
    let min = attacker.min_damage();
    let max = attacker.max_damage().max(min);
    let roll = rng.gen_range(min..=max);

    let base = f64::from(attacker.quantity) * f64::from(roll);
    let total = base * damage_modifier(attacker.attack(), target.defense());

    (total.floor() as u32).max(MIN_DAMAGE_DEALT)
}
