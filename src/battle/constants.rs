//! Battle tuning constants - all tunable values in one place

/// Damage bonus per point of attack above defense (+5%/point)
pub const ATTACK_BONUS_PER_POINT: f64 = 0.05;

/// Damage decay per point of defense above attack (2.5%/point,
/// applied as 1 / (1 + rate × deficit) so it never reaches zero)
pub const DEFENSE_PENALTY_PER_POINT: f64 = 0.025;

/// Upper clamp on the attack/defense damage modifier
pub const MAX_DAMAGE_MODIFIER: f64 = 4.0;

/// Floor on the damage a stack deals with any single attack
pub const MIN_DAMAGE_DEALT: u32 = 1;

/// Round cap for auto-resolution; a battle still undecided at the cap
/// is settled by which side has living stacks, attacker first
pub const MAX_ROUNDS: u32 = 100;
