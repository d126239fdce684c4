//! Casualty application against a stack's pooled health

use crate::battle::unit::BattleUnit;

/// Apply `damage` to a stack, mutating it in place, and return the
/// number of creatures killed.
///
/// Damage drains the top creature's remaining HP first; overflow kills
/// whole creatures at `max_hp` each, and the final remainder becomes
/// the new top creature's partial HP. The kill count is capped at the
/// pre-attack quantity. A stack reduced to 0 is marked dead with 0 HP;
/// an already-dead stack absorbs nothing.
pub fn apply_damage(target: &mut BattleUnit, damage: u32) -> u32 {
    if target.is_dead {
        return 0;
    }

    if damage < target.current_hp {
        target.current_hp -= damage;
        return 0;
    }

    let max_hp = target.max_hp.max(1);
    let remainder = damage - target.current_hp;
    let kills = (1 + remainder / max_hp).min(target.quantity);
    let leftover = remainder % max_hp;

    target.quantity -= kills;
    if target.quantity == 0 {
        target.is_dead = true;
        target.current_hp = 0;
    } else {
        target.current_hp = max_hp - leftover;
    }

    kills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::unit::Side;
    use crate::creature::{ArmyStack, CreatureType};

    fn stack_of(quantity: u32, health: u32) -> BattleUnit {
        let stack = ArmyStack::new(
            CreatureType::with_stats("Swordsman", 6, 6, 2, 4, health, 5),
            quantity,
        );
        BattleUnit::from_stack(&stack, Side::Defender)
    }

    #[test]
    fn partial_damage_only_dents_the_top_creature() {
        let mut unit = stack_of(5, 10);
        assert_eq!(apply_damage(&mut unit, 7), 0);
        assert_eq!(unit.quantity, 5);
        assert_eq!(unit.current_hp, 3);
        assert!(unit.is_alive());
    }

    #[test]
    fn exact_kill_leaves_next_creature_at_full_health() {
        let mut unit = stack_of(5, 10);
        assert_eq!(apply_damage(&mut unit, 10), 1);
        assert_eq!(unit.quantity, 4);
        assert_eq!(unit.current_hp, 10);
    }

    #[test]
    fn overflow_carries_into_following_creatures() {
        // 25 damage into 5×10hp: two full kills, 5 into the third
        let mut unit = stack_of(5, 10);
        assert_eq!(apply_damage(&mut unit, 25), 2);
        assert_eq!(unit.quantity, 3);
        assert_eq!(unit.current_hp, 5);
    }

    #[test]
    fn overkill_caps_kills_at_stack_quantity() {
        let mut unit = stack_of(2, 10);
        assert_eq!(apply_damage(&mut unit, 100), 2);
        assert_eq!(unit.quantity, 0);
        assert_eq!(unit.current_hp, 0);
        assert!(unit.is_dead);
    }

    #[test]
    fn dead_stack_absorbs_nothing() {
        let mut unit = stack_of(1, 10);
        apply_damage(&mut unit, 50);
        assert!(unit.is_dead);
        assert_eq!(apply_damage(&mut unit, 50), 0);
        assert_eq!(unit.quantity, 0);
    }

    #[test]
    fn damage_after_partial_hit_continues_from_dented_top() {
        let mut unit = stack_of(3, 10);
        apply_damage(&mut unit, 4); // top at 6
        assert_eq!(apply_damage(&mut unit, 16), 2); // 6 + 10
        assert_eq!(unit.quantity, 1);
        assert_eq!(unit.current_hp, 10);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_increases_quantity_or_hp(
                quantity in 0u32..200,
                health in 1u32..500,
                damage in 0u32..100_000,
            ) {
                let mut unit = stack_of(quantity, health);
                let before_quantity = unit.quantity;
                let before_hp = unit.current_hp;

                let kills = apply_damage(&mut unit, damage);

                prop_assert!(unit.quantity <= before_quantity);
                prop_assert!(unit.current_hp <= unit.max_hp);
                prop_assert!(kills <= before_quantity);
                prop_assert_eq!(before_quantity - unit.quantity, kills);
                if kills == 0 {
                    prop_assert!(unit.current_hp <= before_hp);
                }
            }

            #[test]
            fn liveness_invariant_holds_after_any_damage(
                quantity in 0u32..200,
                health in 1u32..500,
                damage in 0u32..100_000,
            ) {
                let mut unit = stack_of(quantity, health);
                apply_damage(&mut unit, damage);

                prop_assert_eq!(unit.is_dead, unit.quantity == 0);
                prop_assert_eq!(unit.is_dead, unit.current_hp == 0);
                if unit.is_alive() {
                    prop_assert!(unit.current_hp >= 1);
                    prop_assert!(unit.current_hp <= unit.max_hp);
                }
            }
        }
    }
}
