//! Post-battle outcome application
//!
//! Folds a terminal battle result back into persistent game state:
//! the hero's army, the player's hero roster, and the map's objects.
//! Every lookup here is tolerant - a missing hero or object degrades to
//! a no-op so the surrounding game loop can never be crashed by a
//! battle's aftermath.

use crate::battle::state::{BattleResult, BattleState};
use crate::battle::unit::BattleUnit;
use crate::core::{HeroId, ObjectId, TilePos};
use crate::game::player::Player;
use crate::world::map::GameMap;

/// Apply a battle outcome to the game state. Returns true when the
/// player has lost the game (no heroes remain after a defeat).
pub fn apply_outcome(
    result: BattleResult,
    battle: &BattleState,
    player: &mut Player,
    hero_id: HeroId,
    creature_object: ObjectId,
    map: &mut GameMap,
    hero_tile_before_battle: Option<TilePos>,
) -> bool {
    match result {
        BattleResult::AttackerWins => {
            handle_victory(battle, player, hero_id, creature_object, map);
            false
        }
        BattleResult::DefenderWins => handle_defeat(player, hero_id),
        BattleResult::Retreat => {
            handle_retreat(player, hero_id, hero_tile_before_battle);
            false
        }
        // Unreachable through the state machine, but must not crash
        BattleResult::Pending => false,
    }
}

/// Victory: the hero keeps only the surviving stacks and the creature
/// object vanishes from the map, releasing its tiles.
fn handle_victory(
    battle: &BattleState,
    player: &mut Player,
    hero_id: HeroId,
    creature_object: ObjectId,
    map: &mut GameMap,
) {
    if let Some(hero) = player.hero_mut(hero_id) {
        hero.army = battle
            .attacker_units()
            .filter(|unit| unit.is_alive())
            .map(BattleUnit::to_stack)
            .collect();
        tracing::info!(hero = %hero.name, stacks = hero.army.len(), "victory applied");
    }

    // Absent object means it was already cleaned up; skip silently
    map.remove_object(creature_object);
}

/// Defeat: the hero is gone; the player loses the game with it if it
/// was the last one.
fn handle_defeat(player: &mut Player, hero_id: HeroId) -> bool {
    if let Some(hero) = player.remove_hero(hero_id) {
        tracing::info!(hero = %hero.name, "hero lost");
    }
    player.is_defeated()
}

/// Retreat: the hero falls back to the pre-battle tile and stops
/// moving; the creature keeps blocking its ground.
fn handle_retreat(player: &mut Player, hero_id: HeroId, previous_tile: Option<TilePos>) {
    if let Some(hero) = player.hero_mut(hero_id) {
        if let Some(tile) = previous_tile {
            hero.position = tile;
        }
        hero.path.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::{ArmyStack, CreatureType};
    use crate::game::hero::Hero;
    use crate::world::objects::MapObject;
    use crate::world::tile::TerrainType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn strong_army() -> Vec<ArmyStack> {
        vec![ArmyStack::new(
            CreatureType::with_stats("Champion", 100, 20, 20, 50, 100, 10),
            100,
        )]
    }

    fn weak_guards() -> Vec<ArmyStack> {
        vec![ArmyStack::new(
            CreatureType::with_stats("Imp", 1, 1, 1, 1, 5, 1),
            1,
        )]
    }

    struct Fixture {
        player: Player,
        hero_id: HeroId,
        map: GameMap,
        creature_id: ObjectId,
    }

    fn fixture(hero_army: Vec<ArmyStack>) -> Fixture {
        let mut player = Player::new();
        let hero_id = player.add_hero(Hero::new("Adela", TilePos::new(2, 2), hero_army));

        let mut map = GameMap::new(10, 10, TerrainType::Grass);
        let creature_id = map.place_object(MapObject::creature(TilePos::new(5, 5), weak_guards()));

        Fixture {
            player,
            hero_id,
            map,
            creature_id,
        }
    }

    #[test]
    fn victory_rebuilds_army_and_clears_the_map() {
        let mut fx = fixture(strong_army());
        let hero_army = fx.player.hero(fx.hero_id).unwrap().army.clone();
        let guards = fx.map.objects.get(fx.creature_id).unwrap().guards().unwrap().to_vec();

        let mut battle = BattleState::new(&hero_army, &guards);
        let result =
            crate::battle::resolve_battle(&mut battle, &mut ChaCha8Rng::seed_from_u64(21));
        assert_eq!(result, BattleResult::AttackerWins);

        let game_over = apply_outcome(
            result,
            &battle,
            &mut fx.player,
            fx.hero_id,
            fx.creature_id,
            &mut fx.map,
            None,
        );

        assert!(!game_over);
        let hero = fx.player.hero(fx.hero_id).unwrap();
        assert!(hero.army.iter().all(|stack| stack.quantity > 0));
        assert!(!fx.map.objects.contains(fx.creature_id));
        assert!(fx.map.tile(TilePos::new(5, 5)).unwrap().walkable);
    }

    #[test]
    fn defeat_of_last_hero_is_game_over() {
        let mut fx = fixture(weak_guards());
        let battle = BattleState::new(&[], &weak_guards());

        let game_over = apply_outcome(
            BattleResult::DefenderWins,
            &battle,
            &mut fx.player,
            fx.hero_id,
            fx.creature_id,
            &mut fx.map,
            None,
        );

        assert!(game_over);
        assert!(fx.player.is_defeated());
        // Creature stays on the map after a defeat
        assert!(fx.map.objects.contains(fx.creature_id));
    }

    #[test]
    fn retreat_repositions_hero_and_leaves_creature() {
        let mut fx = fixture(strong_army());
        {
            let hero = fx.player.hero_mut(fx.hero_id).unwrap();
            hero.path = vec![TilePos::new(5, 6), TilePos::new(5, 5)];
        }
        let battle = BattleState::new(&strong_army(), &weak_guards());

        let game_over = apply_outcome(
            BattleResult::Retreat,
            &battle,
            &mut fx.player,
            fx.hero_id,
            fx.creature_id,
            &mut fx.map,
            Some(TilePos::new(2, 1)),
        );

        assert!(!game_over);
        let hero = fx.player.hero(fx.hero_id).unwrap();
        assert_eq!(hero.position, TilePos::new(2, 1));
        assert!(hero.path.is_empty());
        assert!(fx.map.objects.contains(fx.creature_id));
    }

    #[test]
    fn missing_object_and_hero_are_tolerated() {
        let mut fx = fixture(strong_army());
        let battle = BattleState::new(&strong_army(), &weak_guards());

        // Outcome against an object that was already removed
        fx.map.remove_object(fx.creature_id);
        let game_over = apply_outcome(
            BattleResult::AttackerWins,
            &battle,
            &mut fx.player,
            fx.hero_id,
            fx.creature_id,
            &mut fx.map,
            None,
        );
        assert!(!game_over);

        // Outcome for a hero id nobody owns
        let game_over = apply_outcome(
            BattleResult::Retreat,
            &battle,
            &mut fx.player,
            HeroId::new(),
            fx.creature_id,
            &mut fx.map,
            Some(TilePos::new(0, 0)),
        );
        assert!(!game_over);
    }

    #[test]
    fn pending_result_is_a_noop() {
        let mut fx = fixture(strong_army());
        let battle = BattleState::new(&strong_army(), &weak_guards());

        let game_over = apply_outcome(
            BattleResult::Pending,
            &battle,
            &mut fx.player,
            fx.hero_id,
            fx.creature_id,
            &mut fx.map,
            None,
        );

        assert!(!game_over);
        assert!(fx.map.objects.contains(fx.creature_id));
        assert_eq!(fx.player.heroes.len(), 1);
    }
}
