//! Players and their hero rosters

use serde::{Deserialize, Serialize};

use crate::core::{HeroId, PlayerId};
use crate::game::hero::Hero;

/// Stockpile of the map resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub gold: u32,
    pub wood: u32,
    pub stone: u32,
    pub ore: u32,
    pub mercury: u32,
    pub sulfur: u32,
    pub crystal: u32,
    pub gems: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub heroes: Vec<Hero>,
    /// Currently selected hero; always one of `heroes` when set
    pub selected_hero: Option<HeroId>,
    pub resources: Resources,
}

impl Player {
    pub fn new() -> Self {
        Self {
            id: PlayerId::new(),
            heroes: Vec::new(),
            selected_hero: None,
            resources: Resources::default(),
        }
    }

    /// Add a hero; the first hero becomes the selection
    pub fn add_hero(&mut self, hero: Hero) -> HeroId {
        let id = hero.id;
        if self.selected_hero.is_none() {
            self.selected_hero = Some(id);
        }
        self.heroes.push(hero);
        id
    }

    pub fn hero(&self, id: HeroId) -> Option<&Hero> {
        self.heroes.iter().find(|hero| hero.id == id)
    }

    pub fn hero_mut(&mut self, id: HeroId) -> Option<&mut Hero> {
        self.heroes.iter_mut().find(|hero| hero.id == id)
    }

    pub fn selected_hero(&self) -> Option<&Hero> {
        self.selected_hero.and_then(|id| self.hero(id))
    }

    /// Remove a hero; if it was selected, the first remaining hero (if
    /// any) becomes the selection. Removing an unknown id is a no-op.
    pub fn remove_hero(&mut self, id: HeroId) -> Option<Hero> {
        let index = self.heroes.iter().position(|hero| hero.id == id)?;
        let removed = self.heroes.remove(index);
        if self.selected_hero == Some(id) {
            self.selected_hero = self.heroes.first().map(|hero| hero.id);
        }
        Some(removed)
    }

    /// A player with no heroes left has lost the game
    pub fn is_defeated(&self) -> bool {
        self.heroes.is_empty()
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TilePos;

    fn hero(name: &str) -> Hero {
        Hero::new(name, TilePos::new(0, 0), Vec::new())
    }

    #[test]
    fn first_hero_is_selected() {
        let mut player = Player::new();
        let first = player.add_hero(hero("Adela"));
        player.add_hero(hero("Orrin"));

        assert_eq!(player.selected_hero, Some(first));
        assert_eq!(player.selected_hero().unwrap().name, "Adela");
    }

    #[test]
    fn removing_selected_hero_reselects_first_remaining() {
        let mut player = Player::new();
        let first = player.add_hero(hero("Adela"));
        let second = player.add_hero(hero("Orrin"));

        player.remove_hero(first);
        assert_eq!(player.selected_hero, Some(second));
        assert!(!player.is_defeated());
    }

    #[test]
    fn removing_last_hero_defeats_the_player() {
        let mut player = Player::new();
        let only = player.add_hero(hero("Adela"));

        player.remove_hero(only);
        assert_eq!(player.selected_hero, None);
        assert!(player.is_defeated());
    }

    #[test]
    fn removing_unselected_hero_keeps_selection() {
        let mut player = Player::new();
        let first = player.add_hero(hero("Adela"));
        let second = player.add_hero(hero("Orrin"));

        player.remove_hero(second);
        assert_eq!(player.selected_hero, Some(first));
    }

    #[test]
    fn removing_unknown_hero_is_a_noop() {
        let mut player = Player::new();
        player.add_hero(hero("Adela"));
        assert!(player.remove_hero(HeroId::new()).is_none());
        assert_eq!(player.heroes.len(), 1);
    }
}
