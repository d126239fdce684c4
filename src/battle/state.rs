//! Battle state machine
//!
//! Owns the mutable battle state: both armies' units, the initiative
//! queue, the round counter, the running log, and the terminal result.
//! `execute_attack` is the sole mutator while the battle is live.

use rand::Rng;

use crate::battle::casualties::apply_damage;
use crate::battle::damage::calculate_damage;
use crate::battle::turn_order::calculate_turn_order;
use crate::battle::unit::{BattleUnit, Side};
use crate::core::{GameError, Result};
use crate::creature::ArmyStack;

/// Disposition of a battle. `Pending` is the only non-terminal state;
/// every transition out of it is one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BattleResult {
    #[default]
    Pending,
    AttackerWins,
    DefenderWins,
    Retreat,
}

impl BattleResult {
    pub fn is_terminal(self) -> bool {
        self != BattleResult::Pending
    }
}

/// Record of one executed attack, in unit indices
#[derive(Debug, Clone, Copy)]
pub struct BattleAction {
    pub attacker: usize,
    pub target: usize,
    pub damage: u32,
    pub kills: u32,
}

/// Complete state of one battle, transient from start to outcome
#[derive(Debug, Clone)]
pub struct BattleState {
    units: Vec<BattleUnit>,
    /// Indices into `units`; rebuilt as a fresh sequence each round
    turn_order: Vec<usize>,
    current_turn: usize,
    round: u32,
    result: BattleResult,
    log: Vec<String>,
}

impl BattleState {
    /// Start a battle between two army compositions. One unit is built
    /// per roster entry (quantity-0 entries are created dead); the
    /// inputs are not mutated.
    pub fn new(attacker_army: &[ArmyStack], defender_army: &[ArmyStack]) -> Self {
        let mut units = Vec::with_capacity(attacker_army.len() + defender_army.len());
        units.extend(
            attacker_army
                .iter()
                .map(|stack| BattleUnit::from_stack(stack, Side::Attacker)),
        );
        units.extend(
            defender_army
                .iter()
                .map(|stack| BattleUnit::from_stack(stack, Side::Defender)),
        );

        let turn_order = calculate_turn_order(&units);
        tracing::info!(
            attacker_stacks = attacker_army.len(),
            defender_stacks = defender_army.len(),
            "battle started"
        );

        Self {
            units,
            turn_order,
            current_turn: 0,
            round: 1,
            result: BattleResult::Pending,
            log: vec!["Battle begins!".to_string()],
        }
    }

    pub fn units(&self) -> &[BattleUnit] {
        &self.units
    }

    pub fn unit(&self, index: usize) -> Option<&BattleUnit> {
        self.units.get(index)
    }

    pub fn attacker_units(&self) -> impl Iterator<Item = &BattleUnit> {
        self.side_units(Side::Attacker)
    }

    pub fn defender_units(&self) -> impl Iterator<Item = &BattleUnit> {
        self.side_units(Side::Defender)
    }

    pub fn side_units(&self, side: Side) -> impl Iterator<Item = &BattleUnit> {
        self.units.iter().filter(move |unit| unit.side == side)
    }

    pub fn turn_order(&self) -> &[usize] {
        &self.turn_order
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn result(&self) -> BattleResult {
        self.result
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn side_has_living(&self, side: Side) -> bool {
        self.side_units(side).any(BattleUnit::is_alive)
    }

    /// Unit whose turn it is: the entry at `current_turn` modulo the
    /// living-unit count, among living units in turn order. `None` once
    /// the battle is terminal or no living unit remains.
    pub fn current_unit_index(&self) -> Option<usize> {
        if self.result.is_terminal() {
            return None;
        }
        let alive = self.alive_in_turn_order();
        if alive.is_empty() {
            return None;
        }
        Some(alive[self.current_turn % alive.len()])
    }

    pub fn current_unit(&self) -> Option<&BattleUnit> {
        self.current_unit_index().map(|index| &self.units[index])
    }

    /// Living units on the opposing side of `index`
    pub fn valid_targets(&self, index: usize) -> Vec<usize> {
        let Some(unit) = self.units.get(index) else {
            return Vec::new();
        };
        let enemy = unit.side.opponent();
        self.units
            .iter()
            .enumerate()
            .filter(|(_, candidate)| candidate.side == enemy && candidate.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    /// Execute one attack: roll damage, apply casualties, log the
    /// exchange, advance the turn, and re-evaluate the result. Rejected
    /// once the battle is terminal.
    pub fn execute_attack(
        &mut self,
        attacker: usize,
        target: usize,
        rng: &mut impl Rng,
    ) -> Result<BattleAction> {
        if self.result.is_terminal() {
            return Err(GameError::BattleFinished);
        }
        if attacker >= self.units.len() {
            return Err(GameError::UnitNotFound(attacker));
        }
        if target >= self.units.len() {
            return Err(GameError::UnitNotFound(target));
        }

        let damage = calculate_damage(&self.units[attacker], &self.units[target], rng);
        let kills = apply_damage(&mut self.units[target], damage);

        let action = BattleAction {
            attacker,
            target,
            damage,
            kills,
        };
        self.log.push(format!(
            "{} {} deal {} damage to {}, killing {}",
            self.units[attacker].quantity,
            self.units[attacker].name(),
            damage,
            self.units[target].name(),
            kills,
        ));
        tracing::debug!(
            attacker = self.units[attacker].name(),
            target = self.units[target].name(),
            damage,
            kills,
            "attack executed"
        );

        let result = self.check_result();
        if result.is_terminal() {
            self.finish(result);
        } else {
            self.advance_turn();
        }

        Ok(action)
    }

    /// Evaluate the terminal condition. A simultaneous wipe-out of both
    /// sides resolves as a defender win: the attacker side is checked
    /// first.
    pub fn check_result(&self) -> BattleResult {
        if !self.side_has_living(Side::Attacker) {
            BattleResult::DefenderWins
        } else if !self.side_has_living(Side::Defender) {
            BattleResult::AttackerWins
        } else {
            BattleResult::Pending
        }
    }

    /// Externally triggered retreat; only permitted while pending.
    pub fn retreat(&mut self) -> Result<()> {
        if self.result.is_terminal() {
            return Err(GameError::BattleFinished);
        }
        self.finish(BattleResult::Retreat);
        Ok(())
    }

    /// Advance to the next turn; wrapping past the last living unit
    /// starts a new round and rebuilds the initiative queue from the
    /// units still alive.
    fn advance_turn(&mut self) {
        self.current_turn += 1;
        let alive = self.units.iter().filter(|unit| unit.is_alive()).count();
        if self.current_turn >= alive {
            self.current_turn = 0;
            self.round += 1;
            self.turn_order = calculate_turn_order(&self.units)
                .into_iter()
                .filter(|&index| self.units[index].is_alive())
                .collect();
            self.log.push(format!("--- Round {} ---", self.round));
        }
    }

    /// One-way transition out of `Pending`
    pub(crate) fn finish(&mut self, result: BattleResult) {
        debug_assert!(!self.result.is_terminal());
        self.result = result;
        let message = match result {
            BattleResult::AttackerWins => "Attacker wins!",
            BattleResult::DefenderWins => "Defender wins!",
            BattleResult::Retreat => "The attacking hero retreats!",
            BattleResult::Pending => return,
        };
        self.log.push(message.to_string());
        tracing::info!(?result, round = self.round, "battle finished");
    }

    fn alive_in_turn_order(&self) -> Vec<usize> {
        self.turn_order
            .iter()
            .copied()
            .filter(|&index| self.units[index].is_alive())
            .collect()
    }
}
