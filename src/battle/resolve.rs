//! Automatic battle resolution
//!
//! Drives the state machine to completion the way the quick-combat
//! option does: every stack strikes the first living enemy stack until
//! one side is gone or the round cap trips.

use rand::Rng;

use crate::battle::constants::MAX_ROUNDS;
use crate::battle::state::{BattleResult, BattleState};
use crate::battle::unit::Side;

/// Run the battle to a terminal result.
///
/// A battle still undecided after `MAX_ROUNDS` rounds is settled by
/// which side has living stacks, the attacker checked first.
pub fn resolve_battle(state: &mut BattleState, rng: &mut impl Rng) -> BattleResult {
    while state.result() == BattleResult::Pending && state.round() <= MAX_ROUNDS {
        let Some(attacker) = state.current_unit_index() else {
            break;
        };
        let targets = state.valid_targets(attacker);
        let Some(&target) = targets.first() else {
            break;
        };
        if state.execute_attack(attacker, target, rng).is_err() {
            break;
        }
    }

    if state.result() == BattleResult::Pending {
        let stalemate = state.check_result();
        if stalemate.is_terminal() {
            state.finish(stalemate);
        } else if state.side_has_living(Side::Attacker) {
            state.finish(BattleResult::AttackerWins);
        } else {
            state.finish(BattleResult::DefenderWins);
        }
    }

    state.result()
}
