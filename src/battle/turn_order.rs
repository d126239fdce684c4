//! Initiative ordering

use crate::battle::unit::BattleUnit;

/// Compute the initiative queue: indices into `units` sorted by speed
/// in descending order.
///
/// The sort is stable, so units with equal speed keep their input
/// order. Dead units are not filtered here; callers exclude them when
/// building the next round's queue. A missing speed attribute reads
/// as 0.
pub fn calculate_turn_order(units: &[BattleUnit]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..units.len()).collect();
    order.sort_by(|&a, &b| units[b].speed().cmp(&units[a].speed()));
    order
}
