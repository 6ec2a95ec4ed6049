//! Admissible lower bound on the remaining move count.

use crate::state::State;

/// Lower bound on the moves needed to bring every item to the top floor.
///
/// Every item on floor `f` still has to travel `top - f` floors upward, and
/// one trip moves at most two items one floor in the favorable direction.
/// Summing the per-item distances and halving (rounding up) therefore never
/// overestimates the true remaining move count. The bound changes by at
/// most one across any single move (the triangle inequality for consistency)
/// and is zero exactly when every item rests on the top floor.
#[must_use]
pub fn estimate(state: &State) -> u32 {
    let top = state.top_floor();
    let mut deficit: u32 = 0;
    for floor in 0..top {
        let distance = u32::try_from(top - floor).unwrap_or(u32::MAX);
        deficit = deficit.saturating_add(state.items_on(floor).saturating_mul(distance));
    }
    deficit.div_ceil(2)
}
