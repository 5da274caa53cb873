use super::{is_eligible, EnteringArcRule};
use crate::ids::ArcId;
use crate::num::SimplexInt;

/// Scans every arc every iteration and returns the one with the most
/// negative/most positive reduced cost (the textbook "Dantzig rule").
/// Fewest iterations of any rule here, at O(arc_num) work per pivot.
#[derive(Debug, Default, Clone)]
pub struct BestEligible;

impl<T: SimplexInt> EnteringArcRule<T> for BestEligible {
    fn find_entering_arc(
        &mut self,
        arc_num: usize,
        reduced_cost_and_state: impl Fn(ArcId) -> Option<(T, super::ArcBoundState)>,
    ) -> Option<ArcId> {
        let mut best: Option<(ArcId, T)> = None;
        for i in 0..arc_num {
            let a = ArcId::new(i);
            let Some((rc, state)) = reduced_cost_and_state(a) else {
                continue;
            };
            if !is_eligible(rc, state) {
                continue;
            }
            let violation = match state {
                super::ArcBoundState::Lower => -rc,
                super::ArcBoundState::Upper => rc,
            };
            if best.map_or(true, |(_, best_violation)| violation > best_violation) {
                best = Some((a, violation));
            }
        }
        best.map(|(a, _)| a)
    }
}
