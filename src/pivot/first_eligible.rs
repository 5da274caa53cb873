use super::{is_eligible, EnteringArcRule};
use crate::ids::ArcId;
use crate::num::SimplexInt;

/// Scans arcs starting just after the last one returned, wrapping around,
/// and returns the first eligible arc found. Simplest possible rule and a
/// useful correctness baseline: it converges (every simplex pivot rule
/// that is admissible and doesn't stall on a fixed cycle order does), just
/// typically in more iterations than the scan-driven rules below.
#[derive(Debug, Default, Clone)]
pub struct FirstEligible {
    cursor: usize,
}

impl<T: SimplexInt> EnteringArcRule<T> for FirstEligible {
    fn find_entering_arc(
        &mut self,
        arc_num: usize,
        reduced_cost_and_state: impl Fn(ArcId) -> Option<(T, super::ArcBoundState)>,
    ) -> Option<ArcId> {
        if arc_num == 0 {
            return None;
        }
        for step in 0..arc_num {
            let a = ArcId::new((self.cursor + step) % arc_num);
            if let Some((rc, state)) = reduced_cost_and_state(a) {
                if is_eligible(rc, state) {
                    self.cursor = (a.index() + 1) % arc_num;
                    return Some(a);
                }
            }
        }
        None
    }

    fn reset(&mut self, _arc_num: usize) {
        self.cursor = 0;
    }
}
