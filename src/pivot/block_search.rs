use super::{is_eligible, EnteringArcRule};
use crate::ids::ArcId;
use crate::num::SimplexInt;

/// Default block size when the arc count doesn't suggest a better one —
/// chosen, as in the wider simplex literature this rule is drawn from, as
/// a constant multiple of `sqrt(arc_num)` rounded to a round number. A free
/// tunable, not a spec-mandated constant.
const MIN_BLOCK_SIZE: usize = 16;

/// Scans the arc set one fixed-size block at a time, starting after the
/// previous block, and returns the *best* eligible arc within the first
/// block that has one — i.e. best-eligible within a bounded window rather
/// than across the whole arc set. The default rule (spec.md §6): in
/// practice the strongest fixed balance between per-pivot scan cost and
/// pivot count, and what LEMON itself defaults to.
#[derive(Debug, Clone)]
pub struct BlockSearch {
    cursor: usize,
    block_size: usize,
}

impl Default for BlockSearch {
    fn default() -> Self {
        BlockSearch {
            cursor: 0,
            block_size: MIN_BLOCK_SIZE,
        }
    }
}

impl BlockSearch {
    /// Overrides the block size (the default is picked in [`Self::reset`]
    /// from the instance's arc count once it's known).
    pub fn with_block_size(block_size: usize) -> Self {
        BlockSearch {
            cursor: 0,
            block_size: block_size.max(1),
        }
    }
}

impl<T: SimplexInt> EnteringArcRule<T> for BlockSearch {
    fn find_entering_arc(
        &mut self,
        arc_num: usize,
        reduced_cost_and_state: impl Fn(ArcId) -> Option<(T, super::ArcBoundState)>,
    ) -> Option<ArcId> {
        if arc_num == 0 {
            return None;
        }
        let blocks = (arc_num + self.block_size - 1) / self.block_size;
        for block in 0..blocks {
            let mut best: Option<(ArcId, T)> = None;
            for step in 0..self.block_size {
                let idx = (self.cursor + block * self.block_size + step) % arc_num;
                let a = ArcId::new(idx);
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
                if best.map_or(true, |(_, bv)| violation > bv) {
                    best = Some((a, violation));
                }
            }
            if let Some((a, _)) = best {
                self.cursor = (a.index() + 1) % arc_num;
                return Some(a);
            }
        }
        None
    }

    fn reset(&mut self, arc_num: usize) {
        self.cursor = 0;
        // sqrt(arc_num), floored at MIN_BLOCK_SIZE, matching the informal
        // tuning note in spec.md §6.
        let sqrt = (arc_num as f64).sqrt() as usize;
        self.block_size = sqrt.max(MIN_BLOCK_SIZE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pivot::ArcBoundState;

    #[test]
    fn finds_best_within_first_nonempty_block() {
        let mut rule = BlockSearch::with_block_size(4);
        // Block 0 = arcs 0..4, has two eligible arcs; block 1 has a more
        // negative one, but should never be reached.
        let table = |a: ArcId| -> Option<(i32, ArcBoundState)> {
            match a.index() {
                0 => Some((-2, ArcBoundState::Lower)),
                1 => Some((-5, ArcBoundState::Lower)),
                5 => Some((-100, ArcBoundState::Lower)),
                _ => None,
            }
        };
        let found = EnteringArcRule::<i32>::find_entering_arc(&mut rule, 8, table);
        assert_eq!(found, Some(ArcId::new(1)));
    }

    #[test]
    fn wraps_and_advances_between_calls() {
        let mut rule = BlockSearch::with_block_size(2);
        let table = |a: ArcId| -> Option<(i32, ArcBoundState)> {
            if a.index() == 3 {
                Some((-1, ArcBoundState::Lower))
            } else {
                None
            }
        };
        let found = EnteringArcRule::<i32>::find_entering_arc(&mut rule, 4, table);
        assert_eq!(found, Some(ArcId::new(3)));
    }
}
