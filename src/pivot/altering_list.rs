use super::{is_eligible, EnteringArcRule};
use crate::ids::ArcId;
use crate::num::SimplexInt;

/// Alternates between two fixed-size windows of the arc set on successive
/// calls — one anchored at the low end, one at the high end — each time
/// returning the best eligible arc the active window contains, falling
/// back to a full scan when a window comes up empty. Meant for arc
/// orderings where eligible arcs cluster (e.g. the caller built the graph
/// with locality in mind); the two alternating windows keep per-pivot work
/// bounded without a candidate list's extra bookkeeping.
#[derive(Debug, Clone)]
pub struct AlteringList {
    window_size: usize,
    use_high_window: bool,
}

const DEFAULT_WINDOW_SIZE: usize = 16;

impl Default for AlteringList {
    fn default() -> Self {
        AlteringList {
            window_size: DEFAULT_WINDOW_SIZE,
            use_high_window: false,
        }
    }
}

impl AlteringList {
    pub fn with_window_size(window_size: usize) -> Self {
        AlteringList {
            window_size: window_size.max(1),
            use_high_window: false,
        }
    }

    fn best_in_range<T: SimplexInt>(
        range: std::ops::Range<usize>,
        reduced_cost_and_state: &impl Fn(ArcId) -> Option<(T, super::ArcBoundState)>,
    ) -> Option<ArcId> {
        let mut best: Option<(ArcId, T)> = None;
        for i in range {
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
            if best.map_or(true, |(_, bv)| violation > bv) {
                best = Some((a, violation));
            }
        }
        best.map(|(a, _)| a)
    }
}

impl<T: SimplexInt> EnteringArcRule<T> for AlteringList {
    fn find_entering_arc(
        &mut self,
        arc_num: usize,
        reduced_cost_and_state: impl Fn(ArcId) -> Option<(T, super::ArcBoundState)>,
    ) -> Option<ArcId> {
        if arc_num == 0 {
            return None;
        }
        let window = self.window_size.min(arc_num);
        let range = if self.use_high_window {
            (arc_num - window)..arc_num
        } else {
            0..window
        };
        self.use_high_window = !self.use_high_window;

        if let Some(a) = Self::best_in_range(range, &reduced_cost_and_state) {
            return Some(a);
        }
        Self::best_in_range(0..arc_num, &reduced_cost_and_state)
    }

    fn reset(&mut self, _arc_num: usize) {
        self.use_high_window = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pivot::ArcBoundState;

    #[test]
    fn alternates_windows_and_falls_back_to_full_scan() {
        let mut rule = AlteringList::with_window_size(2);
        // Only arc 5 (outside either 2-wide window at arc_num=8) is
        // eligible, so both windowed calls must fall back to a full scan.
        let table = |a: ArcId| -> Option<(i32, ArcBoundState)> {
            if a.index() == 5 {
                Some((-3, ArcBoundState::Lower))
            } else {
                None
            }
        };
        let first = EnteringArcRule::<i32>::find_entering_arc(&mut rule, 8, table);
        assert_eq!(first, Some(ArcId::new(5)));
        assert!(rule.use_high_window);
        let second = EnteringArcRule::<i32>::find_entering_arc(&mut rule, 8, table);
        assert_eq!(second, Some(ArcId::new(5)));
    }
}
