use super::{is_eligible, EnteringArcRule};
use crate::ids::ArcId;
use crate::num::SimplexInt;

const DEFAULT_LIST_SIZE: usize = 10;
const DEFAULT_MAX_AGE: u32 = 4;

/// Keeps a small working list of recently-seen eligible arcs. Each call
/// first re-checks the list (dropping arcs that turned ineligible),
/// returns the best survivor if any looks good enough, and otherwise does
/// a full scan to both answer the current call and refill the list for
/// next time — arcs age out after [`DEFAULT_MAX_AGE`] calls without being
/// the winner, so a stale pick can't loop forever.
#[derive(Debug, Clone)]
pub struct CandidateList {
    list: Vec<(ArcId, u32)>,
    list_size: usize,
    max_age: u32,
}

impl Default for CandidateList {
    fn default() -> Self {
        CandidateList {
            list: Vec::new(),
            list_size: DEFAULT_LIST_SIZE,
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl CandidateList {
    pub fn with_list_size(list_size: usize) -> Self {
        CandidateList {
            list: Vec::new(),
            list_size: list_size.max(1),
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl<T: SimplexInt> EnteringArcRule<T> for CandidateList {
    fn find_entering_arc(
        &mut self,
        arc_num: usize,
        reduced_cost_and_state: impl Fn(ArcId) -> Option<(T, super::ArcBoundState)>,
    ) -> Option<ArcId> {
        if arc_num == 0 {
            return None;
        }

        // Age and prune the existing list, keeping only arcs still
        // eligible right now.
        let mut still_eligible: Vec<(ArcId, T)> = Vec::new();
        for &(a, age) in &self.list {
            if age >= self.max_age {
                continue;
            }
            if let Some((rc, state)) = reduced_cost_and_state(a) {
                if is_eligible(rc, state) {
                    let violation = match state {
                        super::ArcBoundState::Lower => -rc,
                        super::ArcBoundState::Upper => rc,
                    };
                    still_eligible.push((a, violation));
                }
            }
        }

        if !still_eligible.is_empty() {
            still_eligible.sort_by(|a, b| b.1.cmp(&a.1));
            self.list = still_eligible
                .iter()
                .map(|&(a, _)| {
                    let age = self.list.iter().find(|&&(x, _)| x == a).map_or(0, |&(_, a)| a);
                    (a, age + 1)
                })
                .collect();
            self.list.truncate(self.list_size);
            return Some(still_eligible[0].0);
        }

        // List exhausted: full scan, both to answer now and to seed the
        // next list.
        let mut found: Vec<(ArcId, T)> = Vec::new();
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
            found.push((a, violation));
        }
        if found.is_empty() {
            self.list.clear();
            return None;
        }
        found.sort_by(|a, b| b.1.cmp(&a.1));
        self.list = found
            .iter()
            .take(self.list_size)
            .map(|&(a, _)| (a, 0))
            .collect();
        Some(found[0].0)
    }

    fn reset(&mut self, _arc_num: usize) {
        self.list.clear();
    }
}
