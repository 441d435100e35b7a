//! Counters collected during one computation.

use crate::base_case::BaseCaseKind;
use crate::subset::WalkCounts;

/// Statistics of the last computation of a [`HilbertEngine`](crate::HilbertEngine).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HilbertStats {
    /// Recursion states taken off the worklist.
    pub nodes: u64,
    /// Pivot splits performed.
    pub pivot_splits: u64,
    /// Common divisors factored out.
    pub gcd_simplifications: u64,
    /// Base cases with no generators.
    pub empty_cases: u64,
    /// Base cases with one or two generators.
    pub small_cases: u64,
    /// Unique-maximal base cases.
    pub unique_maximal_cases: u64,
    /// Weakly generic base cases.
    pub generic_cases: u64,
    /// Ideals resolved by the full Taylor sum because no pivot existed.
    pub taylor_fallbacks: u64,
    /// Largest worklist length seen.
    pub max_worklist: usize,
    /// Subsets emitted by subset walks.
    pub faces_emitted: u64,
    /// Subsets pruned by subset walks.
    pub faces_pruned: u64,
}

impl HilbertStats {
    /// Records a resolved base case.
    pub fn record_base_case(&mut self, kind: BaseCaseKind, walk: WalkCounts) {
        match kind {
            BaseCaseKind::Empty => self.empty_cases += 1,
            BaseCaseKind::Small => self.small_cases += 1,
            BaseCaseKind::UniqueMaximal => self.unique_maximal_cases += 1,
            BaseCaseKind::Generic => self.generic_cases += 1,
        }
        self.record_walk(walk);
    }

    /// Adds the counters of one subset walk.
    pub fn record_walk(&mut self, walk: WalkCounts) {
        self.faces_emitted += walk.emitted;
        self.faces_pruned += walk.pruned;
    }

    /// Returns the number of base cases of every kind.
    #[must_use]
    pub fn base_cases(&self) -> u64 {
        self.empty_cases + self.small_cases + self.unique_maximal_cases + self.generic_cases
    }
}
