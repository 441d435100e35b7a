//! Engine configuration.

use bigatti_ideal::DEFAULT_PARTITION_THRESHOLD;

use crate::pivot::PivotStrategy;

/// Configuration for [`HilbertEngine`](crate::HilbertEngine).
///
/// None of the options change the computed polynomial, only how it is
/// computed and in which order it is streamed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HilbertConfig {
    /// Pivot selection strategy.
    pub pivot: PivotStrategy,
    /// Whether to factor out the gcd of all generators before pivoting.
    pub use_gcd_simplification: bool,
    /// Whether weakly generic ideals are resolved by their Scarf sum
    /// instead of being split further.
    pub use_generic_base_case: bool,
    /// Whether output is streamed in descending degree, then descending
    /// lexicographic order.
    pub canonical_output: bool,
    /// Generator count from which input minimization uses the spatial
    /// partition.
    pub minimize_partition_threshold: usize,
}

impl Default for HilbertConfig {
    fn default() -> Self {
        Self {
            pivot: PivotStrategy::Median,
            use_gcd_simplification: true,
            use_generic_base_case: true,
            canonical_output: false,
            minimize_partition_threshold: DEFAULT_PARTITION_THRESHOLD,
        }
    }
}
