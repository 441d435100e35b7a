//! The pivot recursion.
//!
//! The numerator of `S/I` satisfies, for any monomial `p`,
//!
//! ```text
//! N(I) = N(I + (p)) + x^p * N(I : p)
//! ```
//!
//! The engine applies this split until every branch is a base case. Each
//! pending branch is a [`RecursionState`] on an explicit worklist, so the
//! native stack depth stays constant however deep the recursion goes.

use bigatti_ideal::Ideal;
use bigatti_term::term::{self, Exponent};
use bigatti_term::{AllocError, AllocationPolicy, PoolStats, Term, TermPool};
use tracing::{debug, trace};

use crate::base_case::BaseCaseSolver;
use crate::config::HilbertConfig;
use crate::consumer::TermConsumer;
use crate::error::HilbertError;
use crate::pivot::Pivot;
use crate::polynomial::{HashPolynomial, SignedTermSink};
use crate::sign::Sign;
use crate::state::RecursionState;
use crate::stats::HilbertStats;

/// Maximum number of finished states kept for reuse.
const MAX_SPARE_STATES: usize = 64;

/// Computes Hilbert-Poincare series numerators of monomial ideals.
///
/// An engine can be reused for any number of computations. Its term pool
/// and statistics are reset at the start of each one.
#[derive(Debug)]
pub struct HilbertEngine {
    config: HilbertConfig,
    pool: TermPool,
    solver: BaseCaseSolver,
    /// Finished states whose storage is reused for new branches.
    spare: Vec<RecursionState>,
    pivot: Term,
    gcd: Term,
    stats: HilbertStats,
}

impl HilbertEngine {
    /// Creates an engine whose allocations never fail.
    #[must_use]
    pub fn new(config: HilbertConfig) -> Self {
        Self::with_pool(config, TermPool::new())
    }

    /// Creates an engine whose fresh allocations are cleared with `policy`.
    #[must_use]
    pub fn with_policy(config: HilbertConfig, policy: impl AllocationPolicy + 'static) -> Self {
        Self::with_pool(config, TermPool::with_policy(policy))
    }

    fn with_pool(config: HilbertConfig, pool: TermPool) -> Self {
        Self {
            solver: BaseCaseSolver::new(config.use_generic_base_case),
            config,
            pool,
            spare: Vec::new(),
            pivot: Term::default(),
            gcd: Term::default(),
            stats: HilbertStats::default(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &HilbertConfig {
        &self.config
    }

    /// Returns the statistics of the last computation.
    #[must_use]
    pub fn stats(&self) -> &HilbertStats {
        &self.stats
    }

    /// Returns the term pool statistics of the last computation.
    #[must_use]
    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Computes the numerator of the Hilbert-Poincare series of
    /// `S / ideal`.
    ///
    /// `ideal` must be minimally generated.
    ///
    /// # Errors
    ///
    /// Returns [`HilbertError::OutOfMemory`] if the allocation policy
    /// refuses an allocation.
    pub fn compute(&mut self, ideal: &Ideal) -> Result<HashPolynomial, HilbertError> {
        let mut poly = HashPolynomial::new(ideal.var_count());
        let identity = Term::identity(ideal.var_count());
        self.resolve_into(ideal, &identity, &mut poly)?;
        Ok(poly)
    }

    /// Computes the numerator and streams it to `consumer`, in canonical
    /// order if the configuration asks for it.
    ///
    /// Nothing is streamed if the computation fails.
    ///
    /// # Errors
    ///
    /// Same as [`HilbertEngine::compute`].
    pub fn run(
        &mut self,
        ideal: &Ideal,
        consumer: &mut dyn TermConsumer,
    ) -> Result<(), HilbertError> {
        let poly = self.compute(ideal)?;
        poly.feed_to(consumer, self.config.canonical_output);
        Ok(())
    }

    /// Emits the signed terms of `sign * multiplier * N(ideal)` into `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`HilbertError::OutOfMemory`] if the allocation policy
    /// refuses an allocation. Terms emitted before the failure stay in
    /// `sink`.
    ///
    /// # Panics
    ///
    /// Panics if `multiplier` does not have the ideal's variable count, or
    /// if `multiplier * lcm(ideal)` has an exponent beyond
    /// `u32::MAX`. Every emitted term divides that product.
    pub fn resolve_into(
        &mut self,
        ideal: &Ideal,
        multiplier: &[Exponent],
        sink: &mut dyn SignedTermSink,
    ) -> Result<(), HilbertError> {
        assert_eq!(multiplier.len(), ideal.var_count(), "variable count mismatch");
        let lcm = ideal.lcm();
        assert!(
            multiplier
                .iter()
                .zip(lcm.exponents())
                .all(|(&m, &l)| m.checked_add(l).is_some()),
            "exponent overflow: multiplier times lcm exceeds the exponent range"
        );
        debug_assert!(
            ideal.is_minimally_generated(),
            "input ideal must be minimally generated"
        );

        self.reset();
        debug!(
            var_count = ideal.var_count(),
            generators = ideal.len(),
            pivot = %self.config.pivot,
            "computing Hilbert series numerator"
        );

        match self.resolve_all(ideal, multiplier, sink) {
            Ok(()) => {
                let pool = self.pool.stats();
                debug!(
                    nodes = self.stats.nodes,
                    pivot_splits = self.stats.pivot_splits,
                    gcd_simplifications = self.stats.gcd_simplifications,
                    base_cases = self.stats.base_cases(),
                    max_worklist = self.stats.max_worklist,
                    faces_emitted = self.stats.faces_emitted,
                    faces_pruned = self.stats.faces_pruned,
                    pool_reuse_hits = pool.reuse_hits,
                    pool_misses = pool.pool_misses,
                    "Hilbert series numerator done"
                );
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, nodes = self.stats.nodes, "computation abandoned");
                Err(err.into())
            }
        }
    }

    fn reset(&mut self) {
        self.solver.release(&mut self.pool);
        self.spare.clear();
        self.pivot = Term::default();
        self.gcd = Term::default();
        self.pool.reset();
        self.stats = HilbertStats::default();
    }

    fn resolve_all(
        &mut self,
        ideal: &Ideal,
        multiplier: &[Exponent],
        sink: &mut dyn SignedTermSink,
    ) -> Result<(), AllocError> {
        let root = self.new_state(ideal, multiplier, Sign::Plus, 0)?;
        let mut worklist = vec![root];

        while let Some(state) = worklist.pop() {
            self.stats.nodes += 1;
            self.process(state, &mut worklist, sink)?;
            self.stats.max_worklist = self.stats.max_worklist.max(worklist.len());
        }
        Ok(())
    }

    fn process(
        &mut self,
        mut state: RecursionState,
        worklist: &mut Vec<RecursionState>,
        sink: &mut dyn SignedTermSink,
    ) -> Result<(), AllocError> {
        trace!(
            depth = state.depth,
            generators = state.ideal.len(),
            multiplier = %state.multiplier,
            "node"
        );

        let solved = self.solver.solve(
            &state.ideal,
            &state.multiplier,
            state.sign,
            &mut self.pool,
            sink,
        )?;
        if let Some(solved) = solved {
            self.stats.record_base_case(solved.kind, solved.walk);
            self.recycle(state);
            return Ok(());
        }

        if self.config.use_gcd_simplification && self.simplify_gcd(&mut state, sink)? {
            worklist.push(state);
            return Ok(());
        }

        match self.config.pivot.choose(&state.ideal) {
            Some(pivot) => self.split(state, pivot, worklist),
            None => {
                let walk = self.solver.solve_taylor(
                    &state.ideal,
                    &state.multiplier,
                    state.sign,
                    &mut self.pool,
                    sink,
                )?;
                self.stats.taylor_fallbacks += 1;
                self.stats.record_walk(walk);
                self.recycle(state);
                Ok(())
            }
        }
    }

    /// Rewrites `I = g * J` as `N(I) = 1 - x^g + x^g * N(J)`: emits the
    /// first two terms and leaves `(J, multiplier * g)` in `state`.
    fn simplify_gcd(
        &mut self,
        state: &mut RecursionState,
        sink: &mut dyn SignedTermSink,
    ) -> Result<bool, AllocError> {
        let var_count = state.ideal.var_count();
        if self.gcd.var_count() != var_count {
            self.gcd = self.pool.alloc(var_count)?;
        }
        state.ideal.gcd_into(&mut self.gcd);
        if term::is_identity(&self.gcd) {
            return Ok(false);
        }

        sink.emit(state.sign, &state.multiplier);
        state.multiplier.product_assign(&self.gcd);
        sink.emit(state.sign.flip(), &state.multiplier);
        state.ideal.colon(&self.gcd);

        self.stats.gcd_simplifications += 1;
        trace!(gcd = %self.gcd, depth = state.depth, "factored out common divisor");
        Ok(true)
    }

    /// Replaces `state` by its two branches. The colon branch is a copy;
    /// the insert branch reuses `state` itself.
    fn split(
        &mut self,
        state: RecursionState,
        pivot: Pivot,
        worklist: &mut Vec<RecursionState>,
    ) -> Result<(), AllocError> {
        let var_count = state.ideal.var_count();
        if self.pivot.var_count() != var_count {
            self.pivot = self.pool.alloc(var_count)?;
        }
        pivot.write_to(&mut self.pivot);

        let mut colon =
            self.new_state(&state.ideal, &state.multiplier, state.sign, state.depth + 1)?;
        colon.ideal.colon_reminimize(&self.pivot);
        colon.multiplier.product_assign(&self.pivot);

        let mut inserted = state;
        inserted.ideal.insert_reminimize(&self.pivot);
        inserted.depth += 1;

        self.stats.pivot_splits += 1;
        trace!(
            %pivot,
            depth = inserted.depth,
            insert_generators = inserted.ideal.len(),
            colon_generators = colon.ideal.len(),
            "pivot split"
        );

        worklist.push(inserted);
        worklist.push(colon);
        Ok(())
    }

    fn new_state(
        &mut self,
        ideal: &Ideal,
        multiplier: &[Exponent],
        sign: Sign,
        depth: usize,
    ) -> Result<RecursionState, AllocError> {
        if let Some(mut state) = self.spare.pop() {
            state.ideal.assign(ideal);
            state.multiplier.assign(multiplier);
            state.sign = sign;
            state.depth = depth;
            return Ok(state);
        }

        self.pool.request(ideal.words())?;
        let mut copy = Ideal::with_capacity(ideal.var_count(), ideal.len());
        copy.assign(ideal);
        Ok(RecursionState {
            ideal: copy,
            multiplier: self.pool.alloc_copy(multiplier)?,
            sign,
            depth,
        })
    }

    fn recycle(&mut self, state: RecursionState) {
        if self.spare.len() < MAX_SPARE_STATES {
            self.spare.push(state);
        } else {
            self.pool.recycle(state.multiplier);
        }
    }
}

impl Default for HilbertEngine {
    fn default() -> Self {
        Self::new(HilbertConfig::default())
    }
}
