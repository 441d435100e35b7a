//! Ideals simple enough to resolve without pivoting.
//!
//! The shapes are tried in order: no generators, one or two generators, a
//! unique-maximal shape where the full Taylor sum is cheap, and weakly
//! generic ideals whose numerator is the Scarf sum.

use std::fmt;

use bigatti_ideal::Ideal;
use bigatti_term::term::{self, Exponent};
use bigatti_term::{AllocError, Term, TermPool};
use tracing::trace;

use crate::polynomial::SignedTermSink;
use crate::sign::Sign;
use crate::subset::{SubsetWalker, WalkCounts, WalkMode};

/// The base-case shape an ideal was resolved as.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BaseCaseKind {
    /// No generators.
    Empty,
    /// One or two generators.
    Small,
    /// Every generator owns a variable on which it alone attains the lcm.
    UniqueMaximal,
    /// Weakly generic.
    Generic,
}

impl BaseCaseKind {
    /// Returns a short lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BaseCaseKind::Empty => "empty",
            BaseCaseKind::Small => "small",
            BaseCaseKind::UniqueMaximal => "unique-maximal",
            BaseCaseKind::Generic => "generic",
        }
    }
}

impl fmt::Display for BaseCaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a successful base-case solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Solved {
    /// Shape that applied.
    pub kind: BaseCaseKind,
    /// Subset-walk counters (zero for the closed-form shapes).
    pub walk: WalkCounts,
}

/// Recognizes and resolves base cases.
#[derive(Debug)]
pub struct BaseCaseSolver {
    walker: SubsetWalker,
    scratch: Term,
    lcm: Term,
    owned: Vec<bool>,
    use_generic: bool,
}

impl BaseCaseSolver {
    /// Creates a solver. With `use_generic` unset, weakly generic ideals
    /// are left to the pivot recursion.
    #[must_use]
    pub fn new(use_generic: bool) -> Self {
        Self {
            walker: SubsetWalker::new(),
            scratch: Term::default(),
            lcm: Term::default(),
            owned: Vec::new(),
            use_generic,
        }
    }

    /// Returns true if `ideal` has the unique-maximal shape.
    ///
    /// There must be no more generators than variables, the lcm must have
    /// at least as many variables in its support as there are generators,
    /// and every generator must attain the lcm exponent on some variable
    /// on which no earlier generator attains it.
    #[must_use]
    pub fn try_unique_maximal(&mut self, ideal: &Ideal) -> bool {
        let var_count = ideal.var_count();
        if ideal.len() > var_count {
            return false;
        }
        if self.lcm.var_count() != var_count {
            self.lcm = Term::identity(var_count);
        }
        ideal.lcm_into(&mut self.lcm);
        if term::support_size(&self.lcm) < ideal.len() {
            return false;
        }

        self.owned.clear();
        self.owned.resize(var_count, false);
        for g in ideal.generators() {
            let mut has_max = false;
            for var in 0..var_count {
                if self.lcm[var] > 0 && g[var] == self.lcm[var] {
                    if self.owned[var] {
                        return false;
                    }
                    self.owned[var] = true;
                    has_max = true;
                }
            }
            if !has_max {
                return false;
            }
        }
        true
    }

    /// Returns true if `ideal` is weakly generic and generic base cases are
    /// enabled.
    #[must_use]
    pub fn try_generic(&self, ideal: &Ideal) -> bool {
        self.use_generic && ideal.is_weakly_generic()
    }

    /// Resolves `ideal` shifted by `multiplier` if it is a base case.
    ///
    /// Returns `None` without emitting anything if no shape applies.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if scratch terms or walk frames cannot be
    /// allocated.
    pub fn solve(
        &mut self,
        ideal: &Ideal,
        multiplier: &[Exponent],
        sign: Sign,
        pool: &mut TermPool,
        sink: &mut dyn SignedTermSink,
    ) -> Result<Option<Solved>, AllocError> {
        debug_assert_eq!(multiplier.len(), ideal.var_count());

        let (kind, walk) = match ideal.len() {
            0 => {
                sink.emit(sign, multiplier);
                (BaseCaseKind::Empty, WalkCounts::default())
            }
            1 | 2 => {
                self.solve_small(ideal, multiplier, sign, pool, sink)?;
                (BaseCaseKind::Small, WalkCounts::default())
            }
            _ if self.try_unique_maximal(ideal) => {
                let walk = self
                    .walker
                    .walk(ideal, multiplier, sign, WalkMode::All, pool, sink)?;
                (BaseCaseKind::UniqueMaximal, walk)
            }
            _ if self.try_generic(ideal) => {
                let walk = self
                    .walker
                    .walk(ideal, multiplier, sign, WalkMode::Prune, pool, sink)?;
                (BaseCaseKind::Generic, walk)
            }
            _ => return Ok(None),
        };

        trace!(
            kind = kind.name(),
            generators = ideal.len(),
            emitted = walk.emitted,
            pruned = walk.pruned,
            "base case"
        );
        Ok(Some(Solved { kind, walk }))
    }

    /// Emits the full Taylor sum of `ideal`, whatever its shape.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError`] if walk frames cannot be allocated.
    pub fn solve_taylor(
        &mut self,
        ideal: &Ideal,
        multiplier: &[Exponent],
        sign: Sign,
        pool: &mut TermPool,
        sink: &mut dyn SignedTermSink,
    ) -> Result<WalkCounts, AllocError> {
        self.walker
            .walk(ideal, multiplier, sign, WalkMode::All, pool, sink)
    }

    /// Returns pooled storage to `pool`.
    pub fn release(&mut self, pool: &mut TermPool) {
        self.walker.release(pool);
        pool.recycle(std::mem::take(&mut self.scratch));
    }

    // 1 - x^a (- x^b + x^lcm(a, b)), all shifted by the multiplier.
    fn solve_small(
        &mut self,
        ideal: &Ideal,
        multiplier: &[Exponent],
        sign: Sign,
        pool: &mut TermPool,
        sink: &mut dyn SignedTermSink,
    ) -> Result<(), AllocError> {
        let var_count = ideal.var_count();
        if self.scratch.var_count() != var_count {
            pool.recycle(std::mem::take(&mut self.scratch));
            self.scratch = pool.alloc(var_count)?;
        }

        sink.emit(sign, multiplier);
        for g in ideal.generators() {
            term::product_into(&mut self.scratch, multiplier, g);
            sink.emit(sign.flip(), &self.scratch);
        }
        if ideal.len() == 2 {
            term::lcm_into(&mut self.scratch, ideal.generator(0), ideal.generator(1));
            self.scratch.product_assign(multiplier);
            sink.emit(sign, &self.scratch);
        }
        Ok(())
    }
}

impl Default for BaseCaseSolver {
    fn default() -> Self {
        Self::new(true)
    }
}
