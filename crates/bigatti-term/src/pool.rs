//! Size-class pools for short-lived terms.
//!
//! The pivot recursion creates and discards a very large number of terms of
//! the same length. A [`TermPool`] keeps discarded terms on a free list per
//! size class (the variable count) and hands them back out instead of going
//! to the allocator again.
//!
//! Every fresh allocation is first cleared with the pool's
//! [`AllocationPolicy`], which lets callers cap memory use or inject an
//! out-of-memory failure at a chosen point.

use std::fmt;

use thiserror::Error;

use crate::term::{Exponent, Term};

/// Default cap on the number of free terms kept per size class.
pub const DEFAULT_MAX_FREE_PER_CLASS: usize = 4096;

/// Allocation failure reported by a [`TermPool`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AllocError {
    /// The allocation policy refused a request for `words` exponents.
    #[error("out of memory: allocation of {words} exponents refused")]
    OutOfMemory {
        /// Size of the refused request, in exponents.
        words: usize,
    },
}

/// Decides whether a fresh allocation may go ahead.
pub trait AllocationPolicy: fmt::Debug {
    /// Called before each fresh allocation of `words` exponents.
    fn allow(&mut self, words: usize) -> bool;
}

/// Never refuses.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unlimited;

impl AllocationPolicy for Unlimited {
    fn allow(&mut self, _words: usize) -> bool {
        true
    }
}

/// Allows a fixed number of allocations and refuses every one after that.
#[derive(Clone, Copy, Debug)]
pub struct FailAfter {
    remaining: usize,
}

impl FailAfter {
    /// Allows `allocations` requests, then fails.
    #[must_use]
    pub fn new(allocations: usize) -> Self {
        Self {
            remaining: allocations,
        }
    }
}

impl AllocationPolicy for FailAfter {
    fn allow(&mut self, _words: usize) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// Allows allocations until a total number of exponents has been handed out.
#[derive(Clone, Copy, Debug)]
pub struct WordBudget {
    remaining: usize,
}

impl WordBudget {
    /// Creates a budget of `words` exponents.
    #[must_use]
    pub fn new(words: usize) -> Self {
        Self { remaining: words }
    }

    /// Returns the unused part of the budget.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl AllocationPolicy for WordBudget {
    fn allow(&mut self, words: usize) -> bool {
        match self.remaining.checked_sub(words) {
            Some(rest) => {
                self.remaining = rest;
                true
            }
            None => false,
        }
    }
}

/// Counters describing pool behavior.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Number of terms handed out.
    pub total_allocations: u64,
    /// Requests served from a free list.
    pub reuse_hits: u64,
    /// Requests that needed a fresh allocation.
    pub pool_misses: u64,
    /// Terms returned to the pool.
    pub recycled: u64,
    /// Largest number of free terms held at once.
    pub peak_free: usize,
}

/// A pool of terms with one free list per variable count.
pub struct TermPool {
    /// Free terms, indexed by size class.
    classes: Vec<Vec<Term>>,
    /// Number of free terms across all classes.
    free: usize,
    /// Maximum number of free terms kept per class.
    max_free_per_class: usize,
    policy: Box<dyn AllocationPolicy>,
    stats: PoolStats,
}

impl TermPool {
    /// Creates a pool that never refuses an allocation.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(Unlimited)
    }

    /// Creates a pool that consults `policy` before every fresh allocation.
    #[must_use]
    pub fn with_policy(policy: impl AllocationPolicy + 'static) -> Self {
        Self {
            classes: Vec::new(),
            free: 0,
            max_free_per_class: DEFAULT_MAX_FREE_PER_CLASS,
            policy: Box::new(policy),
            stats: PoolStats::default(),
        }
    }

    /// Clears the request for `words` exponents with the policy.
    ///
    /// Storage that is not a pooled term (for example an ideal's generator
    /// chunk) is accounted through this method.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::OutOfMemory`] if the policy refuses.
    pub fn request(&mut self, words: usize) -> Result<(), AllocError> {
        if self.policy.allow(words) {
            Ok(())
        } else {
            Err(AllocError::OutOfMemory { words })
        }
    }

    /// Hands out an identity term over `var_count` variables.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::OutOfMemory`] if no free term of this size
    /// exists and the policy refuses a fresh one.
    pub fn alloc(&mut self, var_count: usize) -> Result<Term, AllocError> {
        self.stats.total_allocations += 1;

        if let Some(mut term) = self.classes.get_mut(var_count).and_then(Vec::pop) {
            self.free -= 1;
            self.stats.reuse_hits += 1;
            term.set_identity();
            return Ok(term);
        }

        self.stats.pool_misses += 1;
        self.request(var_count)?;
        Ok(Term::identity(var_count))
    }

    /// Hands out a copy of `exps`.
    ///
    /// # Errors
    ///
    /// Same as [`TermPool::alloc`].
    pub fn alloc_copy(&mut self, exps: &[Exponent]) -> Result<Term, AllocError> {
        let mut term = self.alloc(exps.len())?;
        term.assign(exps);
        Ok(term)
    }

    /// Returns a term to its size class.
    pub fn recycle(&mut self, mut term: Term) {
        let class = term.var_count();
        if self.classes.len() <= class {
            self.classes.resize_with(class + 1, Vec::new);
        }
        let list = &mut self.classes[class];
        if list.len() >= self.max_free_per_class {
            return;
        }
        term.reshape(class);
        list.push(term);
        self.free += 1;
        self.stats.recycled += 1;
        self.stats.peak_free = self.stats.peak_free.max(self.free);
    }

    /// Drops every free term and clears the statistics.
    ///
    /// The policy is kept, so a budget continues to count down across resets.
    pub fn reset(&mut self) {
        self.classes.clear();
        self.free = 0;
        self.stats = PoolStats::default();
    }

    /// Returns the number of free terms held.
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free
    }

    /// Returns a snapshot of the statistics.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.stats.clone()
    }
}

impl Default for TermPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TermPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TermPool")
            .field("free", &self.free)
            .field("policy", &self.policy)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
