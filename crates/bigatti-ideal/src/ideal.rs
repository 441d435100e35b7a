//! Monomial ideals stored as chunked exponent arrays.
//!
//! An [`Ideal`] owns one contiguous exponent buffer. Generator `i` occupies
//! the chunk `[i * var_count, (i + 1) * var_count)`, so copying an ideal for
//! a recursion branch is a single buffer copy and iterating generators never
//! chases pointers.

use std::cmp::Ordering;
use std::fmt;

use bigatti_term::term::{self, Exponent};
use bigatti_term::Term;

/// A monomial ideal given by a list of generators over `var_count` variables.
///
/// The ideal is *minimally generated* when no generator divides another one.
/// `minimize` establishes that and the reminimizing operations preserve it.
#[derive(Clone, Default)]
pub struct Ideal {
    var_count: usize,
    len: usize,
    exponents: Vec<Exponent>,
}

impl Ideal {
    /// Creates the zero ideal over `var_count` variables.
    #[must_use]
    pub fn new(var_count: usize) -> Self {
        Self {
            var_count,
            len: 0,
            exponents: Vec::new(),
        }
    }

    /// Creates an empty ideal with room for `generators` generators.
    #[must_use]
    pub fn with_capacity(var_count: usize, generators: usize) -> Self {
        Self {
            var_count,
            len: 0,
            exponents: Vec::with_capacity(var_count * generators),
        }
    }

    /// Creates an ideal from generator exponent vectors.
    ///
    /// # Panics
    ///
    /// Panics if a generator does not have `var_count` exponents.
    #[must_use]
    pub fn from_generators<I, G>(var_count: usize, generators: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: AsRef<[Exponent]>,
    {
        let mut ideal = Self::new(var_count);
        for g in generators {
            ideal.insert(g.as_ref());
        }
        ideal
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn var_count(&self) -> usize {
        self.var_count
    }

    /// Returns the number of generators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ideal has no generators.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of exponents held by the generator storage.
    #[must_use]
    pub fn words(&self) -> usize {
        self.len * self.var_count
    }

    /// Returns generator `i`.
    #[must_use]
    #[inline]
    pub fn generator(&self, i: usize) -> &[Exponent] {
        debug_assert!(i < self.len);
        &self.exponents[i * self.var_count..(i + 1) * self.var_count]
    }

    #[inline]
    pub(crate) fn generator_mut(&mut self, i: usize) -> &mut [Exponent] {
        debug_assert!(i < self.len);
        &mut self.exponents[i * self.var_count..(i + 1) * self.var_count]
    }

    /// Iterates over the generators.
    pub fn generators(&self) -> impl ExactSizeIterator<Item = &[Exponent]> + '_ {
        (0..self.len).map(move |i| self.generator(i))
    }

    /// Appends a generator without reminimizing.
    ///
    /// # Panics
    ///
    /// Panics if `term` does not have `var_count` exponents.
    pub fn insert(&mut self, term: &[Exponent]) {
        assert_eq!(term.len(), self.var_count, "variable count mismatch");
        self.exponents.extend_from_slice(term);
        self.len += 1;
    }

    /// Removes every generator, keeping the storage.
    pub fn clear(&mut self) {
        self.exponents.clear();
        self.len = 0;
    }

    /// Reinitializes as the zero ideal over `var_count` variables, keeping
    /// the storage.
    pub fn reset(&mut self, var_count: usize) {
        self.clear();
        self.var_count = var_count;
    }

    /// Overwrites `self` with a copy of `other`, reusing the storage.
    pub fn assign(&mut self, other: &Ideal) {
        self.var_count = other.var_count;
        self.len = other.len;
        self.exponents.clear();
        self.exponents.extend_from_slice(&other.exponents);
    }

    /// Keeps only the generators for which `keep` returns true.
    ///
    /// The relative order of the kept generators is preserved.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Exponent]) -> bool,
    {
        let n = self.var_count;
        let mut write = 0;
        for read in 0..self.len {
            if !keep(self.generator(read)) {
                continue;
            }
            if write != read {
                self.exponents
                    .copy_within(read * n..(read + 1) * n, write * n);
            }
            write += 1;
        }
        self.truncate(write);
    }

    /// Keeps the first `len` generators.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
            self.exponents.truncate(len * self.var_count);
        }
    }

    /// Moves the generators at the distinct indices `order` to the front,
    /// in that order, and drops the others. Rows are swapped in place, so
    /// the storage is never reallocated.
    pub(crate) fn gather(&mut self, order: &[usize]) {
        // position[g] is the row now holding generator g, origin[r] the
        // generator now held in row r.
        let mut position: Vec<usize> = (0..self.len).collect();
        let mut origin = position.clone();
        for (row, &g) in order.iter().enumerate() {
            let from = position[g];
            if from == row {
                continue;
            }
            self.swap_generators(row, from);
            let displaced = origin[row];
            position[displaced] = from;
            origin[from] = displaced;
            position[g] = row;
            origin[row] = g;
        }
        self.truncate(order.len());
    }

    fn swap_generators(&mut self, a: usize, b: usize) {
        let n = self.var_count;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.exponents.split_at_mut(hi * n);
        head[lo * n..(lo + 1) * n].swap_with_slice(&mut tail[..n]);
    }

    /// Sorts the generators with the comparator `cmp`.
    pub fn sort_by<F>(&mut self, mut cmp: F)
    where
        F: FnMut(&[Exponent], &[Exponent]) -> Ordering,
    {
        let mut order: Vec<usize> = (0..self.len).collect();
        order.sort_by(|&a, &b| cmp(self.generator(a), self.generator(b)));
        self.gather(&order);
    }

    /// Sorts the generators lexicographically.
    pub fn sort_lex(&mut self) {
        self.sort_by(term::cmp_lex);
    }

    /// Returns the generators as owned terms, sorted lexicographically.
    #[must_use]
    pub fn to_sorted_terms(&self) -> Vec<Term> {
        let mut terms: Vec<Term> = self.generators().map(Term::new).collect();
        terms.sort_by(|a, b| term::cmp_lex(a, b));
        terms
    }

    /// Returns true if `t` lies in the ideal, i.e. some generator divides it.
    #[must_use]
    pub fn contains(&self, t: &[Exponent]) -> bool {
        debug_assert_eq!(t.len(), self.var_count);
        self.generators().any(|g| term::divides(g, t))
    }

    /// Returns true if some generator lies strictly below `t` on its support.
    ///
    /// See [`term::strictly_below`]. A subset of generators whose lcm is
    /// strictly contained is not a face of the Scarf complex.
    #[must_use]
    pub fn strictly_contains(&self, t: &[Exponent]) -> bool {
        debug_assert_eq!(t.len(), self.var_count);
        self.generators().any(|g| term::strictly_below(g, t))
    }

    /// Returns the lcm of all generators (the identity for the zero ideal).
    #[must_use]
    pub fn lcm(&self) -> Term {
        let mut lcm = Term::identity(self.var_count);
        self.lcm_into(&mut lcm);
        lcm
    }

    /// Writes the lcm of all generators into `out`.
    pub fn lcm_into(&self, out: &mut Term) {
        assert_eq!(out.var_count(), self.var_count);
        out.set_identity();
        for g in self.generators() {
            out.lcm_assign(g);
        }
    }

    /// Returns the gcd of all generators.
    ///
    /// The zero ideal has no common divisor to factor out, so its gcd is
    /// reported as the identity.
    #[must_use]
    pub fn gcd(&self) -> Term {
        let mut gcd = Term::identity(self.var_count);
        self.gcd_into(&mut gcd);
        gcd
    }

    /// Writes the gcd of all generators into `out`.
    pub fn gcd_into(&self, out: &mut Term) {
        assert_eq!(out.var_count(), self.var_count);
        let mut gens = self.generators();
        let Some(first) = gens.next() else {
            out.set_identity();
            return;
        };
        out.assign(first);
        for g in gens {
            out.gcd_assign(g);
        }
    }

    /// Returns, for each variable, the number of generators in which it has
    /// a positive exponent.
    #[must_use]
    pub fn support_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.var_count];
        for g in self.generators() {
            for (count, &e) in counts.iter_mut().zip(g) {
                if e > 0 {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// Returns true if no variable appears in two different generators.
    #[must_use]
    pub fn disjoint_support(&self) -> bool {
        self.support_counts().iter().all(|&c| c <= 1)
    }

    /// Returns true if no two generators share a positive exponent on any
    /// variable.
    #[must_use]
    pub fn is_strongly_generic(&self) -> bool {
        let mut column = Vec::with_capacity(self.len);
        for var in 0..self.var_count {
            column.clear();
            column.extend(self.generators().map(|g| g[var]).filter(|&e| e > 0));
            column.sort_unstable();
            if column.windows(2).any(|w| w[0] == w[1]) {
                return false;
            }
        }
        true
    }

    /// Returns true if the ideal is weakly generic.
    ///
    /// Whenever two generators share a positive exponent on some variable,
    /// a generator must lie strictly below their lcm.
    #[must_use]
    pub fn is_weakly_generic(&self) -> bool {
        let mut lcm = Term::identity(self.var_count);
        for i in 0..self.len {
            let a = self.generator(i);
            for j in (i + 1)..self.len {
                let b = self.generator(j);
                let shares = a.iter().zip(b).any(|(&x, &y)| x == y && x > 0);
                if !shares {
                    continue;
                }
                term::lcm_into(&mut lcm, a, b);
                if !self.strictly_contains(&lcm) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns true if no generator divides a different generator.
    ///
    /// Quadratic; meant for assertions and tests.
    #[must_use]
    pub fn is_minimally_generated(&self) -> bool {
        for i in 0..self.len {
            for j in 0..self.len {
                if i != j && term::divides(self.generator(i), self.generator(j)) {
                    return false;
                }
            }
        }
        true
    }

    /// Replaces every generator `g` by `g : t`, without reminimizing.
    pub fn colon(&mut self, t: &[Exponent]) {
        assert_eq!(t.len(), self.var_count, "variable count mismatch");
        for i in 0..self.len {
            for (e, &d) in self.generator_mut(i).iter_mut().zip(t) {
                *e = e.saturating_sub(d);
            }
        }
    }

    /// Replaces every generator `g` by `g * t`.
    pub fn product(&mut self, t: &[Exponent]) {
        assert_eq!(t.len(), self.var_count, "variable count mismatch");
        for i in 0..self.len {
            for (e, &d) in self.generator_mut(i).iter_mut().zip(t) {
                *e += d;
            }
        }
    }
}

impl PartialEq for Ideal {
    /// Two ideals are equal when they have the same generators, in any order.
    fn eq(&self, other: &Self) -> bool {
        self.var_count == other.var_count
            && self.len == other.len
            && self.to_sorted_terms() == other.to_sorted_terms()
    }
}

impl Eq for Ideal {}

impl fmt::Debug for Ideal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ideal[{}](", self.var_count)?;
        for (i, g) in self.generators().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", Term::new(g))?;
        }
        write!(f, ")")
    }
}
