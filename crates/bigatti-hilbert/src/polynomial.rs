//! Cancelling accumulator for the series numerator.
//!
//! Base cases emit unit-coefficient terms in no particular order, and the
//! same term is typically emitted many times with both signs. The
//! accumulator sums coefficients per term and drops a term as soon as its
//! coefficient reaches zero.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use bigatti_term::term::{self, Exponent};
use bigatti_term::Term;
use dashu::integer::IBig;
use rustc_hash::FxHashMap;

use crate::consumer::TermConsumer;
use crate::sign::{Sign, SignedTerm};

/// Receiver of the signed terms produced by base cases.
pub trait SignedTermSink {
    /// Receives one signed term.
    fn emit(&mut self, sign: Sign, term: &[Exponent]);
}

impl SignedTermSink for Vec<SignedTerm> {
    fn emit(&mut self, sign: Sign, term: &[Exponent]) {
        self.push(SignedTerm::new(sign, Term::new(term)));
    }
}

/// A polynomial with arbitrary-precision integer coefficients, stored as a
/// hash map from term to coefficient.
///
/// No stored coefficient is ever zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashPolynomial {
    var_count: usize,
    terms: FxHashMap<Term, IBig>,
}

impl HashPolynomial {
    /// Creates the zero polynomial over `var_count` variables.
    #[must_use]
    pub fn new(var_count: usize) -> Self {
        Self {
            var_count,
            terms: FxHashMap::default(),
        }
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn var_count(&self) -> usize {
        self.var_count
    }

    /// Returns the number of terms with nonzero coefficient.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true for the zero polynomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Adds `coefficient * term`.
    ///
    /// # Panics
    ///
    /// Panics if `term` does not have `var_count` exponents.
    pub fn add(&mut self, coefficient: &IBig, term: &[Exponent]) {
        self.accumulate(coefficient, term, false);
    }

    /// Subtracts `coefficient * term`.
    ///
    /// # Panics
    ///
    /// Panics if `term` does not have `var_count` exponents.
    pub fn sub(&mut self, coefficient: &IBig, term: &[Exponent]) {
        self.accumulate(coefficient, term, true);
    }

    /// Adds `+term` or `-term`.
    pub fn add_sign(&mut self, sign: Sign, term: &[Exponent]) {
        match sign {
            Sign::Plus => self.add(&IBig::ONE, term),
            Sign::Minus => self.sub(&IBig::ONE, term),
        }
    }

    fn accumulate(&mut self, coefficient: &IBig, term: &[Exponent], negate: bool) {
        assert_eq!(term.len(), self.var_count, "variable count mismatch");
        if *coefficient == IBig::ZERO {
            return;
        }

        if let Some(c) = self.terms.get_mut(term) {
            if negate {
                *c -= coefficient;
            } else {
                *c += coefficient;
            }
            if *c != IBig::ZERO {
                return;
            }
        } else {
            let c = if negate {
                -coefficient.clone()
            } else {
                coefficient.clone()
            };
            self.terms.insert(Term::new(term), c);
            return;
        }
        self.terms.remove(term);
    }

    /// Adds every term of `other`.
    ///
    /// # Panics
    ///
    /// Panics if the variable counts differ.
    pub fn add_polynomial(&mut self, other: &HashPolynomial) {
        assert_eq!(self.var_count, other.var_count, "variable count mismatch");
        for (t, c) in &other.terms {
            self.add(c, t);
        }
    }

    /// Returns the coefficient of `term`, or zero.
    #[must_use]
    pub fn coefficient(&self, term: &[Exponent]) -> IBig {
        self.terms.get(term).cloned().unwrap_or(IBig::ZERO)
    }

    /// Iterates over the terms in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Term, &IBig)> + '_ {
        self.terms.iter()
    }

    /// Removes every term.
    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Removes every term and changes the variable count.
    pub fn reset(&mut self, var_count: usize) {
        self.terms.clear();
        self.var_count = var_count;
    }

    /// Returns the terms, in canonical order if `canonical` is set.
    ///
    /// Canonical order is descending total degree, ties broken by
    /// descending lexicographic order.
    #[must_use]
    pub fn sorted_terms(&self, canonical: bool) -> Vec<(&Term, &IBig)> {
        let mut terms: Vec<_> = self.terms.iter().collect();
        if canonical {
            terms.sort_by(|a, b| canonical_cmp(a.0, b.0));
        }
        terms
    }

    /// Streams the polynomial to `consumer`.
    pub fn feed_to(&self, consumer: &mut dyn TermConsumer, canonical: bool) {
        consumer.begin_consuming(self.var_count);
        for (t, c) in self.sorted_terms(canonical) {
            consumer.consume(c, t);
        }
        consumer.done_consuming();
    }

    /// Substitutes one common variable `t` for every variable.
    ///
    /// Returns the nonzero coefficients as `(degree, coefficient)` pairs in
    /// increasing degree. The zero polynomial gives an empty vector.
    #[must_use]
    pub fn to_univariate(&self) -> Vec<(u64, IBig)> {
        let mut coeffs: BTreeMap<u64, IBig> = BTreeMap::new();
        for (t, c) in &self.terms {
            *coeffs.entry(term::total_degree(t)).or_default() += c;
        }
        coeffs
            .into_iter()
            .filter(|(_, c)| *c != IBig::ZERO)
            .collect()
    }
}

fn canonical_cmp(a: &[Exponent], b: &[Exponent]) -> Ordering {
    term::cmp_degree_lex(b, a)
}

impl SignedTermSink for HashPolynomial {
    fn emit(&mut self, sign: Sign, term: &[Exponent]) {
        self.add_sign(sign, term);
    }
}

impl TermConsumer for HashPolynomial {
    fn begin_consuming(&mut self, var_count: usize) {
        self.reset(var_count);
    }

    fn consume(&mut self, coefficient: &IBig, term: &[Exponent]) {
        self.add(coefficient, term);
    }

    fn done_consuming(&mut self) {}
}
