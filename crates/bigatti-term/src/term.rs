//! Dense exponent vectors.
//!
//! A term (monomial) is a vector of `var_count` non-negative exponents. The
//! algorithms in this workspace operate on exponent slices, so every
//! operation is available both as a free function over `&[Exponent]` (used
//! on generators stored inside an ideal's chunked storage) and as a method
//! on the owning [`Term`] type.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;

/// A single exponent.
pub type Exponent = u32;

/// Number of variables stored inline before a term spills to the heap.
pub const INLINE_VARS: usize = 8;

/// An owned term with a fixed number of variables.
///
/// Equality and hashing are those of the underlying exponent
/// vector, so two terms over different variable counts are never equal.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Term {
    exponents: SmallVec<[Exponent; INLINE_VARS]>,
}

impl Term {
    /// Creates the identity term (all exponents zero).
    #[must_use]
    pub fn identity(var_count: usize) -> Self {
        Self {
            exponents: SmallVec::from_elem(0, var_count),
        }
    }

    /// Creates a term from its exponents.
    #[must_use]
    pub fn new(exps: &[Exponent]) -> Self {
        Self {
            exponents: SmallVec::from_slice(exps),
        }
    }

    /// Creates the pure power `x_var^exponent`.
    #[must_use]
    pub fn var_power(var: usize, exponent: Exponent, var_count: usize) -> Self {
        assert!(var < var_count);
        let mut term = Self::identity(var_count);
        term.exponents[var] = exponent;
        term
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn var_count(&self) -> usize {
        self.exponents.len()
    }

    /// Returns the exponents as a slice.
    #[must_use]
    pub fn exponents(&self) -> &[Exponent] {
        &self.exponents
    }

    /// Overwrites every exponent with those of `exps`.
    pub fn assign(&mut self, exps: &[Exponent]) {
        assert_eq!(self.exponents.len(), exps.len());
        self.exponents.copy_from_slice(exps);
    }

    /// Resets every exponent to zero.
    pub fn set_identity(&mut self) {
        self.exponents.iter_mut().for_each(|e| *e = 0);
    }

    /// Resizes to `var_count` variables and resets to the identity.
    pub(crate) fn reshape(&mut self, var_count: usize) {
        self.exponents.clear();
        self.exponents.resize(var_count, 0);
    }

    /// Least common multiple.
    #[must_use]
    pub fn lcm(&self, other: &[Exponent]) -> Self {
        let mut out = self.clone();
        lcm_into(&mut out, self, other);
        out
    }

    /// Greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &[Exponent]) -> Self {
        let mut out = self.clone();
        gcd_into(&mut out, self, other);
        out
    }

    /// Product (componentwise sum of exponents).
    #[must_use]
    pub fn product(&self, other: &[Exponent]) -> Self {
        let mut out = self.clone();
        product_into(&mut out, self, other);
        out
    }

    /// Monomial quotient `self : other`.
    #[must_use]
    pub fn colon(&self, other: &[Exponent]) -> Self {
        let mut out = self.clone();
        colon_into(&mut out, self, other);
        out
    }

    /// Replaces `self` by `lcm(self, other)`.
    pub fn lcm_assign(&mut self, other: &[Exponent]) {
        debug_assert_eq!(self.exponents.len(), other.len());
        for (a, &b) in self.exponents.iter_mut().zip(other) {
            *a = (*a).max(b);
        }
    }

    /// Replaces `self` by `gcd(self, other)`.
    pub fn gcd_assign(&mut self, other: &[Exponent]) {
        debug_assert_eq!(self.exponents.len(), other.len());
        for (a, &b) in self.exponents.iter_mut().zip(other) {
            *a = (*a).min(b);
        }
    }

    /// Replaces `self` by `self * other`.
    ///
    /// Every exponent sum must fit in an [`Exponent`].
    pub fn product_assign(&mut self, other: &[Exponent]) {
        debug_assert_eq!(self.exponents.len(), other.len());
        for (a, &b) in self.exponents.iter_mut().zip(other) {
            debug_assert!(a.checked_add(b).is_some(), "exponent overflow");
            *a += b;
        }
    }

    /// Replaces `self` by `self : other`.
    pub fn colon_assign(&mut self, other: &[Exponent]) {
        debug_assert_eq!(self.exponents.len(), other.len());
        for (a, &b) in self.exponents.iter_mut().zip(other) {
            *a = a.saturating_sub(b);
        }
    }
}

impl Deref for Term {
    type Target = [Exponent];

    fn deref(&self) -> &[Exponent] {
        &self.exponents
    }
}

impl DerefMut for Term {
    fn deref_mut(&mut self) -> &mut [Exponent] {
        &mut self.exponents
    }
}

impl AsRef<[Exponent]> for Term {
    fn as_ref(&self) -> &[Exponent] {
        &self.exponents
    }
}

// Hash and Eq agree with those of the exponent slice, so hash maps keyed by
// `Term` can be queried with `&[Exponent]`.
impl Borrow<[Exponent]> for Term {
    fn borrow(&self) -> &[Exponent] {
        &self.exponents
    }
}

impl From<&[Exponent]> for Term {
    fn from(exps: &[Exponent]) -> Self {
        Self::new(exps)
    }
}

impl From<Vec<Exponent>> for Term {
    fn from(exps: Vec<Exponent>) -> Self {
        Self {
            exponents: SmallVec::from_vec(exps),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_monomial(f, self)
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term(")?;
        write_monomial(f, self)?;
        write!(f, ")")
    }
}

fn write_monomial(f: &mut fmt::Formatter<'_>, exps: &[Exponent]) -> fmt::Result {
    let mut first = true;
    for (i, &e) in exps.iter().enumerate() {
        if e == 0 {
            continue;
        }
        if !first {
            write!(f, "*")?;
        }
        first = false;
        if e == 1 {
            write!(f, "x{i}")?;
        } else {
            write!(f, "x{i}^{e}")?;
        }
    }
    if first {
        write!(f, "1")?;
    }
    Ok(())
}

/// Writes `lcm(a, b)` into `out`.
pub fn lcm_into(out: &mut [Exponent], a: &[Exponent], b: &[Exponent]) {
    debug_assert!(out.len() == a.len() && a.len() == b.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x.max(y);
    }
}

/// Writes `gcd(a, b)` into `out`.
pub fn gcd_into(out: &mut [Exponent], a: &[Exponent], b: &[Exponent]) {
    debug_assert!(out.len() == a.len() && a.len() == b.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x.min(y);
    }
}

/// Writes `a * b` into `out`.
///
/// Every exponent sum must fit in an [`Exponent`].
pub fn product_into(out: &mut [Exponent], a: &[Exponent], b: &[Exponent]) {
    debug_assert!(out.len() == a.len() && a.len() == b.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        debug_assert!(x.checked_add(y).is_some(), "exponent overflow");
        *o = x + y;
    }
}

/// Writes `a : b`, componentwise `max(a[i] - b[i], 0)`, into `out`.
pub fn colon_into(out: &mut [Exponent], a: &[Exponent], b: &[Exponent]) {
    debug_assert!(out.len() == a.len() && a.len() == b.len());
    for ((o, &x), &y) in out.iter_mut().zip(a).zip(b) {
        *o = x.saturating_sub(y);
    }
}

/// Returns true if `a` divides `b`, i.e. `a[i] <= b[i]` for every variable.
#[must_use]
#[inline]
pub fn divides(a: &[Exponent], b: &[Exponent]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(&x, &y)| x <= y)
}

/// Returns true if `a` divides `b` and `a != b`.
#[must_use]
pub fn strictly_divides(a: &[Exponent], b: &[Exponent]) -> bool {
    divides(a, b) && a != b
}

/// Returns true if `a` lies strictly below `b` on its own support.
///
/// That is `a[i] < b[i]` for every `i` with `a[i] > 0`. Equivalently, `a`
/// divides `b / x_i` for every variable `x_i` dividing `b`. This is the
/// dominance relation used for genericity and Scarf faces.
#[must_use]
#[inline]
pub fn strictly_below(a: &[Exponent], b: &[Exponent]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(&x, &y)| x == 0 || x < y)
}

/// Returns true if every exponent is zero.
#[must_use]
pub fn is_identity(a: &[Exponent]) -> bool {
    a.iter().all(|&e| e == 0)
}

/// Returns the number of variables with a positive exponent.
#[must_use]
pub fn support_size(a: &[Exponent]) -> usize {
    a.iter().filter(|&&e| e > 0).count()
}

/// Returns the sum of the exponents.
#[must_use]
pub fn total_degree(a: &[Exponent]) -> u64 {
    a.iter().map(|&e| u64::from(e)).sum()
}

/// Returns true if no variable has a positive exponent in both terms.
#[must_use]
pub fn is_coprime(a: &[Exponent], b: &[Exponent]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(&x, &y)| x == 0 || y == 0)
}

/// Compares lexicographically (first variable most significant).
#[must_use]
pub fn cmp_lex(a: &[Exponent], b: &[Exponent]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compares reverse lexicographically.
///
/// Scans from the last variable; at the first difference the term with the
/// smaller exponent is the greater one.
#[must_use]
pub fn cmp_reverse_lex(a: &[Exponent], b: &[Exponent]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b).rev() {
        match y.cmp(x) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Compares by total degree, then lexicographically.
#[must_use]
pub fn cmp_degree_lex(a: &[Exponent], b: &[Exponent]) -> Ordering {
    total_degree(a)
        .cmp(&total_degree(b))
        .then_with(|| cmp_lex(a, b))
}

/// Compares the exponents of a single variable.
#[must_use]
pub fn cmp_var(a: &[Exponent], b: &[Exponent], var: usize) -> Ordering {
    a[var].cmp(&b[var])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcm_gcd() {
        let a = Term::new(&[2, 1, 0]); // x0^2*x1
        let b = Term::new(&[1, 3, 0]); // x0*x1^3

        assert_eq!(a.lcm(&b), Term::new(&[2, 3, 0]));
        assert_eq!(a.gcd(&b), Term::new(&[1, 1, 0]));
    }

    #[test]
    fn test_product_and_colon() {
        let a = Term::new(&[3, 2, 1]); // x0^3*x1^2*x2
        let b = Term::new(&[1, 4, 0]); // x0*x1^4

        assert_eq!(a.product(&b), Term::new(&[4, 6, 1]));
        // Colon clamps at zero instead of failing like division.
        assert_eq!(a.colon(&b), Term::new(&[2, 0, 1]));
    }

    #[test]
    fn test_assign_ops() {
        let mut t = Term::new(&[1, 0, 2]);
        t.lcm_assign(&[0, 3, 1]);
        assert_eq!(t.exponents(), &[1, 3, 2]);
        t.colon_assign(&[1, 1, 5]);
        assert_eq!(t.exponents(), &[0, 2, 0]);
        t.product_assign(&[2, 0, 1]);
        assert_eq!(t.exponents(), &[2, 2, 1]);
        t.gcd_assign(&[1, 5, 5]);
        assert_eq!(t.exponents(), &[1, 2, 1]);
    }

    #[test]
    fn test_divisibility() {
        let xy = [1, 1, 0];
        let x2y = [2, 1, 0];
        let z = [0, 0, 1];

        assert!(divides(&xy, &x2y));
        assert!(!divides(&x2y, &xy));
        assert!(strictly_divides(&xy, &x2y));
        assert!(!strictly_divides(&xy, &xy));
        assert!(!divides(&z, &xy));
    }

    #[test]
    fn test_strictly_below() {
        let xyz = [1, 1, 1];
        let xz = [1, 0, 1];
        let y = [0, 1, 0];
        let y2 = [0, 2, 0];

        // xz attains the exponent of x in xyz, so it is not strictly below.
        assert!(!strictly_below(&xz, &xyz));
        assert!(strictly_below(&y, &[2, 2, 0]));
        assert!(!strictly_below(&y2, &[2, 2, 0]));
        // The identity is strictly below everything.
        assert!(strictly_below(&[0, 0, 0], &xyz));
    }

    #[test]
    fn test_support_and_degree() {
        let t = [0, 3, 0, 2];
        assert_eq!(support_size(&t), 2);
        assert_eq!(total_degree(&t), 5);
        assert!(!is_identity(&t));
        assert!(is_identity(&[0, 0]));
        assert!(is_coprime(&[1, 0, 0, 0], &t));
        assert!(!is_coprime(&[0, 1, 0, 0], &t));
    }

    #[test]
    fn test_orderings() {
        let x2 = [2, 0];
        let xy = [1, 1];
        let y2 = [0, 2];
        let x = [1, 0];

        assert_eq!(cmp_lex(&x2, &xy), Ordering::Greater);
        assert_eq!(cmp_lex(&y2, &x), Ordering::Less);
        // In reverse lex the smaller last exponent wins.
        assert_eq!(cmp_reverse_lex(&x2, &xy), Ordering::Greater);
        assert_eq!(cmp_reverse_lex(&xy, &y2), Ordering::Greater);
        // Degree first: y^2 > x.
        assert_eq!(cmp_degree_lex(&y2, &x), Ordering::Greater);
        assert_eq!(cmp_degree_lex(&x2, &y2), Ordering::Greater);
        assert_eq!(cmp_var(&x2, &xy, 1), Ordering::Less);
    }

    #[test]
    fn test_var_power_and_display() {
        let t = Term::var_power(1, 3, 3);
        assert_eq!(t.exponents(), &[0, 3, 0]);
        assert_eq!(t.to_string(), "x1^3");
        assert_eq!(Term::new(&[1, 0, 2]).to_string(), "x0*x2^2");
        assert_eq!(Term::identity(2).to_string(), "1");
        assert_eq!(format!("{:?}", Term::identity(0)), "Term(1)");
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let exps: Vec<Exponent> = (0..20).collect();
        let t = Term::from(exps.clone());
        assert_eq!(t.var_count(), 20);
        assert_eq!(t.exponents(), exps.as_slice());
    }
}
