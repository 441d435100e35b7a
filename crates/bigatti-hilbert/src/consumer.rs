//! Output boundary for computed polynomials.

use bigatti_term::term::Exponent;
use bigatti_term::Term;
use dashu::integer::IBig;

/// Receives a polynomial as a stream of terms.
///
/// A stream is one `begin_consuming`, any number of `consume` calls with
/// nonzero coefficients and distinct terms, and one `done_consuming`.
pub trait TermConsumer {
    /// Starts a polynomial over `var_count` variables.
    fn begin_consuming(&mut self, var_count: usize);

    /// Receives one term.
    fn consume(&mut self, coefficient: &IBig, term: &[Exponent]);

    /// Ends the polynomial.
    fn done_consuming(&mut self);
}

/// A consumer that records the stream in the order received.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectedPolynomial {
    /// Variable count announced by the last `begin_consuming`.
    pub var_count: usize,
    /// Received terms, in order.
    pub terms: Vec<(IBig, Term)>,
    /// Whether `done_consuming` was seen.
    pub done: bool,
}

impl CollectedPolynomial {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the coefficient of `term`, or zero if it was not received.
    #[must_use]
    pub fn coefficient(&self, term: &[Exponent]) -> IBig {
        self.terms
            .iter()
            .find(|(_, t)| t.exponents() == term)
            .map_or(IBig::ZERO, |(c, _)| c.clone())
    }
}

impl TermConsumer for CollectedPolynomial {
    fn begin_consuming(&mut self, var_count: usize) {
        self.var_count = var_count;
        self.terms.clear();
        self.done = false;
    }

    fn consume(&mut self, coefficient: &IBig, term: &[Exponent]) {
        self.terms.push((coefficient.clone(), Term::new(term)));
    }

    fn done_consuming(&mut self) {
        self.done = true;
    }
}
