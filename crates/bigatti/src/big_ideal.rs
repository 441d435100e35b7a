//! Ideals with arbitrary-precision exponents, as produced by parsers.

use std::fmt;

use bigatti_hilbert::{HashPolynomial, HilbertConfig, HilbertEngine, TermConsumer};
use bigatti_ideal::{Ideal, DEFAULT_PARTITION_THRESHOLD};
use bigatti_term::term::Exponent;
use dashu::integer::{IBig, UBig};
use tracing::debug;

use crate::error::InputError;

/// A monomial ideal over named variables whose exponents are arbitrary
/// precision integers.
///
/// Generators are kept exactly as given: they may repeat or divide each
/// other, and their lengths are only checked by [`BigIdeal::to_ideal`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BigIdeal {
    /// Variable names, one per exponent.
    pub var_names: Vec<String>,
    /// Generators as exponent vectors.
    pub generators: Vec<Vec<UBig>>,
}

impl BigIdeal {
    /// Creates the zero ideal over the named variables.
    #[must_use]
    pub fn new(var_names: Vec<String>) -> Self {
        Self {
            var_names,
            generators: Vec::new(),
        }
    }

    /// Creates the zero ideal over `x0, ..., x{var_count - 1}`.
    #[must_use]
    pub fn with_var_count(var_count: usize) -> Self {
        Self::new((0..var_count).map(|i| format!("x{i}")).collect())
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn var_count(&self) -> usize {
        self.var_names.len()
    }

    /// Appends a generator.
    pub fn push(&mut self, generator: Vec<UBig>) {
        self.generators.push(generator);
    }

    /// Appends a generator given with machine exponents.
    pub fn push_exponents(&mut self, generator: &[u64]) {
        self.generators
            .push(generator.iter().map(|&e| UBig::from(e)).collect());
    }

    /// Converts to a minimally generated [`Ideal`].
    ///
    /// # Errors
    ///
    /// Returns [`InputError::VarCountMismatch`] if a generator has the
    /// wrong length, or [`InputError::ExponentOverflow`] if an exponent
    /// does not fit in an [`Exponent`].
    pub fn to_ideal(&self) -> Result<Ideal, InputError> {
        self.to_ideal_with_threshold(DEFAULT_PARTITION_THRESHOLD)
    }

    /// Like [`BigIdeal::to_ideal`], with an explicit generator count from
    /// which minimization uses the spatial partition.
    ///
    /// # Errors
    ///
    /// Same as [`BigIdeal::to_ideal`].
    pub fn to_ideal_with_threshold(&self, threshold: usize) -> Result<Ideal, InputError> {
        let var_count = self.var_count();
        let mut ideal = Ideal::with_capacity(var_count, self.generators.len());
        let mut row: Vec<Exponent> = Vec::with_capacity(var_count);

        for (generator, exponents) in self.generators.iter().enumerate() {
            if exponents.len() != var_count {
                return Err(InputError::VarCountMismatch {
                    expected: var_count,
                    found: exponents.len(),
                    generator,
                });
            }
            row.clear();
            for (var, e) in exponents.iter().enumerate() {
                let e = Exponent::try_from(e.clone())
                    .map_err(|_| InputError::ExponentOverflow { generator, var })?;
                row.push(e);
            }
            ideal.insert(&row);
        }

        ideal.minimize_with_threshold(threshold);
        Ok(ideal)
    }
}

impl fmt::Display for BigIdeal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, g) in self.generators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let mut first = true;
            for (name, e) in self.var_names.iter().zip(g) {
                if *e == UBig::ZERO {
                    continue;
                }
                if !first {
                    write!(f, "*")?;
                }
                first = false;
                if *e == UBig::ONE {
                    write!(f, "{name}")?;
                } else {
                    write!(f, "{name}^{e}")?;
                }
            }
            if first {
                write!(f, "1")?;
            }
        }
        write!(f, ")")
    }
}

/// Computes the numerator of the Hilbert-Poincare series of `S / ideal`
/// and streams it to `consumer`.
///
/// The input is minimized first. Nothing is streamed on error.
///
/// # Errors
///
/// Returns an [`InputError`] if the input is malformed or the computation
/// runs out of memory.
pub fn hilbert_numerator(
    ideal: &BigIdeal,
    config: &HilbertConfig,
    consumer: &mut dyn TermConsumer,
) -> Result<(), InputError> {
    let numerator = multigraded(ideal, config)?;
    numerator.feed_to(consumer, config.canonical_output);
    Ok(())
}

/// Computes the numerator with every variable replaced by one common
/// variable `t`.
///
/// The result lists the nonzero coefficients as `(degree, coefficient)`
/// pairs in increasing degree.
///
/// # Errors
///
/// Same as [`hilbert_numerator`].
pub fn univariate_hilbert_numerator(
    ideal: &BigIdeal,
    config: &HilbertConfig,
) -> Result<Vec<(u64, IBig)>, InputError> {
    Ok(multigraded(ideal, config)?.to_univariate())
}

fn multigraded(ideal: &BigIdeal, config: &HilbertConfig) -> Result<HashPolynomial, InputError> {
    let minimal = ideal.to_ideal_with_threshold(config.minimize_partition_threshold)?;
    debug!(
        var_count = ideal.var_count(),
        generators = ideal.generators.len(),
        minimal_generators = minimal.len(),
        "converted input ideal"
    );

    let mut engine = HilbertEngine::new(config.clone());
    Ok(engine.compute(&minimal)?)
}
