//! Errors at the input boundary.

use bigatti_hilbert::HilbertError;
use thiserror::Error;

/// Errors reported while converting or processing a [`BigIdeal`](crate::BigIdeal).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A generator does not have one exponent per variable.
    #[error("generator {generator} has {found} exponents, expected {expected}")]
    VarCountMismatch {
        /// Number of variables of the ring.
        expected: usize,
        /// Number of exponents of the generator.
        found: usize,
        /// Index of the generator.
        generator: usize,
    },

    /// An exponent does not fit in a machine exponent.
    #[error("exponent of variable {var} in generator {generator} is too large")]
    ExponentOverflow {
        /// Index of the generator.
        generator: usize,
        /// Index of the variable.
        var: usize,
    },

    /// The computation itself failed.
    #[error(transparent)]
    Hilbert(#[from] HilbertError),
}
