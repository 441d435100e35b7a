//! # bigatti
//!
//! Hilbert-Poincare series numerators of monomial ideals, computed with
//! Bigatti's pivot algorithm, and Scarf decompositions of generic ideals.
//!
//! This crate is the entry point: it accepts a [`BigIdeal`] with
//! arbitrary-precision exponents, minimizes it, and streams the numerator
//! to a [`TermConsumer`].
//!
//! ## Quick Start
//!
//! ```
//! use bigatti::prelude::*;
//!
//! // (x^2, y^2) over x, y
//! let mut ideal = BigIdeal::new(vec!["x".into(), "y".into()]);
//! ideal.push_exponents(&[2, 0]);
//! ideal.push_exponents(&[0, 2]);
//!
//! let mut out = CollectedPolynomial::new();
//! hilbert_numerator(&ideal, &HilbertConfig::default(), &mut out).unwrap();
//! assert_eq!(out.terms.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod big_ideal;
pub mod error;

#[cfg(test)]
mod proptests;

pub use bigatti_hilbert as hilbert;
pub use bigatti_ideal as ideal;
pub use bigatti_term as term;

pub use big_ideal::{hilbert_numerator, univariate_hilbert_numerator, BigIdeal};
pub use bigatti_hilbert::{
    scarf_decomposition, CollectedPolynomial, HashPolynomial, HilbertConfig, HilbertEngine,
    HilbertError, PivotStrategy, TermConsumer,
};
pub use error::InputError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::big_ideal::{hilbert_numerator, univariate_hilbert_numerator, BigIdeal};
    pub use crate::error::InputError;
    pub use bigatti_hilbert::{
        scarf_decomposition, CollectedPolynomial, HashPolynomial, HilbertConfig, HilbertEngine,
        PivotStrategy, TermConsumer,
    };
    pub use bigatti_ideal::Ideal;
    pub use bigatti_term::{Exponent, Term};
}
