//! # bigatti-hilbert
//!
//! Hilbert-Poincare series numerators of monomial ideals by Bigatti's
//! pivot algorithm.
//!
//! This crate provides:
//! - [`HilbertEngine`], the pivot recursion driven by an explicit worklist
//! - Base cases: the empty ideal, one or two generators, unique-maximal
//!   ideals (Taylor sum) and weakly generic ideals (Scarf sum)
//! - [`scarf_decomposition`] for weakly generic ideals
//! - [`HashPolynomial`], a cancelling accumulator, and the
//!   [`TermConsumer`] output boundary
//!
//! # Example
//!
//! ```
//! use bigatti_hilbert::{HilbertConfig, HilbertEngine};
//! use bigatti_ideal::Ideal;
//!
//! // (x^2, y^2) -> 1 - x^2 - y^2 + x^2 y^2
//! let ideal = Ideal::from_generators(2, [[2u32, 0], [0, 2]]);
//! let mut engine = HilbertEngine::new(HilbertConfig::default());
//! let numerator = engine.compute(&ideal).unwrap();
//! assert_eq!(numerator.len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod base_case;
pub mod config;
pub mod consumer;
pub mod engine;
pub mod error;
pub mod pivot;
pub mod polynomial;
pub mod scarf;
pub mod sign;
pub mod state;
pub mod stats;
pub mod subset;

#[cfg(test)]
mod proptests;

pub use base_case::{BaseCaseKind, BaseCaseSolver};
pub use config::HilbertConfig;
pub use consumer::{CollectedPolynomial, TermConsumer};
pub use engine::HilbertEngine;
pub use error::HilbertError;
pub use pivot::{Pivot, PivotStrategy};
pub use polynomial::{HashPolynomial, SignedTermSink};
pub use scarf::scarf_decomposition;
pub use sign::{Sign, SignedTerm};
pub use state::RecursionState;
pub use stats::HilbertStats;
