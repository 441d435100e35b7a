//! # bigatti-ideal
//!
//! Minimally generated monomial ideals.
//!
//! This crate provides:
//! - [`Ideal`], a generator list stored as one chunked exponent buffer
//! - Minimization by lexicographic sweep, staircase scan (two variables) or
//!   recursive spatial partition (large generator sets)
//! - Incremental reminimization after a colon by a pivot or the insertion of
//!   a new generator
//! - Shape queries used by the Hilbert series base cases: support counts,
//!   disjoint support, weak and strong genericity

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ideal;
pub mod minimize;
pub mod reminimize;

#[cfg(test)]
mod proptests;

pub use ideal::Ideal;
pub use minimize::DEFAULT_PARTITION_THRESHOLD;
