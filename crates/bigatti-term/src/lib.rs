//! # bigatti-term
//!
//! Exponent vectors for monomial ideal computations.
//!
//! This crate provides:
//! - [`Term`], an owned exponent vector stored inline for small rings
//! - Slice-level operations (lcm, gcd, product, colon, divisibility,
//!   strict dominance) usable on generators stored in chunked ideal storage
//! - Lexicographic and degree orders on exponent slices
//! - [`TermPool`], a size-class pool with an injectable [`AllocationPolicy`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod pool;
pub mod term;

#[cfg(test)]
mod proptests;

pub use pool::{AllocError, AllocationPolicy, FailAfter, PoolStats, TermPool, Unlimited, WordBudget};
pub use term::{Exponent, Term};
