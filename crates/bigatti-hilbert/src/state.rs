//! Nodes of the pivot recursion.

use bigatti_ideal::Ideal;
use bigatti_term::Term;

use crate::sign::Sign;

/// One node of the recursion: the ideal still to resolve and the term its
/// numerator is shifted by.
///
/// A state exclusively owns its ideal and multiplier. A split turns the
/// state itself into one branch and copies it for the other.
#[derive(Clone, Debug)]
pub struct RecursionState {
    /// Minimally generated ideal still to resolve.
    pub ideal: Ideal,
    /// Term every emitted term is multiplied by.
    pub multiplier: Term,
    /// Sign every emitted term is multiplied by.
    pub sign: Sign,
    /// Number of splits between this node and the root.
    pub depth: usize,
}
