//! Errors reported by the Hilbert series computation.

use bigatti_term::AllocError;
use thiserror::Error;

/// Errors that can occur while computing a Hilbert series numerator or a
/// Scarf decomposition.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HilbertError {
    /// Term or ideal storage could not be allocated. The computation is
    /// abandoned and every live recursion state has been released.
    #[error(transparent)]
    OutOfMemory(#[from] AllocError),

    /// The Scarf decomposition was requested for an ideal that is not
    /// weakly generic.
    #[error("ideal is not weakly generic")]
    NotGeneric,

    /// No pivot strategy has the given name.
    #[error("unknown pivot strategy '{0}'")]
    UnknownPivotStrategy(String),
}
