//! Scarf complex of a weakly generic ideal.

use bigatti_ideal::Ideal;
use bigatti_term::term;
use bigatti_term::{Term, TermPool};
use tracing::debug;

use crate::error::HilbertError;
use crate::sign::{Sign, SignedTerm};
use crate::subset::{SubsetWalker, WalkMode};

/// Returns the faces of the Scarf complex of `ideal` as signed terms.
///
/// Each face `F` contributes `(-1)^|F| * lcm(F)`, and their sum is the
/// numerator of the Hilbert-Poincare series. Faces are listed in subset
/// walk order, with the empty face last.
///
/// # Errors
///
/// Returns [`HilbertError::NotGeneric`] if `ideal` is not weakly generic.
pub fn scarf_decomposition(ideal: &Ideal) -> Result<Vec<SignedTerm>, HilbertError> {
    debug_assert!(ideal.is_minimally_generated());
    if !ideal.is_weakly_generic() {
        return Err(HilbertError::NotGeneric);
    }

    let identity = Term::identity(ideal.var_count());
    if ideal.generators().any(term::is_identity) {
        // The unit ideal: its only generator lies strictly below itself.
        return Ok(vec![
            SignedTerm::new(Sign::Minus, identity.clone()),
            SignedTerm::new(Sign::Plus, identity),
        ]);
    }

    let mut pool = TermPool::new();
    let mut walker = SubsetWalker::new();
    let mut faces: Vec<SignedTerm> = Vec::new();
    let counts = walker.walk(
        ideal,
        &identity,
        Sign::Plus,
        WalkMode::Prune,
        &mut pool,
        &mut faces,
    )?;

    debug!(
        generators = ideal.len(),
        faces = counts.emitted,
        pruned = counts.pruned,
        "Scarf decomposition"
    );
    Ok(faces)
}
