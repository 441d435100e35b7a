//! Incremental reminimization after a colon or an insertion.
//!
//! Both operations start from a minimally generated ideal and only compare
//! the generators that can actually have become redundant, instead of
//! minimizing from scratch.

use bigatti_term::term::{self, Exponent};

use crate::ideal::Ideal;
use crate::minimize::minimize_quadratic;

/// How a generator was affected by a colon.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ColonClass {
    /// Untouched by the colon.
    Unchanged,
    /// Reduced, but still positive on the pivot variable.
    Reduced,
    /// Reduced to zero on the pivot variable (or, for a general pivot,
    /// reduced in any way).
    Zeroed,
}

impl Ideal {
    /// Replaces the ideal by `I : pivot` and restores minimality.
    ///
    /// Generators reduced but still positive on a single-variable pivot
    /// cannot become redundant and are moved to the front untouched. The
    /// remaining reduced generators are minimized among themselves, and the
    /// untouched ones are then checked against them only: an untouched
    /// generator can never divide a reduced one.
    ///
    /// Returns true if the number of generators changed.
    ///
    /// # Panics
    ///
    /// Panics if `pivot` does not have `var_count` exponents.
    pub fn colon_reminimize(&mut self, pivot: &[Exponent]) -> bool {
        assert_eq!(pivot.len(), self.var_count(), "variable count mismatch");
        debug_assert!(self.is_minimally_generated());

        let single_var = match term::support_size(pivot) {
            0 => return false,
            1 => pivot.iter().position(|&e| e > 0),
            _ => None,
        };

        let mut classes = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            let g = self.generator_mut(i);
            let class = match single_var {
                Some(var) => {
                    let e = pivot[var];
                    if g[var] == 0 {
                        ColonClass::Unchanged
                    } else if g[var] > e {
                        g[var] -= e;
                        ColonClass::Reduced
                    } else {
                        g[var] = 0;
                        ColonClass::Zeroed
                    }
                }
                None => {
                    if term::is_coprime(g, pivot) {
                        ColonClass::Unchanged
                    } else {
                        for (x, &p) in g.iter_mut().zip(pivot) {
                            *x = x.saturating_sub(p);
                        }
                        ColonClass::Zeroed
                    }
                }
            };
            classes.push(class);
        }

        let pick = |class: ColonClass| -> Vec<usize> {
            (0..classes.len()).filter(|&i| classes[i] == class).collect()
        };
        let mut order = pick(ColonClass::Reduced);
        let mut zeroed = pick(ColonClass::Zeroed);
        let mut unchanged = pick(ColonClass::Unchanged);

        minimize_quadratic(self, &mut zeroed);
        unchanged.retain(|&u| {
            let g = self.generator(u);
            !zeroed.iter().any(|&z| term::divides(self.generator(z), g))
        });

        order.append(&mut zeroed);
        order.append(&mut unchanged);

        let changed = order.len() != self.len();
        self.gather(&order);
        changed
    }

    /// Adds `t` as a generator and removes the generators it divides.
    ///
    /// Does nothing if `t` already lies in the ideal. Returns true if the
    /// ideal changed.
    ///
    /// # Panics
    ///
    /// Panics if `t` does not have `var_count` exponents.
    pub fn insert_reminimize(&mut self, t: &[Exponent]) -> bool {
        assert_eq!(t.len(), self.var_count(), "variable count mismatch");
        if self.contains(t) {
            return false;
        }
        self.retain(|g| !term::divides(t, g));
        self.insert(t);
        true
    }
}
