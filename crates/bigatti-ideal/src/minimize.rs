//! Removal of redundant generators.
//!
//! Three strategies, selected by shape:
//! - At most two variables: sort and sweep the staircase in linear time.
//! - Fewer generators than the partition threshold: lexicographic sort,
//!   then compare each generator against the generators already accepted.
//!   A divisor always sorts before its multiples, so one pass suffices.
//! - Large sets: split on the variable with the largest lcm exponent,
//!   minimize both halves recursively and only compare across the halves in
//!   one direction.

use bigatti_term::term::{self, Exponent};

use crate::ideal::Ideal;

/// Generator count from which [`Ideal::minimize`] switches to the spatial
/// partition.
pub const DEFAULT_PARTITION_THRESHOLD: usize = 1000;

impl Ideal {
    /// Removes every generator that is divisible by another generator.
    ///
    /// Duplicates are collapsed to a single copy. Returns true if any
    /// generator was removed.
    pub fn minimize(&mut self) -> bool {
        self.minimize_with_threshold(DEFAULT_PARTITION_THRESHOLD)
    }

    /// Like [`Ideal::minimize`], with an explicit generator count from which
    /// the spatial partition is used.
    pub fn minimize_with_threshold(&mut self, threshold: usize) -> bool {
        let before = self.len();
        let mut indices: Vec<usize> = (0..before).collect();

        match self.var_count() {
            0 => indices.truncate(1),
            1 => {
                if let Some(&min) = indices.iter().min_by_key(|&&i| self.generator(i)[0]) {
                    indices = vec![min];
                }
            }
            2 => minimize_two_vars(self, &mut indices),
            _ => minimize_indices(self, &mut indices, threshold.max(2)),
        }

        if indices.len() == before {
            return false;
        }
        self.gather(&indices);
        true
    }
}

/// Sweeps the staircase of a two-variable ideal.
///
/// After sorting by the first exponent (ties by the second), a generator is
/// minimal exactly when its second exponent is below every second exponent
/// seen so far.
fn minimize_two_vars(ideal: &Ideal, indices: &mut Vec<usize>) {
    indices.sort_by(|&a, &b| term::cmp_lex(ideal.generator(a), ideal.generator(b)));

    let mut min_y = Exponent::MAX;
    let mut first = true;
    indices.retain(|&i| {
        let y = ideal.generator(i)[1];
        if first || y < min_y {
            first = false;
            min_y = y;
            true
        } else {
            false
        }
    });
}

fn minimize_indices(ideal: &Ideal, indices: &mut Vec<usize>, threshold: usize) {
    if indices.len() < threshold {
        minimize_quadratic(ideal, indices);
    } else {
        minimize_partition(ideal, indices, threshold);
    }
}

/// Lexicographic sort followed by comparison against accepted generators.
pub(crate) fn minimize_quadratic(ideal: &Ideal, indices: &mut Vec<usize>) {
    indices.sort_by(|&a, &b| term::cmp_lex(ideal.generator(a), ideal.generator(b)));

    let mut accepted: Vec<usize> = Vec::with_capacity(indices.len());
    for &i in indices.iter() {
        let g = ideal.generator(i);
        if !accepted.iter().any(|&a| term::divides(ideal.generator(a), g)) {
            accepted.push(i);
        }
    }
    *indices = accepted;
}

/// Recursive spatial partition.
///
/// Generators whose exponent on the split variable is at most the split
/// value can never be divided by one whose exponent is above it, so after
/// both halves are minimal only the upper half needs checking against the
/// lower one.
fn minimize_partition(ideal: &Ideal, indices: &mut Vec<usize>, threshold: usize) {
    let mut lcm = vec![0; ideal.var_count()];
    for &i in indices.iter() {
        for (l, &e) in lcm.iter_mut().zip(ideal.generator(i)) {
            *l = (*l).max(e);
        }
    }
    let Some((var, &max)) = lcm.iter().enumerate().max_by_key(|&(_, &e)| e) else {
        minimize_quadratic(ideal, indices);
        return;
    };

    let (mut low, mut high) = split_at_value(ideal, indices, var, max / 4);
    if low.is_empty() || high.is_empty() {
        let median = median_exponent(ideal, indices, var);
        (low, high) = split_at_value(ideal, indices, var, median);
    }
    if low.is_empty() || high.is_empty() {
        minimize_quadratic(ideal, indices);
        return;
    }

    minimize_indices(ideal, &mut low, threshold);
    minimize_indices(ideal, &mut high, threshold);

    high.retain(|&h| {
        let g = ideal.generator(h);
        !low.iter().any(|&l| term::divides(ideal.generator(l), g))
    });

    low.append(&mut high);
    *indices = low;
}

fn split_at_value(
    ideal: &Ideal,
    indices: &[usize],
    var: usize,
    value: Exponent,
) -> (Vec<usize>, Vec<usize>) {
    indices
        .iter()
        .copied()
        .partition(|&i| ideal.generator(i)[var] <= value)
}

/// Lower median of the exponents of `var`.
fn median_exponent(ideal: &Ideal, indices: &[usize], var: usize) -> Exponent {
    let mut column: Vec<Exponent> = indices.iter().map(|&i| ideal.generator(i)[var]).collect();
    let mid = (column.len() - 1) / 2;
    *column.select_nth_unstable(mid).1
}
