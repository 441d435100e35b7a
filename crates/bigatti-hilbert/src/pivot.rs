//! Pivot selection.
//!
//! A pivot is a pure power `x_var^exponent`. Both strategies pick it from
//! exponents that some generator actually has, on a variable that appears
//! in at least two generators. For a minimally generated ideal such a
//! power never lies in the ideal already, so both branches of the split
//! make progress.

use std::fmt;
use std::str::FromStr;

use bigatti_ideal::Ideal;
use bigatti_term::term::Exponent;
use tracing::debug;

use crate::error::HilbertError;

/// A pure power `x_var^exponent`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Pivot {
    /// Variable index.
    pub var: usize,
    /// Exponent, always positive.
    pub exponent: Exponent,
}

impl Pivot {
    /// Writes the pivot as an exponent vector into `out`.
    pub fn write_to(&self, out: &mut [Exponent]) {
        out.iter_mut().for_each(|e| *e = 0);
        out[self.var] = self.exponent;
    }
}

impl fmt::Display for Pivot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{}^{}", self.var, self.exponent)
    }
}

/// How the pivot of a split is chosen. Affects running time only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum PivotStrategy {
    /// The lower median of the positive exponents of the variable that
    /// appears in the most generators.
    #[default]
    Median,
    /// The (variable, exponent) pair shared by the most generators, or
    /// `Median` when no pair is shared.
    Typical,
}

impl PivotStrategy {
    /// All strategies, in name order.
    pub const ALL: [PivotStrategy; 2] = [PivotStrategy::Median, PivotStrategy::Typical];

    /// Returns the name accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            PivotStrategy::Median => "median",
            PivotStrategy::Typical => "typical",
        }
    }

    /// Chooses a pivot for `ideal`.
    ///
    /// Returns `None` if no variable appears in two generators. Such an
    /// ideal is always a base case.
    #[must_use]
    pub fn choose(self, ideal: &Ideal) -> Option<Pivot> {
        match self {
            PivotStrategy::Median => median_pivot(ideal),
            PivotStrategy::Typical => typical_pivot(ideal).or_else(|| {
                debug!(
                    generators = ideal.len(),
                    "no shared exponent, falling back to median pivot"
                );
                median_pivot(ideal)
            }),
        }
    }
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PivotStrategy {
    type Err = HilbertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PivotStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HilbertError::UnknownPivotStrategy(s.to_string()))
    }
}

fn median_pivot(ideal: &Ideal) -> Option<Pivot> {
    let counts = ideal.support_counts();
    // First variable with the largest count.
    let (var, &count) = counts
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.cmp(b.1).then(b.0.cmp(&a.0)))?;
    if count < 2 {
        return None;
    }

    let mut column: Vec<Exponent> = ideal
        .generators()
        .map(|g| g[var])
        .filter(|&e| e > 0)
        .collect();
    let mid = (column.len() - 1) / 2;
    let exponent = *column.select_nth_unstable(mid).1;
    Some(Pivot { var, exponent })
}

/// Most frequent positive (variable, exponent) pair. Ties go to the lower
/// variable, then the lower exponent. `None` if every pair is unique.
fn typical_pivot(ideal: &Ideal) -> Option<Pivot> {
    let mut best: Option<(usize, Pivot)> = None;
    let mut column: Vec<Exponent> = Vec::with_capacity(ideal.len());

    for var in 0..ideal.var_count() {
        column.clear();
        column.extend(ideal.generators().map(|g| g[var]).filter(|&e| e > 0));
        column.sort_unstable();

        for run in column.chunk_by(|a, b| a == b) {
            let better = best.map_or(true, |(count, _)| run.len() > count);
            if better {
                best = Some((
                    run.len(),
                    Pivot {
                        var,
                        exponent: run[0],
                    },
                ));
            }
        }
    }

    best.filter(|&(count, _)| count >= 2).map(|(_, pivot)| pivot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ideal(var_count: usize, gens: &[&[Exponent]]) -> Ideal {
        Ideal::from_generators(var_count, gens.iter().copied())
    }

    #[test]
    fn test_parse() {
        assert_eq!("median".parse::<PivotStrategy>(), Ok(PivotStrategy::Median));
        assert_eq!("Typical".parse::<PivotStrategy>(), Ok(PivotStrategy::Typical));
        assert_eq!(
            "random".parse::<PivotStrategy>(),
            Err(HilbertError::UnknownPivotStrategy("random".to_string()))
        );
        for strategy in PivotStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<PivotStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_median() {
        // y appears in four generators: x y^4, x^2 y^3, x^3 y, y z^2.
        let i = ideal(3, &[&[1, 4, 0], &[2, 3, 0], &[3, 1, 0], &[0, 1, 2]]);
        let pivot = PivotStrategy::Median.choose(&i);
        // Positive y exponents 1, 1, 3, 4: lower median 1.
        assert_eq!(pivot, Some(Pivot { var: 1, exponent: 1 }));
    }

    #[test]
    fn test_median_tie_goes_to_first_variable() {
        // (x^3 y, x y^3, x^2 y^2): both variables appear everywhere.
        let i = ideal(2, &[&[3, 1], &[1, 3], &[2, 2]]);
        assert_eq!(
            PivotStrategy::Median.choose(&i),
            Some(Pivot { var: 0, exponent: 2 })
        );
    }

    #[test]
    fn test_median_never_hits_pure_power() {
        // (x^3, x y, x^2 z): the pure power x^3 is the unique largest
        // exponent, so the median stays below it.
        let i = ideal(3, &[&[3, 0, 0], &[1, 1, 0], &[2, 0, 1]]);
        let pivot = PivotStrategy::Median.choose(&i);
        assert_eq!(pivot, Some(Pivot { var: 0, exponent: 2 }));

        let mut t = vec![0; 3];
        if let Some(p) = pivot {
            p.write_to(&mut t);
        }
        assert!(!i.contains(&t));
    }

    #[test]
    fn test_typical() {
        // z^2 is shared by x^3 z^2, x y z^2 and y^3 z^2.
        let i = ideal(
            3,
            &[&[3, 0, 2], &[1, 1, 2], &[0, 3, 2], &[4, 0, 0], &[0, 4, 0]],
        );
        assert_eq!(
            PivotStrategy::Typical.choose(&i),
            Some(Pivot { var: 2, exponent: 2 })
        );
    }

    #[test]
    fn test_typical_falls_back_to_median() {
        // Every (variable, exponent) pair is unique.
        let i = ideal(2, &[&[3, 1], &[2, 2], &[1, 3]]);
        assert_eq!(
            PivotStrategy::Typical.choose(&i),
            PivotStrategy::Median.choose(&i)
        );
    }

    #[test]
    fn test_disjoint_support_has_no_pivot() {
        let i = ideal(3, &[&[2, 0, 0], &[0, 1, 1]]);
        assert_eq!(PivotStrategy::Median.choose(&i), None);
        assert_eq!(PivotStrategy::Typical.choose(&i), None);
    }
}
