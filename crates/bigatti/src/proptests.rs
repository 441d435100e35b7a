//! Property-based tests for the input boundary.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use bigatti_hilbert::{HilbertConfig, PivotStrategy};

    use crate::big_ideal::{univariate_hilbert_numerator, BigIdeal};

    // Unminimized input: duplicates and redundant generators included.
    fn big_ideal() -> impl Strategy<Value = BigIdeal> {
        (1usize..=4).prop_flat_map(|n| {
            proptest::collection::vec(proptest::collection::vec(0u64..4, n), 0..9).prop_map(
                move |gens| {
                    let mut ideal = BigIdeal::with_var_count(n);
                    for g in &gens {
                        ideal.push_exponents(g);
                    }
                    ideal
                },
            )
        })
    }

    proptest! {
        #[test]
        fn redundant_generators_do_not_matter(big in big_ideal()) {
            let minimal = big.to_ideal().unwrap();
            let mut reduced = BigIdeal::with_var_count(big.var_count());
            for g in minimal.generators() {
                let exps: Vec<u64> = g.iter().map(|&e| u64::from(e)).collect();
                reduced.push_exponents(&exps);
            }

            let config = HilbertConfig::default();
            prop_assert_eq!(
                univariate_hilbert_numerator(&big, &config).unwrap(),
                univariate_hilbert_numerator(&reduced, &config).unwrap()
            );
        }

        #[test]
        fn partition_threshold_does_not_matter(big in big_ideal()) {
            let quadratic = big.to_ideal().unwrap();
            let partitioned = big.to_ideal_with_threshold(2).unwrap();
            prop_assert_eq!(&quadratic, &partitioned);

            let config = HilbertConfig {
                pivot: PivotStrategy::Typical,
                minimize_partition_threshold: 2,
                ..HilbertConfig::default()
            };
            prop_assert_eq!(
                univariate_hilbert_numerator(&big, &config).unwrap(),
                univariate_hilbert_numerator(&big, &HilbertConfig::default()).unwrap()
            );
        }

        #[test]
        fn numerator_vanishes_at_one_for_nonzero_ideals(big in big_ideal()) {
            // N(1) = 0 unless the ideal is zero, since S/I then has
            // dimension below the number of variables.
            prop_assume!(!big.generators.is_empty());
            let numerator = univariate_hilbert_numerator(&big, &HilbertConfig::default()).unwrap();
            let sum = numerator
                .iter()
                .fold(dashu::integer::IBig::ZERO, |acc, (_, c)| acc + c);
            prop_assert_eq!(sum, dashu::integer::IBig::ZERO);
        }
    }
}
