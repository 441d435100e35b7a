//! Property-based tests for the series computation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use bigatti_ideal::Ideal;
    use bigatti_term::term::{self, Exponent};
    use bigatti_term::{FailAfter, Term};
    use dashu::integer::IBig;

    use crate::config::HilbertConfig;
    use crate::engine::HilbertEngine;
    use crate::error::HilbertError;
    use crate::pivot::PivotStrategy;
    use crate::polynomial::HashPolynomial;
    use crate::scarf::scarf_decomposition;
    use crate::sign::Sign;

    // Minimal ideals with up to 4 variables and 7 generators, exponents
    // below 4, small enough for the Taylor sum.
    fn small_ideal() -> impl Strategy<Value = Ideal> {
        (1usize..=4).prop_flat_map(|n| {
            proptest::collection::vec(proptest::collection::vec(0 as Exponent..4, n), 0..8)
                .prop_map(move |gens| {
                    let mut ideal = Ideal::from_generators(n, gens);
                    ideal.minimize();
                    ideal
                })
        })
    }

    fn ideal_and_term() -> impl Strategy<Value = (Ideal, Vec<Exponent>)> {
        small_ideal().prop_flat_map(|i| {
            let n = i.var_count();
            (Just(i), proptest::collection::vec(0 as Exponent..4, n))
        })
    }

    // Strongly generic ideals: generator i has exponent k * len + i + 1 or
    // zero on every variable, so no two generators share a positive
    // exponent. The unit ideal is left out.
    fn generic_ideal() -> impl Strategy<Value = Ideal> {
        (1usize..=4, 1usize..=6).prop_flat_map(|(n, len)| {
            proptest::collection::vec(proptest::collection::vec(0u32..3, n), len).prop_map(
                move |choices| {
                    let gens = choices
                        .iter()
                        .enumerate()
                        .map(|(i, row)| {
                            row.iter()
                                .map(|&k| match k {
                                    0 => 0,
                                    _ => (k - 1) * len as Exponent + i as Exponent + 1,
                                })
                                .collect::<Vec<Exponent>>()
                        })
                        .filter(|g| !term::is_identity(g));
                    let mut ideal = Ideal::from_generators(n, gens);
                    ideal.minimize();
                    ideal
                },
            )
        })
    }

    // Sum over all subsets S of (-1)^|S| x^lcm(S).
    fn taylor_sum(ideal: &Ideal) -> HashPolynomial {
        let mut p = HashPolynomial::new(ideal.var_count());
        for mask in 0u32..(1 << ideal.len()) {
            let mut lcm = Term::identity(ideal.var_count());
            for (i, g) in ideal.generators().enumerate() {
                if mask & (1 << i) != 0 {
                    lcm.lcm_assign(g);
                }
            }
            p.add_sign(Sign::parity(mask.count_ones() as usize), &lcm);
        }
        p
    }

    fn compute(ideal: &Ideal, config: HilbertConfig) -> HashPolynomial {
        HilbertEngine::new(config).compute(ideal).unwrap()
    }

    proptest! {
        #[test]
        fn engine_matches_taylor_sum(i in small_ideal()) {
            prop_assert_eq!(compute(&i, HilbertConfig::default()), taylor_sum(&i));
        }

        #[test]
        fn options_do_not_change_result(i in small_ideal()) {
            let reference = compute(&i, HilbertConfig::default());
            let variants = [
                HilbertConfig { pivot: PivotStrategy::Typical, ..HilbertConfig::default() },
                HilbertConfig { use_gcd_simplification: false, ..HilbertConfig::default() },
                HilbertConfig { use_generic_base_case: false, ..HilbertConfig::default() },
            ];
            for config in variants {
                prop_assert_eq!(&compute(&i, config), &reference);
            }
        }

        #[test]
        fn exact_sequence_additivity((i, p) in ideal_and_term()) {
            let n = i.var_count();
            let mut engine = HilbertEngine::default();

            let mut whole = HashPolynomial::new(n);
            engine.resolve_into(&i, &vec![0; n], &mut whole).unwrap();

            let mut inserted = i.clone();
            inserted.insert_reminimize(&p);
            let mut colon = i;
            colon.colon_reminimize(&p);

            let mut split = HashPolynomial::new(n);
            engine.resolve_into(&inserted, &vec![0; n], &mut split).unwrap();
            engine.resolve_into(&colon, &p, &mut split).unwrap();

            prop_assert_eq!(split, whole);
        }

        #[test]
        fn cancellation_leaves_nothing(
            entries in proptest::collection::vec(
                (-20i64..20, proptest::collection::vec(0 as Exponent..3, 3)),
                0..20,
            )
        ) {
            let mut p = HashPolynomial::new(3);
            for (c, t) in &entries {
                p.add(&IBig::from(*c), t);
            }
            prop_assert!(p.iter().all(|(_, c)| *c != IBig::ZERO));
            for (c, t) in &entries {
                p.sub(&IBig::from(*c), t);
            }
            prop_assert!(p.is_empty());
        }

        #[test]
        fn scarf_sum_matches_taylor_sum(i in generic_ideal()) {
            prop_assert!(i.is_strongly_generic());
            let faces = scarf_decomposition(&i).unwrap();

            let mut scarf = HashPolynomial::new(i.var_count());
            for face in &faces {
                scarf.add_sign(face.sign, &face.term);
            }
            prop_assert_eq!(&scarf, &taylor_sum(&i));
            prop_assert_eq!(&scarf, &compute(&i, HilbertConfig::default()));

            // Distinct faces of a generic ideal have distinct lcms.
            let mut lcms: Vec<&Term> = faces.iter().map(|f| &f.term).collect();
            lcms.sort_by(|a, b| term::cmp_lex(a, b));
            lcms.dedup();
            prop_assert_eq!(lcms.len(), faces.len());
        }

        #[test]
        fn scarf_sum_matches_taylor_sum_when_weakly_generic(i in small_ideal()) {
            match scarf_decomposition(&i) {
                Ok(faces) => {
                    prop_assert!(i.is_weakly_generic());
                    let mut scarf = HashPolynomial::new(i.var_count());
                    for face in &faces {
                        scarf.add_sign(face.sign, &face.term);
                    }
                    prop_assert_eq!(&scarf, &taylor_sum(&i));
                }
                Err(err) => {
                    prop_assert_eq!(err, HilbertError::NotGeneric);
                    prop_assert!(!i.is_weakly_generic());
                }
            }
        }

        #[test]
        fn allocation_failure_is_reported(i in small_ideal(), limit in 0usize..40) {
            let reference = compute(&i, HilbertConfig::default());
            let mut engine = HilbertEngine::with_policy(HilbertConfig::default(), FailAfter::new(limit));
            match engine.compute(&i) {
                Ok(p) => prop_assert_eq!(p, reference),
                Err(err) => prop_assert!(matches!(err, HilbertError::OutOfMemory(_))),
            }
        }
    }
}
