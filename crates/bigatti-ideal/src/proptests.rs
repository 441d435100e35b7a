//! Property-based tests for minimization and reminimization.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use bigatti_term::term::{self, Exponent};

    use crate::ideal::Ideal;

    // Small ideals: up to 5 variables, up to 14 generators, exponents below 5.
    fn small_ideal() -> impl Strategy<Value = Ideal> {
        (1usize..=5).prop_flat_map(|n| {
            proptest::collection::vec(proptest::collection::vec(0 as Exponent..5, n), 0..14)
                .prop_map(move |gens| Ideal::from_generators(n, gens))
        })
    }

    fn minimal_ideal() -> impl Strategy<Value = Ideal> {
        small_ideal().prop_map(|mut i| {
            i.minimize();
            i
        })
    }

    // A minimal ideal together with a pivot over the same ring.
    fn ideal_and_pivot() -> impl Strategy<Value = (Ideal, Vec<Exponent>)> {
        minimal_ideal().prop_flat_map(|i| {
            let n = i.var_count();
            (Just(i), proptest::collection::vec(0 as Exponent..4, n))
        })
    }

    // A minimal ideal and a single-variable power pivot.
    fn ideal_and_var_pivot() -> impl Strategy<Value = (Ideal, Vec<Exponent>)> {
        minimal_ideal().prop_flat_map(|i| {
            let n = i.var_count();
            (Just(i), 0..n, 1 as Exponent..5).prop_map(move |(i, var, e)| {
                let mut pivot = vec![0; n];
                pivot[var] = e;
                (i, pivot)
            })
        })
    }

    // Reference: keep g iff no other generator (or earlier equal copy) divides it.
    fn naive_minimize(ideal: &Ideal) -> Ideal {
        let gens: Vec<&[Exponent]> = ideal.generators().collect();
        let mut kept = Ideal::new(ideal.var_count());
        for (i, g) in gens.iter().enumerate() {
            let redundant = gens.iter().enumerate().any(|(j, h)| {
                j != i && term::divides(h, g) && (h != g || j < i)
            });
            if !redundant {
                kept.insert(g);
            }
        }
        kept
    }

    proptest! {
        #[test]
        fn minimize_is_idempotent(i in small_ideal()) {
            let mut once = i.clone();
            once.minimize();
            let mut twice = once.clone();
            prop_assert!(!twice.minimize());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn minimize_yields_antichain(i in small_ideal()) {
            let mut m = i.clone();
            m.minimize();
            prop_assert!(m.is_minimally_generated());
            // Same ideal: every original generator is still contained.
            for g in i.generators() {
                prop_assert!(m.contains(g));
            }
        }

        #[test]
        fn minimize_matches_naive(i in small_ideal()) {
            let mut m = i.clone();
            m.minimize();
            prop_assert_eq!(m, naive_minimize(&i));
        }

        #[test]
        fn partition_matches_quadratic(i in small_ideal()) {
            let mut partitioned = i.clone();
            let mut quadratic = i;
            partitioned.minimize_with_threshold(2);
            quadratic.minimize_with_threshold(usize::MAX);
            prop_assert_eq!(partitioned, quadratic);
        }

        #[test]
        fn colon_reminimize_matches_naive((i, pivot) in ideal_and_pivot()) {
            let mut fast = i.clone();
            let before = fast.len();
            let changed = fast.colon_reminimize(&pivot);

            let mut slow = i;
            slow.colon(&pivot);
            slow.minimize();

            prop_assert!(fast.is_minimally_generated());
            prop_assert_eq!(changed, fast.len() != before);
            prop_assert_eq!(fast, slow);
        }

        #[test]
        fn colon_reminimize_single_variable((i, pivot) in ideal_and_var_pivot()) {
            let mut fast = i.clone();
            fast.colon_reminimize(&pivot);

            let mut slow = i;
            slow.colon(&pivot);
            slow.minimize();

            prop_assert_eq!(fast, slow);
        }

        #[test]
        fn insert_reminimize_matches_naive((i, t) in ideal_and_pivot()) {
            let mut fast = i.clone();
            fast.insert_reminimize(&t);

            let mut slow = i;
            slow.insert(&t);
            slow.minimize();

            prop_assert!(fast.is_minimally_generated());
            prop_assert_eq!(fast, slow);
        }

        #[test]
        fn strong_genericity_implies_weak(i in minimal_ideal()) {
            if i.is_strongly_generic() {
                prop_assert!(i.is_weakly_generic());
            }
        }
    }
}
