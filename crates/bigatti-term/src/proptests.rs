//! Property-based tests for term operations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::term::{
        cmp_lex, divides, is_coprime, strictly_below, strictly_divides, total_degree, Exponent,
        Term,
    };

    // Pairs of terms over the same small ring.
    fn term_pair() -> impl Strategy<Value = (Term, Term)> {
        (1usize..6).prop_flat_map(|n| {
            (
                proptest::collection::vec(0 as Exponent..6, n),
                proptest::collection::vec(0 as Exponent..6, n),
            )
                .prop_map(|(a, b)| (Term::from(a), Term::from(b)))
        })
    }

    proptest! {
        #[test]
        fn lcm_is_common_multiple((a, b) in term_pair()) {
            let l = a.lcm(&b);
            prop_assert!(divides(&a, &l));
            prop_assert!(divides(&b, &l));
            prop_assert_eq!(l, b.lcm(&a));
        }

        #[test]
        fn gcd_is_common_divisor((a, b) in term_pair()) {
            let g = a.gcd(&b);
            prop_assert!(divides(&g, &a));
            prop_assert!(divides(&g, &b));
            // gcd * lcm = a * b
            prop_assert_eq!(g.product(&a.lcm(&b)), a.product(&b));
        }

        #[test]
        fn colon_undoes_product((a, b) in term_pair()) {
            prop_assert_eq!(a.product(&b).colon(&b), a.clone());
            // (a : b) * b is the smallest multiple of b divisible by a.
            let back = a.colon(&b).product(&b);
            prop_assert!(divides(&a, &back));
            prop_assert_eq!(back, a.lcm(&b));
        }

        #[test]
        fn divisibility_matches_colon((a, b) in term_pair()) {
            let quotient = a.colon(&b);
            prop_assert_eq!(divides(&a, &b), crate::term::is_identity(&quotient));
        }

        #[test]
        fn strict_relations_refine_divisibility((a, b) in term_pair()) {
            if strictly_divides(&a, &b) {
                prop_assert!(divides(&a, &b));
                prop_assert!(total_degree(&a) < total_degree(&b));
            }
            if strictly_below(&a, &b) {
                prop_assert!(divides(&a, &b));
                prop_assert!(!strictly_below(&b, &a) || crate::term::is_identity(&b));
            }
        }

        #[test]
        fn coprime_lcm_is_product((a, b) in term_pair()) {
            if is_coprime(&a, &b) {
                prop_assert_eq!(a.lcm(&b), a.product(&b));
            }
        }

        #[test]
        fn lex_extends_divisibility((a, b) in term_pair()) {
            if divides(&a, &b) {
                prop_assert_ne!(cmp_lex(&a, &b), std::cmp::Ordering::Greater);
            }
        }
    }
}
