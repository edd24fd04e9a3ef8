//! Bit-string genetic operators.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: with probability `pc`, cut both parents at
//!   the same position in `1..L` and swap tails; otherwise copy the parents.
//!
//! # Mutation
//!
//! - [`bit_flip_mutation`]: flip every position independently with
//!   probability `pm`. Any number of flips from 0 to L can occur.
//!
//! Both operators return new chromosomes and leave their inputs untouched.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 3

use super::encoding::Chromosome;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// Draws `u ∈ [0, 1)`; when `u < pc` a cut point is drawn uniformly from
/// `1..L` (never `0` or `L`) and the children are
///
/// ```text
/// child1 = a[..cut] ++ b[cut..]
/// child2 = b[..cut] ++ a[cut..]
/// ```
///
/// Otherwise the children are copies of `(a, b)`. A one-bit chromosome has
/// no interior cut, so it is always copied.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    a: &Chromosome,
    b: &Chromosome,
    pc: f64,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let n = a.len();
    assert_eq!(n, b.len(), "parents must have equal length");

    if rng.random::<f64>() >= pc || n < 2 {
        return (a.clone(), b.clone());
    }

    let cut = rng.random_range(1..n);
    tracing::trace!(cut, "single-point crossover");
    (splice(a, b, cut), splice(b, a, cut))
}

/// `head[..cut] ++ tail[cut..]`.
fn splice(head: &Chromosome, tail: &Chromosome, cut: usize) -> Chromosome {
    let mut bits = Vec::with_capacity(head.len());
    bits.extend_from_slice(&head.bits()[..cut]);
    bits.extend_from_slice(&tail.bits()[cut..]);
    Chromosome::from_bits(bits)
}

// ============================================================================
// Mutation
// ============================================================================

/// Independent per-bit flip mutation.
///
/// Each position draws `u ∈ [0, 1)` and is flipped when `u < pm`, so
/// `pm = 0` is the identity and `pm = 1` the exact complement.
pub fn bit_flip_mutation<R: Rng>(chromosome: &Chromosome, pm: f64, rng: &mut R) -> Chromosome {
    let bits = chromosome
        .bits()
        .iter()
        .map(|&bit| if rng.random::<f64>() < pm { !bit } else { bit })
        .collect();
    Chromosome::from_bits(bits)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn c(s: &str) -> Chromosome {
        s.parse().unwrap()
    }

    /// Returns the cut that produced `children`, if they are a valid
    /// single-point recombination of `a` and `b`.
    fn recombination_cut(
        a: &Chromosome,
        b: &Chromosome,
        children: &(Chromosome, Chromosome),
    ) -> Option<usize> {
        (1..a.len()).find(|&cut| {
            children.0 == splice(a, b, cut) && children.1 == splice(b, a, cut)
        })
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_probability_zero_copies_parents() {
        let mut rng = create_rng(42);
        let (a, b) = (c("0000"), c("1111"));
        for _ in 0..100 {
            assert_eq!(single_point_crossover(&a, &b, 0.0, &mut rng), (a.clone(), b.clone()));
        }
    }

    #[test]
    fn test_crossover_probability_one_always_recombines() {
        let mut rng = create_rng(42);
        let (a, b) = (c("000000"), c("111111"));
        for _ in 0..100 {
            let children = single_point_crossover(&a, &b, 1.0, &mut rng);
            assert!(
                recombination_cut(&a, &b, &children).is_some(),
                "not a single-point recombination: {children:?}"
            );
        }
    }

    #[test]
    fn test_crossover_cut_covers_interior_only() {
        let mut rng = create_rng(9);
        let (a, b) = (c("0000"), c("1111"));
        let mut seen = [false; 4];
        for _ in 0..500 {
            let children = single_point_crossover(&a, &b, 1.0, &mut rng);
            let cut = recombination_cut(&a, &b, &children).unwrap();
            seen[cut] = true;
        }
        assert_eq!(seen, [false, true, true, true]);
    }

    #[test]
    fn test_crossover_known_cut() {
        assert_eq!(splice(&c("0011"), &c("1100"), 1).to_string(), "0100");
        assert_eq!(splice(&c("1100"), &c("0011"), 1).to_string(), "1011");
    }

    #[test]
    fn test_crossover_single_bit_copies() {
        let mut rng = create_rng(1);
        let (a, b) = (c("0"), c("1"));
        assert_eq!(single_point_crossover(&a, &b, 1.0, &mut rng), (a, b));
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = create_rng(1);
        single_point_crossover(&c("01"), &c("011"), 1.0, &mut rng);
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let mut rng = create_rng(42);
        let x = c("0110101");
        for _ in 0..100 {
            assert_eq!(bit_flip_mutation(&x, 0.0, &mut rng), x);
        }
    }

    #[test]
    fn test_mutation_rate_one_is_complement() {
        let mut rng = create_rng(42);
        let x = c("0110101");
        assert_eq!(bit_flip_mutation(&x, 1.0, &mut rng).to_string(), "1001010");
    }

    #[test]
    fn test_mutation_flip_count_matches_rate() {
        let mut rng = create_rng(5);
        let x = Chromosome::zeros(53);
        let flips: usize = (0..200)
            .map(|_| {
                bit_flip_mutation(&x, 0.1, &mut rng)
                    .bits()
                    .iter()
                    .filter(|&&b| b)
                    .count()
            })
            .sum();
        // expected 0.1 * 53 * 200 = 1060
        assert!((880..1240).contains(&flips), "got {flips} flips");
    }

    proptest! {
        #[test]
        fn prop_mutation_preserves_length(
            bits in prop::collection::vec(any::<bool>(), 1..=53),
            pm in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let x = Chromosome::from_bits(bits);
            let mut rng = create_rng(seed);
            prop_assert_eq!(bit_flip_mutation(&x, pm, &mut rng).len(), x.len());
        }

        #[test]
        fn prop_mutation_extremes(bits in prop::collection::vec(any::<bool>(), 1..=53), seed in any::<u64>()) {
            let x = Chromosome::from_bits(bits);
            let mut rng = create_rng(seed);
            prop_assert_eq!(bit_flip_mutation(&x, 0.0, &mut rng), x.clone());
            prop_assert_eq!(bit_flip_mutation(&x, 1.0, &mut rng), x.complement());
        }

        #[test]
        fn prop_crossover_children_are_valid(
            pair in (2usize..=32).prop_flat_map(|n| {
                (prop::collection::vec(any::<bool>(), n), prop::collection::vec(any::<bool>(), n))
            }),
            seed in any::<u64>(),
        ) {
            let a = Chromosome::from_bits(pair.0);
            let b = Chromosome::from_bits(pair.1);
            let mut rng = create_rng(seed);
            let children = single_point_crossover(&a, &b, 1.0, &mut rng);
            prop_assert_eq!(children.0.len(), a.len());
            prop_assert_eq!(children.1.len(), a.len());
            prop_assert!(recombination_cut(&a, &b, &children).is_some());
        }
    }
}
