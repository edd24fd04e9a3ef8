//! Roulette-wheel parent selection.
//!
//! Selection probability is proportional to raw fitness. The wheel has two
//! branches:
//!
//! - **Uniform**: the fitness sum is exactly zero, so there is nothing to be
//!   proportional to and every individual is equally likely.
//! - **Proportional**: a threshold `r` is drawn between 0 and the sum `S`,
//!   and the population is swept in order until the running sum reaches `r`.
//!   If rounding prevents the sweep from ever reaching `r`, the last
//!   individual is returned.
//!
//! Fitness is not shifted or normalized. With a negative or mixed-sign sum
//! the sweep still runs exactly as described, even though the resulting
//! distribution is no longer proportional.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

/// The branch a roulette spin takes for a given fitness vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wheel {
    /// Fitness sums to exactly zero; choose uniformly.
    Uniform,
    /// Sweep the cumulative fitness against a threshold in `[0, total)`.
    Proportional {
        /// Sum of all fitness values.
        total: f64,
    },
}

impl Wheel {
    /// Builds the wheel for the given fitness values.
    pub fn new(fitnesses: &[f64]) -> Self {
        let total: f64 = fitnesses.iter().sum();
        if total == 0.0 {
            Wheel::Uniform
        } else {
            Wheel::Proportional { total }
        }
    }

    /// Spins the wheel and returns the selected index.
    ///
    /// # Panics
    /// Panics if `fitnesses` is empty.
    pub fn spin<R: Rng>(&self, fitnesses: &[f64], rng: &mut R) -> usize {
        assert!(!fitnesses.is_empty(), "cannot select from empty population");

        match *self {
            Wheel::Uniform => {
                tracing::trace!("zero fitness sum, selecting uniformly");
                rng.random_range(0..fitnesses.len())
            }
            Wheel::Proportional { total } => {
                // u·S keeps the draw well-defined for negative sums.
                let threshold = rng.random::<f64>() * total;
                let mut cumulative = 0.0;
                for (i, &f) in fitnesses.iter().enumerate() {
                    cumulative += f;
                    if cumulative >= threshold {
                        return i;
                    }
                }
                fitnesses.len() - 1 // floating-point fallback
            }
        }
    }
}

/// Selects one index by roulette wheel over `fitnesses`.
///
/// Builds a fresh [`Wheel`] on every call; [`Wheel::spin`] reuses one when
/// many parents are drawn from the same generation.
///
/// # Panics
/// Panics if `fitnesses` is empty.
pub fn roulette<R: Rng>(fitnesses: &[f64], rng: &mut R) -> usize {
    Wheel::new(fitnesses).spin(fitnesses, rng)
}
