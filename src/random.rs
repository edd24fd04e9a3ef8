//! Entropy source construction.
//!
//! The engine never reaches for an ambient generator: every drawing
//! operation takes `&mut R where R: Rng`. These helpers build the concrete
//! [`StdRng`] used by [`GaRunner`](crate::ga::GaRunner) and the experiment
//! driver.

use crate::error::GaError;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from `seed`, or from operating-system entropy when
/// `seed` is `None`.
pub fn rng_from_seed(seed: Option<u64>) -> Result<StdRng, GaError> {
    match seed {
        Some(seed) => Ok(create_rng(seed)),
        None => StdRng::try_from_os_rng().map_err(|err| GaError::Entropy(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_rng_from_seed_matches_create_rng() {
        let mut a = rng_from_seed(Some(11)).unwrap();
        let mut b = create_rng(11);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn test_os_seeded_rng_is_available() {
        assert!(rng_from_seed(None).is_ok());
    }
}
