//! Binary chromosome encoding.
//!
//! A [`Chromosome`] is a fixed-length bit string. Decoding reads it as a
//! big-endian unsigned integer `k` and maps it linearly onto `[0, 1]`:
//!
//! ```text
//! x = k / (2^L - 1)
//! ```
//!
//! so `00…0` decodes to exactly `0.0` and `11…1` to exactly `1.0`.

use super::types::Objective;
use crate::error::ParseChromosomeError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Longest supported chromosome.
///
/// Every integer below `2^53` is exact in an `f64`, so up to this length
/// distinct chromosomes always decode to distinct values.
pub const MAX_CHROMOSOME_LENGTH: usize = 53;

/// A fixed-length bit string (genotype).
///
/// Chromosomes are immutable values: the genetic operators always return
/// new chromosomes.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Chromosome;
///
/// let c: Chromosome = "0101".parse().unwrap();
/// assert_eq!(c.len(), 4);
/// assert_eq!(c.decode(), 5.0 / 15.0);
/// assert_eq!(c.to_string(), "0101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Creates a chromosome from bits, most significant first.
    ///
    /// # Panics
    /// Panics if `bits` is empty or longer than [`MAX_CHROMOSOME_LENGTH`].
    pub fn from_bits(bits: Vec<bool>) -> Self {
        assert!(!bits.is_empty(), "chromosome must contain at least one bit");
        assert!(
            bits.len() <= MAX_CHROMOSOME_LENGTH,
            "chromosome longer than {MAX_CHROMOSOME_LENGTH} bits"
        );
        Self { bits }
    }

    /// Draws each of `length` bits independently and uniformly.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        Self::from_bits((0..length).map(|_| rng.random_bool(0.5)).collect())
    }

    /// All-zero chromosome of the given length.
    pub fn zeros(length: usize) -> Self {
        Self::from_bits(vec![false; length])
    }

    /// All-one chromosome of the given length.
    pub fn ones(length: usize) -> Self {
        Self::from_bits(vec![true; length])
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always `false`; chromosomes hold at least one bit.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, most significant first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// The bit string read as a big-endian unsigned integer.
    pub fn to_integer(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }

    /// Maps the chromosome onto `[0, 1]` with divisor `2^L - 1`.
    pub fn decode(&self) -> f64 {
        let max = (1u64 << self.len()) - 1;
        self.to_integer() as f64 / max as f64
    }

    /// The bitwise complement.
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|&bit| !bit).collect(),
        }
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Chromosome {
    type Err = ParseChromosomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseChromosomeError::Empty);
        }
        let bits = s
            .chars()
            .enumerate()
            .map(|(index, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(ParseChromosomeError::InvalidBit { index, found }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        if bits.len() > MAX_CHROMOSOME_LENGTH {
            return Err(ParseChromosomeError::TooLong {
                length: bits.len(),
                max: MAX_CHROMOSOME_LENGTH,
            });
        }
        Ok(Self { bits })
    }
}

impl From<Chromosome> for String {
    fn from(chromosome: Chromosome) -> Self {
        chromosome.to_string()
    }
}

impl TryFrom<String> for Chromosome {
    type Error = ParseChromosomeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A chromosome length paired with the objective it is evaluated against.
///
/// ```
/// use u_bitga::ga::{BinaryEncoding, Chromosome, SineQuadratic};
///
/// let encoding = BinaryEncoding::new(4, SineQuadratic);
/// let fitness = encoding.fitness(&Chromosome::zeros(4));
/// assert!(fitness.abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BinaryEncoding<O> {
    length: usize,
    objective: O,
}

impl<O: Objective> BinaryEncoding<O> {
    /// Creates an encoding for chromosomes of `length` bits.
    pub fn new(length: usize, objective: O) -> Self {
        Self { length, objective }
    }

    /// Chromosome length `L`.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The wrapped objective.
    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Decodes a chromosome to its phenotype.
    pub fn decode(&self, chromosome: &Chromosome) -> f64 {
        chromosome.decode()
    }

    /// `objective(decode(chromosome))`.
    pub fn fitness(&self, chromosome: &Chromosome) -> f64 {
        self.objective.evaluate(chromosome.decode())
    }

    /// A uniformly random chromosome of this encoding's length.
    pub fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome {
        Chromosome::random(self.length, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::SineQuadratic;
    use crate::random::create_rng;
    use proptest::prelude::*;

    // ---- Decode ----

    #[test]
    fn test_decode_endpoints() {
        for length in [1, 4, 8, 52, 53] {
            assert_eq!(Chromosome::zeros(length).decode(), 0.0);
            assert_eq!(Chromosome::ones(length).decode(), 1.0);
        }
    }

    #[test]
    fn test_decode_distinct_at_max_length() {
        let top: Chromosome = "1".repeat(MAX_CHROMOSOME_LENGTH).parse().unwrap();
        let below: Chromosome = format!("{}0", "1".repeat(MAX_CHROMOSOME_LENGTH - 1))
            .parse()
            .unwrap();
        assert_eq!(top.decode(), 1.0);
        assert!(below.decode() < top.decode());
        assert_eq!(below.to_integer() + 1, top.to_integer());
    }

    #[test]
    fn test_decode_uses_full_range_divisor() {
        let c: Chromosome = "0001".parse().unwrap();
        assert_eq!(c.decode(), 1.0 / 15.0);
        let c: Chromosome = "1000".parse().unwrap();
        assert_eq!(c.decode(), 8.0 / 15.0);
    }

    #[test]
    fn test_decode_is_monotonic_over_all_four_bit_strings() {
        let values: Vec<f64> = (0..16u32)
            .map(|k| format!("{k:04b}").parse::<Chromosome>().unwrap().decode())
            .collect();
        for window in values.windows(2) {
            assert!(window[0] < window[1], "not increasing: {values:?}");
        }
    }

    #[test]
    fn test_objective_endpoints_through_encoding() {
        let encoding = BinaryEncoding::new(4, SineQuadratic);
        let at_zero = encoding.fitness(&Chromosome::zeros(4));
        let at_one = encoding.fitness(&Chromosome::ones(4));
        assert_eq!(at_zero, SineQuadratic.evaluate(0.0));
        assert_eq!(at_one, SineQuadratic.evaluate(1.0));
    }

    // ---- Text form ----

    #[test]
    fn test_parse_and_display() {
        let c: Chromosome = "10110".parse().unwrap();
        assert_eq!(c.bits(), &[true, false, true, true, false]);
        assert_eq!(c.to_string(), "10110");
        assert_eq!(c.to_integer(), 0b10110);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<Chromosome>(), Err(ParseChromosomeError::Empty));
    }

    #[test]
    fn test_parse_rejects_invalid_bit() {
        assert_eq!(
            "01x1".parse::<Chromosome>(),
            Err(ParseChromosomeError::InvalidBit {
                index: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn test_parse_rejects_too_long() {
        let text = "1".repeat(MAX_CHROMOSOME_LENGTH + 1);
        assert!(matches!(
            text.parse::<Chromosome>(),
            Err(ParseChromosomeError::TooLong { .. })
        ));
    }

    #[test]
    fn test_complement() {
        let c: Chromosome = "0110".parse().unwrap();
        assert_eq!(c.complement().to_string(), "1001");
    }

    // ---- Random initialization ----

    #[test]
    fn test_random_chromosome_length() {
        let encoding = BinaryEncoding::new(12, SineQuadratic);
        let mut rng = create_rng(42);
        for _ in 0..50 {
            assert_eq!(encoding.random_chromosome(&mut rng).len(), 12);
        }
    }

    #[test]
    fn test_random_chromosome_covers_both_bits() {
        let mut rng = create_rng(3);
        let ones: usize = (0..200)
            .map(|_| {
                Chromosome::random(8, &mut rng)
                    .bits()
                    .iter()
                    .filter(|&&b| b)
                    .count()
            })
            .sum();
        // 1600 fair coin flips
        assert!((600..1000).contains(&ones), "got {ones} ones");
    }

    proptest! {
        #[test]
        fn prop_decode_within_unit_interval(bits in prop::collection::vec(any::<bool>(), 1..=53)) {
            let x = Chromosome::from_bits(bits).decode();
            prop_assert!((0.0..=1.0).contains(&x));
        }

        #[test]
        fn prop_decode_monotonic(length in 1usize..=16, a in any::<u16>(), b in any::<u16>()) {
            let mask = (1u32 << length) - 1;
            let (lo, hi) = {
                let a = u32::from(a) & mask;
                let b = u32::from(b) & mask;
                (a.min(b), a.max(b))
            };
            let lo: Chromosome = format!("{lo:0length$b}").parse().unwrap();
            let hi: Chromosome = format!("{hi:0length$b}").parse().unwrap();
            prop_assert!(lo.decode() <= hi.decode());
        }

        #[test]
        fn prop_display_parse_identity(bits in prop::collection::vec(any::<bool>(), 1..=53)) {
            let c = Chromosome::from_bits(bits);
            prop_assert_eq!(c.to_string().parse::<Chromosome>().unwrap(), c);
        }
    }
}
