//! Error types.
//!
//! Configuration problems are detected before a run consumes any entropy.
//! The only runtime failure is the inability to seed the generator from the
//! operating system.

use thiserror::Error;

/// An invalid [`GaConfig`](crate::ga::GaConfig) value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `chromosome_length` is zero, so decoding has no bits to read.
    #[error("chromosome_length must be at least 1")]
    ZeroChromosomeLength,

    /// `chromosome_length` is too long to decode exactly into an `f64`.
    #[error("chromosome_length must be at most {max}, got {length}")]
    ChromosomeTooLong {
        /// Requested length.
        length: usize,
        /// Largest supported length.
        max: usize,
    },

    /// `population_size` is below the minimum of one pair.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// `population_size` cannot be split into parent pairs.
    #[error("population_size must be even, got {0}")]
    OddPopulation(usize),

    /// A probability is outside `[0, 1]` or is NaN.
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange {
        /// Name of the offending field.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// `max_generations` is zero.
    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    /// The encoding and the configuration disagree on chromosome length.
    #[error("encoding length {encoding} does not match chromosome_length {config}")]
    LengthMismatch {
        /// Length of the [`BinaryEncoding`](crate::ga::BinaryEncoding).
        encoding: usize,
        /// `chromosome_length` from the configuration.
        config: usize,
    },
}

/// Failure to parse a [`Chromosome`](crate::ga::Chromosome) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseChromosomeError {
    /// The input had no bits.
    #[error("chromosome must contain at least one bit")]
    Empty,

    /// The input contained a character other than `0` or `1`.
    #[error("invalid bit {found:?} at position {index}")]
    InvalidBit {
        /// Character position in the input.
        index: usize,
        /// Offending character.
        found: char,
    },

    /// The input had more bits than a chromosome can hold.
    #[error("chromosome must be at most {max} bits, got {length}")]
    TooLong {
        /// Number of bits in the input.
        length: usize,
        /// Largest supported length.
        max: usize,
    },
}

/// Errors returned by a GA run.
#[derive(Debug, Error)]
pub enum GaError {
    /// The configuration was rejected before the run started.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The operating system could not provide a seed.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}
