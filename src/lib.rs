//! Binary-encoded genetic algorithm for scalar maximization on `[0, 1]`.
//!
//! Candidates are fixed-length bit strings decoded as `k / (2^L - 1)`. Each
//! generation is evaluated, its maximum fitness recorded, and replaced by
//! offspring from:
//!
//! - **Roulette-wheel selection** over raw fitness, with a uniform fallback
//!   for a zero fitness sum.
//! - **Single-point crossover** at a cut strictly inside the chromosome.
//! - **Bit-flip mutation**, independently per position.
//!
//! There is no elitism: the next generation consists only of offspring.
//!
//! # Example
//!
//! ```
//! use u_bitga::ga::{GaConfig, GaRunner, SineQuadratic};
//!
//! let config = GaConfig::default()
//!     .with_chromosome_length(8)
//!     .with_population_size(20)
//!     .with_max_generations(50)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(SineQuadratic, &config)?;
//! println!("best {} -> x={:.4}, f={:.6}", result.best, result.best_value, result.best_fitness);
//! # Ok::<(), u_bitga::GaError>(())
//! ```
//!
//! # Architecture
//!
//! - [`ga`]: encoding, operators, configuration and the generational loop
//! - [`experiment`]: labelled parameter suites run in sequence
//! - [`report`]: text lines, convergence tables and ASCII charts
//! - [`random`]: seeded and OS-seeded generators
//!
//! Every random draw goes through an explicitly passed `rand::Rng`, so a run
//! is fully reproducible from its seed.

pub mod error;
pub mod experiment;
pub mod ga;
pub mod random;
pub mod report;

pub use error::{ConfigError, GaError, ParseChromosomeError};
