//! Binary-encoded Genetic Algorithm.
//!
//! Maximizes a scalar [`Objective`] over `[0, 1]`. Candidates are fixed-length
//! bit strings ([`Chromosome`]) decoded as `k / (2^L - 1)`.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (L, N, pc, pm, G, seed)
//! - [`Evolution`]: Step-by-step generational state machine
//! - [`GaRunner`]: Runs an [`Evolution`] to completion
//! - [`GaResult`]: Best chromosome, its value and fitness, convergence history
//!
//! # Submodules
//!
//! - [`operators`]: Single-point crossover and bit-flip mutation
//! - [`selection`]: Roulette-wheel selection over raw fitness
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod encoding;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use encoding::{BinaryEncoding, Chromosome, MAX_CHROMOSOME_LENGTH};
pub use runner::{Evolution, GaResult, GaRunner, Phase};
pub use selection::{roulette, Wheel};
pub use types::{Objective, SineQuadratic};
