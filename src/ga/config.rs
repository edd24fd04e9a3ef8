//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::encoding::MAX_CHROMOSOME_LENGTH;
use crate::error::ConfigError;

/// Configuration for the binary Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.chromosome_length, 4);
/// assert_eq!(config.population_size, 4);
/// assert_eq!(config.max_generations, 30);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given. Out-of-range values are reported by
/// [`validate`](Self::validate), which every run calls before drawing any
/// random numbers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GaConfig {
    /// Number of bits per chromosome (`L`), 1 to 53.
    pub chromosome_length: usize,

    /// Number of individuals in the population (`N`).
    ///
    /// Must be even: offspring are produced in pairs.
    pub population_size: usize,

    /// Number of generations to run (`G`).
    pub max_generations: usize,

    /// Probability of recombining a pair of parents (`pc`, 0.0–1.0).
    pub crossover_rate: f64,

    /// Per-bit flip probability applied to every child (`pm`, 0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Whether to evaluate fitness in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Evaluation draws no
    /// random numbers, so results do not depend on this flag.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            chromosome_length: 4,
            population_size: 4,
            max_generations: 30,
            crossover_rate: 0.7,
            mutation_rate: 0.1,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the chromosome length.
    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first invalid parameter found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chromosome_length == 0 {
            return Err(ConfigError::ZeroChromosomeLength);
        }
        if self.chromosome_length > MAX_CHROMOSOME_LENGTH {
            return Err(ConfigError::ChromosomeTooLong {
                length: self.chromosome_length,
                max: MAX_CHROMOSOME_LENGTH,
            });
        }
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(ConfigError::OddPopulation(self.population_size));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if self.max_generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails the range check too
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
