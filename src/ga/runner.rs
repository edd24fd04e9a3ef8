//! GA generational loop.
//!
//! [`Evolution`] is the step-by-step state machine:
//!
//! ```text
//! Initialized → Evolving { generation } → Completed
//! ```
//!
//! Each step evaluates the current population, records its maximum fitness,
//! and replaces it wholesale with `N` offspring produced by roulette
//! selection, single-point crossover and bit-flip mutation. There is no
//! elitism: the previous best survives only if it is re-derived by chance.
//!
//! [`GaRunner`] drives an [`Evolution`] to completion in one call.

use super::config::GaConfig;
use super::encoding::{BinaryEncoding, Chromosome};
use super::operators::{bit_flip_mutation, single_point_crossover};
use super::selection::Wheel;
use super::types::Objective;
use crate::error::{ConfigError, GaError};
use crate::random::rng_from_seed;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fmt;
use tracing::instrument;

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Fittest chromosome of the final population (first on ties).
    pub best: Chromosome,

    /// Decoded value of `best`.
    pub best_value: f64,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Maximum fitness of the population entering each generation.
    ///
    /// Not monotonic: without elitism the best individual can be lost.
    pub fitness_history: Vec<f64>,

    /// Number of generations executed.
    pub generations: usize,
}

/// Lifecycle phase of an [`Evolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Random population built, no generation run yet.
    Initialized,
    /// `generation` generations have been run and more remain.
    Evolving {
        /// Number of completed generations.
        generation: usize,
    },
    /// All configured generations have been run.
    Completed,
}

/// A GA run in progress.
///
/// ```
/// use u_bitga::ga::{BinaryEncoding, Evolution, GaConfig, Phase, SineQuadratic};
/// use u_bitga::random::create_rng;
///
/// let config = GaConfig::default().with_max_generations(3);
/// let encoding = BinaryEncoding::new(config.chromosome_length, SineQuadratic);
/// let mut rng = create_rng(42);
///
/// let mut evolution = Evolution::new(&encoding, &config, &mut rng)?;
/// assert_eq!(evolution.phase(), Phase::Initialized);
///
/// evolution.step();
/// assert_eq!(evolution.phase(), Phase::Evolving { generation: 1 });
///
/// let result = evolution.finish();
/// assert_eq!(result.fitness_history.len(), 3);
/// # Ok::<(), u_bitga::GaError>(())
/// ```
pub struct Evolution<'a, O, R> {
    encoding: &'a BinaryEncoding<O>,
    config: &'a GaConfig,
    rng: &'a mut R,
    population: Vec<Chromosome>,
    fitness_history: Vec<f64>,
}

impl<O: Objective, R: Rng> fmt::Debug for Evolution<'_, O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evolution")
            .field("encoding_length", &self.encoding.length())
            .field("config", self.config)
            .field("phase", &self.phase())
            .field("population", &self.population)
            .field("fitness_history", &self.fitness_history)
            .finish_non_exhaustive()
    }
}

impl<'a, O: Objective, R: Rng> Evolution<'a, O, R> {
    /// Validates `config` and builds the initial random population.
    ///
    /// No random numbers are drawn if the configuration is invalid or if
    /// `encoding` has a different length than `config.chromosome_length`.
    pub fn new(
        encoding: &'a BinaryEncoding<O>,
        config: &'a GaConfig,
        rng: &'a mut R,
    ) -> Result<Self, GaError> {
        config.validate()?;
        if encoding.length() != config.chromosome_length {
            return Err(ConfigError::LengthMismatch {
                encoding: encoding.length(),
                config: config.chromosome_length,
            }
            .into());
        }

        let population = (0..config.population_size)
            .map(|_| encoding.random_chromosome(rng))
            .collect();

        Ok(Self {
            encoding,
            config,
            rng,
            population,
            fitness_history: Vec::with_capacity(config.max_generations),
        })
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.fitness_history.len() {
            0 => Phase::Initialized,
            g if g >= self.config.max_generations => Phase::Completed,
            generation => Phase::Evolving { generation },
        }
    }

    /// The current population.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Per-generation maximum fitness recorded so far.
    pub fn fitness_history(&self) -> &[f64] {
        &self.fitness_history
    }

    /// Runs one generation.
    ///
    /// Returns the maximum fitness of the population that entered the
    /// generation, or `None` if the run is already complete.
    pub fn step(&mut self) -> Option<f64> {
        if self.phase() == Phase::Completed {
            return None;
        }

        let fitnesses = evaluate_population(self.encoding, &self.population, self.config.parallel);
        let gen_best = fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        self.fitness_history.push(gen_best);

        tracing::debug!(
            generation = self.fitness_history.len() - 1,
            best_fitness = gen_best,
            "generation evaluated"
        );

        let wheel = Wheel::new(&fitnesses);
        let mut next_gen = Vec::with_capacity(self.config.population_size);
        for _ in 0..self.config.population_size / 2 {
            let p1 = &self.population[wheel.spin(&fitnesses, self.rng)];
            let p2 = &self.population[wheel.spin(&fitnesses, self.rng)];

            let (c1, c2) = single_point_crossover(p1, p2, self.config.crossover_rate, self.rng);

            next_gen.push(bit_flip_mutation(&c1, self.config.mutation_rate, self.rng));
            next_gen.push(bit_flip_mutation(&c2, self.config.mutation_rate, self.rng));
        }

        self.population = next_gen;
        Some(gen_best)
    }

    /// Runs any remaining generations and reports the fittest individual of
    /// the final population.
    pub fn finish(mut self) -> GaResult {
        while self.step().is_some() {}

        let fitnesses = evaluate_population(self.encoding, &self.population, self.config.parallel);
        let best_idx = find_best(&fitnesses);
        let best = self.population.swap_remove(best_idx);

        GaResult {
            best_value: best.decode(),
            best_fitness: fitnesses[best_idx],
            best,
            generations: self.fitness_history.len(),
            fitness_history: self.fitness_history,
        }
    }
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaRunner, SineQuadratic};
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(SineQuadratic, &config)?;
/// assert_eq!(result.fitness_history.len(), 30);
/// assert_eq!(result.best.len(), 4);
/// # Ok::<(), u_bitga::GaError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, seeding from `config.seed` or from the operating system.
    pub fn run<O: Objective>(objective: O, config: &GaConfig) -> Result<GaResult, GaError> {
        config.validate()?;
        let mut rng = rng_from_seed(config.seed)?;
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs the GA drawing every random number from `rng`.
    ///
    /// `config.seed` is ignored.
    #[instrument(
        level = "debug",
        skip(objective, rng),
        fields(
            length = config.chromosome_length,
            population = config.population_size,
            generations = config.max_generations,
        )
    )]
    pub fn run_with_rng<O: Objective, R: Rng>(
        objective: O,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult, GaError> {
        let encoding = BinaryEncoding::new(config.chromosome_length, objective);
        let evolution = Evolution::new(&encoding, config, rng)?;

        tracing::info!(
            crossover_rate = config.crossover_rate,
            mutation_rate = config.mutation_rate,
            "starting GA run"
        );

        let result = evolution.finish();

        tracing::info!(
            best = %result.best,
            best_value = result.best_value,
            best_fitness = result.best_fitness,
            "GA run completed"
        );

        Ok(result)
    }
}

/// Evaluate all individuals in the population.
#[cfg(feature = "parallel")]
fn evaluate_population<O: Objective>(
    encoding: &BinaryEncoding<O>,
    population: &[Chromosome],
    parallel: bool,
) -> Vec<f64> {
    if parallel {
        population.par_iter().map(|c| encoding.fitness(c)).collect()
    } else {
        population.iter().map(|c| encoding.fitness(c)).collect()
    }
}

/// Evaluate all individuals in the population.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<O: Objective>(
    encoding: &BinaryEncoding<O>,
    population: &[Chromosome],
    _parallel: bool,
) -> Vec<f64> {
    population.iter().map(|c| encoding.fitness(c)).collect()
}

/// Index of the highest fitness, first occurrence on ties.
fn find_best(fitnesses: &[f64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitnesses.iter().enumerate().skip(1) {
        if f > fitnesses[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
