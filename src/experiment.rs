//! Experiment driver.
//!
//! Runs labelled parameter tuples through [`GaRunner`] in order and keeps
//! each result next to the configuration that produced it.

use crate::error::GaError;
use crate::ga::{GaConfig, GaResult, GaRunner, Objective};

/// A labelled GA configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Experiment {
    /// Name shown in reports and chart legends.
    pub label: String,

    /// Parameters for this run.
    #[cfg_attr(feature = "serde", serde(default))]
    pub config: GaConfig,
}

impl Experiment {
    /// Creates an experiment.
    pub fn new(label: impl Into<String>, config: GaConfig) -> Self {
        Self {
            label: label.into(),
            config,
        }
    }
}

/// A list of experiments, as stored in a suite file.
///
/// ```json
/// {
///   "experiments": [
///     { "label": "low crossover", "config": { "crossover_rate": 0.3 } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suite {
    /// Experiments in run order.
    pub experiments: Vec<Experiment>,
}

/// The three reference experiments: `L = 4`, `N = 4`, `G = 30` with
///
/// | label        | pc  | pm  |
/// |--------------|-----|-----|
/// | Experiment 1 | 0.7 | 0.1 |
/// | Experiment 2 | 0.3 | 0.1 |
/// | Experiment 3 | 0.9 | 0.2 |
pub fn default_suite() -> Suite {
    let base = GaConfig::default()
        .with_chromosome_length(4)
        .with_population_size(4)
        .with_max_generations(30);

    Suite {
        experiments: vec![
            Experiment::new(
                "Experiment 1",
                base.clone().with_crossover_rate(0.7).with_mutation_rate(0.1),
            ),
            Experiment::new(
                "Experiment 2",
                base.clone().with_crossover_rate(0.3).with_mutation_rate(0.1),
            ),
            Experiment::new(
                "Experiment 3",
                base.with_crossover_rate(0.9).with_mutation_rate(0.2),
            ),
        ],
    }
}

/// Maximum fitness per generation for one labelled run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceSeries {
    /// Run label.
    pub label: String,
    /// `history[g]` is the maximum fitness entering generation `g`.
    pub history: Vec<f64>,
}

/// An experiment together with its result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentOutcome {
    /// Run label.
    pub label: String,
    /// Configuration actually used, including the resolved seed.
    pub config: GaConfig,
    /// Run result.
    pub result: GaResult,
}

impl ExperimentOutcome {
    /// The convergence history of this run, for plotting.
    pub fn series(&self) -> ConvergenceSeries {
        ConvergenceSeries {
            label: self.label.clone(),
            history: self.result.fitness_history.clone(),
        }
    }
}

/// Runs every experiment in `suite`, in order.
///
/// When `base_seed` is `Some(s)`, experiment `i` that has no seed of its own
/// runs with seed `s + i` (wrapping), making the whole suite reproducible
/// while keeping the runs independent. Stops at the first error.
pub fn run_suite<O: Objective + Clone>(
    objective: &O,
    suite: &Suite,
    base_seed: Option<u64>,
) -> Result<Vec<ExperimentOutcome>, GaError> {
    suite
        .experiments
        .iter()
        .enumerate()
        .map(|(i, experiment)| -> Result<ExperimentOutcome, GaError> {
            let mut config = experiment.config.clone();
            if config.seed.is_none() {
                config.seed = base_seed.map(|s| s.wrapping_add(i as u64));
            }

            tracing::info!(label = %experiment.label, seed = ?config.seed, "running experiment");
            let result = GaRunner::run(objective.clone(), &config)?;

            Ok(ExperimentOutcome {
                label: experiment.label.clone(),
                config,
                result,
            })
        })
        .collect()
}
