//! u-bitga: run binary GA experiments from the command line.
//!
//! Runs the reference suite (or a suite file, or a single parameter tuple)
//! against `sin(3πx) + 0.2x²` and prints one summary line per run followed
//! by the convergence history.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::Level;
use u_bitga::experiment::{default_suite, run_suite, Experiment, ExperimentOutcome, Suite};
use u_bitga::ga::{GaConfig, SineQuadratic};
use u_bitga::report;

/// Binary-encoded genetic algorithm experiments.
#[derive(Debug, Parser)]
#[command(name = "u-bitga", version, about)]
struct Cli {
    /// Base seed; experiment i without its own seed uses seed + i.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Draw an ASCII convergence chart after the table (text format only).
    #[arg(long, global = true)]
    chart: bool,

    /// Chart height in rows.
    #[arg(long, default_value_t = 12, global = true)]
    chart_height: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the reference suite, or the suite in a JSON file.
    Suite {
        /// Suite file: {"experiments": [{"label": ..., "config": {...}}]}.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run a single experiment.
    Run {
        /// Chromosome length in bits.
        #[arg(short = 'l', long, default_value_t = 4)]
        length: usize,
        /// Population size (even).
        #[arg(short = 'n', long, default_value_t = 4)]
        population: usize,
        /// Crossover probability.
        #[arg(long, default_value_t = 0.7)]
        pc: f64,
        /// Per-bit mutation probability.
        #[arg(long, default_value_t = 0.1)]
        pm: f64,
        /// Number of generations.
        #[arg(short = 'g', long, default_value_t = 30)]
        generations: usize,
        /// Label used in the report.
        #[arg(long, default_value = "Run")]
        label: String,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_suite(path: &Path) -> Result<Suite> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read suite file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse suite file {}", path.display()))
}

fn print_text(outcomes: &[ExperimentOutcome], chart: bool, chart_height: usize) {
    for outcome in outcomes {
        println!("{}", report::render_line(&outcome.label, &outcome.result));
    }
    println!();

    let series: Vec<_> = outcomes.iter().map(ExperimentOutcome::series).collect();
    print!("{}", report::convergence_table(&series));

    if chart {
        println!();
        print!("{}", report::ascii_chart(&series, chart_height));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let suite = match &cli.command {
        None | Some(Command::Suite { config: None }) => default_suite(),
        Some(Command::Suite { config: Some(path) }) => load_suite(path)?,
        Some(Command::Run {
            length,
            population,
            pc,
            pm,
            generations,
            label,
        }) => Suite {
            experiments: vec![Experiment::new(
                label.clone(),
                GaConfig::default()
                    .with_chromosome_length(*length)
                    .with_population_size(*population)
                    .with_crossover_rate(*pc)
                    .with_mutation_rate(*pm)
                    .with_max_generations(*generations),
            )],
        },
    };

    let outcomes = run_suite(&SineQuadratic, &suite, cli.seed).context("GA run failed")?;

    match cli.format {
        Format::Text => print_text(&outcomes, cli.chart, cli.chart_height),
        Format::Json => println!("{}", report::to_json(&outcomes)?),
    }

    Ok(())
}
