//! Text and JSON rendering of run results.
//!
//! These consume [`GaResult`] and [`ConvergenceSeries`] values only; nothing
//! here feeds back into a run.

use crate::experiment::ConvergenceSeries;
use crate::ga::GaResult;

/// Glyphs used for successive series in [`ascii_chart`].
const MARKERS: &[char] = &['*', 'o', '+', 'x', '#', '@'];

/// One-line summary: `"<label>: best 0110 -> x=0.4000, f=0.123456"`.
pub fn render_line(label: &str, result: &GaResult) -> String {
    format!(
        "{label}: best {} -> x={:.4}, f={:.6}",
        result.best, result.best_value, result.best_fitness
    )
}

/// Renders one row per generation and one column per series.
///
/// Series shorter than the longest leave their cells blank.
pub fn convergence_table(series: &[ConvergenceSeries]) -> String {
    let width = series
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(10);
    let rows = series.iter().map(|s| s.history.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{:>10}", "generation"));
    for s in series {
        out.push_str(&format!("  {:>width$}", s.label));
    }
    out.push('\n');

    for g in 0..rows {
        out.push_str(&format!("{g:>10}"));
        for s in series {
            match s.history.get(g) {
                Some(f) => out.push_str(&format!("  {f:>width$.6}")),
                None => out.push_str(&format!("  {:>width$}", "")),
            }
        }
        out.push('\n');
    }
    out
}

/// Plots maximum fitness (vertical) against generation (horizontal).
///
/// Each series is drawn with its own marker; where series overlap the later
/// one wins. `height` is the number of plot rows and is raised to at least 2.
/// A legend follows the plot.
pub fn ascii_chart(series: &[ConvergenceSeries], height: usize) -> String {
    let height = height.max(2);
    let columns = series.iter().map(|s| s.history.len()).max().unwrap_or(0);
    let values = series.iter().flat_map(|s| s.history.iter().copied());
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), f| {
        (lo.min(f), hi.max(f))
    });
    if columns == 0 || !lo.is_finite() || !hi.is_finite() {
        return String::new();
    }
    let span = if hi > lo { hi - lo } else { 1.0 };

    let mut grid = vec![vec![' '; columns]; height];
    for (s, marker) in series.iter().zip(MARKERS.iter().cycle()) {
        for (g, &f) in s.history.iter().enumerate() {
            let level = ((f - lo) / span * (height - 1) as f64).round() as usize;
            grid[height - 1 - level.min(height - 1)][g] = *marker;
        }
    }

    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate() {
        let axis = lo + span * (height - 1 - row) as f64 / (height - 1) as f64;
        out.push_str(&format!("{axis:>10.4} |{}\n", cells.iter().collect::<String>()));
    }
    out.push_str(&format!("{:>10} +{}\n", "", "-".repeat(columns)));
    if columns > 1 {
        out.push_str(&format!("{:>10}  0{:>w$}\n", "", columns - 1, w = columns - 1));
    } else {
        out.push_str(&format!("{:>10}  0\n", ""));
    }
    for (s, marker) in series.iter().zip(MARKERS.iter().cycle()) {
        out.push_str(&format!("{marker} {}\n", s.label));
    }
    out
}

/// Pretty-printed JSON of the given outcomes.
#[cfg(feature = "serde")]
pub fn to_json(outcomes: &[crate::experiment::ExperimentOutcome]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcomes)
}
