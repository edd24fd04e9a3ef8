//! Objective function abstraction.
//!
//! The GA maximizes an [`Objective`] over the decoded phenotype in `[0, 1]`.
//! Any closure `Fn(f64) -> f64` works; [`SineQuadratic`] is the reference
//! objective used by the default experiment suite.

use std::f64::consts::PI;

/// A scalar objective over the unit interval.
///
/// Higher values are better (maximization). Values may be negative; the raw
/// value feeds roulette selection unchanged.
///
/// # Implementing
///
/// ```
/// use u_bitga::ga::Objective;
///
/// struct Parabola;
///
/// impl Objective for Parabola {
///     fn evaluate(&self, x: f64) -> f64 {
///         -(x - 0.5) * (x - 0.5)
///     }
/// }
///
/// assert_eq!(Parabola.evaluate(0.5), 0.0);
/// ```
///
/// # Thread Safety
///
/// `Objective` must be `Send + Sync` because the runner may evaluate a
/// generation in parallel when the `parallel` feature is enabled.
pub trait Objective: Send + Sync {
    /// Evaluates the objective at `x`, where `x` lies in `[0, 1]`.
    fn evaluate(&self, x: f64) -> f64;
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: f64) -> f64 {
        self(x)
    }
}

/// `f(x) = sin(3πx) + 0.2x²`.
///
/// Multimodal on `[0, 1]`; the global maximum lies near `x ≈ 0.83`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SineQuadratic;

impl Objective for SineQuadratic {
    fn evaluate(&self, x: f64) -> f64 {
        (3.0 * PI * x).sin() + 0.2 * x * x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_quadratic_endpoints() {
        assert!(SineQuadratic.evaluate(0.0).abs() < 1e-12);
        let expected = (3.0 * PI).sin() + 0.2;
        assert!((SineQuadratic.evaluate(1.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_sine_quadratic_peak_region() {
        // sin(3πx) peaks at x = 1/6 and x = 5/6; the quadratic term favours 5/6.
        let left = SineQuadratic.evaluate(1.0 / 6.0);
        let right = SineQuadratic.evaluate(5.0 / 6.0);
        assert!(right > left);
        assert!((right - (1.0 + 0.2 * 25.0 / 36.0)).abs() < 1e-12);
    }

    #[test]
    fn test_closure_objective() {
        let objective = |x: f64| 2.0 * x;
        assert_eq!(objective.evaluate(0.25), 0.5);
    }
}
