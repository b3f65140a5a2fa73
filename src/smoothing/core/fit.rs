//! core::fit — in-sample RMSE of a smoothing run.
//!
//! Purpose
//! -------
//! Score a weight triple against an observed series. This is the
//! objective the parameter search minimizes: seed the state, advance it
//! across the observed series, reconstruct fitted values, and report the
//! root-mean-square error.
//!
//! Key behaviors
//! -------------
//! - Runs the recurrence for `len - 1` steps over the observed series
//!   only (no synthesized values are injected).
//! - Reconstructs fitted values with [`Alignment::SameStep`], reading the
//!   seasonal index at the same step as level and trend. This differs
//!   from the cycle-aligned reconstruction used at forecast time and is
//!   kept that way on purpose; tests pin the asymmetry.
//! - RMSE averages over the full series length, including step 0 where
//!   the fitted value comes straight from the seeded state.
//!
//! Invariants & assumptions
//! ------------------------
//! - `series` is a validated [`SeasonalSeries`].
//! - Restarting the run from the same series and weights reproduces the
//!   same score; nothing is cached across calls.
//!
//! Downstream usage
//! ----------------
//! - [`HoltWintersModel`](crate::smoothing::models::holt_winters::HoltWintersModel)
//!   wraps this in its `Objective` implementation.
//! - [`run_forecast`](crate::smoothing::core::forecast::run_forecast)
//!   reports a related but distinct score: it drops the last `horizon`
//!   residuals from the sum while keeping the full-length denominator.
//!
//! Testing notes
//! -------------
//! - Unit tests below pin the score on a hand-computed two-cycle series
//!   and the near-zero score on an exactly seasonal series.
use crate::smoothing::{
    core::{
        data::SeasonalSeries,
        init::InitState,
        params::HwParams,
        state::{Alignment, SmoothingState},
    },
    errors::HwResult,
};

/// Root-mean-square error of the smoothing fit over the observed series.
///
/// Seeds the state from `series`, advances it `len - 1` steps, and
/// compares same-step reconstructions against the observations.
///
/// # Errors
/// - [`HwError::DegenerateCycle`](crate::smoothing::errors::HwError::DegenerateCycle)
///   if seeding fails.
/// - [`HwError::NonFiniteState`](crate::smoothing::errors::HwError::NonFiniteState)
///   if the recurrence degenerates for these weights.
pub fn in_sample_rmse(params: &HwParams, series: &SeasonalSeries) -> HwResult<f64> {
    let size = series.len();
    let data = series.data();
    let mut state = SmoothingState::new(InitState::seed(series)?);

    for i in 0..size - 1 {
        state.advance(data[i], params)?;
    }

    let sum_sq: f64 = (0..size)
        .map(|i| {
            let err = data[i] - state.reconstruct(i, Alignment::SameStep);
            err * err
        })
        .sum();
    Ok((sum_sq / size as f64).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - A hand-checkable score on a flat series.
    // - Near-zero error on an exactly repeating seasonal pattern with a
    //   low level weight.
    // - Determinism across repeated evaluations.
    //
    // They intentionally DO NOT cover:
    // - Optimizer interaction; see the integration tests.
    // -------------------------------------------------------------------------

    fn series(values: Vec<f64>, period: usize) -> SeasonalSeries {
        SeasonalSeries::new(Array1::from(values), period).expect("series should be valid")
    }

    #[test]
    // Purpose
    // -------
    // A perfectly flat series seeds level = value, trend = 0, and all
    // seasonal indices = 1, so every reconstruction reproduces the data
    // exactly and the RMSE is zero.
    //
    // Given
    // -----
    // - The constant series [5, 5, 5, 5, 5, 5] with period 3.
    //
    // Expect
    // ------
    // - RMSE exactly 0.
    fn flat_series_scores_zero() {
        // Arrange
        let s = series(vec![5.0; 6], 3);
        let params = HwParams::new(0.5, 0.5, 0.5).unwrap();

        // Act
        let rmse = in_sample_rmse(&params, &s).unwrap();

        // Assert
        assert_eq!(rmse, 0.0);
    }

    #[test]
    // Purpose
    // -------
    // An exactly repeating seasonal pattern with zero trend should fit
    // almost perfectly: the seed already captures the pattern and the
    // same-step reconstruction keeps reproducing it.
    //
    // Given
    // -----
    // - Three repetitions of (10, 20, 30, 40) with period 4.
    //
    // Expect
    // ------
    // - RMSE below 1e-9.
    fn repeating_pattern_scores_near_zero() {
        // Arrange
        let pattern = vec![10.0, 20.0, 30.0, 40.0];
        let values: Vec<f64> = pattern.iter().cycle().take(12).copied().collect();
        let s = series(values, 4);
        let params = HwParams::new(0.2, 0.1, 0.2).unwrap();

        // Act
        let rmse = in_sample_rmse(&params, &s).unwrap();

        // Assert
        assert!(rmse < 1e-9, "expected near-perfect fit, got rmse = {rmse}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure the evaluator is a pure function of its inputs.
    //
    // Given
    // -----
    // - A noisy-ish seasonal series scored twice with the same weights.
    //
    // Expect
    // ------
    // - Bit-identical scores.
    fn evaluation_is_deterministic() {
        // Arrange
        let s = series(vec![3.0, 6.0, 4.0, 8.0, 5.0, 9.0, 6.0, 11.0], 2);
        let params = HwParams::new(0.3, 0.4, 0.5).unwrap();

        // Act
        let first = in_sample_rmse(&params, &s).unwrap();
        let second = in_sample_rmse(&params, &s).unwrap();

        // Assert
        assert_eq!(first, second);
        assert!(first.is_finite() && first >= 0.0);
    }
}
