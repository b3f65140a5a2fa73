//! core::forecast — recursive multi-step forecasting.
//!
//! Purpose
//! -------
//! Run the full smoothing pipeline for a caller: seed the state, advance
//! across the observed series, then keep the recurrence rolling past the
//! frontier by feeding it its own one-step-ahead forecasts. Returns the
//! forecast path, the in-sample smoothed fit, and the in-sample RMSE in
//! one bundle.
//!
//! Key behaviors
//! -------------
//! - Works on an internal copy of the observations; the caller's series
//!   is never mutated or extended.
//! - The forecast is recursive: each synthesized point enters the working
//!   series and drives the state that generates the next point, exactly
//!   as if it had been observed.
//! - Each synthesized point is `(a[-1] + b[-1]) * s[-m]` (latest
//!   level+trend times the seasonal index from one full cycle back),
//!   clamped to the non-negative range before being fed back in.
//! - The reported RMSE covers the observed portion only, summing the
//!   first `len - horizon` squared residuals while still dividing by
//!   `len`. It is therefore at most the
//!   [`in_sample_rmse`](crate::smoothing::core::fit::in_sample_rmse)
//!   score for the same weights, with equality only when the dropped
//!   residuals are all zero.
//!
//! Invariants & assumptions
//! ------------------------
//! - `horizon >= 1`; a zero horizon is a caller error.
//! - `forecast` has exactly `horizon` entries and `smoothed` exactly
//!   `series.len()` entries, all finite and non-negative.
//!
//! Downstream usage
//! ----------------
//! - [`HoltWintersModel::predict`](crate::smoothing::models::holt_winters::HoltWintersModel::predict)
//!   and the top-level [`multiplicative`](crate::smoothing::models::holt_winters::multiplicative)
//!   entry point both delegate here once weights are known.
//!
//! Testing notes
//! -------------
//! - Unit tests below pin output shapes, non-negativity, the truncated
//!   residual sum behind the reported RMSE, and that the caller's series
//!   is left untouched.
use ndarray::Array1;

use crate::smoothing::{
    core::{
        data::SeasonalSeries,
        init::InitState,
        params::HwParams,
        state::{Alignment, SmoothingState},
    },
    errors::{HwError, HwResult},
};

/// Output bundle of a forecast run.
///
/// - `forecast`: synthesized future values, length = requested horizon.
/// - `smoothed`: in-sample fitted values, length = input series length.
/// - `rmse`: in-sample error of the fit; sums the squared residuals of
///   the first `len - horizon` observations and divides by `len`.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub forecast: Array1<f64>,
    pub smoothed: Array1<f64>,
    pub rmse: f64,
}

/// Run the smoothing recurrence across `series` and `horizon` synthesized
/// steps beyond it.
///
/// # Parameters
/// - `series`: validated observations; read-only.
/// - `params`: smoothing weights to run with.
/// - `horizon`: number of future steps to synthesize, at least 1.
///
/// # Errors
/// - [`HwError::InvalidHorizon`] if `horizon == 0`.
/// - [`HwError::DegenerateCycle`] if seeding fails.
/// - [`HwError::NonFiniteState`] if the recurrence degenerates.
pub fn run_forecast(
    series: &SeasonalSeries, params: &HwParams, horizon: usize,
) -> HwResult<ForecastResult> {
    if horizon == 0 {
        return Err(HwError::InvalidHorizon { horizon });
    }

    let size = series.len();
    let mut working: Vec<f64> = series.data().to_vec();
    let mut state = SmoothingState::new(InitState::seed(series)?);

    for i in 0..size + horizon {
        if i >= size {
            // Frontier: synthesize the next observation before consuming it.
            working.push(state.one_step_forecast());
        }
        state.advance(working[i], params)?;
    }

    let smoothed =
        Array1::from_iter((0..size).map(|i| state.reconstruct(i, Alignment::SameStep)));
    // The last `horizon` in-sample residuals are dropped from the sum while
    // the denominator stays at `size`.
    let retained = size.saturating_sub(horizon);
    let sum_sq: f64 = series
        .data()
        .iter()
        .zip(smoothed.iter())
        .take(retained)
        .map(|(&y, &fit)| (y - fit) * (y - fit))
        .sum();
    let rmse = (sum_sq / size as f64).sqrt();
    let forecast = Array1::from_iter(working[size..].iter().copied());

    Ok(ForecastResult { forecast, smoothed, rmse })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smoothing::core::fit::in_sample_rmse;
    use ndarray::Array1;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Output shapes and non-negativity.
    // - Horizon-zero rejection.
    // - The truncated residual sum behind the reported RMSE.
    // - Continuation of a flat series at its level.
    //
    // They intentionally DO NOT cover:
    // - Parameter search; see the model and integration tests.
    // -------------------------------------------------------------------------

    fn series(values: Vec<f64>, period: usize) -> SeasonalSeries {
        SeasonalSeries::new(Array1::from(values), period).expect("series should be valid")
    }

    #[test]
    // Purpose
    // -------
    // Pin output shapes and basic value properties.
    //
    // Given
    // -----
    // - An 8-point period-2 series forecast 5 steps ahead.
    //
    // Expect
    // ------
    // - 5 forecast entries, 8 smoothed entries, all finite and >= 0, and
    //   a finite non-negative RMSE.
    fn shapes_and_ranges_hold() {
        // Arrange
        let s = series(vec![3.0, 6.0, 4.0, 8.0, 5.0, 9.0, 6.0, 11.0], 2);
        let params = HwParams::new(0.3, 0.2, 0.4).unwrap();

        // Act
        let result = run_forecast(&s, &params, 5).unwrap();

        // Assert
        assert_eq!(result.forecast.len(), 5);
        assert_eq!(result.smoothed.len(), 8);
        assert!(result.forecast.iter().all(|v| v.is_finite() && *v >= 0.0));
        assert!(result.smoothed.iter().all(|v| v.is_finite() && *v >= 0.0));
        assert!(result.rmse.is_finite() && result.rmse >= 0.0);
    }

    #[test]
    // Purpose
    // -------
    // A zero horizon is rejected up front.
    //
    // Given
    // -----
    // - Any valid series and `horizon = 0`.
    //
    // Expect
    // ------
    // - `HwError::InvalidHorizon`.
    fn rejects_zero_horizon() {
        // Arrange
        let s = series(vec![1.0, 2.0, 1.0, 2.0], 2);
        let params = HwParams::new(0.5, 0.5, 0.5).unwrap();

        // Act
        let result = run_forecast(&s, &params, 0);

        // Assert
        assert_eq!(result.map(|_| ()), Err(HwError::InvalidHorizon { horizon: 0 }));
    }

    #[test]
    // Purpose
    // -------
    // Pin the reported RMSE to its truncated definition: the sum covers
    // only the first `len - horizon` squared residuals while the
    // denominator stays at `len`.
    //
    // Given
    // -----
    // - The 8-point period-2 series [3, 6, 4, 8, 5, 9, 6, 11] with
    //   weights (0.3, 0.2, 0.4) and horizon 3.
    //
    // Expect
    // ------
    // - The reported RMSE equals the score recomputed from the returned
    //   smoothed values over the first 5 residuals only (0.62483584...),
    //   and stays strictly below the fit evaluator's full-span score.
    fn rmse_sums_truncated_residuals() {
        // Arrange
        let s = series(vec![3.0, 6.0, 4.0, 8.0, 5.0, 9.0, 6.0, 11.0], 2);
        let params = HwParams::new(0.3, 0.2, 0.4).unwrap();

        // Act
        let result = run_forecast(&s, &params, 3).unwrap();
        let truncated_sum: f64 = s
            .data()
            .iter()
            .zip(result.smoothed.iter())
            .take(s.len() - 3)
            .map(|(&y, &fit)| (y - fit) * (y - fit))
            .sum();
        let expected = (truncated_sum / s.len() as f64).sqrt();

        // Assert
        assert!((result.rmse - expected).abs() < 1e-12);
        assert!((result.rmse - 0.624835843878453).abs() < 1e-9);
        assert!(result.rmse < in_sample_rmse(&params, &s).unwrap());
    }

    #[test]
    // Purpose
    // -------
    // A flat series has level = value, zero trend, and unit seasonal
    // indices, so every forecast step continues at the same value.
    //
    // Given
    // -----
    // - The constant series [7, 7, 7, 7, 7, 7] with period 3, horizon 4.
    //
    // Expect
    // ------
    // - Every forecast entry equals 7 and the caller's series still holds
    //   its 6 original observations.
    fn flat_series_continues_flat() {
        // Arrange
        let s = series(vec![7.0; 6], 3);
        let params = HwParams::new(0.4, 0.3, 0.2).unwrap();

        // Act
        let result = run_forecast(&s, &params, 4).unwrap();

        // Assert
        assert!(result.forecast.iter().all(|&v| (v - 7.0).abs() < 1e-12));
        assert_eq!(s.len(), 6);
        assert!(s.data().iter().all(|&v| v == 7.0));
    }
}
