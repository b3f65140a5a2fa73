//! Multiplicative Holt–Winters model: objective wiring and forecasting.
//!
//! This module wires the smoothing core to the `Objective` trait. The
//! optimizer proposes unconstrained vectors `θ`; each is mapped into the
//! weight box through the bounded logistic, scored by in-sample RMSE, and
//! the best triple is cached for forecasting.
//!
//! Key ideas:
//! - Weights live in unconstrained space during the search:
//!   `(α, β, γ) = bounded_logistic(θ)` coordinate-wise, so the solver
//!   never leaves the admissible box.
//! - The objective is the in-sample RMSE of a full smoothing run; no
//!   state survives between evaluations.
//! - [`multiplicative`] is the one-call entry point; it searches for
//!   weights only when the caller leaves any of them unset.
use crate::{
    optimization::{
        bounded::{Cost, Objective, OptimOutcome, Theta, minimize},
        errors::OptResult,
    },
    smoothing::{
        core::{
            data::SeasonalSeries,
            fit::in_sample_rmse,
            forecast::{ForecastResult, run_forecast},
            options::HwOptions,
            params::HwParams,
        },
        errors::{HwError, HwResult},
    },
};
use ndarray::Array1;

/// Multiplicative Holt–Winters model with RMSE-minimizing weight search.
///
/// Encapsulates run-time options (`options`) and, after fitting, the last
/// optimization outcome (`results`), the fitted weights
/// (`fitted_params`), and the last forecast bundle (`forecast`).
///
/// # Notes
/// - Implements [`Objective`] so it plugs directly into Argmin-based
///   optimizers.
/// - Fitting and forecasting never mutate the caller's series.
#[derive(Debug, Clone, PartialEq)]
pub struct HoltWintersModel {
    /// Model options (solver configuration and search start).
    pub options: HwOptions,
    /// Fit results (populated after `fit`).
    pub results: Option<OptimOutcome>,
    /// Fitted smoothing weights (populated after `fit`).
    pub fitted_params: Option<HwParams>,
    /// Forecasting results (populated after `predict`).
    pub forecast: Option<ForecastResult>,
}

impl HoltWintersModel {
    /// Construct a new [`HoltWintersModel`] with the given options.
    pub fn new(options: HwOptions) -> HoltWintersModel {
        HoltWintersModel { options, results: None, fitted_params: None, forecast: None }
    }

    /// Fit the smoothing weights by minimizing in-sample RMSE and cache
    /// the results.
    ///
    /// ## Steps
    /// 1. Map `options.search_start` into unconstrained θ-space.
    /// 2. Run L-BFGS per `options.solver`.
    /// 3. Store the optimizer outcome in `self.results` and the recovered
    ///    weight triple in `self.fitted_params`.
    ///
    /// ## Errors
    /// - [`HwError::OptimizationFailed`] if the solver stops without a
    ///   terminating status.
    /// - Propagates objective failures (degenerate data, non-finite
    ///   state) surfaced during the search.
    pub fn fit(&mut self, data: &SeasonalSeries) -> HwResult<()> {
        let theta0 = self.options.search_start.to_theta();
        let outcome = minimize(self, theta0, data, &self.options.solver)?;
        if !outcome.converged {
            return Err(HwError::OptimizationFailed { status: outcome.status });
        }
        self.fitted_params = Some(HwParams::from_theta(&outcome.theta_hat)?);
        self.results = Some(outcome);
        Ok(())
    }

    /// Forecast `horizon` steps ahead using the fitted weights.
    ///
    /// Runs the full recurrence over `data` and `horizon` synthesized
    /// steps, caches the bundle in `self.forecast`, and returns a copy.
    ///
    /// ## Errors
    /// - [`HwError::ModelNotFitted`] if called before `fit`.
    /// - Propagates errors from [`run_forecast`] (invalid horizon,
    ///   degenerate recurrence).
    pub fn predict(&mut self, horizon: usize, data: &SeasonalSeries) -> HwResult<ForecastResult> {
        let params = self.fitted_params.as_ref().ok_or(HwError::ModelNotFitted)?;
        let result = run_forecast(data, params, horizon)?;
        self.forecast = Some(result.clone());
        Ok(result)
    }
}

impl Objective for HoltWintersModel {
    type Data = SeasonalSeries;

    /// Objective evaluation at parameter vector `θ`.
    ///
    /// Maps `θ` into the weight box and scores the triple by in-sample
    /// RMSE over a fresh smoothing run.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        let params = HwParams::from_theta(theta)?;
        Ok(in_sample_rmse(&params, data)?)
    }

    /// Validate an unconstrained parameter vector `θ`.
    ///
    /// Checks `θ.len() == 3` and that all entries are finite; the bounded
    /// transform guarantees admissibility beyond that.
    fn check(&self, theta: &Theta, _data: &Self::Data) -> OptResult<()> {
        HwParams::from_theta(theta)?;
        Ok(())
    }
}

/// One-call multiplicative Holt–Winters forecast.
///
/// Validates the observations, obtains a weight triple (either the fully
/// supplied one or, when any weight is unset, the RMSE-minimizing triple
/// found by L-BFGS from the classic start `(0.01, 0.9, 0.01)`), and runs
/// the recursive forecast.
///
/// # Parameters
/// - `data`: observations, oldest first; left untouched.
/// - `period`: observations per seasonal cycle.
/// - `horizon`: number of future steps to synthesize, at least 1.
/// - `alpha`, `beta`, `gamma`: optional smoothing weights. Supplying all
///   three skips the parameter search; leaving any unset searches for the
///   whole triple.
///
/// # Errors
/// - Validation errors from [`SeasonalSeries::new`] and
///   [`HwParams::new`](crate::smoothing::core::params::HwParams::new).
/// - [`HwError::InvalidHorizon`] for a zero horizon.
/// - [`HwError::OptimizationFailed`] if the weight search fails.
pub fn multiplicative(
    data: Array1<f64>, period: usize, horizon: usize, alpha: Option<f64>, beta: Option<f64>,
    gamma: Option<f64>,
) -> HwResult<ForecastResult> {
    let series = SeasonalSeries::new(data, period)?;
    let params = match (alpha, beta, gamma) {
        (Some(alpha), Some(beta), Some(gamma)) => HwParams::new(alpha, beta, gamma)?,
        _ => {
            let mut model = HoltWintersModel::new(HwOptions::default());
            model.fit(&series)?;
            // `fit` always populates `fitted_params` on success.
            model.fitted_params.ok_or(HwError::ModelNotFitted)?
        }
    };
    run_forecast(&series, &params, horizon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Predict-before-fit rejection.
    // - The explicit-weights path of `multiplicative` (no search).
    // - Objective `check` on malformed θ.
    //
    // They intentionally DO NOT cover:
    // - Full parameter searches; see the integration tests.
    // -------------------------------------------------------------------------

    fn seasonal_series() -> SeasonalSeries {
        let values = vec![3.0, 6.0, 4.0, 8.0, 5.0, 9.0, 6.0, 11.0];
        SeasonalSeries::new(Array1::from(values), 2).expect("series should be valid")
    }

    #[test]
    // Purpose
    // -------
    // Calling `predict` before `fit` must fail cleanly.
    //
    // Given
    // -----
    // - A fresh model and a valid series.
    //
    // Expect
    // ------
    // - `HwError::ModelNotFitted`.
    fn predict_requires_fit() {
        // Arrange
        let mut model = HoltWintersModel::new(HwOptions::default());
        let series = seasonal_series();

        // Act
        let result = model.predict(3, &series);

        // Assert
        assert_eq!(result.map(|_| ()), Err(HwError::ModelNotFitted));
    }

    #[test]
    // Purpose
    // -------
    // Supplying all three weights must bypass the search and produce the
    // same output as calling the forecast driver directly.
    //
    // Given
    // -----
    // - A period-2 series, horizon 4, and the triple (0.3, 0.2, 0.4).
    //
    // Expect
    // ------
    // - `multiplicative` output equal to `run_forecast` output.
    fn explicit_weights_skip_the_search() {
        // Arrange
        let series = seasonal_series();
        let params = HwParams::new(0.3, 0.2, 0.4).unwrap();
        let direct = run_forecast(&series, &params, 4).unwrap();

        // Act
        let via_api = multiplicative(
            series.data().clone(),
            series.period(),
            4,
            Some(0.3),
            Some(0.2),
            Some(0.4),
        )
        .unwrap();

        // Assert
        assert_eq!(via_api, direct);
    }

    #[test]
    // Purpose
    // -------
    // The objective's `check` hook rejects malformed θ before any solver
    // work happens.
    //
    // Given
    // -----
    // - A length-2 θ and a θ containing NaN.
    //
    // Expect
    // ------
    // - Both rejected.
    fn check_rejects_malformed_theta() {
        // Arrange
        let model = HoltWintersModel::new(HwOptions::default());
        let series = seasonal_series();

        // Act / Assert
        assert!(model.check(&ndarray::array![0.0, 0.0], &series).is_err());
        assert!(model.check(&ndarray::array![0.0, f64::NAN, 0.0], &series).is_err());
    }
}
