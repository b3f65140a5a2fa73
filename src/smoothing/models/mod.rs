//! models — high-level multiplicative Holt–Winters APIs.
//!
//! Purpose
//! -------
//! Collect the user-facing smoothing model surface: the fit/predict model
//! type and the one-call forecasting entry point. This layer sits on top
//! of `smoothing::core`, wiring the recurrence and fit objective into the
//! generic bounded optimizer.
//!
//! Key behaviors
//! -------------
//! - Expose a complete model type [`HoltWintersModel`] that implements
//!   [`Objective`](crate::optimization::bounded::Objective) and provides
//!   `fit` and `predict` methods with cached results.
//! - Expose [`multiplicative`], which validates raw observations, searches
//!   for weights only when the caller leaves any unset, and returns the
//!   forecast/smoothed/RMSE bundle in one call.
//!
//! Invariants & assumptions
//! ------------------------
//! - Observations are carried in validated
//!   [`SeasonalSeries`](crate::smoothing::core::data::SeasonalSeries)
//!   instances: finite, non-negative, and at least two cycles long.
//! - Unconstrained optimizer vectors θ always have length 3 and finite
//!   entries; this is enforced by the objective's `check` hook.
//! - Weight-space invariants are enforced by
//!   [`HwParams`](crate::smoothing::core::params::HwParams); invalid θ is
//!   surfaced as an error instead of a panic.
//!
//! Conventions
//! -----------
//! - Optimization is performed in unconstrained θ-space with the layout
//!   `θ = (θ_α, θ_β, θ_γ)`, each coordinate mapped through the bounded
//!   logistic into the weight box.
//! - Errors are reported as `HwResult` / `OptResult`; panics indicate
//!   programming errors, not bad user data or bad θ.
//!
//! Downstream usage
//! ----------------
//! - Build a [`HoltWintersModel`] via `HoltWintersModel::new(options)`,
//!   then call `fit(&series)` and `predict(horizon, &series)`.
//! - Or call [`multiplicative`] directly with raw observations for the
//!   classic one-shot workflow; the Python bindings wrap exactly this
//!   function.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`holt_winters`] cover predict-before-fit rejection,
//!   the explicit-weights path, and θ validation.
//! - Integration tests exercise the full pipeline
//!   (series → search → forecast) through the public API.

pub mod holt_winters;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::holt_winters::{HoltWintersModel, multiplicative};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use holt_winters::smoothing::models::prelude::*;
//
// to import the main model surface in a single line.

pub mod prelude {
    pub use super::holt_winters::{HoltWintersModel, multiplicative};
}
