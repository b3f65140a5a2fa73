//! smoothing — multiplicative Holt–Winters stack: core numerics, models,
//! and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive triple-exponential-smoothing layer that bundles the
//! validated series container, the weight triple, the level/trend/seasonal
//! recurrence, model-level fitting / forecasting, and shared error types
//! under a single namespace. This is the main entry point for seasonal
//! forecasting in the crate, and is the surface most consumers (including
//! Python bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect core numerical and structural building blocks in [`core`]:
//!   the series container, state seeding, the recurrence engine, the fit
//!   objective, the forecast driver, and saturation clipping.
//! - Expose a user-facing model API in [`models`] via
//!   [`HoltWintersModel`] and the one-call [`multiplicative`] entry point.
//! - Centralize smoothing-specific error types in [`errors`] (`HwError`,
//!   `ParamError`, and the `HwResult` / `ParamResult` aliases) so callers
//!   see a uniform error surface across the stack.
//! - Re-export the everyday types directly from this module and via
//!   [`prelude`] for ergonomic imports in downstream crates and bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Observations are carried in validated [`SeasonalSeries`] instances:
//!   finite, non-negative, and spanning at least two full seasonal
//!   cycles.
//! - Smoothing weights live in the closed interval
//!   `[WEIGHT_MIN, WEIGHT_MAX]`; unconstrained optimizer vectors θ have
//!   length 3 and finite entries.
//! - The recurrence state holds only finite values; degenerate steps are
//!   reported as `HwError` rather than letting NaNs / infinities
//!   propagate.
//! - Every fit and forecast is a pure function of its inputs; the
//!   caller's series is never mutated or extended.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; index `i` belongs to seasonal
//!   position `i % period`.
//! - Optimization happens in unconstrained θ-space via the bounded
//!   logistic/logit pair from `optimization::numerical_stability`.
//! - Errors are reported as `HwResult` / `ParamResult`; panics indicate
//!   programming errors, not bad user data.
//!
//! Downstream usage
//! ----------------
//! - Call [`multiplicative`] with raw observations for the classic
//!   one-shot forecast, or build a [`HoltWintersModel`] for the
//!   fit-then-predict workflow with cached diagnostics.
//! - Python bindings convert NumPy arrays at the boundary and delegate to
//!   exactly this surface.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each submodule; integration tests exercise
//!   the full pipeline (series → search → forecast) through the public
//!   API.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    ForecastResult, HwOptions, HwParams, InitState, SeasonalSeries, SmoothingState,
    in_sample_rmse, run_forecast,
};
pub use self::errors::{HwError, HwResult, ParamError, ParamResult};
pub use self::models::{HoltWintersModel, multiplicative};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use holt_winters::smoothing::prelude::*;
//
// to import the main smoothing surface in a single line.

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::errors::{HwError, HwResult, ParamError, ParamResult};
    pub use super::models::prelude::*;
}
