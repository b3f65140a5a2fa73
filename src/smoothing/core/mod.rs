//! core — shared Holt–Winters data, parameters, and recurrence.
//!
//! Purpose
//! -------
//! Collect the core building blocks for multiplicative Holt–Winters
//! smoothing: the validated series container, the smoothing-weight
//! triple, state seeding, the level/trend/seasonal recurrence, the fit
//! objective, and the forecast driver. The model layer builds on top of
//! these primitives.
//!
//! Key behaviors
//! -------------
//! - Validate observations once, at the boundary ([`SeasonalSeries`]),
//!   so the numerical core never re-checks inputs.
//! - Seed deterministic starting state from the first two seasonal cycles
//!   ([`InitState`]).
//! - Advance the multiplicative recurrence one observation at a time
//!   ([`SmoothingState`]), with reconstruction alignment
//!   ([`Alignment`]) made explicit so in-sample fitting and frontier
//!   forecasting share one primitive.
//! - Score weight triples by in-sample RMSE ([`in_sample_rmse`]) and run
//!   recursive multi-step forecasts ([`run_forecast`],
//!   [`ForecastResult`]).
//! - Keep reconstructed values inside `[0, f64::MAX]` via
//!   [`saturating_clip`].
//!
//! Invariants & assumptions
//! ------------------------
//! - All observations held by a [`SeasonalSeries`] are finite,
//!   non-negative, and span at least two full cycles.
//! - Smoothing weights in an [`HwParams`] lie in the closed interval
//!   `[WEIGHT_MIN, WEIGHT_MAX]`.
//! - The recurrence state holds only finite values; a degenerate step is
//!   reported as an `HwError`, never stored.
//! - Every run is a pure function of (series, weights, horizon); there is
//!   no cross-call state.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; index `i` belongs to seasonal
//!   position `i % period`.
//! - The seasonal history is append-only with the first `period` entries
//!   seeded from the first cycle.
//! - This module avoids I/O and logging; it operates purely on `ndarray`
//!   containers and scalar values. Error conditions are reported via
//!   `HwResult` / `ParamResult`.
//!
//! Downstream usage
//! ----------------
//! - The model layer
//!   ([`HoltWintersModel`](crate::smoothing::models::holt_winters::HoltWintersModel))
//!   wires [`in_sample_rmse`] into the optimizer via its `Objective`
//!   implementation and delegates prediction to [`run_forecast`].
//! - Python bindings construct a [`SeasonalSeries`] from a NumPy array
//!   and surface [`ForecastResult`] fields as plain arrays.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover: validation rules, the exact seeding
//!   formulas, hand-computed recurrence steps, alignment semantics,
//!   objective determinism, and forecast shapes.
//! - Integration tests at the model layer exercise the full pipeline
//!   (series → search → forecast).

pub mod clip;
pub mod data;
pub mod fit;
pub mod forecast;
pub mod init;
pub mod options;
pub mod params;
pub mod state;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::clip::saturating_clip;
pub use self::data::SeasonalSeries;
pub use self::fit::in_sample_rmse;
pub use self::forecast::{ForecastResult, run_forecast};
pub use self::init::InitState;
pub use self::options::HwOptions;
pub use self::params::{HwParams, WEIGHT_MAX, WEIGHT_MIN};
pub use self::state::{Alignment, SmoothingState};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use holt_winters::smoothing::core::prelude::*;
//
// to import the main smoothing core surface in a single line.

pub mod prelude {
    pub use super::data::SeasonalSeries;
    pub use super::fit::in_sample_rmse;
    pub use super::forecast::{ForecastResult, run_forecast};
    pub use super::init::InitState;
    pub use super::options::HwOptions;
    pub use super::params::HwParams;
    pub use super::state::{Alignment, SmoothingState};
}
