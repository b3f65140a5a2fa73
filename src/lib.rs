//! holt_winters — multiplicative Holt-Winters smoothing with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the smoothing routines to Python via the `_holt_winters` extension module.
//! When the `python-bindings` feature is enabled, this module defines the
//! Python-facing classes and submodules used by the `holt_winters` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`smoothing` and `optimization`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_holt_winters` Python extension.
//! - Create and register the `smoothing_models` Python submodule under
//!   `holt_winters` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts (e.g.
//!   [`HoltWintersModel`], [`ForecastResult`]).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_holt_winters.smoothing_models` and
//!   are typically wrapped by thin pure-Python facades in the top-level
//!   `holt_winters` package.
//! - Indexing and seasonal conventions follow the documentation of the
//!   underlying Rust modules (`smoothing::core`, `smoothing::models`).
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_holt_winters` module defined
//!   here and wraps its classes in user-facing Python APIs.
//! - External users are expected to interact with either the safe Rust APIs or
//!   the pure-Python wrappers; the PyO3 plumbing is considered internal.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by the integration tests under `tests/`.
//! - Smoke tests for the PyO3 bindings verify that classes can be constructed,
//!   called, and round-tripped correctly from Python.

pub mod optimization;
pub mod smoothing;
pub mod utils;

pub use crate::smoothing::{
    core::{
        data::SeasonalSeries,
        forecast::{run_forecast, ForecastResult},
        options::HwOptions,
        params::HwParams,
    },
    errors::{HwError, HwResult},
    models::holt_winters::{multiplicative, HoltWintersModel},
};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::bounded::traits::OptimOutcome,
    utils::{build_hw_options, extract_seasonal_series},
};

/// HoltWinters — Python-facing wrapper for the multiplicative model.
///
/// Purpose
/// -------
/// Expose the [`HoltWintersModel`] API to Python callers while preserving the
/// core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build a [`HoltWintersModel`] with optimizer options assembled from
///   Python-friendly arguments.
/// - Provide `fit` and `predict` methods that convert Python arrays into
///   [`SeasonalSeries`] values and delegate to the core implementation.
/// - Cache optimization, fitted-weight, and forecast results for inspection
///   from Python via property getters.
///
/// Parameters
/// ----------
/// Constructed from Python via `HoltWinters(...)`:
/// - `tol_grad`, `tol_cost`, `max_iter`, `line_searcher`, `lbfgs_mem`
///   Optimizer tolerances and configuration used to build the solver options.
/// - `search_start`: `Option<(f64, f64, f64)>`
///   Optional `(alpha, beta, gamma)` triple used as the search start; defaults
///   to `(0.01, 0.9, 0.01)`.
///
/// Fields
/// ------
/// - `inner`: [`HoltWintersModel`]
///   Fully configured model that owns cached fit and forecast results.
///
/// Invariants
/// ----------
/// - `inner` is always a well-formed [`HoltWintersModel`] created through
///   [`build_hw_options`]; its search start satisfies the weight bounds.
///
/// Performance
/// -----------
/// - All heavy numerical work occurs inside `inner`; this wrapper performs
///   only input conversion, dispatch, and error mapping.
///
/// Notes
/// -----
/// - Native Rust callers should usually work with [`HoltWintersModel`]
///   directly; this type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "holt_winters.smoothing_models")]
pub struct HoltWinters {
    /// Underlying Rust HoltWintersModel.
    pub inner: HoltWintersModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl HoltWinters {
    #[new]
    #[pyo3(
        signature = (
            tol_grad = None,
            tol_cost = None,
            max_iter = None,
            line_searcher = None,
            lbfgs_mem = None,
            search_start = None,
        ),
        text_signature = "(/, tol_grad=None, tol_cost=None, max_iter=None, \
                          line_searcher=None, lbfgs_mem=None, search_start=None)"
    )]
    pub fn multiplicative(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
        line_searcher: Option<&str>, lbfgs_mem: Option<usize>,
        search_start: Option<(f64, f64, f64)>,
    ) -> PyResult<Self> {
        let options =
            build_hw_options(tol_grad, tol_cost, max_iter, line_searcher, lbfgs_mem, search_start)?;
        Ok(HoltWinters { inner: HoltWintersModel::new(options) })
    }

    #[pyo3(
        signature = (data, period),
        text_signature = "(self, data, period, /)"
    )]
    pub fn fit<'py>(
        &mut self, py: Python<'py>, data: &Bound<'py, PyAny>, period: usize,
    ) -> PyResult<()> {
        let series = extract_seasonal_series(py, data, period)?;
        self.inner.fit(&series)?;
        Ok(())
    }

    #[pyo3(
        signature = (data, period, horizon),
        text_signature = "(self, data, period, horizon, /)"
    )]
    pub fn predict<'py>(
        &mut self, py: Python<'py>, data: &Bound<'py, PyAny>, period: usize, horizon: usize,
    ) -> PyResult<Vec<f64>> {
        let series = extract_seasonal_series(py, data, period)?;
        let result = self.inner.predict(horizon, &series)?;
        Ok(result.forecast.to_vec())
    }

    #[getter]
    pub fn results(&self) -> PyResult<HwOptimOutcome> {
        match &self.inner.results {
            Some(outcome) => Ok(HwOptimOutcome { inner: outcome.clone() }),
            None => Err(HwError::ModelNotFitted.into()),
        }
    }

    #[getter]
    pub fn fitted_params(&self) -> PyResult<HwFittedWeights> {
        match &self.inner.fitted_params {
            Some(params) => Ok(HwFittedWeights { inner: *params }),
            None => Err(HwError::ModelNotFitted.into()),
        }
    }

    #[getter]
    pub fn forecast_result(&self) -> Vec<f64> {
        match &self.inner.forecast {
            Some(fr) => fr.forecast.to_vec(),
            None => Vec::new(),
        }
    }

    #[getter]
    pub fn smoothed(&self) -> Vec<f64> {
        match &self.inner.forecast {
            Some(fr) => fr.smoothed.to_vec(),
            None => Vec::new(),
        }
    }

    #[getter]
    pub fn rmse(&self) -> Option<f64> {
        self.inner.forecast.as_ref().map(|fr| fr.rmse)
    }
}

/// HwOptimOutcome — optimization outcome for a Holt-Winters fit exposed to Python.
///
/// Purpose
/// -------
/// Present the key optimizer diagnostics from [`OptimOutcome`] to Python code
/// in a lightweight, read-only wrapper.
///
/// Fields
/// ------
/// - `inner`: [`OptimOutcome`]
///   Full optimizer result from the in-sample RMSE minimization.
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should prefer
///   using [`OptimOutcome`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "holt_winters.smoothing_models")]
pub struct HwOptimOutcome {
    /// Underlying Rust OptimOutcome.
    pub inner: OptimOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl HwOptimOutcome {
    #[getter]
    pub fn theta_hat(&self) -> Vec<f64> {
        self.inner.theta_hat.to_vec()
    }

    #[getter]
    pub fn value(&self) -> f64 {
        self.inner.value
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn status(&self) -> String {
        self.inner.status.clone()
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn grad_norm(&self) -> Option<f64> {
        self.inner.grad_norm
    }

    #[getter]
    pub fn fn_evals(&self) -> Vec<(String, u64)> {
        self.inner.fn_evals.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }
}

/// HwFittedWeights — fitted smoothing weights exposed to Python.
///
/// Purpose
/// -------
/// Provide Python access to the `(alpha, beta, gamma)` triple obtained at the
/// fitted optimum of a [`HoltWintersModel`].
///
/// Fields
/// ------
/// - `inner`: [`HwParams`]
///   Validated smoothing weights corresponding to the last fitted model.
///
/// Notes
/// -----
/// - Rust callers should use [`HwParams`] directly; this wrapper exists
///   solely for the PyO3 binding.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "holt_winters.smoothing_models")]
pub struct HwFittedWeights {
    pub inner: HwParams,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl HwFittedWeights {
    #[getter]
    pub fn alpha(&self) -> f64 {
        self.inner.alpha
    }

    #[getter]
    pub fn beta(&self) -> f64 {
        self.inner.beta
    }

    #[getter]
    pub fn gamma(&self) -> f64 {
        self.inner.gamma
    }
}

/// One-call multiplicative Holt-Winters forecast for Python callers.
///
/// Fits the smoothing weights by in-sample RMSE search when any of `alpha`,
/// `beta`, or `gamma` is omitted, then forecasts `horizon` steps past the end
/// of `data`. Returns `(forecast, smoothed, rmse)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (data, period, horizon, alpha = None, beta = None, gamma = None),
    text_signature = "(data, period, horizon, /, alpha=None, beta=None, gamma=None)"
)]
pub fn multiplicative_forecast<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, period: usize, horizon: usize, alpha: Option<f64>,
    beta: Option<f64>, gamma: Option<f64>,
) -> PyResult<(Vec<f64>, Vec<f64>, f64)> {
    use crate::utils::extract_f64_array;
    use ndarray::Array1;
    use pyo3::exceptions::PyValueError;

    let arr = extract_f64_array(py, data)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("data must be a 1-D contiguous float64 array or sequence")
    })?;
    let series = Array1::from(slice.to_vec());

    let result = multiplicative(series, period, horizon, alpha, beta, gamma)?;
    Ok((result.forecast.to_vec(), result.smoothed.to_vec(), result.rmse))
}

/// _holt_winters — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_holt_winters` Python module and register the
/// `smoothing_models` submodule used by the public `holt_winters` package.
///
/// Key behaviors
/// -------------
/// - Create the `smoothing_models` submodule.
/// - Attach it to the parent `_holt_winters` module.
/// - Register the submodule in `sys.modules` so it is importable via dotted
///   paths from Python.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _holt_winters<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let smoothing_models_mod = PyModule::new(_py, "smoothing_models")?;
    smoothing_models(_py, m, &smoothing_models_mod)?;

    // Manually add the submodule into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("holt_winters.smoothing_models", smoothing_models_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn smoothing_models<'py>(
    _py: Python, holt_winters: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<HoltWinters>()?;
    m.add_class::<HwOptimOutcome>()?;
    m.add_class::<HwFittedWeights>()?;
    m.add_function(wrap_pyfunction!(multiplicative_forecast, m)?)?;
    holt_winters.add_submodule(m)?;
    Ok(())
}
