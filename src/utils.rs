#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    optimization::bounded::traits::{LineSearcher, SolverOptions, Tolerances},
    smoothing::{
        core::{data::SeasonalSeries, options::HwOptions, params::HwParams},
        errors::HwError,
    },
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

#[cfg(feature = "python-bindings")]
pub fn extract_seasonal_series<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, period: usize,
) -> PyResult<SeasonalSeries> {
    let arr = extract_f64_array(py, raw_data)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("data must be a 1-D contiguous float64 array or sequence")
    })?;
    let series = SeasonalSeries::new(Array1::from(slice.to_vec()), period)?;
    Ok(series)
}

#[cfg(feature = "python-bindings")]
pub fn build_hw_options(
    tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    line_searcher: Option<&str>, lbfgs_mem: Option<usize>, search_start: Option<(f64, f64, f64)>,
) -> PyResult<HwOptions> {
    let solver = extract_solver_opts(tol_grad, tol_cost, max_iter, line_searcher, lbfgs_mem)?;

    let start = match search_start {
        Some((alpha, beta, gamma)) => HwParams::new(alpha, beta, gamma)?,
        None => HwOptions::default().search_start,
    };

    Ok(HwOptions::new(solver, start))
}

#[cfg(feature = "python-bindings")]
fn extract_solver_opts(
    tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    line_searcher: Option<&str>, lbfgs_mem: Option<usize>,
) -> PyResult<SolverOptions> {
    use std::str::FromStr;

    // Tolerances::new -> OptResult<Tolerances> -> HwError -> PyErr
    let tols = Tolerances::new(tol_grad, tol_cost, max_iter).map_err(HwError::from)?;

    // LineSearcher::from_str -> OptResult<LineSearcher> -> HwError -> PyErr
    let ls = match line_searcher {
        Some(name) => LineSearcher::from_str(name).map_err(HwError::from)?,
        None => LineSearcher::MoreThuente,
    };

    // SolverOptions::new -> OptResult<SolverOptions> -> HwError -> PyErr
    let opts = SolverOptions::new(tols, ls, false, lbfgs_mem).map_err(HwError::from)?;

    Ok(opts)
}
