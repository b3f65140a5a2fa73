//! Adapter that exposes a user `Objective` as an `argmin` problem.
//!
//! The user objective `c(θ)` is already a cost, so no sign manipulation is
//! needed: values and analytic gradients pass straight through to the
//! solver. If a gradient is not provided, we finite-difference the cost
//! closure with a central/forward fallback.
use std::cell::RefCell;

use crate::optimization::{
    bounded::{
        traits::Objective,
        types::{Cost, Grad, Theta},
        validation::validate_grad,
    },
    errors::OptError,
};
use argmin::core::{CostFunction, Error, Gradient};
use finitediff::FiniteDiff;

/// Bridges a user `Objective` to `argmin`'s `CostFunction` and `Gradient`.
///
/// - `CostFunction::cost` returns `c(θ)` unchanged.
/// - `Gradient::gradient` returns:
///   - the user's analytic `∇c(θ)` after validation, or
///   - a finite-difference gradient of the cost when none is provided.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: Objective> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: Objective> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ)`.
    ///
    /// - Calls the user's `value(θ, data)` and checks the result is finite.
    /// - Returns `Error(NonFiniteCost)` if the value is not finite.
    ///
    /// # Errors
    /// Propagates any `OptError` from the user's `value` via `?`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if !output.is_finite() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(output)
    }
}

impl<'a, F: Objective> Gradient for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate the gradient of the cost at `θ`.
    ///
    /// Behavior:
    /// - If the user implements `grad(θ, data)`, we validate and return it as-is.
    /// - Otherwise, we compute a finite-difference gradient of the cost:
    ///   - Try *central* differences first.
    ///   - If any evaluation of the `cost` closure failed (captured via
    ///     `closure_err`), retry with *forward* differences.
    ///   - Validate the FD gradient; if it fails (e.g., non-finite), retry once
    ///     with *forward* differences and validate again.
    ///
    /// Implementation notes:
    /// - The FD closure must return `f64`, so we can't use `?` inside it; we capture
    ///   the first error in `closure_err` and return `NaN` from the closure. After
    ///   FD, we turn that captured error back into a real error (or switch to
    ///   forward diff).
    ///
    /// # Errors
    /// - Propagates user errors from `grad` (non-`GradientNotImplemented`).
    /// - Propagates any error raised by cost evaluations performed during FD.
    /// - Returns validation errors if the gradient has wrong dimension or
    ///   non-finite entries.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let dim = theta.len();
        match self.f.grad(theta, self.data) {
            Ok(g) => {
                validate_grad(&g, dim)?;
                Ok(g)
            }
            Err(e) => {
                let closure_err: RefCell<Option<Error>> = RefCell::new(None);
                match e {
                    OptError::GradientNotImplemented => {
                        let cost_func = |theta: &Theta| -> f64 {
                            match self.cost(theta) {
                                Ok(val) => val,
                                Err(e) => {
                                    let mut slot = closure_err.borrow_mut();
                                    if slot.is_none() {
                                        *slot = Some(e);
                                    }
                                    f64::NAN
                                }
                            }
                        };
                        let mut fd_grad = theta.central_diff(&cost_func);
                        if closure_err.borrow().is_some() {
                            fd_grad = run_fd_diff(theta, &cost_func, &closure_err)?;
                            return Ok(fd_grad);
                        }
                        match validate_grad(&fd_grad, dim) {
                            Ok(()) => Ok(fd_grad),
                            Err(_) => {
                                fd_grad = run_fd_diff(theta, &cost_func, &closure_err)?;
                                Ok(fd_grad)
                            }
                        }
                    }
                    _ => Err(e.into()),
                }
            }
        }
    }
}

impl<'a, F: Objective> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `Objective` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

/// Compute a forward-difference gradient of `func` at `theta`, with error capture.
///
/// The FD closure can't return `Result`, so any error raised by `func` is
/// stored into `closure_err` and the closure returns `NaN`. This helper:
/// - clears `closure_err`,
/// - performs `forward_diff`,
/// - if an error was captured, returns it as `Err`,
/// - validates the resulting gradient,
/// - if validation succeeds, returns the gradient as `Ok(grad)`.
///
/// # Errors
/// Returns any error captured during evaluation of `func` inside the FD routine
/// or by validation of the resulting gradient.
fn run_fd_diff<G: Fn(&Theta) -> f64>(
    theta: &Theta, func: &G, closure_err: &RefCell<Option<Error>>,
) -> Result<Grad, Error> {
    closure_err.replace(None);
    let fd_grad = theta.forward_diff(func);
    let dim = theta.len();
    if let Some(err) = closure_err.take() {
        return Err(err);
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Cost pass-through and non-finite rejection.
    // - Finite-difference fallback when no analytic gradient is provided.
    // - Analytic gradient validation and pass-through.
    //
    // They intentionally DO NOT cover:
    // - Full L-BFGS runs; those live in the integration tests.
    // -------------------------------------------------------------------------

    struct Quadratic;

    impl Objective for Quadratic {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    struct QuadraticWithGrad;

    impl Objective for QuadraticWithGrad {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            Ok(theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }

        fn grad(&self, theta: &Theta, _data: &()) -> OptResult<Grad> {
            Ok(2.0 * theta)
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure the adapter forwards the objective value without any sign
    // manipulation.
    //
    // Given
    // -----
    // - The quadratic `c(θ) = θ·θ` evaluated at (1, 2).
    //
    // Expect
    // ------
    // - Cost exactly 5.0.
    fn cost_passes_through_unchanged() {
        // Arrange
        let f = Quadratic;
        let adapter = ArgMinAdapter::new(&f, &());

        // Act
        let cost = adapter.cost(&array![1.0, 2.0]).unwrap();

        // Assert
        assert_eq!(cost, 5.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the finite-difference fallback produces a gradient close to
    // the analytic `2θ` for a smooth objective without `grad`.
    //
    // Given
    // -----
    // - The quadratic without an analytic gradient, evaluated at (1, -0.5).
    //
    // Expect
    // ------
    // - FD gradient within 1e-4 of (2, -1).
    fn fd_fallback_matches_analytic_gradient() {
        // Arrange
        let f = Quadratic;
        let adapter = ArgMinAdapter::new(&f, &());
        let theta = array![1.0, -0.5];

        // Act
        let grad = adapter.gradient(&theta).unwrap();

        // Assert
        assert!((grad[0] - 2.0).abs() < 1e-4);
        assert!((grad[1] + 1.0).abs() < 1e-4);
    }

    #[test]
    // Purpose
    // -------
    // Ensure an analytic gradient is validated and returned as-is.
    //
    // Given
    // -----
    // - The quadratic with `grad = 2θ`, evaluated at (3, 4).
    //
    // Expect
    // ------
    // - Exactly (6, 8).
    fn analytic_gradient_passes_through() {
        // Arrange
        let f = QuadraticWithGrad;
        let adapter = ArgMinAdapter::new(&f, &());

        // Act
        let grad = adapter.gradient(&array![3.0, 4.0]).unwrap();

        // Assert
        assert_eq!(grad, array![6.0, 8.0]);
    }
}
