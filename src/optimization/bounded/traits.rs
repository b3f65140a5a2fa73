//! Public API surface for bounded objective minimization.
//!
//! - [`Objective`]: trait users implement for their model.
//! - [`SolverOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`LineSearcher`]: choice of line search used by L-BFGS.
//! - [`OptimOutcome`]: normalized result returned by the high-level `minimize` API.
//!
//! Convention: we *minimize* a user objective `c(θ)` directly. The optimizer
//! itself is unconstrained; box constraints are expected to be folded into the
//! objective through a reparameterization such as
//! [`bounded_logistic`](crate::optimization::numerical_stability::bounded_logistic),
//! so every `θ` the solver proposes is admissible.
use crate::optimization::{
    bounded::{
        Cost, FnEvalMap, Grad, Theta,
        validation::{validate_theta_hat, validate_value, verify_tol_cost, verify_tol_grad},
    },
    errors::{OptError, OptResult},
};
use argmin::core::TerminationStatus;
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// User-implemented objective interface.
///
/// You minimize `c(θ)` over an unconstrained `θ`; any constrained model
/// parameters should be recovered from `θ` inside `value` via a bounded
/// transform. If you provide an analytic gradient, return the gradient of
/// the objective itself (`∇c(θ)`).
///
/// - `type Data`: per-model data carried into `value`/`grad`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `c(θ)`.
///   - Errors: return a descriptive `OptError` for invalid inputs or model failures.
/// - `check(&Theta, &Data) -> OptResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs. Called once before optimization.
///
/// Optional:
/// - `grad(&Theta, &Data) -> OptResult<Grad>`: analytic gradient `∇c(θ)`.
///   If not implemented, robust finite differences are used automatically.
pub trait Objective {
    type Data: 'static;

    // Required methods
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;

    // Optional methods
    fn grad(&self, _theta: &Theta, _data: &Self::Data) -> OptResult<Grad> {
        Err(OptError::GradientNotImplemented)
    }
}

/// Choice of line search used inside the L-BFGS solver.
///
/// Variants:
/// - `MoreThuente`: More–Thuente line search.
/// - `HagerZhang`: Hager–Zhang line search.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"MoreThuente"`, `"HagerZhang"`). Unknown names return
/// `OptError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = OptError;

    /// Parse a line-search choice from a string (case-insensitive).
    ///
    /// Accepts:
    /// - `"MoreThuente"`
    /// - `"HagerZhang"`
    /// - Any case variant (e.g., `"morethuente"`, `"HAGERZHANG"`).
    ///
    /// Any other value returns `OptError::InvalidLineSearch` with a helpful message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — numerical tolerances and iteration limits.
/// - `line_searcher: LineSearcher` — line-search algorithm used by L-BFGS.
/// - `verbose: bool` — if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
/// - `lbfgs_mem: Option<usize>` — L-BFGS history size; `None` uses the default.
///
/// Constructor:
/// - `new(tols, line_searcher, verbose, lbfgs_mem) -> OptResult<Self>` — builds
///   options; validation of numeric tolerances is handled in `Tolerances::new`.
///
/// Default:
/// - `tols`: `tol_grad = 1e-6`, `tol_cost = None`, `max_iter = 300`
/// - `line_searcher`: `MoreThuente`
/// - `verbose`: `false`
/// - `lbfgs_mem`: `None` (uses default of 7)
#[derive(Debug, Clone, PartialEq)]
pub struct SolverOptions {
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub verbose: bool,
    pub lbfgs_mem: Option<usize>,
}

impl SolverOptions {
    /// Create a new set of optimizer options.
    ///
    /// This constructor does not mutate values; validation of numeric fields is
    /// performed inside [`Tolerances::new`].
    pub fn new(
        tols: Tolerances, line_searcher: LineSearcher, verbose: bool, lbfgs_mem: Option<usize>,
    ) -> OptResult<Self> {
        if let Some(m) = lbfgs_mem {
            if m == 0 {
                return Err(OptError::InvalidLBFGSMem {
                    mem: m,
                    reason: "L-BFGS memory must be greater than zero.",
                });
            }
        }
        Ok(Self { tols, line_searcher, verbose, lbfgs_mem })
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances::new(Some(1e-6), None, Some(300)).unwrap(),
            line_searcher: LineSearcher::MoreThuente,
            verbose: false,
            lbfgs_mem: None,
        }
    }
}

/// Numerical tolerances and iteration limits used by the optimizer.
///
/// - `tol_grad`: terminate when the gradient norm falls below this threshold.
/// - `tol_cost`: terminate when the change in cost falls below this threshold.
/// - `max_iter`: hard cap on the number of iterations.
///
/// Any field can be `None` but **at least one** of the three must be provided
/// (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - At least one of `tol_grad`, `tol_cost`, or `max_iter` must be `Some`.
    /// - If provided, tolerances must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if all three are `None`.
    /// - [`OptError::InvalidTolGrad`] / [`OptError::InvalidTolCost`] for non-finite or non-positive tolerances.
    /// - `OptError::InvalidMaxIter` if `max_iter == 0`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> OptResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        verify_tol_grad(tol_grad)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

/// Canonical result returned by `minimize`.
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: best objective value `c(θ̂)` reached by the solver.
/// - `converged`: `true` if the solver reported a terminating status other
///   than `NotTerminated`.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
/// - Keys follow argmin's counters, e.g., cost_count, gradient_count, etc.
/// - `grad_norm`: norm of the last available gradient, if present.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`.
    /// - Computes `grad_norm` if a gradient was provided.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, converged: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap, grad: Option<Grad>,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let status: String;
        let converged = match converged {
            TerminationStatus::NotTerminated => {
                status = "Not terminated".to_string();
                false
            }
            _ => {
                status = format!("{converged:?}");
                true
            }
        };
        let iterations = iterations as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self { theta_hat, value, converged, status, iterations, fn_evals, grad_norm })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Tolerances::new` acceptance and rejection rules.
    // - `SolverOptions::new` handling of `lbfgs_mem`.
    // - `LineSearcher::from_str` parsing.
    // - `OptimOutcome::new` status mapping and gradient norm.
    //
    // They intentionally DO NOT cover:
    // - Actual solver runs; those live in the integration tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure that at least one stopping criterion must be provided and
    // that a fully absent configuration is rejected.
    //
    // Given
    // -----
    // - All three tolerance fields set to `None`.
    //
    // Expect
    // ------
    // - `OptError::NoTolerancesProvided`.
    fn tolerances_require_at_least_one_criterion() {
        // Act
        let result = Tolerances::new(None, None, None);

        // Assert
        assert_eq!(result, Err(OptError::NoTolerancesProvided));
    }

    #[test]
    // Purpose
    // -------
    // Verify that a zero iteration cap is rejected while a positive one
    // is accepted.
    //
    // Given
    // -----
    // - `max_iter = Some(0)` and `max_iter = Some(10)`.
    //
    // Expect
    // ------
    // - `InvalidMaxIter` for zero; `Ok` for ten.
    fn tolerances_reject_zero_max_iter() {
        // Act / Assert
        assert!(matches!(
            Tolerances::new(None, None, Some(0)),
            Err(OptError::InvalidMaxIter { max_iter: 0, .. })
        ));
        assert!(Tolerances::new(None, None, Some(10)).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure `SolverOptions::new` rejects a zero L-BFGS memory and
    // accepts `None` (default) and positive values.
    //
    // Given
    // -----
    // - Valid tolerances and `lbfgs_mem` in {Some(0), None, Some(5)}.
    //
    // Expect
    // ------
    // - `InvalidLBFGSMem` for zero; `Ok` otherwise.
    fn solver_options_validate_lbfgs_memory() {
        // Arrange
        let tols = Tolerances::new(Some(1e-6), None, Some(100)).unwrap();

        // Act / Assert
        assert!(matches!(
            SolverOptions::new(tols, LineSearcher::MoreThuente, false, Some(0)),
            Err(OptError::InvalidLBFGSMem { mem: 0, .. })
        ));
        assert!(SolverOptions::new(tols, LineSearcher::MoreThuente, false, None).is_ok());
        assert!(SolverOptions::new(tols, LineSearcher::HagerZhang, false, Some(5)).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify that line-search names parse case-insensitively and that
    // unknown names error out.
    //
    // Given
    // -----
    // - "morethuente", "HAGERZHANG", and "steepest".
    //
    // Expect
    // ------
    // - The first two parse; the last returns `InvalidLineSearch`.
    fn line_searcher_parses_case_insensitively() {
        // Act / Assert
        assert_eq!("morethuente".parse::<LineSearcher>(), Ok(LineSearcher::MoreThuente));
        assert_eq!("HAGERZHANG".parse::<LineSearcher>(), Ok(LineSearcher::HagerZhang));
        assert!(matches!(
            "steepest".parse::<LineSearcher>(),
            Err(OptError::InvalidLineSearch { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Ensure `OptimOutcome::new` maps `NotTerminated` to a non-converged
    // outcome and computes the gradient norm when a gradient is present.
    //
    // Given
    // -----
    // - A finite theta, value 1.5, `NotTerminated` status, and a (3, 4)
    //   gradient whose L2 norm is 5.
    //
    // Expect
    // ------
    // - `converged == false`, `status == "Not terminated"`, and
    //   `grad_norm == Some(5.0)`.
    fn optim_outcome_maps_status_and_grad_norm() {
        // Arrange
        let theta = array![0.1, 0.2];
        let grad = array![3.0, 4.0];

        // Act
        let outcome = OptimOutcome::new(
            Some(theta.clone()),
            1.5,
            TerminationStatus::NotTerminated,
            12,
            FnEvalMap::new(),
            Some(grad),
        )
        .unwrap();

        // Assert
        assert!(!outcome.converged);
        assert_eq!(outcome.status, "Not terminated");
        assert_eq!(outcome.theta_hat, theta);
        assert_eq!(outcome.iterations, 12);
        assert_eq!(outcome.grad_norm, Some(5.0));
    }
}
