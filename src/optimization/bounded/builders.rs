//! bounded::builders — L-BFGS solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small, focused builders for L-BFGS solvers used by the bounded
//! objective minimizer. These helpers hide Argmin's generic wiring and
//! apply crate-level options (e.g., tolerances, memory size) so that
//! higher-level code can request a configured solver without touching
//! Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Construct L-BFGS solvers with either Hager–Zhang or More–Thuente
//!   line search based on crate-level aliases.
//! - Apply optional gradient and cost-change tolerances from
//!   [`SolverOptions`] via a shared configuration helper.
//! - Leave the initial parameter vector and maximum iterations to the
//!   runner/executor layer, keeping these builders side-effect free.
//!
//! Invariants & assumptions
//! ------------------------
//! - All solvers operate on the canonical optimizer numeric types
//!   [`Theta`], [`Grad`], and [`Cost`] as defined in [`bounded::types`].
//! - The L-BFGS memory (`m`) is either provided via `opts.lbfgs_mem` or
//!   defaults to [`DEFAULT_LBFGS_MEM`].
//! - Any invalid tolerance passed into Argmin's
//!   `with_tolerance_grad` / `with_tolerance_cost` is surfaced as an
//!   `OptError` via the crate's `From<Error>` implementations; callers
//!   are expected to handle these with [`OptResult`].
//!
//! Conventions
//! -----------
//! - [`HagerZhangLS`] and [`MoreThuenteLS`] are the crate's canonical
//!   line-search aliases; [`LbfgsHagerZhang`] and [`LbfgsMoreThuente`]
//!   pair these with the standard `(Theta, Grad, Cost)` triple.
//! - The builders do **not** set an initial parameter vector (`theta0`)
//!   or `max_iters`; these are treated as runtime concerns and are
//!   applied by the runner (e.g., `run_lbfgs`).
//! - Errors are always reported via [`OptResult`]; the underlying
//!   `argmin::core::Error` values never leak directly across module
//!   boundaries.
//!
//! Downstream usage
//! ----------------
//! - The high-level entry point calls [`build_optimizer_hager_zhang`] or
//!   [`build_optimizer_more_thuente`] based on the configured
//!   `LineSearcher` enum in [`SolverOptions`].
//! - The returned solver is passed to a runner (e.g., `run_lbfgs`) along
//!   with an adapted problem and initial parameters.
//! - [`configure_lbfgs`] is the shared wiring function that applies
//!   tolerances; it is generic over the line-search type and can be
//!   reused by future L-BFGS variants if needed.
//!
//! Testing notes
//! -------------
//! - Unit tests for this module verify:
//!   - Correct propagation of `lbfgs_mem` and `DEFAULT_LBFGS_MEM` into
//!     the solver configuration.
//! - Integration tests exercise these builders indirectly by running
//!   full L-BFGS solves with different line-search and tolerance
//!   configurations.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    bounded::{
        traits::SolverOptions,
        types::{
            Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
            MoreThuenteLS, Theta,
        },
    },
    errors::OptResult,
};

/// Construct L-BFGS with Hager–Zhang line search.
///
/// Builds an [`LbfgsHagerZhang`] solver configured with the crate's
/// standard numeric types and optional tolerances from [`SolverOptions`],
/// leaving initial parameters and iteration limits to the caller.
///
/// # Parameters
/// - `opts`: optimizer options. This builder consults:
///   - `opts.lbfgs_mem`: optional L-BFGS history size (`m`); when `None`,
///     [`DEFAULT_LBFGS_MEM`] is used.
///   - `opts.tols.tol_grad` and `opts.tols.tol_cost`: optional tolerances
///     wired into the solver via Argmin's `with_tolerance_grad` /
///     `with_tolerance_cost`.
///
/// # Errors
/// Returns an `OptError` (via `From<argmin::core::Error>`) when Argmin
/// rejects a tolerance setting.
pub fn build_optimizer_hager_zhang(opts: &SolverOptions) -> OptResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct L-BFGS with More–Thuente line search.
///
/// Builds an [`LbfgsMoreThuente`] solver configured with the crate's
/// standard numeric types and optional tolerances from [`SolverOptions`],
/// using the More–Thuente line-search strategy.
///
/// # Parameters
/// - `opts`: optimizer options; consulted exactly as in
///   [`build_optimizer_hager_zhang`].
///
/// # Errors
/// Returns an `OptError` (via `From<argmin::core::Error>`) when Argmin
/// rejects a tolerance setting.
pub fn build_optimizer_more_thuente(opts: &SolverOptions) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional tolerances to an L-BFGS solver.
///
/// Generic helper that wires crate-level tolerance options from
/// [`SolverOptions`] into an existing L-BFGS solver, regardless of the
/// line-search type. This centralizes tolerance handling so builder
/// functions remain thin.
///
/// When a tolerance is `None`, the corresponding `with_tolerance_*`
/// method is not called; Argmin's defaults remain in effect. This helper
/// does not touch the solver's initial parameter vector, maximum
/// iteration count, or line-search settings.
///
/// # Errors
/// Returns an `OptError` (via `From<argmin::core::Error>`) when
/// `with_tolerance_grad` or `with_tolerance_cost` rejects a tolerance.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &SolverOptions,
) -> OptResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::bounded::traits::{LineSearcher, SolverOptions, Tolerances};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic construction of L-BFGS solvers with Hager–Zhang and
    //   More–Thuente line searches.
    // - Propagation of `lbfgs_mem` (Some vs None) into the builder paths.
    // - Application of gradient and cost tolerances via `configure_lbfgs`.
    //
    // They intentionally DO NOT cover:
    // - End-to-end executor behavior (e.g., `run_lbfgs`), which is tested
    //   in the optimizer runner layer.
    // - Any specific `Objective` implementation or real data models.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Ensure that `build_optimizer_hager_zhang` succeeds and uses the
    // crate default L-BFGS memory when `opts.lbfgs_mem` is `None`.
    //
    // Given
    // -----
    // - Valid `Tolerances`.
    // - `SolverOptions` with `line_searcher = HagerZhang` and `lbfgs_mem = None`.
    //
    // Expect
    // ------
    // - `build_optimizer_hager_zhang` returns `Ok(_)` and does not panic.
    fn build_optimizer_hager_zhang_uses_default_memory_when_none() {
        // Arrange
        let tols =
            Tolerances::new(Some(1e-6), Some(1e-8), Some(50)).expect("Tolerances should be valid");
        let opts = SolverOptions::new(tols, LineSearcher::HagerZhang, false, None)
            .expect("SolverOptions should be valid");

        // Act
        let solver = build_optimizer_hager_zhang(&opts);

        // Assert
        assert!(
            solver.is_ok(),
            "Builder should succeed when lbfgs_mem is None and tolerances are valid"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `build_optimizer_hager_zhang` accepts an explicit
    // L-BFGS memory value and still constructs a solver.
    //
    // Given
    // -----
    // - Valid `Tolerances`.
    // - `SolverOptions` with `line_searcher = HagerZhang` and `lbfgs_mem = Some(11)`.
    //
    // Expect
    // ------
    // - `build_optimizer_hager_zhang` returns `Ok(_)`.
    fn build_optimizer_hager_zhang_respects_explicit_memory() {
        // Arrange
        let tols = Tolerances::new(Some(1e-6), None, Some(25)).expect("Tolerances should be valid");
        let opts = SolverOptions::new(tols, LineSearcher::HagerZhang, false, Some(11))
            .expect("SolverOptions should be valid");

        // Act
        let solver = build_optimizer_hager_zhang(&opts);

        // Assert
        assert!(solver.is_ok(), "Builder should succeed when lbfgs_mem is explicitly provided");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `build_optimizer_more_thuente` succeeds and uses the
    // crate default L-BFGS memory when `opts.lbfgs_mem` is `None`.
    //
    // Given
    // -----
    // - Valid `Tolerances`.
    // - `SolverOptions` with `line_searcher = MoreThuente` and `lbfgs_mem = None`.
    //
    // Expect
    // ------
    // - `build_optimizer_more_thuente` returns `Ok(_)`.
    fn build_optimizer_more_thuente_uses_default_memory_when_none() {
        // Arrange
        let tols =
            Tolerances::new(Some(1e-6), Some(1e-8), Some(50)).expect("Tolerances should be valid");
        let opts = SolverOptions::new(tols, LineSearcher::MoreThuente, false, None)
            .expect("SolverOptions should be valid");

        // Act
        let solver = build_optimizer_more_thuente(&opts);

        // Assert
        assert!(
            solver.is_ok(),
            "Builder should succeed when lbfgs_mem is None and tolerances are valid"
        );
    }

    #[test]
    // Purpose
    // -------
    // Confirm that `configure_lbfgs` applies tolerances without error
    // when both `tol_grad` and `tol_cost` are present and valid.
    //
    // Given
    // -----
    // - An L-BFGS solver created with `DEFAULT_LBFGS_MEM`.
    // - `SolverOptions` with finite, positive `tol_grad` and `tol_cost`.
    //
    // Expect
    // ------
    // - `configure_lbfgs` returns `Ok(_)`.
    fn configure_lbfgs_applies_valid_tolerances() {
        // Arrange
        let raw = LBFGS::new(HagerZhangLS::new(), DEFAULT_LBFGS_MEM);
        let tols =
            Tolerances::new(Some(1e-6), Some(1e-8), Some(100)).expect("Tolerances should be valid");
        let opts = SolverOptions::new(tols, LineSearcher::HagerZhang, false, Some(DEFAULT_LBFGS_MEM))
            .expect("SolverOptions should be valid");

        // Act
        let configured = configure_lbfgs(raw, &opts);

        // Assert
        assert!(configured.is_ok(), "configure_lbfgs should succeed for valid tolerances");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `configure_lbfgs` leaves the solver constructible when
    // both gradient and cost tolerances are `None`, relying on Argmin
    // defaults.
    //
    // Given
    // -----
    // - An L-BFGS solver created with `DEFAULT_LBFGS_MEM`.
    // - `SolverOptions` whose `tols` have `tol_grad = None`, `tol_cost = None`.
    //
    // Expect
    // ------
    // - `configure_lbfgs` returns `Ok(_)`.
    fn configure_lbfgs_respects_absent_tolerances() {
        // Arrange
        let raw = LBFGS::new(MoreThuenteLS::new(), DEFAULT_LBFGS_MEM);
        let tols = Tolerances::new(None, None, Some(50)).expect("Tolerances should be valid");
        let opts = SolverOptions::new(tols, LineSearcher::MoreThuente, false, None)
            .expect("SolverOptions should be valid");

        // Act
        let configured = configure_lbfgs(raw, &opts);

        // Assert
        assert!(configured.is_ok(), "configure_lbfgs should succeed when both tolerances are None");
    }
}
