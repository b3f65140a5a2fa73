//! core::options — model-level configuration for fitting.
//!
//! Bundles the solver configuration with the weight triple the parameter
//! search starts from. Defaults reproduce the classic setup: search from
//! `(0.01, 0.9, 0.01)` under the solver's standard tolerances.
use crate::{
    optimization::bounded::SolverOptions,
    smoothing::core::params::HwParams,
};

/// Configuration for [`HoltWintersModel::fit`](crate::smoothing::models::holt_winters::HoltWintersModel::fit).
///
/// - `solver`: tolerances, line search, and L-BFGS memory passed through
///   to the optimizer.
/// - `search_start`: the weight triple the search starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct HwOptions {
    pub solver: SolverOptions,
    pub search_start: HwParams,
}

impl HwOptions {
    /// Build options from explicit parts.
    pub fn new(solver: SolverOptions, search_start: HwParams) -> Self {
        Self { solver, search_start }
    }
}

impl Default for HwOptions {
    fn default() -> Self {
        Self {
            solver: SolverOptions::default(),
            search_start: HwParams::new(0.01, 0.9, 0.01).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Pin the default search start so the classic configuration cannot
    // drift silently.
    //
    // Given
    // -----
    // - `HwOptions::default()`.
    //
    // Expect
    // ------
    // - Start weights (0.01, 0.9, 0.01).
    fn default_search_start_is_classic_triple() {
        // Act
        let options = HwOptions::default();

        // Assert
        assert_eq!(options.search_start, HwParams::new(0.01, 0.9, 0.01).unwrap());
    }
}
