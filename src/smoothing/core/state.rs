//! core::state — the multiplicative smoothing recurrence.
//!
//! Purpose
//! -------
//! Hold the growing level/trend/seasonal history and advance it one
//! observation at a time. Both the fit evaluator and the forecast driver
//! run this same primitive; only the driving sequence (observed vs.
//! partly synthesized) and the number of steps differ, so the update rule
//! lives in exactly one place.
//!
//! Key behaviors
//! -------------
//! - [`SmoothingState::advance`] applies the multiplicative update:
//!   ```text
//!   a[i+1]   = alpha * (y / s[i])          + (1-alpha) * (a[i] + b[i])
//!   b[i+1]   = beta  * (a[i+1] - a[i])     + (1-beta)  * b[i]
//!   s[i+m]   = gamma * (y / (a[i] + b[i])) + (1-gamma) * s[i]
//!   ```
//!   where `i` is the number of steps taken so far and `m` the period.
//! - [`SmoothingState::reconstruct`] turns a recorded step back into an
//!   observation-scale value, parameterized by [`Alignment`]: the fit
//!   evaluator reads the seasonal index at the *same* step index, while
//!   forecasting reads the index from exactly one full cycle back. The
//!   two deliberately disagree in-sample; keeping the choice explicit
//!   here ensures the evaluator and driver cannot drift apart.
//!
//! Invariants & assumptions
//! ------------------------
//! - After `k` calls to `advance`, `level` and `trend` hold `k + 1`
//!   entries and `seasonal` holds `period + k` entries.
//! - All stored entries are finite; `advance` rejects a step that would
//!   record a non-finite component (e.g., after division by a zero
//!   seasonal index).
//!
//! Conventions
//! -----------
//! - The seasonal history is append-only: the entry written at step `i`
//!   is the updated index for seasonal position `i % period` and is read
//!   again `period` steps later.
//!
//! Downstream usage
//! ----------------
//! - [`in_sample_rmse`](crate::smoothing::core::fit::in_sample_rmse)
//!   advances over the observed series and reconstructs with
//!   [`Alignment::SameStep`].
//! - [`run_forecast`](crate::smoothing::core::forecast::run_forecast)
//!   additionally synthesizes future observations from
//!   [`SmoothingState::one_step_forecast`].
//!
//! Testing notes
//! -------------
//! - Unit tests below pin one hand-computed update, the bookkeeping
//!   lengths, the divergence of the two alignments in-sample, and their
//!   agreement at the frontier.
use crate::smoothing::{
    core::{clip::saturating_clip, init::InitState, params::HwParams},
    errors::{HwError, HwResult},
};

/// Which seasonal index a reconstruction reads.
///
/// - `SameStep`: the seasonal entry at the same step index as level and
///   trend. Used for in-sample fitted values.
/// - `CycleBack`: the seasonal entry exactly one full cycle before the end
///   of the history (`s[len - m]`). Used when generating a one-step-ahead
///   forecast at the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    SameStep,
    CycleBack,
}

/// Growing level/trend/seasonal history of a smoothing run.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingState {
    period: usize,
    level: Vec<f64>,
    trend: Vec<f64>,
    seasonal: Vec<f64>,
}

impl SmoothingState {
    /// Start a run from seeded initial values.
    pub fn new(init: InitState) -> Self {
        let period = init.seasonals.len();
        Self {
            period,
            level: vec![init.level],
            trend: vec![init.trend],
            seasonal: init.seasonals.to_vec(),
        }
    }

    /// Number of recurrence steps taken so far.
    pub fn steps(&self) -> usize {
        self.level.len() - 1
    }

    /// Seasonal period of the run.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Advance the state by one observation.
    ///
    /// # Errors
    /// Returns [`HwError::NonFiniteState`] naming the first component that
    /// would be recorded as NaN/±inf, e.g. after dividing by a zero
    /// seasonal index or a zero deseasonalized expectation.
    pub fn advance(&mut self, observation: f64, params: &HwParams) -> HwResult<()> {
        let i = self.steps();
        let a = self.level[i];
        let b = self.trend[i];
        let s = self.seasonal[i];

        let next_level = params.alpha * (observation / s) + (1.0 - params.alpha) * (a + b);
        if !next_level.is_finite() {
            return Err(HwError::NonFiniteState { component: "level", step: i + 1, value: next_level });
        }
        let next_trend = params.beta * (next_level - a) + (1.0 - params.beta) * b;
        if !next_trend.is_finite() {
            return Err(HwError::NonFiniteState { component: "trend", step: i + 1, value: next_trend });
        }
        let next_seasonal = params.gamma * (observation / (a + b)) + (1.0 - params.gamma) * s;
        if !next_seasonal.is_finite() {
            return Err(HwError::NonFiniteState {
                component: "seasonal",
                step: i + 1,
                value: next_seasonal,
            });
        }

        self.level.push(next_level);
        self.trend.push(next_trend);
        self.seasonal.push(next_seasonal);
        Ok(())
    }

    /// Reconstruct an observation-scale value for a recorded step.
    ///
    /// Multiplies `level[step] + trend[step]` by the seasonal index chosen
    /// by `align` and clamps the product into `[0, f64::MAX]`.
    ///
    /// `Alignment::CycleBack` always reads the entry one full cycle before
    /// the end of the seasonal history; it is meaningful at the frontier
    /// (`step == steps()`), where that entry is the most recent completed
    /// estimate for the upcoming seasonal position.
    pub fn reconstruct(&self, step: usize, align: Alignment) -> f64 {
        let seasonal_index = match align {
            Alignment::SameStep => step,
            Alignment::CycleBack => self.seasonal.len() - self.period,
        };
        saturating_clip((self.level[step] + self.trend[step]) * self.seasonal[seasonal_index])
    }

    /// One-step-ahead forecast from the current frontier.
    ///
    /// Equals `(a[-1] + b[-1]) * s[-m]`, clamped to the non-negative
    /// range.
    pub fn one_step_forecast(&self) -> f64 {
        self.reconstruct(self.steps(), Alignment::CycleBack)
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
    // - One hand-computed recurrence step.
    // - History bookkeeping lengths after several steps.
    // - Divergence of the two alignments in-sample and their agreement at
    //   the frontier.
    // - Rejection of a step that would record a non-finite component.
    //
    // They intentionally DO NOT cover:
    // - Full-series fitting or forecasting; see fit/forecast tests.
    // -------------------------------------------------------------------------

    fn unit_init(period: usize) -> InitState {
        InitState { level: 1.0, trend: 0.0, seasonals: ndarray::Array1::from_elem(period, 1.0) }
    }

    #[test]
    // Purpose
    // -------
    // Pin one update step against hand-computed values.
    //
    // Given
    // -----
    // - State seeded with level 10, trend 1, seasonals (1.0, 2.0), and
    //   weights alpha = 0.5, beta = 0.5, gamma = 0.5; observation 12.
    //
    // Expect
    // ------
    // - level' = 0.5*(12/1) + 0.5*11 = 11.5
    // - trend' = 0.5*(11.5-10) + 0.5*1 = 1.25
    // - seasonal' = 0.5*(12/11) + 0.5*1 ≈ 1.0454545
    fn advance_matches_hand_computation() {
        // Arrange
        let init = InitState { level: 10.0, trend: 1.0, seasonals: array![1.0, 2.0] };
        let mut state = SmoothingState::new(init);
        let params = HwParams::new(0.5, 0.5, 0.5).unwrap();

        // Act
        state.advance(12.0, &params).unwrap();

        // Assert
        assert_eq!(state.level, vec![10.0, 11.5]);
        assert_eq!(state.trend, vec![1.0, 1.25]);
        assert!((state.seasonal[2] - (0.5 * (12.0 / 11.0) + 0.5)).abs() < 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Verify length bookkeeping: after k steps, level/trend hold k+1
    // entries and seasonal holds period+k.
    //
    // Given
    // -----
    // - A period-3 state advanced 5 times.
    //
    // Expect
    // ------
    // - `steps() == 5`, level/trend length 6, seasonal length 8.
    fn histories_grow_one_entry_per_step() {
        // Arrange
        let mut state = SmoothingState::new(unit_init(3));
        let params = HwParams::new(0.3, 0.2, 0.4).unwrap();

        // Act
        for _ in 0..5 {
            state.advance(1.0, &params).unwrap();
        }

        // Assert
        assert_eq!(state.steps(), 5);
        assert_eq!(state.level.len(), 6);
        assert_eq!(state.trend.len(), 6);
        assert_eq!(state.seasonal.len(), 8);
    }

    #[test]
    // Purpose
    // -------
    // Pin the alignment semantics: the two alignments agree at the
    // frontier but generally disagree for earlier in-sample steps.
    //
    // Given
    // -----
    // - A period-2 state advanced 3 steps over an oscillating series.
    //
    // Expect
    // ------
    // - `reconstruct(steps(), SameStep) == one_step_forecast()`.
    // - `reconstruct(1, SameStep) != reconstruct(1, CycleBack)`.
    fn alignments_agree_only_at_the_frontier() {
        // Arrange
        let init = InitState { level: 5.0, trend: 0.5, seasonals: array![0.8, 1.2] };
        let mut state = SmoothingState::new(init);
        let params = HwParams::new(0.4, 0.3, 0.6).unwrap();
        for &y in &[4.0, 7.0, 5.0] {
            state.advance(y, &params).unwrap();
        }

        // Act / Assert
        let frontier = state.steps();
        assert_eq!(state.reconstruct(frontier, Alignment::SameStep), state.one_step_forecast());
        assert_ne!(
            state.reconstruct(1, Alignment::SameStep),
            state.reconstruct(1, Alignment::CycleBack)
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure a division by a zero seasonal index is caught as a
    // non-finite state instead of silently propagating inf.
    //
    // Given
    // -----
    // - A state whose current seasonal index is 0 and a positive
    //   observation.
    //
    // Expect
    // ------
    // - `HwError::NonFiniteState { component: "level", .. }` and no
    //   partial push into the histories.
    fn advance_rejects_non_finite_level() {
        // Arrange
        let init = InitState { level: 1.0, trend: 0.0, seasonals: array![0.0, 1.0] };
        let mut state = SmoothingState::new(init);
        let params = HwParams::new(0.5, 0.5, 0.5).unwrap();

        // Act
        let result = state.advance(2.0, &params);

        // Assert
        assert!(matches!(result, Err(HwError::NonFiniteState { component: "level", step: 1, .. })));
        assert_eq!(state.steps(), 0);
    }
}
