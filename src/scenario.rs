//! Scenario runner for batch projections
//!
//! Holds one normalized session and projects it under many configurations,
//! e.g. every expected return between 0% and 20%.

use crate::error::{PlannerError, Result};
use crate::profile::SessionInput;
use crate::projection::{GrowthModel, ProjectionConfig, ProjectionEngine, ProjectionResult, MAX_EXPECTED_RETURN_PCT};
use rayon::prelude::*;

/// Smallest accepted sweep step, in percent
pub const MIN_SWEEP_STEP_PCT: f64 = 0.01;

/// Projection at one expected return
#[derive(Debug, Clone)]
pub struct SweepPoint {
    /// Expected annual return in percent
    pub return_pct: f64,
    pub result: ProjectionResult,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(session);
/// for point in runner.rate_sweep(GrowthModel::AnnualStepUp, 1.0)? {
///     println!("{}% -> {}", point.return_pct, point.result.summary().total_projected_corpus);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    session: SessionInput,
}

impl ScenarioRunner {
    pub fn new(session: SessionInput) -> Self {
        Self {
            session: session.normalized(),
        }
    }

    /// Run a single projection with the given config
    pub fn run(&self, config: ProjectionConfig) -> ProjectionResult {
        ProjectionEngine::new(config).project_session(&self.session)
    }

    /// Run multiple configs, results in input order
    pub fn run_scenarios(&self, configs: &[ProjectionConfig]) -> Vec<ProjectionResult> {
        configs
            .par_iter()
            .map(|config| ProjectionEngine::new(config.clone()).project_session(&self.session))
            .collect()
    }

    /// Project at every `step_pct` from 0% up to the 20% ceiling
    pub fn rate_sweep(&self, model: GrowthModel, step_pct: f64) -> Result<Vec<SweepPoint>> {
        self.rate_sweep_between(model, 0.0, MAX_EXPECTED_RETURN_PCT, step_pct)
    }

    /// Project at every `step_pct` in `[start_pct, end_pct]`
    ///
    /// Steps below [`MIN_SWEEP_STEP_PCT`] and reversed or non-finite ranges
    /// are rejected.
    pub fn rate_sweep_between(
        &self,
        model: GrowthModel,
        start_pct: f64,
        end_pct: f64,
        step_pct: f64,
    ) -> Result<Vec<SweepPoint>> {
        if !step_pct.is_finite() || step_pct < MIN_SWEEP_STEP_PCT {
            return Err(PlannerError::invalid(
                "step_pct",
                format!("must be at least {}, got {}", MIN_SWEEP_STEP_PCT, step_pct),
            ));
        }
        if !start_pct.is_finite() || !end_pct.is_finite() || end_pct < start_pct {
            return Err(PlannerError::invalid(
                "end_pct",
                format!("range {}..{} is empty or not finite", start_pct, end_pct),
            ));
        }

        // Integer stepping avoids drift from repeated float addition
        let steps = ((end_pct - start_pct) / step_pct + 1e-9).floor() as usize;
        let rates: Vec<f64> = (0..=steps).map(|i| start_pct + i as f64 * step_pct).collect();
        log::debug!("sweeping {} rates with {}", rates.len(), model.label());

        Ok(rates
            .par_iter()
            .map(|&return_pct| SweepPoint {
                return_pct,
                result: self.run(ProjectionConfig::from_percent(return_pct, model)),
            })
            .collect())
    }

    /// Same config under both growth models
    pub fn compare_models(&self, annual_return: f64) -> (ProjectionResult, ProjectionResult) {
        (
            self.run(ProjectionConfig::new(annual_return, GrowthModel::AnnualStepUp)),
            self.run(ProjectionConfig::new(annual_return, GrowthModel::MonthlyAnnuity)),
        )
    }

    pub fn session(&self) -> &SessionInput {
        &self.session
    }
}
