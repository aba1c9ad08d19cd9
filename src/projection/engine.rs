//! Corpus projection engine
//!
//! Two growth models are supported and selected per run:
//! - `AnnualStepUp`: year-by-year loop, contributions at the start of each
//!   year, escalating year over year, annual compounding
//! - `MonthlyAnnuity`: closed-form future value of a monthly annuity-due plus
//!   the compounded lump sum, no escalation

use super::cache::ProjectionCache;
use super::cashflows::{ProjectionResult, ProjectionRow, YearBalance};
use super::goals::{FinancialGoal, GoalTableBuilder};
use crate::profile::SessionInput;
use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Default expected annual return when no config supplies one
pub const DEFAULT_EXPECTED_RETURN: f64 = 0.08;

/// Upper bound of the expected-return input (percent)
pub const MAX_EXPECTED_RETURN_PCT: f64 = 20.0;

/// Growth model used to project a goal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthModel {
    /// Annual loop with contribution escalation
    #[default]
    AnnualStepUp,
    /// Closed-form monthly annuity-due, escalation ignored
    MonthlyAnnuity,
}

impl GrowthModel {
    pub fn label(&self) -> &'static str {
        match self {
            GrowthModel::AnnualStepUp => "annual step-up",
            GrowthModel::MonthlyAnnuity => "monthly annuity",
        }
    }
}

/// Configuration for a projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Expected annual return as a fraction
    pub annual_return: f64,

    pub model: GrowthModel,

    /// Whether to attach a year-by-year balance schedule to each row
    pub detailed_output: bool,
}

impl ProjectionConfig {
    pub fn new(annual_return: f64, model: GrowthModel) -> Self {
        Self {
            annual_return,
            model,
            detailed_output: false,
        }
    }

    /// Build from a percentage, clamped to the accepted 0-20% range
    pub fn from_percent(return_pct: f64, model: GrowthModel) -> Self {
        let clamped = if return_pct.is_finite() {
            return_pct.clamp(0.0, MAX_EXPECTED_RETURN_PCT)
        } else {
            0.0
        };
        if clamped != return_pct {
            log::warn!("expected return {}% clamped to {}%", return_pct, clamped);
        }
        Self::new(clamped / 100.0, model)
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EXPECTED_RETURN, GrowthModel::default())
    }
}

/// Round a monetary value to 2 decimal places
///
/// Rounds the exact stored value, ties to even: 2.675 (stored just below)
/// gives 2.67 and 0.125 gives 0.12.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Project a goal under the given model, rounded to cents
pub fn project_corpus(goal: &FinancialGoal, model: GrowthModel) -> f64 {
    match model {
        GrowthModel::AnnualStepUp => corpus_annual_step_up(goal),
        GrowthModel::MonthlyAnnuity => corpus_monthly_annuity(goal),
    }
}

/// Year-by-year recurrence: `corpus = (corpus + yearly) * (1 + r)`
pub fn corpus_annual_step_up(goal: &FinancialGoal) -> f64 {
    let mut corpus = goal.initial_amount;
    for year in 0..goal.whole_years() {
        corpus = step_up_year(goal, corpus, year).2;
    }
    round_to_cents(corpus)
}

/// Closed-form future value: lump sum plus monthly annuity-due
pub fn corpus_monthly_annuity(goal: &FinancialGoal) -> f64 {
    round_to_cents(monthly_annuity_value(goal, goal.years.max(0.0)))
}

/// One year of the step-up loop: (contribution, growth, closing balance)
fn step_up_year(goal: &FinancialGoal, opening: f64, year: u32) -> (f64, f64, f64) {
    let contribution = goal.monthly_contribution
        * MONTHS_PER_YEAR
        * (1.0 + goal.annual_contribution_escalation).powi(year as i32);
    let closing = (opening + contribution) * (1.0 + goal.annual_growth_rate);
    (contribution, closing - opening - contribution, closing)
}

/// Unrounded monthly-annuity value after `years`
fn monthly_annuity_value(goal: &FinancialGoal, years: f64) -> f64 {
    let months = years * MONTHS_PER_YEAR;
    let rate = goal.annual_growth_rate;

    if rate == 0.0 {
        return goal.initial_amount + goal.monthly_contribution * months;
    }

    // ln(1 + r) keeps precision for rates far below f64 epsilon
    let log_growth = rate.ln_1p();
    let lump_sum = goal.initial_amount * (years * log_growth).exp();
    if months == 0.0 {
        return lump_sum;
    }

    let monthly_rate = (log_growth / MONTHS_PER_YEAR).exp_m1();
    if monthly_rate <= 0.0 {
        return lump_sum + goal.monthly_contribution * months;
    }
    let annuity_factor = (months * monthly_rate.ln_1p()).exp_m1() / monthly_rate * (1.0 + monthly_rate);
    lump_sum + goal.monthly_contribution * annuity_factor
}

/// Balance at the end of each year of the horizon
///
/// The last entry's closing balance equals the projected corpus. A fractional
/// horizon under `MonthlyAnnuity` gets a final partial-year entry.
pub fn yearly_schedule(goal: &FinancialGoal, model: GrowthModel) -> Vec<YearBalance> {
    let mut schedule = Vec::new();
    let mut opening = goal.initial_amount;

    match model {
        GrowthModel::AnnualStepUp => {
            for year in 0..goal.whole_years() {
                let (contribution, growth, closing) = step_up_year(goal, opening, year);
                schedule.push(YearBalance::new(year + 1, opening, contribution, growth, closing));
                opening = closing;
            }
        }
        GrowthModel::MonthlyAnnuity => {
            let whole = goal.whole_years();
            let mut boundaries: Vec<(u32, f64)> = (1..=whole).map(|y| (y, y as f64)).collect();
            if goal.years > whole as f64 {
                boundaries.push((whole + 1, goal.years));
            }

            let mut elapsed = 0.0;
            for (label, at) in boundaries {
                let contribution = goal.monthly_contribution * MONTHS_PER_YEAR * (at - elapsed);
                let closing = monthly_annuity_value(goal, at);
                schedule.push(YearBalance::new(label, opening, contribution, closing - opening - contribution, closing));
                opening = closing;
                elapsed = at;
            }
        }
    }

    schedule
}

/// Projection engine applying one configuration to a session's goals
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Goals for a session under this engine's expected return
    pub fn goals_for(&self, session: &SessionInput) -> Vec<FinancialGoal> {
        GoalTableBuilder::new(session, self.config.annual_return).build()
    }

    pub fn project_goal(&self, goal: &FinancialGoal) -> f64 {
        project_corpus(goal, self.config.model)
    }

    /// Run projection for every goal of a session
    pub fn project_session(&self, session: &SessionInput) -> ProjectionResult {
        self.project_with(session, |goal| project_corpus(goal, self.config.model))
    }

    /// Same as `project_session`, answering repeated goals from the cache
    pub fn project_session_cached(&self, session: &SessionInput, cache: &mut ProjectionCache) -> ProjectionResult {
        let model = self.config.model;
        self.project_with(session, |goal| cache.project(goal, model))
    }

    fn project_with<F>(&self, session: &SessionInput, mut corpus_of: F) -> ProjectionResult
    where
        F: FnMut(&FinancialGoal) -> f64,
    {
        let mut result = ProjectionResult::new(self.config.clone());

        for goal in self.goals_for(session) {
            let projected = corpus_of(&goal);
            log::debug!(
                "{}: {} years, {:.2}/month, initial {:.2} -> {:.2} ({})",
                goal.name,
                goal.years,
                goal.monthly_contribution,
                goal.initial_amount,
                projected,
                self.config.model.label()
            );

            let mut row = ProjectionRow::from_goal(&goal, projected);
            if self.config.detailed_output {
                row.schedule = yearly_schedule(&goal, self.config.model);
            }
            result.add_row(row);
        }

        result
    }
}
