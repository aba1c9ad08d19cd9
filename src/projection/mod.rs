//! Corpus projection for financial goals

mod cache;
mod cashflows;
mod engine;
mod goals;

pub use cache::{CacheStats, GoalKey, ProjectionCache};
pub use cashflows::{ProjectionResult, ProjectionRow, ProjectionSummary, YearBalance};
pub use engine::{
    corpus_annual_step_up, corpus_monthly_annuity, project_corpus, round_to_cents, yearly_schedule,
    GrowthModel, ProjectionConfig, ProjectionEngine, DEFAULT_EXPECTED_RETURN, MAX_EXPECTED_RETURN_PCT,
    MONTHS_PER_YEAR,
};
pub use goals::{
    education_goal_name, FinancialGoal, GoalTableBuilder, OTHER_SAVINGS_GOAL, RETIREMENT_GOAL,
    SHORT_TERM_GOAL, SHORT_TERM_YEARS,
};
