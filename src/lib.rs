//! Corpus Planner - savings projections for retirement and education goals
//!
//! This library provides:
//! - Session input (personal info, income, monthly breakdown, current savings)
//! - A goal table derived from that input
//! - Corpus projection under two growth models, with optional memoization
//! - Budget summaries, rate sweeps and CSV export

pub mod assumptions;
pub mod error;
pub mod export;
pub mod profile;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use error::PlannerError;
pub use profile::{BudgetSummary, SessionInput};
pub use projection::{FinancialGoal, GrowthModel, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;
