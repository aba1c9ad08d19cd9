//! Projection output structures

use super::engine::{round_to_cents, ProjectionConfig};
use super::goals::FinancialGoal;
use serde::{Deserialize, Serialize};

/// One year of a goal's balance schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearBalance {
    /// Year of the horizon (1-indexed)
    pub year: u32,
    pub opening_balance: f64,
    pub contribution: f64,
    pub growth: f64,
    pub closing_balance: f64,
}

impl YearBalance {
    pub fn new(year: u32, opening: f64, contribution: f64, growth: f64, closing: f64) -> Self {
        Self {
            year,
            opening_balance: round_to_cents(opening),
            contribution: round_to_cents(contribution),
            growth: round_to_cents(growth),
            closing_balance: round_to_cents(closing),
        }
    }
}

/// A single row of the projection table, one per goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    pub goal: String,
    pub years: f64,
    pub monthly_contribution: f64,
    pub initial_amount: f64,
    pub annual_savings_increase: f64,
    pub projected_corpus: f64,

    /// Year-by-year balances, filled only for detailed runs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schedule: Vec<YearBalance>,
}

impl ProjectionRow {
    pub fn from_goal(goal: &FinancialGoal, projected_corpus: f64) -> Self {
        Self {
            goal: goal.name.clone(),
            years: goal.years,
            monthly_contribution: round_to_cents(goal.monthly_contribution),
            initial_amount: round_to_cents(goal.initial_amount),
            annual_savings_increase: goal.annual_contribution_escalation,
            projected_corpus: round_to_cents(projected_corpus),
            schedule: Vec::new(),
        }
    }
}

/// Complete projection result for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub config: ProjectionConfig,
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionResult {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            config,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: ProjectionRow) {
        self.rows.push(row);
    }

    pub fn row(&self, goal: &str) -> Option<&ProjectionRow> {
        self.rows.iter().find(|r| r.goal == goal)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_monthly_contribution: f64 = self.rows.iter().map(|r| r.monthly_contribution).sum();
        let total_initial_amount: f64 = self.rows.iter().map(|r| r.initial_amount).sum();
        let total_projected_corpus: f64 = self.rows.iter().map(|r| r.projected_corpus).sum();

        let largest_goal = self
            .rows
            .iter()
            .filter(|r| r.projected_corpus > 0.0)
            .max_by(|a, b| a.projected_corpus.total_cmp(&b.projected_corpus))
            .map(|r| r.goal.clone());

        ProjectionSummary {
            goal_count: self.rows.len(),
            annual_return: self.config.annual_return,
            total_monthly_contribution: round_to_cents(total_monthly_contribution),
            total_initial_amount: round_to_cents(total_initial_amount),
            total_projected_corpus: round_to_cents(total_projected_corpus),
            largest_goal,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub goal_count: usize,
    pub annual_return: f64,
    pub total_monthly_contribution: f64,
    pub total_initial_amount: f64,
    pub total_projected_corpus: f64,
    pub largest_goal: Option<String>,
}
