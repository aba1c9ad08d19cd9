//! Financial goals and the goal table built from session input

use crate::profile::{self, SessionInput};
use serde::{Deserialize, Serialize};

pub const RETIREMENT_GOAL: &str = "Retirement";
pub const SHORT_TERM_GOAL: &str = "Short-Term Goals";
pub const OTHER_SAVINGS_GOAL: &str = "Other Savings";

/// Fixed horizon for the short-term goals bucket
pub const SHORT_TERM_YEARS: f64 = 5.0;

/// Goal name for the i-th dependent (1-indexed)
pub fn education_goal_name(index: usize) -> String {
    format!("Kid-{} Education", index)
}

/// A named savings objective fed to the corpus calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub name: String,

    /// Horizon until the goal is realized
    pub years: f64,

    /// Amount contributed each month
    pub monthly_contribution: f64,

    /// Balance already saved toward the goal
    pub initial_amount: f64,

    /// Annual investment return as a fraction (0.08 = 8%)
    pub annual_growth_rate: f64,

    /// Year-over-year growth of the contribution itself
    pub annual_contribution_escalation: f64,
}

impl FinancialGoal {
    pub fn new(name: impl Into<String>, years: f64, monthly_contribution: f64, initial_amount: f64) -> Self {
        Self {
            name: name.into(),
            years,
            monthly_contribution,
            initial_amount,
            annual_growth_rate: 0.0,
            annual_contribution_escalation: 0.0,
        }
    }

    pub fn with_growth_rate(mut self, annual_growth_rate: f64) -> Self {
        self.annual_growth_rate = annual_growth_rate;
        self
    }

    pub fn with_escalation(mut self, annual_contribution_escalation: f64) -> Self {
        self.annual_contribution_escalation = annual_contribution_escalation;
        self
    }

    /// Whole years of contributions (fractional years are dropped)
    pub fn whole_years(&self) -> u32 {
        if self.years.is_finite() && self.years > 0.0 {
            self.years.trunc() as u32
        } else {
            0
        }
    }
}

/// Builds the ordered goal table from the persisted form input
///
/// Order: retirement, one education goal per dependent, short-term goals,
/// other savings. Contributions default to 0 when the breakdown has no
/// matching category.
#[derive(Debug, Clone)]
pub struct GoalTableBuilder<'a> {
    session: &'a SessionInput,
    annual_growth_rate: f64,
}

impl<'a> GoalTableBuilder<'a> {
    pub fn new(session: &'a SessionInput, annual_growth_rate: f64) -> Self {
        Self {
            session,
            annual_growth_rate,
        }
    }

    pub fn build(&self) -> Vec<FinancialGoal> {
        let info = &self.session.personal_info;
        let years_to_retirement = info.years_to_retirement() as f64;
        if info.retirement_age < info.current_age {
            log::warn!(
                "retirement age {} is below current age {}, using a zero horizon",
                info.retirement_age,
                info.current_age
            );
        }

        let mut goals = Vec::with_capacity(info.dependents.len() + 3);

        goals.push(self.goal(
            RETIREMENT_GOAL,
            years_to_retirement,
            profile::RETIREMENT_SAVINGS,
            self.session.total_current_savings(),
        ));

        for (i, dependent) in info.dependents.iter().enumerate() {
            let category = profile::education_category(i + 1);
            goals.push(self.goal(
                &education_goal_name(i + 1),
                dependent.years_to_education() as f64,
                &category,
                0.0,
            ));
        }

        goals.push(self.goal(SHORT_TERM_GOAL, SHORT_TERM_YEARS, profile::SHORT_TERM_GOALS, 0.0));
        goals.push(self.goal(OTHER_SAVINGS_GOAL, years_to_retirement, profile::OTHER_SAVINGS, 0.0));

        goals
    }

    fn goal(&self, name: &str, years: f64, category: &str, initial_amount: f64) -> FinancialGoal {
        FinancialGoal::new(name, years, self.session.breakdown_amount(category), initial_amount)
            .with_growth_rate(self.annual_growth_rate)
            .with_escalation(self.session.annual_savings_increase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{BreakdownItem, Dependent};

    fn sample_session() -> SessionInput {
        let mut session = SessionInput::default();
        session.personal_info.current_age = 35;
        session.personal_info.retirement_age = 60;
        session.personal_info.dependents = vec![
            Dependent { age: 5, education_start_age: 18 },
            Dependent { age: 10, education_start_age: 17 },
        ];
        session.monthly_breakdown = vec![
            BreakdownItem::new("Retirement Savings", 20_000.0),
            BreakdownItem::new("Kid-2 Education Saving", 4_000.0),
            BreakdownItem::new("Short-Term Goals", 3_000.0),
        ];
        session.current_savings.insert("Stocks".to_string(), 200_000.0);
        session.current_savings.insert("EPF".to_string(), 300_000.0);
        session.annual_savings_increase = 0.05;
        session
    }

    #[test]
    fn test_goal_order_and_horizons() {
        let session = sample_session();
        let goals = GoalTableBuilder::new(&session, 0.08).build();

        let names: Vec<_> = goals.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            ["Retirement", "Kid-1 Education", "Kid-2 Education", "Short-Term Goals", "Other Savings"]
        );

        assert_eq!(goals[0].years, 25.0);
        assert_eq!(goals[1].years, 13.0);
        assert_eq!(goals[2].years, 7.0);
        assert_eq!(goals[3].years, SHORT_TERM_YEARS);
        assert_eq!(goals[4].years, 25.0);
    }

    #[test]
    fn test_contributions_default_to_zero() {
        let session = sample_session();
        let goals = GoalTableBuilder::new(&session, 0.08).build();

        assert_eq!(goals[0].monthly_contribution, 20_000.0);
        assert_eq!(goals[1].monthly_contribution, 0.0);
        assert_eq!(goals[2].monthly_contribution, 4_000.0);
        assert_eq!(goals[3].monthly_contribution, 3_000.0);
        assert_eq!(goals[4].monthly_contribution, 0.0);
    }

    #[test]
    fn test_only_retirement_gets_current_savings() {
        let session = sample_session();
        let goals = GoalTableBuilder::new(&session, 0.08).build();

        assert_eq!(goals[0].initial_amount, 500_000.0);
        assert!(goals[1..].iter().all(|g| g.initial_amount == 0.0));
        assert!(goals.iter().all(|g| g.annual_growth_rate == 0.08));
        assert!(goals.iter().all(|g| g.annual_contribution_escalation == 0.05));
    }

    #[test]
    fn test_inverted_ages_saturate() {
        let mut session = SessionInput::default();
        session.personal_info.current_age = 65;
        session.personal_info.retirement_age = 60;

        let goals = GoalTableBuilder::new(&session, 0.08).build();
        assert_eq!(goals[0].years, 0.0);
        assert_eq!(goals.last().map(|g| g.years), Some(0.0));
    }

    #[test]
    fn test_whole_years_truncates() {
        assert_eq!(FinancialGoal::new("x", 4.9, 0.0, 0.0).whole_years(), 4);
        assert_eq!(FinancialGoal::new("x", 0.0, 0.0, 0.0).whole_years(), 0);
        assert_eq!(FinancialGoal::new("x", -2.0, 0.0, 0.0).whole_years(), 0);
    }
}
