//! Monthly budget summary shown alongside the projections

use super::SessionInput;
use crate::projection::round_to_cents;
use serde::{Deserialize, Serialize};

/// Share of the monthly allocation taken by one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub category: String,
    pub amount: f64,
    /// Fraction of total allocation, 0 when nothing is allocated
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub years_to_retirement: u32,
    pub total_current_savings: f64,
    pub monthly_income: f64,
    pub annual_savings_increase: f64,
    pub total_allocation: f64,
    pub disposable_income: f64,
    /// Allocation exceeds income
    pub overspent: bool,
    pub shares: Vec<ExpenseShare>,
}

impl BudgetSummary {
    pub fn from_session(session: &SessionInput) -> Self {
        let total_allocation = session.total_monthly_allocation();
        let disposable_income = session.monthly_income - total_allocation;
        let overspent = total_allocation > session.monthly_income;

        if overspent {
            log::warn!(
                "monthly allocation {:.2} exceeds income {:.2}",
                total_allocation,
                session.monthly_income
            );
        }

        let shares = session
            .monthly_breakdown
            .iter()
            .map(|item| ExpenseShare {
                category: item.category.clone(),
                amount: item.amount,
                fraction: if total_allocation > 0.0 { item.amount / total_allocation } else { 0.0 },
            })
            .collect();

        Self {
            years_to_retirement: session.personal_info.years_to_retirement(),
            total_current_savings: round_to_cents(session.total_current_savings()),
            monthly_income: round_to_cents(session.monthly_income),
            annual_savings_increase: session.annual_savings_increase,
            total_allocation: round_to_cents(total_allocation),
            disposable_income: round_to_cents(disposable_income),
            overspent,
            shares,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{HOME_LOAN_EMIS, LIVING_EXPENSES, RETIREMENT_SAVINGS};
    use approx::assert_relative_eq;

    #[test]
    fn test_disposable_income() {
        let mut session = SessionInput::default();
        session.monthly_income = 150_000.0;
        session.set_breakdown_amount(LIVING_EXPENSES, 50_000.0);
        session.set_breakdown_amount(HOME_LOAN_EMIS, 30_000.0);
        session.set_breakdown_amount(RETIREMENT_SAVINGS, 20_000.0);
        session.current_savings.insert("EPF".to_string(), 400_000.0);

        let summary = BudgetSummary::from_session(&session);
        assert_eq!(summary.total_allocation, 100_000.0);
        assert_eq!(summary.disposable_income, 50_000.0);
        assert!(!summary.overspent);
        assert_eq!(summary.years_to_retirement, 30);
        assert_eq!(summary.total_current_savings, 400_000.0);

        let living = &summary.shares[0];
        assert_eq!(living.category, LIVING_EXPENSES);
        assert_relative_eq!(living.fraction, 0.5);
        let total: f64 = summary.shares.iter().map(|s| s.fraction).sum();
        assert_relative_eq!(total, 1.0);
    }

    #[test]
    fn test_overspent_flag() {
        let mut session = SessionInput::default();
        session.monthly_income = 10_000.0;
        session.set_breakdown_amount(LIVING_EXPENSES, 12_500.0);

        let summary = BudgetSummary::from_session(&session);
        assert!(summary.overspent);
        assert_eq!(summary.disposable_income, -2_500.0);
    }

    #[test]
    fn test_empty_budget_has_zero_shares() {
        let summary = BudgetSummary::from_session(&SessionInput::default());
        assert_eq!(summary.total_allocation, 0.0);
        assert!(!summary.overspent);
        assert!(summary.shares.iter().all(|s| s.fraction == 0.0));
    }
}
