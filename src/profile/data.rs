//! Session input: personal info, income, monthly breakdown, savings

use crate::assumptions::Assumptions;
use crate::error::{PlannerError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const LIVING_EXPENSES: &str = "Living Expenses";
pub const HOME_LOAN_EMIS: &str = "Home Loan EMIs";
pub const RETIREMENT_SAVINGS: &str = "Retirement Savings";
pub const SHORT_TERM_GOALS: &str = "Short-Term Goals";
pub const OTHER_SAVINGS: &str = "Other Savings";

/// Current-savings categories, in display order
pub const SAVINGS_CATEGORIES: [&str; 7] = [
    "Stocks",
    "Mutual Funds",
    "ESOPs",
    "EPF",
    "Gold Bond",
    "Fixed Deposits",
    "Other Savings",
];

pub const MIN_CURRENT_AGE: u32 = 18;
pub const MAX_AGE: u32 = 100;
pub const MAX_DEPENDENTS: usize = 10;
pub const MAX_DEPENDENT_AGE: u32 = 30;
pub const DEFAULT_EDUCATION_START_AGE: u32 = 18;

/// Breakdown category for the i-th dependent's education fund (1-indexed)
pub fn education_category(index: usize) -> String {
    format!("Kid-{} Education Saving", index)
}

/// Canonical monthly breakdown categories for a household
pub fn breakdown_categories(num_dependents: usize) -> Vec<String> {
    let mut categories = vec![
        LIVING_EXPENSES.to_string(),
        HOME_LOAN_EMIS.to_string(),
        RETIREMENT_SAVINGS.to_string(),
    ];
    categories.extend((1..=num_dependents).map(education_category));
    categories.push(SHORT_TERM_GOALS.to_string());
    categories.push(OTHER_SAVINGS.to_string());
    categories
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dependent {
    pub age: u32,
    pub education_start_age: u32,
}

impl Dependent {
    pub fn years_to_education(&self) -> u32 {
        self.education_start_age.saturating_sub(self.age)
    }
}

impl Default for Dependent {
    fn default() -> Self {
        Self {
            age: 0,
            education_start_age: DEFAULT_EDUCATION_START_AGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub current_age: u32,
    pub retirement_age: u32,
    #[serde(default)]
    pub dependents: Vec<Dependent>,
}

impl PersonalInfo {
    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            current_age: 30,
            retirement_age: 60,
            dependents: Vec::new(),
        }
    }
}

/// One line of the monthly income allocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub category: String,
    pub amount: f64,
}

impl BreakdownItem {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// Everything a user enters before projections are computed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionInput {
    #[serde(default)]
    pub personal_info: PersonalInfo,

    #[serde(default)]
    pub monthly_income: f64,

    #[serde(default)]
    pub monthly_breakdown: Vec<BreakdownItem>,

    /// Balance per savings category
    #[serde(default)]
    pub current_savings: IndexMap<String, f64>,

    /// Yearly growth of contributions, as a fraction
    #[serde(default)]
    pub annual_savings_increase: f64,
}

impl Default for SessionInput {
    /// Blank form: every amount zero, ages 30/60, no dependents
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            monthly_income: 0.0,
            monthly_breakdown: breakdown_categories(0)
                .into_iter()
                .map(|c| BreakdownItem::new(c, 0.0))
                .collect(),
            current_savings: SAVINGS_CATEGORIES.iter().map(|c| (c.to_string(), 0.0)).collect(),
            annual_savings_increase: 0.0,
        }
    }
}

impl SessionInput {
    /// Sample data from the defaults source; savings increase starts at zero
    pub fn from_assumptions(assumptions: &Assumptions) -> Self {
        let mut session = assumptions.sample.clone();
        session.annual_savings_increase = 0.0;
        session
    }

    /// Amount for the first breakdown item in `category`, or 0
    pub fn breakdown_amount(&self, category: &str) -> f64 {
        self.monthly_breakdown
            .iter()
            .find(|item| item.category == category)
            .map(|item| item.amount)
            .unwrap_or(0.0)
    }

    /// Set the amount for a category, appending the category if missing
    pub fn set_breakdown_amount(&mut self, category: &str, amount: f64) {
        match self.monthly_breakdown.iter_mut().find(|item| item.category == category) {
            Some(item) => item.amount = amount,
            None => self.monthly_breakdown.push(BreakdownItem::new(category, amount)),
        }
    }

    pub fn total_current_savings(&self) -> f64 {
        self.current_savings.values().sum()
    }

    pub fn total_monthly_allocation(&self) -> f64 {
        self.monthly_breakdown.iter().map(|item| item.amount).sum()
    }

    /// Rebuild the form to its canonical shape
    ///
    /// The breakdown is reduced to the canonical categories for the current
    /// number of dependents, carrying amounts over by category name. Every
    /// savings category is present. Dependents beyond the limit are dropped.
    pub fn normalized(&self) -> Self {
        let mut personal_info = self.personal_info.clone();
        if personal_info.dependents.len() > MAX_DEPENDENTS {
            log::warn!(
                "{} dependents entered, keeping the first {}",
                personal_info.dependents.len(),
                MAX_DEPENDENTS
            );
            personal_info.dependents.truncate(MAX_DEPENDENTS);
        }

        let monthly_breakdown = breakdown_categories(personal_info.dependents.len())
            .into_iter()
            .map(|category| {
                let amount = self.breakdown_amount(&category);
                BreakdownItem::new(category, amount)
            })
            .collect();

        let mut current_savings: IndexMap<String, f64> = SAVINGS_CATEGORIES
            .iter()
            .map(|c| (c.to_string(), self.current_savings.get(*c).copied().unwrap_or(0.0)))
            .collect();
        for (category, balance) in &self.current_savings {
            current_savings.entry(category.clone()).or_insert(*balance);
        }

        Self {
            personal_info,
            monthly_income: self.monthly_income,
            monthly_breakdown,
            current_savings,
            annual_savings_increase: self.annual_savings_increase,
        }
    }

    /// Check every field against the ranges the input form accepts
    pub fn validate(&self) -> Result<()> {
        let info = &self.personal_info;

        if !(MIN_CURRENT_AGE..=MAX_AGE).contains(&info.current_age) {
            return Err(PlannerError::invalid(
                "current_age",
                format!("{} is outside {}-{}", info.current_age, MIN_CURRENT_AGE, MAX_AGE),
            ));
        }
        if info.retirement_age < info.current_age || info.retirement_age > MAX_AGE {
            return Err(PlannerError::invalid(
                "retirement_age",
                format!("{} must be between current age {} and {}", info.retirement_age, info.current_age, MAX_AGE),
            ));
        }
        if info.dependents.len() > MAX_DEPENDENTS {
            return Err(PlannerError::invalid(
                "dependents",
                format!("{} exceeds the limit of {}", info.dependents.len(), MAX_DEPENDENTS),
            ));
        }
        for (i, dependent) in info.dependents.iter().enumerate() {
            if dependent.age > MAX_DEPENDENT_AGE {
                return Err(PlannerError::invalid(
                    format!("dependents[{}].age", i),
                    format!("{} exceeds {}", dependent.age, MAX_DEPENDENT_AGE),
                ));
            }
            if dependent.education_start_age < dependent.age || dependent.education_start_age > MAX_DEPENDENT_AGE {
                return Err(PlannerError::invalid(
                    format!("dependents[{}].education_start_age", i),
                    format!(
                        "{} must be between age {} and {}",
                        dependent.education_start_age, dependent.age, MAX_DEPENDENT_AGE
                    ),
                ));
            }
        }

        check_amount("monthly_income", self.monthly_income)?;
        for item in &self.monthly_breakdown {
            check_amount(&item.category, item.amount)?;
        }
        for (category, balance) in &self.current_savings {
            check_amount(category, *balance)?;
        }

        if !(0.0..=1.0).contains(&self.annual_savings_increase) {
            return Err(PlannerError::invalid(
                "annual_savings_increase",
                format!("{} is outside 0-1", self.annual_savings_increase),
            ));
        }

        Ok(())
    }
}

fn check_amount(field: &str, amount: f64) -> Result<()> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(())
    } else {
        Err(PlannerError::invalid(field, format!("{} is not a non-negative amount", amount)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form() {
        let session = SessionInput::default();

        assert_eq!(session.personal_info.current_age, 30);
        assert_eq!(session.personal_info.retirement_age, 60);
        assert_eq!(session.monthly_breakdown.len(), 5);
        assert_eq!(session.current_savings.len(), SAVINGS_CATEGORIES.len());
        assert_eq!(session.total_current_savings(), 0.0);
        assert!(session.validate().is_ok());
    }

    #[test]
    fn test_breakdown_categories_include_dependents() {
        let categories = breakdown_categories(2);
        assert_eq!(
            categories,
            [
                "Living Expenses",
                "Home Loan EMIs",
                "Retirement Savings",
                "Kid-1 Education Saving",
                "Kid-2 Education Saving",
                "Short-Term Goals",
                "Other Savings",
            ]
        );
    }

    #[test]
    fn test_breakdown_lookup_takes_first_match() {
        let mut session = SessionInput::default();
        session.monthly_breakdown.push(BreakdownItem::new(RETIREMENT_SAVINGS, 999.0));
        session.set_breakdown_amount(RETIREMENT_SAVINGS, 10_000.0);

        assert_eq!(session.breakdown_amount(RETIREMENT_SAVINGS), 10_000.0);
        assert_eq!(session.breakdown_amount("Vacation"), 0.0);

        session.set_breakdown_amount("Vacation", 250.0);
        assert_eq!(session.breakdown_amount("Vacation"), 250.0);
    }

    #[test]
    fn test_normalized_carries_amounts_by_category() {
        let mut session = SessionInput::default();
        session.personal_info.dependents = vec![Dependent::default()];
        session.monthly_breakdown = vec![
            BreakdownItem::new("Other Savings", 1_500.0),
            BreakdownItem::new("Kid-1 Education Saving", 2_000.0),
            BreakdownItem::new("Kid-3 Education Saving", 7_000.0),
        ];
        session.current_savings = IndexMap::from([("Crypto".to_string(), 10.0), ("EPF".to_string(), 5.0)]);

        let normalized = session.normalized();
        let categories: Vec<_> = normalized.monthly_breakdown.iter().map(|i| i.category.as_str()).collect();
        assert_eq!(categories, breakdown_categories(1));
        assert_eq!(normalized.breakdown_amount("Kid-1 Education Saving"), 2_000.0);
        assert_eq!(normalized.breakdown_amount("Other Savings"), 1_500.0);
        assert_eq!(normalized.breakdown_amount("Kid-3 Education Saving"), 0.0);

        let keys: Vec<_> = normalized.current_savings.keys().map(String::as_str).collect();
        assert_eq!(&keys[..7], &SAVINGS_CATEGORIES[..]);
        assert_eq!(keys[7], "Crypto");
        assert_eq!(normalized.total_current_savings(), 15.0);
    }

    #[test]
    fn test_normalized_drops_extra_dependents() {
        let mut session = SessionInput::default();
        session.personal_info.dependents = vec![Dependent::default(); 12];

        let normalized = session.normalized();
        assert_eq!(normalized.personal_info.dependents.len(), MAX_DEPENDENTS);
        assert_eq!(normalized.monthly_breakdown.len(), 5 + MAX_DEPENDENTS);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut session = SessionInput::default();
        session.personal_info.current_age = 17;
        assert!(matches!(
            session.validate(),
            Err(PlannerError::InvalidInput { ref field, .. }) if field == "current_age"
        ));

        let mut session = SessionInput::default();
        session.personal_info.retirement_age = 25;
        assert!(session.validate().is_err());

        let mut session = SessionInput::default();
        session.personal_info.dependents = vec![Dependent { age: 12, education_start_age: 10 }];
        assert!(matches!(
            session.validate(),
            Err(PlannerError::InvalidInput { ref field, .. }) if field == "dependents[0].education_start_age"
        ));

        let mut session = SessionInput::default();
        session.set_breakdown_amount(LIVING_EXPENSES, -1.0);
        assert!(session.validate().is_err());

        let mut session = SessionInput::default();
        session.current_savings.insert("Stocks".to_string(), f64::NAN);
        assert!(session.validate().is_err());

        let mut session = SessionInput::default();
        session.annual_savings_increase = 1.5;
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_dependent_horizon_saturates() {
        let dependent = Dependent { age: 20, education_start_age: 18 };
        assert_eq!(dependent.years_to_education(), 0);
        assert_eq!(Dependent::default().years_to_education(), 18);
    }

    #[test]
    fn test_from_assumptions_resets_savings_increase() {
        let mut assumptions = Assumptions::default_sample();
        assumptions.sample.annual_savings_increase = 0.1;

        let session = SessionInput::from_assumptions(&assumptions);
        assert_eq!(session.annual_savings_increase, 0.0);
        assert_eq!(session.monthly_income, assumptions.sample.monthly_income);
    }
}
