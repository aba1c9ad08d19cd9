//! Read-only defaults: sample form data and the default expected return

pub mod loader;

pub use loader::{load_assumptions, parse_assumptions, DEFAULT_CONFIG_PATH};

use crate::error::Result;
use crate::profile::{BreakdownItem, Dependent, PersonalInfo, SessionInput};
use crate::projection::{GrowthModel, ProjectionConfig};
use std::path::Path;

/// Container for the defaults source
///
/// Loaded once and never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    /// Sample ("dummy") form data
    pub sample: SessionInput,

    /// Expected annual return in percent (12.0 = 12%)
    pub default_expected_return_pct: f64,
}

impl Assumptions {
    /// Built-in sample household used when no config file is present
    pub fn default_sample() -> Self {
        let breakdown = [
            ("Living Expenses", 60_000.0),
            ("Home Loan EMIs", 40_000.0),
            ("Retirement Savings", 30_000.0),
            ("Kid-1 Education Saving", 10_000.0),
            ("Short-Term Goals", 10_000.0),
            ("Other Savings", 10_000.0),
        ];
        let savings = [
            ("Stocks", 500_000.0),
            ("Mutual Funds", 800_000.0),
            ("ESOPs", 200_000.0),
            ("EPF", 600_000.0),
            ("Gold Bond", 100_000.0),
            ("Fixed Deposits", 300_000.0),
            ("Other Savings", 50_000.0),
        ];

        Self {
            sample: SessionInput {
                personal_info: PersonalInfo {
                    current_age: 32,
                    retirement_age: 60,
                    dependents: vec![Dependent { age: 3, education_start_age: 18 }],
                },
                monthly_income: 200_000.0,
                monthly_breakdown: breakdown.iter().map(|(c, a)| BreakdownItem::new(*c, *a)).collect(),
                current_savings: savings.iter().map(|(c, a)| (c.to_string(), *a)).collect(),
                annual_savings_increase: 0.0,
            },
            default_expected_return_pct: 12.0,
        }
    }

    /// Load from `path` when it exists, otherwise fall back to the built-in sample
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            load_assumptions(path)
        } else {
            log::warn!("{} not found, using built-in defaults", path.display());
            Ok(Self::default_sample())
        }
    }

    /// Projection config at the default expected return
    pub fn projection_config(&self, model: GrowthModel) -> ProjectionConfig {
        ProjectionConfig::from_percent(self.default_expected_return_pct, model)
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_sample()
    }
}
